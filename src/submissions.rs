use std::error::Error;

use bson::{doc, Document};
use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::trello_models::Card;

/// One artist submission lifted out of a Trello card.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub date_submitted: DateTime<Utc>,
    pub bandcamp_uri: String,
    pub card_title: String,
    pub trello_uri: String,
    pub is_assigned: bool,
}

impl Submission {
    /// The flat document shape stored in the submissions collection.
    pub fn into_document(self) -> Document {
        doc! {
            "date_submitted": bson::DateTime::from_chrono(self.date_submitted),
            "bandcamp_uri": self.bandcamp_uri,
            "card_title": self.card_title,
            "trello_uri": self.trello_uri,
            "is_assigned": self.is_assigned,
        }
    }
}

/// Where the pipeline gets its cards. Implemented over the Trello API by
/// [`crate::trello::TrelloClient`]; tests supply in-memory sources.
pub trait CardSource {
    fn open_cards(&self) -> Result<Vec<Card>, Box<dyn Error>>;

    /// Resolving a card's creation date is a separate, lazy lookup.
    fn creation_date(&self, card: &Card) -> Result<DateTime<Utc>, Box<dyn Error>>;
}

/// First whitespace-delimited token of the description containing
/// "bandcamp.com", surrounding punctuation and all.
pub fn extract_bandcamp_url(description: Option<&str>) -> Option<&str> {
    description?
        .split_whitespace()
        .find(|word| word.contains("bandcamp.com"))
}

/// Builds the submission for a card, or `None` when its description has no
/// Bandcamp link. Only cards that pass extraction pay for the creation-date
/// lookup.
pub fn submission_from_card(
    source: &impl CardSource,
    card: &Card,
) -> Result<Option<Submission>, Box<dyn Error>> {
    let bandcamp_uri = match extract_bandcamp_url(card.desc.as_deref()) {
        Some(uri) => uri.to_string(),
        None => return Ok(None),
    };

    let date_submitted = source.creation_date(card)?;

    Ok(Some(Submission {
        date_submitted,
        bandcamp_uri,
        card_title: card.name.clone(),
        trello_uri: card.url.clone(),
        // True when nobody has claimed the card. The name predates this job
        // and every reader of the collection expects it.
        is_assigned: card.id_members.is_empty(),
    }))
}

/// Runs the fetch/transform stages: every open card with a Bandcamp link
/// becomes one document, in board order; cards without one are skipped. Any
/// other failure aborts the run.
pub fn import_submissions(source: &impl CardSource) -> Result<Vec<Document>, Box<dyn Error>> {
    let cards = source.open_cards()?;

    let mut submissions = Vec::new();
    for card in &cards {
        match submission_from_card(source, card)? {
            Some(submission) => submissions.push(submission.into_document()),
            None => debug!("Skipping card \"{}\": no Bandcamp link.", card.name),
        }
    }

    info!(
        "Collected {} submissions from {} open cards.",
        submissions.len(),
        cards.len()
    );
    Ok(submissions)
}
