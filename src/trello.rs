use std::error::Error;

use chrono::{DateTime, TimeZone, Utc};
use log::info;
use reqwest::blocking::Client;

use crate::config::TrelloConfig;
use crate::submissions::CardSource;
use crate::trello_models::{Action, Card};

const API_URL: &str = "https://api.trello.com/1";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 5.1; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/46.0.2486.0 Safari/537.36 Edge/13.10586";

pub struct TrelloClient {
    board_id: String,
    http_token_parameters: String,
    http_client: Client,
}

impl TrelloClient {
    pub fn new(config: &TrelloConfig) -> Result<TrelloClient, Box<dyn Error>> {
        Ok(TrelloClient {
            board_id: config.board_id.clone(),
            http_token_parameters: format!(
                "key={}&token={}",
                config.api_key, config.oauth_token_key
            ),
            http_client: Client::builder().user_agent(USER_AGENT).build()?,
        })
    }
}

impl CardSource for TrelloClient {
    fn open_cards(&self) -> Result<Vec<Card>, Box<dyn Error>> {
        info!("Fetching open cards for board {} ...", self.board_id);

        let url = format!(
            "{}/boards/{}/cards?filter=open&fields=id,name,desc,url,idMembers&{}",
            API_URL, self.board_id, self.http_token_parameters
        );
        let cards: Vec<Card> = self
            .http_client
            .get(&url)
            .send()?
            .error_for_status()?
            .json()?;

        info!("Found {} open cards.", cards.len());
        Ok(cards)
    }

    fn creation_date(&self, card: &Card) -> Result<DateTime<Utc>, Box<dyn Error>> {
        info!("Fetching creation date for card {} ...", card.id);

        let url = format!(
            "{}/cards/{}/actions?filter=createCard,copyCard&{}",
            API_URL, card.id, self.http_token_parameters
        );
        let actions: Vec<Action> = self
            .http_client
            .get(&url)
            .send()?
            .error_for_status()?
            .json()?;

        match actions.first() {
            Some(action) => Ok(action.date),
            // Copied and converted cards can outlive their creating action;
            // the card id itself starts with the creation time.
            None => creation_date_from_id(&card.id).ok_or_else(|| {
                format!(
                    "card {} has no creation action and an undecodable id",
                    card.id
                )
                .into()
            }),
        }
    }
}

/// Trello ids lead with the object's creation time as 8 hex digits of unix
/// seconds.
pub fn creation_date_from_id(id: &str) -> Option<DateTime<Utc>> {
    let seconds = i64::from_str_radix(id.get(..8)?, 16).ok()?;
    Utc.timestamp_opt(seconds, 0).single()
}
