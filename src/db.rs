use std::error::Error;

use bson::{doc, Document};
use log::info;
use mongodb::sync::Client;

use crate::config::MongoConfig;

const DATABASE: &str = "wyrd_bandcamp";
const COLLECTION: &str = "submissions";

/// Replaces the submissions collection with this run's documents and reports
/// both counts to the operator. The clear makes reruns over identical board
/// data land on identical collection contents.
pub fn insert_submissions(
    config: &MongoConfig,
    submissions: Vec<Document>,
) -> Result<usize, Box<dyn Error>> {
    let client = Client::with_uri_str(&config.connection_uri())?;
    let collection = client.database(DATABASE).collection::<Document>(COLLECTION);

    let cleared = collection.delete_many(doc! {}, None)?;
    info!("Cleared {} submissions from the last run.", cleared.deleted_count);

    let total = submissions.len();
    // The driver rejects empty batches.
    let inserted = if submissions.is_empty() {
        0
    } else {
        collection.insert_many(&submissions, None)?.inserted_ids.len()
    };

    println!("total number of submissions: {}", total);
    println!("total number of inserted submissions: {}", inserted);

    Ok(inserted)
}
