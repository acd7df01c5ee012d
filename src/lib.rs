//! Imports artist submissions from a Trello board into MongoDB.
//!
//! One synchronous pass per invocation: list the board's open cards, keep the
//! ones whose description carries a Bandcamp link, and replace the contents
//! of the submissions collection with the normalized records.

pub mod config;
pub mod db;
pub mod submissions;
pub mod trello;
pub mod trello_models;
