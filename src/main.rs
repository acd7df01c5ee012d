use log::info;

use submissionbot::config::Config;
use submissionbot::db;
use submissionbot::submissions;
use submissionbot::trello::TrelloClient;

const CONFIG_PATH: &str = "config.toml";

fn main() {
    env_logger::init();

    let config = Config::load(CONFIG_PATH).expect("Configuration error");
    let trello = TrelloClient::new(&config.trello).expect("Trello client error");

    let submissions = submissions::import_submissions(&trello).expect("Trello import error");
    info!(
        "Imported {} submissions from board {}.",
        submissions.len(),
        config.trello.board_id
    );

    db::insert_submissions(&config.mongo, submissions).expect("MongoDB insert error");
}
