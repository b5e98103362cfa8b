//! Trello REST API integration

mod client;

pub use client::TrelloClient;
