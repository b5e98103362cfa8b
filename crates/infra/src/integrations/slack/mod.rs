//! Slack Web API integration

mod client;

pub use client::SlackClient;
