//! Boardwatch - due-date notifications for Trello boards, delivered to Slack.
//!
//! Thin orchestration binary: loads configuration, wires the HTTP clients
//! into the classification engine and message renderer, runs one check, and
//! reports the outcome. Scheduling belongs to the environment (cron, systemd
//! timers), not to this process.

use std::process::ExitCode;
use std::sync::Arc;

use boardwatch_core::{
    ClassificationEngine, ClassifierConfig, DeliveryOutcome, MessageRenderer, RenderOptions,
};
use boardwatch_domain::Result;
use boardwatch_infra::{config, SlackClient, TrelloClient};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(DeliveryOutcome::Sent) => {
            info!("notification run finished, message sent");
            ExitCode::SUCCESS
        }
        Ok(DeliveryOutcome::NothingToSend) => {
            info!("notification run finished, nothing to send");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "notification run failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<DeliveryOutcome> {
    let config = config::load()?;

    let trello = Arc::new(TrelloClient::new(&config.trello));
    let slack = Arc::new(SlackClient::new(&config.slack));

    let engine = ClassificationEngine::new(trello, ClassifierConfig::from(&config.notification))?;
    let collection = engine.execute_check().await?;
    info!(items = collection.len(), "classification complete");

    let renderer = MessageRenderer::new(
        slack,
        RenderOptions {
            channel: config.notification.channel.clone(),
            overdue_mention: config.notification.overdue_mention.clone(),
        },
    );

    renderer.deliver(&collection).await
}
