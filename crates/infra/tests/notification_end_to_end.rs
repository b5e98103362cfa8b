//! Full-run integration test: real HTTP adapters against mock servers.

use std::sync::Arc;

use boardwatch_core::{
    ClassificationEngine, ClassifierConfig, DeliveryOutcome, MessageRenderer, RenderOptions,
};
use boardwatch_domain::config::{SlackConfig, TrelloConfig};
use boardwatch_infra::{SlackClient, TrelloClient};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetches_classifies_and_posts_to_slack() {
    let trello_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1/lists/list-1/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": "File report",
                "url": "https://trello.test/c/1",
                "due": "2024-05-30T09:00:00.000Z",
                "idLabels": [],
            },
            {
                "name": "Skipped",
                "url": "https://trello.test/c/2",
                "due": "2024-05-29T09:00:00.000Z",
                "idLabels": ["L1"],
            },
        ])))
        .mount(&trello_server)
        .await;

    let slack_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat.postMessage"))
        .and(body_partial_json(json!({
            "channel": "#tasks",
            "blocks": [
                {"type": "header", "text": {"type": "plain_text", "text": "Upcoming Due Trello Tasks"}},
                {"type": "divider"},
                {"type": "header", "text": {"type": "plain_text", "text": "Overdue (1 item)"}},
                {"type": "section", "text": {"type": "mrkdwn", "text": "<https://trello.test/c/1|File report>"}},
                {"type": "context", "elements": [{"type": "mrkdwn", "text": "*Due Date:* 5/30/2024"}]},
            ],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&slack_server)
        .await;

    let trello_config =
        TrelloConfig { api_key: "key-1".to_string(), api_token: "token-1".to_string() };
    let trello = Arc::new(TrelloClient::with_base_url(&trello_config, trello_server.uri()));

    let engine = ClassificationEngine::new(
        trello,
        ClassifierConfig {
            lists: vec!["list-1".to_string()],
            ignore_labels: vec!["L1".to_string()],
            check_date: Some("2024-06-01".to_string()),
            ..ClassifierConfig::default()
        },
    )
    .unwrap();

    let collection = engine.execute_check().await.unwrap();
    assert_eq!(collection.len(), 1);

    let slack_config = SlackConfig { bot_token: "xoxb-test".to_string() };
    let slack = Arc::new(SlackClient::with_base_url(&slack_config, slack_server.uri()));
    let renderer = MessageRenderer::new(
        slack,
        RenderOptions { channel: Some("#tasks".to_string()), overdue_mention: None },
    );

    let outcome = renderer.deliver(&collection).await.unwrap();
    assert_eq!(outcome, DeliveryOutcome::Sent);
}
