//! Chat message wire model (Slack Block Kit subset).

use serde::{Deserialize, Serialize};

/// Text object carried inside blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    /// Plain text, used by header blocks.
    PlainText {
        /// Literal text content.
        text: String,
    },
    /// Markdown-flavored text, supports `<url|label>` link syntax.
    Mrkdwn {
        /// Markdown source.
        text: String,
    },
}

/// One content block of the rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Prominent heading.
    Header {
        /// Heading text, always plain.
        text: TextObject,
    },
    /// Horizontal rule.
    Divider,
    /// Markdown body text.
    Section {
        /// Section content.
        text: TextObject,
    },
    /// Small annotation line, used for the due-date footer.
    Context {
        /// Annotation elements.
        elements: Vec<TextObject>,
    },
}

impl Block {
    /// Header block with plain text.
    pub fn header(text: impl Into<String>) -> Self {
        Block::Header { text: TextObject::PlainText { text: text.into() } }
    }

    /// Divider block.
    pub fn divider() -> Self {
        Block::Divider
    }

    /// Section block with markdown text.
    pub fn section(text: impl Into<String>) -> Self {
        Block::Section { text: TextObject::Mrkdwn { text: text.into() } }
    }

    /// Context block with a single markdown element.
    pub fn context(text: impl Into<String>) -> Self {
        Block::Context { elements: vec![TextObject::Mrkdwn { text: text.into() }] }
    }
}

/// Message payload handed to the messaging gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    /// Ordered content blocks.
    pub blocks: Vec<Block>,
    /// Target channel override; omitted from the wire form when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn header_block_serializes_to_block_kit_shape() {
        let value = serde_json::to_value(Block::header("Upcoming Due Trello Tasks")).unwrap();
        assert_eq!(
            value,
            json!({"type": "header", "text": {"type": "plain_text", "text": "Upcoming Due Trello Tasks"}})
        );
    }

    #[test]
    fn divider_block_carries_only_its_tag() {
        let value = serde_json::to_value(Block::divider()).unwrap();
        assert_eq!(value, json!({"type": "divider"}));
    }

    #[test]
    fn section_block_uses_mrkdwn_text() {
        let value = serde_json::to_value(Block::section("<https://example.test|A card>")).unwrap();
        assert_eq!(
            value,
            json!({"type": "section", "text": {"type": "mrkdwn", "text": "<https://example.test|A card>"}})
        );
    }

    #[test]
    fn context_block_nests_elements() {
        let value = serde_json::to_value(Block::context("*Due Date:* 5/30/2024")).unwrap();
        assert_eq!(
            value,
            json!({"type": "context", "elements": [{"type": "mrkdwn", "text": "*Due Date:* 5/30/2024"}]})
        );
    }

    #[test]
    fn payload_omits_absent_channel() {
        let payload = MessagePayload { blocks: vec![Block::divider()], channel: None };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({"blocks": [{"type": "divider"}]}));
    }

    #[test]
    fn payload_includes_channel_override() {
        let payload =
            MessagePayload { blocks: vec![Block::divider()], channel: Some("#tasks".to_string()) };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({"blocks": [{"type": "divider"}], "channel": "#tasks"}));
    }

    #[test]
    fn payload_round_trips_through_json() {
        let payload = MessagePayload {
            blocks: vec![Block::header("x"), Block::divider(), Block::context("y")],
            channel: Some("#tasks".to_string()),
        };
        let restored: MessagePayload =
            serde_json::from_str(&serde_json::to_string(&payload).unwrap()).unwrap();
        assert_eq!(restored, payload);
    }
}
