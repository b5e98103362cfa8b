//! Domain data types

pub mod bucket;
pub mod card;
pub mod item;
pub mod message;

pub use bucket::Bucket;
pub use card::Card;
pub use item::NotificationItem;
pub use message::{Block, MessagePayload, TextObject};
