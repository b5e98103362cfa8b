//! # Boardwatch Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The classification engine that buckets cards by due date
//! - The message renderer that assembles the outgoing block sequence
//! - Port/adapter interfaces (traits) for the task-board and messaging
//!   collaborators
//!
//! ## Architecture Principles
//! - Only depends on `boardwatch-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod classify;
pub mod notify;

// Re-export specific items to avoid ambiguity
pub use classify::{bucket_for, ClassificationEngine, ClassifierConfig, TaskBoardGateway};
pub use notify::{build_blocks, DeliveryOutcome, MessageGateway, MessageRenderer, RenderOptions};
