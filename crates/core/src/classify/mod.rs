//! Card classification domain

pub mod engine;
pub mod ports;

pub use engine::{bucket_for, ClassificationEngine, ClassifierConfig};
pub use ports::TaskBoardGateway;
