//! Message rendering and delivery

pub mod ports;
pub mod renderer;

pub use ports::MessageGateway;
pub use renderer::{build_blocks, DeliveryOutcome, MessageRenderer, RenderOptions};
