//! Claude API integration for the store assistant.

mod client;
mod error;
mod types;

pub use client::ClaudeClient;
pub use types::{ContentBlock, Message, StopReason, Tool};
