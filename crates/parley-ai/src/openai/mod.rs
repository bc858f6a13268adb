//! OpenAI chat completion client.
//!
//! Implements the `CompletionProvider` trait against the
//! `/chat/completions` endpoint of the OpenAI API, or any server that
//! speaks the same wire format (set `base_url`).

mod api;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
