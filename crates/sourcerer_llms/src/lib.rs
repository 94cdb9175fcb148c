//! sourcerer-llms — chat-completions client for OpenRouter-compatible APIs.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                ProviderRegistry                │
//! │  ┌──────────────────────────────────────────┐  │
//! │  │  HashMap<String, Arc<dyn Provider>>      │  │
//! │  └──────────────────────────────────────────┘  │
//! │                      │                         │
//! │                      ▼                         │
//! │            ┌──────────────────┐                │
//! │            │ OpenRouterProvider│               │
//! │            └──────────────────┘                │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! The wire contract is deliberately loose: requests are typed, responses
//! are walked as JSON with an ordered list of known content paths
//! ([`convert::extract_content`]), and anything that matches none of them
//! surfaces as [`Error::UnexpectedResponseShape`].

pub mod convert;
pub mod error;
pub mod models;
pub mod openrouter;
pub mod provider;
pub mod types;

pub use convert::{build_messages, extract_content};
pub use error::{Error, Result};
pub use models::{default_models, AiModel, ModelCatalog};
pub use openrouter::OpenRouterProvider;
pub use provider::{Provider, ProviderRegistry};
pub use types::{ChatMessage, ChatRequest, OpenRouterConfig};
