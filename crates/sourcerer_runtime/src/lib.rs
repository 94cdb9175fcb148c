//! sourcerer-runtime — the async side of the assistant core.
//!
//! Editor keystrokes flow through here: a trigger lands in the per-context
//! [`CompletionPipeline`], the [`Debouncer`] holds it until the typing burst
//! quiets down, the provider is called, and the extracted code is delivered
//! over a channel — unless a later trigger has already been applied, in
//! which case the stale response is dropped.
//!
//! ```text
//! keystroke → ContextRegistry → CompletionPipeline
//!                                    │ debounce (cancel-on-supersede)
//!                                    ▼
//!                              Provider::chat
//!                                    │ extract_code
//!                                    ▼
//!                       seq > watermark ? deliver : drop
//! ```

pub mod chat;
pub mod config;
pub mod debounce;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod requests;

pub use chat::send_chat_message;
pub use config::SourcererConfig;
pub use debounce::Debouncer;
pub use error::{Result, RuntimeError};
pub use pipeline::{Completion, CompletionPipeline};
pub use registry::{ContextRegistry, ContextState};
