//! sourcerer-core — data model and pure logic for the Open Sourcerer
//! assistant core.
//!
//! Everything here is synchronous and side-effect free: extracting insertable
//! code from raw model output, grouping diagnostics into a fix target,
//! building bounded completion contexts, and keeping per-context conversation
//! history. The async request path lives in `sourcerer-runtime`, the provider
//! wire format in `sourcerer-llms`.

pub mod context;
pub mod diagnostics;
pub mod extract;
pub mod history;
pub mod prompts;

pub use context::{CompletionContext, CONTEXT_WINDOW_LINES};
pub use diagnostics::{fix_target, group_by_line, Diagnostic, DiagnosticGroup, Severity};
pub use extract::extract_code;
pub use history::{ChatRole, ChatTurn, Conversation, ConversationRegistry};
