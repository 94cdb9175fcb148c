//! Per-context assistant state, looked up from an explicit registry.
//!
//! Each editing context (document identity, chat panel instance) gets its
//! own debounce timer and its own conversation history. Nothing here is
//! process-wide.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;

use sourcerer_core::Conversation;
use sourcerer_llms::Provider;

use crate::pipeline::{Completion, CompletionPipeline};

/// The state one context owns: a completion pipeline with its own debounce
/// timer and sequence counter, and the context's conversation history.
pub struct ContextState {
    pub pipeline: CompletionPipeline,
    pub conversation: Conversation,
}

/// Lazily creates and hands out [`ContextState`] per context key. All
/// pipelines share the provider and deliver into the same completions
/// channel; each `Completion` carries its context key.
pub struct ContextRegistry {
    provider: Arc<dyn Provider>,
    model: String,
    completions_tx: mpsc::Sender<Completion>,
    contexts: HashMap<String, ContextState>,
}

impl ContextRegistry {
    pub fn new(
        provider: Arc<dyn Provider>,
        model: impl Into<String>,
        completions_tx: mpsc::Sender<Completion>,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            completions_tx,
            contexts: HashMap::new(),
        }
    }

    /// The state for `key`, created on first use.
    pub fn context(&mut self, key: &str) -> &mut ContextState {
        self.contexts.entry(key.to_string()).or_insert_with(|| {
            let pipeline = CompletionPipeline::new(
                Arc::clone(&self.provider),
                self.model.clone(),
                key,
                self.completions_tx.clone(),
            );
            ContextState {
                pipeline,
                conversation: Conversation::new(),
            }
        })
    }

    /// Drop a context, cancelling any armed trigger first.
    pub fn remove(&mut self, key: &str) -> Option<ContextState> {
        let state = self.contexts.remove(key)?;
        state.pipeline.cancel_pending();
        Some(state)
    }

    pub fn context_keys(&self) -> Vec<String> {
        self.contexts.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}
