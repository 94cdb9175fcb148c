//! Debounced, sequence-guarded completion request path.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use sourcerer_core::{extract_code, CompletionContext};
use sourcerer_llms::{ChatRequest, Provider};

use crate::debounce::Debouncer;
use crate::error::Result;
use crate::requests::completion_messages;

/// A completion ready for the host to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Context key this completion belongs to.
    pub context_key: String,
    /// Sequence number of the trigger that produced it.
    pub seq: u64,
    /// The extracted code payload.
    pub code: String,
}

/// One completion pipeline per editing context.
///
/// Triggers are debounced; each is stamped with a monotonically increasing
/// sequence number at schedule time. When a response resolves it is delivered
/// only if its sequence number is still above the highest one already
/// applied, so two in-flight requests resolving out of order can never let
/// the earlier result overwrite the later one.
pub struct CompletionPipeline {
    provider: Arc<dyn Provider>,
    model: String,
    context_key: String,
    debouncer: Debouncer,
    next_seq: AtomicU64,
    /// Highest sequence number delivered so far; 0 means none.
    last_applied: Arc<AtomicU64>,
    completions_tx: mpsc::Sender<Completion>,
}

impl CompletionPipeline {
    pub fn new(
        provider: Arc<dyn Provider>,
        model: impl Into<String>,
        context_key: impl Into<String>,
        completions_tx: mpsc::Sender<Completion>,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            context_key: context_key.into(),
            debouncer: Debouncer::new(),
            next_seq: AtomicU64::new(1),
            last_applied: Arc::new(AtomicU64::new(0)),
            completions_tx,
        }
    }

    /// Schedule a debounced completion request for `context`. A trigger
    /// arriving before the previous one fires supersedes it; only the last
    /// trigger of a burst goes out on the wire.
    ///
    /// Request failures produce no completion: the error is logged and the
    /// host simply never hears about that trigger.
    pub fn trigger(&self, context: CompletionContext, delay_ms: i64) -> Result<()> {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        let provider = Arc::clone(&self.provider);
        let model = self.model.clone();
        let context_key = self.context_key.clone();
        let last_applied = Arc::clone(&self.last_applied);
        let tx = self.completions_tx.clone();

        self.debouncer.schedule(delay_ms, async move {
            let request = ChatRequest::new(model, completion_messages(&context));
            let raw = match provider.chat(request).await {
                Ok(raw) => raw,
                Err(err) => {
                    warn!(%err, seq, "completion request failed");
                    return;
                }
            };
            let code = extract_code(&raw);

            // Advance the watermark, or drop the response if a later
            // trigger has been applied while this one was in flight.
            let mut applied = last_applied.load(Ordering::SeqCst);
            loop {
                if seq <= applied {
                    debug!(seq, applied, "dropping stale completion");
                    return;
                }
                match last_applied.compare_exchange(
                    applied,
                    seq,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                ) {
                    Ok(_) => break,
                    Err(current) => applied = current,
                }
            }

            if tx
                .send(Completion {
                    context_key,
                    seq,
                    code,
                })
                .await
                .is_err()
            {
                debug!("completion receiver dropped");
            }
        })
    }

    /// Cancel the armed trigger, if any. In-flight network calls are not
    /// cancelled; their results are filtered by the sequence watermark.
    pub fn cancel_pending(&self) {
        self.debouncer.cancel_pending();
    }

    pub fn is_armed(&self) -> bool {
        self.debouncer.is_armed()
    }
}
