//! End-to-end tests for the debounced, sequence-guarded completion path.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time::timeout;

use sourcerer_core::CompletionContext;
use sourcerer_llms::{ChatRequest, Provider};
use sourcerer_runtime::{Completion, CompletionPipeline, ContextRegistry};

/// Answers calls in order from a `(latency_ms, reply)` script, repeating the
/// last entry once the script runs out.
struct ScriptedProvider {
    script: Vec<(u64, &'static str)>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    fn new(script: Vec<(u64, &'static str)>) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    fn provider_id(&self) -> &str {
        "scripted"
    }

    async fn chat(&self, _request: ChatRequest) -> sourcerer_llms::Result<String> {
        let idx = self
            .calls
            .fetch_add(1, Ordering::SeqCst)
            .min(self.script.len() - 1);
        let (latency, reply) = self.script[idx];
        tokio::time::sleep(Duration::from_millis(latency)).await;
        Ok(reply.to_string())
    }
}

struct FailingProvider;

#[async_trait]
impl Provider for FailingProvider {
    fn provider_id(&self) -> &str {
        "failing"
    }

    async fn chat(&self, _request: ChatRequest) -> sourcerer_llms::Result<String> {
        Err(sourcerer_llms::Error::UnexpectedResponseShape)
    }
}

fn context() -> CompletionContext {
    CompletionContext::from_document("rust", "fn main() {\n    let x = \n}", 1, 12)
}

async fn recv(rx: &mut mpsc::Receiver<Completion>) -> Completion {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for completion")
        .expect("completions channel closed")
}

#[tokio::test]
async fn burst_of_triggers_sends_one_request() {
    let provider = Arc::new(ScriptedProvider::new(vec![(0, "```\nlet x = 1;\n```")]));
    let (tx, mut rx) = mpsc::channel(8);
    let pipeline = CompletionPipeline::new(provider.clone(), "test-model", "doc-a", tx);

    for _ in 0..4 {
        pipeline.trigger(context(), 50).unwrap();
    }

    let completion = recv(&mut rx).await;
    assert_eq!(completion.context_key, "doc-a");
    assert_eq!(completion.code, "let x = 1;");

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(provider.call_count(), 1);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn stale_response_never_overwrites_a_later_one() {
    // First request answers slowly, second quickly: the second resolves
    // first and is applied, so the first must be dropped when it lands.
    let provider = Arc::new(ScriptedProvider::new(vec![
        (250, "stale code"),
        (10, "fresh code"),
    ]));
    let (tx, mut rx) = mpsc::channel(8);
    let pipeline = CompletionPipeline::new(provider.clone(), "test-model", "doc-a", tx);

    pipeline.trigger(context(), 5).unwrap();
    // Let the first trigger fire and go in flight before retriggering.
    tokio::time::sleep(Duration::from_millis(60)).await;
    pipeline.trigger(context(), 5).unwrap();

    let first_delivered = recv(&mut rx).await;
    assert_eq!(first_delivered.code, "fresh code");
    assert_eq!(first_delivered.seq, 2);

    // Wait past the slow response; nothing further may arrive.
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert_eq!(provider.call_count(), 2);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn failed_request_produces_no_completion() {
    let (tx, mut rx) = mpsc::channel(8);
    let pipeline = CompletionPipeline::new(Arc::new(FailingProvider), "test-model", "doc-a", tx);

    pipeline.trigger(context(), 5).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(rx.try_recv().is_err());
    assert!(!pipeline.is_armed());
}

#[tokio::test]
async fn cancel_pending_stops_the_armed_trigger() {
    let provider = Arc::new(ScriptedProvider::new(vec![(0, "code")]));
    let (tx, mut rx) = mpsc::channel(8);
    let pipeline = CompletionPipeline::new(provider.clone(), "test-model", "doc-a", tx);

    pipeline.trigger(context(), 80).unwrap();
    assert!(pipeline.is_armed());
    pipeline.cancel_pending();
    pipeline.cancel_pending();

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(provider.call_count(), 0);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn registry_contexts_debounce_independently() {
    let provider = Arc::new(ScriptedProvider::new(vec![(0, "ok")]));
    let (tx, mut rx) = mpsc::channel(8);
    let mut registry = ContextRegistry::new(provider.clone(), "test-model", tx);

    registry.context("doc-a").pipeline.trigger(context(), 20).unwrap();
    registry.context("doc-b").pipeline.trigger(context(), 20).unwrap();

    let mut keys = vec![recv(&mut rx).await.context_key, recv(&mut rx).await.context_key];
    keys.sort();
    assert_eq!(keys, vec!["doc-a", "doc-b"]);
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn registry_remove_cancels_pending_work() {
    let provider = Arc::new(ScriptedProvider::new(vec![(0, "ok")]));
    let (tx, mut rx) = mpsc::channel(8);
    let mut registry = ContextRegistry::new(provider.clone(), "test-model", tx);

    registry.context("doc-a").pipeline.trigger(context(), 80).unwrap();
    assert_eq!(registry.len(), 1);
    registry.remove("doc-a");
    assert!(registry.is_empty());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(provider.call_count(), 0);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn registry_keeps_conversations_per_context() {
    let provider = Arc::new(ScriptedProvider::new(vec![(0, "ok")]));
    let (tx, _rx) = mpsc::channel(8);
    let mut registry = ContextRegistry::new(provider, "test-model", tx);

    registry.context("doc-a").conversation.push_user("question a");
    registry.context("doc-b").conversation.push_user("question b");
    registry.context("doc-a").conversation.push_assistant("answer a");

    assert_eq!(registry.context("doc-a").conversation.len(), 2);
    assert_eq!(registry.context("doc-b").conversation.len(), 1);
    let mut keys = registry.context_keys();
    keys.sort();
    assert_eq!(keys, vec!["doc-a", "doc-b"]);
}
