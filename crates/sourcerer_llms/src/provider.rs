//! Provider trait and registry.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::types::ChatRequest;

/// A chat-completions backend. The one obligation is turning a request into
/// the assistant's text; everything upstream (debouncing, sequencing,
/// extraction) is provider-agnostic.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable identifier, e.g. `"openrouter"`.
    fn provider_id(&self) -> &str;

    /// Send a chat completion request and return the assistant's text.
    async fn chat(&self, request: ChatRequest) -> Result<String>;
}

/// Registry of provider implementations, keyed by provider ID.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under the given ID. Returns `self` for chaining.
    pub fn register<P: Provider + 'static>(mut self, id: impl Into<String>, provider: P) -> Self {
        self.providers.insert(id.into(), Arc::new(provider));
        self
    }

    /// Look up a provider by ID.
    pub fn get_provider(&self, id: &str) -> Result<Arc<dyn Provider>> {
        self.providers
            .get(id)
            .cloned()
            .ok_or_else(|| Error::ProviderNotFound(id.to_string()))
    }

    /// List all registered provider IDs.
    pub fn list_providers(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockProvider {
        id: &'static str,
    }

    #[async_trait]
    impl Provider for MockProvider {
        fn provider_id(&self) -> &str {
            self.id
        }

        async fn chat(&self, _request: ChatRequest) -> Result<String> {
            Ok("mock reply".to_string())
        }
    }

    #[test]
    fn register_and_get_provider() {
        let registry = ProviderRegistry::new().register("test", MockProvider { id: "test" });

        let provider = registry.get_provider("test");
        assert!(provider.is_ok());
        assert_eq!(provider.unwrap().provider_id(), "test");
    }

    #[test]
    fn provider_not_found() {
        let registry = ProviderRegistry::new();
        let result = registry.get_provider("nonexistent");
        assert!(matches!(result, Err(Error::ProviderNotFound(_))));
    }

    #[test]
    fn list_providers() {
        let registry = ProviderRegistry::new()
            .register("alpha", MockProvider { id: "alpha" })
            .register("beta", MockProvider { id: "beta" });

        let mut ids = registry.list_providers();
        ids.sort();
        assert_eq!(ids, vec!["alpha", "beta"]);
    }
}
