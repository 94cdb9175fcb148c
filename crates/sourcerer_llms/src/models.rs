//! Model catalog: a built-in list plus user-added custom models persisted
//! as a flat JSON array.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

/// A selectable model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiModel {
    pub id: String,
    pub name: String,
    pub provider: String,
    #[serde(default)]
    pub is_custom: bool,
}

impl AiModel {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            provider: provider.into(),
            is_custom: false,
        }
    }

    pub fn custom(
        id: impl Into<String>,
        name: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            is_custom: true,
            ..Self::new(id, name, provider)
        }
    }
}

/// The built-in model list.
pub fn default_models() -> Vec<AiModel> {
    vec![
        AiModel::new("openai/gpt-4", "GPT-4", "OpenAI"),
        AiModel::new("openai/gpt-3.5-turbo", "GPT-3.5 Turbo", "OpenAI"),
        AiModel::new("anthropic/claude-3-opus", "Claude 3 Opus", "Anthropic"),
        AiModel::new("anthropic/claude-3-sonnet", "Claude 3 Sonnet", "Anthropic"),
        AiModel::new("google/gemini-pro", "Gemini Pro", "Google"),
        AiModel::new("meta/llama-3.1-70b", "Llama 3.1 70B", "Meta"),
    ]
}

/// Built-in models plus a persistent, user-editable custom list. The store
/// is a flat JSON array with no schema evolution; a missing or corrupt file
/// degrades to an empty custom list.
pub struct ModelCatalog {
    path: PathBuf,
    custom: Vec<AiModel>,
}

impl ModelCatalog {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let custom = read_custom_models(&path);
        Self { path, custom }
    }

    /// Defaults followed by the custom models.
    pub fn all(&self) -> Vec<AiModel> {
        let mut models = default_models();
        models.extend(self.custom.iter().cloned());
        models
    }

    pub fn custom(&self) -> &[AiModel] {
        &self.custom
    }

    /// Add a custom model and persist the list. Returns `false` without
    /// writing when a model with the same id already exists.
    pub fn add_custom(&mut self, model: AiModel) -> Result<bool> {
        if self.custom.iter().any(|m| m.id == model.id) {
            return Ok(false);
        }
        self.custom.push(AiModel {
            is_custom: true,
            ..model
        });
        self.persist()?;
        Ok(true)
    }

    /// Remove a custom model by id and persist. Returns whether anything
    /// was removed.
    pub fn remove_custom(&mut self, id: &str) -> Result<bool> {
        let before = self.custom.len();
        self.custom.retain(|m| m.id != id);
        if self.custom.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.custom)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn read_custom_models(path: &Path) -> Vec<AiModel> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return Vec::new(),
    };
    match serde_json::from_str(&contents) {
        Ok(models) => models,
        Err(err) => {
            warn!(path = %path.display(), %err, "unreadable custom model list, starting empty");
            Vec::new()
        }
    }
}
