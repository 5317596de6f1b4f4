//! Collaborators: the services the interpreter leans on for commands it
//! does not implement itself.
//!
//! Three ports, each an `async_trait`:
//!
//! - [`Translator`] maps a DOS command line to a modern shell command.
//! - [`Executor`] "runs" the translated command and returns its text output.
//!   Nothing is actually executed; implementations simulate.
//! - [`Suggester`] proposes completions for a partially typed command.
//!
//! [`Collaborators`] bundles one of each. The offline set needs no network
//! and is what tests and unconfigured sessions use; [`ChatCollaborator`]
//! talks to an OpenAI-compatible chat-completions endpoint.

mod chat;
mod offline;
mod pipeline;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use chat::ChatCollaborator;
pub use offline::{OfflineSuggester, OfflineTranslator, SimulatedExecutor, DOS_VERBS};
pub use pipeline::{translate_and_execute, Translated};

use crate::config::AiConfig;

/// Errors from a collaborator call.
#[derive(Debug, Error)]
pub enum CollabError {
    #[error("Failed to translate DOS command.")]
    EmptyTranslation,

    #[error("collaborator timed out after {0:?}")]
    Timeout(Duration),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("bad response: {0}")]
    Response(String),

    #[error("{0} is not set")]
    MissingApiKey(String),
}

/// What an [`Executor`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub output: String,
}

/// DOS command line to modern shell command.
#[async_trait]
pub trait Translator: Send + Sync {
    /// An empty `Ok` means "no translation" and is treated as a failure by
    /// the caller.
    async fn translate(&self, dos_command: &str) -> Result<String, CollabError>;
}

#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, command: &str) -> Result<Execution, CollabError>;
}

#[async_trait]
pub trait Suggester: Send + Sync {
    async fn suggest(&self, partial_command: &str) -> Result<Vec<String>, CollabError>;
}

/// One of each collaborator, shared by a session.
#[derive(Clone)]
pub struct Collaborators {
    pub translator: Arc<dyn Translator>,
    pub executor: Arc<dyn Executor>,
    pub suggester: Arc<dyn Suggester>,
}

impl Collaborators {
    /// Network-free collaborators.
    pub fn offline() -> Self {
        Self {
            translator: Arc::new(OfflineTranslator),
            executor: Arc::new(SimulatedExecutor),
            suggester: Arc::new(OfflineSuggester::default()),
        }
    }

    /// Use the chat endpoint when its API key is in the environment,
    /// otherwise fall back to [`Collaborators::offline`].
    ///
    /// Execution is always simulated.
    pub fn from_config(ai: &AiConfig) -> Self {
        match ChatCollaborator::from_config(ai) {
            Ok(chat) => {
                tracing::info!(endpoint = %ai.endpoint, model = %ai.model, "using chat collaborator");
                let chat = Arc::new(chat);
                Self {
                    translator: chat.clone(),
                    executor: Arc::new(SimulatedExecutor),
                    suggester: chat,
                }
            }
            Err(e) => {
                tracing::debug!("{e}; using offline collaborators");
                Self::offline()
            }
        }
    }

    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Arc::new(translator);
        self
    }

    pub fn with_executor(mut self, executor: impl Executor + 'static) -> Self {
        self.executor = Arc::new(executor);
        self
    }

    pub fn with_suggester(mut self, suggester: impl Suggester + 'static) -> Self {
        self.suggester = Arc::new(suggester);
        self
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}
