//! Translate-then-execute, as one bounded call.

use std::time::Duration;

use super::{CollabError, Collaborators};

/// Outcome of running an unknown command through the collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated {
    /// The modern command the translator produced.
    pub command: String,
    /// What the executor reported for it.
    pub output: String,
}

impl Translated {
    /// Text shown to the user: the translated command, then its output.
    pub fn render(&self) -> String {
        format!("Executing: {}\n{}", self.command, self.output)
    }
}

/// Translate `dos_command` and run the translation.
///
/// The whole round-trip is bounded by `timeout`. An empty translation is
/// [`CollabError::EmptyTranslation`].
pub async fn translate_and_execute(
    collaborators: &Collaborators,
    dos_command: &str,
    timeout: Duration,
) -> Result<Translated, CollabError> {
    let round_trip = async {
        let command = collaborators.translator.translate(dos_command).await?;
        let command = command.trim().to_string();
        if command.is_empty() {
            return Err(CollabError::EmptyTranslation);
        }
        tracing::debug!(dos_command, translated = %command, "translated");

        let execution = collaborators.executor.execute(&command).await?;
        Ok(Translated { command, output: execution.output })
    };

    tokio::time::timeout(timeout, round_trip)
        .await
        .map_err(|_| CollabError::Timeout(timeout))?
}
