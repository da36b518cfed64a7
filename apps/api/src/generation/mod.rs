//! AI assist — tracks the single in-flight field, calls the text generator,
//! and merges the result back into the aggregate.
//!
//! Race policy for superseded calls: every call carries a token from the
//! session's counter. A completion whose token is no longer current is
//! discarded outright — no merge, no marker change — so the last-triggered
//! call always decides the final state, regardless of network ordering.
//! Nothing is ever cancelled; an earlier call simply resolves into a stale
//! token.

pub mod handlers;
pub mod prompts;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::session::{Completion, EditorSession, StateSnapshot};

/// Identifier of a generatable field: the summary, or one experience
/// entry's description. Wire form is `summary` / `experience-<uuid>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationField {
    Summary,
    Experience(Uuid),
}

impl fmt::Display for GenerationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationField::Summary => write!(f, "summary"),
            GenerationField::Experience(id) => write!(f, "experience-{id}"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unrecognized generation field tag: '{0}'")]
pub struct InvalidFieldTag(String);

impl FromStr for GenerationField {
    type Err = InvalidFieldTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "summary" {
            return Ok(GenerationField::Summary);
        }
        if let Some(raw) = s.strip_prefix("experience-") {
            if let Ok(id) = Uuid::parse_str(raw) {
                return Ok(GenerationField::Experience(id));
            }
        }
        Err(InvalidFieldTag(s.to_string()))
    }
}

/// How a generation call ended, as seen by its own caller.
#[derive(Debug)]
pub enum GenerationOutcome {
    /// The text was merged and this is the resulting snapshot.
    Applied(StateSnapshot),
    /// A later call took over the in-flight slot; this call's result was
    /// dropped and the model reflects the later call only.
    Superseded,
}

/// Runs one generate-for-field call end to end: marks the field in-flight,
/// invokes the generator with a prompt built from current field values, and
/// resolves the result against the session's token. Failures of a
/// still-current call surface as a generation error with the model
/// untouched.
pub async fn generate_for_field(
    session: &EditorSession,
    generator: &dyn TextGenerator,
    field: GenerationField,
) -> Result<GenerationOutcome, AppError> {
    let (token, prompt) = session
        .begin_generation(field, |data| prompts::prompt_for(field, data))
        .await?;
    debug!("generation started: field={field} token={token}");

    let result = generator.generate(&prompt).await;

    match session
        .complete_generation(token, result.map_err(|e| e.to_string()))
        .await
    {
        Completion::Applied(snapshot) => Ok(GenerationOutcome::Applied(snapshot)),
        Completion::Failed(message) => Err(AppError::Generation(message)),
        Completion::Discarded => {
            debug!("generation result discarded: field={field} token={token}");
            Ok(GenerationOutcome::Superseded)
        }
    }
}
