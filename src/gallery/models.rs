//! Data model for the gallery index and the reveal target.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One selectable image in the fetched gallery index.
///
/// The index is a JSON array of objects; only `url` is consumed, any other
/// attributes the server includes are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub url: String,
}

/// Why a reveal did not produce an image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevealError {
    /// Network-level failure or rejected response.
    #[error("index fetch failed: {0}")]
    Fetch(String),

    /// Response body was not a valid JSON index.
    #[error("index was not valid JSON: {0}")]
    Parse(String),

    /// The index was fetched successfully but contains no entries.
    #[error("index contains no entries")]
    EmptyIndex,
}

/// Result of resolving one reveal: the chosen URL, or why there is none.
pub type RevealResult = Result<String, RevealError>;

/// Observable state of the target image widget.
///
/// Owned by the hosting panel; the component only ever changes it through
/// [`TargetState::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetState {
    /// Whether the target is shown at all.
    pub visible: bool,
    /// URL the target currently displays, verbatim from the index.
    pub source: Option<String>,
}

impl TargetState {
    /// Apply a resolved reveal to the target.
    ///
    /// Success shows the target with the chosen URL as its source. Failure
    /// hides the target and leaves the previous source untouched.
    pub fn apply(&mut self, result: &RevealResult) {
        match result {
            Ok(url) => {
                self.visible = true;
                self.source = Some(url.clone());
            }
            Err(_) => {
                self.visible = false;
            }
        }
    }
}
