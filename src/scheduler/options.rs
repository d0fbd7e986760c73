//! Generation options.
//!
//! Deserializes from the caller's request shape:
//!
//! ```json
//! { "preference": "shortBreaks", "maxResults": 20 }
//! ```
//!
//! An unknown preference string is not an error: it degrades to "no
//! preference" and every schedule scores zero.

use serde::{Deserialize, Deserializer, Serialize};

use crate::scoring::Preference;

/// Result cap used when `max_results` is unset or zero.
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Options for one generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Ranking heuristic. `None` leaves results unranked (score 0).
    #[serde(default, deserialize_with = "lenient_preference")]
    pub preference: Option<Preference>,
    /// Maximum schedules returned. Defaults to [`DEFAULT_MAX_RESULTS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
    /// Maximum candidate combinations examined before filtering.
    ///
    /// Unset means exhaustive enumeration. When set, candidates past the
    /// cap (in generation order) are never generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_candidates: Option<usize>,
}

impl GenerationOptions {
    /// Unranked options with default caps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options ranking by the given preference.
    pub fn ranked(preference: Preference) -> Self {
        Self::new().with_preference(preference)
    }

    /// Sets the preference.
    pub fn with_preference(mut self, preference: Preference) -> Self {
        self.preference = Some(preference);
        self
    }

    /// Sets the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Caps the number of candidate combinations examined.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = Some(max_candidates);
        self
    }

    /// Result cap after defaulting (`None` or 0 → 100).
    pub fn effective_max_results(&self) -> usize {
        self.max_results
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_MAX_RESULTS)
    }

    /// Candidate cap, `None` when unbounded.
    pub fn candidate_limit(&self) -> Option<usize> {
        self.max_candidates
    }
}

fn lenient_preference<'de, D>(deserializer: D) -> Result<Option<Preference>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Preference::parse_lenient))
}
