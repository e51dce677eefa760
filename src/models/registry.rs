use crate::error::{FetchError, Result};

/// Information about a supported Llama checkpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub provider: &'static str,
    pub size_label: &'static str,
    pub repo_id: &'static str,
}

/// Registry of supported models
pub const MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "llama-3.2-1b-instruct",
        title: "Llama 3.2 1B Instruct",
        provider: "meta",
        size_label: "1B",
        repo_id: "meta-llama/Llama-3.2-1B-Instruct",
    },
    ModelInfo {
        id: "llama-3.2-3b-instruct",
        title: "Llama 3.2 3B Instruct",
        provider: "meta",
        size_label: "3B",
        repo_id: "meta-llama/Llama-3.2-3B-Instruct",
    },
];

impl ModelInfo {
    /// Find model by identifier
    #[must_use]
    pub fn find(id: &str) -> Option<&'static Self> {
        MODELS.iter().find(|m| m.id == id)
    }

    /// Get all model identifiers, in registry order
    #[must_use]
    pub fn all_ids() -> Vec<&'static str> {
        MODELS.iter().map(|m| m.id).collect()
    }

    /// Look up a model, failing with the list of valid choices if absent
    pub fn resolve(id: &str) -> Result<&'static Self> {
        Self::find(id).ok_or_else(|| {
            let mut detail = format!("'{id}'. Valid choices: {}", Self::all_ids().join(", "));
            if let Some(suggestion) = Self::suggest(id) {
                detail.push_str(&format!(" (did you mean '{suggestion}'?)"));
            }
            FetchError::UnsupportedModel(detail)
        })
    }

    /// Find closest match using Levenshtein distance
    #[must_use]
    pub fn suggest(id: &str) -> Option<&'static str> {
        if id.is_empty() {
            return None;
        }

        MODELS
            .iter()
            .map(|m| (m.id, levenshtein_distance(id, m.id)))
            .min_by_key(|(_, dist)| *dist)
            .filter(|(_, dist)| *dist <= 2) // Only suggest if within 2 edits
            .map(|(model_id, _)| model_id)
    }
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
