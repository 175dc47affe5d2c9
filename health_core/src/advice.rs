//! Symptom keyword matching.
//!
//! The engine lower-cases the user's description and checks every table
//! keyword for substring containment. Matches are reported in table order,
//! not in the order the symptoms appear in the text.

use crate::{AdviceEntry, Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Message returned when no keyword matches
pub const DEFAULT_FALLBACK: &str =
    "I cannot provide specific advice for those symptoms. Please consult a healthcare professional.";

/// Cached default table - built once and shared by every engine that doesn't inject its own
static DEFAULT_TABLE: Lazy<AdviceTable> = Lazy::new(build_default_table);

/// Ordered, read-only list of keyword/advice pairs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdviceTable {
    entries: Vec<AdviceEntry>,
}

impl AdviceTable {
    /// Build a table, normalizing keywords to lowercase
    pub fn new(entries: Vec<AdviceEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| AdviceEntry {
                keyword: e.keyword.trim().to_lowercase(),
                advice: e.advice,
            })
            .collect();
        Self { entries }
    }

    /// Get a reference to the cached default table
    pub fn default_table() -> &'static AdviceTable {
        &DEFAULT_TABLE
    }

    pub fn entries(&self) -> &[AdviceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate the table and return all errors found
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for (idx, entry) in self.entries.iter().enumerate() {
            if entry.keyword.is_empty() {
                errors.push(format!("Advice entry {} has empty keyword", idx));
            }
            if entry.advice.trim().is_empty() {
                errors.push(format!("Advice for '{}' is empty", entry.keyword));
            }
            if !entry.keyword.is_empty() && !seen.insert(entry.keyword.as_str()) {
                errors.push(format!("Duplicate advice keyword '{}'", entry.keyword));
            }
        }

        errors
    }
}

impl Default for AdviceTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

fn build_default_table() -> AdviceTable {
    AdviceTable::new(vec![
        AdviceEntry::new(
            "headache",
            "For headaches, try resting in a dark room and staying hydrated. If the pain persists, consider consulting a doctor.",
        ),
        AdviceEntry::new(
            "fever",
            "For a fever, rest and drink plenty of fluids. If the fever exceeds 101°F, seek medical attention.",
        ),
        AdviceEntry::new(
            "cough",
            "For a cough, stay hydrated and consider using a humidifier. If it lasts more than a week, consult a doctor.",
        ),
        AdviceEntry::new(
            "nausea",
            "For nausea, try ginger tea and avoid heavy meals. If it persists, see a healthcare provider.",
        ),
        AdviceEntry::new(
            "fatigue",
            "For fatigue, ensure you are getting enough sleep and nutrition. If extreme, consult a doctor.",
        ),
        AdviceEntry::new(
            "sore throat",
            "For a sore throat, warm salt water gargles and staying hydrated can help. Consult a doctor if it persists.",
        ),
        AdviceEntry::new(
            "runny nose",
            "For a runny nose, try antihistamines and keep hydrated. If symptoms worsen, see a healthcare professional.",
        ),
    ])
}

/// Maps symptom descriptions to canned advice
#[derive(Clone, Debug)]
pub struct AdviceEngine {
    table: AdviceTable,
    fallback: String,
}

impl Default for AdviceEngine {
    fn default() -> Self {
        Self::new(AdviceTable::default(), DEFAULT_FALLBACK)
    }
}

impl AdviceEngine {
    pub fn new(table: AdviceTable, fallback: impl Into<String>) -> Self {
        Self {
            table,
            fallback: fallback.into(),
        }
    }

    pub fn table(&self) -> &AdviceTable {
        &self.table
    }

    /// Collect advice for every keyword contained in `symptoms`
    ///
    /// Callers are expected to pass non-empty text; use [`try_advise`](Self::try_advise)
    /// to have that checked.
    pub fn advise(&self, symptoms: &str) -> Vec<String> {
        let text = symptoms.to_lowercase();

        let advice: Vec<String> = self
            .table
            .entries()
            .iter()
            .filter(|e| !e.keyword.is_empty() && text.contains(e.keyword.as_str()))
            .map(|e| e.advice.clone())
            .collect();

        if advice.is_empty() {
            tracing::debug!("No symptom keywords matched, using fallback");
            vec![self.fallback.clone()]
        } else {
            tracing::debug!("Matched {} symptom keyword(s)", advice.len());
            advice
        }
    }

    /// Reject empty or whitespace-only text, then advise
    pub fn try_advise(&self, symptoms: &str) -> Result<Vec<String>> {
        let trimmed = symptoms.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptySymptoms);
        }
        Ok(self.advise(trimmed))
    }
}
