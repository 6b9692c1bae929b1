//! Question records and dataset loading
//!
//! The dataset is a JSON array of question objects:
//!
//! ```text
//! [
//!   {
//!     "question": "What is 2+2?",
//!     "answer": "B",
//!     "answerDescription": "Basic arithmetic",
//!     "questionImage": ["img/q1.png"],
//!     "choices": { "A": "3", "B": "4" }
//!   }
//! ]
//! ```
//!
//! Choice order follows the order of keys in the JSON object.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{FinderError, Result};

/// A single answer choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Choice key, normally a single letter ("A", "B", ...)
    pub key: String,
    /// Choice text
    pub text: String,
}

/// One exam question, immutable once loaded
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    /// Question text
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    /// Characters of this string are the keys of the correct choices
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
    /// Optional explanation shown under the question
    #[serde(default)]
    pub answer_description: Option<String>,
    /// Image references attached to the question, in display order
    #[serde(default, rename = "questionImage", deserialize_with = "null_as_default")]
    pub question_images: Vec<String>,
    /// Image references attached to the answer, in display order
    #[serde(default, rename = "answerImage", deserialize_with = "null_as_default")]
    pub answer_images: Vec<String>,
    /// Choices in display order (empty when the record has none)
    #[serde(default, deserialize_with = "ordered_choices")]
    pub choices: Vec<Choice>,
}

impl QuestionRecord {
    /// Whether the given choice key is one of this record's correct answers
    pub fn is_correct(&self, choice_key: &str) -> bool {
        is_correct(choice_key, &self.answer)
    }

    /// Description text, if present and not blank
    pub fn description(&self) -> Option<&str> {
        self.answer_description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }
}

/// True iff `choice_key` is a single character that occurs in `answer`.
pub fn is_correct(choice_key: &str, answer: &str) -> bool {
    let mut chars = choice_key.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => answer.chars().any(|c| c == key),
        _ => false,
    }
}

/// Parse a dataset from JSON text
pub fn parse_dataset(json: &str) -> Result<Vec<QuestionRecord>> {
    let records: Vec<QuestionRecord> = serde_json::from_str(json)?;
    Ok(records)
}

/// Load the dataset file once at startup
pub fn load_dataset(path: &Path) -> Result<Vec<QuestionRecord>> {
    if !path.exists() {
        return Err(FinderError::DatasetNotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path)?;
    let records = parse_dataset(&contents)?;

    let without_choices = records.iter().filter(|r| r.choices.is_empty()).count();
    if without_choices > 0 {
        debug!(count = without_choices, "records without choices");
    }
    info!(path = %path.display(), records = records.len(), "dataset loaded");

    Ok(records)
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a JSON object of choices, keeping document order
fn ordered_choices<'de, D>(deserializer: D) -> std::result::Result<Vec<Choice>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ChoicesVisitor;

    impl<'de> Visitor<'de> for ChoicesVisitor {
        type Value = Vec<Choice>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object mapping choice keys to choice text")
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut choices: Vec<Choice> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, text)) = map.next_entry::<String, String>()? {
                // A repeated key keeps its first position and takes the last text
                match choices.iter_mut().find(|c| c.key == key) {
                    Some(existing) => existing.text = text,
                    None => choices.push(Choice { key, text }),
                }
            }
            Ok(choices)
        }
    }

    deserializer.deserialize_any(ChoicesVisitor)
}
