//! Question filtering
//!
//! A linear scan over the dataset: a record matches when its question text
//! or any of its choices contains the query as a case-insensitive substring.

use serde::Deserialize;

use crate::highlight::{contains, fold};
use crate::question::QuestionRecord;

/// What an empty (or all-whitespace) query matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyQuery {
    /// Every record passes, like a substring test against ""
    #[default]
    All,
    /// Nothing passes
    None,
}

/// Trim and case-fold a raw query, the same way highlighting folds it
pub fn normalize_query(raw: &str) -> Vec<char> {
    fold(raw.trim())
}

/// Match predicate against an already normalized query
pub fn matches(record: &QuestionRecord, normalized: &[char]) -> bool {
    contains(&record.question, normalized)
        || record
            .choices
            .iter()
            .any(|choice| contains(&choice.text, normalized))
}

/// Indices of matching records, in dataset order
pub fn matching_indices(dataset: &[QuestionRecord], raw_query: &str, empty: EmptyQuery) -> Vec<usize> {
    let normalized = normalize_query(raw_query);

    if normalized.is_empty() {
        return match empty {
            EmptyQuery::All => (0..dataset.len()).collect(),
            EmptyQuery::None => Vec::new(),
        };
    }

    dataset
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, &normalized))
        .map(|(idx, _)| idx)
        .collect()
}

/// Records matching `raw_query`, in dataset order
pub fn filter<'a>(dataset: &'a [QuestionRecord], raw_query: &str, empty: EmptyQuery) -> Vec<&'a QuestionRecord> {
    matching_indices(dataset, raw_query, empty)
        .into_iter()
        .map(|idx| &dataset[idx])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::highlight;
    use crate::question::Choice;

    fn record(question: &str, choices: &[(&str, &str)], answer: &str) -> QuestionRecord {
        QuestionRecord {
            question: question.to_string(),
            answer: answer.to_string(),
            choices: choices
                .iter()
                .map(|(k, t)| Choice { key: k.to_string(), text: t.to_string() })
                .collect(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<QuestionRecord> {
        vec![
            record("What is 2+2?", &[("A", "3"), ("B", "4")], "B"),
            record("Which planet is known as the Red Planet?", &[("A", "Mars"), ("B", "Venus")], "A"),
            record("Name the largest ocean", &[], ""),
            record("Pick the even numbers", &[("A", "Two"), ("B", "Three"), ("C", "Four")], "AC"),
        ]
    }

    #[test]
    fn test_matches_question_text() {
        let data = sample();
        let found = filter(&data, "planet", EmptyQuery::All);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].question, "Which planet is known as the Red Planet?");
    }

    #[test]
    fn test_matches_choice_text() {
        let data = sample();
        let found = filter(&data, "venus", EmptyQuery::All);
        assert_eq!(found, vec![&data[1]]);
    }

    #[test]
    fn test_case_insensitive() {
        let data = sample();
        assert_eq!(filter(&data, "abc", EmptyQuery::All), filter(&data, "ABC", EmptyQuery::All));
        assert_eq!(filter(&data, "MARS", EmptyQuery::All), filter(&data, "mars", EmptyQuery::All));
        assert_eq!(filter(&data, "OCEAN", EmptyQuery::All).len(), 1);
    }

    #[test]
    fn test_greek_final_sigma() {
        let data = vec![record("ΟΔΟΣ", &[], ""), record("ΟΣΑ", &[], "")];
        assert_eq!(matching_indices(&data, "ΟΣ", EmptyQuery::All), vec![0, 1]);
        assert_eq!(matching_indices(&data, "οσ", EmptyQuery::All), vec![0, 1]);
        assert_eq!(matching_indices(&data, "οδος", EmptyQuery::All), vec![0]);
        assert_eq!(matching_indices(&data, "ΟΔΟΣ", EmptyQuery::All), vec![0]);
    }

    #[test]
    fn test_match_is_always_highlighted() {
        let data = vec![record("ΟΔΟΣ", &[("A", "İstanbul")], "A"), record("İx", &[], "")];
        for query in ["οδος", "i", "İST", "x"] {
            for (idx, rec) in data.iter().enumerate() {
                let highlighted = highlight(&rec.question, query).iter().any(|s| s.emphasized)
                    || rec.choices.iter().any(|c| highlight(&c.text, query).iter().any(|s| s.emphasized));
                assert_eq!(
                    matches(rec, &normalize_query(query)),
                    highlighted,
                    "query {:?} record {}",
                    query,
                    idx
                );
            }
        }
    }

    #[test]
    fn test_query_is_trimmed() {
        let data = sample();
        assert_eq!(matching_indices(&data, "  ocean\t", EmptyQuery::All), vec![2]);
    }

    #[test]
    fn test_order_preserved() {
        let data = sample();
        // "t" appears in records 0 ("What"), 1 ("planet"), 2 ("the"), 3 ("the")
        assert_eq!(matching_indices(&data, "t", EmptyQuery::All), vec![0, 1, 2, 3]);
        assert_eq!(matching_indices(&data, "e", EmptyQuery::All), vec![1, 2, 3]);
    }

    #[test]
    fn test_record_without_question_matches_by_choice() {
        let data = crate::question::parse_dataset(
            r#"[
                {"answer": "A", "choices": {"A": "Photosynthesis", "B": "Respiration"}},
                {"question": null, "answer": "B", "choices": {"A": "North", "B": "South"}}
            ]"#,
        )
        .unwrap();

        assert_eq!(matching_indices(&data, "photo", EmptyQuery::All), vec![0]);
        assert_eq!(matching_indices(&data, "SOUTH", EmptyQuery::All), vec![1]);
        assert!(matching_indices(&data, "question", EmptyQuery::All).is_empty());
        assert!(matching_indices(&data, "null", EmptyQuery::All).is_empty());
    }

    #[test]
    fn test_missing_choices_contribute_nothing() {
        let data = sample();
        assert!(filter(&data, "pacific", EmptyQuery::All).is_empty());
    }

    #[test]
    fn test_empty_query_policy() {
        let data = sample();
        assert_eq!(filter(&data, "", EmptyQuery::All).len(), data.len());
        assert_eq!(filter(&data, "   ", EmptyQuery::All).len(), data.len());
        assert!(filter(&data, "", EmptyQuery::None).is_empty());
        assert!(filter(&data, " \n", EmptyQuery::None).is_empty());
    }

    #[test]
    fn test_sound_and_complete() {
        let data = sample();
        for query in ["2", "the", "FOUR", "x", "r", "red planet", "?"] {
            let normalized = normalize_query(query);
            let found = matching_indices(&data, query, EmptyQuery::All);
            for (idx, rec) in data.iter().enumerate() {
                assert_eq!(found.contains(&idx), matches(rec, &normalized), "query {:?} record {}", query, idx);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let data = sample();
        let first = matching_indices(&data, "Four", EmptyQuery::All);
        let second = matching_indices(&data, "Four", EmptyQuery::All);
        assert_eq!(first, second);
        assert_eq!(first, vec![3]);
    }

    #[test]
    fn test_arithmetic_scenario() {
        let data = vec![record("What is 2+2?", &[("A", "3"), ("B", "4")], "B")];
        let found = filter(&data, "4", EmptyQuery::All);
        assert_eq!(found.len(), 1);
        assert!(found[0].is_correct("B"));
        assert!(!found[0].is_correct("A"));
    }

    #[test]
    fn test_empty_dataset() {
        assert!(filter(&[], "anything", EmptyQuery::All).is_empty());
        assert!(filter(&[], "", EmptyQuery::All).is_empty());
    }
}
