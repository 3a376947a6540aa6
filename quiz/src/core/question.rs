//! In-memory question store built from raw two-field records.

use std::fmt;

/// A single prompt and its reference answer.
///
/// The answer is trimmed once at construction; the prompt is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    answer: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: &str) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.trim().to_string(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Case-insensitive exact comparison against the reference answer.
    pub fn is_correct(&self, response: &str) -> bool {
        answers_match(&self.answer, response)
    }
}

/// Compare two answers after folding both to lowercase.
pub fn answers_match(expected: &str, response: &str) -> bool {
    expected.to_lowercase() == response.to_lowercase()
}

/// A record had fewer than the two required fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    /// 1-based record number within the input.
    pub record: usize,
    /// Number of fields the record actually had.
    pub fields: usize,
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "record {} has {} field(s), expected at least 2 (question, answer)",
            self.record, self.fields
        )
    }
}

impl std::error::Error for MalformedRecord {}

/// Ordered, read-only collection of questions for one quiz run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    /// Build a store from raw records: field 0 is the prompt, field 1 the answer.
    ///
    /// Extra fields are ignored. Fails on the first record with fewer than two fields.
    pub fn from_records<I, R, S>(records: I) -> Result<Self, MalformedRecord>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut questions = Vec::new();
        for (idx, record) in records.into_iter().enumerate() {
            let fields = record.as_ref();
            match fields {
                [prompt, answer, ..] => {
                    questions.push(Question::new(prompt.as_ref(), answer.as_ref()));
                }
                _ => {
                    return Err(MalformedRecord {
                        record: idx + 1,
                        fields: fields.len(),
                    });
                }
            }
        }
        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

impl FromIterator<Question> for QuestionStore {
    fn from_iter<T: IntoIterator<Item = Question>>(iter: T) -> Self {
        Self {
            questions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_is_trimmed_and_prompt_is_verbatim() {
        let store = QuestionStore::from_records([[" Capital of France ", " Paris \n"]])
            .expect("store");
        let question = store.get(0).expect("question");
        assert_eq!(question.prompt(), " Capital of France ");
        assert_eq!(question.answer(), "Paris");
    }

    #[test]
    fn matching_ignores_case() {
        let question = Question::new("Capital of France", "Paris");
        for response in ["PARIS", "paris", "PaRiS", "Paris"] {
            assert!(question.is_correct(response), "{response} should match");
        }
        assert!(!question.is_correct("Lyon"));
        assert!(!question.is_correct(" Paris"));
    }

    #[test]
    fn short_record_is_rejected_with_position() {
        let records = vec![
            vec!["2+2".to_string(), "4".to_string()],
            vec!["orphan".to_string()],
        ];
        let err = QuestionStore::from_records(records).expect_err("malformed");
        assert_eq!(
            err,
            MalformedRecord {
                record: 2,
                fields: 1
            }
        );
        assert!(err.to_string().contains("record 2"));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let store = QuestionStore::from_records([["q", "a", "note"]]).expect("store");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).map(Question::answer), Some("a"));
    }

    #[test]
    fn empty_input_yields_empty_store() {
        let records: Vec<Vec<String>> = Vec::new();
        let store = QuestionStore::from_records(records).expect("store");
        assert!(store.is_empty());
        assert!(store.get(0).is_none());
    }
}
