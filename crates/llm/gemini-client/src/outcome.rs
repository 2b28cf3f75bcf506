//! Classification of a completion response into a single [`CompletionOutcome`].
//!
//! Checks run in a fixed priority order: text, non-string text, empty parts, missing content
//! (all only when a candidate exists), then block reason, then the unexpected fallback.
//! Presence checks are truthiness checks: a text or block reason that is `null`, `false`, `0`
//! or `""` counts as absent.

use serde_json::Value;

use crate::types::{Candidate, GenerateContentResult, Part};

/// What a completion response turned out to contain.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionOutcome {
    /// First part of the first candidate carries a string.
    Text(String),
    /// The text field is present but not a string; carries the offending value.
    NonStringContent(Value),
    /// Parts are empty or the first part has no text; carries the parts.
    EmptyParts(Vec<Part>),
    /// The first candidate is not an object, or has no usable content or parts; carries the
    /// candidate when it decoded at all.
    MissingContent(Option<Candidate>),
    /// No candidate, but the prompt was blocked; carries the block reason.
    Blocked(String),
    /// Nothing usable; carries the whole result.
    Unexpected(GenerateContentResult),
}

impl CompletionOutcome {
    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::NonStringContent(_) => "non_string_content",
            Self::EmptyParts(_) => "empty_parts",
            Self::MissingContent(_) => "missing_content",
            Self::Blocked(_) => "blocked",
            Self::Unexpected(_) => "unexpected",
        }
    }
}

/// Classifies a completion result. Never fails; every shape maps to exactly one outcome.
pub fn classify(result: &GenerateContentResult) -> CompletionOutcome {
    let Some(response) = result.response.as_ref() else {
        return CompletionOutcome::Unexpected(result.clone());
    };

    if let Some(candidate) = response
        .candidates
        .as_deref()
        .and_then(|candidates| candidates.first())
    {
        return classify_candidate(candidate.as_ref());
    }

    match response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.as_ref())
    {
        Some(reason) if is_truthy(reason) => CompletionOutcome::Blocked(match reason {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }),
        _ => CompletionOutcome::Unexpected(result.clone()),
    }
}

fn classify_candidate(candidate: Option<&Candidate>) -> CompletionOutcome {
    let Some(parts) = candidate
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| content.parts.as_ref())
    else {
        return CompletionOutcome::MissingContent(candidate.cloned());
    };

    match parts.first().and_then(|part| part.text.as_ref()) {
        Some(text) if is_truthy(text) => match text {
            Value::String(s) => CompletionOutcome::Text(s.clone()),
            other => CompletionOutcome::NonStringContent(other.clone()),
        },
        _ => CompletionOutcome::EmptyParts(parts.clone()),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GenerateContentResponse;
    use serde_json::json;

    fn result(raw: Value) -> GenerateContentResult {
        GenerateContentResult {
            response: serde_json::from_value::<Option<GenerateContentResponse>>(raw).unwrap(),
        }
    }

    #[test]
    fn test_text_found() {
        let r = result(json!({"candidates": [{"content": {"parts": [{"text": "hi there"}]}}]}));
        assert_eq!(classify(&r), CompletionOutcome::Text("hi there".to_string()));
    }

    #[test]
    fn test_only_first_part_of_first_candidate_is_used() {
        let r = result(json!({"candidates": [
            {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
            {"content": {"parts": [{"text": "other"}]}}
        ]}));
        assert_eq!(classify(&r), CompletionOutcome::Text("first".to_string()));
    }

    #[test]
    fn test_non_string_text() {
        let r = result(json!({"candidates": [{"content": {"parts": [{"text": {"a": 1}}]}}]}));
        assert_eq!(classify(&r), CompletionOutcome::NonStringContent(json!({"a": 1})));

        let r = result(json!({"candidates": [{"content": {"parts": [{"text": 7}]}}]}));
        assert_eq!(classify(&r), CompletionOutcome::NonStringContent(json!(7)));
    }

    #[test]
    fn test_falsy_text_counts_as_missing_text() {
        for text in [json!(""), json!(0), json!(false)] {
            let r = result(json!({"candidates": [{"content": {"parts": [{"text": text}]}}]}));
            assert_eq!(classify(&r).kind(), "empty_parts");
        }
    }

    #[test]
    fn test_empty_parts() {
        let r = result(json!({"candidates": [{"content": {"parts": []}}]}));
        assert_eq!(classify(&r), CompletionOutcome::EmptyParts(vec![]));
    }

    #[test]
    fn test_first_part_without_text() {
        let r = result(json!({"candidates": [{"content": {"parts": [{}, {"text": "late"}]}}]}));
        assert_eq!(classify(&r).kind(), "empty_parts");
    }

    #[test]
    fn test_missing_content_or_parts() {
        let r = result(json!({"candidates": [{"finishReason": "SAFETY"}]}));
        match classify(&r) {
            CompletionOutcome::MissingContent(Some(c)) => {
                assert_eq!(c.finish_reason.as_deref(), Some("SAFETY"))
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        let r = result(json!({"candidates": [{"content": {"role": "model"}}]}));
        assert_eq!(classify(&r).kind(), "missing_content");
    }

    #[test]
    fn test_wrong_typed_candidate_is_missing_content() {
        let r = result(json!({"candidates": [null]}));
        assert_eq!(classify(&r), CompletionOutcome::MissingContent(None));

        let r = result(json!({"candidates": [5, {"content": {"parts": [{"text": "later"}]}}]}));
        assert_eq!(classify(&r), CompletionOutcome::MissingContent(None));

        let r = result(json!({"candidates": [{"content": "oops"}]}));
        assert_eq!(
            classify(&r),
            CompletionOutcome::MissingContent(Some(Candidate::default()))
        );

        let r = result(json!({"candidates": [{"content": {"parts": {}}}]}));
        assert_eq!(classify(&r).kind(), "missing_content");

        let r = result(json!({"candidates": [{"content": {"parts": null}}]}));
        assert_eq!(classify(&r).kind(), "missing_content");
    }

    #[test]
    fn test_non_object_part_has_no_text() {
        let r = result(json!({"candidates": [{"content": {"parts": ["hi", {"text": "x"}]}}]}));
        assert_eq!(classify(&r).kind(), "empty_parts");
    }

    #[test]
    fn test_non_array_candidates_fall_through() {
        let r = result(json!({
            "candidates": "none",
            "promptFeedback": {"blockReason": "SAFETY"}
        }));
        assert_eq!(classify(&r), CompletionOutcome::Blocked("SAFETY".to_string()));

        let r = result(json!({"candidates": {"text": "hi"}}));
        assert_eq!(classify(&r).kind(), "unexpected");
    }

    #[test]
    fn test_non_string_block_reason() {
        let r = result(json!({"promptFeedback": {"blockReason": 3}}));
        assert_eq!(classify(&r), CompletionOutcome::Blocked("3".to_string()));

        for reason in [json!(0), json!(false), json!(null)] {
            let r = result(json!({"promptFeedback": {"blockReason": reason}}));
            assert_eq!(classify(&r).kind(), "unexpected");
        }
    }

    #[test]
    fn test_candidate_takes_precedence_over_block_reason() {
        let r = result(json!({
            "candidates": [{"content": {"parts": []}}],
            "promptFeedback": {"blockReason": "SAFETY"}
        }));
        assert_eq!(classify(&r).kind(), "empty_parts");
    }

    #[test]
    fn test_blocked() {
        let r = result(json!({"promptFeedback": {"blockReason": "SAFETY"}}));
        assert_eq!(classify(&r), CompletionOutcome::Blocked("SAFETY".to_string()));

        let r = result(json!({"candidates": [], "promptFeedback": {"blockReason": "OTHER"}}));
        assert_eq!(classify(&r), CompletionOutcome::Blocked("OTHER".to_string()));
    }

    #[test]
    fn test_unexpected() {
        let r = result(json!({}));
        assert_eq!(classify(&r), CompletionOutcome::Unexpected(r.clone()));

        let r = result(json!({"candidates": [], "promptFeedback": {"blockReason": ""}}));
        assert_eq!(classify(&r).kind(), "unexpected");

        let r = GenerateContentResult::default();
        assert_eq!(classify(&r).kind(), "unexpected");
    }
}
