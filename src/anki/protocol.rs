//! Wire types for the AnkiConnect JSON API (version 6).
//!
//! Every call is a POST of a `Request` envelope; every reply is a `Response`
//! envelope. AnkiConnect signals logical failures through a non-null `error`
//! string, independent of the HTTP status code.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct Request<P> {
    pub action: &'static str,
    pub version: u32,
    pub params: P,
}

#[derive(Debug, Deserialize)]
pub struct Response<R> {
    #[serde(default)]
    pub result: Option<R>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FindCardsParams {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct CardsInfoParams {
    pub cards: Vec<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerCardsParams {
    pub card_id: i64,
    pub ease: u8,
}

/// One record from a `cardsInfo` reply, reduced to the fields the review
/// screen needs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    pub card_id: i64,
    pub fields: CardFields,
    /// Legal ease values for this card, in the order Anki presents them.
    pub buttons: Vec<u8>,
}

#[derive(Debug, Deserialize)]
pub struct CardFields {
    #[serde(rename = "Front")]
    pub front: FieldValue,
    #[serde(rename = "Back")]
    pub back: FieldValue,
}

#[derive(Debug, Deserialize)]
pub struct FieldValue {
    pub value: String,
}

/// Standard Anki answer-button labels keyed by ease value.
const EASE_LABELS: &[(u8, &str)] = &[(1, "Again"), (2, "Hard"), (3, "Good"), (4, "Easy")];

/// Display label for an ease value. Values outside the standard four get a
/// generated label so an unusual deck config still renders.
pub fn ease_label(ease: u8) -> String {
    EASE_LABELS
        .iter()
        .find(|(value, _)| *value == ease)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| format!("Ease {}", ease))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_labels() {
        assert_eq!(ease_label(1), "Again");
        assert_eq!(ease_label(2), "Hard");
        assert_eq!(ease_label(3), "Good");
        assert_eq!(ease_label(4), "Easy");
        assert_eq!(ease_label(5), "Ease 5");
        assert_eq!(ease_label(0), "Ease 0");
    }

    #[test]
    fn test_request_envelope_shape() {
        let req = Request {
            action: "findCards",
            version: 6,
            params: FindCardsParams {
                query: "is:due".into(),
            },
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "action": "findCards",
                "version": 6,
                "params": { "query": "is:due" },
            })
        );
    }

    #[test]
    fn test_answer_params_use_camel_case() {
        let json = serde_json::to_value(AnswerCardsParams {
            card_id: 101,
            ease: 3,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "cardId": 101, "ease": 3 }));
    }

    #[test]
    fn test_response_envelope_with_error() {
        let resp: Response<Vec<i64>> =
            serde_json::from_str(r#"{"result": null, "error": "deck not found"}"#).unwrap();
        assert!(resp.result.is_none());
        assert_eq!(resp.error.as_deref(), Some("deck not found"));
    }

    #[test]
    fn test_response_envelope_with_result() {
        let resp: Response<Vec<i64>> =
            serde_json::from_str(r#"{"result": [101, 102], "error": null}"#).unwrap();
        assert_eq!(resp.result, Some(vec![101, 102]));
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_card_info_decodes() {
        let info: CardInfo = serde_json::from_str(
            r#"{
                "cardId": 101,
                "fields": {
                    "Front": {"value": "bonjour", "order": 0},
                    "Back": {"value": "hello", "order": 1}
                },
                "buttons": [1, 2, 3, 4],
                "deckName": "French"
            }"#,
        )
        .unwrap();
        assert_eq!(info.card_id, 101);
        assert_eq!(info.fields.front.value, "bonjour");
        assert_eq!(info.fields.back.value, "hello");
        assert_eq!(info.buttons, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_card_info_rejects_missing_fields() {
        let result: Result<CardInfo, _> =
            serde_json::from_str(r#"{"cardId": 101, "buttons": [1]}"#);
        assert!(result.is_err());
    }
}
