//! HTTP client for AnkiConnect.
//!
//! Anki must be running locally with the AnkiConnect add-on installed. Calls
//! are not retried; any failure is surfaced to the caller, which decides how
//! to reflect it in the UI.

use crate::anki::protocol::{
    AnswerCardsParams, CardInfo, CardsInfoParams, FindCardsParams, Request, Response,
};
use crate::app::state::Card;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// AnkiConnect endpoint, fixed at build time.
pub const ANKI_CONNECT_URL: &str = "http://localhost:8765";

const API_VERSION: u32 = 6;
const DUE_QUERY: &str = "is:due";

#[derive(Debug, Error)]
pub enum AnkiError {
    #[error("connection refused: {0} (is Anki running with AnkiConnect installed?)")]
    Connection(#[source] reqwest::Error),
    #[error("request failed with status {0}")]
    Status(StatusCode),
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("API-reported error: {0}")]
    Remote(String),
    #[error("response carried no result")]
    MissingResult,
}

#[derive(Clone)]
pub struct AnkiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnkiClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: ANKI_CONNECT_URL.to_string(),
        }
    }

    /// Send one request envelope and unwrap the reply envelope.
    ///
    /// A non-null `error` field is a failure regardless of transport status.
    /// Some actions acknowledge with a null `result`, so the caller decides
    /// whether an absent result is an error.
    async fn invoke<P, R>(&self, action: &'static str, params: P) -> Result<Option<R>, AnkiError>
    where
        P: Serialize,
        R: DeserializeOwned + Default,
    {
        let request = Request {
            action,
            version: API_VERSION,
            params,
        };
        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(AnkiError::Connection)?;

        let status = response.status();
        let body = response.bytes().await.map_err(AnkiError::Connection)?;
        let envelope: Response<R> = serde_json::from_slice(&body)?;

        if let Some(message) = envelope.error {
            return Err(AnkiError::Remote(message));
        }
        if !status.is_success() {
            return Err(AnkiError::Status(status));
        }
        Ok(envelope.result)
    }

    /// Query the due-card ids, then fetch their details in one batched call.
    ///
    /// An empty query result is an empty session, not an error. Individual
    /// records that fail to decode are skipped with a warning; the session
    /// proceeds with the rest.
    pub async fn fetch_due_cards(&self) -> Result<Vec<Card>, AnkiError> {
        let ids: Vec<i64> = self
            .invoke(
                "findCards",
                FindCardsParams {
                    query: DUE_QUERY.to_string(),
                },
            )
            .await?
            .ok_or(AnkiError::MissingResult)?;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<serde_json::Value> = self
            .invoke("cardsInfo", CardsInfoParams { cards: ids })
            .await?
            .ok_or(AnkiError::MissingResult)?;

        Ok(cards_from_records(records))
    }

    /// Submit the chosen ease for one card. The acknowledgment payload is
    /// ignored beyond success or failure.
    pub async fn answer_card(&self, card_id: i64, ease: u8) -> Result<(), AnkiError> {
        self.invoke::<_, serde_json::Value>("answerCards", AnswerCardsParams { card_id, ease })
            .await?;
        Ok(())
    }
}

impl Default for AnkiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode each `cardsInfo` record on its own so one malformed record drops
/// out without discarding the batch.
fn cards_from_records(records: Vec<serde_json::Value>) -> Vec<Card> {
    let mut cards = Vec::with_capacity(records.len());
    for record in records {
        match serde_json::from_value::<CardInfo>(record) {
            Ok(info) => cards.push(Card::from(info)),
            Err(e) => warn!("skipping malformed cardsInfo record: {}", e),
        }
    }
    cards
}
