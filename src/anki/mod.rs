//! AnkiConnect API layer: wire types and the HTTP client.

pub mod client;
pub mod protocol;
