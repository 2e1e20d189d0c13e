use serde::Deserialize;

/// Request payload for `POST /ask`.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Free-text customer question. Trimmed before answering.
    pub question: String,
}
