use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON object found in model response")]
    NoJsonBlock,

    #[error("model response is not a JSON object")]
    NotAnObject,

    #[error("malformed JSON in model response: {0}")]
    Json(#[from] serde_json::Error),
}
