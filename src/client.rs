//! Remote record fetching
//!
//! One GET against the object-storage URL, no retries. The three failure
//! classes stay distinct so the caller can surface a descriptive message.

use crate::records::{self, ConversationRecord};
use thiserror::Error;

/// Failure modes of a fetch invocation.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid conversation document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetch and decode a conversation document.
///
/// Any non-2xx status is a hard failure for this invocation.
pub async fn fetch_records(url: &str) -> Result<Vec<ConversationRecord>, FetchError> {
    let response = reqwest::get(url).await.map_err(|source| FetchError::Transport {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    Ok(records::parse_records(&body)?)
}
