use reqwest::StatusCode;
use thiserror::Error;

/// Longest response-body excerpt carried inside an error.
const BODY_EXCERPT_LEN: usize = 200;

/// Which lookup a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PublicIp,
    Geolocation,
    Flyover,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::PublicIp => "public IP lookup",
            Stage::Geolocation => "geolocation lookup",
            Stage::Flyover => "flyover prediction",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    /// The request never completed: DNS, connect, timeout, reset.
    #[error("{stage} request failed: {source}")]
    Transport {
        stage: Stage,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with anything other than 200.
    #[error("{stage} returned status {status}: {body}")]
    UnexpectedStatus {
        stage: Stage,
        status: StatusCode,
        body: String,
    },

    /// A 200 body that does not carry the expected fields.
    #[error("{stage} response could not be decoded: {source}")]
    Decode {
        stage: Stage,
        #[source]
        source: serde_json::Error,
    },
}

impl LookupError {
    pub(crate) fn unexpected_status(stage: Stage, status: StatusCode, body: String) -> Self {
        LookupError::UnexpectedStatus {
            stage,
            status,
            body: excerpt(body),
        }
    }

    /// The stage the chain aborted in.
    pub fn stage(&self) -> Stage {
        match self {
            LookupError::Transport { stage, .. } => *stage,
            LookupError::UnexpectedStatus { stage, .. } => *stage,
            LookupError::Decode { stage, .. } => *stage,
        }
    }
}

fn excerpt(body: String) -> String {
    if body.len() <= BODY_EXCERPT_LEN {
        return body;
    }
    let mut end = BODY_EXCERPT_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_body_is_truncated() {
        let body = "x".repeat(5000);
        let err = LookupError::unexpected_status(Stage::Flyover, StatusCode::BAD_GATEWAY, body);
        let rendered = err.to_string();
        assert!(rendered.contains("502"));
        assert!(rendered.len() < 300);
        assert!(rendered.ends_with("..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = "é".repeat(400);
        let err = LookupError::unexpected_status(Stage::PublicIp, StatusCode::NOT_FOUND, body);
        // Display must not panic on a multi-byte boundary
        let _ = err.to_string();
    }

    #[test]
    fn stage_is_recoverable_from_every_variant() {
        let err = LookupError::unexpected_status(
            Stage::Geolocation,
            StatusCode::INTERNAL_SERVER_ERROR,
            "oops".into(),
        );
        assert_eq!(err.stage(), Stage::Geolocation);
    }
}
