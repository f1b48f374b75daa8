use super::*;

#[derive(Debug, Error)]
#[error("YouTube API responded with {status}: {message}")]
pub(crate) struct ApiError {
  pub(crate) message: String,
  pub(crate) reason: Option<String>,
  pub(crate) status: StatusCode,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
  error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
  #[serde(default)]
  errors: Vec<ErrorDetail>,
  message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
  reason: Option<String>,
}

impl ApiError {
  pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
    let fallback = || {
      let body = body.trim();

      if body.is_empty() {
        status
          .canonical_reason()
          .unwrap_or("unknown error")
          .to_string()
      } else {
        body.to_string()
      }
    };

    match serde_json::from_str::<ErrorEnvelope>(body) {
      Ok(envelope) => Self {
        message: non_empty(envelope.error.message)
          .unwrap_or_else(fallback),
        reason: envelope
          .error
          .errors
          .into_iter()
          .find_map(|detail| detail.reason),
        status,
      },
      Err(_) => Self {
        message: fallback(),
        reason: None,
        status,
      },
    }
  }
}
