use super::*;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct VideoId(String);

#[derive(Debug, Error, PartialEq)]
pub(crate) enum VideoIdError {
  #[error("video id must not be empty")]
  Empty,
  #[error("`{0}` is not a valid video id")]
  Invalid(String),
  #[error("no video id found in URL `{0}`")]
  MissingFromUrl(String),
}

impl Display for VideoId {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl FromStr for VideoId {
  type Err = VideoIdError;

  fn from_str(input: &str) -> Result<Self, Self::Err> {
    let input = input.trim();

    if input.is_empty() {
      return Err(VideoIdError::Empty);
    }

    if let Ok(url) = Url::parse(input) {
      return Self::from_url(&url, input);
    }

    if input.contains('/') {
      return Url::parse(&format!("https://{input}"))
        .map_err(|_| VideoIdError::Invalid(input.to_string()))
        .and_then(|url| Self::from_url(&url, input));
    }

    Self::validate(input)
  }
}

impl VideoId {
  pub(crate) fn as_str(&self) -> &str {
    &self.0
  }

  fn from_url(url: &Url, input: &str) -> Result<Self, VideoIdError> {
    let missing = || VideoIdError::MissingFromUrl(input.to_string());

    let host = url.host_str().ok_or_else(missing)?;

    let host = host
      .strip_prefix("www.")
      .or_else(|| host.strip_prefix("m."))
      .or_else(|| host.strip_prefix("music."))
      .unwrap_or(host);

    let segments = url
      .path_segments()
      .map(|segments| {
        segments
          .filter(|segment| !segment.is_empty())
          .collect::<Vec<_>>()
      })
      .unwrap_or_default();

    let candidate = match (host, segments.as_slice()) {
      ("youtu.be", [id, ..]) => Some((*id).to_string()),
      ("youtube.com" | "youtube-nocookie.com", ["watch"]) => url
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned()),
      (
        "youtube.com" | "youtube-nocookie.com",
        ["shorts" | "embed" | "live" | "v", id, ..],
      ) => Some((*id).to_string()),
      _ => None,
    };

    Self::validate(&candidate.ok_or_else(missing)?)
  }

  fn validate(candidate: &str) -> Result<Self, VideoIdError> {
    let valid = candidate
      .chars()
      .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');

    if candidate.is_empty() || !valid {
      return Err(VideoIdError::Invalid(candidate.to_string()));
    }

    Ok(Self(candidate.to_string()))
  }
}
