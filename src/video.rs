use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct VideoListResponse {
  #[serde(default)]
  pub(crate) items: Vec<Video>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Video {
  #[serde(default)]
  pub(crate) snippet: VideoSnippet,
  #[serde(default)]
  pub(crate) statistics: VideoStatistics,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoSnippet {
  pub(crate) channel_title: Option<String>,
  pub(crate) title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoStatistics {
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) comment_count: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) like_count: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) view_count: Option<String>,
}
