use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Comment {
  #[serde(default)]
  pub(crate) snippet: CommentSnippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentSnippet {
  pub(crate) author_display_name: Option<String>,
  #[serde(default)]
  pub(crate) like_count: u64,
  pub(crate) published_at: Option<String>,
  pub(crate) text_display: Option<String>,
  pub(crate) updated_at: Option<String>,
}
