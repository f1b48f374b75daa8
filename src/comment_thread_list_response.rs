use super::*;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentThreadListResponse {
  #[serde(default)]
  pub(crate) items: Vec<CommentThread>,
  pub(crate) next_page_token: Option<String>,
}
