use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CommentRecord {
  pub(crate) body: String,
  pub(crate) display_name: String,
  pub(crate) like_count: u64,
  pub(crate) published_at: String,
  pub(crate) reply_count: u64,
  pub(crate) updated_at: String,
}

impl CommentRecord {
  pub(crate) fn cells(&self) -> [Cell<'_>; 6] {
    [
      Cell::Text(&self.display_name),
      Cell::Text(&self.body),
      Cell::Number(self.like_count),
      Cell::Text(&self.published_at),
      Cell::Text(&self.updated_at),
      Cell::Number(self.reply_count),
    ]
  }

  fn from_snippet(snippet: CommentSnippet, reply_count: u64) -> Self {
    let published_at = snippet.published_at.unwrap_or_default();

    Self {
      body: snippet.text_display.unwrap_or_default(),
      display_name: non_empty(snippet.author_display_name)
        .unwrap_or_else(|| "unknown".to_string()),
      like_count: snippet.like_count,
      updated_at: snippet.updated_at.unwrap_or_else(|| published_at.clone()),
      published_at,
      reply_count,
    }
  }

  pub(crate) fn is_reply(&self) -> bool {
    self.display_name.starts_with(REPLY_MARKER)
  }

  pub(crate) fn reply(comment: Comment) -> Self {
    let mut record = Self::from_snippet(comment.snippet, 0);
    record.display_name = format!("{REPLY_MARKER}{}", record.display_name);
    record
  }

  pub(crate) fn top_level(comment: Comment, reply_count: u64) -> Self {
    Self::from_snippet(comment.snippet, reply_count)
  }
}
