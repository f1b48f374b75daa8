use {
  super::*,
  anyhow::anyhow,
  serde_json::json,
  std::{cell::RefCell, collections::VecDeque},
};

#[derive(Default)]
pub(crate) struct FakeApi {
  page_tokens: RefCell<Vec<Option<String>>>,
  pages: RefCell<VecDeque<Result<CommentThreadListResponse>>>,
  video: RefCell<Option<Result<VideoListResponse>>>,
}

impl FakeApi {
  pub(crate) fn page_tokens(&self) -> Vec<Option<String>> {
    self.page_tokens.borrow().clone()
  }

  pub(crate) fn with_page(self, page: Value) -> Self {
    self
      .pages
      .borrow_mut()
      .push_back(Ok(serde_json::from_value(page).unwrap()));
    self
  }

  pub(crate) fn with_page_error(self, message: &str) -> Self {
    self
      .pages
      .borrow_mut()
      .push_back(Err(anyhow!("{message}")));
    self
  }

  pub(crate) fn with_video(self, response: Value) -> Self {
    *self.video.borrow_mut() =
      Some(Ok(serde_json::from_value(response).unwrap()));
    self
  }

  pub(crate) fn with_video_error(self, message: &str) -> Self {
    *self.video.borrow_mut() = Some(Err(anyhow!("{message}")));
    self
  }
}

impl YouTubeApi for FakeApi {
  async fn comment_threads(
    &self,
    _video_id: &VideoId,
    page_token: Option<&str>,
  ) -> Result<CommentThreadListResponse> {
    self
      .page_tokens
      .borrow_mut()
      .push(page_token.map(str::to_string));

    self
      .pages
      .borrow_mut()
      .pop_front()
      .unwrap_or_else(|| Err(anyhow!("unexpected comment page request")))
  }

  async fn videos(&self, _video_id: &VideoId) -> Result<VideoListResponse> {
    self
      .video
      .borrow_mut()
      .take()
      .unwrap_or_else(|| Ok(VideoListResponse { items: Vec::new() }))
  }
}

pub(crate) fn page(
  threads: Vec<Value>,
  next_page_token: Option<&str>,
) -> Value {
  let mut page = json!({
    "kind": "youtube#commentThreadListResponse",
    "items": threads,
  });

  if let Some(token) = next_page_token {
    page["nextPageToken"] = json!(token);
  }

  page
}

pub(crate) fn thread(
  author: &str,
  total_reply_count: u64,
  replies: &[&str],
) -> Value {
  let comment = |author: &str| {
    json!({
      "snippet": {
        "authorDisplayName": author,
        "textDisplay": format!("comment by {author}"),
        "likeCount": 1,
        "publishedAt": "2024-01-02T03:04:05Z",
        "updatedAt": "2024-01-02T03:04:05Z",
      }
    })
  };

  let mut thread = json!({
    "kind": "youtube#commentThread",
    "snippet": {
      "topLevelComment": comment(author),
      "totalReplyCount": total_reply_count,
    }
  });

  if !replies.is_empty() {
    thread["replies"] = json!({
      "comments": replies.iter().copied().map(comment).collect::<Vec<_>>(),
    });
  }

  thread
}
