use super::*;

pub(crate) trait YouTubeApi {
  async fn comment_threads(
    &self,
    video_id: &VideoId,
    page_token: Option<&str>,
  ) -> Result<CommentThreadListResponse>;

  async fn videos(&self, video_id: &VideoId) -> Result<VideoListResponse>;
}
