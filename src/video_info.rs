use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct VideoInfo {
  pub(crate) channel: String,
  pub(crate) comment_count: Statistic,
  pub(crate) like_count: Statistic,
  pub(crate) title: String,
  pub(crate) view_count: Statistic,
}

impl Display for VideoInfo {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    writeln!(f, "Video: {}", self.title)?;
    writeln!(f, "Channel: {}", self.channel)?;
    writeln!(f, "Views: {}", self.view_count)?;
    writeln!(f, "Likes: {}", self.like_count)?;
    write!(f, "Total Comments: {}", self.comment_count)
  }
}

impl From<Video> for VideoInfo {
  fn from(video: Video) -> Self {
    Self {
      channel: non_empty(video.snippet.channel_title)
        .unwrap_or_else(|| "Unknown channel".to_string()),
      comment_count: video.statistics.comment_count.into(),
      like_count: video.statistics.like_count.into(),
      title: non_empty(video.snippet.title)
        .unwrap_or_else(|| "Untitled".to_string()),
      view_count: video.statistics.view_count.into(),
    }
  }
}

impl VideoInfo {
  pub(crate) async fn fetch(
    api: &impl YouTubeApi,
    video_id: &VideoId,
  ) -> Option<Self> {
    match api.videos(video_id).await {
      Ok(response) => {
        let info = response.items.into_iter().next().map(Self::from);

        if info.is_none() {
          warn!(%video_id, "video lookup returned no results");
        }

        info
      }
      Err(error) => {
        error!(%video_id, "failed to fetch video info: {error:#}");
        None
      }
    }
  }
}
