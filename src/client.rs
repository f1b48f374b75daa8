use {super::*, anyhow::Context};

#[derive(Clone)]
pub(crate) struct Client {
  api_key: String,
  client: reqwest::Client,
}

impl Client {
  const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

  const MAX_RESULTS: &str = "100";

  async fn get<T: DeserializeOwned>(
    &self,
    resource: &str,
    query: &[(&str, &str)],
  ) -> Result<T> {
    let response = self
      .client
      .get(format!("{}/{resource}", Self::API_BASE_URL))
      .query(&[("key", self.api_key.as_str())])
      .query(query)
      .send()
      .await
      .map_err(reqwest::Error::without_url)
      .with_context(|| format!("failed to send {resource} request"))?;

    let status = response.status();

    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(ApiError::from_response(status, &body).into());
    }

    response
      .json::<T>()
      .await
      .map_err(reqwest::Error::without_url)
      .with_context(|| format!("failed to decode {resource} response"))
  }

  pub(crate) fn new(api_key: String) -> Self {
    Self {
      api_key,
      client: reqwest::Client::new(),
    }
  }
}

impl YouTubeApi for Client {
  async fn comment_threads(
    &self,
    video_id: &VideoId,
    page_token: Option<&str>,
  ) -> Result<CommentThreadListResponse> {
    let mut query = vec![
      ("part", "snippet,replies"),
      ("videoId", video_id.as_str()),
      ("textFormat", "plainText"),
      ("maxResults", Self::MAX_RESULTS),
    ];

    if let Some(page_token) = page_token {
      query.push(("pageToken", page_token));
    }

    self.get("commentThreads", &query).await
  }

  async fn videos(&self, video_id: &VideoId) -> Result<VideoListResponse> {
    self
      .get(
        "videos",
        &[("part", "snippet,statistics"), ("id", video_id.as_str())],
      )
      .await
  }
}
