use {super::*, std::io::Write};

pub(crate) struct CommentCollector<'a, A, W> {
  api: &'a A,
  out: W,
}

impl<'a, A: YouTubeApi, W: Write> CommentCollector<'a, A, W> {
  pub(crate) async fn collect(
    &mut self,
    video_id: &VideoId,
  ) -> Vec<CommentRecord> {
    self.status(format_args!(
      "Fetching comments for video ID: {video_id}..."
    ));

    let mut records = Vec::new();
    let mut page_token: Option<String> = None;
    let mut pages = 0_usize;

    loop {
      let page = match self
        .api
        .comment_threads(video_id, page_token.as_deref())
        .await
      {
        Ok(page) => page,
        Err(error) => {
          let reason = error
            .downcast_ref::<ApiError>()
            .and_then(|error| error.reason.as_deref());

          error!(
            %video_id,
            pages,
            records = records.len(),
            reason,
            "failed to fetch comments: {error:#}"
          );

          return records;
        }
      };

      pages += 1;

      if pages > 1 {
        self.status(format_args!(
          "Fetched {} comments so far...",
          records.len()
        ));
      }

      let CommentThreadListResponse {
        items,
        next_page_token,
      } = page;

      debug!(
        %video_id,
        page = pages,
        threads = items.len(),
        "fetched comment page"
      );

      for thread in items {
        records.extend(thread.into_records());
      }

      match next_page_token.filter(|token| !token.is_empty()) {
        Some(token) => page_token = Some(token),
        None => break,
      }
    }

    self.status(format_args!("Total comments fetched: {}", records.len()));

    records
  }

  pub(crate) fn new(api: &'a A, out: W) -> Self {
    Self { api, out }
  }

  fn status(&mut self, message: fmt::Arguments) {
    if let Err(error) = writeln!(self.out, "{message}") {
      debug!("failed to write status line: {error}");
    }
  }
}
