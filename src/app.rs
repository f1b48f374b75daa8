use super::*;

pub(crate) struct App<A> {
  api: A,
  exporter: SpreadsheetExporter,
  video_id: VideoId,
}

#[derive(Debug, PartialEq)]
pub(crate) enum Outcome {
  Exported { count: usize, path: PathBuf },
  NoComments,
}

impl<A: YouTubeApi> App<A> {
  pub(crate) fn new(api: A, config: Config) -> Self {
    Self {
      api,
      exporter: SpreadsheetExporter::new(config.output_dir),
      video_id: config.video_id,
    }
  }

  pub(crate) async fn run(&self) -> Result<Outcome> {
    println!("{RULE}");
    println!("{TITLE}");
    println!("{RULE}");

    if let Some(info) = VideoInfo::fetch(&self.api, &self.video_id).await {
      println!("\n{info}\n");
    }

    let records = CommentCollector::new(&self.api, io::stdout())
      .collect(&self.video_id)
      .await;

    if records.is_empty() {
      println!("No comments found or error occurred.");
      return Ok(Outcome::NoComments);
    }

    let path = self.exporter.export(
      &records,
      &self.video_id,
      Local::now().naive_local(),
    )?;

    println!(
      "✓ Successfully exported {} comments to {}",
      records.len(),
      path.display()
    );

    if let Some(directory) = path.parent() {
      println!("\nFile saved in {}", directory.display());
    }

    println!("{RULE}");

    Ok(Outcome::Exported {
      count: records.len(),
      path,
    })
  }
}
