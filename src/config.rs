use super::*;

#[derive(Debug)]
pub(crate) struct Config {
  pub(crate) api_key: String,
  pub(crate) output_dir: PathBuf,
  pub(crate) video_id: VideoId,
}

impl Config {
  pub(crate) fn load_dotenv(path: &Path) -> Result<Option<PathBuf>> {
    match dotenv::from_path(path) {
      Ok(()) => Ok(Some(path.to_path_buf())),
      Err(error) if error.not_found() => Ok(None),
      Err(error) => Err(error)
        .with_context(|| format!("failed to load `{}`", path.display())),
    }
  }

  pub(crate) fn new(arguments: Arguments) -> Result<Self> {
    let api_key = arguments.api_key.trim().to_string();

    ensure!(!api_key.is_empty(), "YouTube API key must not be empty");

    ensure!(
      arguments.output_dir.is_dir(),
      "output directory `{}` does not exist",
      arguments.output_dir.display()
    );

    Ok(Self {
      api_key,
      output_dir: arguments.output_dir,
      video_id: arguments.video,
    })
  }
}
