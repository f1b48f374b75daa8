use super::*;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Export every comment on a YouTube video to an Excel spreadsheet"
)]
pub(crate) struct Arguments {
  /// YouTube Data API key
  #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
  pub(crate) api_key: String,
  /// Directory the spreadsheet is written to
  #[arg(long, short, default_value = ".")]
  pub(crate) output_dir: PathBuf,
  /// Video ID or URL, e.g. `BTmH6aKenK0` or `https://youtu.be/BTmH6aKenK0`
  #[arg(allow_hyphen_values = true)]
  pub(crate) video: VideoId,
}
