use {
  anyhow::{Context, ensure},
  api_error::ApiError,
  app::{App, Outcome},
  arguments::Arguments,
  cell::Cell,
  chrono::{Local, NaiveDateTime},
  clap::Parser,
  client::Client,
  comment::{Comment, CommentSnippet},
  comment_collector::CommentCollector,
  comment_record::CommentRecord,
  comment_thread::CommentThread,
  comment_thread_list_response::CommentThreadListResponse,
  config::Config,
  crossterm::style::Stylize,
  reqwest::{StatusCode, Url},
  rust_xlsxwriter::{Format, Workbook},
  serde::{
    Deserialize, Deserializer,
    de::{self, DeserializeOwned, Unexpected},
  },
  serde_json::Value,
  spreadsheet_exporter::SpreadsheetExporter,
  statistic::Statistic,
  std::{
    backtrace::BacktraceStatus,
    fmt::{self, Display, Formatter},
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process,
    str::FromStr,
  },
  thiserror::Error,
  tracing::{debug, error, info, warn},
  tracing_subscriber::EnvFilter,
  utils::{deserialize_optional_string, non_empty},
  video::{Video, VideoListResponse},
  video_id::VideoId,
  video_info::VideoInfo,
  youtube_api::YouTubeApi,
};

#[cfg(test)]
use fake_api::{FakeApi, page, thread};

mod api_error;
mod app;
mod arguments;
mod cell;
mod client;
mod comment;
mod comment_collector;
mod comment_record;
mod comment_thread;
mod comment_thread_list_response;
mod config;
#[cfg(test)]
mod fake_api;
mod spreadsheet_exporter;
mod statistic;
mod utils;
mod video;
mod video_id;
mod video_info;
mod youtube_api;

const REPLY_MARKER: &str = "  ↳ ";

const RULE: &str = "============================================================";

const TITLE: &str = "YouTube Comment Scraper to Excel";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn report(error: &anyhow::Error) {
  let use_color = io::stderr().is_terminal();

  let label = |text: &'static str| {
    if use_color {
      text.bold().red().to_string()
    } else {
      text.to_string()
    }
  };

  eprintln!("{} {error}", label("error:"));

  let causes = error.chain().skip(1).collect::<Vec<_>>();

  if !causes.is_empty() {
    eprintln!();
    eprintln!("{}", label("because:"));

    for cause in causes {
      eprintln!("{} {cause}", label("-"));
    }
  }

  let backtrace = error.backtrace();

  if backtrace.status() == BacktraceStatus::Captured {
    eprintln!("{}", label("backtrace:"));
    eprintln!("{backtrace}");
  }
}

async fn run() -> Result {
  let dotenv = Config::load_dotenv(Path::new(".env"))?;

  initialize_logging();

  if let Some(path) = dotenv {
    debug!(path = %path.display(), "loaded environment file");
  }

  let config = Config::new(Arguments::parse())?;

  let client = Client::new(config.api_key.clone());

  match App::new(client, config).run().await? {
    Outcome::Exported { count, path } => {
      info!(count, path = %path.display(), "export finished");
    }
    Outcome::NoComments => info!("nothing to export"),
  }

  Ok(())
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    report(&error);
    process::exit(1);
  }
}
