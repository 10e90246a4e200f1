use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use clap::{Parser, Subcommand};

use crate::commands::download::{self, Downloader};
use crate::core::events::{FlowStage, ProgressEmitter};
use crate::core::{filename, url_parser};
use crate::error::DownloadError;
use crate::fs_paths::{AppPaths, DesktopPaths};
use crate::models::settings::{AppSettings, ProxySettings};
use crate::storage::config;

const AFTER_HELP: &str = "\
How to use:
  1. Find the video you want on TikTok
  2. Tap \"Share\" and then \"Copy link\"
  3. Run `tikgrab download <link>`
  The video is saved as <user>_<id>.mp4

Valid URLs look like:
  https://www.tiktok.com/@user/video/1234567890123456789
  https://www.tiktok.com/@username/video/9876543210987654321?lang=pt-BR

Only download videos you have permission to use, and respect copyright and TikTok's terms.";

#[derive(Debug, Parser)]
#[command(name = "tikgrab", version, about = "Download TikTok videos with one command", after_help = AFTER_HELP)]
pub struct Cli {
    /// Log provider attempts and transfer details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to the per-user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Route all requests through a proxy, e.g. socks5://127.0.0.1:1080
    #[arg(long, global = true, value_name = "URL")]
    pub proxy: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve, fetch and save a video
    Download {
        url: String,
        /// Directory the video is saved into
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },
    /// Print the direct media URL without downloading
    Resolve { url: String },
    /// Show the handle, video id and file name parsed from a URL
    Info { url: String },
    /// Print where the settings file is read from
    ConfigPath,
    /// Write the default settings file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Stage updates go to stderr so stdout stays scriptable.
#[derive(Default)]
pub struct TerminalEmitter {
    last_mib: AtomicU64,
}

impl ProgressEmitter for TerminalEmitter {
    fn emit_stage(&self, stage: &FlowStage) {
        let text = match stage {
            FlowStage::Parsing => "Analyzing URL...".to_string(),
            FlowStage::Resolving => "Looking up the video URL...".to_string(),
            FlowStage::Resolved { provider } => format!("URL found via {}", provider),
            FlowStage::Fetching => "Downloading video...".to_string(),
            FlowStage::Complete { .. } => "Video downloaded successfully!".to_string(),
        };
        eprintln!("[{:>3}%] {}", stage.percent() as u32, text);
    }

    fn emit_bytes(&self, downloaded: u64, total: Option<u64>) {
        let mib = downloaded / (1024 * 1024);
        if self.last_mib.swap(mib, Ordering::Relaxed) != mib {
            match total {
                Some(total) => tracing::debug!("{} / {} bytes", downloaded, total),
                None => tracing::debug!("{} bytes", downloaded),
            }
        }
    }
}

fn settings_path(cli: &Cli) -> PathBuf {
    cli.settings
        .clone()
        .unwrap_or_else(|| DesktopPaths.settings_file())
}

fn load_effective_settings(cli: &Cli) -> anyhow::Result<AppSettings> {
    let mut settings = config::load_settings(&settings_path(cli))?;
    if let Some(proxy) = &cli.proxy {
        settings.proxy = ProxySettings::from_url(proxy)?;
    }
    Ok(settings)
}

pub async fn execute(cli: Cli) -> Result<(), DownloadError> {
    match &cli.command {
        Command::Info { url } => {
            let reference = download::parse_reference(url).inspect_err(|_| warn_short_link(url))?;
            println!("User:     @{}", reference.owner_handle);
            println!("Video ID: {}", reference.media_id);
            println!("File:     {}", reference.filename());
        }
        Command::Resolve { url } => {
            download::parse_reference(url).inspect_err(|_| warn_short_link(url))?;
            let settings = load_effective_settings(&cli)?;
            let downloader = Downloader::from_settings(&settings)?;
            let resolution = downloader.resolve(url.trim()).await?;
            println!("Source:   {}", resolution.provider_name);
            println!("Media:    {}", resolution.media_url);
        }
        Command::Download { url, output_dir } => {
            let mut settings = load_effective_settings(&cli)?;
            if let Some(dir) = output_dir {
                settings.download.output_dir = dir.clone();
            }
            let downloader = Downloader::from_settings(&settings)?;
            let emitter = TerminalEmitter::default();

            let outcome = downloader
                .download(url, &emitter)
                .await
                .inspect_err(|e| {
                    if matches!(e, DownloadError::InvalidUrl { .. }) {
                        warn_short_link(url);
                    }
                })?;

            println!("File:     {}", outcome.reference.filename());
            println!("Source:   {}", outcome.provider_name);
            println!("Size:     {} bytes", filename::format_byte_count(outcome.byte_len));

            let saved = download::save(outcome, &settings.download.output_dir).await?;
            println!("Saved to: {}", saved.display());
        }
        Command::ConfigPath => {
            println!("{}", settings_path(&cli).display());
        }
        Command::InitConfig { force } => {
            let path = settings_path(&cli);
            if path.exists() && !force {
                println!("{} already exists (use --force to overwrite)", path.display());
                return Ok(());
            }
            config::save_settings(&path, &AppSettings::default())?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn warn_short_link(url: &str) {
    if url_parser::is_tiktok_host(url) {
        eprintln!(
            "Short or non-video TikTok links are not supported; open the link in a browser \
             and copy the full https://www.tiktok.com/@user/video/<id> address."
        );
    }
}
