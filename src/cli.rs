//! CLI - launch options for ReelTUI
//!
//! There are no subcommands: the binary always starts the interactive TUI.
//! Flags override the config file and the environment.
//!
//! # Examples
//!
//! ```bash
//! reeltui
//! reeltui --region US --player mpv
//! reeltui --api-url http://localhost:4000/api --log-file /tmp/reeltui.log
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::player::PlayerType;

/// ReelTUI - browse movie series and movies from your terminal
#[derive(Parser, Debug, Default)]
#[command(
    name = "reeltui",
    version,
    about = "Terminal browser for movie series, movies and trailers",
    after_help = "KEYS:\n\
                  /          new search\n\
                  Enter      open / confirm\n\
                  t          play trailer\n\
                  b, Esc     back\n\
                  q          quit"
)]
pub struct Cli {
    /// Path to config file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Catalog service base URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Region code for watch providers (e.g. DE, US)
    #[arg(long, short = 'r', value_name = "CODE")]
    pub region: Option<String>,

    /// Play trailers in a local player
    #[arg(long, short = 'p', value_enum)]
    pub player: Option<PlayerType>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config this invocation asks for, with env and flag overrides
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        config.apply_env();
        self.apply(&mut config);
        Ok(config)
    }

    /// Override config values with the flags that were given
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(region) = &self.region {
            config.region = region.to_uppercase();
        }
        if let Some(player) = self.player {
            config.player = Some(player);
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
    }
}
