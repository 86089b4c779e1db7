//! External trailer player (mpv / VLC)
//!
//! Mirrors the trailer overlay into a player process: opening the overlay
//! spawns the player on the embed URL, closing or replacing it kills the
//! process so playback actually stops.

use serde::{Deserialize, Serialize};
use std::process::Stdio;
use thiserror::Error;
use tokio::process::{Child, Command};

use crate::app::TrailerTarget;

/// Supported local players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    /// mpv media player (default; resolves YouTube links through yt-dlp)
    #[default]
    Mpv,
    /// VLC media player
    Vlc,
}

impl PlayerType {
    /// Get the command name for this player
    pub fn command(&self) -> &'static str {
        match self {
            PlayerType::Vlc => {
                // On macOS, VLC is an app bundle
                #[cfg(target_os = "macos")]
                if std::path::Path::new("/Applications/VLC.app").exists() {
                    return "/Applications/VLC.app/Contents/MacOS/VLC";
                }
                "vlc"
            }
            PlayerType::Mpv => "mpv",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PlayerType::Vlc => "VLC",
            PlayerType::Mpv => "mpv",
        }
    }

    fn args(&self, url: &str) -> Vec<String> {
        match self {
            PlayerType::Vlc => vec![
                url.to_string(),
                "--no-video-title-show".to_string(),
                "--play-and-exit".to_string(),
            ],
            PlayerType::Mpv => vec![url.to_string(), "--force-window=immediate".to_string()],
        }
    }
}

impl std::fmt::Display for PlayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Errors from local player operations
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Player '{0}' not found. Install it first.")]
    NotFound(String),
    #[error("Failed to start player: {0}")]
    StartFailed(#[from] std::io::Error),
}

/// Player process following the trailer overlay
#[derive(Debug)]
pub struct TrailerPlayer {
    player_type: PlayerType,
    child: Option<Child>,
    /// Key of the trailer the child is playing
    playing: Option<String>,
}

impl TrailerPlayer {
    pub fn new(player_type: PlayerType) -> Self {
        Self {
            player_type,
            child: None,
            playing: None,
        }
    }

    pub fn player_type(&self) -> PlayerType {
        self.player_type
    }

    /// Key of the trailer currently handed to the player
    pub fn playing(&self) -> Option<&str> {
        self.playing.as_deref()
    }

    /// Bring the process in line with the overlay's target
    pub fn sync(&mut self, target: Option<&TrailerTarget>) -> Result<(), PlayerError> {
        let wanted = target.map(|t| t.video_key.as_str());
        if wanted == self.playing.as_deref() {
            return Ok(());
        }

        self.stop();
        if let Some(target) = target {
            // Remember the key even if spawning fails so we don't retry every tick
            self.playing = Some(target.video_key.clone());
            self.child = Some(self.spawn(&target.embed_url)?);
            tracing::info!(player = %self.player_type, key = %target.video_key, "trailer player started");
        }
        Ok(())
    }

    /// Kill the player process, if any
    pub fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.start_kill() {
                tracing::debug!(error = %e, "trailer player already gone");
            }
        }
        self.playing = None;
    }

    fn spawn(&self, url: &str) -> Result<Child, PlayerError> {
        let mut cmd = Command::new(self.player_type.command());
        cmd.args(self.player_type.args(url))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PlayerError::NotFound(self.player_type.command().to_string())
            } else {
                PlayerError::StartFailed(e)
            }
        })
    }
}

impl Drop for TrailerPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}
