//! Bottom player bar model.
//!
//! Binds the transport controls and the progress/volume sliders to the
//! player store. The media element itself belongs to the embedder, which
//! forwards its callbacks to [`PlayerStore`].

use std::sync::Arc;

use tracing::debug;

use crate::{
    state::PlayerStore,
    ui::utils::{format_duration, truncate_chars},
};

/// Maximum prompt characters shown under the title.
const PROMPT_PREVIEW_CHARS: usize = 50;

/// Fallback slider range while the duration is unknown.
const UNKNOWN_DURATION_RANGE: f64 = 100.0;

/// What the bar shows for the current track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub title: String,
    /// Prompt preview.
    pub subtitle: String,
    /// Audio URL; `None` when the track has no audio to load.
    pub source: Option<String>,
}

/// Player bar bound to the shared player store.
#[derive(Debug, Clone)]
pub struct PlayerBar {
    player: Arc<PlayerStore>,
}

impl PlayerBar {
    /// Creates a player bar reading from `player`.
    #[must_use]
    pub fn new(player: Arc<PlayerStore>) -> Self {
        Self { player }
    }

    /// Current track summary, or `None` when nothing is selected.
    #[must_use]
    pub fn now_playing(&self) -> Option<NowPlaying> {
        let track = self.player.current_track()?;
        Some(NowPlaying {
            title: track.display_title().to_string(),
            subtitle: truncate_chars(&track.prompt, PROMPT_PREVIEW_CHARS),
            source: self.player.audio_source(),
        })
    }

    #[must_use]
    pub fn position_label(&self) -> String {
        format_duration(self.player.progress())
    }

    #[must_use]
    pub fn duration_label(&self) -> String {
        format_duration(self.player.duration())
    }

    /// Upper bound of the position slider.
    #[must_use]
    pub fn seek_max(&self) -> f64 {
        let duration = self.player.duration();
        if duration > 0.0 {
            duration
        } else {
            UNKNOWN_DURATION_RANGE
        }
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.player.volume() <= 0.0
    }

    /// Play/pause button.
    pub fn toggle_play(&self) {
        self.player.toggle_play();
    }

    /// Position slider moved.
    pub fn seek(&self, position: f64) {
        debug!("PlayerBar: Seeking to {position}");
        self.player.seek(position);
    }

    /// Volume slider moved.
    pub fn set_volume(&self, volume: f64) {
        self.player.set_volume(volume);
    }

    /// Mute button.
    pub fn toggle_mute(&self) {
        self.player.toggle_mute();
    }
}
