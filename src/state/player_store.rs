//! Currently selected track and audio transport state.
//!
//! The store never drives playback itself: the media binding reads
//! `is_playing` and reports position changes back through the transport
//! callbacks.

use {async_channel::Receiver, parking_lot::RwLock, tracing::debug};

use crate::{generation::track_audio_url, library::Track, state::observer::Subscribers};

/// Snapshot of the player store.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Selected track; `None` means nothing is selected.
    pub current_track: Option<Track>,
    pub is_playing: bool,
    /// Playback position in seconds.
    pub progress: f64,
    /// Media duration in seconds as reported by the media element.
    pub duration: f64,
    /// Output volume in `0.0..=1.0`.
    pub volume: f64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            current_track: None,
            is_playing: false,
            progress: 0.0,
            duration: 0.0,
            volume: 1.0,
        }
    }
}

/// Player store change events.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Selection changed.
    TrackChanged(Option<Track>),
    PlayingChanged(bool),
    ProgressChanged(f64),
    DurationChanged(f64),
    VolumeChanged(f64),
}

/// Holds at most one current track plus transport state.
#[derive(Debug, Default)]
pub struct PlayerStore {
    state: RwLock<PlayerState>,
    subscribers: Subscribers<PlayerEvent>,
}

impl PlayerStore {
    /// Creates an idle player store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshot(&self) -> PlayerState {
        self.state.read().clone()
    }

    #[must_use]
    pub fn current_track(&self) -> Option<Track> {
        self.state.read().current_track.clone()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state.read().is_playing
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.state.read().progress
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.state.read().duration
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.state.read().volume
    }

    /// URL the media element should load, if the current track has audio.
    #[must_use]
    pub fn audio_source(&self) -> Option<String> {
        self.state
            .read()
            .current_track
            .as_ref()
            .filter(|track| track.has_audio())
            .map(|track| track_audio_url(&track.id))
    }

    /// Selects `track` and rewinds to the start.
    ///
    /// The position is reset even when the same track is selected again.
    pub fn set_current_track(&self, track: Option<Track>) {
        {
            let mut state = self.state.write();
            state.current_track = track.clone();
            state.progress = 0.0;
        }
        debug!(
            "PlayerStore: Current track set to {:?}",
            track.as_ref().map(|track| track.id.as_str())
        );
        self.subscribers.broadcast(&PlayerEvent::TrackChanged(track));
        self.subscribers.broadcast(&PlayerEvent::ProgressChanged(0.0));
    }

    pub fn set_is_playing(&self, playing: bool) {
        self.state.write().is_playing = playing;
        self.subscribers
            .broadcast(&PlayerEvent::PlayingChanged(playing));
    }

    pub fn set_progress(&self, progress: f64) {
        self.state.write().progress = progress;
        self.subscribers
            .broadcast(&PlayerEvent::ProgressChanged(progress));
    }

    pub fn set_duration(&self, duration: f64) {
        self.state.write().duration = duration;
        self.subscribers
            .broadcast(&PlayerEvent::DurationChanged(duration));
    }

    pub fn set_volume(&self, volume: f64) {
        self.state.write().volume = volume;
        self.subscribers
            .broadcast(&PlayerEvent::VolumeChanged(volume));
    }

    /// Flips the playing flag.
    pub fn toggle_play(&self) {
        let playing = {
            let mut state = self.state.write();
            state.is_playing = !state.is_playing;
            state.is_playing
        };
        self.subscribers
            .broadcast(&PlayerEvent::PlayingChanged(playing));
    }

    /// Selects `track` and starts playing it.
    pub fn play_track(&self, track: Track) {
        self.set_current_track(Some(track));
        self.set_is_playing(true);
    }

    /// Media element reported a new playback position.
    pub fn on_time_update(&self, position: f64) {
        self.set_progress(position);
    }

    /// Media element finished loading metadata.
    pub fn on_loaded_metadata(&self, duration: f64) {
        self.set_duration(duration);
    }

    /// User moved the position slider.
    pub fn seek(&self, position: f64) {
        self.set_progress(position);
    }

    /// Media element reached the end of the track.
    pub fn on_ended(&self) {
        self.set_is_playing(false);
        self.set_progress(0.0);
    }

    /// Mutes when audible, otherwise restores full volume.
    pub fn toggle_mute(&self) {
        let volume = if self.volume() > 0.0 { 0.0 } else { 1.0 };
        self.set_volume(volume);
    }

    /// Subscribes to player store changes.
    pub fn subscribe(&self) -> Receiver<PlayerEvent> {
        self.subscribers.subscribe()
    }
}
