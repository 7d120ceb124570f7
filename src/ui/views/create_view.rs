//! Create page: edits the generation parameters and submits requests.

use std::sync::Arc;

use tracing::debug;

use crate::{
    error::{ErrorReporter, GenerationError},
    generation::{
        CUSTOM_PRESET, GenerationClient, GenerationJob, ParamsUpdate, append_structure_tag,
        preset_prompt,
    },
    state::GenerationStore,
};

/// Duration value asking the model to choose the length.
const RANDOM_DURATION: f64 = -1.0;

/// Create page model.
///
/// The selected preset and the advanced-section flag are view-local and are
/// not kept in the store.
#[derive(Debug)]
pub struct CreateView {
    generation: Arc<GenerationStore>,
    selected_preset: String,
    show_advanced: bool,
}

impl CreateView {
    /// Creates the page with the `Custom` preset selected.
    #[must_use]
    pub fn new(generation: Arc<GenerationStore>) -> Self {
        Self {
            generation,
            selected_preset: CUSTOM_PRESET.to_string(),
            show_advanced: false,
        }
    }

    #[must_use]
    pub fn selected_preset(&self) -> &str {
        &self.selected_preset
    }

    #[must_use]
    pub fn show_advanced(&self) -> bool {
        self.show_advanced
    }

    pub fn toggle_advanced(&mut self) {
        self.show_advanced = !self.show_advanced;
    }

    /// Selects a genre preset, replacing the prompt unless it is `Custom`.
    pub fn select_preset(&mut self, name: &str) {
        self.selected_preset = name.to_string();
        if let Some(prompt) = preset_prompt(name) {
            debug!("CreateView: Applying preset {name}");
            self.generation.set_params(ParamsUpdate::prompt(prompt));
        }
    }

    /// Form input changed.
    pub fn update(&self, update: ParamsUpdate) {
        self.generation.set_params(update);
    }

    /// Appends a lyric structure tag such as `[chorus]`.
    pub fn insert_structure_tag(&self, tag: &str) {
        let lyrics = append_structure_tag(&self.generation.params().lyrics, tag);
        self.generation.set_params(ParamsUpdate::lyrics(lyrics));
    }

    /// Requested duration in seconds, or `None` when the model picks it.
    ///
    /// Only the exact `-1` sentinel means random; other values, negative
    /// ones included, are passed through as entered.
    #[must_use]
    pub fn duration_seconds(&self) -> Option<f64> {
        let duration = self.generation.params().audio_duration;
        (duration != RANDOM_DURATION).then_some(duration)
    }

    /// Whether the generate button is enabled.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        !self.generation.is_generating() && !self.generation.params().prompt.is_empty()
    }

    /// Submits the current parameters through `client`.
    ///
    /// Clears any previous error, flags the request as running for its
    /// duration and records the failure message if it fails.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::AlreadyGenerating` or
    /// `GenerationError::EmptyPrompt` without contacting the client, or the
    /// client's error.
    pub async fn generate(
        &self,
        client: &dyn GenerationClient,
    ) -> Result<GenerationJob, GenerationError> {
        let params = self.generation.try_begin()?;

        let result = client.submit(&params).await;
        self.generation.set_is_generating(false);

        match result {
            Ok(job) => {
                debug!("CreateView: Generation job {} accepted", job.id);
                Ok(job)
            }
            Err(e) => {
                ErrorReporter::error_source(&e, "Submitting generation request");
                self.generation.set_error(Some(e.to_string()));
                Err(e)
            }
        }
    }
}
