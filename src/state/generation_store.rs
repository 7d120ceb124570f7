//! Parameters and lifecycle flags of the pending generation request.

use {async_channel::Receiver, parking_lot::RwLock, tracing::debug};

use crate::{
    error::GenerationError,
    generation::{GenerationParams, ParamsUpdate, merge_params},
    state::observer::Subscribers,
};

/// Snapshot of the generation store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerationState {
    /// Parameters of the next or running request.
    pub params: GenerationParams,
    /// Whether a request is in flight.
    pub is_generating: bool,
    /// Progress reported for the running request.
    pub progress: f64,
    /// Message of the last failure, if any.
    pub error: Option<String>,
}

/// Generation store change events.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationEvent {
    /// Parameters were updated or reset.
    ParamsChanged(GenerationParams),
    /// The in-flight flag changed.
    GeneratingChanged(bool),
    /// Progress changed.
    ProgressChanged(f64),
    /// Error was set or cleared.
    ErrorChanged(Option<String>),
}

/// Holds the generation parameters, starting from defaults.
///
/// Parameters are not persisted.
#[derive(Debug, Default)]
pub struct GenerationStore {
    state: RwLock<GenerationState>,
    subscribers: Subscribers<GenerationEvent>,
}

impl GenerationStore {
    /// Creates a store holding default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Full snapshot of the store.
    #[must_use]
    pub fn snapshot(&self) -> GenerationState {
        self.state.read().clone()
    }

    /// Current parameters.
    #[must_use]
    pub fn params(&self) -> GenerationParams {
        self.state.read().params.clone()
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.state.read().is_generating
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.state.read().progress
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// Merges `update` into the current parameters.
    ///
    /// # Arguments
    ///
    /// * `update` - Fields to overwrite; `None` fields keep their value
    pub fn set_params(&self, update: ParamsUpdate) {
        let params = {
            let mut state = self.state.write();
            state.params = merge_params(&state.params, update);
            state.params.clone()
        };
        debug!("GenerationStore: Parameters updated");
        self.subscribers
            .broadcast(&GenerationEvent::ParamsChanged(params));
    }

    /// Restores the default parameters.
    pub fn reset_params(&self) {
        let params = GenerationParams::default();
        self.state.write().params = params.clone();
        debug!("GenerationStore: Parameters reset to defaults");
        self.subscribers
            .broadcast(&GenerationEvent::ParamsChanged(params));
    }

    /// Marks a request as started if none is running and the prompt is set.
    ///
    /// The check and the transition happen under one write lock, so only
    /// one of several concurrent callers can succeed. On success the error
    /// is cleared and progress rewound.
    ///
    /// # Returns
    ///
    /// The parameters to submit.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::AlreadyGenerating` or
    /// `GenerationError::EmptyPrompt`, leaving the store untouched.
    pub fn try_begin(&self) -> Result<GenerationParams, GenerationError> {
        let params = {
            let mut state = self.state.write();
            if state.is_generating {
                return Err(GenerationError::AlreadyGenerating);
            }
            if state.params.prompt.is_empty() {
                return Err(GenerationError::EmptyPrompt);
            }
            state.is_generating = true;
            state.progress = 0.0;
            state.error = None;
            state.params.clone()
        };
        debug!("GenerationStore: Request started");

        self.subscribers
            .broadcast(&GenerationEvent::ErrorChanged(None));
        self.subscribers
            .broadcast(&GenerationEvent::ProgressChanged(0.0));
        self.subscribers
            .broadcast(&GenerationEvent::GeneratingChanged(true));
        Ok(params)
    }

    pub fn set_is_generating(&self, generating: bool) {
        self.state.write().is_generating = generating;
        debug!("GenerationStore: is_generating = {generating}");
        self.subscribers
            .broadcast(&GenerationEvent::GeneratingChanged(generating));
    }

    pub fn set_progress(&self, progress: f64) {
        self.state.write().progress = progress;
        self.subscribers
            .broadcast(&GenerationEvent::ProgressChanged(progress));
    }

    pub fn set_error(&self, error: Option<String>) {
        self.state.write().error = error.clone();
        self.subscribers
            .broadcast(&GenerationEvent::ErrorChanged(error));
    }

    /// Subscribes to generation store changes.
    pub fn subscribe(&self) -> Receiver<GenerationEvent> {
        self.subscribers.subscribe()
    }
}
