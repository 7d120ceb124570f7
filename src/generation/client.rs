//! Seam to the external generation service.

use std::sync::atomic::{AtomicU64, Ordering};

use {
    async_trait::async_trait,
    serde::{Deserialize, Serialize},
    serde_json::to_string,
    tracing::info,
};

use crate::{error::GenerationError, generation::params::GenerationParams, library::Track};

/// Base path of the HTTP API serving generated outputs.
pub const API_BASE: &str = "/api";

/// Accepted generation job, optionally already carrying its track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationJob {
    /// Job identifier assigned by the service.
    pub id: String,
    /// Finished track, when the service answers synchronously.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<Track>,
}

/// Submits generation requests to the model service.
///
/// Retries, timeouts and cancellation belong to implementations.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Submits `params` as a new generation job.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` if the request cannot be encoded or the
    /// service fails it.
    async fn submit(&self, params: &GenerationParams) -> Result<GenerationJob, GenerationError>;
}

/// Client that only logs the payload and hands back a pending job.
///
/// Stands in for the service while no endpoint is wired up.
#[derive(Debug, Default)]
pub struct LoggingClient {
    submitted: AtomicU64,
}

impl LoggingClient {
    /// Creates a logging client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of jobs submitted so far.
    #[must_use]
    pub fn submitted(&self) -> u64 {
        self.submitted.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl GenerationClient for LoggingClient {
    async fn submit(&self, params: &GenerationParams) -> Result<GenerationJob, GenerationError> {
        let payload = to_string(params)?;
        let sequence = self.submitted.fetch_add(1, Ordering::Relaxed) + 1;
        info!(job = sequence, payload = %payload, "Generating with params");

        Ok(GenerationJob {
            id: format!("pending-{sequence}"),
            track: None,
        })
    }
}

/// URL serving the audio bytes of a track.
#[must_use]
pub fn track_audio_url(track_id: &str) -> String {
    format!("{API_BASE}/outputs/{track_id}/audio")
}
