//! The generation parameter snapshot and its partial-update form.

use serde::{Deserialize, Serialize};

/// Sampling scheduler used by the external model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulerType {
    /// Euler sampler.
    #[default]
    Euler,
    /// Heun sampler.
    Heun,
    /// Ping-pong sampler.
    PingPong,
}

/// Classifier-free guidance variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CfgType {
    /// Plain classifier-free guidance.
    Cfg,
    /// Adaptive projected guidance.
    #[default]
    Apg,
    /// CFG-zero-star.
    CfgStar,
}

/// Full configuration snapshot for one generation job.
///
/// Sent verbatim to the generation service, so field names serialize in
/// camelCase. Every field always holds a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    /// Output container format.
    pub format: String,
    /// Target duration in seconds; `-1.0` lets the model pick.
    pub audio_duration: f64,
    /// Style/tag prompt.
    pub prompt: String,
    /// Lyrics with optional structure tags.
    pub lyrics: String,
    /// Number of diffusion steps.
    pub infer_step: u32,
    pub guidance_scale: f64,
    pub scheduler_type: SchedulerType,
    pub cfg_type: CfgType,
    pub omega_scale: f64,
    /// Comma separated seeds; empty means random.
    pub manual_seeds: String,
    pub guidance_interval: f64,
    pub guidance_interval_decay: f64,
    pub min_guidance_scale: f64,
    pub use_erg_tag: bool,
    pub use_erg_lyric: bool,
    pub use_erg_diffusion: bool,
    pub oss_steps: String,
    pub guidance_scale_text: f64,
    pub guidance_scale_lyric: f64,
    /// Whether a reference audio guides the generation.
    pub audio2audio_enable: bool,
    pub ref_audio_strength: f64,
    /// Reference audio location, if one was chosen.
    pub ref_audio_path: Option<String>,
    /// LoRA adapter name or path; `"none"` disables it.
    pub lora_name_or_path: String,
    pub lora_weight: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            format: "wav".to_string(),
            audio_duration: -1.0,
            prompt: String::new(),
            lyrics: String::new(),
            infer_step: 60,
            guidance_scale: 15.0,
            scheduler_type: SchedulerType::Euler,
            cfg_type: CfgType::Apg,
            omega_scale: 10.0,
            manual_seeds: String::new(),
            guidance_interval: 0.5,
            guidance_interval_decay: 0.0,
            min_guidance_scale: 3.0,
            use_erg_tag: true,
            use_erg_lyric: false,
            use_erg_diffusion: true,
            oss_steps: String::new(),
            guidance_scale_text: 0.0,
            guidance_scale_lyric: 0.0,
            audio2audio_enable: false,
            ref_audio_strength: 0.5,
            ref_audio_path: None,
            lora_name_or_path: "none".to_string(),
            lora_weight: 1.0,
        }
    }
}

/// A partial update to [`GenerationParams`].
///
/// `None` keeps the current value. `ref_audio_path` is doubly optional so an
/// update can clear the path with `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamsUpdate {
    pub format: Option<String>,
    pub audio_duration: Option<f64>,
    pub prompt: Option<String>,
    pub lyrics: Option<String>,
    pub infer_step: Option<u32>,
    pub guidance_scale: Option<f64>,
    pub scheduler_type: Option<SchedulerType>,
    pub cfg_type: Option<CfgType>,
    pub omega_scale: Option<f64>,
    pub manual_seeds: Option<String>,
    pub guidance_interval: Option<f64>,
    pub guidance_interval_decay: Option<f64>,
    pub min_guidance_scale: Option<f64>,
    pub use_erg_tag: Option<bool>,
    pub use_erg_lyric: Option<bool>,
    pub use_erg_diffusion: Option<bool>,
    pub oss_steps: Option<String>,
    pub guidance_scale_text: Option<f64>,
    pub guidance_scale_lyric: Option<f64>,
    pub audio2audio_enable: Option<bool>,
    pub ref_audio_strength: Option<f64>,
    pub ref_audio_path: Option<Option<String>>,
    pub lora_name_or_path: Option<String>,
    pub lora_weight: Option<f64>,
}

impl ParamsUpdate {
    /// Update touching only the prompt.
    #[must_use]
    pub fn prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            ..Self::default()
        }
    }

    /// Update touching only the lyrics.
    #[must_use]
    pub fn lyrics(lyrics: impl Into<String>) -> Self {
        Self {
            lyrics: Some(lyrics.into()),
            ..Self::default()
        }
    }

    /// Whether the update leaves every field untouched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

macro_rules! merge_fields {
    ($params:ident, $update:ident; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $update.$field {
                $params.$field = value;
            }
        )+
    };
}

/// Shallow-merges `update` over `params`.
///
/// Values are taken as given; range checks belong to the generation service.
#[must_use]
pub fn merge_params(params: &GenerationParams, update: ParamsUpdate) -> GenerationParams {
    let mut merged = params.clone();
    merge_fields!(merged, update;
        format,
        audio_duration,
        prompt,
        lyrics,
        infer_step,
        guidance_scale,
        scheduler_type,
        cfg_type,
        omega_scale,
        manual_seeds,
        guidance_interval,
        guidance_interval_decay,
        min_guidance_scale,
        use_erg_tag,
        use_erg_lyric,
        use_erg_diffusion,
        oss_steps,
        guidance_scale_text,
        guidance_scale_lyric,
        audio2audio_enable,
        ref_audio_strength,
        ref_audio_path,
        lora_name_or_path,
        lora_weight,
    );
    merged
}
