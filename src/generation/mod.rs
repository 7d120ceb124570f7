//! Generation request parameters, prompt presets and the service seam.
//!
//! The generative model itself runs elsewhere; this module describes what is
//! sent to it and how a request is submitted.

pub mod client;
pub mod params;
pub mod presets;

pub use {
    client::{GenerationClient, GenerationJob, LoggingClient, track_audio_url},
    params::{CfgType, GenerationParams, ParamsUpdate, SchedulerType, merge_params},
    presets::{
        CUSTOM_PRESET, GENRE_PRESETS, LYRIC_STRUCTURE_TAGS, append_structure_tag, preset_names,
        preset_prompt,
    },
};
