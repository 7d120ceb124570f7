//! Genre prompt presets and lyric structure tags offered on the create page.

/// Name of the pseudo preset that leaves the prompt alone.
pub const CUSTOM_PRESET: &str = "Custom";

/// Named genre presets and the prompt each one writes.
pub const GENRE_PRESETS: &[(&str, &str)] = &[
    (
        "Modern Pop",
        "pop, synth, drums, guitar, 120 bpm, upbeat, catchy, vibrant, female vocals, polished vocals",
    ),
    (
        "Rock",
        "rock, electric guitar, drums, bass, 130 bpm, energetic, rebellious, gritty, male vocals, raw vocals",
    ),
    (
        "Hip Hop",
        "hip hop, 808 bass, hi-hats, synth, 90 bpm, bold, urban, intense, male vocals, rhythmic vocals",
    ),
    (
        "Country",
        "country, acoustic guitar, steel guitar, fiddle, 100 bpm, heartfelt, rustic, warm, male vocals, twangy vocals",
    ),
    (
        "EDM",
        "edm, synth, bass, kick drum, 128 bpm, euphoric, pulsating, energetic, instrumental",
    ),
    (
        "Reggae",
        "reggae, guitar, bass, drums, 80 bpm, chill, soulful, positive, male vocals, smooth vocals",
    ),
    (
        "Classical",
        "classical, orchestral, strings, piano, 60 bpm, elegant, emotive, timeless, instrumental",
    ),
    (
        "Jazz",
        "jazz, saxophone, piano, double bass, 110 bpm, smooth, improvisational, soulful, male vocals, crooning vocals",
    ),
    (
        "Metal",
        "metal, electric guitar, double kick drum, bass, 160 bpm, aggressive, intense, heavy, male vocals, screamed vocals",
    ),
    (
        "R&B",
        "r&b, synth, bass, drums, 85 bpm, sultry, groovy, romantic, female vocals, silky vocals",
    ),
];

/// Structure tags that can be appended to lyrics.
pub const LYRIC_STRUCTURE_TAGS: &[&str] = &["[verse]", "[chorus]", "[bridge]", "[intro]", "[outro]"];

/// Looks up the prompt for a genre preset.
///
/// Returns `None` for [`CUSTOM_PRESET`] and unknown names.
#[must_use]
pub fn preset_prompt(name: &str) -> Option<&'static str> {
    GENRE_PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, prompt)| *prompt)
}

/// Preset names in display order, starting with [`CUSTOM_PRESET`].
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    std::iter::once(CUSTOM_PRESET).chain(GENRE_PRESETS.iter().map(|(name, _)| *name))
}

/// Appends a structure tag on its own line.
#[must_use]
pub fn append_structure_tag(lyrics: &str, tag: &str) -> String {
    let separator = if lyrics.is_empty() { "" } else { "\n" };
    format!("{lyrics}{separator}{tag}\n")
}
