//! Data model for the speech-synthesis boundary: voice labels, selection by
//! name, utterance assembly, and the volume-slider mapping. Actual audio
//! output belongs to the host platform, not this crate.

/// One installed synthesis voice as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub lang: String,
    pub default: bool,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>, default: bool) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
            default,
        }
    }

    /// Display label for a voice picker: `Name (lang)`, with ` -- DEFAULT`
    /// appended for the platform default voice.
    pub fn label(&self) -> String {
        let mut label = format!("{} ({})", self.name, self.lang);
        if self.default {
            label.push_str(" -- DEFAULT");
        }
        label
    }
}

/// Finds the voice matching `name`. When several voices share a name the
/// last one wins.
pub fn find_voice<'a>(voices: &'a [Voice], name: &str) -> Option<&'a Voice> {
    let mut found = None;
    for voice in voices {
        if voice.name == name {
            found = Some(voice);
        }
    }
    found
}

/// Text and volume handed to the synthesizer when the read button fires.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub volume: f32,
}

impl Utterance {
    /// Concatenates the top and bottom captions with no separator and maps
    /// the 0-100 slider to the synthesizer's 0.0-1.0 volume range.
    pub fn new(top: &str, bottom: &str, slider: i32) -> Self {
        Self {
            text: format!("{top}{bottom}"),
            volume: slider.clamp(0, 100) as f32 / 100.0,
        }
    }
}

/// Volume icon bucket for the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeLevel {
    Muted,
    Low,
    Medium,
    High,
}

impl VolumeLevel {
    /// Buckets a slider value: 0 is muted, 1-33 low, 34-66 medium, 67-100
    /// high. Out-of-range values clamp to the nearest bucket.
    pub fn from_slider(value: i32) -> Self {
        match value.clamp(0, 100) {
            0 => Self::Muted,
            1..=33 => Self::Low,
            34..=66 => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn icon_path(&self) -> &'static str {
        match self {
            Self::Muted => "icons/volume-level-0.svg",
            Self::Low => "icons/volume-level-1.svg",
            Self::Medium => "icons/volume-level-2.svg",
            Self::High => "icons/volume-level-3.svg",
        }
    }
}
