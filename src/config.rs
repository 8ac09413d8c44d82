use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

/// Canvas and caption settings, deserialized from kebab-case YAML. Every
/// field has a default matching the classic 400x400 black-matted canvas with
/// bold 50px blue captions.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Configuration {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub background_color: [u8; 3],
    /// Font family to look up in the system database; `None` means any
    /// sans-serif face.
    pub font_family: Option<String>,
    pub font_size_px: f32,
    pub text_color: [u8; 3],
    /// Gap between each caption and its canvas edge.
    pub caption_margin_px: u32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            canvas_width: 400,
            canvas_height: 400,
            background_color: [0, 0, 0],
            font_family: None,
            font_size_px: 50.0,
            text_color: [0, 0, 255],
            caption_margin_px: 10,
        }
    }
}

impl Configuration {
    pub fn validate(&self) -> Result<(), Error> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(Error::InvalidConfig(format!(
                "canvas dimensions must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "font-size-px must be a positive number, got {}",
                self.font_size_px
            )));
        }
        if self.caption_margin_px.saturating_mul(2) >= self.canvas_height {
            return Err(Error::InvalidConfig(format!(
                "caption-margin-px {} leaves no drawable area on a {}px-tall canvas",
                self.caption_margin_px, self.canvas_height
            )));
        }
        Ok(())
    }
}

pub fn from_yaml_file(path: &Path) -> Result<Configuration, Error> {
    let raw = fs::read_to_string(path)?;
    let cfg: Configuration = serde_yaml::from_str(&raw)?;
    Ok(cfg)
}
