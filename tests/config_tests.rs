use std::io::Write;

use meme_canvas::config::{self, Configuration};

#[test]
fn defaults_match_the_classic_canvas() {
    let cfg = Configuration::default();
    assert_eq!(cfg.canvas_width, 400);
    assert_eq!(cfg.canvas_height, 400);
    assert_eq!(cfg.background_color, [0, 0, 0]);
    assert_eq!(cfg.text_color, [0, 0, 255]);
    assert!((cfg.font_size_px - 50.0).abs() < f32::EPSILON);
    assert_eq!(cfg.caption_margin_px, 10);
    assert!(cfg.font_family.is_none());
    cfg.validate().unwrap();
}

#[test]
fn parse_kebab_case_config() {
    let yaml = r#"
canvas-width: 640
canvas-height: 480
text-color: [255, 255, 255]
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.canvas_width, 640);
    assert_eq!(cfg.canvas_height, 480);
    assert_eq!(cfg.text_color, [255, 255, 255]);
    // untouched fields keep their defaults
    assert_eq!(cfg.background_color, [0, 0, 0]);
}

#[test]
fn parse_with_font_family() {
    let yaml = r#"
font-family: "DejaVu Sans"
font-size-px: 36.0
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.font_family.as_deref(), Some("DejaVu Sans"));
    assert!((cfg.font_size_px - 36.0).abs() < f32::EPSILON);
}

#[test]
fn unknown_keys_are_rejected() {
    let yaml = "canvas-widht: 640\n";
    assert!(serde_yaml::from_str::<Configuration>(yaml).is_err());
}

#[test]
fn validate_rejects_zero_canvas() {
    let cfg = Configuration {
        canvas_width: 0,
        ..Configuration::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_rejects_bad_font_size() {
    let cfg = Configuration {
        font_size_px: 0.0,
        ..Configuration::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_rejects_margin_swallowing_the_canvas() {
    let cfg = Configuration {
        canvas_height: 20,
        caption_margin_px: 10,
        ..Configuration::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn from_yaml_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "canvas-width: 320\ncanvas-height: 240").unwrap();
    let cfg = config::from_yaml_file(file.path()).unwrap();
    assert_eq!((cfg.canvas_width, cfg.canvas_height), (320, 240));
}

#[test]
fn from_yaml_file_missing_path_is_io_error() {
    let err = config::from_yaml_file(std::path::Path::new("/no/such/config.yaml")).unwrap_err();
    assert!(matches!(err, meme_canvas::Error::Io(_)));
}
