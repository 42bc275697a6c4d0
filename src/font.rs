//! Label font resolution. The renderer needs a real TTF/OTF for glyph
//! metrics; lookup order is an explicit path, the `HEATWHEEL_FONT` env var,
//! then a handful of common system font locations.

use std::path::{Path, PathBuf};

use rusttype::Font;

use crate::error::HeatMapError;

pub const FONT_ENV: &str = "HEATWHEEL_FONT";

const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/gnu-free/FreeSans.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

fn load_from(path: &Path) -> Result<Font<'static>, HeatMapError> {
    let data = std::fs::read(path)?;
    Font::try_from_vec(data).ok_or_else(|| HeatMapError::FontInvalid {
        path: path.to_path_buf(),
    })
}

/// Loads the label font. An explicit path must work; the fallbacks are
/// tried in order and only their collective absence is an error.
pub fn load(explicit: Option<&Path>) -> Result<Font<'static>, HeatMapError> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    if let Ok(env_path) = std::env::var(FONT_ENV) {
        return load_from(Path::new(&env_path));
    }
    for candidate in SYSTEM_FONT_PATHS {
        let path = PathBuf::from(candidate);
        if path.is_file() {
            if let Ok(font) = load_from(&path) {
                return Ok(font);
            }
        }
    }
    Err(HeatMapError::FontNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_path_is_an_io_error() {
        let err = load(Some(Path::new("/nonexistent/font.ttf"))).unwrap_err();
        assert!(matches!(err, HeatMapError::Io(_)));
    }

    #[test]
    fn explicit_non_font_file_is_rejected() {
        let dir = std::env::temp_dir().join(format!("heatwheel_font_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let bogus = dir.join("not_a_font.ttf");
        std::fs::write(&bogus, b"definitely not sfnt data").unwrap();
        let err = load(Some(&bogus)).unwrap_err();
        assert!(matches!(err, HeatMapError::FontInvalid { .. }));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
