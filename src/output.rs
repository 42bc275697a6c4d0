//! PNG output. Encoding is separated from writing so the bytes can be
//! checked in tests; the file write goes through a sibling temp file and a
//! rename so a failed render never leaves partial output behind.

use std::fs;
use std::path::Path;

use png::{BitDepth, ColorType, Encoder};

use crate::error::HeatMapError;
use crate::scene::Canvas;

/// RGBA8 canvas to PNG bytes. Deterministic for the same input.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, HeatMapError> {
    let mut buf = Vec::new();
    {
        let mut encoder = Encoder::new(&mut buf, canvas.width as u32, canvas.height as u32);
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&canvas.frame)?;
    }
    Ok(buf)
}

/// Writes the canvas to `path`. The format is keyed off the file extension;
/// only `png` is supported, and the check happens before any bytes hit disk.
pub fn write_image(canvas: &Canvas, path: &Path) -> Result<(), HeatMapError> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    if extension != "png" {
        return Err(HeatMapError::UnsupportedFormat { extension });
    }

    let bytes = encode_png(canvas)?;

    let mut tmp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, &bytes)?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "heatwheel_output_{}_{}",
            std::process::id(),
            DIR_COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn encoded_bytes_carry_the_png_signature() {
        let canvas = Canvas::new(4, 4);
        let bytes = encode_png(&canvas).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }

    #[test]
    fn writes_and_cleans_up_the_temp_file() {
        let dir = temp_dir();
        let target = dir.join("wheel.png");
        let canvas = Canvas::new(8, 8);
        write_image(&canvas, &target).unwrap();
        assert!(target.is_file());
        assert!(!dir.join("wheel.png.tmp").exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn unsupported_extension_is_rejected_before_writing() {
        let dir = temp_dir();
        let target = dir.join("wheel.bmp");
        let canvas = Canvas::new(8, 8);
        let err = write_image(&canvas, &target).unwrap_err();
        assert!(matches!(err, HeatMapError::UnsupportedFormat { .. }));
        assert!(!target.exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
