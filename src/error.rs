use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a render. No variant is recovered silently; the
/// binary logs the error and exits non-zero before any output file exists.
#[derive(Debug, Error)]
pub enum HeatMapError {
    #[error("no win counts supplied; expected one non-negative integer per line")]
    EmptyInput,

    #[error("all win counts are zero, win rates are undefined")]
    ZeroTotal,

    #[error("line {line}: {text:?} is not a non-negative integer")]
    MalformedLine { line: usize, text: String },

    #[error(
        "no usable font found; pass --font, set HEATWHEEL_FONT, or install a \
         common system font (DejaVu, Liberation, Noto)"
    )]
    FontNotFound,

    #[error("font file {} could not be parsed as TTF/OTF", path.display())]
    FontInvalid { path: PathBuf },

    #[error("unsupported output format {extension:?}; only \"png\" is supported")]
    UnsupportedFormat { extension: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("png encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}
