use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// File name offered when the chart is saved without an explicit path.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "Resources loading timeline.svg";

/// Standalone SVG markup produced by `SvgRenderer`.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    markup: String,
    width: f64,
    height: f64,
}

impl SvgDocument {
    pub(crate) fn new(markup: String, width: f64, height: f64) -> Self {
        Self {
            markup,
            width,
            height,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.markup
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.markup
    }

    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.markup.as_bytes().to_vec()
    }

    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Self-contained `data:` URI suitable for a download link.
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(self.markup.as_bytes())
        )
    }

    pub fn write_to_path(&self, path: impl AsRef<Path>) -> ChartResult<PathBuf> {
        let path = path.as_ref().to_path_buf();
        fs::write(&path, self.markup.as_bytes()).map_err(|source| ChartError::Export {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = self.markup.len(), "exported svg document");
        Ok(path)
    }

    /// Writes into `dir` under `DEFAULT_EXPORT_FILE_NAME`.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> ChartResult<PathBuf> {
        self.write_to_path(dir.as_ref().join(DEFAULT_EXPORT_FILE_NAME))
    }
}
