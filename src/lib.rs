//! Mail Icons
//!
//! Procedurally renders the envelope icons shipped with the mail add-in: a
//! white envelope with a light gray flap on a `#0078D4` background, written
//! as PNG files at 16, 32 and 80 pixels.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Writes assets/icon-16.png, assets/icon-32.png and assets/icon-80.png
//! let written = mailicons::generate_all("assets")?;
//! assert_eq!(written.len(), 3);
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

pub mod error;
pub use error::{Error, Result};

pub mod rendering;
pub use rendering::Icon;

/// Icon sizes generated by [`generate_all`], in pixels.
pub const ICON_SIZES: [u32; 3] = [16, 32, 80];

/// Directory the binary writes into, relative to the working directory.
pub const OUTPUT_DIR: &str = "assets";

/// One icon to render and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRequest {
    pub size: u32,
    pub output_path: PathBuf,
}

impl IconRequest {
    pub fn new(size: u32, output_path: impl Into<PathBuf>) -> Self {
        Self {
            size,
            output_path: output_path.into(),
        }
    }

    /// Request for the standard file name of `size` inside `dir`.
    pub fn in_dir(dir: &Path, size: u32) -> Self {
        Self::new(size, dir.join(icon_file_name(size)))
    }

    pub fn execute(&self) -> Result<()> {
        Icon::render(self.size)?.save(&self.output_path)?;
        println!("Created {}", self.output_path.display());
        Ok(())
    }
}

/// `icon-<size>.png`
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}.png", size)
}

/// Render one envelope icon of `size` pixels square and write it to
/// `output_path` as PNG, overwriting any existing file.
///
/// Fails with [`Error::Io`] when the parent directory is missing or not
/// writable, and with [`Error::InvalidSize`] for a zero size.
pub fn render_icon(size: u32, output_path: impl AsRef<Path>) -> Result<()> {
    IconRequest::new(size, output_path.as_ref()).execute()
}

/// Create `out_dir` if needed and write every size in [`ICON_SIZES`] into it.
///
/// Icons are written one after another; the first failure aborts the run.
pub fn generate_all(out_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir).map_err(|e| Error::io(out_dir, e))?;
    debug!("output directory ready: {}", out_dir.display());

    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let request = IconRequest::in_dir(out_dir, size);
        request.execute()?;
        written.push(request.output_path);
    }

    println!("All PNG icons created successfully!");
    Ok(written)
}
