//! Rendering pipeline: layout -> paint commands -> raster -> PNG

pub mod layout;
pub mod paint;
pub mod raster;

use std::fs;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use log::info;

use crate::error::{Error, Result};
use layout::EnvelopeLayout;
use raster::Canvas;

/// A rendered, not yet encoded, square envelope icon.
#[derive(Debug, Clone)]
pub struct Icon {
    pub size: u32,
    pub canvas: Canvas,
}

impl Icon {
    pub fn render(size: u32) -> Result<Self> {
        let layout = EnvelopeLayout::for_size(size)?;
        let mut canvas = Canvas::new(size, size);
        canvas.execute(&layout.paint_commands());
        Ok(Self { size, canvas })
    }

    pub fn to_png(&self) -> Result<Vec<u8>> {
        let image = self.canvas.as_image();
        let mut png_data = Vec::new();
        PngEncoder::new(&mut png_data).write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )?;
        Ok(png_data)
    }

    /// Encode and write to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let png_data = self.to_png()?;
        fs::write(path, &png_data).map_err(|e| Error::io(path, e))?;
        info!("wrote {} ({} bytes)", path.display(), png_data.len());
        Ok(())
    }
}
