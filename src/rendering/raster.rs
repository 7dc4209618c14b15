//! Rasterizer for the envelope display list

use image::{Rgb, RgbImage};

use crate::rendering::layout::{Point, Rect};
use crate::rendering::paint::PaintCommand;

/// In-memory RGB pixel buffer that paint commands are drawn onto.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    /// Run commands in order; later commands paint over earlier ones.
    pub fn execute(&mut self, commands: &[PaintCommand]) {
        for cmd in commands {
            let rgb = cmd.rgb();
            match cmd {
                PaintCommand::Fill { .. } => self.fill(rgb),
                PaintCommand::SolidRect { rect, .. } => self.fill_rect(rect, rgb),
                PaintCommand::Triangle { points, clip, .. } => {
                    self.fill_triangle(points, clip, rgb)
                }
            }
        }
    }

    fn fill(&mut self, rgb: Rgb<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = rgb;
        }
    }

    fn fill_rect(&mut self, rect: &Rect, rgb: Rgb<u8>) {
        if rect.is_empty() {
            return;
        }
        let x0 = rect.x.max(0) as u32;
        let y0 = rect.y.max(0) as u32;
        let x1 = rect.right().clamp(0, self.width() as i32) as u32;
        let y1 = rect.bottom().clamp(0, self.height() as i32) as u32;
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, rgb);
            }
        }
    }

    fn fill_triangle(&mut self, points: &[Point; 3], clip: &Rect, rgb: Rgb<u8>) {
        let [a, b, c] = (*points).map(|p| (p.x as i64, p.y as i64));
        if edge(a, b, c) == 0 || clip.is_empty() {
            return;
        }

        // Pixels are sampled at their integer corner, so edge pixels count as inside.
        let min_x = points.iter().map(|p| p.x).min().unwrap_or(0).max(clip.x).max(0);
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(clip.y).max(0);
        let max_x = points
            .iter()
            .map(|p| p.x + 1)
            .max()
            .unwrap_or(0)
            .min(clip.right())
            .min(self.width() as i32);
        let max_y = points
            .iter()
            .map(|p| p.y + 1)
            .max()
            .unwrap_or(0)
            .min(clip.bottom())
            .min(self.height() as i32);

        for py in min_y..max_y {
            for px in min_x..max_x {
                let p = (px as i64, py as i64);
                let e0 = edge(a, b, p);
                let e1 = edge(b, c, p);
                let e2 = edge(c, a, p);
                let inside = (e0 >= 0 && e1 >= 0 && e2 >= 0) || (e0 <= 0 && e1 <= 0 && e2 <= 0);
                if inside {
                    self.image.put_pixel(px as u32, py as u32, rgb);
                }
            }
        }
    }
}

/// Twice the signed area of `(a, b, p)`; zero when collinear.
fn edge(a: (i64, i64), b: (i64, i64), p: (i64, i64)) -> i64 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}
