//! Envelope geometry derived from the icon size

use log::debug;

use crate::error::{Error, Result};
use crate::rendering::paint::{PaintCommand, BACKGROUND, BODY, FLAP};

/// Largest accepted icon side; keeps every coordinate within `i32`.
pub const MAX_SIZE: u32 = i32::MAX as u32;

/// Axis-aligned rectangle covering columns `x..x+width` and rows `y..y+height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Geometry of one envelope icon.
///
/// - `margin` is `size / 6`
/// - `body` is `size - 2 * margin` wide, two thirds of that tall, vertically centered
/// - `flap` is the triangle from the body's top-left corner down to the
///   horizontal center (a third of the body height) and back up to the top-right corner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeLayout {
    pub size: u32,
    pub margin: u32,
    pub body: Rect,
    pub flap: [Point; 3],
}

impl EnvelopeLayout {
    pub fn for_size(size: u32) -> Result<Self> {
        if size == 0 || size > MAX_SIZE {
            return Err(Error::InvalidSize(size));
        }

        let margin = size / 6;
        let body_width = size - 2 * margin;
        let body_height = body_width * 2 / 3;
        let body = Rect {
            x: margin as i32,
            y: ((size - body_height) / 2) as i32,
            width: body_width,
            height: body_height,
        };

        let flap_height = (body_height / 3) as i32;
        let flap = [
            Point::new(body.x, body.y),
            Point::new((size / 2) as i32, body.y + flap_height),
            Point::new(body.right(), body.y),
        ];

        debug!(
            "layout size={} margin={} body={:?} flap={:?}",
            size, margin, body, flap
        );

        Ok(Self {
            size,
            margin,
            body,
            flap,
        })
    }

    /// Display list for this envelope, back to front.
    pub fn paint_commands(&self) -> Vec<PaintCommand> {
        vec![
            PaintCommand::Fill { rgb: BACKGROUND },
            PaintCommand::SolidRect {
                rect: self.body,
                rgb: BODY,
            },
            PaintCommand::Triangle {
                points: self.flap,
                clip: self.body,
                rgb: FLAP,
            },
        ]
    }
}
