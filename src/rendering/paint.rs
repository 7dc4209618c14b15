//! Paint command set for envelope icons

use image::Rgb;

use crate::rendering::layout::{Point, Rect};

/// Background, `#0078D4`
pub const BACKGROUND: Rgb<u8> = Rgb([0x00, 0x78, 0xD4]);
/// Envelope body, white
pub const BODY: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);
/// Envelope flap, `#E0E0E0`
pub const FLAP: Rgb<u8> = Rgb([0xE0, 0xE0, 0xE0]);

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Cover the whole canvas.
    Fill { rgb: Rgb<u8> },
    SolidRect { rect: Rect, rgb: Rgb<u8> },
    /// Filled triangle including its edges, limited to `clip`.
    Triangle {
        points: [Point; 3],
        clip: Rect,
        rgb: Rgb<u8>,
    },
}

impl PaintCommand {
    pub fn rgb(&self) -> Rgb<u8> {
        match self {
            PaintCommand::Fill { rgb }
            | PaintCommand::SolidRect { rgb, .. }
            | PaintCommand::Triangle { rgb, .. } => *rgb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_command_color() {
        let cmd = PaintCommand::SolidRect {
            rect: Rect {
                x: 0,
                y: 0,
                width: 10,
                height: 10,
            },
            rgb: BODY,
        };
        assert_eq!(cmd.rgb(), Rgb([255, 255, 255]));
        match cmd {
            PaintCommand::SolidRect { rect, .. } => assert_eq!(rect.width, 10),
            _ => panic!("unexpected"),
        }
    }

    #[test]
    fn palette_values() {
        assert_eq!(BACKGROUND.0, [0, 120, 212]);
        assert_eq!(FLAP.0, [224, 224, 224]);
    }
}
