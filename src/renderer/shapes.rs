//! Shape generation for 2D primitives
//!
//! All coordinates are screen pixels; the pipeline maps them to NDC.

use glam::Vec2;
use std::f32::consts::TAU;

use super::font::{GLYPH_COLUMNS, GLYPH_ROWS, glyph};
use super::vertex::Vertex;
use crate::sim::Rect;

/// Horizontal advance per character, in font pixels
pub const CHAR_ADVANCE: u32 = GLYPH_COLUMNS as u32 + 1;

/// Filled circle as a fan of `segments` triangles around the center
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let rim = |i: u32| {
        let theta = i as f32 / segments as f32 * TAU;
        center + Vec2::from_angle(theta) * radius
    };

    (0..segments)
        .flat_map(|i| {
            [
                Vertex::at(center, color),
                Vertex::at(rim(i), color),
                Vertex::at(rim(i + 1), color),
            ]
        })
        .collect()
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(r: Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());
    vec![
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, t, color),
        Vertex::new(rt, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, b, color),
    ]
}

/// Pixel width of `text` at the given font pixel size
pub fn text_width(text: &str, pixel: f32) -> f32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0.0;
    }
    // No trailing gap after the last character
    (chars * CHAR_ADVANCE - 1) as f32 * pixel
}

/// Pixel height of one line of text
pub fn text_height(pixel: f32) -> f32 {
    GLYPH_ROWS as f32 * pixel
}

/// Generate vertices for a line of block-font text, top-left at `origin`
pub fn text(origin: Vec2, text: &str, pixel: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for (i, ch) in text.chars().enumerate() {
        let char_x = origin.x + (i as u32 * CHAR_ADVANCE) as f32 * pixel;
        let rows = glyph(ch);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_COLUMNS {
                // Leftmost column is the highest bit
                if bits & (1 << (GLYPH_COLUMNS - 1 - col)) != 0 {
                    let cell = Rect::new(
                        char_x + col as f32 * pixel,
                        origin.y + row as f32 * pixel,
                        pixel,
                        pixel,
                    );
                    vertices.extend(rect(cell, color));
                }
            }
        }
    }

    vertices
}
