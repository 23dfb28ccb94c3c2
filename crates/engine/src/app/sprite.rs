use std::sync::Arc;

use super::math::Vec2;
use super::texture::Texture;

/// Normalized texture-coordinate sub-rectangle selecting one frame from a
/// sprite sheet. `(0,0)` is the sheet's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

impl UvRect {
    pub const FULL: UvRect = UvRect {
        u0: 0.0,
        v0: 0.0,
        u1: 1.0,
        v1: 1.0,
    };
}

/// A textured quad in screen space: texture handle, center position, scale
/// (half-extent; a negative component mirrors along that axis) and the UV
/// sub-rectangle to sample.
///
/// Cloning a sprite shares the texture; `release` drops this instance's
/// handle so later draws are no-ops.
#[derive(Debug, Clone)]
pub struct Sprite {
    texture: Option<Arc<Texture>>,
    position: Vec2,
    scale: Vec2,
    uv: UvRect,
}

impl Sprite {
    pub fn new(texture: Arc<Texture>) -> Self {
        Self {
            texture: Some(texture),
            position: Vec2::default(),
            scale: Vec2::new(1.0, 1.0),
            uv: UvRect::FULL,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    pub fn uv(&self) -> UvRect {
        self.uv
    }

    /// Select the frame at `(row, col)` of a `rows x cols` sheet grid.
    /// Row 0 is the top row of the sheet.
    pub fn set_uv_for_frame(&mut self, row: u32, col: u32, rows: u32, cols: u32) {
        if rows == 0 || cols == 0 || row >= rows || col >= cols {
            return;
        }
        let du = 1.0 / cols as f32;
        let dv = 1.0 / rows as f32;
        self.uv = UvRect {
            u0: col as f32 * du,
            v0: row as f32 * dv,
            u1: (col + 1) as f32 * du,
            v1: (row + 1) as f32 * dv,
        };
    }

    /// Point-in-bounds test against the transformed quad, in screen space.
    /// Mirrored sprites hit-test with the same footprint.
    pub fn hit(&self, x: f32, y: f32) -> bool {
        let half_x = self.scale.x.abs();
        let half_y = self.scale.y.abs();
        (x - self.position.x).abs() <= half_x && (y - self.position.y).abs() <= half_y
    }

    /// Drop the texture handle. Idempotent; a released sprite draws nothing.
    pub fn release(&mut self) {
        self.texture = None;
    }

    pub fn is_released(&self) -> bool {
        self.texture.is_none()
    }

    pub(crate) fn texture(&self) -> Option<&Arc<Texture>> {
        self.texture.as_ref()
    }
}
