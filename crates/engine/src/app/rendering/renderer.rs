use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use winit::window::Window;

use crate::app::{Sprite, Vec2};

use super::text::{draw_text, LINE_ADVANCE};
use super::transform::{ndc_to_screen_px, Viewport};

const CLEAR_COLOR: [u8; 4] = [20, 22, 28, 255];
const OVERLAY_TEXT_COLOR: [u8; 4] = [244, 248, 252, 255];
const OVERLAY_PADDING_PX: i32 = 8;

/// Software rasterizer over a `pixels` surface. Sprites are blitted in the
/// order given; later sprites occlude earlier ones.
pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    viewport: Viewport,
}

impl Renderer {
    pub fn new(window: Arc<Window>) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(Arc::clone(&window), size.width, size.height)?;
        Ok(Self {
            window,
            pixels,
            viewport: Viewport {
                width: size.width,
                height: size.height,
            },
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(Arc::clone(&self.window), width, height)?;
        self.viewport = Viewport { width, height };
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(width, height, window);
        Pixels::new(width, height, surface)
    }

    pub(crate) fn render(
        &mut self,
        sprites: &[&Sprite],
        overlay_lines: &[String],
    ) -> Result<(), Error> {
        let width = self.viewport.width;
        let height = self.viewport.height;
        let frame = self.pixels.frame_mut();

        clear_frame(frame, CLEAR_COLOR);
        for sprite in sprites {
            blit_sprite(frame, width, height, sprite);
        }

        let mut y = OVERLAY_PADDING_PX;
        for line in overlay_lines {
            draw_text(
                frame,
                width,
                height,
                OVERLAY_PADDING_PX,
                y,
                line,
                OVERLAY_TEXT_COLOR,
            );
            y += LINE_ADVANCE;
        }

        self.pixels.render()
    }
}

fn clear_frame(frame: &mut [u8], color: [u8; 4]) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&color);
    }
}

/// Blit one sprite quad: nearest-neighbor sampling of its UV sub-rectangle,
/// horizontal/vertical mirroring for negative scale, alpha blended.
fn blit_sprite(frame: &mut [u8], width: u32, height: u32, sprite: &Sprite) {
    let Some(texture) = sprite.texture() else {
        return;
    };
    if width == 0 || height == 0 || texture.width() == 0 || texture.height() == 0 {
        return;
    }

    let viewport = Viewport { width, height };
    let position = sprite.position();
    let scale = sprite.scale();
    let half_x = scale.x.abs();
    let half_y = scale.y.abs();
    if half_x <= 0.0 || half_y <= 0.0 {
        return;
    }

    let (left, top) = ndc_to_screen_px(
        Vec2::new(position.x - half_x, position.y + half_y),
        viewport,
    );
    let (right, bottom) = ndc_to_screen_px(
        Vec2::new(position.x + half_x, position.y - half_y),
        viewport,
    );
    if right <= left || bottom <= top {
        return;
    }
    let dest_w = (right - left) as f32;
    let dest_h = (bottom - top) as f32;

    let draw_left = left.max(0);
    let draw_top = top.max(0);
    let draw_right = right.min(width as i32);
    let draw_bottom = bottom.min(height as i32);
    if draw_left >= draw_right || draw_top >= draw_bottom {
        return;
    }

    let uv = sprite.uv();
    let flip_x = scale.x < 0.0;
    let flip_y = scale.y < 0.0;
    let tex_w = texture.width();
    let tex_h = texture.height();
    let rgba = texture.rgba();

    for out_y in draw_top..draw_bottom {
        let mut t_y = (out_y - top) as f32 / dest_h;
        if flip_y {
            t_y = 1.0 - t_y;
        }
        let v = uv.v0 + (uv.v1 - uv.v0) * t_y;
        let src_y = ((v * tex_h as f32).floor() as i64).clamp(0, tex_h as i64 - 1) as usize;
        let src_row_offset = src_y * tex_w as usize * 4;

        for out_x in draw_left..draw_right {
            let mut t_x = (out_x - left) as f32 / dest_w;
            if flip_x {
                t_x = 1.0 - t_x;
            }
            let u = uv.u0 + (uv.u1 - uv.u0) * t_x;
            let src_x = ((u * tex_w as f32).floor() as i64).clamp(0, tex_w as i64 - 1) as usize;
            let src_offset = src_row_offset + src_x * 4;
            let color = [
                rgba[src_offset],
                rgba[src_offset + 1],
                rgba[src_offset + 2],
                rgba[src_offset + 3],
            ];
            blend_pixel_rgba(frame, width as usize, out_x as usize, out_y as usize, color);
        }
    }
}

/// Source-over blend, matching GL_SRC_ALPHA / GL_ONE_MINUS_SRC_ALPHA.
fn blend_pixel_rgba(frame: &mut [u8], width: usize, x: usize, y: usize, color: [u8; 4]) {
    let alpha = color[3] as u32;
    if alpha == 0 {
        return;
    }
    let Some(pixel_offset) = y.checked_mul(width).and_then(|row| row.checked_add(x)) else {
        return;
    };
    let Some(byte_offset) = pixel_offset.checked_mul(4) else {
        return;
    };
    let Some(end) = byte_offset.checked_add(4) else {
        return;
    };
    if end > frame.len() {
        return;
    }

    if alpha == 255 {
        frame[byte_offset..end].copy_from_slice(&color);
        return;
    }
    let inv_alpha = 255 - alpha;
    for channel in 0..3 {
        let src = color[channel] as u32;
        let dst = frame[byte_offset + channel] as u32;
        frame[byte_offset + channel] = ((src * alpha + dst * inv_alpha) / 255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Texture;

    fn blank_frame(width: u32, height: u32) -> Vec<u8> {
        let mut frame = vec![0u8; width as usize * height as usize * 4];
        clear_frame(&mut frame, [0, 0, 0, 255]);
        frame
    }

    fn pixel_at(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let offset = (y as usize * width as usize + x as usize) * 4;
        [
            frame[offset],
            frame[offset + 1],
            frame[offset + 2],
            frame[offset + 3],
        ]
    }

    fn two_tone_sprite() -> Sprite {
        // Left pixel red, right pixel green.
        let rgba = vec![255, 0, 0, 255, 0, 255, 0, 255];
        Sprite::new(Texture::from_rgba(2, 1, rgba))
    }

    #[test]
    fn blit_fills_quad_with_sampled_texels() {
        let mut frame = blank_frame(4, 4);
        let mut sprite = two_tone_sprite();
        sprite.set_scale(Vec2::new(1.0, 1.0));

        blit_sprite(&mut frame, 4, 4, &sprite);

        assert_eq!(pixel_at(&frame, 4, 0, 0), [255, 0, 0, 255]);
        assert_eq!(pixel_at(&frame, 4, 3, 3), [0, 255, 0, 255]);
    }

    #[test]
    fn negative_x_scale_mirrors_horizontally() {
        let mut frame = blank_frame(4, 4);
        let mut sprite = two_tone_sprite();
        sprite.set_scale(Vec2::new(-1.0, 1.0));

        blit_sprite(&mut frame, 4, 4, &sprite);

        assert_eq!(pixel_at(&frame, 4, 0, 0), [0, 255, 0, 255]);
        assert_eq!(pixel_at(&frame, 4, 3, 0), [255, 0, 0, 255]);
    }

    #[test]
    fn released_sprite_draws_nothing() {
        let mut frame = blank_frame(4, 4);
        let mut sprite = two_tone_sprite();
        sprite.set_scale(Vec2::new(1.0, 1.0));
        sprite.release();

        blit_sprite(&mut frame, 4, 4, &sprite);

        assert_eq!(pixel_at(&frame, 4, 1, 1), [0, 0, 0, 255]);
    }

    #[test]
    fn uv_subrect_restricts_sampling() {
        let mut frame = blank_frame(4, 4);
        let mut sprite = two_tone_sprite();
        sprite.set_scale(Vec2::new(1.0, 1.0));
        // Select only the left column of the 1x2 sheet.
        sprite.set_uv_for_frame(0, 0, 1, 2);

        blit_sprite(&mut frame, 4, 4, &sprite);

        assert_eq!(pixel_at(&frame, 4, 0, 0), [255, 0, 0, 255]);
        assert_eq!(pixel_at(&frame, 4, 3, 3), [255, 0, 0, 255]);
    }

    #[test]
    fn transparent_texels_leave_background() {
        let mut frame = blank_frame(4, 4);
        let rgba = vec![255, 255, 255, 0, 255, 255, 255, 0];
        let mut sprite = Sprite::new(Texture::from_rgba(2, 1, rgba));
        sprite.set_scale(Vec2::new(1.0, 1.0));

        blit_sprite(&mut frame, 4, 4, &sprite);

        assert_eq!(pixel_at(&frame, 4, 2, 2), [0, 0, 0, 255]);
    }

    #[test]
    fn half_alpha_blends_toward_source() {
        let mut frame = blank_frame(1, 1);
        blend_pixel_rgba(&mut frame, 1, 0, 0, [255, 0, 0, 128]);
        let pixel = pixel_at(&frame, 1, 0, 0);
        assert!(pixel[0] > 120 && pixel[0] < 136);
        assert_eq!(pixel[1], 0);
    }

    #[test]
    fn offscreen_quad_is_clipped() {
        let mut frame = blank_frame(4, 4);
        let mut sprite = two_tone_sprite();
        sprite.set_position(Vec2::new(-10.0, 0.0));
        sprite.set_scale(Vec2::new(0.5, 0.5));

        blit_sprite(&mut frame, 4, 4, &sprite);

        assert!(frame
            .chunks_exact(4)
            .all(|pixel| pixel == [0, 0, 0, 255]));
    }
}
