use crate::app::Vec2;

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

fn aspect_ratio(viewport: Viewport) -> f32 {
    if viewport.height == 0 {
        return 1.0;
    }
    viewport.width as f32 / viewport.height as f32
}

/// Map a screen-space point to pixel coordinates. Screen space spans
/// `[-aspect, aspect]` horizontally and `[-1, 1]` vertically, y up;
/// pixel (0, 0) is the window's top-left corner.
pub fn ndc_to_screen_px(point: Vec2, viewport: Viewport) -> (i32, i32) {
    let aspect = aspect_ratio(viewport);
    let x = (point.x / aspect + 1.0) * 0.5 * viewport.width as f32;
    let y = (1.0 - point.y) * 0.5 * viewport.height as f32;
    (x.round() as i32, y.round() as i32)
}

/// Inverse of [`ndc_to_screen_px`], for pointer coordinates.
pub fn screen_px_to_ndc(x: f32, y: f32, viewport: Viewport) -> Vec2 {
    let aspect = aspect_ratio(viewport);
    let width = (viewport.width as f32).max(1.0);
    let height = (viewport.height as f32).max(1.0);
    Vec2 {
        x: (x / width * 2.0 - 1.0) * aspect,
        y: 1.0 - y / height * 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_viewport_center() {
        let viewport = Viewport {
            width: 1600,
            height: 800,
        };
        let (x, y) = ndc_to_screen_px(Vec2 { x: 0.0, y: 0.0 }, viewport);
        assert_eq!(x, 800);
        assert_eq!(y, 400);
    }

    #[test]
    fn horizontal_range_covers_aspect() {
        let viewport = Viewport {
            width: 1600,
            height: 800,
        };
        let (left, _) = ndc_to_screen_px(Vec2 { x: -2.0, y: 0.0 }, viewport);
        let (right, _) = ndc_to_screen_px(Vec2 { x: 2.0, y: 0.0 }, viewport);
        assert_eq!(left, 0);
        assert_eq!(right, 1600);
    }

    #[test]
    fn y_axis_points_up() {
        let viewport = Viewport {
            width: 800,
            height: 800,
        };
        let (_, top) = ndc_to_screen_px(Vec2 { x: 0.0, y: 1.0 }, viewport);
        let (_, bottom) = ndc_to_screen_px(Vec2 { x: 0.0, y: -1.0 }, viewport);
        assert_eq!(top, 0);
        assert_eq!(bottom, 800);
    }

    #[test]
    fn screen_px_round_trips_through_ndc() {
        let viewport = Viewport {
            width: 1600,
            height: 800,
        };
        let ndc = screen_px_to_ndc(400.0, 600.0, viewport);
        let (x, y) = ndc_to_screen_px(ndc, viewport);
        assert_eq!(x, 400);
        assert_eq!(y, 600);
    }
}
