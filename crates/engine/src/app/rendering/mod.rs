mod renderer;
mod text;
mod transform;

pub use renderer::Renderer;
pub use transform::{ndc_to_screen_px, screen_px_to_ndc, Viewport};
