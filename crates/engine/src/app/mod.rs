mod input;
mod loop_runner;
mod math;
mod metrics;
mod rendering;
mod scene;
mod sprite;
mod texture;

pub use input::{InputAction, InputSnapshot};
pub use loop_runner::{run_app, run_app_with_metrics, AppError, LoopConfig};
pub use math::Vec2;
pub use metrics::{LoopMetricsSnapshot, MetricsHandle};
pub use rendering::{ndc_to_screen_px, screen_px_to_ndc, Renderer, Viewport};
pub use scene::{Scene, SceneCommand};
pub use sprite::{Sprite, UvRect};
pub use texture::{Texture, TextureError};
