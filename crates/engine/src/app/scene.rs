use super::input::InputSnapshot;
use super::sprite::Sprite;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    Quit,
}

/// One game scene driven by the loop runner.
///
/// `update` runs once per rendered frame with the monotonic time since app
/// start; all of the frame's input has already been collected into the
/// snapshot. `sprites` returns the frame's draw list in back-to-front order;
/// later entries occlude earlier ones.
pub trait Scene {
    fn load(&mut self);
    fn update(&mut self, now_seconds: f32, input: &InputSnapshot) -> SceneCommand;
    fn sprites(&self) -> Vec<&Sprite>;
    fn overlay_lines(&self) -> Vec<String> {
        Vec::new()
    }
    fn unload(&mut self);
}
