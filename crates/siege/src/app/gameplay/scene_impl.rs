impl Scene for SiegeScene {
    fn load(&mut self) {
        self.ally_tower_archer.attack();
        self.enemy_tower_archer.attack();
        self.probe.begin_move();
        info!(units = self.unit_count(), "scene_loaded");
    }

    fn update(&mut self, now_seconds: f32, input: &InputSnapshot) -> SceneCommand {
        for command in self.collect_commands(input) {
            self.apply_command(command);
        }
        self.tick(now_seconds);
        SceneCommand::None
    }

    fn sprites(&self) -> Vec<&Sprite> {
        self.draw_list()
    }

    fn overlay_lines(&self) -> Vec<String> {
        vec![
            "CLICK A UNIT ICON TO DEPLOY".to_string(),
            format!("PROBE HP: {}", self.probe.health()),
            format!("UNITS: {}", self.unit_count()),
        ]
    }

    fn unload(&mut self) {
        info!(units = self.unit_count(), "scene_unload");
    }
}
