/// Every texture the game needs, loaded up front so a missing or broken
/// asset fails startup instead of a frame.
pub(crate) struct SiegeAssets {
    background: Arc<Texture>,
    menu: Arc<Texture>,
    ally_tower: Arc<Texture>,
    enemy_tower: Arc<Texture>,
    archer: Arc<Texture>,
    barbarian: Arc<Texture>,
    wizard: Arc<Texture>,
    enemy_archer: Arc<Texture>,
    enemy_barbarian: Arc<Texture>,
    archer_icon: Arc<Texture>,
    barbarian_icon: Arc<Texture>,
    wizard_icon: Arc<Texture>,
}

impl SiegeAssets {
    pub(crate) fn load(assets_dir: &Path) -> Result<Self, TextureError> {
        Ok(Self {
            background: Texture::load(assets_dir, "background")?,
            menu: Texture::load(assets_dir, "menu")?,
            ally_tower: Texture::load(assets_dir, "ally_tower")?,
            enemy_tower: Texture::load(assets_dir, "enemy_tower")?,
            archer: Texture::load(assets_dir, "archer")?,
            barbarian: Texture::load(assets_dir, "barbarian")?,
            wizard: Texture::load(assets_dir, "wizard")?,
            enemy_archer: Texture::load(assets_dir, "enemy_archer")?,
            enemy_barbarian: Texture::load(assets_dir, "enemy_barbarian")?,
            archer_icon: Texture::load(assets_dir, "archer_icon")?,
            barbarian_icon: Texture::load(assets_dir, "barbarian_icon")?,
            wizard_icon: Texture::load(assets_dir, "wizard_icon")?,
        })
    }
}

/// The whole battlefield: static scenery and icons, the fixed tower
/// defenders, the damage probe, and one growable roster per deployable unit
/// type. Owns all simulation state; the loop runner drives it through the
/// `Scene` trait.
pub(crate) struct SiegeScene {
    background: Sprite,
    menu: Sprite,
    archer_icon: Sprite,
    barbarian_icon: Sprite,
    wizard_icon: Sprite,
    ally_tower: Sprite,
    enemy_tower: Sprite,
    ally_tower_archer: Unit,
    enemy_tower_archer: Unit,
    probe: Unit,
    barbarians: Roster,
    archers: Roster,
    wizards: Roster,
    archer_template: Sprite,
    barbarian_template: Sprite,
    wizard_template: Sprite,
    archer_profile: Arc<AnimationProfile>,
    barbarian_profile: Arc<AnimationProfile>,
    wizard_profile: Arc<AnimationProfile>,
}

impl SiegeScene {
    pub(crate) fn new(assets: SiegeAssets) -> Result<Self, String> {
        let archer_profile = Arc::new(archer_profile()?);
        let barbarian_profile = Arc::new(barbarian_profile()?);
        let wizard_profile = Arc::new(wizard_profile()?);
        let enemy_barbarian_profile = Arc::new(enemy_barbarian_profile()?);

        let mut background = Sprite::new(Arc::clone(&assets.background));
        background.set_scale(Vec2::new(2.5, 0.85));
        background.set_position(Vec2::new(0.0, 0.1));

        let mut menu = Sprite::new(Arc::clone(&assets.menu));
        menu.set_scale(Vec2::new(2.0, 0.19));
        menu.set_position(Vec2::new(0.0, -0.685));

        let mut barbarian_icon = Sprite::new(Arc::clone(&assets.barbarian_icon));
        barbarian_icon.set_scale(Vec2::new(0.15, 0.15));
        barbarian_icon.set_position(Vec2::new(-0.45, -0.705));

        let mut archer_icon = Sprite::new(Arc::clone(&assets.archer_icon));
        archer_icon.set_scale(Vec2::new(0.13, 0.13));
        archer_icon.set_position(Vec2::new(-0.15, -0.71));

        let mut wizard_icon = Sprite::new(Arc::clone(&assets.wizard_icon));
        wizard_icon.set_scale(Vec2::new(0.1375, 0.1375));
        wizard_icon.set_position(Vec2::new(0.15, -0.71));

        let mut ally_tower = Sprite::new(Arc::clone(&assets.ally_tower));
        ally_tower.set_scale(Vec2::new(-0.425, 0.425));
        ally_tower.set_position(Vec2::new(-1.25, -0.14));

        let mut enemy_tower = Sprite::new(Arc::clone(&assets.enemy_tower));
        enemy_tower.set_scale(Vec2::new(0.425, 0.425));
        enemy_tower.set_position(Vec2::new(1.25, -0.14));

        let mut archer_template = Sprite::new(Arc::clone(&assets.archer));
        archer_template.set_scale(Vec2::new(0.2, 0.12));

        let mut barbarian_template = Sprite::new(Arc::clone(&assets.barbarian));
        barbarian_template.set_scale(Vec2::new(0.2, 0.12));

        let mut wizard_template = Sprite::new(Arc::clone(&assets.wizard));
        wizard_template.set_scale(Vec2::new(0.25, 0.15));

        let mut ally_tower_archer = Unit::new(&archer_template, Arc::clone(&archer_profile));
        ally_tower_archer
            .sprite_mut()
            .set_position(Vec2::new(-1.16, -0.115));

        let mut enemy_archer_template = Sprite::new(Arc::clone(&assets.enemy_archer));
        enemy_archer_template.set_scale(Vec2::new(-0.25, 0.15));
        let mut enemy_tower_archer =
            Unit::new(&enemy_archer_template, Arc::clone(&archer_profile));
        enemy_tower_archer
            .sprite_mut()
            .set_position(Vec2::new(1.775, -0.18));

        let mut enemy_barbarian_template = Sprite::new(Arc::clone(&assets.enemy_barbarian));
        enemy_barbarian_template.set_scale(Vec2::new(-0.2, 0.12));
        let mut probe = Unit::new(&enemy_barbarian_template, enemy_barbarian_profile);
        probe.sprite_mut().set_position(PROBE_POSITION);

        Ok(Self {
            background,
            menu,
            archer_icon,
            barbarian_icon,
            wizard_icon,
            ally_tower,
            enemy_tower,
            ally_tower_archer,
            enemy_tower_archer,
            probe,
            barbarians: Roster::default(),
            archers: Roster::default(),
            wizards: Roster::default(),
            archer_template,
            barbarian_template,
            wizard_template,
            archer_profile,
            barbarian_profile,
            wizard_profile,
        })
    }

    fn template_and_profile(&self, kind: UnitKind) -> Option<(&Sprite, &Arc<AnimationProfile>)> {
        match kind {
            UnitKind::Archer => Some((&self.archer_template, &self.archer_profile)),
            UnitKind::Barbarian => Some((&self.barbarian_template, &self.barbarian_profile)),
            UnitKind::Wizard => Some((&self.wizard_template, &self.wizard_profile)),
            UnitKind::EnemyBarbarian => None,
        }
    }

    fn roster_mut(&mut self, kind: UnitKind) -> Option<&mut Roster> {
        match kind {
            UnitKind::Archer => Some(&mut self.archers),
            UnitKind::Barbarian => Some(&mut self.barbarians),
            UnitKind::Wizard => Some(&mut self.wizards),
            UnitKind::EnemyBarbarian => None,
        }
    }

    fn deploy(&mut self, kind: UnitKind) {
        let Some((template, profile)) = self.template_and_profile(kind) else {
            warn!(kind = kind.name(), "refused deploy for non-deployable kind");
            return;
        };
        let mut unit = Unit::new(template, Arc::clone(profile));
        unit.sprite_mut().set_position(DEPLOY_POSITION);
        unit.begin_move();

        let Some(roster) = self.roster_mut(kind) else {
            return;
        };
        roster.spawn(unit);
        info!(kind = kind.name(), count = roster.len(), "unit_deployed");
    }

    fn collect_commands(&self, input: &InputSnapshot) -> Vec<GameCommand> {
        let mut commands = Vec::new();

        if input.left_click_pressed() {
            if let Some(cursor_px) = input.cursor_position_px() {
                let (width, height) = input.window_size();
                let cursor = screen_px_to_ndc(cursor_px.x, cursor_px.y, Viewport { width, height });
                if self.archer_icon.hit(cursor.x, cursor.y) {
                    commands.push(GameCommand::Deploy(UnitKind::Archer));
                }
                if self.barbarian_icon.hit(cursor.x, cursor.y) {
                    commands.push(GameCommand::Deploy(UnitKind::Barbarian));
                }
                if self.wizard_icon.hit(cursor.x, cursor.y) {
                    commands.push(GameCommand::Deploy(UnitKind::Wizard));
                }
            }
        }

        if input.pressed(InputAction::DeployBarbarian) {
            commands.push(GameCommand::Deploy(UnitKind::Barbarian));
        }
        if input.pressed(InputAction::DeployArcher) {
            commands.push(GameCommand::Deploy(UnitKind::Archer));
        }
        if input.pressed(InputAction::KillArchers) {
            commands.push(GameCommand::KillAll(UnitKind::Archer));
        }
        if input.pressed(InputAction::DamageProbe) {
            commands.push(GameCommand::DamageProbe);
        }

        commands
    }

    fn apply_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::Deploy(kind) => self.deploy(kind),
            GameCommand::KillAll(kind) => {
                let Some(roster) = self.roster_mut(kind) else {
                    warn!(kind = kind.name(), "refused kill-all for non-deployable kind");
                    return;
                };
                for unit in roster.units_mut() {
                    unit.die();
                }
                info!(kind = kind.name(), count = roster.len(), "roster_killed");
            }
            GameCommand::DamageProbe => {
                self.probe.hurt(PROBE_DAMAGE_PER_PRESS);
                info!(
                    kind = UnitKind::EnemyBarbarian.name(),
                    health = self.probe.health(),
                    dead = self.probe.is_dead(),
                    "probe_damaged"
                );
            }
        }
    }

    fn tick(&mut self, now_seconds: f32) {
        self.ally_tower_archer.advance(now_seconds);
        self.enemy_tower_archer.advance(now_seconds);
        self.probe.advance(now_seconds);
        self.barbarians.tick(now_seconds);
        self.archers.tick(now_seconds);
        self.wizards.tick(now_seconds);
    }

    /// Fixed back-to-front compositing order: scenery and UI first, then the
    /// tower defenders and probe, then each roster in deployment-type order.
    fn draw_list(&self) -> Vec<&Sprite> {
        let mut sprites = vec![
            &self.background,
            &self.menu,
            &self.archer_icon,
            &self.barbarian_icon,
            &self.wizard_icon,
            &self.ally_tower,
            &self.enemy_tower,
            self.ally_tower_archer.sprite(),
            self.enemy_tower_archer.sprite(),
            self.probe.sprite(),
        ];
        for unit in self.barbarians.units() {
            sprites.push(unit.sprite());
        }
        for unit in self.archers.units() {
            sprites.push(unit.sprite());
        }
        for unit in self.wizards.units() {
            sprites.push(unit.sprite());
        }
        sprites
    }

    fn unit_count(&self) -> usize {
        self.barbarians.len() + self.archers.len() + self.wizards.len()
    }
}
