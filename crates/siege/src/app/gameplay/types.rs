#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum UnitKind {
    Archer,
    Barbarian,
    Wizard,
    EnemyBarbarian,
}

impl UnitKind {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Archer => "archer",
            Self::Barbarian => "barbarian",
            Self::Wizard => "wizard",
            Self::EnemyBarbarian => "enemy_barbarian",
        }
    }
}

/// Index into an [`AnimationProfile`]'s clip table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClipId(pub(crate) usize);

/// Inclusive range of flattened sheet frames making up one animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClipRange {
    pub(crate) first: u32,
    pub(crate) last: u32,
}

impl ClipRange {
    pub(crate) const fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    fn frame_count(self) -> u32 {
        self.last - self.first + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClipRole {
    Attack,
    Move,
    Death,
    Hurt,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RoleClips {
    pub(crate) attack: ClipId,
    pub(crate) movement: ClipId,
    pub(crate) death: ClipId,
    pub(crate) hurt: ClipId,
}

impl RoleClips {
    fn clip_for(self, role: ClipRole) -> ClipId {
        match role {
            ClipRole::Attack => self.attack,
            ClipRole::Move => self.movement,
            ClipRole::Death => self.death,
            ClipRole::Hurt => self.hurt,
        }
    }
}

/// Immutable sprite-sheet layout and base stats shared by every unit of one
/// type. Validated once at startup; a bad table never reaches the simulation.
#[derive(Debug)]
pub(crate) struct AnimationProfile {
    rows: u32,
    cols: u32,
    frame_duration: f32,
    clips: Vec<ClipRange>,
    roles: RoleClips,
    max_health: i32,
    damage: i32,
    speed: f32,
}

impl AnimationProfile {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        rows: u32,
        cols: u32,
        frame_duration: f32,
        clips: Vec<ClipRange>,
        roles: RoleClips,
        max_health: i32,
        damage: i32,
        speed: f32,
    ) -> Result<Self, String> {
        if rows == 0 || cols == 0 {
            return Err(format!("sheet grid must be non-empty, got {rows}x{cols}"));
        }
        if frame_duration <= 0.0 {
            return Err(format!(
                "frame duration must be positive, got {frame_duration}"
            ));
        }
        let frame_capacity = rows * cols;
        for (index, clip) in clips.iter().enumerate() {
            if clip.last < clip.first {
                return Err(format!(
                    "clip {index} range {}..={} is reversed",
                    clip.first, clip.last
                ));
            }
            if clip.last >= frame_capacity {
                return Err(format!(
                    "clip {index} ends at frame {} but the {rows}x{cols} sheet holds {frame_capacity} frames",
                    clip.last
                ));
            }
        }
        for (role_name, clip) in [
            ("attack", roles.attack),
            ("move", roles.movement),
            ("death", roles.death),
            ("hurt", roles.hurt),
        ] {
            if clip.0 >= clips.len() {
                return Err(format!(
                    "{role_name} role points at clip {} but only {} clips exist",
                    clip.0,
                    clips.len()
                ));
            }
        }
        Ok(Self {
            rows,
            cols,
            frame_duration,
            clips,
            roles,
            max_health,
            damage,
            speed,
        })
    }

    pub(crate) fn clip_range(&self, clip: ClipId) -> Option<ClipRange> {
        self.clips.get(clip.0).copied()
    }

    pub(crate) fn clip_for_role(&self, role: ClipRole) -> ClipId {
        self.roles.clip_for(role)
    }

    pub(crate) fn clip_count(&self) -> usize {
        self.clips.len()
    }

    pub(crate) fn max_health(&self) -> i32 {
        self.max_health
    }

    pub(crate) fn damage(&self) -> i32 {
        self.damage
    }

    pub(crate) fn frame_duration(&self) -> f32 {
        self.frame_duration
    }
}

/// One spawned, animated entity: a sprite instance bound to its type's shared
/// profile, plus the mutable animation/combat state machine.
///
/// States are encoded by the active clip and the `is_moving`/`is_dead`
/// flags. `is_dead` is a one-way latch: after `die`, every transition and
/// tick is a no-op and the sprite's texture has been released.
#[derive(Debug)]
pub(crate) struct Unit {
    sprite: Sprite,
    profile: Arc<AnimationProfile>,
    current_clip: ClipId,
    frame_start: u32,
    frame_count: u32,
    frame: u32,
    next_advance_at: f32,
    health: i32,
    is_moving: bool,
    is_dead: bool,
}

impl Unit {
    /// A fresh unit has no clip selected yet; callers enter the first real
    /// state with `begin_move`/`attack` (or `set_animation` directly).
    pub(crate) fn new(template: &Sprite, profile: Arc<AnimationProfile>) -> Self {
        Self {
            sprite: template.clone(),
            health: profile.max_health,
            profile,
            current_clip: ClipId(0),
            frame_start: 0,
            frame_count: 0,
            frame: 0,
            next_advance_at: 0.0,
            is_moving: true,
            is_dead: false,
        }
    }

    fn set_frame(&mut self, frame: u32) {
        self.frame = frame;
        let row = frame / self.profile.cols;
        let col = frame % self.profile.cols;
        self.sprite
            .set_uv_for_frame(row, col, self.profile.rows, self.profile.cols);
    }

    /// Switch to a clip. Out-of-range ids are ignored and leave all state
    /// untouched.
    pub(crate) fn set_animation(&mut self, clip: ClipId) {
        let Some(range) = self.profile.clip_range(clip) else {
            debug!(clip = clip.0, "ignored out-of-range clip id");
            return;
        };
        self.current_clip = clip;
        self.frame_start = range.first;
        self.frame_count = range.frame_count();
        self.set_frame(range.first);
    }

    /// Step the looping animation once the current frame's display time has
    /// elapsed. Called once per rendered frame with the monotonic clock.
    pub(crate) fn advance(&mut self, now_seconds: f32) {
        if self.is_dead || self.frame_count == 0 {
            return;
        }
        if now_seconds > self.next_advance_at {
            self.next_advance_at = now_seconds + self.profile.frame_duration;
            let next = if self.frame == self.frame_start + self.frame_count - 1 {
                self.frame_start
            } else {
                self.frame + 1
            };
            self.set_frame(next);
        }
    }

    pub(crate) fn attack(&mut self) {
        if self.is_dead {
            return;
        }
        self.is_moving = false;
        self.set_animation(self.profile.clip_for_role(ClipRole::Attack));
    }

    pub(crate) fn begin_move(&mut self) {
        if self.is_dead {
            return;
        }
        self.is_moving = true;
        self.set_animation(self.profile.clip_for_role(ClipRole::Move));
    }

    /// Apply damage. Movement halts until an explicit `begin_move`/`attack`
    /// follows; lethal damage transitions straight to the death state.
    pub(crate) fn hurt(&mut self, damage: i32) {
        if self.is_dead {
            return;
        }
        self.health -= damage;
        self.is_moving = false;
        if self.health <= 0 {
            self.die();
        } else {
            self.set_animation(self.profile.clip_for_role(ClipRole::Hurt));
        }
    }

    /// Enter the death state and release the sprite's texture exactly once.
    pub(crate) fn die(&mut self) {
        if self.is_dead {
            return;
        }
        self.set_animation(self.profile.clip_for_role(ClipRole::Death));
        self.sprite.release();
        self.is_dead = true;
    }

    /// Linear walk: translate x by the profile's per-tick speed while the
    /// unit is moving.
    pub(crate) fn update_position(&mut self) {
        if self.is_dead || !self.is_moving {
            return;
        }
        let position = self.sprite.position();
        self.sprite
            .set_position(Vec2::new(position.x + self.profile.speed, position.y));
    }

    pub(crate) fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub(crate) fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }

    pub(crate) fn health(&self) -> i32 {
        self.health
    }

    pub(crate) fn is_moving(&self) -> bool {
        self.is_moving
    }

    pub(crate) fn is_dead(&self) -> bool {
        self.is_dead
    }

    pub(crate) fn current_clip(&self) -> ClipId {
        self.current_clip
    }

    pub(crate) fn frame(&self) -> u32 {
        self.frame
    }

    pub(crate) fn frame_start(&self) -> u32 {
        self.frame_start
    }

    pub(crate) fn frame_count(&self) -> u32 {
        self.frame_count
    }
}

/// Insertion-ordered collection of every spawned unit of one type. Units are
/// never removed; dead ones keep their slot but stop animating and drawing.
#[derive(Debug, Default)]
pub(crate) struct Roster {
    units: Vec<Unit>,
}

impl Roster {
    pub(crate) fn spawn(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    pub(crate) fn tick(&mut self, now_seconds: f32) {
        for unit in &mut self.units {
            unit.update_position();
            unit.advance(now_seconds);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.units.len()
    }

    pub(crate) fn units(&self) -> &[Unit] {
        &self.units
    }

    pub(crate) fn units_mut(&mut self) -> &mut [Unit] {
        &mut self.units
    }
}

/// Input resolved into a simulation mutation. Every command collected for a
/// frame is applied before that frame's advance/draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GameCommand {
    Deploy(UnitKind),
    KillAll(UnitKind),
    DamageProbe,
}
