fn archer_clip_table() -> Vec<ClipRange> {
    vec![
        ClipRange::new(0, 4),
        ClipRange::new(5, 9),
        ClipRange::new(10, 14),
        ClipRange::new(15, 19),
    ]
}

fn barbarian_clip_table() -> Vec<ClipRange> {
    vec![
        ClipRange::new(0, 4),
        ClipRange::new(5, 9),
        ClipRange::new(10, 14),
        ClipRange::new(15, 19),
        ClipRange::new(20, 24),
    ]
}

fn archer_profile() -> Result<AnimationProfile, String> {
    AnimationProfile::new(
        4,
        5,
        FRAME_DURATION_SECONDS,
        archer_clip_table(),
        RoleClips {
            attack: ClipId(0),
            movement: ClipId(1),
            death: ClipId(3),
            hurt: ClipId(2),
        },
        BASE_HEALTH,
        ARCHER_DAMAGE,
        WALK_SPEED_PER_TICK,
    )
}

fn barbarian_profile() -> Result<AnimationProfile, String> {
    AnimationProfile::new(
        5,
        5,
        FRAME_DURATION_SECONDS,
        barbarian_clip_table(),
        RoleClips {
            attack: ClipId(3),
            movement: ClipId(1),
            death: ClipId(0),
            hurt: ClipId(2),
        },
        BASE_HEALTH,
        BARBARIAN_DAMAGE,
        WALK_SPEED_PER_TICK,
    )
}

fn enemy_barbarian_profile() -> Result<AnimationProfile, String> {
    AnimationProfile::new(
        5,
        5,
        FRAME_DURATION_SECONDS,
        barbarian_clip_table(),
        RoleClips {
            attack: ClipId(3),
            movement: ClipId(1),
            death: ClipId(0),
            hurt: ClipId(4),
        },
        BASE_HEALTH,
        ENEMY_BARBARIAN_DAMAGE,
        WALK_SPEED_PER_TICK,
    )
}

fn wizard_profile() -> Result<AnimationProfile, String> {
    AnimationProfile::new(
        4,
        5,
        FRAME_DURATION_SECONDS,
        archer_clip_table(),
        RoleClips {
            attack: ClipId(0),
            movement: ClipId(1),
            death: ClipId(3),
            hurt: ClipId(2),
        },
        BASE_HEALTH,
        WIZARD_DAMAGE,
        WALK_SPEED_PER_TICK,
    )
}
