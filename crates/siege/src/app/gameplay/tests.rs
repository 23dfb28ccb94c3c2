    use super::*;

    use engine::ndc_to_screen_px;

    fn test_texture() -> Arc<Texture> {
        Texture::from_rgba(1, 1, vec![255, 255, 255, 255])
    }

    fn test_sprite() -> Sprite {
        Sprite::new(test_texture())
    }

    // 4x5 sheet, clips (0,4)(5,9)(10,14)(15,19), attack=0 move=1 death=2 hurt=3.
    fn test_profile() -> Arc<AnimationProfile> {
        Arc::new(
            AnimationProfile::new(
                4,
                5,
                FRAME_DURATION_SECONDS,
                archer_clip_table(),
                RoleClips {
                    attack: ClipId(0),
                    movement: ClipId(1),
                    death: ClipId(2),
                    hurt: ClipId(3),
                },
                100,
                20,
                WALK_SPEED_PER_TICK,
            )
            .expect("test profile is valid"),
        )
    }

    fn test_unit() -> Unit {
        Unit::new(&test_sprite(), test_profile())
    }

    fn test_assets() -> SiegeAssets {
        SiegeAssets {
            background: test_texture(),
            menu: test_texture(),
            ally_tower: test_texture(),
            enemy_tower: test_texture(),
            archer: test_texture(),
            barbarian: test_texture(),
            wizard: test_texture(),
            enemy_archer: test_texture(),
            enemy_barbarian: test_texture(),
            archer_icon: test_texture(),
            barbarian_icon: test_texture(),
            wizard_icon: test_texture(),
        }
    }

    fn test_scene() -> SiegeScene {
        let mut scene = SiegeScene::new(test_assets()).expect("scene construction");
        scene.load();
        scene
    }

    fn press(action: InputAction) -> InputSnapshot {
        InputSnapshot::empty().with_action_pressed(action, true)
    }

    fn click_snapshot(cursor_px: Vec2, window_size: (u32, u32)) -> InputSnapshot {
        InputSnapshot::empty()
            .with_left_click_pressed(true)
            .with_cursor_position_px(Some(cursor_px))
            .with_window_size(window_size)
    }

    fn click_at_ndc(point: Vec2) -> InputSnapshot {
        let window_size = (1600, 800);
        let (x, y) = ndc_to_screen_px(
            point,
            Viewport {
                width: window_size.0,
                height: window_size.1,
            },
        );
        click_snapshot(Vec2::new(x as f32, y as f32), window_size)
    }

    // Times spaced a hair over the frame duration so each call clears the
    // strictly-greater-than gate.
    fn step_time(step: u32) -> f32 {
        step as f32 * (FRAME_DURATION_SECONDS + 0.01)
    }

    #[test]
    fn set_animation_enters_clip_at_its_first_frame() {
        let mut unit = test_unit();
        unit.set_animation(ClipId(1));
        assert_eq!(unit.current_clip(), ClipId(1));
        assert_eq!(unit.frame(), 5);
        assert_eq!(unit.frame_start(), 5);
        assert_eq!(unit.frame_count(), 5);
    }

    #[test]
    fn set_animation_ignores_out_of_range_clip_ids() {
        let mut unit = test_unit();
        unit.set_animation(ClipId(1));
        let uv_before = unit.sprite().uv();

        unit.set_animation(ClipId(9));

        assert_eq!(unit.current_clip(), ClipId(1));
        assert_eq!(unit.frame(), 5);
        assert_eq!(unit.frame_start(), 5);
        assert_eq!(unit.frame_count(), 5);
        assert_eq!(unit.sprite().uv(), uv_before);
    }

    #[test]
    fn advance_without_a_selected_clip_is_a_noop() {
        let mut unit = test_unit();
        unit.advance(100.0);
        assert_eq!(unit.frame(), 0);
        assert_eq!(unit.frame_count(), 0);
    }

    #[test]
    fn advance_before_the_deadline_leaves_the_frame() {
        let mut unit = test_unit();
        unit.set_animation(ClipId(1));
        unit.advance(0.05);
        assert_eq!(unit.frame(), 6);

        // Deadline is now 0.05 + frame duration; an earlier query must not step.
        unit.advance(0.1);
        assert_eq!(unit.frame(), 6);
    }

    #[test]
    fn advance_steps_one_frame_per_elapsed_duration() {
        let mut unit = test_unit();
        unit.set_animation(ClipId(1));

        let mut observed = vec![unit.frame()];
        for step in 1..=5 {
            unit.advance(step_time(step));
            observed.push(unit.frame());
        }

        assert_eq!(observed, vec![5, 6, 7, 8, 9, 5]);
    }

    #[test]
    fn looping_revisits_every_clip_frame_in_order_indefinitely() {
        let mut unit = test_unit();
        unit.set_animation(ClipId(1));

        let mut observed = Vec::new();
        for step in 1..=10 {
            unit.advance(step_time(step));
            observed.push(unit.frame());
        }

        assert_eq!(observed, vec![6, 7, 8, 9, 5, 6, 7, 8, 9, 5]);
    }

    #[test]
    fn nonlethal_hurt_decrements_health_and_selects_hurt_clip() {
        let mut unit = test_unit();
        unit.begin_move();

        unit.hurt(30);

        assert_eq!(unit.health(), 70);
        assert!(!unit.is_dead());
        assert!(!unit.is_moving());
        assert_eq!(unit.current_clip(), ClipId(3));
        assert_eq!(unit.frame(), 15);
    }

    #[test]
    fn hurt_does_not_resume_movement_until_told_to() {
        let mut unit = test_unit();
        unit.begin_move();
        unit.hurt(30);
        let x_before = unit.sprite().position().x;

        unit.update_position();
        assert_eq!(unit.sprite().position().x, x_before);

        unit.begin_move();
        unit.update_position();
        assert!(unit.sprite().position().x > x_before);
    }

    #[test]
    fn repeated_hurts_drain_health_then_kill() {
        let mut unit = test_unit();
        unit.begin_move();

        unit.hurt(30);
        unit.hurt(30);
        unit.hurt(30);
        assert_eq!(unit.health(), 10);
        assert!(!unit.is_dead());
        assert_eq!(unit.current_clip(), ClipId(3));

        unit.hurt(30);
        assert_eq!(unit.health(), -20);
        assert!(unit.is_dead());
        assert_eq!(unit.current_clip(), ClipId(2));
        assert!(unit.sprite().is_released());
    }

    #[test]
    fn lethal_hurt_transitions_to_dead_exactly_once() {
        let mut unit = test_unit();
        unit.hurt(150);

        assert!(unit.is_dead());
        assert_eq!(unit.health(), -50);
        assert_eq!(unit.current_clip(), ClipId(2));
        assert_eq!(unit.frame(), 10);
        assert!(unit.sprite().is_released());

        // Further transitions on a dead unit change nothing observable.
        unit.hurt(10);
        unit.die();
        unit.begin_move();
        unit.attack();
        unit.advance(1000.0);
        unit.update_position();

        assert_eq!(unit.health(), -50);
        assert_eq!(unit.current_clip(), ClipId(2));
        assert_eq!(unit.frame(), 10);
        assert!(!unit.is_moving());
        assert_eq!(unit.sprite().position(), Vec2::default());
    }

    #[test]
    fn attack_halts_movement_and_selects_attack_clip() {
        let mut unit = test_unit();
        unit.begin_move();
        assert!(unit.is_moving());

        unit.attack();
        assert!(!unit.is_moving());
        assert_eq!(unit.current_clip(), ClipId(0));
        assert_eq!(unit.frame(), 0);
    }

    #[test]
    fn update_position_walks_right_by_profile_speed() {
        let mut unit = test_unit();
        unit.begin_move();
        let start = unit.sprite().position().x;

        unit.update_position();
        unit.update_position();

        let moved = unit.sprite().position().x - start;
        assert!((moved - 2.0 * WALK_SPEED_PER_TICK).abs() < 1e-6);
    }

    #[test]
    fn profile_rejects_role_pointing_past_clip_table() {
        let result = AnimationProfile::new(
            4,
            5,
            FRAME_DURATION_SECONDS,
            archer_clip_table(),
            RoleClips {
                attack: ClipId(0),
                movement: ClipId(1),
                death: ClipId(4),
                hurt: ClipId(2),
            },
            100,
            20,
            WALK_SPEED_PER_TICK,
        );
        assert!(result.is_err());
    }

    #[test]
    fn profile_rejects_reversed_clip_range() {
        let result = AnimationProfile::new(
            4,
            5,
            FRAME_DURATION_SECONDS,
            vec![ClipRange::new(4, 0)],
            RoleClips {
                attack: ClipId(0),
                movement: ClipId(0),
                death: ClipId(0),
                hurt: ClipId(0),
            },
            100,
            20,
            WALK_SPEED_PER_TICK,
        );
        assert!(result.is_err());
    }

    #[test]
    fn profile_rejects_clip_past_sheet_capacity() {
        let result = AnimationProfile::new(
            2,
            2,
            FRAME_DURATION_SECONDS,
            vec![ClipRange::new(0, 4)],
            RoleClips {
                attack: ClipId(0),
                movement: ClipId(0),
                death: ClipId(0),
                hurt: ClipId(0),
            },
            100,
            20,
            WALK_SPEED_PER_TICK,
        );
        assert!(result.is_err());
    }

    #[test]
    fn shipped_profiles_all_validate() {
        let archer = archer_profile().expect("archer");
        assert_eq!(archer.clip_count(), 4);
        assert_eq!(archer.frame_duration(), FRAME_DURATION_SECONDS);
        assert_eq!(archer.damage(), ARCHER_DAMAGE);
        assert_eq!(barbarian_profile().expect("barbarian").clip_count(), 5);
        assert_eq!(
            enemy_barbarian_profile().expect("enemy barbarian").clip_count(),
            5
        );
        assert_eq!(wizard_profile().expect("wizard").damage(), WIZARD_DAMAGE);
    }

    #[test]
    fn non_deployable_kind_is_refused_explicitly() {
        let mut scene = test_scene();
        scene.apply_command(GameCommand::Deploy(UnitKind::EnemyBarbarian));
        scene.apply_command(GameCommand::KillAll(UnitKind::EnemyBarbarian));
        assert_eq!(scene.unit_count(), 0);
        assert!(!scene.probe.is_dead());
    }

    #[test]
    fn new_unit_starts_at_profile_health() {
        let unit = test_unit();
        assert_eq!(unit.health(), test_profile().max_health());
        assert!(!unit.is_dead());
    }

    #[test]
    fn deploy_key_appends_units_in_call_order() {
        let mut scene = test_scene();

        scene.update(step_time(1), &press(InputAction::DeployArcher));
        assert_eq!(scene.archers.len(), 1);

        scene.update(step_time(2), &press(InputAction::DeployArcher));
        assert_eq!(scene.archers.len(), 2);

        for unit in scene.archers.units() {
            assert!(!unit.is_dead());
            assert!(unit.is_moving());
        }
    }

    #[test]
    fn deployed_unit_spawns_at_deploy_point_in_move_clip() {
        let mut scene = test_scene();
        scene.update(0.0, &press(InputAction::DeployBarbarian));

        let unit = &scene.barbarians.units()[0];
        // Position advanced once by the same frame's tick.
        let expected_x = DEPLOY_POSITION.x + WALK_SPEED_PER_TICK;
        assert!((unit.sprite().position().x - expected_x).abs() < 1e-6);
        assert_eq!(unit.current_clip(), ClipId(1));
    }

    #[test]
    fn commands_apply_before_the_frame_advances() {
        let mut scene = test_scene();

        // Deploy and tick in one update; the fresh unit must already take
        // part in the same frame's animation pass.
        scene.update(10.0, &press(InputAction::DeployArcher));

        let unit = &scene.archers.units()[0];
        assert_eq!(unit.frame(), 6);
    }

    #[test]
    fn icon_click_deploys_matching_type() {
        let mut scene = test_scene();

        scene.update(0.0, &click_at_ndc(Vec2::new(-0.15, -0.71)));
        assert_eq!(scene.archers.len(), 1);
        assert_eq!(scene.barbarians.len(), 0);

        scene.update(0.0, &click_at_ndc(Vec2::new(-0.45, -0.705)));
        assert_eq!(scene.barbarians.len(), 1);

        scene.update(0.0, &click_at_ndc(Vec2::new(0.15, -0.71)));
        assert_eq!(scene.wizards.len(), 1);
    }

    #[test]
    fn click_outside_every_icon_deploys_nothing() {
        let mut scene = test_scene();
        scene.update(0.0, &click_at_ndc(Vec2::new(0.0, 0.5)));
        assert_eq!(scene.unit_count(), 0);
    }

    #[test]
    fn click_without_cursor_position_is_ignored() {
        let mut scene = test_scene();
        let snapshot = InputSnapshot::empty()
            .with_left_click_pressed(true)
            .with_window_size((1600, 800));
        scene.update(0.0, &snapshot);
        assert_eq!(scene.unit_count(), 0);
    }

    #[test]
    fn kill_archers_key_kills_the_whole_roster_but_removes_nothing() {
        let mut scene = test_scene();
        scene.update(0.0, &press(InputAction::DeployArcher));
        scene.update(0.0, &press(InputAction::DeployArcher));

        scene.update(0.0, &press(InputAction::KillArchers));

        assert_eq!(scene.archers.len(), 2);
        for unit in scene.archers.units() {
            assert!(unit.is_dead());
            assert!(unit.sprite().is_released());
        }

        // Dead units stay put on later frames.
        scene.update(step_time(1), &InputSnapshot::empty());
        assert_eq!(scene.archers.len(), 2);
    }

    #[test]
    fn damage_probe_key_reports_through_probe_health() {
        let mut scene = test_scene();
        assert_eq!(scene.probe.health(), BASE_HEALTH);

        scene.update(0.0, &press(InputAction::DamageProbe));
        assert_eq!(scene.probe.health(), BASE_HEALTH - PROBE_DAMAGE_PER_PRESS);
        assert!(!scene.probe.is_dead());
        // Enemy barbarian hurt role points at clip 4.
        assert_eq!(scene.probe.current_clip(), ClipId(4));

        for _ in 0..9 {
            scene.update(0.0, &press(InputAction::DamageProbe));
        }
        assert!(scene.probe.is_dead());
        assert!(scene.probe.sprite().is_released());
    }

    #[test]
    fn load_puts_tower_archers_in_attack_and_probe_on_the_march() {
        let scene = test_scene();

        assert_eq!(scene.ally_tower_archer.current_clip(), ClipId(0));
        assert!(!scene.ally_tower_archer.is_moving());
        assert_eq!(scene.enemy_tower_archer.current_clip(), ClipId(0));

        assert_eq!(scene.probe.current_clip(), ClipId(1));
        assert!(scene.probe.is_moving());
    }

    #[test]
    fn draw_order_layers_scenery_before_units() {
        let mut scene = test_scene();
        scene.update(0.0, &press(InputAction::DeployBarbarian));
        scene.update(0.0, &press(InputAction::DeployArcher));

        let sprites = scene.sprites();
        assert!(std::ptr::eq(sprites[0], &scene.background));
        assert!(std::ptr::eq(sprites[1], &scene.menu));

        let barbarian_index = sprites
            .iter()
            .position(|sprite| std::ptr::eq(*sprite, scene.barbarians.units()[0].sprite()))
            .expect("barbarian sprite in draw list");
        let archer_index = sprites
            .iter()
            .position(|sprite| std::ptr::eq(*sprite, scene.archers.units()[0].sprite()))
            .expect("archer sprite in draw list");
        assert!(barbarian_index < archer_index);
    }

    #[test]
    fn overlay_reports_probe_health_and_unit_count() {
        let mut scene = test_scene();
        scene.update(0.0, &press(InputAction::DeployArcher));
        scene.update(0.0, &press(InputAction::DamageProbe));

        let lines = scene.overlay_lines();
        assert!(lines.iter().any(|line| line.contains("PROBE HP: 90")));
        assert!(lines.iter().any(|line| line.contains("UNITS: 1")));
    }
