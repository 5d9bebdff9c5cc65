use flappy_game::assets::Assets;
use flappy_game::compute::*;
use flappy_game::constants::*;
use flappy_game::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// A state whose obstacles never reach the actor within a test run.
fn open_sky_state() -> GameState {
    let mut s = init_state(&mut seeded_rng());
    for (i, slot) in s.obstacles.slots.iter_mut().enumerate() {
        slot.x = 10_000 + i as i32 * PIPE_SPACING;
    }
    s
}

fn sorted_xs(obstacles: &ObstacleSet) -> Vec<i32> {
    let mut xs: Vec<i32> = obstacles.slots.iter().map(|s| s.x).collect();
    xs.sort();
    xs
}

// ── init_state ────────────────────────────────────────────────────────────────

#[test]
fn init_state_actor_position() {
    let s = init_state(&mut seeded_rng());
    assert_eq!(s.actor.x, 200);
    assert_eq!(s.actor.y, 200);
    assert_eq!(s.actor.frame, 0);
    assert_eq!(s.actor.spin, 0);
}

#[test]
fn init_state_obstacles_spaced_from_first_x() {
    let s = init_state(&mut seeded_rng());
    let xs: Vec<i32> = s.obstacles.slots.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![500, 900, 1300]);
    for slot in &s.obstacles.slots {
        assert!(PIPE_Y_RANGE.contains(&slot.y));
    }
}

#[test]
fn init_state_score_and_phase() {
    let s = init_state(&mut seeded_rng());
    assert_eq!(s.score.value, 0);
    assert_eq!(s.score.tracked, 0);
    assert_eq!(s.score.scored, [false; 3]);
    assert_eq!(s.phase, GamePhase::Playing);
    assert!(!s.collision_cue_played);
    assert!(s.cues.is_empty());
    assert_eq!(s.ground.x, 0);
    assert_eq!(s.ground.y, 700);
}

#[test]
fn init_state_is_reproducible_with_seed() {
    let a = init_state(&mut StdRng::seed_from_u64(7));
    let b = init_state(&mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}

// ── Actor ─────────────────────────────────────────────────────────────────────

#[test]
fn jump_moves_up_by_impulse() {
    let mut a = Actor::new();
    a.jump();
    assert_eq!(a.y, 100);
    assert_eq!(a.prev_y, 200);
    assert!(a.tilted_up());
}

#[test]
fn gravity_moves_down_by_vel() {
    let mut a = Actor::new();
    a.apply_gravity();
    assert_eq!(a.y, 205);
    assert_eq!(a.prev_y, 200);
    assert!(!a.tilted_up());
}

#[test]
fn advance_cycles_three_frames() {
    let mut a = Actor::new();
    let mut seen = Vec::new();
    for _ in 0..6 {
        a.advance();
        seen.push(a.frame);
    }
    assert_eq!(seen, vec![1, 2, 0, 1, 2, 0]);
}

#[test]
fn advance_frozen_during_death_flop() {
    let mut a = Actor::new();
    a.advance(); // frame 1
    a.on_collision(true);
    a.advance();
    a.advance();
    assert_eq!(a.frame, 1);
}

#[test]
fn on_collision_airborne_spins_and_falls() {
    let mut a = Actor::new();
    a.on_collision(true);
    a.on_collision(true);
    assert_eq!(a.spin, 2);
    assert_eq!(a.y, 210);
}

#[test]
fn on_collision_resting_changes_nothing() {
    let mut a = Actor::new();
    a.on_collision(false);
    assert_eq!(a, Actor::new());
}

#[test]
fn collision_mask_follows_spin() {
    let assets = Assets::load();
    let mut a = Actor::new();
    let upright = a.collision_mask(&assets);
    assert_eq!((upright.width, upright.height), (ACTOR_WIDTH, ACTOR_HEIGHT));

    a.on_collision(true);
    let flopped = a.collision_mask(&assets);
    assert_eq!((flopped.width, flopped.height), (ACTOR_HEIGHT, ACTOR_WIDTH));
    assert_eq!(flopped.count(), upright.count());
}

#[test]
fn tilt_does_not_change_collision_mask() {
    let assets = Assets::load();
    let mut a = Actor::new();
    let level = a.collision_mask(&assets);
    a.jump();
    assert!(a.tilted_up());
    assert_eq!(a.collision_mask(&assets), level);
    assert_ne!(a.display_sprite(&assets).width, ACTOR_WIDTH);
}

#[test]
fn all_frames_share_lowest_row() {
    let assets = Assets::load();
    let mut a = Actor::new();
    let bottom = a.collision_mask(&assets).bottom_row();
    for _ in 0..3 {
        a.advance();
        assert_eq!(a.collision_mask(&assets).bottom_row(), bottom);
    }
}

// ── Obstacle set ──────────────────────────────────────────────────────────────

#[test]
fn obstacles_advance_by_vel() {
    let mut o = ObstacleSet::new(&mut seeded_rng());
    o.advance();
    let xs: Vec<i32> = o.slots.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![495, 895, 1295]);
}

#[test]
fn recycle_moves_offscreen_slot_beyond_rightmost() {
    let mut o = ObstacleSet::new(&mut seeded_rng());
    o.slots[0].x = -105;
    o.slots[1].x = 295;
    o.slots[2].x = 695;
    assert_eq!(o.recycle_check(&mut seeded_rng()), Some(0));
    assert_eq!(o.slots[0].x, 1095);
    assert!(PIPE_Y_RANGE.contains(&o.slots[0].y));
}

#[test]
fn recycle_waits_until_fully_offscreen() {
    let mut o = ObstacleSet::new(&mut seeded_rng());
    o.slots[0].x = -104; // right edge exactly at the left border
    assert_eq!(o.recycle_check(&mut seeded_rng()), None);
    assert_eq!(o.slots[0].x, -104);
}

#[test]
fn recycle_at_most_one_slot_per_call() {
    let mut o = ObstacleSet::new(&mut seeded_rng());
    o.slots[0].x = -105;
    o.slots[1].x = -110;
    o.slots[2].x = 300;
    let mut rng = seeded_rng();

    assert_eq!(o.recycle_check(&mut rng), Some(0));
    assert_eq!(o.slots[0].x, 700);
    assert_eq!(o.slots[1].x, -110); // left for the next call

    assert_eq!(o.recycle_check(&mut rng), Some(1));
    assert_eq!(o.slots[1].x, 1100);
    assert_eq!(o.recycle_check(&mut rng), None);
}

#[test]
fn recycling_preserves_spacing_over_many_ticks() {
    let mut rng = seeded_rng();
    let mut o = ObstacleSet::new(&mut rng);
    for _ in 0..5_000 {
        o.advance();
        o.recycle_check(&mut rng);
        let xs = sorted_xs(&o);
        assert_eq!(xs[1] - xs[0], PIPE_SPACING);
        assert_eq!(xs[2] - xs[1], PIPE_SPACING);
    }
}

#[test]
fn barrier_edges() {
    let mut o = ObstacleSet::new(&mut seeded_rng());
    o.slots[1] = ObstaclePair { x: 300, y: -400 };
    assert_eq!(o.top_y(1), -400);
    assert_eq!(o.bottom_y(1), -400 + 640 + 200);
    assert_eq!(o.trailing_edge(1), 404);
}

#[test]
fn actor_in_gap_does_not_collide() {
    let assets = Assets::load();
    let mut o = ObstacleSet::new(&mut seeded_rng());
    // Gap spans rows 160..360; actor occupies 200..248.
    o.slots[0] = ObstaclePair { x: 190, y: -480 };
    assert!(!o.check_collision(0, &Actor::new(), &assets));
}

#[test]
fn actor_hits_bottom_barrier() {
    let assets = Assets::load();
    let mut o = ObstacleSet::new(&mut seeded_rng());
    // Bottom barrier starts at row 220, inside the actor's body.
    o.slots[0] = ObstaclePair { x: 190, y: 220 - 840 };
    assert!(o.check_collision(0, &Actor::new(), &assets));
}

#[test]
fn actor_hits_top_barrier() {
    let assets = Assets::load();
    let mut o = ObstacleSet::new(&mut seeded_rng());
    // Top barrier ends at row 230.
    o.slots[0] = ObstaclePair { x: 190, y: 230 - 640 };
    assert!(o.check_collision(0, &Actor::new(), &assets));
}

// ── Ground ────────────────────────────────────────────────────────────────────

#[test]
fn ground_wraps_after_full_width() {
    let mut g = Ground::new();
    for _ in 0..100 {
        g.advance();
    }
    assert_eq!(g.x, -500);
    g.advance();
    assert_eq!(g.x, 0);
}

#[test]
fn ground_tiles_always_cover_canvas() {
    let mut g = Ground::new();
    for _ in 0..2_000 {
        g.advance();
        let [left, right] = g.tiles();
        assert!(left <= 0, "left tile starts at {left}");
        assert_eq!(right, left + X_WIDTH);
        assert!(right + X_WIDTH >= X_WIDTH);
        assert!((-X_WIDTH..=0).contains(&g.x));
    }
}

#[test]
fn ground_touch_depends_on_lowest_row() {
    let assets = Assets::load();
    let g = Ground::new();
    let mut a = Actor::new();
    let bottom = a.collision_mask(&assets).bottom_row().unwrap() as i32;

    a.y = GROUND_Y - bottom - 1;
    assert!(!g.is_touching(&a, &assets));
    a.y = GROUND_Y - bottom;
    assert!(g.is_touching(&a, &assets));
}

#[test]
fn ground_touch_detected_on_second_tile() {
    let assets = Assets::load();
    let mut g = Ground::new();
    g.x = -450; // first tile ends at 50, well left of the actor
    let mut a = Actor::new();
    a.y = 690;
    assert!(g.is_touching(&a, &assets));
}

// ── Scoring ───────────────────────────────────────────────────────────────────

#[test]
fn score_when_trailing_edge_passes_actor() {
    let mut o = ObstacleSet::new(&mut seeded_rng());
    o.slots[0].x = 95; // trailing edge 199
    let mut score = Score::default();
    assert!(score_check(&mut score, &o, ACTOR_X));
    assert_eq!(score.value, 1);
    assert_eq!(score.scored, [true, false, false]);
    assert_eq!(score.tracked, 1);
}

#[test]
fn no_score_while_trailing_edge_at_actor() {
    let mut o = ObstacleSet::new(&mut seeded_rng());
    o.slots[0].x = 96; // trailing edge 200, not yet past
    let mut score = Score::default();
    assert!(!score_check(&mut score, &o, ACTOR_X));
    assert_eq!(score, Score::default());
}

#[test]
fn score_only_once_per_passage() {
    let mut o = ObstacleSet::new(&mut seeded_rng());
    o.slots[0].x = 50;
    let mut score = Score::default();
    assert!(score_check(&mut score, &o, ACTOR_X));
    // Slot 0 is still past the actor but tracking moved on.
    assert!(!score_check(&mut score, &o, ACTOR_X));
    assert_eq!(score.value, 1);
}

#[test]
fn flagged_slot_does_not_score() {
    let mut o = ObstacleSet::new(&mut seeded_rng());
    o.slots[2].x = 0;
    let mut score = Score {
        value: 4,
        scored: [false, false, true],
        tracked: 2,
    };
    assert!(!score_check(&mut score, &o, ACTOR_X));
    assert_eq!(score.value, 4);
}

#[test]
fn tracking_wraps_from_last_slot() {
    let mut o = ObstacleSet::new(&mut seeded_rng());
    o.slots[2].x = 0;
    let mut score = Score {
        value: 2,
        scored: [false, true, false],
        tracked: 2,
    };
    assert!(score_check(&mut score, &o, ACTOR_X));
    assert_eq!(score.scored, [false, false, true]);
    assert_eq!(score.tracked, 0);
}

/// Obstacles and scoring only, as if the actor always threads the gap.
fn scoring_ticks(ticks: u64) -> Vec<u64> {
    let mut rng = seeded_rng();
    let mut o = ObstacleSet::new(&mut rng);
    let mut score = Score::default();
    let mut scored_at = Vec::new();
    for t in 1..=ticks {
        o.advance();
        o.recycle_check(&mut rng);
        if score_check(&mut score, &o, ACTOR_X) {
            scored_at.push(t);
            assert_eq!(score.value as usize, scored_at.len());
        }
    }
    scored_at
}

#[test]
fn seeded_score_sequence_is_periodic() {
    let scored_at = scoring_ticks(2_000);
    // First pair passes at tick 81, then one every PIPE_SPACING / VEL ticks.
    let expected: Vec<u64> = (0..).map(|k| 81 + 80 * k).take_while(|&t| t <= 2_000).collect();
    assert_eq!(scored_at, expected);
}

#[test]
fn seeded_score_sequence_is_reproducible() {
    assert_eq!(scoring_ticks(1_000), scoring_ticks(1_000));
}

#[test]
fn recycled_slot_keeps_flag_until_next_slot_scores() {
    let mut rng = seeded_rng();
    let mut o = ObstacleSet::new(&mut rng);
    let mut score = Score::default();
    for t in 1..=161 {
        o.advance();
        let recycled = o.recycle_check(&mut rng);
        score_check(&mut score, &o, ACTOR_X);
        match t {
            81 => assert_eq!(score.scored, [true, false, false]),
            121 => {
                // Slot 0 recycles 40 ticks after scoring; its flag is still set
                // but it is no longer the tracked slot.
                assert_eq!(recycled, Some(0));
                assert_eq!(score.scored, [true, false, false]);
                assert_eq!(score.tracked, 1);
            }
            161 => assert_eq!(score.scored, [false, true, false]),
            _ => {}
        }
    }
    assert_eq!(score.value, 2);
}

#[test]
fn tracked_slot_flag_is_always_clear() {
    let mut rng = seeded_rng();
    let mut o = ObstacleSet::new(&mut rng);
    let mut score = Score::default();
    for _ in 0..10_000 {
        o.advance();
        o.recycle_check(&mut rng);
        score_check(&mut score, &o, ACTOR_X);
        assert!(!score.scored[score.tracked]);
    }
    assert_eq!(score.value, (10_000 - 81) / 80 + 1);
}

// ── tick — motion ─────────────────────────────────────────────────────────────

#[test]
fn tick_increments_frame() {
    let mut s = open_sky_state();
    s.frame = 5;
    let s2 = tick(&s, &Assets::load(), false, &mut seeded_rng());
    assert_eq!(s2.frame, 6);
}

#[test]
fn tick_does_not_mutate_original() {
    let s = open_sky_state();
    let _ = tick(&s, &Assets::load(), true, &mut seeded_rng());
    assert_eq!(s.actor.y, 200);
    assert_eq!(s.frame, 0);
}

#[test]
fn tick_scrolls_world_and_applies_gravity() {
    let s = open_sky_state();
    let s2 = tick(&s, &Assets::load(), false, &mut seeded_rng());
    assert_eq!(s2.actor.y, 205);
    assert_eq!(s2.actor.frame, 1);
    assert_eq!(s2.ground.x, -5);
    assert_eq!(s2.obstacles.slots[0].x, 9_995);
    assert!(s2.cues.is_empty());
}

#[test]
fn jump_then_free_fall_sequence() {
    let assets = Assets::load();
    let mut rng = seeded_rng();
    let mut s = tick(&open_sky_state(), &assets, true, &mut rng);
    assert_eq!(s.actor.y, 200 + 5 - 100);
    assert!(s.actor.tilted_up());
    assert_eq!(s.cues, vec![Cue::Jump]);

    for k in 1..=40 {
        s = tick(&s, &assets, false, &mut rng);
        assert_eq!(s.actor.y, 105 + 5 * k);
        assert!(!s.actor.tilted_up());
        assert!(s.cues.is_empty());
    }
    assert_eq!(s.phase, GamePhase::Playing);
}

// ── tick — collision & game over ──────────────────────────────────────────────

#[test]
fn collision_check_is_idempotent() {
    let assets = Assets::load();
    let clear = open_sky_state();
    assert!(!collides(&clear, &assets));
    assert!(!collides(&clear, &assets));

    let mut hit = open_sky_state();
    hit.obstacles.slots[0] = ObstaclePair { x: 190, y: 220 - 840 };
    assert!(collides(&hit, &assets));
    assert!(collides(&hit, &assets));
    assert_eq!(impact(&hit, &assets), Some(Impact::Obstacle));
}

#[test]
fn only_tracked_slot_is_checked() {
    let assets = Assets::load();
    let mut s = open_sky_state();
    s.obstacles.slots[1] = ObstaclePair { x: 190, y: 220 - 840 };
    assert!(!collides(&s, &assets));
    s.score.tracked = 1;
    assert!(collides(&s, &assets));
}

#[test]
fn falling_without_jumping_hits_ground_at_fixed_tick() {
    let assets = Assets::load();
    let mut rng = seeded_rng();
    let mut s = open_sky_state();
    let bottom = s.actor.collision_mask(&assets).bottom_row().unwrap() as i32;

    // Contact starts once the lowest solid row reaches the ground line; the
    // check runs at the start of a tick on the position left by the last one.
    let mut expected = 1;
    let mut y = ACTOR_START_Y;
    while y + bottom < GROUND_Y {
        y += VEL;
        expected += 1;
    }

    let mut ticks = 0;
    let mut transitions = 0;
    while s.phase == GamePhase::Playing {
        let next = tick(&s, &assets, false, &mut rng);
        ticks += 1;
        if next.phase == GamePhase::GameOver {
            transitions += 1;
        }
        s = next;
        assert!(ticks <= 1_000, "never reached the ground");
    }
    assert_eq!(ticks, expected);
    assert_eq!(transitions, 1);
    assert_eq!(s.actor.y, y);
    assert_eq!(impact(&s, &assets), Some(Impact::Ground));
}

#[test]
fn resting_on_ground_no_death_flop() {
    let assets = Assets::load();
    let mut rng = seeded_rng();
    let mut s = open_sky_state();
    s.actor.y = 690;
    for _ in 0..10 {
        s = tick(&s, &assets, false, &mut rng);
    }
    assert_eq!(s.phase, GamePhase::GameOver);
    assert_eq!(s.actor.spin, 0);
    assert_eq!(s.actor.y, 690);
}

#[test]
fn collision_cue_plays_exactly_once() {
    let assets = Assets::load();
    let mut rng = seeded_rng();
    let mut s = open_sky_state();
    s.obstacles.slots[0] = ObstaclePair { x: 190, y: 220 - 840 };

    let mut collision_cues = 0;
    for _ in 0..100 {
        s = tick(&s, &assets, false, &mut rng);
        collision_cues += s.cues.iter().filter(|&&c| c == Cue::Collision).count();
    }
    assert_eq!(collision_cues, 1);
    assert!(s.collision_cue_played);
    assert_eq!(s.phase, GamePhase::GameOver);
}

#[test]
fn game_over_freezes_scrolling() {
    let assets = Assets::load();
    let mut rng = seeded_rng();
    let mut s = open_sky_state();
    s.obstacles.slots[0] = ObstaclePair { x: 190, y: 220 - 840 };
    s.ground.x = -40;

    let s2 = tick(&s, &assets, false, &mut rng);
    assert_eq!(s2.phase, GamePhase::GameOver);
    let s3 = tick(&s2, &assets, false, &mut rng);
    assert_eq!(s3.ground.x, -40);
    assert_eq!(s3.obstacles, s.obstacles);
    assert_eq!(s3.score, s.score);
}

#[test]
fn death_flop_until_resting_on_ground() {
    let assets = Assets::load();
    let mut rng = seeded_rng();
    let mut s = open_sky_state();
    s.obstacles.slots[0] = ObstaclePair { x: 190, y: 220 - 840 };

    let s1 = tick(&s, &assets, false, &mut rng);
    assert_eq!(s1.actor.spin, 1);
    assert_eq!(s1.actor.y, 205);

    s = s1;
    for _ in 0..300 {
        s = tick(&s, &assets, false, &mut rng);
    }
    assert!(s.ground.is_touching(&s.actor, &assets));
    let settled = s.actor.clone();
    s = tick(&s, &assets, false, &mut rng);
    assert_eq!(s.actor, settled);
}

#[test]
fn jump_ignored_after_game_over() {
    let assets = Assets::load();
    let mut rng = seeded_rng();
    let mut s = open_sky_state();
    s.actor.y = 690;
    s = tick(&s, &assets, false, &mut rng);
    assert_eq!(s.phase, GamePhase::GameOver);

    let s2 = tick(&s, &assets, true, &mut rng);
    assert_eq!(s2.actor.y, s.actor.y);
    assert!(!s2.cues.contains(&Cue::Jump));
    assert_eq!(s2.phase, GamePhase::GameOver);
}

// ── tick — full run ───────────────────────────────────────────────────────────

/// Jump whenever the actor would sink close to the tracked gap's lower edge.
fn autopilot(s: &GameState) -> bool {
    let gap_bottom = s.obstacles.bottom_y(s.score.tracked);
    s.actor.y + ACTOR_HEIGHT as i32 + VEL > gap_bottom - 8
}

#[test]
fn autopilot_scores_every_pair() {
    let assets = Assets::load();
    let mut rng = seeded_rng();
    let mut s = init_state(&mut rng);
    for _ in 0..1_500 {
        let jump = autopilot(&s);
        s = tick(&s, &assets, jump, &mut rng);
        assert_eq!(s.phase, GamePhase::Playing, "crashed at frame {}", s.frame);
    }
    // Pairs pass at ticks 81, 161, ..., 1441.
    assert_eq!(s.score.value, 18);
}
