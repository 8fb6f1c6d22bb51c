//=========================================================================
// Update Step
//=========================================================================
//
// Advances the world by exactly one tick.
//
// Processing order (each stage sees the result of the previous one):
//   1. Input acceleration (movement keys, grounded jump)
//   2. Gravity
//   3. Ground drag
//   4. Candidate position = position + velocity
//   5. Coin pickup at the candidate corners
//   6. Horizontal collision (tested at the current row)
//   7. Vertical collision (tested at the candidate column)
//   8. Velocity clamp
//   9. Animation selection
//  10. Commit position, camera follows
//
// Collision is axis-aligned snapping per tick; fast diagonal movement
// can tunnel through corners. Cells outside the grid block movement, so
// the player box never leaves the level.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::DVec2;
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::grid::TileGrid;
use super::physics::{PhysicsParams, CORNER_INSET};
use super::player::{cell, Facing, Player};
use super::state::{CoinCounter, GameState};
use super::tile::Tile;
use crate::core::input::InputSample;

//=== TickReport ==========================================================

/// Notable things that happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Coins consumed this tick (up to four).
    pub coins_collected: u32,
    /// A grounded jump was started.
    pub jumped: bool,
    /// The player touched down after being airborne.
    pub landed: bool,
}

//=== update_step() =======================================================

/// Runs one tick of player physics against the level.
pub fn update_step(state: &mut GameState, params: &PhysicsParams, input: InputSample) -> TickReport {
    let mut report = TickReport::default();
    let was_grounded = state.player.grounded;

    //--- 1-3. Forces ------------------------------------------------------
    report.jumped = apply_input(&mut state.player, params, input);
    state.player.velocity.y += params.gravity;
    apply_ground_drag(&mut state.player, params);

    //--- 4. Candidate -----------------------------------------------------
    let mut candidate = state.player.position + state.player.velocity;

    //--- 5. Coins ---------------------------------------------------------
    report.coins_collected = collect_coins(&mut state.grid, &mut state.coins, candidate);

    //--- 6-7. Collision ---------------------------------------------------
    state.player.grounded = false;
    resolve_horizontal(&state.grid, &mut state.player, &mut candidate);
    resolve_vertical(&state.grid, &mut state.player, &mut candidate);

    //--- 8. Clamp ---------------------------------------------------------
    let v = &mut state.player.velocity;
    v.x = v.x.clamp(-params.horizontal_velocity_max, params.horizontal_velocity_max);
    v.y = v.y.clamp(-params.vertical_velocity_max, params.vertical_velocity_max);

    //--- 9. Animation -----------------------------------------------------
    state.animation.advance(&state.player);

    //--- 10. Commit -------------------------------------------------------
    state.player.position = candidate;
    state.camera = candidate;

    report.landed = state.player.grounded && !was_grounded;

    if report.coins_collected > 0 {
        debug!(
            target: "world",
            "Picked up {} coin(s) at ({:.2}, {:.2})",
            report.coins_collected,
            candidate.x,
            candidate.y
        );
    }
    trace!(
        target: "world",
        "tick {}: pos=({:.3}, {:.3}) vel=({:.3}, {:.3}) grounded={}",
        state.animation.tick(),
        candidate.x,
        candidate.y,
        state.player.velocity.x,
        state.player.velocity.y,
        state.player.grounded
    );

    report
}

//=== Stage Helpers =======================================================

/// Applies held movement keys. Returns whether a jump started.
fn apply_input(player: &mut Player, params: &PhysicsParams, input: InputSample) -> bool {
    let horizontal_acc = if player.grounded {
        params.horizontal_move_acc_on_ground
    } else {
        params.horizontal_move_acc_in_air
    };

    if input.up {
        player.velocity.y -= params.vertical_move_acc;
    }
    if input.down {
        player.velocity.y += params.vertical_move_acc;
    }
    if input.left {
        player.facing = Facing::Left;
        player.velocity.x -= horizontal_acc;
    }
    if input.right {
        player.facing = Facing::Right;
        player.velocity.x += horizontal_acc;
    }

    if input.jump && player.grounded {
        player.velocity.y = -params.jump_speed;
        return true;
    }
    false
}

fn apply_ground_drag(player: &mut Player, params: &PhysicsParams) {
    if !player.grounded {
        return;
    }
    player.velocity.x -= params.horizontal_drag * player.velocity.x;
    if player.velocity.x.abs() < params.clamp_horizontal_velocity_below {
        player.velocity.x = 0.0;
    }
}

/// Consumes every coin under one of the four box corners.
///
/// Corners are checked one after another against the live grid, so a
/// single tile is only counted once even when several corners share it,
/// while a 2x2 cluster yields four coins.
fn collect_coins(grid: &mut TileGrid, coins: &mut CoinCounter, candidate: DVec2) -> u32 {
    const CORNERS: [DVec2; 4] = [
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, CORNER_INSET),
        DVec2::new(CORNER_INSET, 0.0),
        DVec2::new(CORNER_INSET, CORNER_INSET),
    ];

    let mut collected = 0;
    for corner in CORNERS {
        let (x, y) = Player::tile_at(candidate + corner);
        if grid.get(x, y).is_collectible() {
            coins.increment();
            grid.set(x, y, Tile::Empty);
            collected += 1;
        }
    }
    collected
}

/// Leading-edge test against the current row; snaps to the tile boundary.
fn resolve_horizontal(grid: &TileGrid, player: &mut Player, candidate: &mut DVec2) {
    let top = cell(player.position.y);
    let bottom = cell(player.position.y + CORNER_INSET);

    if player.velocity.x <= 0.0 {
        let x = cell(candidate.x);
        if blocked(grid, (x, top), (x, bottom)) {
            candidate.x = candidate.x.floor() + 1.0;
            player.velocity.x = 0.0;
        }
    } else {
        let x = cell(candidate.x + 1.0);
        if blocked(grid, (x, top), (x, bottom)) {
            candidate.x = candidate.x.floor();
            player.velocity.x = 0.0;
        }
    }
}

/// Leading-edge test against the resolved column. Landing sets `grounded`.
fn resolve_vertical(grid: &TileGrid, player: &mut Player, candidate: &mut DVec2) {
    let left = cell(candidate.x);
    let right = cell(candidate.x + CORNER_INSET);

    if player.velocity.y <= 0.0 {
        let y = cell(candidate.y);
        if blocked(grid, (left, y), (right, y)) {
            candidate.y = candidate.y.floor() + 1.0;
            player.velocity.y = 0.0;
        }
    } else {
        let y = cell(candidate.y + 1.0);
        if blocked(grid, (left, y), (right, y)) {
            candidate.y = candidate.y.floor();
            player.velocity.y = 0.0;
            player.grounded = true;
        }
    }
}

#[inline]
fn blocked(grid: &TileGrid, a: (i32, i32), b: (i32, i32)) -> bool {
    solid(grid, a) || solid(grid, b)
}

/// Non-empty tiles and everything past the level edge.
#[inline]
fn solid(grid: &TileGrid, (x, y): (i32, i32)) -> bool {
    !grid.in_bounds(x, y) || grid.get(x, y).blocks_movement()
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::world::level::Level;
    use proptest::prelude::*;

    //--- Test Helpers -----------------------------------------------------

    /// 20x6 room: solid floor on row 4, walls at columns 1 and 12.
    const ROOM: &str = "
        ....................
        .#..........#.......
        .#..........#.......
        .#..........#.......
        GGGGGGGGGGGGGGGGGGGG
        ....................
    ";

    fn room() -> GameState {
        GameState::new(Level::parse(20, 6, ROOM).unwrap())
    }

    fn open_sky(layout: &str, width: usize, height: usize) -> GameState {
        GameState::new(Level::parse(width, height, layout).unwrap())
    }

    fn place(state: &mut GameState, x: f64, y: f64, vx: f64, vy: f64, grounded: bool) {
        state.player.position = DVec2::new(x, y);
        state.player.velocity = DVec2::new(vx, vy);
        state.player.grounded = grounded;
    }

    fn tick(state: &mut GameState, input: InputSample) -> TickReport {
        update_step(state, &PhysicsParams::default(), input)
    }

    fn idle() -> InputSample {
        InputSample::default()
    }

    //=====================================================================
    // Gravity & Grounding
    //=====================================================================

    #[test]
    fn falling_player_lands_on_floor() {
        let mut state = room();
        place(&mut state, 5.0, 0.0, 0.0, 0.0, false);

        let mut landed = false;
        for _ in 0..120 {
            landed |= tick(&mut state, idle()).landed;
        }

        assert!(landed);
        assert!(state.player.grounded);
        assert_eq!(state.player.position.y, 3.0);
        assert_eq!(state.player.velocity.y, 0.0);
    }

    #[test]
    fn resting_player_stays_grounded_and_drag_stops_it() {
        let mut state = room();
        place(&mut state, 3.0, 3.0, 0.1, 0.0, true);

        let mut stopped_at = None;
        for i in 0..100 {
            tick(&mut state, idle());
            assert!(state.player.grounded, "tick {} lost ground contact", i);
            assert_eq!(state.player.position.y, 3.0);
            if stopped_at.is_none() && state.player.velocity.x == 0.0 {
                stopped_at = Some(i);
            }
        }

        let stopped_at = stopped_at.expect("drag never stopped the player");
        assert!(stopped_at < 60, "took {} ticks to stop", stopped_at);
        assert_eq!(state.player.velocity.x, 0.0);
    }

    #[test]
    fn grounded_is_recomputed_every_tick() {
        let mut state = room();
        // Stale flag in mid-air
        place(&mut state, 5.0, 0.5, 0.0, 0.0, true);

        tick(&mut state, idle());

        assert!(!state.player.grounded);
    }

    //=====================================================================
    // Input
    //=====================================================================

    #[test]
    fn jump_from_ground_sets_upward_speed() {
        let mut state = room();
        place(&mut state, 5.0, 3.0, 0.0, 0.0, true);

        let report = tick(&mut state, InputSample { jump: true, ..idle() });

        assert!(report.jumped);
        assert!(!state.player.grounded);
        assert!((state.player.velocity.y - (-0.3 + 0.012)).abs() < 1e-12);
        assert!(state.player.position.y < 3.0);
    }

    #[test]
    fn jump_in_air_is_ignored() {
        let mut state = room();
        place(&mut state, 5.0, 0.5, 0.0, 0.05, false);

        let report = tick(&mut state, InputSample { jump: true, ..idle() });

        assert!(!report.jumped);
        assert!((state.player.velocity.y - 0.062).abs() < 1e-12);
    }

    #[test]
    fn horizontal_acceleration_depends_on_ground_contact() {
        let mut ground = room();
        place(&mut ground, 5.0, 3.0, 0.0, 0.0, true);
        tick(&mut ground, InputSample { right: true, ..idle() });

        let mut air = room();
        place(&mut air, 5.0, 0.5, 0.0, 0.0, false);
        tick(&mut air, InputSample { right: true, ..idle() });

        // Drag applies on the ground only
        assert!((ground.player.velocity.x - 0.011 * (1.0 - 0.044)).abs() < 1e-12);
        assert!((air.player.velocity.x - 0.005).abs() < 1e-12);
    }

    #[test]
    fn direction_keys_set_facing() {
        let mut state = room();
        place(&mut state, 5.0, 3.0, 0.0, 0.0, true);

        tick(&mut state, InputSample { right: true, ..idle() });
        assert_eq!(state.player.facing, Facing::Right);

        tick(&mut state, InputSample { left: true, ..idle() });
        assert_eq!(state.player.facing, Facing::Left);
    }

    #[test]
    fn up_key_accelerates_even_when_airborne() {
        let mut state = room();
        place(&mut state, 5.0, 1.0, 0.0, 0.0, false);

        tick(&mut state, InputSample { up: true, ..idle() });

        assert!((state.player.velocity.y - (-0.06 + 0.012)).abs() < 1e-12);
    }

    //=====================================================================
    // Collision
    //=====================================================================

    #[test]
    fn moving_right_into_wall_snaps_to_boundary() {
        let mut state = room();
        // Right edge approaches the wall in column 12
        place(&mut state, 10.95, 3.0, 0.1, 0.0, true);

        tick(&mut state, idle());

        assert_eq!(state.player.position.x, 11.0);
        assert_eq!(state.player.velocity.x, 0.0);
    }

    #[test]
    fn moving_left_into_wall_snaps_to_boundary() {
        let mut state = room();
        // Left edge approaches the wall in column 1
        place(&mut state, 2.02, 3.0, -0.1, 0.0, true);

        tick(&mut state, idle());

        assert_eq!(state.player.position.x, 2.0);
        assert_eq!(state.player.velocity.x, 0.0);
    }

    #[test]
    fn head_bump_snaps_below_ceiling() {
        let layout = "
            ....
            GGGG
            ....
            ....
        ";
        let mut state = open_sky(layout, 4, 4);
        place(&mut state, 1.0, 2.1, 0.0, -0.3, false);

        tick(&mut state, idle());

        assert_eq!(state.player.position.y, 2.0);
        assert_eq!(state.player.velocity.y, 0.0);
        assert!(!state.player.grounded);
    }

    #[test]
    fn unknown_tiles_block_movement() {
        let layout = "
            ....
            ....
            xxxx
        ";
        let mut state = open_sky(layout, 4, 3);
        place(&mut state, 1.0, 1.0, 0.0, 0.0, false);

        tick(&mut state, idle());

        assert!(state.player.grounded);
        assert_eq!(state.player.position.y, 1.0);
    }

    //=====================================================================
    // Level Bounds
    //=====================================================================

    #[test]
    fn holding_left_from_spawn_stays_inside_the_level() {
        let mut state = GameState::new(Level::builtin().unwrap());
        let left = InputSample { left: true, ..idle() };

        for _ in 0..600 {
            tick(&mut state, left);
            let pos = state.player.position;
            assert!(pos.x >= 0.0, "left the level at x = {}", pos.x);
            assert!(pos.y >= 0.0 && pos.y <= 15.0, "left the level at y = {}", pos.y);
        }

        // Resting on the long floor in row 8, pressed against column -1
        assert_eq!(state.player.position, DVec2::new(0.0, 7.0));
        assert!(state.player.grounded);
    }

    #[test]
    fn bottom_edge_acts_as_floor() {
        let layout = "
            ...
            ...
            ...
        ";
        let mut state = open_sky(layout, 3, 3);
        place(&mut state, 1.0, 0.0, 0.0, 0.0, false);

        for _ in 0..120 {
            tick(&mut state, idle());
        }

        assert_eq!(state.player.position.y, 2.0);
        assert!(state.player.grounded);
    }

    #[test]
    fn right_and_top_edges_block() {
        let layout = "
            ....
            ....
            GGGG
        ";
        let mut state = open_sky(layout, 4, 3);
        place(&mut state, 2.5, 1.0, 0.0, 0.0, true);
        let up_right = InputSample { up: true, right: true, ..idle() };

        for _ in 0..120 {
            tick(&mut state, up_right);
        }

        assert_eq!(state.player.position, DVec2::new(3.0, 0.0));
        assert_eq!(state.player.velocity.x, 0.0);
    }

    //=====================================================================
    // Coins
    //=====================================================================

    #[test]
    fn single_coin_is_counted_once() {
        let layout = "
            .....
            .....
            ..C..
            .....
            .....
        ";
        let mut state = open_sky(layout, 5, 5);
        place(&mut state, 2.0, 2.0, 0.0, 0.0, false);

        let report = tick(&mut state, idle());
        assert_eq!(report.coins_collected, 1);
        assert_eq!(state.coins.get(), 1);
        assert_eq!(state.grid.get(2, 2), Tile::Empty);

        let report = tick(&mut state, idle());
        assert_eq!(report.coins_collected, 0);
        assert_eq!(state.coins.get(), 1);
    }

    #[test]
    fn straddling_a_coin_cluster_collects_all_four() {
        let layout = "
            ......
            ......
            ..CC..
            ..CC..
            ......
            ......
        ";
        let mut state = open_sky(layout, 6, 6);
        place(&mut state, 2.5, 2.5, 0.0, 0.0, false);

        let report = tick(&mut state, idle());

        assert_eq!(report.coins_collected, 4);
        assert_eq!(state.coins.get(), 4);
        assert_eq!(state.grid.count(Tile::Collectible), 0);
    }

    #[test]
    fn coins_are_tested_at_the_candidate_position() {
        let layout = "
            .....
            ...C.
            .....
        ";
        let mut state = open_sky(layout, 5, 3);
        // Currently one tile left of the coin, moving into it this tick
        place(&mut state, 2.0, 1.0, 0.0, 0.0, false);
        state.player.velocity.x = 0.95;

        let report = tick(&mut state, idle());

        assert_eq!(report.coins_collected, 1);
        assert_eq!(state.grid.get(3, 1), Tile::Empty);
    }

    #[test]
    fn coin_at_walking_height_blocks_approach_from_the_left() {
        let layout = "
            ......
            ......
            ...C..
            GGGGGG
        ";
        let mut state = open_sky(layout, 6, 4);
        place(&mut state, 2.0, 2.0, 0.0, 0.0, true);
        let right = InputSample { right: true, ..idle() };

        // The 0.9 pickup corner never reaches column 3 before the 1.0
        // leading edge snaps the player back
        for _ in 0..120 {
            tick(&mut state, right);
        }

        assert_eq!(state.player.position, DVec2::new(2.0, 2.0));
        assert_eq!(state.player.velocity.x, 0.0);
        assert_eq!(state.coins.get(), 0);
        assert_eq!(state.grid.get(3, 2), Tile::Collectible);
    }

    //=====================================================================
    // Camera & Animation
    //=====================================================================

    #[test]
    fn camera_follows_player_exactly() {
        let mut state = room();
        place(&mut state, 5.3, 1.7, 0.04, 0.0, false);

        tick(&mut state, idle());

        assert_eq!(state.camera, state.player.position);
    }

    #[test]
    fn each_tick_advances_the_animation_clock() {
        let mut state = room();
        for _ in 0..7 {
            tick(&mut state, idle());
        }
        assert_eq!(state.animation.tick(), 7);
    }

    //=====================================================================
    // Properties
    //=====================================================================

    fn sample_from(keys: [bool; 5]) -> InputSample {
        InputSample {
            up: keys[0],
            down: keys[1],
            left: keys[2],
            right: keys[3],
            jump: keys[4],
        }
    }

    proptest! {
        #[test]
        fn velocity_is_always_clamped(inputs in prop::collection::vec(any::<[bool; 5]>(), 1..300)) {
            let mut state = GameState::new(Level::builtin().unwrap());
            let params = PhysicsParams::default();

            for keys in inputs {
                update_step(&mut state, &params, sample_from(keys));
                let v = state.player.velocity;
                prop_assert!(v.x.abs() <= params.horizontal_velocity_max);
                prop_assert!(v.y.abs() <= params.vertical_velocity_max);
            }
        }
    }
}
