//=========================================================================
// Render Contract
//=========================================================================
//
// Read-only snapshot of what a renderer needs for one frame.
//
// Architecture:
//   &GameState → RenderFrame::capture() → Renderer::render()
//
// Tiles cover the viewport extended by one tile on each side so that a
// partially scrolled edge column or row is never left blank. Tile and
// player positions are already shifted by the sub-tile fraction.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Write as _;

use glam::DVec2;
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::world::{CameraView, Facing, GameState, Player, PlayerPose, Tile, Viewport};

//=== VisibleTile =========================================================

/// One grid cell inside the drawn window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleTile {
    /// Column relative to the viewport, `-1..=viewport.width`.
    pub column: i32,
    /// Row relative to the viewport, `-1..=viewport.height`.
    pub row: i32,
    pub tile: Tile,
    /// Top-left corner on screen, in pixels.
    pub screen: DVec2,
}

//=== RenderFrame =========================================================

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub view: CameraView,
    pub tile_size: u32,
    /// First visible tile (integer part of the view offset).
    pub tile_origin: (i32, i32),
    /// Sub-tile scroll per axis, in `[0, 1)`.
    pub fraction: DVec2,
    pub pixel_remainder: DVec2,
    /// Player top-left relative to the view, in tiles.
    pub player_view: DVec2,
    /// Player top-left on screen, in pixels.
    pub player_screen: DVec2,
    pub facing: Facing,
    pub pose: PlayerPose,
    pub coin_frame: usize,
    pub coins: u64,
    pub tiles: Vec<VisibleTile>,
}

impl RenderFrame {
    /// Snapshots `state` through a viewport of `viewport` tiles.
    ///
    /// # Panics
    ///
    /// Panics if `tile_size == 0`.
    pub fn capture(state: &GameState, viewport: Viewport, tile_size: u32) -> Self {
        assert!(tile_size > 0, "Tile size must be positive");

        let view = CameraView::compute(state.camera, viewport, state.grid.width(), state.grid.height());
        let (origin_x, origin_y) = view.tile_origin();
        let fraction = view.fraction();
        let scale = tile_size as f64;

        let columns = viewport.width as i32;
        let rows = viewport.height as i32;
        let mut tiles = Vec::with_capacity(((columns + 2) * (rows + 2)) as usize);
        for row in -1..=rows {
            for column in -1..=columns {
                let tile = state.grid.get(origin_x + column, origin_y + row);
                let screen = (DVec2::new(column as f64, row as f64) - fraction) * scale;
                tiles.push(VisibleTile { column, row, tile, screen });
            }
        }

        let player_view = view.to_view(state.player.position);

        Self {
            view,
            tile_size,
            tile_origin: (origin_x, origin_y),
            fraction,
            pixel_remainder: view.pixel_remainder(tile_size),
            player_view,
            player_screen: player_view * scale,
            facing: state.player.facing,
            pose: state.animation.player_pose(),
            coin_frame: state.animation.coin_frame(),
            coins: state.coins.get(),
            tiles,
        }
    }

    /// Flat sprite index for the player.
    pub fn player_frame(&self) -> usize {
        self.pose.frame_index()
    }

    /// Tiles a sprite renderer has to draw.
    pub fn drawable_tiles(&self) -> impl Iterator<Item = &VisibleTile> {
        self.tiles.iter().filter(|t| t.tile.is_visible())
    }
}

//=== Renderer ============================================================

/// Consumer of render frames. Called once per tick after the update.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame);
}

//=== AsciiRenderer =======================================================

/// Draws the viewport as text, one character per tile.
///
/// The player is `@` (or `<`/`>` while running, by facing). Unknown
/// tiles draw as blanks.
#[derive(Debug, Default)]
pub struct AsciiRenderer {
    last: String,
    last_coins: Option<u64>,
}

impl AsciiRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the most recent frame.
    pub fn last_frame(&self) -> &str {
        &self.last
    }

    /// Renders a frame to a string without touching `last_frame`.
    pub fn draw(frame: &RenderFrame) -> String {
        let viewport = frame.view.viewport;
        let (player_col, player_row) = Player::tile_at(frame.player_view + DVec2::splat(0.5));
        let player_glyph = match (frame.pose, frame.facing) {
            (PlayerPose::Running(_), Facing::Left) => '<',
            (PlayerPose::Running(_), Facing::Right) => '>',
            _ => '@',
        };

        let mut out = String::with_capacity((viewport.width + 1) * (viewport.height + 1) + 16);
        let _ = writeln!(out, "coins: {}", frame.coins);

        for tile in &frame.tiles {
            if tile.row < 0 || tile.row >= viewport.height as i32 {
                continue;
            }
            if tile.column < 0 || tile.column >= viewport.width as i32 {
                continue;
            }

            let glyph = if (tile.column, tile.row) == (player_col, player_row) {
                player_glyph
            } else {
                match tile.tile {
                    Tile::Unknown => ' ',
                    other => other.symbol(),
                }
            };
            out.push(glyph);

            if tile.column == viewport.width as i32 - 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl Renderer for AsciiRenderer {
    fn render(&mut self, frame: &RenderFrame) {
        self.last = Self::draw(frame);

        if self.last_coins != Some(frame.coins) {
            debug!(target: "core", "Frame at {} coins:\n{}", frame.coins, self.last);
            self.last_coins = Some(frame.coins);
        } else {
            trace!(target: "core", "Frame:\n{}", self.last);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
