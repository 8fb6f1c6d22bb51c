//=========================================================================
// Camera View
//=========================================================================
//
// Derives the top-left viewport offset from the camera position.
//
//   offset = camera - viewport / 2
//   offset = clamp(offset, 0, level - viewport)     (per axis)
//
// The integer part selects the first visible tile; the fractional
// remainder shifts the whole view for smooth sub-tile scrolling.
//
//=========================================================================

use glam::DVec2;

//=== Viewport ============================================================

/// Size of the rendered window, in whole tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of whole tiles that fit in a screen of the given pixel size.
    ///
    /// # Panics
    ///
    /// Panics if `tile_size == 0`.
    pub fn from_pixels(screen_width: u32, screen_height: u32, tile_size: u32) -> Self {
        assert!(tile_size > 0, "Tile size must be positive");
        Self::new(
            (screen_width / tile_size) as usize,
            (screen_height / tile_size) as usize,
        )
    }

    fn half_extent(self) -> DVec2 {
        DVec2::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

impl Default for Viewport {
    /// 256x200 logical pixels at 16 px per tile.
    fn default() -> Self {
        Self::from_pixels(256, 200, 16)
    }
}

//=== CameraView ==========================================================

/// Clamped viewport placement for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    /// Top-left corner of the view, in tiles.
    pub offset: DVec2,
    pub viewport: Viewport,
}

impl CameraView {
    /// Centers the viewport on `camera`, then clamps it inside the level.
    ///
    /// The level must be at least as large as the viewport; the engine
    /// checks this once at startup.
    pub fn compute(camera: DVec2, viewport: Viewport, level_width: usize, level_height: usize) -> Self {
        let max = DVec2::new(
            level_width as f64 - viewport.width as f64,
            level_height as f64 - viewport.height as f64,
        );
        let centered = camera - viewport.half_extent();
        let offset = centered.max(DVec2::ZERO).min(max);

        Self { offset, viewport }
    }

    /// First visible tile column and row.
    pub fn tile_origin(&self) -> (i32, i32) {
        (self.offset.x as i32, self.offset.y as i32)
    }

    /// Sub-tile part of the offset, each axis in `[0, 1)`.
    pub fn fraction(&self) -> DVec2 {
        self.offset - self.offset.trunc()
    }

    /// Sub-tile part of the offset in pixels.
    pub fn pixel_remainder(&self, tile_size: u32) -> DVec2 {
        self.fraction() * tile_size as f64
    }

    /// Converts a world position (tiles) to view-relative tiles.
    pub fn to_view(&self, world: DVec2) -> DVec2 {
        world - self.offset
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
