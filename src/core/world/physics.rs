//=========================================================================
// Physics Parameters
//=========================================================================
//
// Tuning constants for the update step. All values are in tiles and
// ticks; defaults reproduce the demo's feel at 60 TPS.
//
//=========================================================================

/// Corner inset on the trailing edge of the 1x1 player box.
pub const CORNER_INSET: f64 = 0.9;

/// Movement and collision tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsParams {
    /// Added per tick while up/down is held, airborne or not.
    pub vertical_move_acc: f64,
    pub horizontal_move_acc_on_ground: f64,
    pub horizontal_move_acc_in_air: f64,
    pub vertical_velocity_max: f64,
    pub horizontal_velocity_max: f64,
    /// Fraction of horizontal velocity removed per grounded tick.
    pub horizontal_drag: f64,
    /// Horizontal speed below which a grounded player stops dead.
    pub clamp_horizontal_velocity_below: f64,
    /// Upward speed set (not added) by a grounded jump.
    pub jump_speed: f64,
    pub gravity: f64,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        const VERTICAL_MOVE_ACC: f64 = 0.06;
        const HORIZONTAL_MOVE_ACC_ON_GROUND: f64 = 0.011;

        Self {
            vertical_move_acc: VERTICAL_MOVE_ACC,
            horizontal_move_acc_on_ground: HORIZONTAL_MOVE_ACC_ON_GROUND,
            horizontal_move_acc_in_air: 0.005,
            vertical_velocity_max: 1.0,
            horizontal_velocity_max: 0.1,
            horizontal_drag: HORIZONTAL_MOVE_ACC_ON_GROUND * 4.0,
            clamp_horizontal_velocity_below: 0.01,
            jump_speed: VERTICAL_MOVE_ACC * 5.0,
            gravity: 0.012,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_defaults() {
        let p = PhysicsParams::default();
        assert!((p.horizontal_drag - 0.044).abs() < 1e-12);
        assert!((p.jump_speed - 0.3).abs() < 1e-12);
        assert!(p.horizontal_move_acc_on_ground > p.horizontal_move_acc_in_air);
    }
}
