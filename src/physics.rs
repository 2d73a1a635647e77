//! Inertial thruster model for the ship.
//!
//! Speeds are in cells per tick.  Pressing a direction accelerates by a
//! fixed step up to the axis limit; releasing it lets the speed bleed off
//! by a smaller fixed step until it rests at zero.

/// Speed gained per tick while a direction is held.
pub const ACCELERATION: f64 = 0.5;

/// Speed lost per tick while no direction is held.
pub const DECELERATION: f64 = 0.25;

pub const ROW_SPEED_LIMIT: f64 = 1.0;
pub const COLUMN_SPEED_LIMIT: f64 = 2.0;

/// Update both velocity components from the current input direction.
///
/// `row_dir` and `column_dir` are read by sign only, so anything outside
/// `{-1, 0, 1}` behaves like its sign.
pub fn update_speed(
    row_speed: f64,
    column_speed: f64,
    row_dir: i8,
    column_dir: i8,
    row_limit: f64,
    column_limit: f64,
) -> (f64, f64) {
    (
        apply_thrust(row_speed, row_dir, row_limit),
        apply_thrust(column_speed, column_dir, column_limit),
    )
}

fn apply_thrust(speed: f64, direction: i8, limit: f64) -> f64 {
    let limit = limit.abs();
    let next = match direction.signum() {
        0 if speed > 0.0 => (speed - DECELERATION).max(0.0),
        0 => (speed + DECELERATION).min(0.0),
        sign => speed + ACCELERATION * f64::from(sign),
    };
    next.clamp(-limit, limit)
}

/// Euler step: one tick of motion.
#[inline]
pub fn integrate(position: f64, speed: f64) -> f64 {
    position + speed
}

/// Keep a sprite of `extent` cells fully inside `bound`, leaving `border`
/// cells free on both sides.
///
/// When the window is too narrow for the sprite the upper bound wins, which
/// is why the director refuses to start on such a window.
#[inline]
pub fn clamp_to_frame(position: f64, extent: usize, bound: usize, border: usize) -> f64 {
    let low = border as f64;
    let high = bound as f64 - extent as f64 - border as f64;
    position.max(low).min(high)
}
