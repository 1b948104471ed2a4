/// Rounds to the nearest integer, ties toward positive infinity.
///
/// `f64::round` sends ties away from zero, which disagrees on negative
/// halves (-2.5 becomes -3.0 instead of -2.0). Encoded chains are produced
/// with the toward-positive-infinity rule, so it is kept here.
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Snaps `x` onto the grid of multiples of `1 / scale`.
pub fn round_to_grid(x: f64, scale: f64) -> f64 {
    round_half_up(x * scale) / scale
}
