//! Scoring weights for Gomoku evaluation
//!
//! Hand-tuned constants. Changing any of them changes playing strength.

/// Evaluation weights
pub struct PatternScore;

impl PatternScore {
    /// Value of a direction with room for five but no friendly neighbour.
    /// Each further consecutive stone multiplies it by the same factor.
    pub const LINE_BASE: f64 = 10.0;

    /// Cells (not counting the stone itself) a direction needs before it
    /// can still grow into five
    pub const ROOM_FOR_FIVE: u8 = 4;

    /// Human stones count this many times more than computer stones, with
    /// the sign flipped: blocking beats building.
    pub const DEFENSE_MULTIPLIER: f64 = 5.0;

    /// Per-stone center bonus is `CENTER_WEIGHT * (CENTER_REACH - manhattan distance)`
    pub const CENTER_WEIGHT: f64 = 0.1;
    pub const CENTER_REACH: i32 = 15;
}

/// Value of a direction holding `run` consecutive friendly stones,
/// counting the stone the scan started from.
#[inline]
pub fn run_value(run: u8) -> f64 {
    PatternScore::LINE_BASE.powi(i32::from(run))
}
