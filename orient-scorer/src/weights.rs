//! Fixed component weights.
#![forbid(unsafe_code)]

/// Weight of the grade component.
pub const GRADE_WEIGHT: f32 = 0.60_f32;
/// Weight of the interest component.
pub const INTEREST_WEIGHT: f32 = 0.25_f32;
/// Weight of the aspiration component.
pub const ASPIRATION_WEIGHT: f32 = 0.15_f32;

/// Normalised value of a requirement met exactly.
pub(crate) const GRADE_MIDPOINT: f32 = 0.5_f32;
/// Grade points separating a zero subject score from a full one.
pub(crate) const GRADE_SPAN: f32 = 10.0_f32;
