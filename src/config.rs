/// Tolerance for approximate floating-point comparisons; see
/// [`Vec2::almost_eq`](crate::util::linalg::Vec2::almost_eq) and the
/// [`PartialEq`] impl on [`Vec2`](crate::util::linalg::Vec2).
pub const EPSILON: f64 = 1e-9;
