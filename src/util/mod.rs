pub mod linalg;

pub mod float {
    use crate::util::linalg::Vec2;
    use num_traits::Zero;
    use std::num::FpCategory;

    /// Finiteness check that, unlike [`f64::is_finite`], also rejects
    /// subnormal values.
    pub trait FiniteFloat {
        fn is_finite(&self) -> bool;
    }

    impl FiniteFloat for f64 {
        fn is_finite(&self) -> bool {
            self.is_normal() || self.is_zero()
        }
    }

    impl FiniteFloat for Vec2 {
        fn is_finite(&self) -> bool {
            is_finite(self.x) && is_finite(self.y)
        }
    }

    pub fn is_finite(x: f64) -> bool {
        matches!(x.classify(), FpCategory::Zero | FpCategory::Normal)
    }

    /// Maps `-0.0` to `0.0` and leaves every other value untouched, so that
    /// results which should compare equal also print the same.
    pub fn force_positive_zero(x: f64) -> f64 {
        if x.is_zero() { 0.0 } else { x }
    }

    pub fn sign_zero(x: f64) -> f64 {
        if x.is_zero() { 0.0 } else { x.signum() }
    }

    pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + t * (b - a)
    }
}

#[cfg(test)]
mod tests {
    use super::float;

    #[test]
    fn float_sign_zero() {
        assert_eq!(float::sign_zero(3.5), 1.0);
        assert_eq!(float::sign_zero(-0.25), -1.0);
        assert_eq!(float::sign_zero(0.0), 0.0);
        assert_eq!(float::sign_zero(-0.0), 0.0);
    }

    #[test]
    fn float_force_positive_zero() {
        assert_eq!(float::force_positive_zero(-0.0).to_bits(), 0.0_f64.to_bits());
        assert_eq!(float::force_positive_zero(-1.5), -1.5);
    }
}
