#[allow(unused_imports)]
use crate::prelude::*;

use crate::util::float;
use crate::util::float::FiniteFloat;
use rand::Rng;
use std::cmp::Ordering;
use std::f64::consts::TAU;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 2D vector representation using 64-bit floating point coordinates.
///
/// [`Vec2`] is used as an immutable value: every transformation returns a new
/// vector rather than mutating the receiver. It provides the common 2D vector
/// operations (addition, scaling, normalisation, dot and cross products,
/// distances and directions) plus a random unit-direction factory.
///
/// # Examples
///
/// ```
/// use vec2d::prelude::*;
///
/// let v1 = Vec2 { x: 3.0, y: 4.0 };
/// let v2 = Vec2 { x: 1.0, y: 2.0 };
///
/// let sum = v1 + v2;
/// assert_eq!(sum, Vec2 { x: 4.0, y: 6.0 });
/// assert_eq!(v1.len(), 5.0);
/// ```
///
/// # Equality and ordering
/// [`Vec2`] provides [`Eq`] and [`Ord`] implementations that enable total
/// ordering of 2D vectors.
///
/// ## Equality
/// Two vectors are considered equal if their components differ by less than
/// [`EPSILON`](crate::config::EPSILON). This handles floating point
/// imprecision while still ensuring reflexivity and transitivity.
///
/// ## Ordering
/// Since floating point values don't have a natural total ordering due to
/// `NaN` values, this implementation creates a deterministic ordering by:
///
/// 1. First comparing the vectors for equality using [`PartialEq`]
/// 2. If different, comparing the `x` coordinates if they differ by more than
///    [`EPSILON`](crate::config::EPSILON)
/// 3. Otherwise, comparing the `y` coordinates
///
/// When comparing floating point components, it first attempts to use
/// [`partial_cmp`](f64::partial_cmp), and falls back to
/// [`total_cmp`](f64::total_cmp) if needed (handles `NaN` values).
///
/// This ordering doesn't have a particular geometric meaning, it just provides
/// a stable, deterministic ordering of vectors, e.g. for
/// [`BTreeMap`](std::collections::BTreeMap) keys.
#[derive(Default, Debug, Copy, Clone)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
        } else {
            self.x == other.x && self.y == other.y
        }
    }
}
impl Eq for Vec2 {}

impl PartialOrd<Self> for Vec2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vec2 {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        if (self.x - other.x).abs() < EPSILON {
            return self.y.partial_cmp(&other.y).unwrap_or_else(|| {
                warn!("Vec2: partial_cmp() failed for y: {} vs. {}", self, other);
                self.y.total_cmp(&other.y)
            });
        }
        if let Some(o) = self.x.partial_cmp(&other.x) {
            o
        } else {
            warn!("Vec2: partial_cmp() failed for x: {} vs. {}", self, other);
            match self.x.total_cmp(&other.x) {
                Ordering::Equal => {
                    if let Some(o) = self.y.partial_cmp(&other.y) {
                        o
                    } else {
                        warn!("Vec2: partial_cmp() failed for y: {} vs. {}", self, other);
                        self.y.total_cmp(&other.y)
                    }
                }
                o => o,
            }
        }
    }
}

impl Hash for Vec2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl Vec2 {
    /// Creates a new vector with the given coordinates. No validation is
    /// performed; non-finite coordinates are accepted as-is.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    /// Returns a unit vector pointing to the right (positive x-axis).
    #[must_use]
    pub const fn right() -> Vec2 {
        Vec2 { x: 1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing upward (negative y-axis).
    ///
    /// Note: This follows a coordinate system where y increases downward,
    /// which is common in 2D graphics applications.
    #[must_use]
    pub const fn up() -> Vec2 {
        Vec2 { x: 0.0, y: -1.0 }
    }
    /// Returns a unit vector pointing to the left (negative x-axis).
    #[must_use]
    pub const fn left() -> Vec2 {
        Vec2 { x: -1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing downward (positive y-axis).
    ///
    /// Note: This follows a coordinate system where y increases downward,
    /// which is common in 2D graphics applications.
    #[must_use]
    pub const fn down() -> Vec2 {
        Vec2 { x: 0.0, y: 1.0 }
    }
    /// Returns a vector with both components set to 1.0.
    #[must_use]
    pub const fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }
    /// Returns a vector with both components set to 0.0.
    ///
    /// This is the neutral element for addition.
    #[must_use]
    pub const fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }

    /// Creates a new vector with both components set to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use vec2d::prelude::*;
    /// let vec = Vec2::splat(3.0);
    /// assert_eq!(vec.x, 3.0);
    /// assert_eq!(vec.y, 3.0);
    /// ```
    #[must_use]
    pub const fn splat(v: f64) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    /// Returns a unit vector whose angle is drawn uniformly from [0, 2π).
    ///
    /// The random source is an explicit argument rather than a process-wide
    /// generator: pass a seeded [`rand::rngs::StdRng`] to get a deterministic
    /// sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use vec2d::prelude::*;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    /// let v = Vec2::random_dir(&mut rng);
    /// assert!((v.len() - 1.0).abs() < EPSILON);
    /// ```
    #[must_use]
    pub fn random_dir(rng: &mut impl Rng) -> Vec2 {
        let angle = rng.gen_range(0.0..TAU);
        Vec2 {
            x: angle.cos(),
            y: angle.sin(),
        }
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`len`](Vec2::len) when comparing lengths to avoid
    /// the computationally expensive square root operation.
    #[must_use]
    pub fn len_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Returns the length of the vector.
    #[must_use]
    pub fn len(&self) -> f64 {
        self.len_squared().sqrt()
    }

    /// Returns a normalised (unit) vector in the same direction as this
    /// vector.
    ///
    /// If the original vector's length is zero, returns a zero vector to
    /// avoid division by zero. Also handles conversion of negative zero
    /// (-0.0) to positive zero (0.0) for both x and y components.
    ///
    /// # Examples
    ///
    /// ```
    /// use vec2d::prelude::*;
    /// let v = Vec2 { x: 3.0, y: 4.0 };
    /// assert_eq!(v.normed(), Vec2 { x: 0.6, y: 0.8 });
    /// assert_eq!(Vec2::zero().normed(), Vec2::zero());
    /// ```
    #[must_use]
    pub fn normed(&self) -> Vec2 {
        let mut rv = match self.len() {
            0.0 => Vec2::zero(),
            len => *self / len,
        };
        rv.x = float::force_positive_zero(rv.x);
        rv.y = float::force_positive_zero(rv.y);
        rv
    }

    /// Returns the unit vector pointing from this point toward `other`.
    ///
    /// If the two points coincide, there is no direction between them and the
    /// zero vector is returned, matching the zero-length behaviour of
    /// [`normed`](Vec2::normed).
    ///
    /// # Examples
    ///
    /// ```
    /// use vec2d::prelude::*;
    /// let a = Vec2::zero();
    /// let b = Vec2 { x: 3.0, y: 4.0 };
    /// assert_eq!(a.dir_to(b), Vec2 { x: 0.6, y: 0.8 });
    /// assert_eq!(a.dir_to(a), Vec2::zero());
    /// ```
    #[must_use]
    pub fn dir_to(&self, other: Vec2) -> Vec2 {
        (other - *self).normed()
    }

    /// Computes the Euclidean distance between two points.
    ///
    /// # Examples
    ///
    /// ```
    /// use vec2d::prelude::*;
    /// let p1 = Vec2 { x: 0.0, y: 0.0 };
    /// let p2 = Vec2 { x: 3.0, y: 4.0 };
    /// assert_eq!(p1.dist(p2), 5.0);
    /// ```
    #[must_use]
    pub fn dist(&self, other: Vec2) -> f64 {
        (other - *self).len()
    }

    /// Computes the squared Euclidean distance between two points.
    ///
    /// More efficient than [`dist`](Vec2::dist) when only comparing
    /// distances, as it avoids the square root operation.
    #[must_use]
    pub fn dist_squared(&self, other: Vec2) -> f64 {
        (other - *self).len_squared()
    }

    /// Computes the dot product of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use vec2d::prelude::*;
    /// let v1 = Vec2 { x: 2.0, y: 3.0 };
    /// let v2 = Vec2 { x: 4.0, y: 5.0 };
    /// assert_eq!(v1.dot(v2), 23.0); // 2*4 + 3*5
    /// ```
    #[must_use]
    pub fn dot(&self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product of two vectors.
    ///
    /// In 2D, the cross product is a scalar representing the signed area of
    /// the parallelogram formed by the two vectors. It is positive if the
    /// second vector is counter-clockwise from the first vector, and negative
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use vec2d::prelude::*;
    /// let v1 = Vec2 { x: 2.0, y: 0.0 };
    /// let v2 = Vec2 { x: 0.0, y: 3.0 };
    /// assert_eq!(v1.cross(v2), 6.0); // 2*3 - 0*0
    /// ```
    #[must_use]
    pub fn cross(&self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Returns an orthogonal vector, which is perpendicular to this vector.
    ///
    /// The orthogonal vector is obtained by swapping the components and
    /// negating the x component. That is, the result is rotated 90 degrees
    /// clockwise from the original vector.
    #[must_use]
    pub fn orthog(&self) -> Vec2 {
        Vec2 {
            x: self.y,
            y: -self.x,
        }
    }

    /// Returns a new vector with the absolute values of each component.
    #[must_use]
    pub fn abs(&self) -> Vec2 {
        Vec2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Linearly interpolates between this vector and another vector.
    ///
    /// The interpolation parameter `t` should be in the range [0, 1], where:
    /// - `t = 0.0` returns this vector
    /// - `t = 1.0` returns the `to` vector
    /// - Values in between return a proportional mix of the two vectors.
    /// - `t` is clamped if it is outside the range [0, 1].
    ///
    /// # Examples
    ///
    /// ```
    /// use vec2d::prelude::*;
    /// let v1 = Vec2 { x: 0.0, y: 0.0 };
    /// let v2 = Vec2 { x: 10.0, y: 20.0 };
    /// assert_eq!(v1.lerp(v2, 0.5), Vec2 { x: 5.0, y: 10.0 });
    /// ```
    #[must_use]
    pub fn lerp(&self, to: Vec2, t: f64) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        Vec2 {
            x: float::lerp(self.x, to.x, t),
            y: float::lerp(self.y, to.y, t),
        }
    }

    /// Checks if the vector is approximately equal to another vector.
    ///
    /// Two vectors are considered approximately equal if the length of their
    /// difference is less than [`EPSILON`](crate::config::EPSILON).
    pub fn almost_eq(&self, rhs: Vec2) -> bool {
        (*self - rhs).len() < EPSILON
    }

    /// Returns the magnitude of the vector's largest component.
    #[must_use]
    pub fn longest_component(&self) -> f64 {
        self.x.abs().max(self.y.abs())
    }

    pub fn min_component(&self) -> f64 {
        self.x.min(self.y)
    }

    /// Compares two vectors based on their squared length.
    ///
    /// This function first attempts to compare using
    /// [`partial_cmp()`](f64::partial_cmp), which may fail with NaN values.
    /// If partial comparison fails, it falls back to
    /// [`total_cmp()`](f64::total_cmp) and logs a warning.
    #[must_use]
    pub fn cmp_by_length(&self, other: &Vec2) -> Ordering {
        let self_len = self.len_squared();
        let other_len = other.len_squared();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_length(): partial_cmp() failed: {} vs. {}",
                self, other
            );
            self_len.total_cmp(&other_len)
        })
    }

    /// Compares two vectors based on their distance from a given origin
    /// point.
    ///
    /// This function first attempts to compare using
    /// [`partial_cmp()`](f64::partial_cmp), which may fail with NaN values.
    /// If partial comparison fails, it falls back to
    /// [`total_cmp()`](f64::total_cmp) and logs a warning that includes the
    /// origin point.
    #[must_use]
    pub fn cmp_by_dist(&self, other: &Vec2, origin: Vec2) -> Ordering {
        let self_len = (*self - origin).len_squared();
        let other_len = (*other - origin).len_squared();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_dist() to {}: partial_cmp() failed: {} vs. {}",
                origin, self, other
            );
            self_len.total_cmp(&other_len)
        })
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}
impl From<(f64, f64)> for Vec2 {
    fn from(value: (f64, f64)) -> Self {
        Vec2 {
            x: value.0,
            y: value.1,
        }
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
        } else {
            write!(f, "{}, {}", self.x, self.y)?;
        }
        write!(f, ")")
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sum<Vec2> for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), Vec2::add)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl Mul<&Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, rhs: &Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f64) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f64> for Vec2 {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
impl Neg for &Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
