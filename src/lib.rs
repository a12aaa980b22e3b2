//! A small 2D vector library: [`Vec2`](util::linalg::Vec2) and friends.
//!
//! All operations return new values; nothing mutates in place except through
//! the `*Assign` operator impls. Randomness is always taken as an explicit
//! [`rand::Rng`] argument so that callers control seeding.

pub mod config;
pub mod prelude;
pub mod util;
