//! Fixed-size linear algebra for rendering code: `Vec2`/`Vec3`/`Vec4`,
//! `Mat2`/`Mat3`/`Mat4`, `Quat`, and the usual transform and projection
//! constructors, all single-precision value types.
//!
//! Matrices are stored row-major with translation in the last row; vectors
//! transform as rows, so `m * v` dots `v` against the columns of `m` and
//! `a * b` applies `b` before `a`.
//!
//! Every operation is a pure function of its arguments. Nothing validates
//! or clamps: degenerate input (zero-extent frusta, a look-at up vector
//! parallel to the view direction, out-of-range field of view) propagates
//! IEEE Inf/NaN into the result. The one special case is `normalized()`,
//! which returns zero-length and exactly-unit vectors unchanged.

pub mod vec;
pub mod mat;
pub mod quat;

pub use vec::{Vec2, Vec3, Vec4};
pub use mat::{Mat2, Mat3, Mat4};
pub use quat::Quat;
