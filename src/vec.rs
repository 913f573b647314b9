use core::ops;
use core::fmt;

use bytemuck::{Pod, Zeroable};

macro_rules! vec_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<$v> for $v {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: $v) -> $v {
                $v { $( $e: self.$e.$func(rhs.$e), )* }
            }
        }
    }
}

macro_rules! vec_assign_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<$v> for $v {
            #[inline]
            fn $func(&mut self, rhs: $v) {
                $( self.$e.$func(rhs.$e); )*
            }
        }
    }
}

// Scalar operands broadcast to a uniform vector before the component-wise
// operator applies. Direction matters for Sub and Div: `s - v` and `s / v`
// put the scalar on the left of every component.
macro_rules! scalar_op_impl {
    ($trait: ident, $func: ident, $v: ident) => {
        impl ops::$trait<f32> for $v {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: f32) -> $v {
                self.$func($v::splat(rhs))
            }
        }

        impl ops::$trait<$v> for f32 {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: $v) -> $v {
                $v::splat(self).$func(rhs)
            }
        }
    }
}

macro_rules! scalar_assign_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<f32> for $v {
            #[inline]
            fn $func(&mut self, rhs: f32) {
                $( self.$e.$func(rhs); )*
            }
        }
    }
}

macro_rules! vec_impl {
    ($v: ident, $n: expr, $($e: ident),*) => {

        #[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
        #[repr(C)]
        pub struct $v {
            $( pub $e: f32, )*
        }

        impl $v {
            pub const ZERO: $v = $v { $( $e: 0.0, )* };
            pub const ONE: $v = $v { $( $e: 1.0, )* };

            #[inline]
            pub const fn new($( $e: f32, )*) -> $v {
                $v { $( $e, )* }
            }

            #[inline]
            pub const fn splat(s: f32) -> $v {
                $v { $( $e: s, )* }
            }

            #[inline]
            pub fn from_slice(a: &[f32; $n]) -> $v {
                bytemuck::cast(*a)
            }

            #[inline]
            pub fn to_array(self) -> [f32; $n] {
                bytemuck::cast(self)
            }

            #[inline]
            pub fn dot(self, b: $v) -> f32 {
                // The (-0.0) tail keeps the sum foldable: adding negative
                // zero is a nop in IEEE 754, adding positive zero is not
                // (it flips the sign of -0.0).
                $( self.$e * b.$e + )* (-0.0)
            }

            #[inline]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            #[inline]
            pub fn length(self) -> f32 {
                self.length_squared().sqrt()
            }

            #[inline]
            pub fn distance(self, b: $v) -> f32 {
                (self - b).length()
            }

            #[inline]
            pub fn distance_squared(self, b: $v) -> f32 {
                (self - b).length_squared()
            }

            /// Returns the unit-length vector pointing the same way as
            /// `self`. The zero vector and exactly-unit vectors are
            /// returned unchanged, skipping the square root; everything
            /// else is scaled by the inverse length.
            #[inline]
            pub fn normalized(self) -> $v {
                let lsqr = self.length_squared();
                if lsqr != 1.0 && lsqr > 0.0 {
                    self * (1.0 / lsqr.sqrt())
                } else {
                    self
                }
            }

            /// Reflects `self` about the plane with unit normal `n`.
            /// `n` is not normalized here.
            #[inline]
            pub fn reflect(self, n: $v) -> $v {
                self - n * (2.0 * self.dot(n))
            }

            #[inline]
            pub fn lerp(self, b: $v, t: f32) -> $v {
                $v { $( $e: self.$e * (1.0 - t) + b.$e * t, )* }
            }

            #[inline]
            pub fn min(self, b: $v) -> $v {
                $v { $( $e: self.$e.min(b.$e), )* }
            }

            #[inline]
            pub fn max(self, b: $v) -> $v {
                $v { $( $e: self.$e.max(b.$e), )* }
            }

            #[inline]
            pub fn clamp(self, min: $v, max: $v) -> $v {
                $v { $( $e: self.$e.clamp(min.$e, max.$e), )* }
            }
        }

        impl ops::Neg for $v {
            type Output = $v;

            #[inline]
            fn neg(self) -> $v {
                $v { $( $e: -self.$e, )* }
            }
        }

        impl fmt::Display for $v {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let parts: Vec<String> = match f.precision() {
                    Some(p) => vec![$( format!("{:.*}", p, self.$e), )*],
                    None => vec![$( format!("{}", self.$e), )*],
                };
                write!(f, "{}({})", stringify!($v), parts.join(", "))
            }
        }

        vec_op_impl!(Add, add, $v, $($e),*);
        vec_op_impl!(Sub, sub, $v, $($e),*);
        vec_op_impl!(Mul, mul, $v, $($e),*);
        vec_op_impl!(Div, div, $v, $($e),*);

        vec_assign_op_impl!(AddAssign, add_assign, $v, $($e),*);
        vec_assign_op_impl!(SubAssign, sub_assign, $v, $($e),*);
        vec_assign_op_impl!(MulAssign, mul_assign, $v, $($e),*);
        vec_assign_op_impl!(DivAssign, div_assign, $v, $($e),*);

        scalar_op_impl!(Add, add, $v);
        scalar_op_impl!(Sub, sub, $v);
        scalar_op_impl!(Mul, mul, $v);
        scalar_op_impl!(Div, div, $v);

        scalar_assign_op_impl!(AddAssign, add_assign, $v, $($e),*);
        scalar_assign_op_impl!(SubAssign, sub_assign, $v, $($e),*);
        scalar_assign_op_impl!(MulAssign, mul_assign, $v, $($e),*);
        scalar_assign_op_impl!(DivAssign, div_assign, $v, $($e),*);
    }
}

vec_impl!(Vec2, 2, x, y);
vec_impl!(Vec3, 3, x, y, z);
vec_impl!(Vec4, 4, x, y, z, w);

impl Vec3 {
    pub const UNIT_X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const UNIT_Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const UNIT_Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn from_vec2(v: Vec2, z: f32) -> Vec3 {
        Vec3 { x: v.x, y: v.y, z }
    }

    #[inline]
    pub const fn xy(self) -> Vec2 {
        Vec2 { x: self.x, y: self.y }
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, b: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * b.z - self.z * b.y,
            y: self.z * b.x - self.x * b.z,
            z: self.x * b.y - self.y * b.x,
        }
    }
}

impl Vec4 {
    #[inline]
    pub const fn from_vec3(v: Vec3, w: f32) -> Vec4 {
        Vec4 { x: v.x, y: v.y, z: v.z, w }
    }

    #[inline]
    pub const fn from_vec2(v: Vec2, z: f32, w: f32) -> Vec4 {
        Vec4 { x: v.x, y: v.y, z, w }
    }

    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }

    #[inline]
    pub const fn xy(self) -> Vec2 {
        Vec2 { x: self.x, y: self.y }
    }
}

impl From<Vec2> for Vec3 {
    #[inline]
    fn from(v: Vec2) -> Vec3 {
        Vec3::from_vec2(v, 0.0)
    }
}

impl From<Vec3> for Vec4 {
    #[inline]
    fn from(v: Vec3) -> Vec4 {
        Vec4::from_vec3(v, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1.0e-6;

    #[test]
    fn component_wise_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(a + b, b + a);
        assert_eq!(a - b, -(b - a));
        assert_eq!(a * b, Vec2::new(3.0, 8.0));
        assert_eq!(b / a, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn scalar_broadcast_direction() {
        let v = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(v + 1.0, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(1.0 + v, v + 1.0);
        assert_eq!(v * 2.0, 2.0 * v);

        // s - v and s / v are not the same as v - s and v / s.
        assert_eq!(1.0 - v, Vec3::splat(1.0) - v);
        assert_eq!(1.0 - v, -(v - 1.0));
        assert_eq!(6.0 / v, Vec3::new(6.0, 3.0, 2.0));
    }

    #[test]
    fn assign_ops() {
        let mut v = Vec2::new(10.0, 2.0);
        v += 1.0;
        assert_eq!(v, Vec2::new(11.0, 3.0));
        v -= Vec2::new(1.0, 3.0);
        assert_eq!(v, Vec2::new(10.0, 0.0));
        v *= 0.5;
        assert_eq!(v, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn dot_length_distance() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -5.0, 6.0);

        assert_eq!(a.dot(b), 12.0);
        assert_eq!(a.length_squared(), 14.0);
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vec2::new(1.0, 1.0).distance(Vec2::new(4.0, 5.0)), 5.0);
        assert_eq!(a.distance_squared(b), 67.0);

        // vec4 dot sums all four lanes.
        let p = Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(p.dot(p), 4.0);
    }

    #[test]
    fn normalize_degenerate_policy() {
        // Zero vector passes through untouched.
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);

        // Exactly-unit input is returned bit for bit.
        let u = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(u.normalized(), u);

        let v = Vec3::new(3.0, 0.0, 4.0);
        let n = v.normalized();
        assert!((n.length() - 1.0).abs() < EPS);
        assert!((n.x - 0.6).abs() < EPS && (n.z - 0.8).abs() < EPS);
    }

    #[test]
    fn normalize_idempotent() {
        let v = Vec3::new(-2.5, 7.0, 0.5);
        let n = v.normalized();
        let nn = n.normalized();
        assert!((nn.x - n.x).abs() < EPS);
        assert!((nn.y - n.y).abs() < EPS);
        assert!((nn.z - n.z).abs() < EPS);
    }

    #[test]
    fn cross_orthogonality() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        let c = a.cross(b);

        assert!(c.dot(a).abs() < EPS);
        assert!(c.dot(b).abs() < EPS);

        // Right-handed basis.
        assert_eq!(Vec3::UNIT_X.cross(Vec3::UNIT_Y), Vec3::UNIT_Z);
    }

    #[test]
    fn reflect_about_plane() {
        let v = Vec2::new(1.0, -1.0);
        let n = Vec2::new(0.0, 1.0);
        assert_eq!(v.reflect(n), Vec2::new(1.0, 1.0));

        // Reflecting twice about the same plane is the identity.
        assert_eq!(v.reflect(n).reflect(n), v);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Vec3::new(0.0, 2.0, -4.0);
        let b = Vec3::new(8.0, 0.0, 4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(4.0, 1.0, 0.0));
    }

    #[test]
    fn promotion_and_truncation() {
        let v2 = Vec2::new(1.0, 2.0);
        assert_eq!(Vec3::from(v2), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(Vec3::from_vec2(v2, 7.0), Vec3::new(1.0, 2.0, 7.0));

        let v3 = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Vec4::from(v3), Vec4::new(1.0, 2.0, 3.0, 0.0));
        assert_eq!(Vec4::from_vec3(v3, 1.0).xyz(), v3);
        assert_eq!(Vec4::from_vec2(v2, 3.0, 4.0).xy(), v2);
    }

    #[test]
    fn display_round_trips() {
        let v = Vec2::new(0.1, -2.5);
        assert_eq!(format!("{}", v), "Vec2(0.1, -2.5)");
        assert_eq!(format!("{:.2}", v), "Vec2(0.10, -2.50)");

        let s = format!("{}", Vec3::new(1.0 / 3.0, 0.0, 1.0));
        let x: f32 = s["Vec3(".len()..s.find(',').unwrap()].parse().unwrap();
        assert_eq!(x, 1.0 / 3.0);
    }

    #[test]
    fn slice_round_trip() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Vec4::from_slice(&v.to_array()), v);
    }
}
