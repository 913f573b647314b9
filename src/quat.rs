use core::ops;
use core::fmt;

use bytemuck::{Pod, Zeroable};

use crate::vec::{Vec3, Vec4};
use crate::mat::{Mat3, Mat4};

/// Rotation quaternion, `w` is the scalar part. The identity rotation is
/// `(0, 0, 0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    #[inline]
    fn default() -> Quat {
        Quat::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Quat = Quat { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Quat {
        Quat { x, y, z, w }
    }

    #[inline]
    pub const fn from_vec4(v: Vec4) -> Quat {
        Quat { x: v.x, y: v.y, z: v.z, w: v.w }
    }

    #[inline]
    pub const fn to_vec4(self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, self.w)
    }

    #[inline]
    pub const fn re(self) -> f32 {
        self.w
    }

    #[inline]
    pub const fn im(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Half-angle construction. The axis is normalized internally; a zero
    /// axis yields the identity.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Quat {
        if axis.length_squared() == 0.0 {
            return Quat::IDENTITY;
        }

        let v = axis.normalized() * (angle * 0.5).sin();
        Quat {
            x: v.x,
            y: v.y,
            z: v.z,
            w: (angle * 0.5).cos(),
        }
    }

    /// Recovers the axis and angle. For a rotation within rounding of the
    /// identity the axis is ill-defined and +x is returned.
    pub fn to_axis_angle(self) -> (Vec3, f32) {
        let q = Quat::from_vec4(self.to_vec4().normalized());

        let den = (1.0 - q.w * q.w).sqrt();
        let axis = if den > 1.0e-4 {
            q.im() / den
        } else {
            Vec3::UNIT_X
        };
        (axis, 2.0 * q.w.acos())
    }

    /// Yaw about y, then pitch about x, then roll about z (intrinsic,
    /// roll applied first), angles in radians.
    pub fn from_euler(yaw: f32, pitch: f32, roll: f32) -> Quat {
        Quat::from_axis_angle(Vec3::UNIT_Y, yaw)
            * Quat::from_axis_angle(Vec3::UNIT_X, pitch)
            * Quat::from_axis_angle(Vec3::UNIT_Z, roll)
    }

    #[inline]
    pub fn conjugate(self) -> Quat {
        Quat {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    #[inline]
    pub fn inverse(self) -> Quat {
        self.conjugate() * (1.0 / self.norm_squared())
    }

    #[inline]
    pub fn norm_squared(self) -> f32 {
        self.to_vec4().length_squared()
    }

    #[inline]
    pub fn norm(self) -> f32 {
        self.norm_squared().sqrt()
    }

    #[inline]
    pub fn normalized(self) -> Quat {
        Quat::from_vec4(self.to_vec4().normalized())
    }

    /// Rotation matrix equivalent, laid out to agree with
    /// [`Mat4::rotation`] on the matching axis-angle input.
    pub fn to_mat3(self) -> Mat3 {
        let Quat { x, y, z, w } = self;

        let xy = x * y;
        let xz = x * z;
        let xw = x * w;
        let yz = y * z;
        let yw = y * w;
        let zw = z * w;
        let xx = x * x;
        let yy = y * y;
        let zz = z * z;

        let mut m = Mat3::new();
        m.e[0][0] = 1.0 - 2.0 * (yy + zz);
        m.e[0][1] = 2.0 * (xy + zw);
        m.e[0][2] = 2.0 * (xz - yw);

        m.e[1][0] = 2.0 * (xy - zw);
        m.e[1][1] = 1.0 - 2.0 * (xx + zz);
        m.e[1][2] = 2.0 * (yz + xw);

        m.e[2][0] = 2.0 * (xz + yw);
        m.e[2][1] = 2.0 * (yz - xw);
        m.e[2][2] = 1.0 - 2.0 * (xx + yy);

        m
    }

    #[inline]
    pub fn to_mat4(self) -> Mat4 {
        Mat4::from_mat3(&self.to_mat3())
    }
}

impl ops::Mul<f32> for Quat {
    type Output = Quat;

    #[inline]
    fn mul(self, rhs: f32) -> Quat {
        Quat {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}

impl ops::Mul<Quat> for f32 {
    type Output = Quat;

    #[inline]
    fn mul(self, rhs: Quat) -> Quat {
        rhs * self
    }
}

impl ops::Neg for Quat {
    type Output = Quat;

    #[inline]
    fn neg(self) -> Quat {
        Quat {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

// Hamilton product. `(a * b).to_mat4()` composes like `a.to_mat4() *
// b.to_mat4()`: `b` rotates first.
impl ops::Mul<Quat> for Quat {
    type Output = Quat;

    #[inline]
    fn mul(self, rhs: Quat) -> Quat {
        let a = self.im();
        let b = rhs.im();

        let w = self.w * rhs.w - a.dot(b);
        let v = self.w * b + rhs.w * a + a.cross(b);
        Quat {
            x: v.x,
            y: v.y,
            z: v.z,
            w,
        }
    }
}

// Rotates a vector through the quaternion sandwich, expanded in closed
// form. `self` is assumed unit length.
impl ops::Mul<Vec3> for Quat {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        let s = self.re();
        let u = self.im();

        (s * s - u.dot(u)) * rhs + 2.0 * u.dot(rhs) * u + 2.0 * s * u.cross(rhs)
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts: Vec<String> = match f.precision() {
            Some(p) => [self.x, self.y, self.z, self.w]
                .iter()
                .map(|c| format!("{:.*}", p, c))
                .collect(),
            None => [self.x, self.y, self.z, self.w]
                .iter()
                .map(|c| format!("{}", c))
                .collect(),
        };
        write!(f, "Quat({})", parts.join(", "))
    }
}
