use core::ops;
use core::fmt;

use bytemuck::{Pod, Zeroable};

use crate::vec::{Vec2, Vec3, Vec4};

// Storage is row-major: `e[row][col]`, with translation in the last row.
// A vector transforms as a row vector on the left, so component `i` of
// `m * v` is the dot product of column `i` with `v`, and `a * b` produces
// the matrix that applies `b` first and `a` second.

macro_rules! mat_impl {
    ($m: ident, $v: ident, $n: literal) => {

        #[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
        #[repr(C)]
        pub struct $m {
            pub e: [[f32; $n]; $n],
        }

        impl $m {
            #[inline]
            pub fn new() -> $m {
                $m::default()
            }

            #[inline]
            pub fn identity() -> $m {
                $m::scale_uniform(1.0)
            }

            /// Diagonal matrix with `d` in every diagonal entry.
            #[inline]
            pub fn scale_uniform(d: f32) -> $m {
                let mut m = $m::new();
                for i in 0..$n {
                    m.e[i][i] = d;
                }
                m
            }

            #[inline]
            pub fn from_rows(v: &[$v; $n]) -> $m {
                let mut m = $m::new();
                for i in 0..$n {
                    m.e[i] = v[i].to_array();
                }
                m
            }

            #[inline]
            pub fn from_columns(v: &[$v; $n]) -> $m {
                $m::from_rows(v).transpose()
            }

            #[inline]
            pub fn to_rows(&self) -> [$v; $n] {
                bytemuck::cast(self.e)
            }

            #[inline]
            pub fn to_columns(&self) -> [$v; $n] {
                self.transpose().to_rows()
            }

            #[inline]
            pub fn transpose(&self) -> $m {
                let mut m = $m::new();
                for i in 0..$n {
                    for j in 0..$n {
                        m.e[i][j] = self.e[j][i];
                    }
                }
                m
            }
        }

        impl ops::Add<$m> for $m {
            type Output = $m;

            #[inline]
            fn add(self, rhs: $m) -> $m {
                let mut m = $m::new();
                for i in 0..$n {
                    for j in 0..$n {
                        m.e[i][j] = self.e[i][j] + rhs.e[i][j];
                    }
                }
                m
            }
        }

        impl ops::Sub<$m> for $m {
            type Output = $m;

            #[inline]
            fn sub(self, rhs: $m) -> $m {
                let mut m = $m::new();
                for i in 0..$n {
                    for j in 0..$n {
                        m.e[i][j] = self.e[i][j] - rhs.e[i][j];
                    }
                }
                m
            }
        }

        impl ops::Mul<f32> for $m {
            type Output = $m;

            #[inline]
            fn mul(self, rhs: f32) -> $m {
                let mut m = $m::new();
                for i in 0..$n {
                    for j in 0..$n {
                        m.e[i][j] = self.e[i][j] * rhs;
                    }
                }
                m
            }
        }

        impl ops::Mul<$m> for f32 {
            type Output = $m;

            #[inline]
            fn mul(self, rhs: $m) -> $m {
                rhs * self
            }
        }

        impl ops::Mul<$m> for $m {
            type Output = $m;

            // `(a * b) * v == a * (b * v)`: the product applies `b` to the
            // vector before `a`.
            #[inline]
            fn mul(self, rhs: $m) -> $m {
                let cols = self.to_columns();
                let rows = rhs.to_rows();

                let mut m = $m::new();
                for i in 0..$n {
                    for j in 0..$n {
                        m.e[i][j] = rows[i].dot(cols[j]);
                    }
                }
                m
            }
        }

        impl ops::Mul<$v> for $m {
            type Output = $v;

            #[inline]
            fn mul(self, rhs: $v) -> $v {
                let cols = self.to_columns();

                let mut v = [0.0; $n];
                for i in 0..$n {
                    v[i] = cols[i].dot(rhs);
                }
                $v::from_slice(&v)
            }
        }

        impl fmt::Display for $m {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let mut parts = Vec::with_capacity($n * $n);
                for i in 0..$n {
                    for j in 0..$n {
                        match f.precision() {
                            Some(p) => parts.push(format!("{:.*}", p, self.e[i][j])),
                            None => parts.push(format!("{}", self.e[i][j])),
                        }
                    }
                }
                write!(f, "{}({})", stringify!($m), parts.join(", "))
            }
        }
    }
}

mat_impl!(Mat2, Vec2, 2);
mat_impl!(Mat3, Vec3, 3);
mat_impl!(Mat4, Vec4, 4);

impl Mat3 {
    /// Upper-left 3x3 corner of a 4x4 matrix.
    pub fn from_mat4(m: &Mat4) -> Mat3 {
        let mut r = Mat3::new();
        for i in 0..3 {
            r.e[i].copy_from_slice(&m.e[i][0..3]);
        }
        r
    }
}

impl Mat4 {
    /// Embeds a 3x3 matrix in the upper-left corner of an identity 4x4.
    pub fn from_mat3(m: &Mat3) -> Mat4 {
        let mut r = Mat4::identity();
        for i in 0..3 {
            r.e[i][0..3].copy_from_slice(&m.e[i]);
        }
        r
    }

    pub fn translation(v: Vec3) -> Mat4 {
        let mut m = Mat4::identity();
        m.e[3][0..3].copy_from_slice(&v.to_array());
        m
    }

    #[inline]
    pub fn translation_xyz(x: f32, y: f32, z: f32) -> Mat4 {
        Mat4::translation(Vec3::new(x, y, z))
    }

    pub fn scale(v: Vec3) -> Mat4 {
        let vv = v.to_array();

        let mut m = Mat4::identity();
        for i in 0..3 {
            m.e[i][i] = vv[i];
        }
        m
    }

    #[inline]
    pub fn scale_xyz(x: f32, y: f32, z: f32) -> Mat4 {
        Mat4::scale(Vec3::new(x, y, z))
    }

    pub fn rotation_x(angle: f32) -> Mat4 {
        let c = angle.cos();
        let s = angle.sin();

        let mut m = Mat4::identity();
        m.e[1][1] = c;
        m.e[1][2] = s;
        m.e[2][1] = -s;
        m.e[2][2] = c;
        m
    }

    pub fn rotation_y(angle: f32) -> Mat4 {
        let c = angle.cos();
        let s = angle.sin();

        let mut m = Mat4::identity();
        m.e[0][0] = c;
        m.e[0][2] = -s;
        m.e[2][0] = s;
        m.e[2][2] = c;
        m
    }

    pub fn rotation_z(angle: f32) -> Mat4 {
        let c = angle.cos();
        let s = angle.sin();

        let mut m = Mat4::identity();
        m.e[0][0] = c;
        m.e[0][1] = s;
        m.e[1][0] = -s;
        m.e[1][1] = c;
        m
    }

    /// Rotation about an arbitrary axis. `axis` is assumed unit length and
    /// is not normalized here.
    ///
    /// The angle is negated before the trig evaluation; with this layout
    /// that makes `rotation(Vec3::UNIT_Z, a)` agree entry for entry with
    /// `rotation_z(a)`, and likewise for the other fixed axes.
    pub fn rotation(axis: Vec3, angle: f32) -> Mat4 {
        let x = axis.x;
        let y = axis.y;
        let z = axis.z;

        let c = (-angle).cos();
        let s = (-angle).sin();
        let t = 1.0 - c;

        let mut m = Mat4::identity();
        m.e[0][0] = t * x * x + c;
        m.e[0][1] = t * x * y - s * z;
        m.e[0][2] = t * x * z + s * y;

        m.e[1][0] = t * x * y + s * z;
        m.e[1][1] = t * y * y + c;
        m.e[1][2] = t * y * z - s * x;

        m.e[2][0] = t * x * z - s * y;
        m.e[2][1] = t * y * z + s * x;
        m.e[2][2] = t * z * z + c;

        m
    }

    /// Orthographic projection mapping the box to the -1..1 clip volume.
    /// Zero extent on any axis divides by zero and the Inf/NaN entries
    /// land in the result.
    pub fn orthographic(left: f32, right: f32, bottom: f32,
                        top: f32, near: f32, far: f32) -> Mat4 {
        let mut m = Mat4::identity();
        m.e[0][0] = 2.0 / (right - left);
        m.e[1][1] = 2.0 / (top - bottom);
        m.e[2][2] = 2.0 / (far - near);
        m.e[3][0] = (left + right) / (left - right);
        m.e[3][1] = (bottom + top) / (bottom - top);
        m.e[3][2] = (near + far) / (near - far);
        m
    }

    /// Perspective projection. `fov` is the vertical field of view in
    /// radians and must lie strictly inside (0, pi); no validation is done
    /// and out-of-domain input propagates through the trig as-is.
    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let a = 1.0 / (fov * 0.5).tan();
        let b = far / (near - far);

        let mut m = Mat4::new();
        m.e[0][0] = a / aspect;
        m.e[1][1] = a;
        m.e[2][2] = b;
        m.e[2][3] = -1.0;
        m.e[3][2] = near * b;
        m
    }

    /// View matrix looking from `eye` toward `target`. `up` parallel to
    /// the view direction yields a singular basis; callers keep them
    /// apart.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let z = (eye - target).normalized();
        let x = up.cross(z).normalized();
        let y = z.cross(x).normalized();

        let mut m = Mat4::new();
        m.e[0][0] = x.x;
        m.e[0][1] = y.x;
        m.e[0][2] = z.x;

        m.e[1][0] = x.y;
        m.e[1][1] = y.y;
        m.e[1][2] = z.y;

        m.e[2][0] = x.z;
        m.e[2][1] = y.z;
        m.e[2][2] = z.z;

        m.e[3][0] = -x.dot(eye);
        m.e[3][1] = -y.dot(eye);
        m.e[3][2] = -z.dot(eye);
        m.e[3][3] = 1.0;

        m
    }
}
