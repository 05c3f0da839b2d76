use std::ops::{Add, Div, Mul, Neg, Sub};

// ─────────────────────────────────────────────────────────────────────────────
// Vec3
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit vector along the X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along the Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a Vec3 from an array.
    #[must_use]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert to an array.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    #[must_use]
    pub const fn length_squared(self) -> f64 {
        self.dot(self)
    }

    #[must_use]
    pub const fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[must_use]
    pub const fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let len = self.length();
        if len.is_finite() && len > 0.0 {
            Some(Self::new(self.x / len, self.y / len, self.z / len))
        } else {
            None
        }
    }

    /// Normalize, collapsing degenerate vectors to `Vec3::ZERO` instead of
    /// failing. Radial directions in the surface math rely on this: a target
    /// on the axis yields a zero radial, not an error.
    #[must_use]
    pub fn normalized_or_zero(self) -> Self {
        self.normalized().unwrap_or(Self::ZERO)
    }

    /// Component of `self` along `axis` (the axis need not be unit length).
    /// Returns `Vec3::ZERO` for a degenerate axis.
    #[must_use]
    pub fn project_onto(self, axis: Self) -> Self {
        let denom = axis.length_squared();
        if denom.is_finite() && denom > 0.0 {
            axis.mul_scalar(self.dot(axis) / denom)
        } else {
            Self::ZERO
        }
    }

    /// Component of `self` orthogonal to `normal`.
    #[must_use]
    pub fn project_onto_plane(self, normal: Self) -> Self {
        self.sub(self.project_onto(normal))
    }

    /// Linear interpolation between two vectors.
    /// Returns `self * (1 - t) + rhs * t`.
    #[must_use]
    pub fn lerp(self, rhs: Self, t: f64) -> Self {
        Self::new(
            self.x + (rhs.x - self.x) * t,
            self.y + (rhs.y - self.y) * t,
            self.z + (rhs.z - self.z) * t,
        )
    }

    #[must_use]
    pub const fn mul_scalar(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    #[must_use]
    pub const fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }

    #[must_use]
    pub const fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }

    #[must_use]
    pub const fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    /// True when every component is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        Vec3::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Point3
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// The origin point (0, 0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a Point3 from an array.
    #[must_use]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Convert point to a position vector from the origin.
    #[must_use]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[must_use]
    pub const fn add_vec(self, v: Vec3) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }

    #[must_use]
    pub const fn sub_vec(self, v: Vec3) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }

    #[must_use]
    pub const fn sub_point(self, rhs: Self) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        self.sub_point(other).length()
    }
}

impl Default for Point3 {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        p.to_array()
    }
}

impl From<Vec3> for Point3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for Vec3 {
    fn from(p: Point3) -> Self {
        p.to_vec3()
    }
}

impl Add<Vec3> for Point3 {
    type Output = Self;
    fn add(self, rhs: Vec3) -> Self::Output {
        self.add_vec(rhs)
    }
}

impl Sub<Vec3> for Point3 {
    type Output = Self;
    fn sub(self, rhs: Vec3) -> Self::Output {
        self.sub_vec(rhs)
    }
}

impl Sub for Point3 {
    type Output = Vec3;
    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_point(rhs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quat
// ─────────────────────────────────────────────────────────────────────────────

/// Unit quaternion encoding a 3D rotation.
///
/// All angle parameters in this crate are degrees; conversions to radians
/// happen internally. Constructors absorb degenerate input (zero axes, zero
/// directions) by returning `Quat::IDENTITY` rather than producing NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quat {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `degrees` about `axis` (right-hand rule).
    /// Identity when the axis is degenerate.
    #[must_use]
    pub fn from_axis_angle(axis: Vec3, degrees: f64) -> Self {
        match axis.normalized() {
            Some(axis) => {
                let half = degrees.to_radians() * 0.5;
                let s = half.sin();
                Self::new(axis.x * s, axis.y * s, axis.z * s, half.cos())
            }
            None => Self::IDENTITY,
        }
    }

    /// Shortest-arc rotation taking the direction of `from` onto the
    /// direction of `to`. Neither input needs to be unit length.
    /// Identity when either is degenerate; a 180° flip about a deterministic
    /// orthogonal axis when they point exactly opposite ways.
    #[must_use]
    pub fn from_rotation_arc(from: Vec3, to: Vec3) -> Self {
        let (Some(from), Some(to)) = (from.normalized(), to.normalized()) else {
            return Self::IDENTITY;
        };
        let d = from.dot(to);
        if d >= 1.0 - Tolerance::DEFAULT.eps {
            return Self::IDENTITY;
        }
        if d <= -1.0 + Tolerance::DEFAULT.eps {
            return Self::from_axis_angle(orthogonal_unit_vector(from), 180.0);
        }
        let axis = from.cross(to);
        Self::new(axis.x, axis.y, axis.z, 1.0 + d)
            .normalized()
            .unwrap_or(Self::IDENTITY)
    }

    /// Rotation whose forward (+Z) axis points along `forward` and whose up
    /// axis stays as close to `up` as orthogonality allows. Identity when
    /// `forward` is degenerate; when `up` is parallel to `forward` the up
    /// axis falls back to a deterministic orthogonal.
    #[must_use]
    pub fn look_rotation(forward: Vec3, up: Vec3) -> Self {
        let Some(z_axis) = forward.normalized() else {
            return Self::IDENTITY;
        };
        let x_axis = up
            .cross(z_axis)
            .normalized()
            .unwrap_or_else(|| orthogonal_unit_vector(z_axis));
        let y_axis = z_axis.cross(x_axis);
        Self::from_axes(x_axis, y_axis, z_axis)
    }

    /// Build a rotation from three orthonormal basis vectors (the columns of
    /// the rotation matrix). The basis must be right-handed.
    #[must_use]
    pub fn from_axes(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        let m00 = x_axis.x;
        let m01 = y_axis.x;
        let m02 = z_axis.x;
        let m10 = x_axis.y;
        let m11 = y_axis.y;
        let m12 = z_axis.y;
        let m20 = x_axis.z;
        let m21 = y_axis.z;
        let m22 = z_axis.z;

        let trace = m00 + m11 + m22;
        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, s * 0.25)
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
            Self::new(s * 0.25, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
            Self::new((m01 + m10) / s, s * 0.25, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
            Self::new((m02 + m20) / s, (m12 + m21) / s, s * 0.25, (m10 - m01) / s)
        }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    #[must_use]
    pub const fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let len = self.length();
        if len.is_finite() && len > 0.0 {
            Some(Self::new(
                self.x / len,
                self.y / len,
                self.z / len,
                self.w / len,
            ))
        } else {
            None
        }
    }

    /// Inverse rotation. Valid for unit quaternions, which is the only kind
    /// this crate constructs.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Rotate a vector by this quaternion.
    #[must_use]
    pub fn rotate_vec(self, v: Vec3) -> Vec3 {
        let u = Vec3::new(self.x, self.y, self.z);
        let t = u.cross(v).mul_scalar(2.0);
        v + t * self.w + u.cross(t)
    }

    /// Angle between two rotations in degrees, in `[0, 180]`.
    #[must_use]
    pub fn angle_to(self, other: Self) -> f64 {
        let d = self.dot(other).abs().clamp(0.0, 1.0);
        (2.0 * d.acos()).to_degrees()
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.rotate_vec(rhs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pose
// ─────────────────────────────────────────────────────────────────────────────

/// Rigid transform: a position and a rotation, no scale.
///
/// This is the shape of every externally supplied reference frame (grip
/// point, relative-to frame) as well as of the hand poses flowing through the
/// placement operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Point3,
    pub rotation: Quat,
}

impl Pose {
    /// World frame: origin position, identity rotation.
    pub const IDENTITY: Self = Self::new(Point3::ORIGIN, Quat::IDENTITY);

    #[must_use]
    pub const fn new(position: Point3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Pose at `position` with identity rotation.
    #[must_use]
    pub const fn from_position(position: Point3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    /// Map a point from this pose's local frame to the world.
    #[must_use]
    pub fn transform_point(self, p: Point3) -> Point3 {
        self.position + self.rotation.rotate_vec(p.to_vec3())
    }

    /// Map a world point into this pose's local frame.
    #[must_use]
    pub fn inverse_transform_point(self, p: Point3) -> Point3 {
        Point3::from(self.rotation.inverse().rotate_vec(p - self.position))
    }

    /// Rotate a direction from this pose's local frame to the world.
    #[must_use]
    pub fn transform_vec(self, v: Vec3) -> Vec3 {
        self.rotation.rotate_vec(v)
    }

    /// Compose with a pose expressed in this pose's local frame, yielding the
    /// world-space pose.
    #[must_use]
    pub fn compose(self, local: Self) -> Self {
        Self::new(
            self.transform_point(local.position),
            self.rotation * local.rotation,
        )
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        let rotation = self.rotation.inverse();
        Self::new(
            Point3::from(rotation.rotate_vec(self.position.to_vec3().neg())),
            rotation,
        )
    }

    /// This pose's up axis (+Y rotated into the world).
    #[must_use]
    pub fn up(self) -> Vec3 {
        self.rotation.rotate_vec(Vec3::Y)
    }

    /// This pose's forward axis (+Z rotated into the world).
    #[must_use]
    pub fn forward(self) -> Vec3 {
        self.rotation.rotate_vec(Vec3::Z)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Angles
// ─────────────────────────────────────────────────────────────────────────────

/// Wrap an angle in degrees into `[0, 360)`.
#[must_use]
pub fn wrap_degrees(degrees: f64) -> f64 {
    let mut a = degrees % 360.0;
    if a < 0.0 {
        a += 360.0;
    }
    // a tiny negative input can round up to exactly 360.0
    if a >= 360.0 {
        a = 0.0;
    }
    a
}

/// Signed angle in degrees from `from` to `to`, measured about `axis` with
/// the right-hand rule, in `(-180, 180]`. Degenerate inputs read as zero.
#[must_use]
pub fn signed_angle_about(from: Vec3, to: Vec3, axis: Vec3) -> f64 {
    let denom = (from.length_squared() * to.length_squared()).sqrt();
    if !denom.is_finite() || denom < 1e-15 {
        return 0.0;
    }
    let unsigned = (from.dot(to) / denom).clamp(-1.0, 1.0).acos().to_degrees();
    if from.cross(to).dot(axis) < 0.0 {
        -unsigned
    } else {
        unsigned
    }
}

/// Deterministic unit vector orthogonal to `reference`: the cross product
/// with the coordinate axis of smallest magnitude along `reference`.
/// Falls back to `Vec3::X` when `reference` itself is degenerate.
#[must_use]
pub fn orthogonal_unit_vector(reference: Vec3) -> Vec3 {
    let abs = Vec3::new(reference.x.abs(), reference.y.abs(), reference.z.abs());
    let axis = if abs.x <= abs.y && abs.x <= abs.z {
        Vec3::X
    } else if abs.y <= abs.z {
        Vec3::Y
    } else {
        Vec3::Z
    };
    reference.cross(axis).normalized().unwrap_or(Vec3::X)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tolerance
// ─────────────────────────────────────────────────────────────────────────────

/// Tolerance configuration for geometric comparisons.
///
/// Use the named constants for specific use cases to avoid epsilon scatter:
/// - `Tolerance::DEFAULT` - General geometry comparisons (1e-9)
/// - `Tolerance::ZERO_LENGTH` - Detecting degenerate/zero-length vectors (1e-12)
/// - `Tolerance::ANGLE` - Angular comparisons in degrees (1e-9)
/// - `Tolerance::LOOSE` - Coarse comparisons, e.g. across full pose round-trips (1e-6)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub eps: f64,
}

impl Tolerance {
    /// Default geometric tolerance (1e-9).
    pub const DEFAULT: Self = Self { eps: 1e-9 };

    /// Tolerance for detecting zero-length/degenerate vectors (1e-12).
    pub const ZERO_LENGTH: Self = Self { eps: 1e-12 };

    /// Tolerance for angular comparisons in degrees (1e-9).
    pub const ANGLE: Self = Self { eps: 1e-9 };

    /// Loose tolerance for coarse comparisons (1e-6).
    pub const LOOSE: Self = Self { eps: 1e-6 };

    /// Tight tolerance for precise comparisons (1e-12).
    pub const TIGHT: Self = Self { eps: 1e-12 };

    #[must_use]
    pub const fn new(eps: f64) -> Self {
        Self { eps }
    }

    #[must_use]
    pub const fn eps_squared(self) -> f64 {
        self.eps * self.eps
    }

    #[must_use]
    pub fn approx_eq_f64(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.eps
    }

    #[must_use]
    pub fn approx_zero_f64(self, a: f64) -> bool {
        a.abs() <= self.eps
    }

    #[must_use]
    pub fn approx_eq_point3(self, a: Point3, b: Point3) -> bool {
        a.sub_point(b).length_squared() <= self.eps_squared()
    }

    #[must_use]
    pub fn approx_eq_vec3(self, a: Vec3, b: Vec3) -> bool {
        a.sub(b).length_squared() <= self.eps_squared()
    }

    /// Check if two unit quaternions encode the same rotation. `q` and `-q`
    /// are the same rotation, so the comparison is on `|dot|`.
    #[must_use]
    pub fn approx_eq_quat(self, a: Quat, b: Quat) -> bool {
        (1.0 - a.dot(b).abs()) <= self.eps
    }

    /// Check if a vector is approximately zero (degenerate).
    #[must_use]
    pub fn is_zero_vec3(self, v: Vec3) -> bool {
        v.length_squared() <= self.eps_squared()
    }

    /// Check if a length/distance is approximately zero.
    #[must_use]
    pub fn is_zero_length(self, len: f64) -> bool {
        len.abs() <= self.eps
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_constants() {
        assert_eq!(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(Vec3::X, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(Vec3::Y, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(Vec3::Z, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_vec3_operators() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_vec3_projection() {
        let v = Vec3::new(3.0, 4.0, 0.0);

        assert_eq!(v.project_onto(Vec3::X), Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(v.project_onto_plane(Vec3::X), Vec3::new(0.0, 4.0, 0.0));
        // non-unit axis projects the same as its normalized form
        assert_eq!(v.project_onto(Vec3::new(0.0, 10.0, 0.0)), Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(v.project_onto(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn test_vec3_normalized_or_zero() {
        let tol = Tolerance::DEFAULT;
        let unit = Vec3::new(2.0, 0.0, 0.0).normalized_or_zero();
        assert!(tol.approx_eq_vec3(unit, Vec3::X));
        assert_eq!(Vec3::ZERO.normalized_or_zero(), Vec3::ZERO);
        assert!(Vec3::ZERO.normalized().is_none());
    }

    #[test]
    fn test_point3_operators() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let v = Vec3::new(1.0, 1.0, 1.0);

        assert_eq!(p + v, Point3::new(2.0, 3.0, 4.0));
        assert_eq!(p - v, Point3::new(0.0, 1.0, 2.0));

        let q = Point3::new(4.0, 5.0, 6.0);
        assert_eq!(q - p, Vec3::new(3.0, 3.0, 3.0));
        assert!((p.distance_to(q) - 27.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_quat_axis_angle_rotation() {
        let tol = Tolerance::DEFAULT;
        let q = Quat::from_axis_angle(Vec3::Y, 90.0);

        assert!(tol.approx_eq_vec3(q.rotate_vec(Vec3::X), -Vec3::Z));
        assert!(tol.approx_eq_vec3(q.rotate_vec(-Vec3::Z), -Vec3::X));
        assert!(tol.approx_eq_vec3(q.rotate_vec(Vec3::Y), Vec3::Y));
    }

    #[test]
    fn test_quat_degenerate_axis_is_identity() {
        assert_eq!(Quat::from_axis_angle(Vec3::ZERO, 45.0), Quat::IDENTITY);
    }

    #[test]
    fn test_quat_composition_order() {
        let tol = Tolerance::DEFAULT;
        let yaw = Quat::from_axis_angle(Vec3::Y, 90.0);
        let roll = Quat::from_axis_angle(Vec3::Z, 90.0);

        // (yaw * roll) applies roll first, then yaw
        let composed = yaw * roll;
        let via_steps = yaw.rotate_vec(roll.rotate_vec(Vec3::X));
        assert!(tol.approx_eq_vec3(composed.rotate_vec(Vec3::X), via_steps));
    }

    #[test]
    fn test_quat_inverse_roundtrip() {
        let tol = Tolerance::DEFAULT;
        let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, -0.5), 37.0);
        let v = Vec3::new(0.3, -1.2, 2.5);

        assert!(tol.approx_eq_vec3(q.inverse().rotate_vec(q.rotate_vec(v)), v));
        assert!(tol.approx_eq_quat(q * q.inverse(), Quat::IDENTITY));
    }

    #[test]
    fn test_quat_rotation_arc() {
        let tol = Tolerance::DEFAULT;

        let q = Quat::from_rotation_arc(Vec3::X, Vec3::Y);
        assert!(tol.approx_eq_vec3(q.rotate_vec(Vec3::X), Vec3::Y));

        // inputs need not be unit length
        let q = Quat::from_rotation_arc(Vec3::new(0.2, 0.0, 0.0), Vec3::new(0.0, 0.0, 5.0));
        assert!(tol.approx_eq_vec3(q.rotate_vec(Vec3::X), Vec3::Z));

        assert_eq!(Quat::from_rotation_arc(Vec3::ZERO, Vec3::X), Quat::IDENTITY);
        assert_eq!(Quat::from_rotation_arc(Vec3::X, Vec3::X), Quat::IDENTITY);
    }

    #[test]
    fn test_quat_rotation_arc_opposite() {
        let tol = Tolerance::DEFAULT;
        let q = Quat::from_rotation_arc(Vec3::X, -Vec3::X);

        assert!(tol.approx_eq_vec3(q.rotate_vec(Vec3::X), -Vec3::X));
        assert!(tol.approx_eq_f64(q.angle_to(Quat::IDENTITY), 180.0));
    }

    #[test]
    fn test_quat_look_rotation() {
        let tol = Tolerance::DEFAULT;

        assert!(tol.approx_eq_quat(Quat::look_rotation(Vec3::Z, Vec3::Y), Quat::IDENTITY));

        let q = Quat::look_rotation(Vec3::X, Vec3::Y);
        assert!(tol.approx_eq_vec3(q.rotate_vec(Vec3::Z), Vec3::X));
        assert!(tol.approx_eq_vec3(q.rotate_vec(Vec3::Y), Vec3::Y));

        // degenerate forward keeps the identity
        assert_eq!(Quat::look_rotation(Vec3::ZERO, Vec3::Y), Quat::IDENTITY);
    }

    #[test]
    fn test_quat_look_rotation_parallel_up() {
        let q = Quat::look_rotation(Vec3::Y, Vec3::Y);
        let z = q.rotate_vec(Vec3::Z);
        let tol = Tolerance::DEFAULT;
        assert!(tol.approx_eq_vec3(z, Vec3::Y));
        assert!(q.length().is_finite());
    }

    #[test]
    fn test_pose_transform_roundtrip() {
        let tol = Tolerance::DEFAULT;
        let pose = Pose::new(
            Point3::new(1.0, 2.0, 3.0),
            Quat::from_axis_angle(Vec3::new(0.3, 1.0, -0.2), 71.0),
        );
        let p = Point3::new(-2.0, 0.5, 4.0);

        let world = pose.transform_point(p);
        assert!(tol.approx_eq_point3(pose.inverse_transform_point(world), p));
        assert!(tol.approx_eq_point3(pose.inverse().transform_point(world), p));
    }

    #[test]
    fn test_pose_compose() {
        let tol = Tolerance::DEFAULT;
        let outer = Pose::new(Point3::new(0.0, 1.0, 0.0), Quat::from_axis_angle(Vec3::Y, 90.0));
        let inner = Pose::from_position(Point3::new(1.0, 0.0, 0.0));

        let composed = outer.compose(inner);
        assert!(tol.approx_eq_point3(composed.position, Point3::new(0.0, 1.0, -1.0)));
    }

    #[test]
    fn test_pose_axes() {
        let tol = Tolerance::DEFAULT;
        let pose = Pose::new(Point3::ORIGIN, Quat::from_axis_angle(Vec3::X, 90.0));

        // +90° about X sends +Y to +Z and +Z to -Y
        assert!(tol.approx_eq_vec3(pose.up(), Vec3::Z));
        assert!(tol.approx_eq_vec3(pose.forward(), -Vec3::Y));
    }

    #[test]
    fn test_wrap_degrees() {
        let tol = Tolerance::ANGLE;
        assert!(tol.approx_eq_f64(wrap_degrees(0.0), 0.0));
        assert!(tol.approx_eq_f64(wrap_degrees(360.0), 0.0));
        assert!(tol.approx_eq_f64(wrap_degrees(370.0), 10.0));
        assert!(tol.approx_eq_f64(wrap_degrees(-90.0), 270.0));
        assert!(tol.approx_eq_f64(wrap_degrees(-360.0), 0.0));
        assert!(tol.approx_eq_f64(wrap_degrees(725.0), 5.0));
        assert!(wrap_degrees(-1e-18) < 360.0);
    }

    #[test]
    fn test_signed_angle_about() {
        let tol = Tolerance::ANGLE;
        assert!(tol.approx_eq_f64(signed_angle_about(Vec3::X, -Vec3::Z, Vec3::Y), 90.0));
        assert!(tol.approx_eq_f64(signed_angle_about(Vec3::X, Vec3::Z, Vec3::Y), -90.0));
        assert!(tol.approx_eq_f64(signed_angle_about(Vec3::X, -Vec3::X, Vec3::Y), 180.0));
        assert!(tol.approx_eq_f64(signed_angle_about(Vec3::X, Vec3::ZERO, Vec3::Y), 0.0));
    }

    #[test]
    fn test_signed_angle_matches_rotation() {
        let tol = Tolerance::LOOSE;
        let axis = Vec3::new(0.2, 1.0, -0.4).normalized().expect("axis");
        let from = orthogonal_unit_vector(axis);

        for degrees in [15.0, 90.0, 179.0] {
            let to = Quat::from_axis_angle(axis, degrees).rotate_vec(from);
            assert!(tol.approx_eq_f64(signed_angle_about(from, to, axis), degrees));
        }
    }

    #[test]
    fn test_orthogonal_unit_vector() {
        let tol = Tolerance::DEFAULT;
        for v in [Vec3::X, Vec3::Y, Vec3::Z, Vec3::new(0.3, -2.0, 0.7)] {
            let ortho = orthogonal_unit_vector(v);
            assert!(tol.approx_zero_f64(ortho.dot(v)));
            assert!(tol.approx_eq_f64(ortho.length(), 1.0));
        }
        assert_eq!(orthogonal_unit_vector(Vec3::ZERO), Vec3::X);
    }

    #[test]
    fn test_tolerance_constants() {
        assert!(Tolerance::ZERO_LENGTH.eps < Tolerance::DEFAULT.eps);
        assert!(Tolerance::LOOSE.eps > Tolerance::DEFAULT.eps);
    }

    #[test]
    fn test_tolerance_quat_double_cover() {
        let tol = Tolerance::DEFAULT;
        let q = Quat::from_axis_angle(Vec3::Y, 135.0);
        let negated = Quat::new(-q.x, -q.y, -q.z, -q.w);

        assert!(tol.approx_eq_quat(q, negated));
        assert!(!tol.approx_eq_quat(q, Quat::IDENTITY));
    }
}
