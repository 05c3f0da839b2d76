//! Geometric primitives shared by every surface.
//!
//! Double-precision vectors, points, unit quaternions and rigid poses, plus
//! the small set of angle helpers the placement math needs. All public angle
//! parameters are degrees.

mod core;

pub use self::core::{
    Point3, Pose, Quat, Tolerance, Vec3, orthogonal_unit_vector, signed_angle_about,
    wrap_degrees,
};
