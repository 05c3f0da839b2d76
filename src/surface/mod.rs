//! Bounded parametric snap surfaces.
//!
//! A snap surface is the shape a held object is allowed to occupy around a
//! grabbable: a bounded region with a position and an orientation at every
//! valid point. The surface owns nothing but its serializable payload; the
//! grip point and relative-to frames it measures against belong to the host
//! scene and are consulted through a [`FrameRegistry`](crate::frame::FrameRegistry).

mod cylinder;
mod data;

pub use cylinder::CylinderSurface;
pub use data::{
    CylinderSurfaceData, SURFACE_DATA_VERSION, SphereSurfaceData, SurfaceData, SurfaceDataError,
    SurfaceKind, SurfaceRecord,
};

use crate::frame::{FrameId, FrameRegistry};
use crate::geom::{Point3, Pose, Quat};

/// Contract shared by every bounded snap surface variant.
///
/// The geometry queries are pure functions of the surface's payload, the
/// registry state, and their arguments. They never fail: degenerate
/// geometry and missing frames resolve to the documented fallbacks of the
/// implementing variant, so callers always receive finite values. Only
/// [`set_data`](Self::set_data) can reject, and rejection leaves the
/// previous payload untouched.
pub trait SnapSurface {
    /// Discriminator of this surface's variant.
    fn kind(&self) -> SurfaceKind;

    /// Snapshot of the current payload.
    fn data(&self) -> SurfaceData;

    /// Replace the payload. A payload of a different variant is rejected:
    /// the error is logged, returned, and nothing mutates.
    fn set_data(&mut self, data: SurfaceData) -> Result<(), SurfaceDataError>;

    /// Grip point handle, if attached.
    fn grip(&self) -> Option<FrameId>;

    fn set_grip(&mut self, grip: Option<FrameId>);

    /// Relative-to frame handle, if attached. Poses flowing through
    /// [`inverted_pose`](Self::inverted_pose) are expressed in this frame;
    /// absent a handle the frame is the world.
    fn relative_to(&self) -> Option<FrameId>;

    fn set_relative_to(&mut self, relative_to: Option<FrameId>);

    /// Nearest point to `target` inside the surface's positional and
    /// angular bounds.
    fn nearest_point_in_surface(&self, frames: &FrameRegistry, target: Point3) -> Point3;

    /// Rotation mapping the grip point's recorded radial direction onto the
    /// radial direction of `surface_point`. Reorients a held object
    /// consistently as its contact point slides along the surface.
    fn rotation_offset(&self, frames: &FrameRegistry, surface_point: Point3) -> Quat;

    /// Re-place a live `user_pose` onto the surface, using the authored
    /// `snap_pose` as rotational baseline. The result preserves the user's
    /// approach angle while staying inside the surface bounds.
    fn similar_place_at_volume(
        &self,
        frames: &FrameRegistry,
        user_pose: Pose,
        snap_pose: Pose,
    ) -> Pose;

    /// Mirror a pose by rotating its orientation 180° about the surface's
    /// start radial, for symmetric placements on rotationally symmetric
    /// volumes. The pose is expressed in the relative-to frame.
    fn inverted_pose(&self, frames: &FrameRegistry, pose: Pose) -> Pose;
}

#[cfg(test)]
mod tests;
