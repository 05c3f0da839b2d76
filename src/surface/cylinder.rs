//! The cylindrical-arc snap surface.
//!
//! The surface is the wall of a cylinder segment: an axis from a start point
//! to an end point, a radius taken from wherever the grip point sits, and a
//! sweep of `angle` degrees starting at the grip point's radial direction.
//! Both axis endpoints are stored in the grip point's local frame, so the
//! whole surface rides along with the grabbable it is authored on.

use crate::frame::{FrameId, FrameRegistry};
use crate::geom::{
    Point3, Pose, Quat, Tolerance, Vec3, orthogonal_unit_vector, signed_angle_about, wrap_degrees,
};

use super::SnapSurface;
use super::data::{CylinderSurfaceData, SurfaceData, SurfaceDataError, SurfaceKind};

/// Bounded circular-arc sweep between two axial endpoints.
///
/// Degenerate situations never error and never produce NaN; they resolve to
/// fixed fallbacks instead:
/// - no grip point: `radius` is 0 and `start_angle_dir` is `+Z`;
/// - coincident endpoints: `direction` is the grip point's up axis (world
///   up without a grip) and `rotation` is the identity;
/// - grip point on the axis: `start_angle_dir` is a deterministic vector
///   orthogonal to `direction`.
#[derive(Debug, Clone, Default)]
pub struct CylinderSurface {
    data: CylinderSurfaceData,
    grip: Option<FrameId>,
    relative_to: Option<FrameId>,
}

impl CylinderSurface {
    #[must_use]
    pub fn new(data: CylinderSurfaceData) -> Self {
        Self {
            data: CylinderSurfaceData::new(data.start_point, data.end_point, data.angle),
            grip: None,
            relative_to: None,
        }
    }

    /// Surface with its frame handles already attached.
    #[must_use]
    pub fn with_frames(
        data: CylinderSurfaceData,
        grip: Option<FrameId>,
        relative_to: Option<FrameId>,
    ) -> Self {
        let mut surface = Self::new(data);
        surface.grip = grip;
        surface.relative_to = relative_to;
        surface
    }

    fn grip_pose(&self, frames: &FrameRegistry) -> Option<Pose> {
        self.grip.and_then(|id| frames.pose(id))
    }

    fn relative_pose(&self, frames: &FrameRegistry) -> Pose {
        self.relative_to
            .and_then(|id| frames.pose(id))
            .unwrap_or(Pose::IDENTITY)
    }

    /// Axis start in world space (grip-local without a grip frame).
    #[must_use]
    pub fn start_point(&self, frames: &FrameRegistry) -> Point3 {
        let local = Point3::from_array(self.data.start_point);
        match self.grip_pose(frames) {
            Some(grip) => grip.transform_point(local),
            None => local,
        }
    }

    /// Axis end in world space (grip-local without a grip frame).
    #[must_use]
    pub fn end_point(&self, frames: &FrameRegistry) -> Point3 {
        let local = Point3::from_array(self.data.end_point);
        match self.grip_pose(frames) {
            Some(grip) => grip.transform_point(local),
            None => local,
        }
    }

    /// Move the axis start to a world-space position.
    pub fn set_start_point(&mut self, frames: &FrameRegistry, world: Point3) {
        self.data.start_point = self.to_local(frames, world).to_array();
    }

    /// Move the axis end to a world-space position.
    pub fn set_end_point(&mut self, frames: &FrameRegistry, world: Point3) {
        self.data.end_point = self.to_local(frames, world).to_array();
    }

    fn to_local(&self, frames: &FrameRegistry, world: Point3) -> Point3 {
        match self.grip_pose(frames) {
            Some(grip) => grip.inverse_transform_point(world),
            None => world,
        }
    }

    /// Swept arc in degrees, always in `[0, 360)`.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.data.angle
    }

    /// Set the swept arc; the value is wrapped into `[0, 360)`.
    pub fn set_angle(&mut self, degrees: f64) {
        self.data.angle = wrap_degrees(degrees);
    }

    /// Distance from the grip point to the axis. 0 without a grip point.
    #[must_use]
    pub fn radius(&self, frames: &FrameRegistry) -> f64 {
        let Some(grip) = self.grip_pose(frames) else {
            return 0.0;
        };
        let start = self.start_point(frames);
        let projected = start + (grip.position - start).project_onto(self.direction(frames));
        projected.distance_to(grip.position)
    }

    /// Axis length in world space.
    #[must_use]
    pub fn height(&self, frames: &FrameRegistry) -> f64 {
        self.start_point(frames).distance_to(self.end_point(frames))
    }

    /// Unit axis from start to end. Coincident endpoints fall back to the
    /// grip point's up axis, or world up without a grip.
    #[must_use]
    pub fn direction(&self, frames: &FrameRegistry) -> Vec3 {
        let axis = self.end_point(frames) - self.start_point(frames);
        match axis.normalized() {
            Some(direction) => direction,
            None => self.grip_pose(frames).map_or(Vec3::Y, Pose::up),
        }
    }

    /// Unit radial direction where the sweep begins: the grip point
    /// projected onto the plane orthogonal to the axis. `+Z` without a grip
    /// point; a deterministic orthogonal of `direction` when the grip point
    /// sits exactly on the axis.
    #[must_use]
    pub fn start_angle_dir(&self, frames: &FrameRegistry) -> Vec3 {
        let Some(grip) = self.grip_pose(frames) else {
            return Vec3::Z;
        };
        let direction = self.direction(frames);
        let radial = (grip.position - self.start_point(frames)).project_onto_plane(direction);
        radial
            .normalized()
            .unwrap_or_else(|| orthogonal_unit_vector(direction))
    }

    /// Unit radial direction where the sweep ends: `start_angle_dir`
    /// rotated by `angle` about the axis.
    #[must_use]
    pub fn end_angle_dir(&self, frames: &FrameRegistry) -> Vec3 {
        Quat::from_axis_angle(self.direction(frames), self.angle()) * self.start_angle_dir(frames)
    }

    /// Orientation basis of the surface: forward along `start_angle_dir`,
    /// up along the axis. Identity while the stored endpoints coincide.
    #[must_use]
    pub fn rotation(&self, frames: &FrameRegistry) -> Quat {
        let start = Point3::from_array(self.data.start_point);
        let end = Point3::from_array(self.data.end_point);
        if Tolerance::LOOSE.approx_eq_point3(start, end) {
            return Quat::IDENTITY;
        }
        Quat::look_rotation(self.start_angle_dir(frames), self.direction(frames))
    }

    /// Project `point` onto the axis and clamp the result between the start
    /// and end caps. This is the altitude half of the nearest-point query,
    /// exposed for callers that only need the axial component.
    #[must_use]
    pub fn point_altitude(&self, frames: &FrameRegistry, point: Point3) -> Point3 {
        let start = self.start_point(frames);
        let direction = self.direction(frames);
        let height = self.height(frames);

        let mut along = (point - start).project_onto(direction);
        if along.length() > height {
            along = along.normalized_or_zero() * height;
        }
        if along.dot(direction) < 0.0 {
            along = Vec3::ZERO;
        }
        start + along
    }
}

impl SnapSurface for CylinderSurface {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Cylinder
    }

    fn data(&self) -> SurfaceData {
        SurfaceData::Cylinder(self.data)
    }

    fn set_data(&mut self, data: SurfaceData) -> Result<(), SurfaceDataError> {
        match data {
            SurfaceData::Cylinder(data) => {
                self.data = CylinderSurfaceData::new(data.start_point, data.end_point, data.angle);
                Ok(())
            }
            other => {
                let err = SurfaceDataError::VariantMismatch {
                    expected: SurfaceKind::Cylinder,
                    found: other.kind(),
                };
                log::error!("surface data rejected: {}", err);
                Err(err)
            }
        }
    }

    fn grip(&self) -> Option<FrameId> {
        self.grip
    }

    fn set_grip(&mut self, grip: Option<FrameId>) {
        self.grip = grip;
    }

    fn relative_to(&self) -> Option<FrameId> {
        self.relative_to
    }

    fn set_relative_to(&mut self, relative_to: Option<FrameId>) {
        self.relative_to = relative_to;
    }

    fn nearest_point_in_surface(&self, frames: &FrameRegistry, target: Point3) -> Point3 {
        let direction = self.direction(frames);
        let projected_point = self.point_altitude(frames, target);

        // radial direction of the target; zero when the target is on the axis
        let mut target_direction = (target - projected_point)
            .project_onto_plane(direction)
            .normalized_or_zero();

        let desired_angle = wrap_degrees(signed_angle_about(
            self.start_angle_dir(frames),
            target_direction,
            direction,
        ));
        let angle = self.angle();
        if desired_angle > angle {
            // outside the sweep: clamp to the angularly closer boundary,
            // the end boundary on an exact tie
            let past_end = desired_angle - angle;
            let wrap_to_start = 360.0 - desired_angle;
            target_direction = if past_end <= wrap_to_start {
                self.end_angle_dir(frames)
            } else {
                self.start_angle_dir(frames)
            };
        }

        projected_point + target_direction * self.radius(frames)
    }

    fn rotation_offset(&self, frames: &FrameRegistry, surface_point: Point3) -> Quat {
        let Some(grip) = self.grip_pose(frames) else {
            return Quat::IDENTITY;
        };
        let start = self.start_point(frames);
        let direction = self.direction(frames);

        let recorded_direction = (grip.position - start).project_onto_plane(direction);
        let desired_direction = (surface_point - start).project_onto_plane(direction);
        Quat::from_rotation_arc(recorded_direction, desired_direction)
    }

    fn similar_place_at_volume(
        &self,
        frames: &FrameRegistry,
        user_pose: Pose,
        snap_pose: Pose,
    ) -> Pose {
        let rot_dif = user_pose.rotation * snap_pose.rotation.inverse();
        let desired_direction = (rot_dif * self.rotation(frames)) * Vec3::Z;
        let projected_direction = desired_direction
            .project_onto_plane(self.direction(frames))
            .normalized_or_zero();

        let altitude_point = self.point_altitude(frames, user_pose.position);
        let candidate = altitude_point + projected_direction * self.radius(frames);
        let surface_point = self.nearest_point_in_surface(frames, candidate);
        let surface_rotation = self.rotation_offset(frames, surface_point) * snap_pose.rotation;

        Pose::new(surface_point, surface_rotation)
    }

    fn inverted_pose(&self, frames: &FrameRegistry, pose: Pose) -> Pose {
        let relative = self.relative_pose(frames);
        let global_rotation = relative.rotation * pose.rotation;
        let inverted = Quat::from_axis_angle(self.start_angle_dir(frames), 180.0) * global_rotation;
        Pose::new(pose.position, relative.rotation.inverse() * inverted)
    }
}
