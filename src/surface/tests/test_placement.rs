use super::super::*;
use crate::geom::{Tolerance, Vec3};

/// Axis from the world origin to `(0, 2, 0)`, radius 1, sweep starting at
/// the `+X` radial.
fn grip_cylinder(angle: f64) -> (FrameRegistry, CylinderSurface) {
    let mut frames = FrameRegistry::new();
    let grip = frames.insert("grip", Pose::from_position(Point3::new(1.0, 0.0, 0.0)));
    let data = CylinderSurfaceData::new([-1.0, 0.0, 0.0], [-1.0, 2.0, 0.0], angle);
    let surface = CylinderSurface::with_frames(data, Some(grip), None);
    (frames, surface)
}

#[test]
fn rotation_offset_turns_the_recorded_radial_onto_the_surface_point() {
    let (frames, surface) = grip_cylinder(90.0);

    // from the +X radial to the -Z radial is a quarter turn about +Y
    let offset = surface.rotation_offset(&frames, Point3::new(0.0, 1.0, -1.0));
    assert!(Tolerance::DEFAULT.approx_eq_vec3(offset * Vec3::X, -Vec3::Z));
    assert!(Tolerance::DEFAULT.approx_eq_quat(offset, Quat::from_axis_angle(Vec3::Y, 90.0)));
}

#[test]
fn rotation_offset_at_the_grip_radial_is_identity() {
    let (frames, surface) = grip_cylinder(90.0);

    let offset = surface.rotation_offset(&frames, Point3::new(1.0, 0.0, 0.0));
    assert!(Tolerance::DEFAULT.approx_eq_quat(offset, Quat::IDENTITY));
}

#[test]
fn similar_place_keeps_an_unrotated_user_at_the_grip_radial() {
    let (frames, surface) = grip_cylinder(180.0);

    let snap_pose = Pose::new(Point3::new(1.0, 0.0, 0.0), Quat::IDENTITY);
    let user_pose = Pose::from_position(Point3::new(0.4, 1.0, -2.0));

    let placed = surface.similar_place_at_volume(&frames, user_pose, snap_pose);
    // same radial as the grip point, at the user's altitude
    assert!(Tolerance::DEFAULT.approx_eq_point3(placed.position, Point3::new(1.0, 1.0, 0.0)));
    assert!(Tolerance::DEFAULT.approx_eq_quat(placed.rotation, Quat::IDENTITY));
}

#[test]
fn similar_place_follows_the_user_rotation_around_the_axis() {
    let (frames, surface) = grip_cylinder(180.0);

    let snap_pose = Pose::new(Point3::new(1.0, 0.0, 0.0), Quat::IDENTITY);
    let quarter = Quat::from_axis_angle(Vec3::Y, 90.0);
    let user_pose = Pose::new(Point3::new(0.4, 1.0, -2.0), quarter);

    let placed = surface.similar_place_at_volume(&frames, user_pose, snap_pose);
    // a quarter turn of the wrist walks the hand a quarter of the way around
    assert!(Tolerance::DEFAULT.approx_eq_point3(placed.position, Point3::new(0.0, 1.0, -1.0)));
    assert!(Tolerance::DEFAULT.approx_eq_quat(placed.rotation, quarter));
}

#[test]
fn similar_place_carries_the_authored_snap_rotation() {
    let (frames, surface) = grip_cylinder(180.0);

    // authored hand pose is itself rotated; a user holding the same
    // rotation difference lands back at the authored radial
    let quarter = Quat::from_axis_angle(Vec3::Y, 90.0);
    let snap_pose = Pose::new(Point3::new(1.0, 0.0, 0.0), quarter);
    let user_pose = Pose::new(Point3::new(0.4, 1.0, -2.0), quarter);

    let placed = surface.similar_place_at_volume(&frames, user_pose, snap_pose);
    assert!(Tolerance::DEFAULT.approx_eq_point3(placed.position, Point3::new(1.0, 1.0, 0.0)));
    assert!(Tolerance::DEFAULT.approx_eq_quat(placed.rotation, quarter));
}

#[test]
fn similar_place_respects_the_sweep_bounds() {
    // a narrow 90 degree sweep: a user reaching for the far side is
    // clamped onto a boundary radial instead of leaving the surface
    let (frames, surface) = grip_cylinder(90.0);

    let snap_pose = Pose::new(Point3::new(1.0, 0.0, 0.0), Quat::IDENTITY);
    let half = Quat::from_axis_angle(Vec3::Y, 170.0);
    let user_pose = Pose::new(Point3::new(0.0, 0.5, 0.0), half);

    let placed = surface.similar_place_at_volume(&frames, user_pose, snap_pose);
    // 170 degrees is 80 past the end boundary but 190 from the start
    assert!(Tolerance::DEFAULT.approx_eq_point3(placed.position, Point3::new(0.0, 0.5, -1.0)));
}

#[test]
fn inverted_pose_mirrors_about_the_start_radial() {
    let (frames, surface) = grip_cylinder(90.0);

    let pose = Pose::new(Point3::new(0.3, 0.5, 0.2), Quat::from_axis_angle(Vec3::Y, 30.0));
    let inverted = surface.inverted_pose(&frames, pose);

    // position passes through untouched
    assert_eq!(inverted.position, pose.position);
    let expected = Quat::from_axis_angle(Vec3::X, 180.0) * pose.rotation;
    assert!(Tolerance::DEFAULT.approx_eq_quat(inverted.rotation, expected));
}

#[test]
fn inverting_twice_restores_the_pose() {
    let (frames, surface) = grip_cylinder(90.0);

    let pose = Pose::new(
        Point3::new(0.3, 0.5, 0.2),
        Quat::from_axis_angle(Vec3::new(1.0, 2.0, -0.5), 72.0),
    );
    let once = surface.inverted_pose(&frames, pose);
    let twice = surface.inverted_pose(&frames, once);

    assert_eq!(twice.position, pose.position);
    // the two half turns cancel up to quaternion sign
    assert!(Tolerance::DEFAULT.approx_eq_quat(twice.rotation, pose.rotation));
}

#[test]
fn inverted_pose_conjugates_through_the_relative_frame() {
    let mut frames = FrameRegistry::new();
    let grip = frames.insert("grip", Pose::from_position(Point3::new(1.0, 0.0, 0.0)));
    let relative = frames.insert(
        "held-object",
        Pose::new(Point3::new(5.0, 0.0, 0.0), Quat::from_axis_angle(Vec3::Y, 90.0)),
    );
    let data = CylinderSurfaceData::new([-1.0, 0.0, 0.0], [-1.0, 2.0, 0.0], 90.0);
    let surface = CylinderSurface::with_frames(data, Some(grip), Some(relative));

    let inverted = surface.inverted_pose(&frames, Pose::IDENTITY);

    // the world-space half turn about +X reads as a half turn about +Z
    // from inside a frame that is itself yawed a quarter turn
    let expected = Quat::from_axis_angle(Vec3::Z, 180.0);
    assert!(Tolerance::DEFAULT.approx_eq_quat(inverted.rotation, expected));
}
