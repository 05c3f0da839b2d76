#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Bounded parametric surfaces that guide grab poses onto objects.
//!
//! The crate models a partial cylinder shell ([`CylinderSurface`]) anchored
//! to tracked rig frames ([`FrameRegistry`]), with queries that project a
//! pose onto the shell, carry its orientation along, and mirror it for the
//! opposite grip. Hosts publish frames, tick a [`RigBinding`] until the
//! frames resolve, and run the [`SnapSurface`] queries per interaction.

pub mod frame;
pub mod geom;
pub mod rig;
pub mod surface;

pub use frame::{FrameId, FrameRegistry};
pub use geom::{Point3, Pose, Quat, Tolerance, Vec3};
pub use rig::{BindingState, RigBinding};
pub use surface::{
    CylinderSurface, CylinderSurfaceData, SnapSurface, SurfaceData, SurfaceDataError, SurfaceKind,
    SurfaceRecord,
};
