//! Serializable surface payloads.
//!
//! A payload is the only durable state a surface carries: a plain field set
//! per variant, tagged with its variant discriminator so a round-trip can
//! never silently load one variant's fields into another. Everything else on
//! a surface is derived.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geom::wrap_degrees;

/// Version written into freshly authored [`SurfaceRecord`]s.
pub const SURFACE_DATA_VERSION: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// SurfaceKind
// ─────────────────────────────────────────────────────────────────────────────

/// Enumerated discriminator for the surface variants.
///
/// Only the cylinder has geometry behind it; the sphere exists as payload so
/// mismatched assignments are representable (and rejectable) at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    Cylinder,
    Sphere,
}

impl SurfaceKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cylinder => "cylinder",
            Self::Sphere => "sphere",
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payloads
// ─────────────────────────────────────────────────────────────────────────────

/// Geometry payload of a cylindrical-arc surface.
///
/// `start_point` and `end_point` live in the grip point's local frame; the
/// world-space axis only materializes once a grip frame is attached. `angle`
/// is the swept arc in degrees and is kept in `[0, 360)` by every
/// constructor and setter; a raw out-of-range value in a hand-edited record
/// is normalized when a surface ingests it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CylinderSurfaceData {
    pub start_point: [f64; 3],
    pub end_point: [f64; 3],
    pub angle: f64,
}

impl CylinderSurfaceData {
    #[must_use]
    pub fn new(start_point: [f64; 3], end_point: [f64; 3], angle: f64) -> Self {
        Self {
            start_point,
            end_point,
            angle: wrap_degrees(angle),
        }
    }
}

/// Geometry payload of a spherical surface. Payload only; no sphere
/// geometry is implemented.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SphereSurfaceData {
    pub center_point: [f64; 3],
}

// ─────────────────────────────────────────────────────────────────────────────
// SurfaceData
// ─────────────────────────────────────────────────────────────────────────────

/// Variant-tagged union over the surface payloads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SurfaceData {
    Cylinder(CylinderSurfaceData),
    Sphere(SphereSurfaceData),
}

impl SurfaceData {
    #[must_use]
    pub const fn kind(&self) -> SurfaceKind {
        match self {
            Self::Cylinder(_) => SurfaceKind::Cylinder,
            Self::Sphere(_) => SurfaceKind::Sphere,
        }
    }
}

impl From<CylinderSurfaceData> for SurfaceData {
    fn from(data: CylinderSurfaceData) -> Self {
        Self::Cylinder(data)
    }
}

impl From<SphereSurfaceData> for SurfaceData {
    fn from(data: SphereSurfaceData) -> Self {
        Self::Sphere(data)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SurfaceRecord
// ─────────────────────────────────────────────────────────────────────────────

/// Durable envelope around a payload: the payload plus a format version.
///
/// Records missing the version field (older files) deserialize with the
/// current version. Readers and writers of the record live with the host;
/// this crate only defines the shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRecord {
    #[serde(default = "current_version")]
    pub version: u32,
    #[serde(flatten)]
    pub data: SurfaceData,
}

impl SurfaceRecord {
    #[must_use]
    pub fn new(data: SurfaceData) -> Self {
        Self {
            version: SURFACE_DATA_VERSION,
            data,
        }
    }
}

fn current_version() -> u32 {
    SURFACE_DATA_VERSION
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Rejection raised by a surface's typed data setter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceDataError {
    #[error("expected {expected} surface data, got {found}")]
    VariantMismatch {
        expected: SurfaceKind,
        found: SurfaceKind,
    },
}
