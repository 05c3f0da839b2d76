//! Externally owned reference frames.
//!
//! Surfaces never own the transforms they measure against (grip points,
//! relative-to frames); the host scene owns them. `FrameRegistry` is the
//! stand-in for that scene: a flat store of labeled rigid poses addressed by
//! copyable `FrameId` handles. Handles are weak by construction: a removed
//! frame leaves its id dangling, and every lookup on a dangling id resolves
//! to `None`, which consumers treat exactly like an absent frame.

use crate::geom::Pose;

/// Identifier for a frame inside a [`FrameRegistry`].
///
/// Ids are handed out by [`FrameRegistry::insert`] and are never reused,
/// so a stale id can only ever miss, not alias a newer frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FrameId(usize);

impl FrameId {
    /// Slot index, for diagnostics only.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Frame {
    label: String,
    pose: Pose,
}

/// Caller-owned registry of labeled rigid poses.
#[derive(Debug, Clone, Default)]
pub struct FrameRegistry {
    slots: Vec<Option<Frame>>,
}

impl FrameRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame and return its handle.
    pub fn insert(&mut self, label: impl Into<String>, pose: Pose) -> FrameId {
        let id = FrameId(self.slots.len());
        self.slots.push(Some(Frame {
            label: label.into(),
            pose,
        }));
        id
    }

    /// Remove a frame, returning its last pose. The slot is retired, not
    /// recycled; the id dangles from here on.
    pub fn remove(&mut self, id: FrameId) -> Option<Pose> {
        let frame = self.slots.get_mut(id.0)?.take()?;
        log::debug!("frame '{}' removed from registry", frame.label);
        Some(frame.pose)
    }

    /// Current pose of a frame, or `None` for an absent/dangling id.
    #[must_use]
    pub fn pose(&self, id: FrameId) -> Option<Pose> {
        self.slots.get(id.0)?.as_ref().map(|frame| frame.pose)
    }

    /// Overwrite a frame's pose. Returns `false` when the id dangles.
    pub fn set_pose(&mut self, id: FrameId, pose: Pose) -> bool {
        match self.slots.get_mut(id.0).and_then(Option::as_mut) {
            Some(frame) => {
                frame.pose = pose;
                true
            }
            None => false,
        }
    }

    /// Label of a frame, or `None` for an absent/dangling id.
    #[must_use]
    pub fn label(&self, id: FrameId) -> Option<&str> {
        self.slots.get(id.0)?.as_ref().map(|frame| frame.label.as_str())
    }

    /// First live frame carrying `label`.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<FrameId> {
        self.slots.iter().enumerate().find_map(|(index, slot)| {
            slot.as_ref()
                .filter(|frame| frame.label == label)
                .map(|_| FrameId(index))
        })
    }

    #[must_use]
    pub fn contains(&self, id: FrameId) -> bool {
        self.pose(id).is_some()
    }

    /// Number of live frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
