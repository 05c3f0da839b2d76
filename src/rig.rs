//! Deferred binding of surfaces to rig frames.
//!
//! Hosts publish hand and controller frames asynchronously, so the frames a
//! surface wants to follow may not exist yet when the surface is configured.
//! A [`RigBinding`] retries its label lookups once per [`tick`](RigBinding::tick)
//! until every required frame resolves, then hands the captured ids to a
//! surface via [`bind`](RigBinding::bind). If the attempt budget runs out the
//! binding reports the missing frames and goes inactive; the surface keeps
//! its world-space fallbacks and nothing panics.

use crate::frame::{FrameId, FrameRegistry};
use crate::surface::SnapSurface;

// ────────────────────────────────────────────────────────────────────────────
// Binding state
// ────────────────────────────────────────────────────────────────────────────

/// Lifecycle of a [`RigBinding`].
///
/// `Ready` and `Failed` are terminal; once reached, further ticks return the
/// same state without touching the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BindingState {
    /// Still waiting for the required frames to appear.
    Uninitialized,
    /// All required frames resolved; handles are captured.
    Ready,
    /// The attempt budget ran out before the frames appeared.
    Failed,
}

// ────────────────────────────────────────────────────────────────────────────
// Rig binding
// ────────────────────────────────────────────────────────────────────────────

/// Retry loop that resolves frame labels into [`FrameId`] handles.
#[derive(Debug, Clone)]
pub struct RigBinding {
    grip_label: String,
    relative_label: Option<String>,
    max_attempts: u32,
    attempts: u32,
    state: BindingState,
    grip: Option<FrameId>,
    relative_to: Option<FrameId>,
}

impl RigBinding {
    /// Default number of ticks a binding waits before giving up.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 60;

    /// Creates a binding that waits for `grip_label` and, when given,
    /// `relative_label` to show up in a registry.
    #[must_use]
    pub fn new(grip_label: impl Into<String>, relative_label: Option<&str>) -> Self {
        Self {
            grip_label: grip_label.into(),
            relative_label: relative_label.map(str::to_owned),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            attempts: 0,
            state: BindingState::Uninitialized,
            grip: None,
            relative_to: None,
        }
    }

    /// Overrides the attempt budget.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Runs one resolution attempt.
    ///
    /// While `Uninitialized`, looks up the configured labels in `frames`.
    /// When every required label resolves the handles are captured and the
    /// binding becomes `Ready`. When the attempt budget is exhausted first,
    /// each still-missing frame is reported and the binding becomes `Failed`.
    pub fn tick(&mut self, frames: &FrameRegistry) -> BindingState {
        if self.state != BindingState::Uninitialized {
            return self.state;
        }

        self.attempts += 1;

        let grip = frames.find(&self.grip_label);
        // None = not requested, Some(None) = requested but not published yet
        let relative_to = self.relative_label.as_deref().map(|label| frames.find(label));

        let relative_missing = matches!(relative_to, Some(None));
        if grip.is_some() && !relative_missing {
            self.grip = grip;
            self.relative_to = relative_to.flatten();
            self.state = BindingState::Ready;
            log::debug!("rig binding resolved after {} ticks", self.attempts);
            return self.state;
        }

        if self.attempts >= self.max_attempts {
            if grip.is_none() {
                log::error!("rig frame never appeared: {}", self.grip_label);
            }
            if relative_missing {
                if let Some(label) = &self.relative_label {
                    log::error!("rig frame never appeared: {}", label);
                }
            }
            self.state = BindingState::Failed;
        }

        self.state
    }

    /// Pushes the captured handles into `surface`. No-op unless `Ready`.
    pub fn bind(&self, surface: &mut dyn SnapSurface) {
        if self.state != BindingState::Ready {
            return;
        }
        surface.set_grip(self.grip);
        surface.set_relative_to(self.relative_to);
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> BindingState {
        self.state
    }

    /// Captured grip handle, `None` until `Ready`.
    #[must_use]
    pub const fn grip(&self) -> Option<FrameId> {
        self.grip
    }

    /// Captured reference-frame handle, `None` until `Ready` or when no
    /// relative label was requested.
    #[must_use]
    pub const fn relative_to(&self) -> Option<FrameId> {
        self.relative_to
    }

    /// Number of resolution attempts made so far.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
