//! Scroll-lock bookkeeping for the full-screen overlay.
//!
//! The host document's scroll position and body styling are a process-wide
//! singleton, so lock/unlock must be idempotent: a second viewer opening
//! while one is already up must not re-capture (and later clobber) the
//! saved offset, and closing twice must not restore twice. This module
//! holds the pure state machine; applying the lock to the real DOM is the
//! UI layer's job.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// Idempotent lock state over the document's single scroll position.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollLockState {
    locked: bool,
    saved_offset: f64,
}

impl ScrollLockState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock, capturing the scroll offset to restore later.
    ///
    /// Returns `true` if this call actually acquired the lock (the host
    /// should fix the body and hide chrome). A nested call while already
    /// locked is a no-op returning `false`; the first capture wins.
    pub fn lock(&mut self, current_offset: f64) -> bool {
        if self.locked {
            return false;
        }
        self.locked = true;
        self.saved_offset = current_offset;
        true
    }

    /// Release the lock.
    ///
    /// Returns the offset to restore when this call actually released a
    /// held lock, `None` when not locked. Restoration must be exact: the
    /// value handed back is bit-for-bit the one captured by [`Self::lock`].
    pub fn unlock(&mut self) -> Option<f64> {
        if !self.locked {
            return None;
        }
        self.locked = false;
        Some(self.saved_offset)
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The offset captured at lock time. Meaningful only while locked.
    #[must_use]
    pub fn saved_offset(&self) -> f64 {
        self.saved_offset
    }
}
