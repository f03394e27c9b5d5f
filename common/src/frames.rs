//! Animation-frame request registry.
//!
//! Models the request/cancel discipline of animation-frame callbacks inside a
//! cooperative loop:
//!
//! 1. A component calls [`FrameScheduler::request`] and keeps the returned
//!    [`FrameRequest`].
//! 2. Once per frame the owner calls [`FrameScheduler::take_due`], which drains
//!    every pending request. Each request fires at most once.
//! 3. A component that wants to keep animating requests again from inside its
//!    callback. A component going away calls [`FrameScheduler::cancel`] with the
//!    handle it holds.
//!
//! A cancelled request never fires, so a callback cannot run against state its
//! owner already released.
//!
//! # Capacity
//!
//! Each [`FrameCallback`] kind holds at most one pending request; requesting a
//! kind that is already pending returns the existing handle. The fixed-size
//! queue therefore never overflows.

use heapless::Vec;
use log::trace;

/// Maximum simultaneously pending requests (one per callback kind).
pub const MAX_PENDING_FRAMES: usize = 2;

/// Which component a frame callback belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FrameCallback {
    /// Capability probe sampling.
    CapabilityProbe,
    /// Atmosphere particle step.
    Atmosphere,
}

/// Handle for one pending frame request.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FrameRequest(u32);

/// Frame callbacks that fired this frame.
pub type DueFrames = Vec<(FrameRequest, FrameCallback), MAX_PENDING_FRAMES>;

/// Pending frame requests.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u32,
    pending: DueFrames,
}

impl FrameScheduler {
    /// Create an empty scheduler.
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Ask for `callback` to run on the next frame.
    pub fn request(&mut self, callback: FrameCallback) -> FrameRequest {
        if let Some((existing, _)) = self.pending.iter().find(|(_, cb)| *cb == callback) {
            return *existing;
        }

        let request = FrameRequest(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        // One slot per callback kind, so this cannot overflow
        self.pending.push((request, callback)).ok();
        trace!("frame requested: {callback:?} #{}", request.0);
        request
    }

    /// Cancel a pending request. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, request: FrameRequest) -> bool {
        match self.pending.iter().position(|(r, _)| *r == request) {
            Some(idx) => {
                let (_, callback) = self.pending.remove(idx);
                trace!("frame cancelled: {callback:?} #{}", request.0);
                true
            }
            None => false,
        }
    }

    /// Drain every pending request, in request order.
    pub fn take_due(&mut self) -> DueFrames { core::mem::take(&mut self.pending) }

    /// Number of pending requests.
    #[inline]
    pub fn pending(&self) -> usize { self.pending.len() }

    /// Whether `request` is still waiting to fire.
    pub fn is_pending(&self, request: FrameRequest) -> bool { self.pending.iter().any(|(r, _)| *r == request) }

    /// Whether any request for `callback` is waiting to fire.
    pub fn is_scheduled(&self, callback: FrameCallback) -> bool {
        self.pending.iter().any(|(_, cb)| *cb == callback)
    }
}
