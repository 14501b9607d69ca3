use std::collections::VecDeque;

/// Identifies a frame request made through a [`FramePacer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameHandle(pub u64);

/// The host's frame-pacing primitive (e.g. `requestAnimationFrame`, a vsync callback, a timer).
///
/// `request_frame` asks the host to call back once on its next display refresh. The host then
/// calls the owner's `on_frame(handle)` with the handle returned here. `cancel_frame` revokes a
/// request that has not fired yet.
pub trait FramePacer {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

impl<P: FramePacer + ?Sized> FramePacer for &mut P {
    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle);
    }
}

/// Keeps at most one outstanding frame request against a [`FramePacer`].
///
/// Subscribing while a request is pending cancels it first, so re-entrant triggers can never
/// stack up parallel animation loops.
#[derive(Clone, Debug, Default)]
pub struct FrameScheduler<P> {
    pacer: P,
    pending: Option<FrameHandle>,
}

impl<P: FramePacer> FrameScheduler<P> {
    pub fn new(pacer: P) -> Self {
        Self {
            pacer,
            pending: None,
        }
    }

    /// Requests the next frame, cancelling any request still pending.
    pub fn subscribe(&mut self) -> FrameHandle {
        self.unsubscribe();
        let handle = self.pacer.request_frame();
        strace!(handle = handle.0, "FrameScheduler::subscribe");
        self.pending = Some(handle);
        handle
    }

    /// Cancels the pending request, if any.
    pub fn unsubscribe(&mut self) {
        if let Some(handle) = self.pending.take() {
            strace!(handle = handle.0, "FrameScheduler::unsubscribe");
            self.pacer.cancel_frame(handle);
        }
    }

    /// Consumes the pending request when `handle` matches it.
    ///
    /// Returns `false` for stale handles (cancelled or superseded requests); the caller must
    /// not run a frame for those.
    pub fn fire(&mut self, handle: FrameHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            strace!(
                handle = handle.0,
                pending = ?self.pending,
                "FrameScheduler::fire: stale frame"
            );
            false
        }
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn pacer_mut(&mut self) -> &mut P {
        &mut self.pacer
    }

    pub fn into_pacer(mut self) -> P {
        self.unsubscribe();
        self.pacer
    }
}

/// A headless [`FramePacer`] that queues requests until the host pops them.
///
/// Useful for tests, simulations and adapters whose frame loop is a plain timer:
/// ```
/// use smoothscroll_core::{FramePacer, ManualPacer};
///
/// let mut pacer = ManualPacer::new();
/// let a = pacer.request_frame();
/// let b = pacer.request_frame();
/// pacer.cancel_frame(a);
/// assert_eq!(pacer.next_frame(), Some(b));
/// assert_eq!(pacer.next_frame(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualPacer {
    next_id: u64,
    queue: VecDeque<FrameHandle>,
    requested: u64,
    cancelled: u64,
}

impl ManualPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pops the oldest outstanding request.
    pub fn next_frame(&mut self) -> Option<FrameHandle> {
        self.queue.pop_front()
    }

    /// Number of requests that are neither fired nor cancelled.
    pub fn outstanding(&self) -> usize {
        self.queue.len()
    }

    /// Total number of requests ever made.
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Total number of requests cancelled before firing.
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FramePacer for ManualPacer {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id = self.next_id.wrapping_add(1);
        self.requested = self.requested.saturating_add(1);
        let handle = FrameHandle(self.next_id);
        self.queue.push_back(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.queue.len();
        self.queue.retain(|h| *h != handle);
        if self.queue.len() != before {
            self.cancelled = self.cancelled.saturating_add(1);
        }
    }
}
