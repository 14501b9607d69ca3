use crate::frame::{frames_for_duration, progress};
use crate::{
    AnimationOutcome, Completion, CompletionResolver, Easing, FrameCounter, FrameHandle,
    FramePacer, FrameScheduler, LimitSlack, Limits, Listener, ListenerRegistry, ManualScroll,
    ScrollError, ScrollOptions, ScrollPhase, ScrollSnapshot, Surface, Tick, TouchTracker,
};

/// Velocity replay factor for momentum release: the last touch delta is treated as pixels per
/// frame and projected over one second of frames.
const MOMENTUM_FRAMES: f64 = 60.0;

#[derive(Debug)]
struct Animation {
    from: f64,
    max_frames: u32,
    easing: Easing,
    resolver: Option<CompletionResolver>,
}

/// A headless custom-scroll engine.
///
/// The engine owns the scroll state (offset, target, frame counter, touch samples) and turns
/// gestures into frame-by-frame animations:
/// - `on_wheel`, `on_touch_start`, `on_touch_move`, `on_touch_end` are the input handlers.
/// - `manual_scroll` animates to an absolute position and returns a [`Completion`].
/// - `on_frame(handle)` must be called by the host when a frame requested through the
///   [`FramePacer`] fires.
/// - `on_navigate` re-reads limit modifiers and (unless configured otherwise) returns to the
///   top.
///
/// Every applied offset is clamped to [`Limits`], written to the bound [`Surface`] and
/// broadcast to the listeners as `(scroll, max_scroll)`.
///
/// # Sign convention
///
/// Offsets are translations: `0` is the top and scrolling down makes them negative. A positive
/// wheel `delta_y` (scroll down) and an upward finger movement both decrease the offset.
/// `ManualScroll::to` and listener values are positive scroll distances (`scroll = -offset`).
///
/// Animations start with a synchronous first frame, so zero-duration animations are applied
/// before the triggering call returns.
#[derive(Debug)]
pub struct ScrollEngine<S, P> {
    options: ScrollOptions,
    surface: Option<S>,
    scheduler: FrameScheduler<P>,
    frame: FrameCounter,
    touches: TouchTracker,
    listeners: ListenerRegistry,
    slack: LimitSlack,
    offset: f64,
    target: f64,
    phase: ScrollPhase,
    animation: Option<Animation>,
}

impl<S: Surface, P: FramePacer> ScrollEngine<S, P> {
    /// Creates an engine without a surface. Every operation fails with
    /// [`ScrollError::Unbound`] until [`ScrollEngine::bind`] is called.
    pub fn new(options: ScrollOptions, pacer: P) -> Self {
        sdebug!(
            distance = options.distance,
            duration_ms = options.duration_ms,
            preserve = options.preserve_across_navigation,
            "ScrollEngine::new"
        );
        Self {
            options,
            surface: None,
            scheduler: FrameScheduler::new(pacer),
            frame: FrameCounter::new(),
            touches: TouchTracker::new(),
            listeners: ListenerRegistry::new(),
            slack: LimitSlack::default(),
            offset: 0.0,
            target: 0.0,
            phase: ScrollPhase::Idle,
            animation: None,
        }
    }

    /// Creates an engine and binds `surface` right away.
    pub fn with_surface(options: ScrollOptions, pacer: P, surface: S) -> Self {
        let mut engine = Self::new(options, pacer);
        engine.bind(surface);
        engine
    }

    /// Binds (or replaces) the surface.
    ///
    /// Limit modifiers are read again and the current offset, clamped to the new geometry, is
    /// written to the surface. Returns the previously bound surface, if any.
    pub fn bind(&mut self, surface: S) -> Option<S> {
        let previous = self.surface.replace(surface);
        self.refresh_slack();
        let limits = self.limits().unwrap_or_default();
        self.offset = limits.clamp(self.offset);
        if !self.phase.is_animating() {
            self.target = self.offset;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.set_offset(self.offset);
        }
        sdebug!(offset = self.offset, replaced = previous.is_some(), "ScrollEngine::bind");
        previous
    }

    /// Stops any animation and releases the surface.
    pub fn unbind(&mut self) -> Option<S> {
        self.stop();
        sdebug!("ScrollEngine::unbind");
        self.surface.take()
    }

    pub fn is_bound(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    /// Replaces the options. Running animations keep their duration and timing; the new values
    /// apply from the next gesture. Limit modifiers are read on the next bind/navigation.
    pub fn set_options(&mut self, options: ScrollOptions) {
        self.options = options;
        strace!(
            distance = self.options.distance,
            duration_ms = self.options.duration_ms,
            "ScrollEngine::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ScrollOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// The listener registry. Clones of the returned handle share the same listeners.
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn subscribe(&self, listener: Listener) {
        self.listeners.subscribe([listener]);
    }

    /// Removes every subscription of `listener`. Returns how many were removed.
    pub fn unsubscribe(&self, listener: &Listener) -> usize {
        self.listeners.unsubscribe([listener])
    }

    pub fn pacer(&self) -> &P {
        self.scheduler.pacer()
    }

    pub fn pacer_mut(&mut self) -> &mut P {
        self.scheduler.pacer_mut()
    }

    /// The handle of the frame the engine is waiting for, if any.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.scheduler.pending()
    }

    /// The last applied offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Frames elapsed in the running animation.
    pub fn frame(&self) -> u32 {
        self.frame.get()
    }

    /// Frame count of the running animation (`0` when idle).
    pub fn max_frames(&self) -> u32 {
        self.animation.as_ref().map_or(0, |a| a.max_frames)
    }

    /// Current clamping range, from the surface geometry and the last read limit modifiers.
    pub fn limits(&self) -> Result<Limits, ScrollError> {
        let surface = self.surface.as_ref().ok_or(ScrollError::Unbound)?;
        Ok(Limits::from_geometry(surface.geometry(), self.slack))
    }

    pub fn snapshot(&self) -> Result<ScrollSnapshot, ScrollError> {
        Ok(ScrollSnapshot {
            offset: self.offset,
            target: self.target,
            frame: self.frame.get(),
            max_frames: self.max_frames(),
            phase: self.phase,
            limits: self.limits()?,
        })
    }

    /// Handles a wheel event. Positive `delta_y` scrolls down by `distance`, negative scrolls
    /// up. Only the sign is used; a zero or non-finite delta is ignored.
    ///
    /// Ticks received during an animation accumulate onto its target. A target already past
    /// the limits is first brought back to the current position so that input in the opposite
    /// direction takes effect immediately.
    pub fn on_wheel(&mut self, delta_y: f64) -> Result<Tick, ScrollError> {
        let limits = self.limits()?;
        if delta_y == 0.0 || !delta_y.is_finite() {
            strace!(delta_y, "ScrollEngine::on_wheel: ignored");
            return Ok(Tick::Stale);
        }

        let from = limits.clamp(self.offset);
        let mut target = self.target;
        if !limits.contains(target) {
            strace!(target, from, "ScrollEngine::on_wheel: snapping saturated target");
            target = from;
        }
        if delta_y > 0.0 {
            target -= self.options.distance;
        } else {
            target += self.options.distance;
        }

        sdebug!(delta_y, from, target, "ScrollEngine::on_wheel");
        let max_frames = frames_for_duration(self.options.duration_ms);
        self.start_animation(
            ScrollPhase::Wheel,
            from,
            target,
            max_frames,
            self.options.timing,
            None,
        )
    }

    /// Starts a touch sequence at `y`, cancelling any running animation.
    pub fn on_touch_start(&mut self, y: f64) -> Result<(), ScrollError> {
        self.limits()?;
        if !y.is_finite() {
            strace!(y, "ScrollEngine::on_touch_start: ignored");
            return Ok(());
        }
        self.stop();
        self.touches.reset(y);
        self.phase = ScrollPhase::Touch;
        strace!(y, "ScrollEngine::on_touch_start");
        Ok(())
    }

    /// Moves the content with the finger: the offset changes by exactly the distance travelled
    /// since the previous sample.
    ///
    /// A move without a preceding touch start begins a new sequence at `y`. Non-finite
    /// coordinates are ignored.
    pub fn on_touch_move(&mut self, y: f64) -> Result<(), ScrollError> {
        let limits = self.limits()?;
        if !y.is_finite() {
            strace!(y, "ScrollEngine::on_touch_move: ignored");
            return Ok(());
        }
        if self.phase != ScrollPhase::Touch {
            strace!(y, "ScrollEngine::on_touch_move: implicit touch start");
            self.on_touch_start(y)?;
        }

        let delta = self.touches.record(y);
        let value = limits.clamp(self.offset - delta);
        self.target = value;
        strace!(y, delta, value, "ScrollEngine::on_touch_move");
        self.apply(value, limits)
    }

    /// Releases the finger and starts the momentum animation.
    ///
    /// The last touch delta is used as a velocity in pixels per frame and projected forward
    /// over [`MOMENTUM_FRAMES`], decaying with the configured timing curve. Ignored when no
    /// touch sequence is active.
    pub fn on_touch_end(&mut self) -> Result<Tick, ScrollError> {
        let limits = self.limits()?;
        if self.phase != ScrollPhase::Touch {
            strace!(phase = ?self.phase, "ScrollEngine::on_touch_end: no touch sequence");
            return Ok(Tick::Stale);
        }

        let from = limits.clamp(self.offset);
        let velocity = self.touches.delta();
        let target = from - velocity * MOMENTUM_FRAMES;
        sdebug!(from, velocity, target, "ScrollEngine::on_touch_end");
        let max_frames = frames_for_duration(self.options.duration_ms);
        self.start_animation(
            ScrollPhase::Momentum,
            from,
            target,
            max_frames,
            self.options.timing,
            None,
        )
    }

    /// Animates to the absolute scroll position `request.to`.
    ///
    /// The returned [`Completion`] resolves with [`AnimationOutcome::Completed`] right after the
    /// final frame has been written, or with [`AnimationOutcome::Interrupted`] if anything takes
    /// over before that. With a zero duration it is already resolved on return. A non-finite
    /// `to` is ignored and reported as interrupted right away.
    pub fn manual_scroll(&mut self, request: ManualScroll) -> Result<Completion, ScrollError> {
        let limits = self.limits()?;
        if !request.to.is_finite() {
            swarn!(to = request.to, "ScrollEngine::manual_scroll: non-finite target ignored");
            return Ok(Completion::resolved(AnimationOutcome::Interrupted));
        }
        let from = limits.clamp(self.offset);
        let target = -request.to;
        let easing = request.timing.unwrap_or_default();
        let max_frames = frames_for_duration(request.duration_ms);
        sdebug!(
            from,
            to = request.to,
            duration_ms = request.duration_ms,
            "ScrollEngine::manual_scroll"
        );

        let (completion, resolver) = Completion::pair();
        self.start_animation(
            ScrollPhase::Manual,
            from,
            target,
            max_frames,
            easing,
            Some(resolver),
        )?;
        Ok(completion)
    }

    /// Signals a change of navigation context (page, route, document).
    ///
    /// Limit modifiers are read again. Unless `preserve_across_navigation` is set, any
    /// animation is stopped and the content returns to the top; otherwise the offset is only
    /// clamped to the new limits.
    pub fn on_navigate(&mut self) -> Result<(), ScrollError> {
        self.limits()?;
        self.refresh_slack();
        let limits = self.limits()?;

        if self.options.preserve_across_navigation {
            let value = limits.clamp(self.offset);
            sdebug!(offset = value, "ScrollEngine::on_navigate: preserving offset");
            if value != self.offset {
                self.apply(value, limits)?;
            }
            return Ok(());
        }

        self.stop();
        let value = limits.clamp(0.0);
        self.target = value;
        sdebug!(offset = value, "ScrollEngine::on_navigate: reset");
        self.apply(value, limits)
    }

    /// Runs the frame identified by `handle`.
    ///
    /// Returns [`Tick::Stale`] without touching any state when `handle` is not the frame the
    /// engine is waiting for (e.g. it was cancelled by a newer gesture).
    pub fn on_frame(&mut self, handle: FrameHandle) -> Result<Tick, ScrollError> {
        self.limits()?;
        if !self.scheduler.fire(handle) {
            return Ok(Tick::Stale);
        }
        self.step()
    }

    /// Interrupts the running animation, if any, leaving the offset where it is.
    pub fn stop(&mut self) {
        self.scheduler.unsubscribe();
        self.frame.reset();
        if let Some(animation) = self.animation.take() {
            sdebug!(
                phase = ?self.phase,
                offset = self.offset,
                target = self.target,
                "ScrollEngine: animation interrupted"
            );
            // Dropping the resolver reports the interruption to awaiting callers.
            drop(animation);
        }
        self.target = self.offset;
        self.phase = ScrollPhase::Idle;
    }

    fn start_animation(
        &mut self,
        phase: ScrollPhase,
        from: f64,
        target: f64,
        max_frames: u32,
        easing: Easing,
        resolver: Option<CompletionResolver>,
    ) -> Result<Tick, ScrollError> {
        self.stop();
        self.target = target;
        self.phase = phase;
        self.animation = Some(Animation {
            from,
            max_frames,
            easing,
            resolver,
        });
        self.step()
    }

    /// Applies the current frame and either schedules the next one or finishes.
    fn step(&mut self) -> Result<Tick, ScrollError> {
        let limits = self.limits()?;
        let Some(animation) = self.animation.as_ref() else {
            return Ok(Tick::Stale);
        };

        let frame = self.frame.get();
        let eased = animation
            .easing
            .sample(progress(frame, animation.max_frames));
        let from = animation.from;
        let value = limits.clamp(from + (self.target - from) * eased);
        let done = frame >= animation.max_frames;

        strace!(frame, max_frames = animation.max_frames, value, "ScrollEngine::step");
        self.apply(value, limits)?;

        if done {
            self.frame.reset();
            self.scheduler.unsubscribe();
            let finished = self.animation.take();
            sdebug!(phase = ?self.phase, offset = value, "ScrollEngine: animation finished");
            self.phase = ScrollPhase::Idle;
            self.target = value;
            if let Some(resolver) = finished.and_then(|a| a.resolver) {
                resolver.resolve(AnimationOutcome::Completed);
            }
            Ok(Tick::Finished)
        } else {
            self.frame.increment();
            self.scheduler.subscribe();
            Ok(Tick::Running)
        }
    }

    fn apply(&mut self, value: f64, limits: Limits) -> Result<(), ScrollError> {
        let surface = self.surface.as_mut().ok_or(ScrollError::Unbound)?;
        self.offset = value;
        surface.set_offset(value);
        self.listeners.broadcast(-value, limits.max_scroll());
        Ok(())
    }

    fn refresh_slack(&mut self) {
        let mut slack = self.options.read_slack();
        if !slack.top.is_finite() {
            swarn!(top = slack.top, "ScrollEngine: non-finite top limit modifier, using 0");
            slack.top = 0.0;
        }
        if !slack.bottom.is_finite() {
            swarn!(
                bottom = slack.bottom,
                "ScrollEngine: non-finite bottom limit modifier, using 0"
            );
            slack.bottom = 0.0;
        }
        self.slack = slack;
    }
}
