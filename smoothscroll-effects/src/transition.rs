use smoothscroll_core::{
    AnimationOutcome, Completion, CompletionResolver, CubicBezier, Easing, FrameCounter,
    FrameHandle, FramePacer, FrameScheduler, Tick, frames_for_duration, progress,
};

use crate::{MappedProperty, Properties, TransitionError, map_properties, stringify};

/// Receives the interpolated styles of a running transition, once per frame.
pub trait StyleTarget {
    fn apply_styles(&mut self, styles: &Properties);
}

impl<T: StyleTarget + ?Sized> StyleTarget for &mut T {
    fn apply_styles(&mut self, styles: &Properties) {
        (**self).apply_styles(styles);
    }
}

/// A transition from one set of style properties to another.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub from: Properties,
    pub to: Properties,
    pub duration_ms: u64,
    /// Timing curve. Linear by default.
    pub timing: Easing,
    /// Wait before the first frame is applied, in milliseconds (rounded up to whole frames).
    pub delay_ms: u64,
}

impl Transition {
    pub fn new(from: Properties, to: Properties, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            timing: Easing::CubicBezier(CubicBezier::LINEAR),
            delay_ms: 0,
        }
    }

    pub fn with_timing(mut self, timing: impl Into<Easing>) -> Self {
        self.timing = timing.into();
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// The transition played backwards (`to` → `from`), with the same timing and delay.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            ..self.clone()
        }
    }
}

#[derive(Debug)]
struct Run {
    mapped: Vec<MappedProperty>,
    delay_frames: u32,
    max_frames: u32,
    easing: Easing,
    resolver: CompletionResolver,
}

/// Plays a [`Transition`] on a [`StyleTarget`], one frame per pacer tick.
///
/// Like the scroll engine, the player keeps at most one frame request pending and the host
/// forwards fired frames to [`TransitionPlayer::on_frame`].
#[derive(Debug)]
pub struct TransitionPlayer<T, P> {
    transition: Transition,
    target: T,
    scheduler: FrameScheduler<P>,
    frame: FrameCounter,
    run: Option<Run>,
}

impl<T: StyleTarget, P: FramePacer> TransitionPlayer<T, P> {
    pub fn new(transition: Transition, target: T, pacer: P) -> Self {
        Self {
            transition,
            target,
            scheduler: FrameScheduler::new(pacer),
            frame: FrameCounter::new(),
            run: None,
        }
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Replaces the transition. A running one keeps going with its original values.
    pub fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn pacer(&self) -> &P {
        self.scheduler.pacer()
    }

    pub fn pacer_mut(&mut self) -> &mut P {
        self.scheduler.pacer_mut()
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Starts (or restarts) the transition.
    ///
    /// The properties are mapped first; a malformed transition fails here and nothing is
    /// applied. Without a delay the initial stage is applied before returning. The returned
    /// [`Completion`] resolves once the final stage has been applied.
    pub fn start(&mut self) -> Result<Completion, TransitionError> {
        let mapped = map_properties(&self.transition.from, &self.transition.to)?;
        self.stop();

        let delay_frames = frames_for_duration(self.transition.delay_ms);
        let max_frames = frames_for_duration(self.transition.duration_ms);
        sdebug!(
            properties = mapped.len(),
            delay_frames,
            max_frames,
            "TransitionPlayer::start"
        );

        let (completion, resolver) = Completion::pair();
        self.run = Some(Run {
            mapped,
            delay_frames,
            max_frames,
            easing: self.transition.timing,
            resolver,
        });

        if delay_frames == 0 {
            self.step();
        } else {
            self.scheduler.subscribe();
        }
        Ok(completion)
    }

    /// Handles a fired frame. Stale handles are ignored.
    pub fn on_frame(&mut self, handle: FrameHandle) -> Tick {
        if !self.scheduler.fire(handle) {
            return Tick::Stale;
        }
        let Some(run) = self.run.as_mut() else {
            return Tick::Stale;
        };

        if run.delay_frames > 0 {
            run.delay_frames -= 1;
            if run.delay_frames > 0 {
                self.scheduler.subscribe();
                return Tick::Running;
            }
        }
        self.step()
    }

    /// Stops a running transition where it is. Its completion resolves as interrupted.
    pub fn stop(&mut self) {
        self.scheduler.unsubscribe();
        self.frame.reset();
        if self.run.take().is_some() {
            sdebug!("TransitionPlayer: transition interrupted");
        }
    }

    fn step(&mut self) -> Tick {
        let Some(run) = self.run.as_ref() else {
            return Tick::Stale;
        };

        let frame = self.frame.get();
        let stage = run.easing.sample(progress(frame, run.max_frames));
        let styles = stringify(&run.mapped, stage);
        let done = frame >= run.max_frames;
        strace!(frame, max_frames = run.max_frames, stage, "TransitionPlayer::step");
        self.target.apply_styles(&styles);

        if done {
            self.frame.reset();
            self.scheduler.unsubscribe();
            if let Some(run) = self.run.take() {
                run.resolver.resolve(AnimationOutcome::Completed);
            }
            Tick::Finished
        } else {
            self.frame.increment();
            self.scheduler.subscribe();
            Tick::Running
        }
    }
}
