use crate::*;

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_f64(&mut self, start: f64, end: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        start + (end - start) * unit
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

#[derive(Clone, Debug, Default)]
struct TestSurface {
    offset: f64,
    writes: Vec<f64>,
    geometry: Geometry,
}

impl TestSurface {
    fn new(content: f64, viewport: f64) -> Self {
        Self {
            offset: 0.0,
            writes: Vec::new(),
            geometry: Geometry::new(content, viewport),
        }
    }
}

impl Surface for TestSurface {
    fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.writes.push(offset);
    }

    fn geometry(&self) -> Geometry {
        self.geometry
    }
}

type Engine = ScrollEngine<TestSurface, ManualPacer>;

fn engine(options: ScrollOptions) -> Engine {
    ScrollEngine::with_surface(options, ManualPacer::new(), TestSurface::new(3000.0, 800.0))
}

fn surface_offset(e: &Engine) -> f64 {
    e.surface().unwrap().offset
}

fn run_frames(e: &mut Engine) -> usize {
    let mut n = 0;
    while let Some(handle) = e.pacer_mut().next_frame() {
        e.on_frame(handle).unwrap();
        n += 1;
    }
    n
}

fn recorder(e: &Engine) -> (Listener, Rc<RefCell<Vec<(f64, f64)>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let l = listener(move |scroll, max| sink.borrow_mut().push((scroll, max)));
    e.subscribe(Rc::clone(&l));
    (l, seen)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn frame_counter_increments_and_resets() {
    let mut f = FrameCounter::new();
    assert_eq!(f.get(), 0);
    f.increment();
    f.increment();
    assert_eq!(f.get(), 2);
    f.reset();
    assert_eq!(f.get(), 0);
}

#[test]
fn durations_round_up_to_whole_frames() {
    assert_eq!(frames_for_duration(0), 0);
    assert_eq!(frames_for_duration(1000), 60);
    assert_eq!(frames_for_duration(250), 15);
    // 0.6 frames still needs one frame to land on the target.
    assert_eq!(frames_for_duration(10), 1);
    assert_eq!(progress(0, 0), 1.0);
    assert_eq!(progress(3, 6), 0.5);
    assert_eq!(progress(9, 6), 1.0);
}

#[test]
fn touch_tracker_reports_previous_minus_newest() {
    let mut t = TouchTracker::new();
    assert_eq!(t.delta(), 0.0);

    t.reset(200.0);
    assert_eq!(t.delta(), 0.0);
    assert_eq!(t.record(190.0), 10.0);
    assert_eq!(t.delta(), 10.0);
    assert_eq!(t.record(195.0), -5.0);
    assert_eq!(t.samples(), [190.0, 195.0]);
}

#[test]
fn scheduler_keeps_at_most_one_pending_frame() {
    let mut s = FrameScheduler::new(ManualPacer::new());
    s.unsubscribe(); // nothing pending: no-op

    let first = s.subscribe();
    let second = s.subscribe();
    assert_ne!(first, second);
    assert_eq!(s.pending(), Some(second));
    assert_eq!(s.pacer().outstanding(), 1);
    assert_eq!(s.pacer().cancelled(), 1);

    assert!(!s.fire(first));
    assert!(s.is_pending());
    assert!(s.fire(second));
    assert!(!s.is_pending());
    assert!(!s.fire(second));
}

#[test]
fn registry_broadcasts_in_order_and_allows_duplicates() {
    let registry = ListenerRegistry::new();
    let calls = Rc::new(RefCell::new(Vec::new()));

    let c = Rc::clone(&calls);
    let a = listener(move |s, m| c.borrow_mut().push(("a", s, m)));
    let c = Rc::clone(&calls);
    let b = listener(move |s, m| c.borrow_mut().push(("b", s, m)));

    registry.subscribe([Rc::clone(&a), Rc::clone(&b), Rc::clone(&a)]);
    assert_eq!(registry.len(), 3);
    registry.broadcast(5.0, 10.0);
    assert_eq!(
        *calls.borrow(),
        [("a", 5.0, 10.0), ("b", 5.0, 10.0), ("a", 5.0, 10.0)]
    );

    // Every occurrence goes away at once.
    assert_eq!(registry.unsubscribe([&a]), 2);
    assert!(!registry.contains(&a));
    calls.borrow_mut().clear();
    registry.broadcast(1.0, 2.0);
    assert_eq!(*calls.borrow(), [("b", 1.0, 2.0)]);
}

#[test]
fn registry_changes_during_broadcast_apply_to_next_pass() {
    let registry = ListenerRegistry::new();
    let late_calls = Rc::new(Cell::new(0));

    let counter = Rc::clone(&late_calls);
    let late = listener(move |_, _| counter.set(counter.get() + 1));

    let handle = registry.clone();
    let self_slot: Rc<RefCell<Option<Listener>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&self_slot);
    let once = listener(move |_, _| {
        if let Some(me) = slot.borrow_mut().take() {
            handle.unsubscribe([&me]);
        }
        handle.subscribe([Rc::clone(&late)]);
    });
    *self_slot.borrow_mut() = Some(Rc::clone(&once));
    registry.subscribe([once]);

    registry.broadcast(0.0, 0.0);
    assert_eq!(late_calls.get(), 0);
    assert_eq!(registry.len(), 1);

    registry.broadcast(0.0, 0.0);
    assert_eq!(late_calls.get(), 1);
}

#[test]
fn cubic_bezier_matches_reference_curves() {
    let ease = CubicBezier::new(0.25, 0.1, 0.25, 1.0);
    assert!((ease.sample(0.5) - 0.8024).abs() < 1e-3);

    assert_eq!(CubicBezier::EASE_OUT.sample(0.0), 0.0);
    assert_eq!(CubicBezier::EASE_OUT.sample(1.0), 1.0);
    assert_eq!(CubicBezier::LINEAR.sample(0.37), 0.37);

    let mut last = 0.0;
    for i in 1..=20 {
        let t = i as f64 / 20.0;
        let y = CubicBezier::EASE_OUT.sample(t);
        assert!(y >= last, "ease-out must not go backwards at t={t}");
        assert!(y >= t - 1e-9, "ease-out runs ahead of linear at t={t}");
        last = y;
    }
}

#[test]
fn easing_variants_hit_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::default(),
        Easing::from([0.0, 0.0, 0.1, 1.0]),
    ] {
        assert_close(easing.sample(0.0), 0.0);
        assert_close(easing.sample(1.0), 1.0);
        assert_close(easing.sample(2.0), 1.0);
    }
}

#[test]
fn operations_fail_without_surface() {
    let mut e: Engine = ScrollEngine::new(ScrollOptions::new(100.0, 0), ManualPacer::new());
    assert!(!e.is_bound());
    assert_eq!(e.on_wheel(100.0), Err(ScrollError::Unbound));
    assert_eq!(e.on_touch_start(10.0), Err(ScrollError::Unbound));
    assert_eq!(e.on_touch_move(10.0), Err(ScrollError::Unbound));
    assert_eq!(e.on_touch_end(), Err(ScrollError::Unbound));
    assert_eq!(e.on_navigate(), Err(ScrollError::Unbound));
    assert_eq!(e.on_frame(FrameHandle(1)), Err(ScrollError::Unbound));
    assert!(matches!(
        e.manual_scroll(ManualScroll::new(10.0, 0)),
        Err(ScrollError::Unbound)
    ));
    assert_eq!(
        ScrollError::Unbound.to_string(),
        "the scroll engine has no surface bound"
    );
    assert_eq!(e.pacer().requested(), 0);
}

#[test]
fn wheel_with_zero_duration_jumps_in_one_write() {
    let mut e = engine(ScrollOptions::new(100.0, 0).with_timing([0.0, 0.0, 0.1, 1.0]));
    let (_l, seen) = recorder(&e);
    let content = Rc::new(Cell::new(f64::NAN));
    let c = Rc::clone(&content);
    e.subscribe(listener(move |scroll, _| c.set(100.0 - scroll)));

    let writes_before = e.surface().unwrap().writes.len();
    assert_eq!(e.on_wheel(100.0), Ok(Tick::Finished));

    assert_eq!(surface_offset(&e), -100.0);
    assert_eq!(e.surface().unwrap().writes.len(), writes_before + 1);
    assert_eq!(*seen.borrow(), [(100.0, 2200.0)]);
    assert_eq!(content.get(), 0.0);
    assert_eq!(e.pacer().outstanding(), 0);
    assert_eq!(e.phase(), ScrollPhase::Idle);
}

#[test]
fn negative_wheel_delta_scrolls_up() {
    let mut e = engine(ScrollOptions::new(100.0, 0));
    let _done = e.manual_scroll(ManualScroll::new(500.0, 0)).unwrap();
    e.on_wheel(-3.0).unwrap();
    assert_eq!(e.offset(), -400.0);
    // No movement on the axis.
    assert_eq!(e.on_wheel(0.0), Ok(Tick::Stale));
    assert_eq!(e.offset(), -400.0);
}

#[test]
fn touch_drag_and_momentum_release() {
    let mut e = engine(ScrollOptions::new(100.0, 0));
    let content = Rc::new(Cell::new(f64::NAN));
    let c = Rc::clone(&content);
    e.subscribe(listener(move |scroll, _| c.set(100.0 - scroll)));

    e.on_touch_start(200.0).unwrap();
    assert_eq!(e.phase(), ScrollPhase::Touch);
    e.on_touch_move(190.0).unwrap();
    assert_eq!(surface_offset(&e), -10.0);
    assert_eq!(content.get(), 90.0);

    assert_eq!(e.on_touch_end(), Ok(Tick::Finished));
    assert_eq!(surface_offset(&e), -610.0);
    assert_eq!(content.get(), -510.0);
    assert_eq!(e.phase(), ScrollPhase::Idle);
}

#[test]
fn momentum_decelerates_towards_projection() {
    let mut e = engine(ScrollOptions::new(100.0, 500));
    e.on_touch_start(400.0).unwrap();
    e.on_touch_move(396.0).unwrap();
    e.on_touch_move(392.0).unwrap();
    assert_eq!(e.offset(), -8.0);

    e.on_touch_end().unwrap();
    assert_eq!(e.phase(), ScrollPhase::Momentum);
    assert_eq!(e.target(), -8.0 - 4.0 * 60.0);

    let frames = run_frames(&mut e);
    assert_eq!(frames, 30);
    let writes = &e.surface().unwrap().writes;
    let momentum = &writes[writes.len() - 31..];
    let steps: Vec<f64> = momentum.windows(2).map(|w| w[0] - w[1]).collect();
    assert!(steps.iter().all(|s| *s >= 0.0));
    assert!(steps.first().unwrap() > steps.last().unwrap());
    assert_eq!(e.offset(), -248.0);
}

#[test]
fn touch_end_without_sequence_is_ignored() {
    let mut e = engine(ScrollOptions::new(100.0, 0));
    assert_eq!(e.on_touch_end(), Ok(Tick::Stale));
    assert_eq!(e.offset(), 0.0);
}

#[test]
fn touch_move_without_start_does_not_jump() {
    let mut e = engine(ScrollOptions::new(100.0, 0));
    e.on_touch_move(500.0).unwrap();
    assert_eq!(e.offset(), 0.0);
    e.on_touch_move(480.0).unwrap();
    assert_eq!(e.offset(), -20.0);
}

#[test]
fn manual_scroll_resolves_after_final_write() {
    let mut e = engine(ScrollOptions::new(100.0, 0));
    let done = e.manual_scroll(ManualScroll::new(200.0, 0)).unwrap();
    assert_eq!(surface_offset(&e), -200.0);
    assert_eq!(done.outcome(), Some(AnimationOutcome::Completed));

    let done = e
        .manual_scroll(ManualScroll::new(1000.0, 100).with_timing(Easing::Linear))
        .unwrap();
    assert_eq!(e.max_frames(), 6);
    while let Some(handle) = e.pacer_mut().next_frame() {
        assert!(!done.is_done());
        e.on_frame(handle).unwrap();
    }
    assert!(done.is_done());
    assert_eq!(surface_offset(&e), -1000.0);
    assert_eq!(e.target(), -1000.0);
}

#[test]
fn manual_scroll_completion_is_a_future() {
    let mut e = engine(ScrollOptions::new(100.0, 0));
    let mut done = pin!(e.manual_scroll(ManualScroll::new(300.0, 50)).unwrap());
    let mut cx = Context::from_waker(Waker::noop());

    assert_eq!(done.as_mut().poll(&mut cx), Poll::Pending);
    run_frames(&mut e);
    assert_eq!(
        done.as_mut().poll(&mut cx),
        Poll::Ready(AnimationOutcome::Completed)
    );
    assert_eq!(e.offset(), -300.0);
}

#[test]
fn gestures_interrupt_manual_scroll() {
    let mut e = engine(ScrollOptions::new(100.0, 0));
    let done = e.manual_scroll(ManualScroll::new(1000.0, 500)).unwrap();
    let h = e.pacer_mut().next_frame().unwrap();
    e.on_frame(h).unwrap();
    assert!(!done.is_done());

    e.on_touch_start(10.0).unwrap();
    assert_eq!(done.outcome(), Some(AnimationOutcome::Interrupted));
    assert_eq!(e.pacer().outstanding(), 0);
    assert_eq!(e.target(), e.offset());

    let second = e.manual_scroll(ManualScroll::new(100.0, 500)).unwrap();
    let third = e.manual_scroll(ManualScroll::new(50.0, 0)).unwrap();
    assert_eq!(second.outcome(), Some(AnimationOutcome::Interrupted));
    assert_eq!(third.outcome(), Some(AnimationOutcome::Completed));
    assert_eq!(e.offset(), -50.0);
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let mut e = engine(ScrollOptions::new(100.0, 0));
    let (l, seen) = recorder(&e);
    assert_eq!(e.unsubscribe(&l), 1);
    e.on_wheel(100.0).unwrap();
    assert!(seen.borrow().is_empty());
    assert_eq!(e.offset(), -100.0);
}

#[test]
fn wheel_during_animation_keeps_single_pending_frame() {
    let mut e = engine(ScrollOptions::new(100.0, 250));
    e.on_wheel(1.0).unwrap();
    assert_eq!(e.pacer().outstanding(), 1);
    let stale = e.pending_frame().unwrap();

    for _ in 0..5 {
        e.on_wheel(1.0).unwrap();
        assert_eq!(e.pacer().outstanding(), 1);
    }
    assert_eq!(e.target(), -600.0);
    assert_eq!(e.on_frame(stale), Ok(Tick::Stale));

    run_frames(&mut e);
    assert_eq!(e.offset(), -600.0);
}

#[test]
fn finished_animation_stops_and_next_gesture_starts_fresh() {
    let mut e = engine(ScrollOptions::new(100.0, 250));
    e.on_wheel(1.0).unwrap();
    assert_eq!(e.phase(), ScrollPhase::Wheel);
    assert_eq!(run_frames(&mut e), 15);

    assert!(!e.is_animating());
    assert_eq!(e.frame(), 0);
    assert_eq!(e.pending_frame(), None);
    assert_eq!(e.pacer().outstanding(), 0);
    assert_eq!(e.offset(), -100.0);

    let requested = e.pacer().requested();
    e.on_wheel(1.0).unwrap();
    assert_eq!(e.pacer().requested(), requested + 1);
    // First frame of the new animation starts from the settled offset.
    assert_eq!(e.offset(), -100.0);
    run_frames(&mut e);
    assert_eq!(e.offset(), -200.0);
}

#[test]
fn saturated_target_snaps_back_on_reverse_input() {
    let mut e = engine(ScrollOptions::new(100.0, 250));
    e.on_wheel(-1.0).unwrap();
    e.on_wheel(-1.0).unwrap();
    // Already past the top: the second tick restarts from the clamped position.
    assert_eq!(e.target(), 100.0);
    assert_eq!(e.offset(), 0.0);

    // Without the snap, this tick would only bring the target back to the top.
    e.on_wheel(1.0).unwrap();
    assert_eq!(e.target(), -100.0);
    run_frames(&mut e);
    assert_eq!(e.offset(), -100.0);
}

#[test]
fn offsets_are_clamped_to_bottom_and_top() {
    let mut e = engine(ScrollOptions::new(1000.0, 0));
    for _ in 0..5 {
        e.on_wheel(1.0).unwrap();
    }
    assert_eq!(e.offset(), -2200.0);

    let done = e.manual_scroll(ManualScroll::new(-300.0, 0)).unwrap();
    assert_eq!(done.outcome(), Some(AnimationOutcome::Completed));
    assert_eq!(e.offset(), 0.0);
    assert_eq!(e.limits().unwrap(), Limits::new(-2200.0, 0.0));
}

#[test]
fn short_content_settles_at_top() {
    let mut e: Engine = ScrollEngine::with_surface(
        ScrollOptions::new(100.0, 100),
        ManualPacer::new(),
        TestSurface::new(500.0, 800.0),
    );
    let limits = e.limits().unwrap();
    assert_eq!(limits.min, limits.max);

    for delta in [1.0, -1.0, 1.0, 1.0] {
        e.on_wheel(delta).unwrap();
        run_frames(&mut e);
    }
    assert!(e.surface().unwrap().writes.iter().all(|w| *w == 0.0));
}

#[test]
fn limit_modifiers_extend_range_and_refresh_on_navigation() {
    let bottom = Rc::new(Cell::new(50.0));
    let b = Rc::clone(&bottom);
    let options = ScrollOptions::new(1000.0, 0)
        .with_limit_top(Some(|| 40.0))
        .with_limit_bottom(Some(move || b.get()))
        .with_preserve_across_navigation(true);
    let mut e: Engine = ScrollEngine::with_surface(
        options,
        ManualPacer::new(),
        TestSurface::new(1000.0, 800.0),
    );
    assert_eq!(e.limits().unwrap(), Limits::new(-250.0, 40.0));

    e.on_wheel(-1.0).unwrap();
    assert_eq!(e.offset(), 40.0);
    e.on_wheel(1.0).unwrap();
    e.on_wheel(1.0).unwrap();
    assert_eq!(e.offset(), -250.0);

    bottom.set(0.0);
    // Modifiers are only read on bind/navigation.
    assert_eq!(e.limits().unwrap().min, -250.0);
    e.on_navigate().unwrap();
    assert_eq!(e.limits().unwrap().min, -200.0);
    assert_eq!(e.offset(), -200.0);
}

#[test]
fn navigation_resets_unless_preserving() {
    let mut e = engine(ScrollOptions::new(100.0, 0));
    let (_l, seen) = recorder(&e);
    let _done = e.manual_scroll(ManualScroll::new(700.0, 0)).unwrap();
    let running = e.manual_scroll(ManualScroll::new(900.0, 500)).unwrap();

    e.on_navigate().unwrap();
    assert_eq!(running.outcome(), Some(AnimationOutcome::Interrupted));
    assert_eq!(surface_offset(&e), 0.0);
    assert_eq!(e.target(), 0.0);
    assert_eq!(e.pacer().outstanding(), 0);
    assert_eq!(seen.borrow().last().copied(), Some((0.0, 2200.0)));

    let mut kept = engine(ScrollOptions::new(100.0, 0).with_preserve_across_navigation(true));
    let _done = kept.manual_scroll(ManualScroll::new(700.0, 0)).unwrap();
    kept.on_navigate().unwrap();
    assert_eq!(surface_offset(&kept), -700.0);
}

#[test]
fn unbind_stops_animation_and_returns_surface() {
    let mut e = engine(ScrollOptions::new(100.0, 250));
    e.on_wheel(1.0).unwrap();
    let pending = e.pending_frame().unwrap();

    let surface = e.unbind().unwrap();
    assert!(!e.is_animating());
    assert_eq!(e.pacer().outstanding(), 0);
    assert_eq!(e.on_frame(pending), Err(ScrollError::Unbound));

    assert!(e.bind(surface).is_none());
    assert_eq!(e.on_frame(pending), Ok(Tick::Stale));
}

#[test]
fn options_can_change_between_gestures() {
    let mut e = engine(ScrollOptions::new(100.0, 0));
    e.update_options(|o| o.distance = 40.0);
    e.on_wheel(1.0).unwrap();
    assert_eq!(e.offset(), -40.0);
    e.set_options(e.options().clone().with_duration_ms(1000));
    e.on_wheel(1.0).unwrap();
    assert_eq!(e.max_frames(), 60);
}

#[test]
fn snapshot_reports_running_state() {
    let mut e = engine(ScrollOptions::new(100.0, 100));
    e.on_wheel(1.0).unwrap();
    let snap = e.snapshot().unwrap();
    assert_eq!(snap.phase, ScrollPhase::Wheel);
    assert_eq!(snap.target, -100.0);
    assert_eq!(snap.frame, 1);
    assert_eq!(snap.max_frames, 6);
    assert_eq!(snap.scroll(), 0.0);
    assert_eq!(snap.limits.max_scroll(), 2200.0);
}

#[test]
fn random_input_never_leaves_limits() {
    let mut rng = Lcg::new(0x5eed_cafe);
    for round in 0..20u64 {
        let content = rng.gen_range_f64(200.0, 6000.0);
        let viewport = rng.gen_range_f64(300.0, 1200.0);
        let duration = rng.gen_range_u64(0, 400);
        let mut e: Engine = ScrollEngine::with_surface(
            ScrollOptions::new(rng.gen_range_f64(20.0, 400.0), duration),
            ManualPacer::new(),
            TestSurface::new(content, viewport),
        );
        let limits = e.limits().unwrap();
        let (_l, seen) = recorder(&e);

        for _ in 0..200 {
            match rng.gen_range_u64(0, 7) {
                0 | 1 => {
                    let delta = if rng.gen_bool() { 1.0 } else { -1.0 };
                    e.on_wheel(delta).unwrap();
                }
                2 => e.on_touch_start(rng.gen_range_f64(0.0, 900.0)).unwrap(),
                3 => e.on_touch_move(rng.gen_range_f64(0.0, 900.0)).unwrap(),
                4 => {
                    e.on_touch_end().unwrap();
                }
                5 => {
                    let to = rng.gen_range_f64(-1000.0, 8000.0);
                    let _ = e.manual_scroll(ManualScroll::new(to, duration)).unwrap();
                }
                _ => {
                    for _ in 0..rng.gen_range_u64(1, 10) {
                        if let Some(handle) = e.pacer_mut().next_frame() {
                            e.on_frame(handle).unwrap();
                        }
                    }
                }
            }
            assert!(e.pacer().outstanding() <= 1, "round {round}");
            assert_eq!(e.offset(), surface_offset(&e));
        }
        run_frames(&mut e);

        for w in &e.surface().unwrap().writes {
            assert!(limits.contains(*w), "round {round}: {w} outside {limits:?}");
        }
        for (scroll, max) in seen.borrow().iter() {
            assert!(*scroll >= -limits.max && *scroll <= *max, "round {round}");
        }
        assert!(!e.is_animating());
    }
}

#[test]
fn non_finite_input_never_leaves_limits() {
    let mut e = engine(ScrollOptions::new(100.0, 0));
    let limits = e.limits().unwrap();

    e.on_touch_start(200.0).unwrap();
    e.on_touch_move(190.0).unwrap();
    e.on_touch_move(f64::NAN).unwrap();
    e.on_touch_move(f64::INFINITY).unwrap();
    assert_eq!(e.offset(), -10.0);

    e.on_touch_start(f64::NAN).unwrap();
    assert_eq!(e.phase(), ScrollPhase::Touch);
    e.on_touch_end().unwrap();
    assert_eq!(e.offset(), -610.0);

    let ignored = e
        .manual_scroll(ManualScroll::new(f64::NAN, 0))
        .unwrap();
    assert_eq!(ignored.outcome(), Some(AnimationOutcome::Interrupted));
    let ignored = e
        .manual_scroll(ManualScroll::new(f64::NEG_INFINITY, 0))
        .unwrap();
    assert!(ignored.is_done());
    e.on_wheel(1.0).unwrap();
    assert_eq!(e.offset(), -710.0);
    assert!(limits.contains(e.target()));

    for w in &e.surface().unwrap().writes {
        assert!(limits.contains(*w), "{w} outside {limits:?}");
    }
    assert_eq!(limits.clamp(f64::NAN), limits.max);
    assert_eq!(limits.clamp(f64::NEG_INFINITY), limits.min);
}
