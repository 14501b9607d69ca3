// Example: a host loop driving wheel, touch and programmatic scrolling on a fake surface.
use smoothscroll_core::{
    AnimationOutcome, Geometry, ManualPacer, ManualScroll, ScrollEngine, ScrollOptions, Surface,
    Tick, listener,
};

#[derive(Debug)]
struct Document {
    offset: f64,
    writes: usize,
}

impl Surface for Document {
    fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.writes += 1;
    }

    fn geometry(&self) -> Geometry {
        Geometry::new(5_000.0, 900.0)
    }
}

type Engine = ScrollEngine<Document, ManualPacer>;

// Simulates the display refresh: fire whatever the engine asked for, until it goes idle.
fn drain(engine: &mut Engine, label: &str) {
    let mut frame = 0u32;
    while let Some(handle) = engine.pacer_mut().next_frame() {
        let tick = engine.on_frame(handle).unwrap();
        frame += 1;
        if frame % 5 == 0 || tick == Tick::Finished {
            println!("{label}: frame={frame} offset={:.1}", engine.offset());
        }
    }
}

fn main() {
    let mut engine = ScrollEngine::with_surface(
        ScrollOptions::new(120.0, 300),
        ManualPacer::new(),
        Document {
            offset: 0.0,
            writes: 0,
        },
    );
    println!("limits={:?}", engine.limits().unwrap());

    engine.subscribe(listener(|scroll, max| {
        if max > 0.0 {
            let percent = scroll / max * 100.0;
            if percent.fract() < 0.05 {
                println!("  progress ~{percent:.0}%");
            }
        }
    }));

    // Three quick wheel ticks accumulate onto one target.
    for _ in 0..3 {
        engine.on_wheel(1.0).unwrap();
    }
    println!("wheel target={}", engine.target());
    drain(&mut engine, "wheel");

    // A short flick upwards, then release into momentum.
    engine.on_touch_start(400.0).unwrap();
    for y in [410.0, 425.0, 445.0] {
        engine.on_touch_move(y).unwrap();
    }
    println!("touch released at offset={}", engine.offset());
    engine.on_touch_end().unwrap();
    drain(&mut engine, "momentum");

    // Programmatic scroll, interrupted halfway by a wheel tick.
    let jump = engine
        .manual_scroll(ManualScroll::new(2_000.0, 500))
        .unwrap();
    for _ in 0..10 {
        if let Some(handle) = engine.pacer_mut().next_frame() {
            engine.on_frame(handle).unwrap();
        }
    }
    engine.on_wheel(-1.0).unwrap();
    assert_eq!(jump.outcome(), Some(AnimationOutcome::Interrupted));
    drain(&mut engine, "after interrupt");

    let done = engine.manual_scroll(ManualScroll::new(0.0, 0)).unwrap();
    assert_eq!(done.outcome(), Some(AnimationOutcome::Completed));

    let surface = engine.surface().unwrap();
    println!(
        "done: offset={} writes={} requested={} cancelled={}",
        surface.offset,
        surface.writes,
        engine.pacer().requested(),
        engine.pacer().cancelled()
    );
}
