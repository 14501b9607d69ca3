// Example: fading and sliding a panel in with a delayed, eased property transition.
use smoothscroll_core::{CubicBezier, ManualPacer};
use smoothscroll_effects::{Properties, PropertyValue, StyleTarget, Transition, TransitionPlayer};

struct Panel;

impl StyleTarget for Panel {
    fn apply_styles(&mut self, styles: &Properties) {
        let line: Vec<String> = styles
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        println!("{}", line.join("; "));
    }
}

fn main() {
    let from = Properties::new()
        .with("opacity", 0.0)
        .with("transform", PropertyValue::text("translate3d(0px, 40px, 0px)"))
        .with("visibility", PropertyValue::keyword("hidden"));
    let to = Properties::new()
        .with("opacity", 1.0)
        .with("transform", PropertyValue::text("translate3d(0px, 0px, 0px)"))
        .with("visibility", PropertyValue::keyword("visible"));

    let transition = Transition::new(from, to, 150)
        .with_timing(CubicBezier::EASE_OUT)
        .with_delay_ms(50);

    let mut player = TransitionPlayer::new(transition, Panel, ManualPacer::new());
    let done = match player.start() {
        Ok(done) => done,
        Err(err) => {
            eprintln!("invalid transition: {err}");
            return;
        }
    };

    while let Some(frame) = player.pacer_mut().next_frame() {
        player.on_frame(frame);
    }
    println!("outcome={:?}", done.outcome());

    // Play it back out.
    let back = player.transition().reversed().with_delay_ms(0);
    player.set_transition(back);
    if let Ok(_done) = player.start() {
        while let Some(frame) = player.pacer_mut().next_frame() {
            player.on_frame(frame);
        }
    }
}
