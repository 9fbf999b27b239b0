//! # Spin Flow Verification
//!
//! Files on disk → engine → frame loop → renderer and presenter, driven by a
//! manual clock so every frame is deterministic.
//!
//! Run with: cargo test --package wisdom --test spin_flow_test

use std::path::PathBuf;
use std::time::Duration;

use wisdom::core::angle::resolve_segment;
use wisdom::core::{SpinConfig, Wheel, WheelEngine};
use wisdom::ui::{
    CommandRenderer, ConsolePresenter, RenderCommand, Theme, WheelLayout, WheelPainter,
};
use wisdom::{EventSystem, FrameLoop, FrameLoopConfig, ManualClock, WheelEvent};

const CATALOG: &str = r#"
[[segments]]
text = "Be steadfast in yoga"
reference = "BG 2.48"

[[segments]]
text = "The mind is restless"
reference = "BG 6.34"

[[segments]]
text = "Rise up"
reference = "BG 2.3"
"#;

const CONFIG: &str = r"
duration_ms = 500
min_spins = 2.0
max_spins = 3.0
seed = 7
";

fn temp_dir(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("wisdom_flow_{tag}_{nanos}"));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn load_engine(tag: &str) -> WheelEngine {
    let dir = temp_dir(tag);
    std::fs::write(dir.join("catalog.toml"), CATALOG).unwrap();
    std::fs::write(dir.join("spin.toml"), CONFIG).unwrap();

    let wheel = Wheel::load(dir.join("catalog.toml")).unwrap();
    let config = SpinConfig::load(dir.join("spin.toml")).unwrap();
    let _ = std::fs::remove_dir_all(&dir);

    WheelEngine::new(wheel, config).unwrap()
}

fn painter_renderer(size: f64, theme: Theme) -> CommandRenderer {
    CommandRenderer::new(WheelPainter::new(WheelLayout::square(size), theme))
}

#[test]
fn verify_full_spin_from_files() {
    let events = EventSystem::default();
    let mut frame_loop = FrameLoop::new(
        load_engine("full"),
        ManualClock::new(Duration::from_millis(10)),
        events.loop_receiver.clone(),
        events.loop_sender.clone(),
        FrameLoopConfig::default(),
    );
    let mut renderer = painter_renderer(600.0, Theme::DARK);
    let mut presenter = ConsolePresenter::new(Vec::new());

    events.control_sender.send(WheelEvent::SpinRequested);
    let index = frame_loop
        .run_until_complete(&mut renderer, &mut presenter)
        .unwrap()
        .unwrap();

    // 500 ms at 10 ms per frame.
    assert_eq!(frame_loop.frame_count(), 51);
    assert_eq!(renderer.frames(), 51);

    let rotation = frame_loop.engine().state().rotation;
    assert_eq!(resolve_segment(rotation, 3), index);
    assert!(rotation >= 2.0 * std::f64::consts::TAU);
    assert!(matches!(
        renderer.frame()[1],
        RenderCommand::Wedge { index: 0, start, .. } if start == rotation
    ));

    let segment = frame_loop.engine().wheel().get(index).unwrap().clone();
    let printed = String::from_utf8(presenter.into_inner()).unwrap();
    assert!(printed.contains(&segment.text), "{printed}");
    assert!(printed.contains(&segment.reference), "{printed}");

    assert_eq!(
        events.control_receiver.drain(),
        vec![
            WheelEvent::SpinStarted,
            WheelEvent::SpinCompleted {
                index,
                reference: segment.reference,
            },
        ]
    );
}

#[test]
fn verify_double_trigger_keeps_target() {
    let events = EventSystem::default();
    let mut frame_loop = FrameLoop::new(
        load_engine("double"),
        ManualClock::new(Duration::from_millis(10)),
        events.loop_receiver.clone(),
        events.loop_sender.clone(),
        FrameLoopConfig::default(),
    );
    let mut renderer = painter_renderer(400.0, Theme::LIGHT);
    let mut presenter = ConsolePresenter::new(Vec::new());

    events.control_sender.send(WheelEvent::SpinRequested);
    frame_loop.step(&mut renderer, &mut presenter).unwrap();
    let first = *frame_loop.engine().in_flight().unwrap();

    frame_loop.wait_next_frame();
    events.control_sender.send(WheelEvent::SpinRequested);
    frame_loop.step(&mut renderer, &mut presenter).unwrap();
    let second = *frame_loop.engine().in_flight().unwrap();

    assert_eq!(first, second);
    assert_eq!(second.started_at, Duration::ZERO);
    assert_eq!(
        events.control_receiver.drain(),
        vec![WheelEvent::SpinStarted, WheelEvent::SpinIgnored]
    );

    frame_loop.run_until_complete(&mut renderer, &mut presenter).unwrap();
    assert_eq!(frame_loop.engine().spins_completed(), 1);
    assert_eq!(frame_loop.engine().selected_index(), first.target_index);
}

#[test]
fn verify_seeded_sessions_repeat() {
    let run = |tag: &str| {
        let events = EventSystem::default();
        let mut frame_loop = FrameLoop::new(
            load_engine(tag),
            ManualClock::default(),
            events.loop_receiver.clone(),
            events.loop_sender.clone(),
            FrameLoopConfig::default(),
        );
        let mut renderer = painter_renderer(300.0, Theme::LIGHT);
        let mut presenter = ConsolePresenter::new(Vec::new());
        (0..5)
            .map(|_| {
                events.control_sender.send(WheelEvent::SpinRequested);
                frame_loop
                    .run_until_complete(&mut renderer, &mut presenter)
                    .unwrap()
                    .unwrap()
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(run("seed_a"), run("seed_b"));
}
