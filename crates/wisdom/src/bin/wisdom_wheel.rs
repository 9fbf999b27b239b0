//! # Wisdom Wheel (terminal)
//!
//! Press Enter to spin, `q` to quit. With `--spins N` the wheel spins N
//! times on its own and exits.
//!
//! Set `RUST_LOG=info` (or `debug`) to see spin targets and frame timing.

use std::error::Error;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use wisdom::core::{SpinConfig, Wheel, WheelEngine};
use wisdom::ui::{Color, ConsolePresenter, TextRenderer, ThemeMode, ThemeStore};
use wisdom::{
    EventSender, EventSystem, FrameLoop, FrameLoopConfig, LoopControl, SleepClock, WheelEvent,
};

#[derive(Parser, Debug)]
#[command(name = "wisdom_wheel", version, about = "Spin the wheel, receive a verse")]
struct Cli {
    /// Spin configuration (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Quotation catalog (TOML). Defaults to the built-in verses.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Seed for reproducible spins; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Spin this many times without waiting for input, then exit.
    #[arg(long)]
    spins: Option<u32>,

    /// Set or toggle the stored theme preference.
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Theme preference file. Defaults to the user config directory.
    #[arg(long)]
    theme_file: Option<PathBuf>,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Warn about slow frames.
    #[arg(long)]
    timing: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("wisdom_wheel failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => SpinConfig::load(path)?,
        None => SpinConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    let wheel = match &cli.catalog {
        Some(path) => Wheel::load(path)?,
        None => Wheel::bhagavad_gita(),
    };

    let mode = resolve_theme(cli);
    let color = io::stdout().is_terminal();
    tracing::info!(
        "Wheel ready: {} segments, theme {}, {} fps",
        wheel.len(),
        mode.as_str(),
        cli.fps
    );

    let engine = WheelEngine::new(wheel, config)?;
    let events = EventSystem::default();
    let mut frame_loop = FrameLoop::new(
        engine,
        SleepClock::new(cli.fps),
        events.loop_receiver.clone(),
        events.loop_sender.clone(),
        FrameLoopConfig {
            enable_timing_logs: cli.timing,
            target_fps: cli.fps,
        },
    );

    let mut renderer = TextRenderer::new(io::stdout());
    let mut presenter = ConsolePresenter::new(io::stdout()).with_color(color);

    print_banner(mode, color, cli.spins.is_none());
    frame_loop.engine().redraw(&mut renderer)?;

    if let Some(spins) = cli.spins {
        for _ in 0..spins {
            events.control_sender.send(WheelEvent::SpinRequested);
            frame_loop.run_until_complete(&mut renderer, &mut presenter)?;
            let _ = events.control_receiver.drain();
        }
    } else {
        spawn_stdin_reader(events.control_sender.clone());
        loop {
            let control = frame_loop.step(&mut renderer, &mut presenter)?;
            for event in events.control_receiver.drain() {
                match event {
                    WheelEvent::SpinIgnored => tracing::info!("Wheel is still spinning"),
                    WheelEvent::SpinCompleted { index, reference } => {
                        tracing::debug!("Completed on segment {} ({})", index, reference);
                    }
                    _ => {}
                }
            }
            if control == LoopControl::Quit {
                break;
            }
            frame_loop.wait_next_frame();
        }
    }

    println!();
    frame_loop.stats().log_summary();
    Ok(())
}

/// Forwards stdin lines as spin requests until `q` or end of input.
fn spawn_stdin_reader(sender: EventSender) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().eq_ignore_ascii_case("q") {
                break;
            }
            sender.send(WheelEvent::SpinRequested);
        }
        sender.send(WheelEvent::Quit);
    });
}

fn resolve_theme(cli: &Cli) -> ThemeMode {
    let system_dark = system_prefers_dark();
    let store = match &cli.theme_file {
        Some(path) => ThemeStore::new(path.clone()),
        None => match ThemeStore::in_config_dir() {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("Theme preference unavailable: {e}");
                return ThemeMode::from_system(system_dark);
            }
        },
    };

    let result = match cli.theme {
        Some(ThemeArg::Light) => store.save(ThemeMode::Light).map(|()| ThemeMode::Light),
        Some(ThemeArg::Dark) => store.save(ThemeMode::Dark).map(|()| ThemeMode::Dark),
        Some(ThemeArg::Toggle) => store.toggle(system_dark),
        None => store.effective(system_dark),
    };
    result.unwrap_or_else(|e| {
        tracing::warn!("Theme preference unavailable: {e}");
        ThemeMode::from_system(system_dark)
    })
}

/// `COLORFGBG` is `fg;bg`; ANSI backgrounds 0-6 and 8 are dark.
fn system_prefers_dark() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| value.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
        .is_some_and(|bg| bg < 7 || bg == 8)
}

fn print_banner(mode: ThemeMode, color: bool, interactive: bool) {
    let theme = mode.theme();
    let paint = |c: Color| if color { c.ansi_bold() } else { String::new() };
    let reset = if color { "\x1b[0m" } else { "" };

    println!("{}Wheel of Wisdom{reset}", paint(theme.accent));
    if interactive {
        println!("{}Press Enter to spin, q to quit.{reset}", paint(theme.text_muted));
    }
    println!();
}
