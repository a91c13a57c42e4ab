use bouncesim::{ScenarioConfig, Scenario, Preset, Session};
use bouncesim::run_2d;
use bouncesim::bench_step;

use clap::Parser;
use anyhow::{Context, Result};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Bouncing and colliding discs")]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, long)]
    file_name: Option<String>,

    /// Built-in demo, used when no file is given
    #[arg(short, long, value_enum, default_value_t = Preset::TwoCollide)]
    preset: Preset,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Stop a headless run after this many frames
    #[arg(long)]
    frames: Option<u64>,

    /// Time the frame step and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let Some(file_name) = &args.file_name else {
        info!(preset = ?args.preset, "using built-in scenario");
        return Ok(Scenario::preset(args.preset));
    };

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg = ScenarioConfig::from_reader(reader)
        .with_context(|| format!("reading {}", config_path.display()))?;

    info!(path = %config_path.display(), bodies = scenario_cfg.bodies.len(), "loaded scenario");
    Ok(Scenario::build_scenario(scenario_cfg)?)
}

/// Frame loop without a window, paced to the scenario's frame rate
fn run_headless(mut session: Session, frames: Option<u64>) {
    let period = session.scenario.parameters.frame_period();
    let start = Instant::now();

    while !session.is_finished() {
        if frames.is_some_and(|n| session.frame() >= n) {
            break;
        }
        if session.expired(start.elapsed()) {
            info!("bail-out timer expired");
            break;
        }

        let frame_start = Instant::now();
        session.tick();
        for (i, b) in session.scenario.system.bodies.iter().enumerate() {
            debug!(frame = session.frame(), i, x = b.x.x, y = b.x.y, vx = b.v.x, vy = b.v.y);
        }

        if let Some(rest) = period.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    info!(
        frames = session.frame(),
        contacts = session.contacts,
        energy = session.scenario.system.energy(),
        "headless run finished"
    );
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    if args.headless {
        // the windowed path gets its subscriber from Bevy's LogPlugin
        init_tracing();
    }

    let scenario = match load_scenario(&args) {
        Ok(scenario) => scenario,
        Err(err) => {
            error!("failed to load scenario: {err:#}");
            return Err(err);
        }
    };

    if args.headless {
        run_headless(Session::playing(scenario), args.frames);
    }
    else {
        run_2d(Session::new(scenario));
    }

    Ok(())
}
