mod events;
mod render;
mod sim;
mod sys;

use anyhow::Context;
use async_channel::TryRecvError;
use clap::{Parser, Subcommand};
use events::{SimEvent, Step};
use foldout::Gravity;
use foldout::config::{self, MenuConfig};
use sim::Simulation;
use std::path::PathBuf;
use sys::runtime;

#[derive(Parser, Debug)]
#[command(name = "foldout-sim", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Menu configuration file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured gravity ("start" or "end")
    #[arg(short, long, global = true)]
    gravity: Option<Gravity>,

    /// Lay the menu out right-to-left
    #[arg(long, global = true)]
    rtl: bool,

    /// Override the per-step animation duration in milliseconds
    #[arg(short, long, global = true)]
    duration: Option<u64>,

    /// Simulated frames per second
    #[arg(long, global = true, default_value_t = 60)]
    fps: u32,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Write the default configuration to the user config directory
    Init,
    /// Play steps such as `toggle wait:700 tap:2` and print what was dispatched
    Run {
        #[arg(required = true)]
        steps: Vec<Step>,
    },
    /// Read steps from stdin, reloading the config file when it changes
    Watch,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init => {
            let path = config::write_default_config().context("Failed to write config")?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Run { steps } => {
            let mut sim = Simulation::new(&load(&cli)?, cli.fps)?;
            for step in steps {
                sim.apply(*step);
            }
            sim.settle();
            report(&sim);
            Ok(())
        }
        Commands::Watch => watch(&cli),
    }
}

fn load(cli: &Cli) -> anyhow::Result<MenuConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let loaded = config::load_config(Some(path.as_path()));
            loaded.with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => config::load_or_bundled(None)?,
    };

    if let Some(gravity) = cli.gravity {
        config.gravity = gravity;
    }
    if cli.rtl {
        config.rtl = true;
    }
    if let Some(ms) = cli.duration {
        config.animation_duration_ms = ms;
    }
    Ok(config)
}

fn report(sim: &Simulation) {
    for dispatch in sim.dispatched() {
        println!("{:>6}ms {}", dispatch.at.as_millis(), dispatch);
    }
    println!("{}", sim.menu().state());
    print!("{}", render::frame(sim.menu()));
}

fn watch(cli: &Cli) -> anyhow::Result<()> {
    let mut sim = Simulation::new(&load(cli)?, cli.fps)?;
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::get_config_path()?,
    };

    let (tx, rx) = async_channel::bounded(32);
    runtime::start_background_services(tx, config_path);

    let mut reported = 0;
    loop {
        let event = if sim.menu().active_schedule().is_some() {
            match rx.try_recv() {
                Ok(event) => Some(event),
                Err(TryRecvError::Empty) => {
                    std::thread::sleep(sim.frame());
                    sim.tick(sim.frame());
                    None
                }
                Err(TryRecvError::Closed) => break,
            }
        } else {
            match rx.recv_blocking() {
                Ok(event) => Some(event),
                Err(_) => break,
            }
        };

        match event {
            Some(SimEvent::Step(step)) => sim.apply(step),
            Some(SimEvent::ConfigReload) => match load(cli) {
                Ok(config) => {
                    if let Err(e) = sim.reload(&config) {
                        log::error!("Failed to apply config: {}", e);
                    }
                }
                Err(e) => log::error!("Failed to reload config: {:#}", e),
            },
            Some(SimEvent::Quit) => break,
            None => {}
        }

        let dispatched = sim.dispatched();
        for dispatch in &dispatched[reported..] {
            println!("{}", dispatch);
        }
        reported = dispatched.len();
    }

    sim.settle();
    report(&sim);
    Ok(())
}
