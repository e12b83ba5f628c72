//! VamPyro arena generator
//!
//! Builds a night's maze from a seed, optionally plays out key pickups and
//! kills, and prints the result as ASCII art or JSON.

mod messages;
mod render;

use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, info, warn};

use vp_core::maze::EntityKind;
use vp_core::{GameRng, GenerationOptions, LevelError, LevelEvent, Session};

/// Generate and inspect VamPyro arena levels
#[derive(Parser, Debug)]
#[command(name = "vampyro")]
#[command(author, version, about = "VamPyro - Survive the night in the arena", long_about = None)]
struct Args {
    /// Level (night) number, starting at 1
    #[arg(short = 'l', long = "level", default_value_t = 1)]
    level: u32,

    /// RNG seed; a random one is used when omitted
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Collect this many keys, opening one exit each
    #[arg(short = 'o', long = "open-exits", default_value_t = 0)]
    open_exits: u32,

    /// Kill this many VamPyros; dropped keys are collected
    #[arg(short = 'k', long = "kills", default_value_t = 0)]
    kills: u32,

    /// Die at the end and show the game-over screen
    #[arg(long = "die")]
    die: bool,

    /// Print the level snapshot as JSON instead of drawing it
    #[arg(long = "json")]
    json: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    no_color: bool,

    /// Options file (defaults to <config dir>/vampyro/vampyrorc)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    match run(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("vampyro: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Generate the level and write the report to `out`
///
/// In JSON mode `out` receives only the snapshot; the game-over text goes to
/// stderr so the output stays parseable.
fn run(args: &Args, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let options = load_options(args.config.as_deref())?;
    let root = args.seed.map(GameRng::new).unwrap_or_default();
    info!("session seed {}", root.seed());

    let mut session = Session::start_at(options, root, args.level)?;
    let mut notices = vec![messages::level_title(session.level_number())];

    for _ in 0..args.open_exits {
        collect_key(&mut session);
    }

    for _ in 0..args.kills {
        let Some(outcome) = session.record_kill() else {
            break;
        };
        if outcome.key_dropped {
            collect_key(&mut session);
        }
        if outcome.cleared {
            notices.push(messages::ARENA_CLEARED.to_string());
        }
    }

    for event in session.level_mut().take_events() {
        match event {
            LevelEvent::ExitOpened(corner) => {
                notices.push(messages::exit_notice(corner).to_string());
            }
        }
    }

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&session.level().snapshot())?)?;
    } else {
        for notice in &notices {
            writeln!(out, "{notice}")?;
        }
        writeln!(out)?;
        writeln!(out, "{}", render::render(session.level(), !args.no_color))?;
        writeln!(out, "{}", render::summary(session.level()))?;
        writeln!(out, "fuel: {}", render::roster(session.level(), EntityKind::Pickup))?;
        writeln!(out, "VamPyros: {}", render::roster(session.level(), EntityKind::Hostile))?;
        let progress = session.progress();
        writeln!(
            out,
            "{} of {} VamPyros slain",
            progress.killed(),
            progress.total_hostiles()
        )?;
    }

    if args.die {
        let level = session.level_number();
        session.game_over()?;
        let text = messages::game_over_text(level);
        if args.json {
            eprintln!("{text}");
        } else {
            writeln!(out)?;
            writeln!(out, "{text}")?;
        }
    }

    Ok(())
}

/// Pick up a key; a fully opened arena just ignores it
fn collect_key(session: &mut Session) {
    match session.collect_key() {
        Ok(corner) => info!("key opened the {corner} corner"),
        Err(LevelError::NoCornersRemaining) => {}
        Err(err) => warn!("could not open an exit: {err}"),
    }
}

/// Explicit path, then the per-user options file, then defaults
fn load_options(path: Option<&Path>) -> Result<GenerationOptions, Box<dyn Error>> {
    if let Some(path) = path {
        return Ok(GenerationOptions::load_from_file(path)?);
    }
    match default_options_path() {
        Some(path) if path.exists() => {
            info!("loading options from {}", path.display());
            Ok(GenerationOptions::load_from_file(&path)?)
        }
        _ => Ok(GenerationOptions::default()),
    }
}

fn default_options_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vampyro").join("vampyrorc"))
}
