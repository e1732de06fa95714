use anyhow::Context;
use clap::Parser;
use sketchpad::input::Platform;
use sketchpad::replay::Script;
use sketchpad::{Config, InputState, RecordingHost};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SKETCHPAD_GIT_HASH"), ")"),
    about = "Raster drawing engine with a selection clipboard"
)]
struct Cli {
    /// Replay a JSON event script against a fresh canvas
    #[arg(long, short = 'r', value_name = "SCRIPT")]
    replay: Option<PathBuf>,

    /// Print the final artwork pixel at X,Y (repeatable)
    #[arg(long, short = 'p', value_name = "X,Y", value_parser = parse_probe)]
    probe: Vec<(u32, u32)>,

    /// Use this config file instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn parse_probe(s: &str) -> Result<(u32, u32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x.trim().parse().map_err(|_| format!("bad X in '{}'", s))?;
    let y = y.trim().parse().map_err(|_| format!("bad Y in '{}'", s))?;
    Ok((x, y))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.replay else {
        // No flags: show usage
        println!("sketchpad: Raster drawing engine with a selection clipboard");
        println!();
        println!("Usage:");
        println!("  sketchpad --replay <SCRIPT> [--probe X,Y]...   Replay recorded input");
        println!("  sketchpad --help                             Show help");
        println!();
        println!("Configuration is read from ~/.config/sketchpad/config.toml");
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let settings = config.engine_settings(Platform::current())?;
    let script = Script::load(&script_path)?;

    let host = Rc::new(RefCell::new(RecordingHost::default()));
    let mut state = InputState::new(settings, Box::new(Rc::clone(&host)));

    log::info!(
        "Replaying {} events from {}",
        script.events.len(),
        script_path.display()
    );
    script.run(&mut state);

    for message in host.borrow().messages() {
        println!("notice: {}", message);
    }
    println!("status: {}", state.status());

    if !cli.probe.is_empty() {
        let snapshot = state
            .snapshot()
            .context("Canvas was never sized; add a resize event to the script")?;
        for (x, y) in &cli.probe {
            match snapshot.pixel(*x, *y) {
                Some(pixel) => println!("pixel {},{}: {}", x, y, pixel),
                None => println!("pixel {},{}: outside canvas", x, y),
            }
        }
    }

    state.teardown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_parses_coordinates() {
        assert_eq!(parse_probe("12,34"), Ok((12, 34)));
        assert_eq!(parse_probe(" 1 , 2 "), Ok((1, 2)));
        assert!(parse_probe("12").is_err());
        assert!(parse_probe("-1,2").is_err());
    }
}
