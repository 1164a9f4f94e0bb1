//! Ashen Keep - Entry Point
//!
//! Loads a dungeon from TOML and plays it on the console. The player picks
//! from a numbered menu each turn; mimics are driven by the hostile AI.
//! `--script` replaces the console with a fixed list of menu picks for
//! headless runs.

use ashen_keep::actions::Action;
use ashen_keep::core::config::{load_config, GameConfig};
use ashen_keep::core::error::Result;
use ashen_keep::engine::{
    Decision, DecisionSource, HostileAi, ScriptedDecisions, SplitDecisions, TurnEngine,
};
use ashen_keep::entity::Actor;
use ashen_keep::world::GameMap;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Ashen Keep - open chests, fight mimics, collect souls
#[derive(Parser, Debug)]
#[command(name = "ashen-keep")]
struct Args {
    /// Dungeon config (TOML)
    #[arg(long, default_value = "data/keep.toml")]
    config: PathBuf,

    /// Random seed for deterministic runs (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated menu picks for headless play; `w` waits
    #[arg(long)]
    script: Option<String>,

    /// Maximum number of turns to play
    #[arg(long, default_value_t = 200)]
    turns: usize,

    /// Print the turn log as JSON when the game ends
    #[arg(long)]
    json: bool,
}

/// Reads menu picks from stdin
struct ConsoleDecisions {
    quit: bool,
}

impl DecisionSource for ConsoleDecisions {
    fn decide(&mut self, actor: &Actor, map: &GameMap, actions: &[Action]) -> Decision {
        println!();
        println!(
            "--- {} | Souls: {} | Items: {} ---",
            actor,
            actor.souls,
            actor.inventory.len()
        );
        let mut section = None;
        for (i, action) in actions.iter().enumerate() {
            let category = action.category();
            if section != Some(category) {
                println!(" {}:", category.heading());
                section = Some(category);
            }
            println!("  {:>2}) {}", i + 1, action.menu_description(actor, map));
        }
        println!("   w) Wait");
        println!("   q) Quit");

        loop {
            print!("> ");
            if io::stdout().flush().is_err() {
                self.quit = true;
                return Decision::Skip;
            }

            let mut input = String::new();
            match io::stdin().lock().read_line(&mut input) {
                Ok(0) | Err(_) => {
                    self.quit = true;
                    return Decision::Skip;
                }
                Ok(_) => {}
            }

            match input.trim() {
                "q" | "quit" => {
                    self.quit = true;
                    return Decision::Skip;
                }
                "" | "w" | "wait" => return Decision::Skip,
                other => match other.parse::<usize>() {
                    Ok(n) if n >= 1 && n <= actions.len() => return Decision::Act(actions[n - 1]),
                    _ => println!("Pick 1-{}, w or q", actions.len()),
                },
            }
        }
    }
}

fn parse_script(script: &str) -> ScriptedDecisions {
    ScriptedDecisions::new(script.split(',').map(|pick| {
        // Script picks are 1-based like the console menu
        pick.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
    }))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ashen_keep=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = if args.config.exists() {
        load_config(&args.config)?
    } else {
        tracing::warn!(path = ?args.config, "config not found, using built-in dungeon");
        GameConfig::default()
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let (mut engine, player) = TurnEngine::from_config(config)?;
    println!("\n=== ASHEN KEEP ===");

    match &args.script {
        Some(script) => {
            let mut decisions = SplitDecisions {
                player: parse_script(script),
                hostile: HostileAi,
            };
            engine.run(&mut decisions, args.turns)?;
            for entry in engine.log().entries() {
                println!("[{}] {}", entry.turn, entry.text);
            }
        }
        None => {
            let mut decisions = SplitDecisions {
                player: ConsoleDecisions { quit: false },
                hostile: HostileAi,
            };
            while engine.turn() < args.turns as u64 && engine.has_players() {
                match engine.play_turn(&mut decisions) {
                    Ok(outcome) => println!("{}", outcome.description),
                    Err(e) => println!("Cannot do that: {}", e),
                }
                if decisions.player.quit {
                    break;
                }
            }
        }
    }

    match engine.map().actor(player) {
        Ok(p) => println!("\n{} leaves the keep with {} souls.", p.name, p.souls),
        Err(_) => println!("\nYOU DIED"),
    }

    if args.json {
        println!("{}", engine.log().to_json()?);
    }
    Ok(())
}
