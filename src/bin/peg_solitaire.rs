//! Play Peg Solitaire in the terminal.
//!
//! Moves are typed as four numbers, `col row col row`: the peg to move and
//! the empty slot it jumps into. `hint` lists the legal moves and `quit`
//! leaves.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use peg_solitaire::rules;
use peg_solitaire::{render, BoardConfig, ClickOutcome, Move, Outcome, Session, TokenSet};

#[derive(Parser, Debug)]
#[command(author, version, about = "Peg Solitaire in the terminal")]
struct Cli {
    /// TOML file with `size`, `seed` and `tokens`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of the board (overrides the config file)
    #[arg(long)]
    size: Option<usize>,

    /// Seed for the empty slot (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Token set: `default` or `disks` (overrides the config file)
    #[arg(long)]
    tokens: Option<TokenSet>,
}

impl Cli {
    fn board_config(&self) -> Result<BoardConfig> {
        let mut config = match &self.config {
            Some(path) => BoardConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => BoardConfig::default(),
        };
        if let Some(size) = self.size {
            config = config.with_size(size);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(tokens) = self.tokens {
            config = config.with_tokens(tokens);
        }
        config.validate()?;
        Ok(config)
    }
}

enum Command {
    Play(Move),
    Hint,
    Quit,
}

fn parse_command(line: &str) -> Result<Command> {
    match line.trim() {
        "quit" | "q" => return Ok(Command::Quit),
        "hint" | "h" => return Ok(Command::Hint),
        _ => {}
    }

    let indices = line
        .split_whitespace()
        .map(|word| word.parse::<usize>().with_context(|| format!("'{word}' is not a slot index")))
        .collect::<Result<Vec<_>>>()?;
    let Ok(indices) = <[usize; 4]>::try_from(indices) else {
        bail!("expected four numbers: col row col row");
    };
    Ok(Command::Play(Move::from_indices(indices)))
}

fn announce(outcome: Outcome) {
    match outcome {
        Outcome::Won => println!("CONGRATS, YOU WIN!!"),
        Outcome::Stuck { score } => println!("Good! Your score is {score}!"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.board_config()?;
    let tokens = config.tokens.strings();

    let mut rng = config.rng();
    info!("new {0}x{0} game, seed {1}", config.size, rng.seed());
    let mut session = Session::new(rules::starting_board(config.size, &mut rng));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", render(session.board(), tokens));

    if let Some(outcome) = session.outcome() {
        announce(outcome);
        return Ok(());
    }

    loop {
        print!("move (col row col row): ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{err:#}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Hint => {
                for mv in rules::all_valid_moves(session.board()) {
                    println!("  {mv}");
                }
            }
            Command::Play(mv) => match session.play(mv) {
                ClickOutcome::Moved { outcome, .. } => {
                    println!("{}", render(session.board(), tokens));
                    if let Some(outcome) = outcome {
                        announce(outcome);
                        break;
                    }
                }
                _ => println!("invalid move!!"),
            },
        }
    }

    Ok(())
}
