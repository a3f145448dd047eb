//! wardscore-term library root.
//!
//! Re-exports the board internals so integration tests can exercise them
//! directly without driving the interactive loop.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod reference;
pub mod state;
pub mod table;

use std::io::{BufRead, Write};

use wardscore_engine::scoring::ScoringModes;

use cli::Cli;
use commands::Command;
use state::Board;

/// Interactive loop: read a command, apply it, repaint.
pub fn run(cli: Cli) -> eyre::Result<()> {
    let mut config = config::load_or_default()?;
    let mut modes = ScoringModes {
        strict: config.strict || cli.strict,
        cell_band_follows_overall: config.cell_band_follows_overall || cli.band_cells,
    };
    let color = config.color && !cli.plain;

    let mut board = Board::new();
    board.add_row();

    println!("wardscore — type 'help' for commands");
    print!("{}", table::render_board(&board, modes, color));

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let command = match commands::parse(trimmed) {
            Ok(c) => c,
            Err(e) => {
                println!("error: {e}");
                continue;
            }
        };

        let mut repaint = false;
        match command {
            Command::Quit => break,
            Command::Help => println!("{}", commands::help_text()),
            Command::Reference => println!("{}", reference::card()),
            Command::Print => print!("{}", table::print_snapshot(&board, modes)),
            Command::Show => repaint = true,
            Command::Add => {
                board.add_row();
                repaint = true;
            }
            Command::Remove { bed } => match board.remove_row(&bed) {
                Ok(()) => repaint = true,
                Err(e) => println!("error: {e}"),
            },
            Command::Set { bed, kind, value } => match board.set_field(&bed, kind, &value) {
                Ok(()) => repaint = true,
                Err(e) => println!("error: {e}"),
            },
            Command::Rename { bed, label } => match board.rename_bed(&bed, &label) {
                Ok(()) => repaint = true,
                Err(e) => println!("error: {e}"),
            },
            Command::Clear => {
                board.clear_values();
                repaint = true;
            }
            Command::Strict(on) => {
                modes.strict = on;
                config.strict = on;
                config::save(&config)?;
                repaint = true;
            }
            Command::CellsFollowBand(on) => {
                modes.cell_band_follows_overall = on;
                config.cell_band_follows_overall = on;
                config::save(&config)?;
                repaint = true;
            }
        }

        if repaint {
            print!("{}", table::render_board(&board, modes, color));
        }
    }

    Ok(())
}
