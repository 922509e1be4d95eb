use anyhow::Result;
use clap::Parser;
use rookery::engine::{Phase, TurnEngine};
use rookery::piece::PieceKind;
use rookery::save;
use rookery::square::Square;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Two-player terminal chess", long_about = None)]
struct Args {
    /// Load a previously saved game instead of showing the menu
    #[arg(long)]
    load: Option<PathBuf>,

    /// Where the 'save' command writes the game
    #[arg(long, default_value = "chess_save.json")]
    save_file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut engine = match &args.load {
        Some(path) => save::load_from_file(path)?,
        None => menu(&mut input)?,
    };

    while !engine.is_over() {
        match engine.phase() {
            Phase::Selecting => {
                if !selection_round(&mut engine, &mut input, &args.save_file)? {
                    return Ok(());
                }
            }
            Phase::Moving { .. } => destination_round(&mut engine, &mut input)?,
            Phase::Promoting { .. } => promotion_round(&mut engine, &mut input)?,
            Phase::Over => break,
        }
    }

    if let Some(winner) = engine.winner() {
        println!("\nThe winner is {winner}\n");
    }
    Ok(())
}

fn menu(input: &mut impl BufRead) -> Result<TurnEngine> {
    println!("----------------------------------------");
    println!("                 Chess");
    println!("----------------------------------------");
    println!("             1. New game");
    println!("             2. Load game");
    print!("> ");
    io::stdout().flush()?;
    let choice = read_line(input)?;
    if choice.trim() == "2" {
        print!("Path to the save file: ");
        io::stdout().flush()?;
        let path = read_line(input)?;
        return save::load_from_file(PathBuf::from(path.trim()).as_path());
    }
    Ok(TurnEngine::new())
}

/// One pass of the selection prompt. Returns false when the game should
/// stop without a winner banner (saved and quit).
fn selection_round(
    engine: &mut TurnEngine,
    input: &mut impl BufRead,
    save_file: &PathBuf,
) -> Result<bool> {
    let state = engine.state();
    println!("\n{}", engine.board());
    println!("----------------------------------------");
    println!("       Current round: {}", state.side_to_move);
    println!("            Turn: {}", state.turn_counter);
    println!("Please select a chess piece (Ex: a1)");
    println!("Enter 'resign' to forfeit the game");
    println!("Enter 'save' to save & quit the game");
    println!("----------------------------------------");

    let line = read_line(input)?;
    let line = line.trim();
    match line {
        "resign" => {
            engine.resign().ok();
            Ok(true)
        }
        "save" => {
            save::save_to_file(engine, save_file)?;
            println!("Game has been saved.");
            Ok(false)
        }
        _ => {
            match line.parse::<Square>().and_then(|sq| engine.select(sq)) {
                Ok(()) => {}
                Err(e) => println!("{e}"),
            }
            Ok(true)
        }
    }
}

fn destination_round(engine: &mut TurnEngine, input: &mut impl BufRead) -> Result<()> {
    println!("\n{}", engine.board());
    println!("----------------------------------------");
    println!("Please select the destination (Ex: a1)");
    println!("Enter 'redo' to reselect chess piece");
    println!("----------------------------------------");

    let line = read_line(input)?;
    let line = line.trim();
    if line == "redo" {
        engine.reselect();
        return Ok(());
    }
    match line.parse::<Square>().and_then(|sq| engine.play(sq)) {
        Ok(outcome) => {
            if let Some(victim) = outcome.captured {
                println!("Captured {:?}.", victim.kind);
            }
            if outcome.gives_check {
                println!("                 CHECK");
            }
        }
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn promotion_round(engine: &mut TurnEngine, input: &mut impl BufRead) -> Result<()> {
    println!("----------------------------------------");
    println!("            Promote the pawn?");
    println!("  To promote it, type in a piece name");
    println!("  Ex: [Pawn, Knight, Rook, Bishop, Queen]");
    println!("  Type anything else to ignore promotion");
    println!("----------------------------------------");

    let line = read_line(input)?;
    let kind = line.trim().parse::<PieceKind>().ok();
    engine.promote(kind).ok();
    Ok(())
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
