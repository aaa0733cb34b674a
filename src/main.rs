use std::io::{self, BufRead, Write};

use castle_adventure::engine::{Output, OutputBlock};
use castle_adventure::{Game, InterpreterState, castle_world};
use log::warn;

fn flush_output(out: Output) -> io::Result<()> {
    let mut stdout = io::stdout().lock();

    for block in out.blocks {
        match block {
            OutputBlock::Title(t) | OutputBlock::Text(t) => writeln!(stdout, "{}", t)?,
            OutputBlock::Entry(e) => writeln!(stdout, " - {}", e)?,
            OutputBlock::Rule { ch, width } => {
                writeln!(stdout, "{}", ch.to_string().repeat(width))?
            }
            OutputBlock::Prompt(p) => write!(stdout, "{} ", p)?,
        }
    }
    stdout.flush()
}

/// Next input line without its line ending, or `None` at end of input.
/// Bytes that are not UTF-8 become U+FFFD so the line still reaches the parser.
fn read_command_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let world = match castle_world() {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: failed to build the game world: {e}");
            eprintln!("Game cannot start due to initialization errors.");
            std::process::exit(1);
        }
    };

    println!("{}", "#".repeat(60));
    println!("Welcome to {}!", world.name);
    println!("{}", "#".repeat(60));
    if !world.desc.trim().is_empty() {
        println!("{}", world.desc.trim());
    }
    println!();

    let mut game = Game::new(world);
    println!(
        "Player starts in: {}",
        game.world.room(game.player.location).name
    );
    println!("Type 'help' for commands.\n");

    flush_output(game.initialize())?;

    let stdin = io::stdin();
    let mut lines = stdin.lock();

    while !game.is_terminated() {
        // no "> " while the quit prompt is waiting for its answer
        if game.state() == InterpreterState::Running {
            print!("\n> ");
            io::stdout().flush()?;
        }

        match read_command_line(&mut lines) {
            Ok(None) => {
                println!();
                flush_output(game.end_of_input())?;
            }
            Ok(Some(input)) => {
                let (out, _quit) = game.step(&input);
                flush_output(out)?;
            }
            Err(e) => {
                warn!("failed to read from stdin: {e}");
                println!();
                flush_output(game.end_of_input())?;
            }
        }
    }

    Ok(())
}
