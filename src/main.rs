use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use cavern::engine::{Output, OutputBlock};
use cavern::world::validate_world;
use cavern::{DEFAULT_WORLD, Session, load_world_from_file, load_world_from_str};
use tracing_subscriber::EnvFilter;

fn flush_output(out: Output) {
    let mut printed_anything = false;
    let mut started_events = false;

    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => {
                println!("\n{}", t);
                printed_anything = true;
            }
            OutputBlock::Text(line) => {
                println!("{}", line);
                printed_anything = true;
            }
            OutputBlock::Event(ev) => {
                if !started_events {
                    if printed_anything {
                        println!(); // visual separation before first event
                    }
                    started_events = true;
                }
                println!("{}", ev);
                printed_anything = true;
            }
            OutputBlock::Exits(exits) => {
                println!("{}", exits);
                printed_anything = true;
            }
        }
    }
}

fn main() -> io::Result<()> {
    // Logs go to stderr so they never mix with the game text.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let world_path: Option<PathBuf> = env::args().nth(1).map(PathBuf::from);

    let loaded = match &world_path {
        Some(path) => load_world_from_file(path),
        None => load_world_from_str(DEFAULT_WORLD),
    };

    let world = match loaded {
        Ok(w) => {
            if let Some(path) = &world_path {
                tracing::info!("Using world file: {}", path.display());
            }
            w
        }
        Err(e) => {
            let source = world_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<built-in>".to_string());
            eprintln!("Failed to load world file '{}': {e}", source);
            std::process::exit(1);
        }
    };

    for problem in validate_world(&world) {
        tracing::warn!("world problem: {}", problem);
    }

    let mut session = Session::new(world);
    flush_output(session.initialize());
    println!();
    println!("Type 'help' for a list of commands, 'quit' to exit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock();

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes_read = lines.read_line(&mut input)?;
        if bytes_read == 0 {
            println!("\nGoodbye!");
            break;
        }

        let (out, quit) = session.step(&input);
        flush_output(out);

        if quit {
            break;
        }
    }

    Ok(())
}
