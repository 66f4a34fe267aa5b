use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use mapforge_persist::{convert_file, PersistError};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut source: Option<PathBuf> = None;
    let mut dest: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
            other => {
                if source.is_none() {
                    source = Some(PathBuf::from(other));
                } else if dest.is_none() {
                    dest = Some(PathBuf::from(other));
                } else {
                    eprintln!("Unexpected argument: {}", other);
                    print_usage();
                    process::exit(1);
                }
            }
        }
        i += 1;
    }

    let source = source.unwrap_or_else(|| prompt("Path to the legacy world file"));
    let dest = dest.unwrap_or_else(|| prompt("Path for the upgraded world file"));

    match convert_file(&source, &dest) {
        Ok(_) => {
            log::info!("Conversion complete.");
        }
        Err(err @ PersistError::Io(_)) => {
            eprintln!("ERROR: {}", err);
            process::exit(1);
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            process::exit(2);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: map-convert [SOURCE] [DEST]");
    eprintln!("Upgrades a legacy world map file to the current format.");
    eprintln!("  SOURCE       legacy map file to read (prompted for when omitted)");
    eprintln!("  DEST         path for the upgraded file (prompted for when omitted)");
    eprintln!("  -h, --help   Print this help");
}

fn prompt(label: &str) -> PathBuf {
    print!("{}: ", label);
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        eprintln!("ERROR: could not read from standard input");
        process::exit(1);
    }
    PathBuf::from(line.trim())
}
