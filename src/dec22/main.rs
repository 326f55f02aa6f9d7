use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cube_walker::{Scenario, Wrap};

type Result<T> = std::result::Result<T, anyhow::Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Part A: wrap around the flat drawing.
    Flat,
    /// Part B: fold the net into a cube.
    Cube,
    Both,
}

/// Walk a path across a cube net and print the final password.
#[derive(Parser, Debug)]
struct Cli {
    /// Puzzle input; read from stdin when omitted.
    input: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Mode::Both)]
    wrap: Mode,
    /// Print the face layout and seams to stderr.
    #[arg(long)]
    verbose: bool,
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn answer(scenario: &Scenario, wrap: Wrap, label: &str, verbose: bool) -> Result<()> {
    let net = scenario.surface(wrap)?;
    if verbose {
        eprintln!("Face size {}", net.side_length());
        eprint!(
            "{}",
            net.layout()
                .show(|id| id.map_or(".".to_string(), |id| id.to_string()))
        );
        eprintln!("{:?} seams:", wrap);
        eprintln!("{}", net.describe());
    }
    println!("Answer part {}: {}", label, scenario.walk(&net)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let buffer = read_input(&cli.input)?;
    let scenario = Scenario::parse(&buffer)?;

    if cli.verbose {
        let map = &scenario.map;
        eprintln!("Full map {}x{}", map.number_of_columns, map.number_of_rows);
        eprintln!("Path has {} instructions", scenario.instructions.len());
    }

    if cli.wrap != Mode::Cube {
        answer(&scenario, Wrap::Flat, "A", cli.verbose)?;
    }
    if cli.wrap != Mode::Flat {
        answer(&scenario, Wrap::Cube, "B", cli.verbose)?;
    }
    Ok(())
}
