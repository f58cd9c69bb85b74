use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::{fs, path::PathBuf};
use sudogen::{convert, solve_report, Generator};

#[derive(Parser, Debug)]
#[command(name = "sudogen", version, about = "Sudoku puzzle generator and solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a puzzle (81 chars with 0 or . for blanks) from a file or stdin.
    Solve {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Generate a puzzle at the requested difficulty.
    Generate {
        #[arg(short, long, value_enum, default_value_t = LevelArg::Easy)]
        level: LevelArg,

        /// Seed the generator for a reproducible puzzle.
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the puzzle as JSON instead of boards.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LevelArg {
    Easy,
    Medium,
    Difficult,
}

impl LevelArg {
    fn selector(self) -> i32 {
        match self {
            LevelArg::Easy => 1,
            LevelArg::Medium => 2,
            LevelArg::Difficult => 3,
        }
    }
}

fn read_puzzle(input: &Option<PathBuf>) -> Result<Vec<u8>> {
    let s = match input {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => {
            use std::io::Read;
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let filtered: String = s
        .chars()
        .filter(|ch| matches!(ch, '0'..='9' | '.'))
        .map(|ch| if ch == '.' { '0' } else { ch })
        .collect();
    if filtered.chars().count() < 81 {
        bail!("expected at least 81 digits/dots in input (have {})", filtered.chars().count())
    }
    let compact: String = filtered.chars().take(81).collect();
    Ok(convert::default_grid_to_board(&compact)?)
}

fn render(cells: &[u8]) -> String {
    let mut s = String::new();
    for r in 0..9 {
        if r % 3 == 0 {
            s.push_str("+-------+-------+-------+\n");
        }
        for c in 0..9 {
            if c % 3 == 0 {
                s.push_str("| ");
            }
            let d = cells[r * 9 + c];
            if d == 0 {
                s.push_str(&"·".dimmed().to_string());
            } else {
                s.push(char::from(b'0' + d));
            }
            s.push(' ');
        }
        s.push_str("|\n");
    }
    s.push_str("+-------+-------+-------+\n");
    s
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve { input } => {
            let puzzle = read_puzzle(&input)?;
            let report = solve_report(&puzzle)?;
            if !report.solved() {
                bail!("puzzle has no completion");
            }
            println!("Possibility: {}%", report.possibility());
            println!("{}", render(report.grid()));
        }
        Command::Generate { level, seed, json } => {
            let mut generator = Generator::new(seed);
            let puzzle = generator.generate(level.selector())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&puzzle)?);
            } else {
                println!("{} ({}%)", "Puzzle".bold(), puzzle.possibility());
                println!("{}", render(puzzle.board()));
                println!("{}", "Solution".bold());
                println!("{}", render(puzzle.solution()));
            }
        }
    }
    Ok(())
}
