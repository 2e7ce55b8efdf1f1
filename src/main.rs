mod logging;
mod settings;

use std::{io, path::PathBuf};

use clap::{ArgAction, Parser};
use ctrailz::{AlgorithmType, Maze, MazeError};
use log::LevelFilter;
use thiserror::Error;

use settings::Settings;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid settings file: {0}")]
    Settings(#[from] toml::de::Error),
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Maze(#[from] MazeError),
}

#[derive(Parser, Debug)]
#[clap(version, about, name = "trailz")]
struct Args {
    #[clap(short, long, allow_negative_numbers = true, help = "Number of rows")]
    rows: Option<i32>,
    #[clap(short, long, allow_negative_numbers = true, help = "Number of columns")]
    cols: Option<i32>,
    #[clap(short, long, help = "Algorithm used to carve the maze")]
    algorithm: Option<AlgorithmType>,
    #[clap(short, long, help = "Seed for deterministic output")]
    seed: Option<u64>,
    #[clap(short = 'n', long, default_value_t = 1, help = "Number of mazes to print")]
    count: usize,
    #[clap(long, help = "Settings file, instead of the default one")]
    config: Option<PathBuf>,
    #[clap(short, long, action = ArgAction::Count, help = "More logging, can be repeated")]
    verbose: u8,
    #[clap(long, action, help = "Show settings path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "List available algorithms and quit")]
    list_algorithms: bool,
}

impl Args {
    fn to_settings(&self) -> Settings {
        let log_level = match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        };

        Settings {
            rows: self.rows,
            cols: self.cols,
            algorithm: self.algorithm,
            seed: self.seed,
            log_level: log_level.map(|l| l.to_string()),
        }
    }
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    if args.show_config_path {
        match Settings::default_path() {
            Some(path) => println!("{}", path.display()),
            None => println!("No config directory on this platform"),
        }
        return Ok(());
    }

    if args.list_algorithms {
        for algorithm in AlgorithmType::ALL {
            println!("{}", algorithm);
        }
        return Ok(());
    }

    let settings = Settings::load(args.config.as_deref())?.merge(args.to_settings());
    logging::init(settings.log_level())?;

    let mut maze = match settings.seed {
        Some(seed) => Maze::with_seed(
            settings.rows(),
            settings.cols(),
            settings.algorithm(),
            seed,
        )?,
        None => Maze::new(settings.rows(), settings.cols(), settings.algorithm())?,
    };
    log::info!("Seed: {}", maze.seed());

    for i in 0..args.count {
        if i > 0 {
            maze.rebuild(maze.algorithm())?;
            println!();
        }
        print!("{}", maze);
    }

    Ok(())
}
