use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;

use fancylists::{Config, NumberingStyle, classify_marker, parse, render};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(explicit: Option<&Path>, file: &Option<PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = fancylists::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    Ok(cfg)
}

#[derive(Serialize)]
struct MarkerReport<'a> {
    marker: &'a str,
    style: Option<NumberingStyle>,
    start: Option<u64>,
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            print!("{}", render(&input, Some(cfg)));
            Ok(())
        }
        Commands::Parse { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            let tree = parse(&input, Some(cfg));
            println!("{:#?}", tree);
            Ok(())
        }
        Commands::Classify { markers } => {
            let cfg = load_config(cli.config.as_deref(), &None)?;
            for marker in &markers {
                let token = marker.strip_suffix('.').unwrap_or(marker);
                let numbering = classify_marker(token, &cfg);
                let report = MarkerReport {
                    marker: token,
                    style: numbering.map(|n| n.style),
                    start: numbering.map(|n| n.start),
                };
                let line = serde_json::to_string(&report).map_err(io::Error::other)?;
                println!("{line}");
            }
            Ok(())
        }
    }
}
