//! Gridpad - a fixed-size grid editor in the terminal

mod config;
mod error;
mod logging;
mod tui;

use anyhow::Context;
use config::Config;
use std::env;
use std::path::PathBuf;

fn print_usage() {
    eprintln!("Usage: gridpad [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -r, --rows <N>            Number of rows (default: 10)");
    eprintln!("  -c, --cols <N>            Number of columns (default: 10)");
    eprintln!("  --config <FILE>           Read settings from FILE");
    eprintln!("  --no-config               Ignore the user config file");
    eprintln!("  -h, --help                Print help");
}

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    rows: Option<usize>,
    cols: Option<usize>,
    config_file: Option<PathBuf>,
    no_config: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                cli.help = true;
                return Ok(cli);
            }
            "-r" | "--rows" => {
                i += 1;
                cli.rows = Some(parse_extent(args.get(i), "--rows")?);
            }
            "-c" | "--cols" => {
                i += 1;
                cli.cols = Some(parse_extent(args.get(i), "--cols")?);
            }
            "--config" => {
                i += 1;
                let path = args.get(i).ok_or("--config requires a file path")?;
                cli.config_file = Some(PathBuf::from(path));
            }
            "--no-config" => cli.no_config = true,
            arg if arg.starts_with('-') => return Err(format!("Unknown option: {}", arg)),
            arg => return Err(format!("Unexpected argument: {}", arg)),
        }
        i += 1;
    }
    Ok(cli)
}

fn parse_extent(value: Option<&String>, flag: &str) -> Result<usize, String> {
    let value = value.ok_or_else(|| format!("{} requires a value", flag))?;
    let n = value
        .parse::<usize>()
        .map_err(|_| format!("{} expects a positive integer, got '{}'", flag, value))?;
    config::validate_extent(flag, n)
}

/// Command-line sizes win over the config file.
fn apply_cli(config: &mut Config, cli: &CliArgs) {
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.cols = cols;
    }
}

fn run(cli: CliArgs) -> anyhow::Result<()> {
    let (mut config, warnings) = config::load_config(cli.config_file.as_ref(), !cli.no_config);
    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }
    apply_cli(&mut config, &cli);

    match logging::init(&config.log_level) {
        Ok(dir) => tracing::info!(log_dir = %dir.display(), ?config, "gridpad starting"),
        Err(e) => eprintln!("Warning: {}", e),
    }
    for warning in warnings {
        tracing::warn!(%warning, "config");
    }

    let mut app = tui::App::from_config(&config).context("invalid grid size")?;
    tui::run(&mut app).context("terminal UI failed")?;
    tracing::info!("gridpad exiting");
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };
    if cli.help {
        print_usage();
        return;
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("gridpad")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_arguments_use_defaults() {
        assert_eq!(parse_args(&args(&[])), Ok(CliArgs::default()));
    }

    #[test]
    fn parses_size_and_config_flags() {
        let cli = parse_args(&args(&["-r", "5", "--cols", "26", "--config", "my.toml", "--no-config"]))
            .unwrap();
        assert_eq!(cli.rows, Some(5));
        assert_eq!(cli.cols, Some(26));
        assert_eq!(cli.config_file, Some(PathBuf::from("my.toml")));
        assert!(cli.no_config);
    }

    #[test]
    fn help_stops_parsing() {
        let cli = parse_args(&args(&["--help", "--bogus"])).unwrap();
        assert!(cli.help);
    }

    #[test]
    fn rejects_bad_sizes() {
        assert!(parse_args(&args(&["--rows"])).unwrap_err().contains("requires a value"));
        assert!(parse_args(&args(&["--rows", "abc"])).unwrap_err().contains("positive integer"));
        assert!(parse_args(&args(&["--cols", "0"])).is_err());
        assert!(parse_args(&args(&["--cols", "100000"])).is_err());
    }

    #[test]
    fn cli_sizes_override_the_config() {
        let mut config = Config {
            rows: 20,
            cols: 5,
            col_width: 8,
            ..Config::default()
        };
        let cli = parse_args(&args(&["--cols", "30"])).unwrap();
        apply_cli(&mut config, &cli);

        assert_eq!(config.rows, 20);
        assert_eq!(config.cols, 30);
        assert_eq!(config.col_width, 8);

        apply_cli(&mut config, &parse_args(&args(&["-r", "3"])).unwrap());
        assert_eq!((config.rows, config.cols), (3, 30));
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(parse_args(&args(&["--formula"])).unwrap_err().contains("Unknown option"));
        assert!(parse_args(&args(&["sheet.csv"])).unwrap_err().contains("Unexpected argument"));
    }
}
