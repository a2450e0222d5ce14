//! Command-line front end.
//!
//! ```text
//! u-cpusched FILE...                         print results for each file
//! u-cpusched --dir DIR [--count N] [--prefix P]   batch over DIR/P-NN.txt
//! u-cpusched --random SEED                   simulate a generated workload
//! ```
//!
//! `RUST_LOG` controls verbosity (default `info`); `SCHEDSIM_LOG_JSON=1`
//! switches to JSON log lines.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use u_cpusched::config::BatchConfig;
use u_cpusched::io::{format_results, read_process_file, run_batch};
use u_cpusched::scheduler::{run_all, MetricTriple};
use u_cpusched::InputError;
use u_cpusched::workload::BernoulliWorkload;

/// What the user asked for.
enum Command {
    Files(Vec<PathBuf>),
    Batch(BatchConfig),
    Random(u64),
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let use_json = std::env::var("SCHEDSIM_LOG_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Parses arguments. `--flag=value` and `--flag value` are both accepted.
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, String> {
    let mut files = Vec::new();
    let mut batch: Option<BatchConfig> = None;
    let mut count: Option<u32> = None;
    let mut prefix: Option<String> = None;
    let mut seed: Option<u64> = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if arg.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |name: &str| {
            inline
                .clone()
                .or_else(|| args.next())
                .ok_or_else(|| format!("{name} requires a value"))
        };

        match flag.as_str() {
            "--dir" => batch = Some(BatchConfig::from_env().with_input_dir(value("--dir")?)),
            "--count" => {
                let v = value("--count")?;
                count = Some(v.parse().map_err(|_| format!("invalid --count '{v}'"))?);
            }
            "--prefix" => prefix = Some(value("--prefix")?),
            "--random" => {
                let v = value("--random")?;
                seed = Some(v.parse().map_err(|_| format!("invalid --random seed '{v}'"))?);
            }
            other if other.starts_with("--") => return Err(format!("unknown option '{other}'")),
            _ => files.push(PathBuf::from(arg)),
        }
    }

    if let Some(seed) = seed {
        return Ok(Command::Random(seed));
    }
    if batch.is_none() && files.is_empty() {
        // Fall back to the environment-configured batch directory.
        batch = Some(BatchConfig::from_env());
    }
    match batch {
        Some(mut config) if files.is_empty() => {
            if let Some(count) = count {
                config.count = count;
            }
            if let Some(prefix) = prefix {
                config.prefix = prefix;
            }
            Ok(Command::Batch(config))
        }
        Some(_) => Err("--dir cannot be combined with file arguments".to_string()),
        None => Ok(Command::Files(files)),
    }
}

fn simulate_file(path: &Path) -> Result<[MetricTriple; 4], InputError> {
    let set = read_process_file(path)?;
    Ok(run_all(&set)?)
}

fn run(command: Command) -> Result<bool, Box<dyn Error>> {
    match command {
        Command::Files(files) => {
            let mut ok = true;
            for path in files {
                match simulate_file(&path) {
                    Ok(results) => {
                        println!("# {}", path.display());
                        print!("{}", format_results(&results));
                    }
                    Err(e) => {
                        error!(file = %path.display(), error = %e, "simulation failed");
                        ok = false;
                    }
                }
            }
            Ok(ok)
        }
        Command::Batch(config) => {
            info!(dir = %config.dir().display(), count = config.count, "running batch");
            let summary = run_batch(&config)?;
            Ok(summary.is_complete())
        }
        Command::Random(seed) => {
            let set = BernoulliWorkload::default().generate(seed)?;
            info!(seed, processes = set.len(), quantum = set.quantum(), "generated workload");
            print!("{}", format_results(&run_all(&set)?));
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("usage: u-cpusched [FILE...] | --dir DIR [--count N] [--prefix P] | --random SEED");
            return ExitCode::from(2);
        }
    };

    match run(command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "fatal");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_files() {
        match parse_args(args(&["a.txt", "b.txt"])).unwrap() {
            Command::Files(files) => assert_eq!(files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]),
            _ => panic!("expected files"),
        }
    }

    #[test]
    fn test_parse_batch() {
        match parse_args(args(&["--dir", "/data", "--count=3", "--prefix", "CASE"])).unwrap() {
            Command::Batch(config) => {
                assert_eq!(config.dir(), Path::new("/data"));
                assert_eq!(config.count, 3);
                assert_eq!(config.prefix, "CASE");
            }
            _ => panic!("expected batch"),
        }
    }

    #[test]
    fn test_parse_random() {
        assert!(matches!(parse_args(args(&["--random=9"])).unwrap(), Command::Random(9)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(args(&["--bogus"])).is_err());
        assert!(parse_args(args(&["--count", "x"])).is_err());
        assert!(parse_args(args(&["--dir"])).is_err());
        assert!(parse_args(args(&["--dir", "d", "f.txt"])).is_err());
    }
}
