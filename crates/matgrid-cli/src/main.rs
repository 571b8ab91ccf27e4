use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use matgrid_cli::commands::{prime_table, random_values};
use matgrid_cli::config::{load_demo_config, DemoConfig};
use matgrid_cli::demo::{run_demo, write_matrix};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATGRID_LOG", "error,matgrid=info"))
        .init();

    let matches = Command::new("matgrid")
        .version(clap::crate_version!())
        .about("Small dense matrix toolkit: distribution, reshape, transpose, addition")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Run the matrix walkthrough")
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON demo configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for the random fill. Overrides the seed in the configuration file.")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("primes")
                .about("Print primes up to LIMIT as a table")
                .arg(
                    Arg::new("limit")
                        .help("Largest number to test")
                        .required(true)
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("low")
                        .long("low")
                        .help("Only print primes strictly greater than this")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("high")
                        .long("high")
                        .help("Only print primes strictly less than this")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("columns")
                        .short('c')
                        .long("columns")
                        .help("Number of primes per row")
                        .default_value("10")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("random")
                .about("Print uniformly distributed integers from [MIN, MAX]")
                .arg(
                    Arg::new("min")
                        .long("min")
                        .default_value("100")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("max")
                        .long("max")
                        .default_value("999")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .default_value("10")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("demo", sub_m)) => handle_demo(sub_m),
        Some(("primes", sub_m)) => handle_primes(sub_m),
        Some(("random", sub_m)) => handle_random(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_demo(matches: &ArgMatches) -> Result<()> {
    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("[matgrid::demo] Using config: {:?}", config_path);
        load_demo_config(config_path)?
    } else {
        DemoConfig::default()
    };

    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(*seed);
    }

    if matches.get_one::<PathBuf>("config").is_none() {
        let default_json = serde_json::to_string_pretty(&config).unwrap_or_default();
        eprintln!("[matgrid::demo] No config provided; using defaults:\n{}", default_json);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run_demo(&config, &mut out) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Demo failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_primes(matches: &ArgMatches) -> Result<()> {
    let limit = *matches.get_one::<u64>("limit").unwrap();
    let low = matches.get_one::<u64>("low").copied();
    let high = matches.get_one::<u64>("high").copied();
    let columns = *matches.get_one::<usize>("columns").unwrap();

    let table = prime_table(limit, low, high, columns)?;
    let stdout = std::io::stdout();
    write_matrix(&mut stdout.lock(), "Primes", &table)?;
    Ok(())
}

fn handle_random(matches: &ArgMatches) -> Result<()> {
    let min = *matches.get_one::<u64>("min").unwrap();
    let max = *matches.get_one::<u64>("max").unwrap();
    let count = *matches.get_one::<usize>("count").unwrap();
    let seed = matches.get_one::<u64>("seed").copied();

    let values = random_values(min, max, count, seed)?;
    let line: Vec<String> = values.iter().map(u64::to_string).collect();
    println!("{}", line.join(" "));
    Ok(())
}
