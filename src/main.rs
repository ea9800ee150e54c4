use std::process::ExitCode;

use clap::Parser;
use structure_bench::harness::{self, Config, Hint, Operation, Requirement, Structure};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Times classic data structures against an API of operations, and suggests the best fit.
#[derive(Parser, Debug)]
#[command(name = "structure-bench")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of synthetic data items to load each structure with
    #[arg(short = 'n', long, default_value_t = Config::DEFAULT_SIZE)]
    size: usize,

    /// Number of buckets in the hash table
    #[arg(long, default_value_t = Config::DEFAULT_HASH_CAPACITY)]
    hash_capacity: usize,

    /// Seed for shuffling the synthetic data
    #[arg(long, default_value_t = Config::DEFAULT_SEED)]
    seed: u64,

    /// Operations to time, in order
    #[arg(long, value_delimiter = ',', default_values_t = Operation::ALL)]
    api: Vec<Operation>,

    /// Structures to compare (array, stack, queue, linked list, hash table, tree)
    #[arg(long, value_delimiter = ',')]
    structures: Vec<Structure>,

    /// Requirements of the API (random access, sorting, insertion, deletion, ordered)
    #[arg(long, value_delimiter = ',')]
    requires: Vec<Requirement>,

    /// Preferences used to order suitable structures (search, memory, balanced)
    #[arg(long, value_delimiter = ',')]
    prefer: Vec<Hint>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let structures = match args.structures.is_empty() {
            true => Structure::ALL.into_iter().collect(),
            false => args.structures.into_iter().collect(),
        };

        Config {
            size: args.size,
            hash_capacity: args.hash_capacity,
            seed: args.seed,
            api: args.api.into_iter().collect(),
            structures,
            requirements: args.requires.into_iter().collect(),
            hints: args.prefer.into_iter().collect(),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from(Args::parse());
    let comparison = harness::compare(&config);

    let api = config.api.iter().map(Operation::to_string).collect::<Vec<_>>();
    println!("Timing {} over {} data items:", api.join(", "), config.size);

    for timing in comparison.rank() {
        println!("  {timing}");
    }

    for (structure, error) in comparison.failures.iter() {
        println!("  {structure}: failed ({error})");
    }

    match comparison.best() {
        Some(best) => println!("The best data structure is: {}", best.structure),
        None => println!("No data structure completed the API."),
    }

    let candidates = comparison.candidates.iter().map(Structure::to_string).collect::<Vec<_>>();
    match candidates.is_empty() {
        true => println!("No data structure suits the requirements."),
        false => println!("Suitable data structures: {}", candidates.join(", ")),
    }

    match comparison.failures.is_empty() {
        true => ExitCode::SUCCESS,
        false => ExitCode::FAILURE,
    }
}
