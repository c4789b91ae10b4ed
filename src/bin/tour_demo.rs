//! Runs any of the metaheuristics on a bundled instance and prints the
//! best tour found.
//!
//! Built with the `cli` feature.
//!
//! ```text
//! tour-demo --instance cities10 ga --selection rank --crossover two-point
//! RUST_LOG=tour_metaheur=trace tour-demo --instance tasks6 --seed 7 tabu
//! ```

use std::error::Error;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tour_metaheur::ga::{Crossover, GaConfig, Selection};
use tour_metaheur::sa::SaConfig;
use tour_metaheur::tabu::TabuConfig;
use tour_metaheur::{instances, solve, Algorithm, CostMatrix, TourKind};

#[derive(Parser)]
#[command(name = "tour-demo")]
#[command(version)]
#[command(about = "GA, simulated annealing and tabu search on small TSP and scheduling instances")]
struct Cli {
    /// Bundled instance to solve
    #[arg(short, long, value_enum, default_value = "cities10")]
    instance: Instance,

    /// Random seed (drawn from the OS when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(subcommand)]
    algorithm: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Instance {
    /// 10-city symmetric TSP, closed tours
    Cities10,
    /// 6-task changeover times, open sequences
    Tasks6,
}

impl Instance {
    fn load(self) -> (CostMatrix, TourKind) {
        match self {
            Instance::Cities10 => (instances::cities10(), TourKind::Closed),
            Instance::Tasks6 => (instances::tasks6(), TourKind::Open),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Genetic algorithm
    Ga {
        #[arg(long, default_value = "rank")]
        selection: Selection,

        /// uniform, one-point or two-point (or 1, 2, 3)
        #[arg(long, default_value = "uniform")]
        crossover: Crossover,

        #[arg(long, default_value_t = 20)]
        population_size: usize,

        #[arg(long, default_value_t = 200)]
        generations: usize,

        #[arg(long, default_value_t = 0.2)]
        mutation_rate: f64,
    },
    /// Simulated annealing
    Sa {
        #[arg(long, default_value_t = 100.0)]
        initial_temperature: f64,

        #[arg(long, default_value_t = 1.0)]
        min_temperature: f64,

        #[arg(long, default_value_t = 0.95)]
        alpha: f64,

        #[arg(long, default_value_t = 1000)]
        max_iterations: usize,
    },
    /// Tabu search
    Tabu {
        #[arg(long, default_value_t = 1000)]
        max_iterations: usize,

        #[arg(long, default_value_t = 50)]
        tabu_tenure: usize,
    },
}

impl Command {
    fn into_algorithm(self, tour: TourKind) -> Algorithm {
        match self {
            Command::Ga {
                selection,
                crossover,
                population_size,
                generations,
                mutation_rate,
            } => GaConfig::new(tour)
                .with_selection(selection)
                .with_crossover(crossover)
                .with_population_size(population_size)
                .with_generations(generations)
                .with_mutation_rate(mutation_rate)
                .into(),
            Command::Sa {
                initial_temperature,
                min_temperature,
                alpha,
                max_iterations,
            } => SaConfig::new(tour)
                .with_initial_temperature(initial_temperature)
                .with_min_temperature(min_temperature)
                .with_alpha(alpha)
                .with_max_iterations(max_iterations)
                .into(),
            Command::Tabu {
                max_iterations,
                tabu_tenure,
            } => TabuConfig::new(tour)
                .with_max_iterations(max_iterations)
                .with_tabu_tenure(tabu_tenure)
                .into(),
        }
    }
}

fn with_seed(algorithm: Algorithm, seed: Option<u64>) -> Algorithm {
    let Some(seed) = seed else {
        return algorithm;
    };
    match algorithm {
        Algorithm::Genetic(config) => config.with_seed(seed).into(),
        Algorithm::Annealing(config) => config.with_seed(seed).into(),
        Algorithm::Tabu(config) => config.with_seed(seed).into(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (matrix, tour) = cli.instance.load();
    let algorithm = with_seed(cli.algorithm.into_algorithm(tour), cli.seed);

    info!(
        algorithm = algorithm.name(),
        items = matrix.size(),
        tour = %tour,
        "solving"
    );
    let start = Instant::now();
    let result = solve(&matrix, &algorithm)?;
    info!(elapsed = ?start.elapsed(), "done");

    let tour_text: Vec<String> = result.tour.iter().map(ToString::to_string).collect();
    println!("Best tour: {}", tour_text.join(" -> "));
    println!("Cost: {}", result.cost);
    Ok(())
}
