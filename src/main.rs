use beat_the_deck::rng::GameRng;
use beat_the_deck::simulation::batch::{run, run_batch_parallel, BatchConfig, DEFAULT_NUM_GAMES};
use beat_the_deck::simulation::{AggregateStats, Policy};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "beat-the-deck")]
#[command(about = "Beat the Deck Solitaire Simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for random number generator (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Strategy for choosing a stack each turn
    #[arg(short, long, value_enum, default_value_t = Policy::Naive)]
    policy: Policy,

    /// Play and narrate a single game
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a batch of games (default)
    Run {
        /// Number of games to simulate
        #[arg(short, long, default_value_t = DEFAULT_NUM_GAMES)]
        num_games: usize,

        /// Strategy for choosing a stack each turn
        #[arg(short, long, value_enum, default_value_t = Policy::Naive)]
        policy: Policy,

        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Narrate every game
        #[arg(short, long)]
        verbose: bool,

        /// Play games one at a time instead of across all cores
        #[arg(long)]
        sequential: bool,

        /// Also print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare every policy over the same shuffles
    Compare {
        /// Number of games per policy
        #[arg(short, long, default_value_t = DEFAULT_NUM_GAMES)]
        num_games: usize,

        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[derive(Serialize)]
struct Report {
    policy: Policy,
    seed: u64,
    #[serde(flatten)]
    stats: AggregateStats,
    win_rate: f64,
    average_cards_left_on_loss: Option<f64>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            num_games,
            policy,
            seed,
            verbose,
            sequential,
            json,
        }) => {
            let config = BatchConfig {
                games: num_games,
                policy,
                seed,
                parallel: !sequential,
                verbose,
            };
            run_simulation(&config, json);
        }
        Some(Commands::Compare { num_games, seed }) => {
            compare_policies(num_games, seed);
        }
        None => {
            // Default: the full batch, or one narrated game
            let config = BatchConfig {
                games: if cli.verbose { 1 } else { DEFAULT_NUM_GAMES },
                policy: cli.policy,
                seed: cli.seed,
                verbose: cli.verbose,
                ..BatchConfig::default()
            };
            run_simulation(&config, false);
        }
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} games ({eta})") {
        pb.set_style(style);
    }
    pb
}

fn run_simulation(config: &BatchConfig, json: bool) {
    println!("\n=== Beat the Deck Simulator ===\n");
    println!("Started: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("Policy: {}", config.policy);
    println!("Games: {}", config.games);
    println!();

    let pb = if config.verbose {
        ProgressBar::hidden()
    } else {
        progress_bar(config.games)
    };

    let start = std::time::Instant::now();
    let (seed, stats) = match run(config, Some(&pb)) {
        Ok(result) => result,
        Err(e) => {
            pb.abandon();
            eprintln!("✗ Simulation aborted: {}", e);
            std::process::exit(1);
        }
    };
    pb.finish_and_clear();
    let elapsed = start.elapsed();

    println!("Seed: {}", seed);
    println!("Win rate: {:.2}%", stats.win_rate() * 100.0);
    println!("{} out of {} games", stats.wins, stats.total_games);
    println!(
        "average number of cards left in losses {}",
        stats.average_cards_left_on_loss().unwrap_or(0.0)
    );
    println!(
        "\nSimulation completed in {:.2?} ({:.0} games/sec)",
        elapsed,
        config.games as f64 / elapsed.as_secs_f64()
    );

    if json {
        let report = Report {
            policy: config.policy,
            seed,
            stats,
            win_rate: stats.win_rate(),
            average_cards_left_on_loss: stats.average_cards_left_on_loss(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("✗ Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn compare_policies(num_games: usize, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(|| GameRng::new(None).seed());

    println!("\n=== Beat the Deck Policy Comparison ===\n");
    println!("Games per policy: {}", num_games);
    println!("Seed: {}", seed);
    println!();

    let start = std::time::Instant::now();
    let mut rows = Vec::new();
    for policy in Policy::ALL {
        println!("Running {}...", policy);
        let pb = progress_bar(num_games);
        match run_batch_parallel(num_games, policy, seed, Some(&pb)) {
            Ok(stats) => rows.push((policy, stats)),
            Err(e) => {
                pb.abandon();
                eprintln!("✗ {} aborted: {}", policy, e);
                std::process::exit(1);
            }
        }
        pb.finish_and_clear();
    }
    let elapsed = start.elapsed();

    println!("\n=== Results ===\n");
    println!("{:12} {:>10} {:>10} {:>22}", "Policy", "Wins", "Win rate", "Avg cards left (loss)");
    println!("{:-<57}", "");
    for (policy, stats) in &rows {
        let avg = stats
            .average_cards_left_on_loss()
            .map(|a| format!("{:.2}", a))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:12} {:>10} {:>9.2}% {:>22}",
            policy.to_string(),
            stats.wins,
            stats.win_rate() * 100.0,
            avg
        );
    }

    if let Some((best, stats)) = rows
        .iter()
        .max_by(|a, b| a.1.win_rate().total_cmp(&b.1.win_rate()))
    {
        println!("\n✓ {} wins most often ({:.2}%)", best, stats.win_rate() * 100.0);
    }

    println!("\nCompleted in {:.2?}", elapsed);
}
