//! Monty Hall Monte Carlo Binary
//!
//! Estimates the win rate of the Stay and Switch strategies over many
//! simulated rounds.
//!
//! ## Usage
//! ```bash
//! cargo run --bin monty_hall --release
//! ```

use monty_hall_simulation::batch::play_n_games;

const SIMULATION_RUNS: usize = 100_000;

fn main() {
    println!("=======================================================");
    println!("  Monty Hall Monte Carlo Simulation");
    println!("  Stay vs Switch Strategy Comparison");
    println!("=======================================================");
    println!();
    println!("Parameters:");
    println!("  Rounds: {}", SIMULATION_RUNS);
    println!("  Doors:  3 (one car, two goats)");
    println!();

    let result = play_n_games(SIMULATION_RUNS);
    let summary = result.summary();

    println!("Results");
    println!("{}", "-".repeat(50));
    summary.print();
    println!();

    println!("Proportions:");
    summary.print_table();
    println!();

    println!("Comparison:");
    println!(
        "  Switch advantage:        {:.2}x",
        if summary.stay_win_rate > 0.0 {
            summary.switch_win_rate / summary.stay_win_rate
        } else {
            0.0
        }
    );
    println!("  Theoretical win rates:   Stay 1/3, Switch 2/3");
}
