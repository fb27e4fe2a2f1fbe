//! Batch Simulation and Aggregation
//!
//! Repeats independent rounds and estimates the win rate of each strategy.
//! Aggregation is pure: `summary` computes proportions without printing,
//! and the `print` methods are an explicit presentation step.
//!
//! ## What We Measure
//! - Win count and win rate per strategy (Stay converges to 1/3,
//!   Switch to 2/3)
//! - Lose rate per strategy, for the full proportions table

use rand::prelude::*;

use crate::game::Strategy;
use crate::round::{play_round, RoundResult, StrategyOutcome};

pub const DEFAULT_RUNS: usize = 100;

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub rounds: Vec<RoundResult>,
}

impl BatchResult {
    pub fn runs(&self) -> usize {
        self.rounds.len()
    }

    pub fn outcomes(&self) -> Vec<StrategyOutcome> {
        self.rounds.iter().flat_map(|round| round.labeled()).collect()
    }

    pub fn wins(&self, strategy: Strategy) -> usize {
        self.rounds
            .iter()
            .filter(|round| round.outcome_for(strategy).is_win())
            .count()
    }

    pub fn summary(&self) -> BatchSummary {
        let runs = self.rounds.len();
        let stay_wins = self.wins(Strategy::Stay);
        let switch_wins = self.wins(Strategy::Switch);

        BatchSummary {
            runs,
            stay_wins,
            switch_wins,
            stay_win_rate: proportion(stay_wins, runs),
            stay_lose_rate: proportion(runs - stay_wins, runs),
            switch_win_rate: proportion(switch_wins, runs),
            switch_lose_rate: proportion(runs - switch_wins, runs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSummary {
    pub runs: usize,
    pub stay_wins: usize,
    pub switch_wins: usize,
    pub stay_win_rate: f64,
    pub stay_lose_rate: f64,
    pub switch_win_rate: f64,
    pub switch_lose_rate: f64,
}

impl BatchSummary {
    pub fn win_rate(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Stay => self.stay_win_rate,
            Strategy::Switch => self.switch_win_rate,
        }
    }

    pub fn print(&self) {
        println!("  Rounds:                  {}", self.runs);
        println!("  Stay wins:               {}", self.stay_wins);
        println!("  Switch wins:             {}", self.switch_wins);
        println!("  Stay win rate:           {:.2}", self.stay_win_rate);
        println!("  Switch win rate:         {:.2}", self.switch_win_rate);
    }

    pub fn print_table(&self) {
        println!("| Strategy | Win  | Lose |");
        println!("|----------|------|------|");
        println!(
            "| {:8} | {:.2} | {:.2} |",
            Strategy::Stay.name(),
            self.stay_win_rate,
            self.stay_lose_rate
        );
        println!(
            "| {:8} | {:.2} | {:.2} |",
            Strategy::Switch.name(),
            self.switch_win_rate,
            self.switch_lose_rate
        );
    }
}

// Proportions are reported rounded to two decimal places.
fn proportion(count: usize, runs: usize) -> f64 {
    ((count as f64 / runs as f64) * 100.0).round() / 100.0
}

pub fn run_batch(runs: usize, rng: &mut impl Rng) -> BatchResult {
    assert!(runs > 0, "batch size must be positive, got {}", runs);

    let rounds = (0..runs).map(|_| play_round(rng)).collect();
    BatchResult { rounds }
}

pub fn play_n_games(runs: usize) -> BatchResult {
    let mut rng = rand::thread_rng();
    run_batch(runs, &mut rng)
}
