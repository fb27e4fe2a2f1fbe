//! Monty Hall Simulation Library
//!
//! This library provides Monte Carlo tools for the Monty Hall problem,
//! estimating the win rates of the Stay and Switch strategies by playing
//! many independent rounds.
//!
//! ## Modules
//!
//! - `game`: door mechanics (setup, contestant pick, host reveal, strategy
//!   resolution, outcome)
//! - `round`: one complete round, evaluated under both strategies
//! - `batch`: repeated rounds with win-rate aggregation
//!
//! ## Usage
//!
//! ```bash
//! # Run the Monte Carlo simulation
//! cargo run --bin monty_hall --release
//! ```

pub mod game;
pub mod round;
pub mod batch;
