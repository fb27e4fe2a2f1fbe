//! Single Round Simulation
//!
//! Plays one complete round: setup, blind pick, host reveal, then both
//! strategies resolved against the identical setup, pick, and reveal.
//! The two outcomes form a counterfactual pair for that round, not
//! independent samples: exactly one of Stay and Switch wins each round.

use rand::prelude::*;

use crate::game::{
    determine_winner, open_goat_door, random_door, GameState, Outcome, Strategy,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrategyOutcome {
    pub strategy: Strategy,
    pub outcome: Outcome,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundResult {
    pub stay: Outcome,
    pub switch: Outcome,
}

impl RoundResult {
    pub fn outcome_for(&self, strategy: Strategy) -> Outcome {
        match strategy {
            Strategy::Stay => self.stay,
            Strategy::Switch => self.switch,
        }
    }

    pub fn labeled(&self) -> [StrategyOutcome; 2] {
        [
            StrategyOutcome {
                strategy: Strategy::Stay,
                outcome: self.stay,
            },
            StrategyOutcome {
                strategy: Strategy::Switch,
                outcome: self.switch,
            },
        ]
    }
}

pub fn play_round(rng: &mut impl Rng) -> RoundResult {
    let game = GameState::random(rng);
    let first_pick = random_door(rng);
    let opened_door = open_goat_door(&game, first_pick, rng);

    let stay_pick = Strategy::Stay.final_pick(opened_door, first_pick);
    let switch_pick = Strategy::Switch.final_pick(opened_door, first_pick);

    RoundResult {
        stay: determine_winner(stay_pick, &game),
        switch: determine_winner(switch_pick, &game),
    }
}
