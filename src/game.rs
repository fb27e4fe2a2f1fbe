//! Monty Hall Door Mechanics
//!
//! Models a single game arrangement and the host's fixed behavior.
//! Key insight: the host always opens a goat door the contestant did not
//! pick, so switching wins exactly when the first pick was a goat.
//!
//! ## Round Mechanics
//! 1. A car is hidden behind one of three doors, the other two hide goats
//! 2. The contestant picks a door blind
//! 3. The host opens a goat door among the two remaining doors
//! 4. The contestant either stays or switches to the last closed door

use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Door {
    One,
    Two,
    Three,
}

impl Door {
    pub fn all() -> Vec<Self> {
        vec![Self::One, Self::Two, Self::Three]
    }

    pub fn number(&self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    pub fn from_number(number: usize) -> Self {
        match number {
            1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            _ => panic!("door number out of range: {}", number),
        }
    }

    fn index(&self) -> usize {
        self.number() - 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Prize {
    Goat,
    Car,
}

impl Prize {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Goat => "Goat",
            Self::Car => "Car",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Strategy {
    Stay,
    Switch,
}

impl Strategy {
    pub fn all() -> Vec<Self> {
        vec![Self::Stay, Self::Switch]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stay => "Stay",
            Self::Switch => "Switch",
        }
    }

    pub fn final_pick(&self, opened_door: Door, original_pick: Door) -> Door {
        assert!(
            opened_door != original_pick,
            "host cannot open the contestant's door"
        );

        match self {
            Self::Stay => original_pick,
            Self::Switch => Door::all()
                .into_iter()
                .find(|&door| door != opened_door && door != original_pick)
                .unwrap(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Lose => "Lose",
        }
    }

    pub fn is_win(&self) -> bool {
        *self == Self::Win
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    prizes: [Prize; 3],
}

impl GameState {
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut prizes = [Prize::Goat; 3];
        prizes[rng.gen_range(0..3)] = Prize::Car;
        Self { prizes }
    }

    pub fn from_prizes(prizes: [Prize; 3]) -> Self {
        let cars = prizes.iter().filter(|&&p| p == Prize::Car).count();
        assert!(cars == 1, "a game must hide exactly one car, got {}", cars);
        Self { prizes }
    }

    pub fn prize_behind(&self, door: Door) -> Prize {
        self.prizes[door.index()]
    }

    pub fn car_door(&self) -> Door {
        Door::all()
            .into_iter()
            .find(|&door| self.prize_behind(door) == Prize::Car)
            .unwrap()
    }
}

pub fn random_door(rng: &mut impl Rng) -> Door {
    Door::from_number(rng.gen_range(1..=3))
}

pub fn open_goat_door(game: &GameState, pick: Door, rng: &mut impl Rng) -> Door {
    let candidates: Vec<Door> = Door::all()
        .into_iter()
        .filter(|&door| door != pick && game.prize_behind(door) == Prize::Goat)
        .collect();

    if candidates.len() == 1 {
        // Pick is a goat door, so only one other goat door remains.
        candidates[0]
    } else {
        // Pick is the car door, tie-break between the two goat doors.
        candidates[rng.gen_range(0..candidates.len())]
    }
}

pub fn determine_winner(final_pick: Door, game: &GameState) -> Outcome {
    if game.prize_behind(final_pick) == Prize::Car {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with_car_at(number: usize) -> GameState {
        let mut prizes = [Prize::Goat; 3];
        prizes[number - 1] = Prize::Car;
        GameState::from_prizes(prizes)
    }

    #[test]
    fn test_random_game_has_exactly_one_car() {
        let mut rng = rand::thread_rng();

        for _ in 0..1000 {
            let game = GameState::random(&mut rng);
            let cars = Door::all()
                .into_iter()
                .filter(|&door| game.prize_behind(door) == Prize::Car)
                .count();
            assert_eq!(cars, 1);
        }
    }

    #[test]
    fn test_random_game_covers_all_arrangements() {
        let mut rng = rand::thread_rng();
        let mut seen = [false; 3];

        for _ in 0..1000 {
            let game = GameState::random(&mut rng);
            seen[game.car_door().number() - 1] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    #[should_panic(expected = "exactly one car")]
    fn test_game_with_two_cars_is_rejected() {
        GameState::from_prizes([Prize::Car, Prize::Car, Prize::Goat]);
    }

    #[test]
    fn test_opened_door_is_always_an_unpicked_goat() {
        let mut rng = rand::thread_rng();

        for car in 1..=3 {
            let game = game_with_car_at(car);
            for pick in 1..=3 {
                for _ in 0..50 {
                    let opened = open_goat_door(&game, Door::from_number(pick), &mut rng);
                    assert!(opened != Door::from_number(pick));
                    assert_eq!(game.prize_behind(opened), Prize::Goat);
                }
            }
        }
    }

    #[test]
    fn test_reveal_on_car_pick_uses_both_goat_doors() {
        let mut rng = rand::thread_rng();
        let game = game_with_car_at(3);
        let mut seen = [false; 2];

        for _ in 0..200 {
            let opened = open_goat_door(&game, Door::Three, &mut rng);
            assert!(opened == Door::One || opened == Door::Two);
            seen[opened.number() - 1] = true;
        }

        assert!(seen[0] && seen[1]);
    }

    #[test]
    fn test_reveal_on_goat_pick_is_deterministic() {
        let mut rng = rand::thread_rng();
        let game = game_with_car_at(2);

        for _ in 0..50 {
            assert_eq!(open_goat_door(&game, Door::One, &mut rng), Door::Three);
        }
    }

    #[test]
    fn test_stay_keeps_the_original_pick() {
        for opened in 1..=3 {
            for original in 1..=3 {
                if opened == original {
                    continue;
                }
                let pick = Strategy::Stay
                    .final_pick(Door::from_number(opened), Door::from_number(original));
                assert_eq!(pick, Door::from_number(original));
            }
        }
    }

    #[test]
    fn test_switch_takes_the_remaining_door() {
        for opened in 1..=3 {
            for original in 1..=3 {
                if opened == original {
                    continue;
                }
                let pick = Strategy::Switch
                    .final_pick(Door::from_number(opened), Door::from_number(original));
                assert!(pick != Door::from_number(opened));
                assert!(pick != Door::from_number(original));
            }
        }
    }

    #[test]
    #[should_panic(expected = "host cannot open")]
    fn test_switch_rejects_opened_equal_to_pick() {
        Strategy::Switch.final_pick(Door::One, Door::One);
    }

    #[test]
    fn test_winner_on_car_door() {
        let game = game_with_car_at(3);
        assert_eq!(determine_winner(Door::Three, &game), Outcome::Win);
    }

    #[test]
    fn test_loser_on_goat_door() {
        let game = game_with_car_at(2);
        assert_eq!(determine_winner(Door::One, &game), Outcome::Lose);
    }
}
