/***************************************/
/*        3rd party libraries          */
/***************************************/
use rand::Rng;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ScenarioConfig;
use crate::shared::Direction;

/**
 * Draws the floor pair of a single request.
 *
 * Lobby traffic dominates real buildings, so with probability `ground_weight`
 * the origin is pinned to floor 0. Otherwise the origin is uniform over all
 * floors. The destination is redrawn until it differs from the origin.
 *
 * # Fields
 * - `n_floors`:        Number of floors, numbered `0..n_floors`. At least 2.
 * - `ground_weight`:   Probability of forcing the origin to floor 0.
 */
#[derive(Debug, Clone)]
pub struct FloorSampler {
    n_floors: u8,
    ground_weight: f64,
}

impl FloorSampler {
    /// Expects a configuration that passed `ScenarioConfig::validate`.
    pub fn new(config: &ScenarioConfig) -> FloorSampler {
        FloorSampler {
            n_floors: config.n_floors,
            ground_weight: config.ground_weight,
        }
    }

    pub fn n_floors(&self) -> u8 {
        self.n_floors
    }

    pub fn sample_origin<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let ground_check: f64 = rng.gen();
        if ground_check <= self.ground_weight {
            0
        } else {
            rng.gen_range(0..self.n_floors)
        }
    }

    pub fn sample_destination<R: Rng + ?Sized>(&self, rng: &mut R, origin: u8) -> u8 {
        loop {
            let destination = rng.gen_range(0..self.n_floors);
            if destination != origin {
                return destination;
            }
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (u8, u8, Direction) {
        let origin = self.sample_origin(rng);
        let destination = self.sample_destination(rng, origin);
        (origin, destination, Direction::infer(origin, destination))
    }
}
