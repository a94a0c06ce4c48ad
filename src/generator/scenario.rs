/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::io::Write;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ScenarioConfig;
use crate::generator::{Clock, Emitter, FloorSampler};
use crate::shared::{ConfigError, GeneratorError, Request};

/**
 * Produces the requests of one scenario in index order.
 *
 * The floor pair of a request only depends on the random source, and the
 * timestamp only on the request index, so the two are derived independently
 * and combined into a `Request`.
 *
 * # Fields
 * - `sampler`:     Draws origin/destination pairs.
 * - `clock`:       Stamps request `i`.
 * - `n_requests`:  Number of requests in the scenario.
 * - `rng`:         Random source consumed by the sampler.
 */
pub struct ScenarioGenerator<R: Rng> {
    sampler: FloorSampler,
    clock: Clock,
    n_requests: u32,
    rng: R,
}

/// Returns the seed in use along with the generator, so unseeded runs can be replayed.
pub fn seeded_rng(seed: Option<u64>) -> (u64, Pcg64) {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    (seed, Pcg64::seed_from_u64(seed))
}

impl<R: Rng> ScenarioGenerator<R> {
    pub fn new(config: &ScenarioConfig, rng: R) -> Result<ScenarioGenerator<R>, ConfigError> {
        config.validate()?;
        Ok(ScenarioGenerator {
            sampler: FloorSampler::new(config),
            clock: Clock::from_config(config),
            n_requests: config.n_requests,
            rng,
        })
    }

    pub fn request(&mut self, index: u32) -> Request {
        let (origin_floor, destination_floor, direction) = self.sampler.sample(&mut self.rng);
        Request {
            timestamp: self.clock.at(index),
            origin_floor,
            direction,
            destination_floor,
        }
    }

    pub fn requests(&mut self) -> impl Iterator<Item = Request> + '_ {
        (0..self.n_requests).map(move |i| self.request(i))
    }

    /// Emits every request of the scenario, stopping at the first sink failure.
    pub fn run<W: Write, E: Write>(
        &mut self,
        emitter: &mut Emitter<W, E>,
    ) -> Result<u32, GeneratorError> {
        info!(
            "Generating {} requests over {} floors",
            self.n_requests,
            self.sampler.n_floors()
        );

        for request in self.requests() {
            debug!("Request {}: {:?}", emitter.lines(), request);
            emitter.emit(&request)?;
        }

        Ok(emitter.lines())
    }
}
