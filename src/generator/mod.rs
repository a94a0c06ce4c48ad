pub mod clock;
pub mod emitter;
pub mod sampler;
pub mod scenario;
pub mod scenario_tests;

pub use clock::Clock;
pub use emitter::Emitter;
pub use sampler::FloorSampler;
pub use scenario::ScenarioGenerator;
