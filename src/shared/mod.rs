pub mod errors;
pub mod macros;
pub mod structs;

pub use errors::ConfigError;
pub use errors::GeneratorError;
pub use errors::ParseError;
pub use structs::ClockTime;
pub use structs::Direction;
pub use structs::Request;
