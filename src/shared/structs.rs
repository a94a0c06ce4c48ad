/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::ParseError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /**
     * Infers the travel direction of a request going from `origin` to `destination`.
     *
     * Equal floors can not be produced by the sampler, but still resolve:
     * floor 0 can only go up, every other floor goes down.
     */
    pub fn infer(origin: u8, destination: u8) -> Direction {
        if origin < destination {
            Direction::Up
        } else if origin > destination {
            Direction::Down
        } else if origin == 0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UP" => Ok(Direction::Up),
            "DOWN" => Ok(Direction::Down),
            _ => Err(ParseError::Direction(s.to_string())),
        }
    }
}

/// Wall-clock value split into its display fields.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32, second: u32, millisecond: u32) -> ClockTime {
        ClockTime {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Milliseconds since midnight, the ordering key used by the controller harness.
    pub fn as_millis(&self) -> u64 {
        let mut millis = self.millisecond as u64;
        millis += self.second as u64 * 1000;
        millis += self.minute as u64 * 60 * 1000;
        millis += self.hour as u64 * 60 * 60 * 1000;
        millis
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}.{}",
            self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/**
 * One generated floor request.
 *
 * # Fields
 * - `timestamp`:           Time at which the passenger presses the hall button.
 * - `origin_floor`:        Floor the request is made from.
 * - `direction`:           Hall button pressed, implied by the floor pair.
 * - `destination_floor`:   Floor the passenger selects inside the cab.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub timestamp: ClockTime,
    pub origin_floor: u8,
    pub direction: Direction,
    pub destination_floor: u8,
}

// Renders the scenario line without its terminating newline
impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.timestamp, self.origin_floor, self.direction, self.destination_floor
        )
    }
}
