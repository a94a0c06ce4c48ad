/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ClockTime, Direction, ParseError, Request};

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Parses one scenario line, `H:M:S.MS ORIGIN DIRECTION DESTINATION`.
 *
 * Fields are separated by exactly one space and numbers are written without
 * sign or zero padding. The direction is matched without regard to case, the
 * way the controller harness reads it.
 */
pub fn parse_line(line: &str) -> Result<Request, ParseError> {
    let fields: Vec<&str> = line.split(' ').collect();
    if fields.len() != 4 {
        return Err(ParseError::FieldCount(fields.len()));
    }

    let timestamp = parse_timestamp(fields[0])?;
    let origin_floor = parse_floor(fields[1])?;
    let direction: Direction = fields[2].parse()?;
    let destination_floor = parse_floor(fields[3])?;

    Ok(Request {
        timestamp,
        origin_floor,
        direction,
        destination_floor,
    })
}

pub fn parse_timestamp(field: &str) -> Result<ClockTime, ParseError> {
    let malformed = || ParseError::Timestamp(field.to_string());

    let (hms, millisecond) = field.split_once('.').ok_or_else(malformed)?;
    let parts: Vec<&str> = hms.split(':').collect();
    if parts.len() != 3 {
        return Err(malformed());
    }

    let number = |s: &str| parse_number::<u32>(s).ok_or_else(malformed);
    let time = ClockTime::new(
        number(parts[0])?,
        number(parts[1])?,
        number(parts[2])?,
        number(millisecond)?,
    );

    if time.hour >= 24 || time.minute >= 60 || time.second >= 60 || time.millisecond >= 999 {
        return Err(malformed());
    }
    Ok(time)
}

/**
 * Reads a whole scenario and checks every request against `n_floors`.
 *
 * A request is accepted when both floors exist, they differ, and the direction
 * matches the floor pair. Errors carry the 1-based line number.
 */
pub fn check_scenario<B: BufRead>(input: B, n_floors: u8) -> Result<Vec<Request>, ParseError> {
    let mut requests = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| ParseError::Io(e.to_string()))?;

        let request = parse_line(&line).map_err(|e| ParseError::Line {
            line: line_number,
            source: Box::new(e),
        })?;

        let invalid = |reason: String| ParseError::Invalid {
            line: line_number,
            reason,
        };
        if request.origin_floor >= n_floors || request.destination_floor >= n_floors {
            return Err(invalid(format!("floor outside 0..{}", n_floors)));
        }
        if request.origin_floor == request.destination_floor {
            return Err(invalid("origin and destination are the same floor".to_string()));
        }
        if request.direction != Direction::infer(request.origin_floor, request.destination_floor) {
            return Err(invalid(format!(
                "direction {} does not match {} -> {}",
                request.direction, request.origin_floor, request.destination_floor
            )));
        }

        debug!("Line {} ok: {}", line_number, request);
        requests.push(request);
    }

    Ok(requests)
}

pub fn check_file(path: &Path, n_floors: u8) -> Result<Vec<Request>, ParseError> {
    let file = File::open(path).map_err(|e| ParseError::Io(format!("{}: {}", path.display(), e)))?;
    check_scenario(BufReader::new(file), n_floors)
}

/***************************************/
/*          Private functions          */
/***************************************/
fn parse_floor(field: &str) -> Result<u8, ParseError> {
    parse_number::<u8>(field).ok_or_else(|| ParseError::Floor(field.to_string()))
}

// Plain decimal as the generator prints it: digits only, no sign, no zero padding
fn parse_number<T: FromStr>(field: &str) -> Option<T> {
    let digits_only = !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit());
    if !digits_only || (field.len() > 1 && field.starts_with('0')) {
        return None;
    }
    field.parse().ok()
}
