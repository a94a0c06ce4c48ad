/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ScenarioConfig;
use crate::shared::ClockTime;

const MILLIS_PER_SECOND: f64 = 1000.0;
// Milliseconds wrap at 999, so the field never exceeds 998
const MILLIS_MODULUS: f64 = 999.0;
const SECONDS_PER_MINUTE: f64 = 60.0;
const MINUTES_PER_HOUR: f64 = 60.0;
const HOURS_PER_DAY: f64 = 24.0;

/**
 * Timestamp of every request in a scenario.
 *
 * Request `i` is stamped `start + i * step`, computed field by field and then
 * normalized by carrying the real valued overflow of each field into the next
 * larger one. Hours wrap around at midnight.
 */
#[derive(Debug, Clone)]
pub struct Clock {
    start: ClockTime,
    step: ClockTime,
}

impl Clock {
    pub fn new(start: ClockTime, step: ClockTime) -> Clock {
        Clock { start, step }
    }

    pub fn from_config(config: &ScenarioConfig) -> Clock {
        Clock::new(config.start_time, config.step_time)
    }

    pub fn at(&self, index: u32) -> ClockTime {
        let i = index as f64;

        let mut hour = self.start.hour as f64 + self.step.hour as f64 * i;
        let mut minute = self.start.minute as f64 + self.step.minute as f64 * i;
        let mut second = self.start.second as f64 + self.step.second as f64 * i;
        let mut millisecond = self.start.millisecond as f64 + self.step.millisecond as f64 * i;

        second += millisecond / MILLIS_PER_SECOND;
        millisecond %= MILLIS_MODULUS;

        minute += second / SECONDS_PER_MINUTE;
        second %= SECONDS_PER_MINUTE;

        hour += minute / MINUTES_PER_HOUR;
        minute %= MINUTES_PER_HOUR;

        hour %= HOURS_PER_DAY;

        // Every field is non-negative, so `as` truncates toward zero
        ClockTime::new(
            hour as u32,
            minute as u32,
            second as u32,
            millisecond as u32,
        )
    }
}
