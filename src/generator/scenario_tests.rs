/*
 * Unit tests for the scenario generator
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_generator_rejects_single_floor
 * - test_generator_rejects_invalid_weight
 * - test_generator_yields_requested_count
 * - test_generator_timestamps_follow_clock
 * - test_generator_same_seed_same_scenario
 * - test_generator_day_wrap
 * - test_generator_keeps_sampled_direction
 * - test_run_lines_match_grammar
 * - test_run_stops_on_sink_failure
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod scenario_tests {
    use crate::config::ScenarioConfig;
    use crate::generator::scenario::seeded_rng;
    use crate::generator::{Clock, Emitter, FloorSampler, ScenarioGenerator};
    use crate::shared::{ClockTime, ConfigError, Direction, GeneratorError};
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use std::io::{self, Write};
    use std::path::Path;

    struct FullDisk {
        budget: usize,
    }

    impl Write for FullDisk {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget < buf.len() {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            self.budget -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn setup_generator(config: &ScenarioConfig, seed: u64) -> ScenarioGenerator<Pcg64> {
        ScenarioGenerator::new(config, Pcg64::seed_from_u64(seed)).unwrap()
    }

    // Unsigned decimal without leading zeros
    fn is_plain_number(field: &str) -> bool {
        !field.is_empty()
            && field.bytes().all(|b| b.is_ascii_digit())
            && (field == "0" || !field.starts_with('0'))
    }

    fn matches_grammar(line: &str) -> bool {
        let Some(body) = line.strip_suffix('\n') else {
            return false;
        };
        let fields: Vec<&str> = body.split(' ').collect();
        if fields.len() != 4 {
            return false;
        }
        let time: Vec<&str> = fields[0].split(|c: char| c == ':' || c == '.').collect();
        time.len() == 4
            && fields[0].matches(':').count() == 2
            && time.iter().all(|f| is_plain_number(f))
            && is_plain_number(fields[1])
            && (fields[2] == "UP" || fields[2] == "DOWN")
            && is_plain_number(fields[3])
    }

    #[test]
    fn test_generator_rejects_single_floor() {
        // Arrange
        let config = ScenarioConfig {
            n_floors: 1,
            ..ScenarioConfig::default()
        };

        // Act
        let result = ScenarioGenerator::new(&config, Pcg64::seed_from_u64(0));

        // Assert
        assert!(matches!(result, Err(ConfigError::TooFewFloors(1))));
    }

    #[test]
    fn test_generator_rejects_invalid_weight() {
        // Arrange
        let config = ScenarioConfig {
            ground_weight: 2.0,
            ..ScenarioConfig::default()
        };

        // Act / Assert
        assert!(ScenarioGenerator::new(&config, Pcg64::seed_from_u64(0)).is_err());
    }

    #[test]
    fn test_generator_yields_requested_count() {
        // Arrange
        let config = ScenarioConfig {
            n_requests: 250,
            ..ScenarioConfig::default()
        };
        let mut generator = setup_generator(&config, 5);

        // Act
        let requests: Vec<_> = generator.requests().collect();

        // Assert
        assert_eq!(requests.len(), 250);
        for request in &requests {
            assert!(request.origin_floor < config.n_floors);
            assert!(request.destination_floor < config.n_floors);
            assert_ne!(request.origin_floor, request.destination_floor);
            assert_eq!(
                request.direction == Direction::Up,
                request.origin_floor < request.destination_floor
            );
        }
    }

    #[test]
    fn test_generator_timestamps_follow_clock() {
        // Arrange
        let config = ScenarioConfig::default();
        let clock = Clock::from_config(&config);
        let mut generator = setup_generator(&config, 6);

        // Act
        let timestamps: Vec<ClockTime> = generator.requests().map(|r| r.timestamp).collect();

        // Assert
        let expected: Vec<ClockTime> = (0..config.n_requests).map(|i| clock.at(i)).collect();
        assert_eq!(timestamps, expected);
        assert_eq!(timestamps[1].to_string(), "12:56:30.453");
    }

    #[test]
    fn test_generator_same_seed_same_scenario() {
        // Arrange
        let config = ScenarioConfig::default();
        let (seed, rng) = seeded_rng(None);

        // Act
        let first: Vec<_> = ScenarioGenerator::new(&config, rng).unwrap().requests().collect();
        let second: Vec<_> = setup_generator(&config, seed).requests().collect();

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn test_generator_day_wrap() {
        // Arrange
        let config = ScenarioConfig {
            start_time: ClockTime::new(23, 0, 0, 0),
            step_time: ClockTime::new(1, 0, 0, 0),
            n_requests: 2,
            ..ScenarioConfig::default()
        };
        let mut generator = setup_generator(&config, 7);

        // Act
        let requests: Vec<_> = generator.requests().collect();

        // Assert
        assert_eq!(requests[0].timestamp.hour, 23);
        assert_eq!(requests[1].timestamp.hour, 0);
    }

    #[test]
    fn test_generator_keeps_sampled_direction() {
        // Arrange
        let config = ScenarioConfig {
            n_requests: 100,
            ..ScenarioConfig::default()
        };
        let sampler = FloorSampler::new(&config);
        let mut rng = Pcg64::seed_from_u64(10);
        let mut generator = setup_generator(&config, 10);

        // Act
        let requests: Vec<_> = generator.requests().collect();

        // Assert
        for request in requests {
            let (origin, destination, direction) = sampler.sample(&mut rng);
            assert_eq!(request.origin_floor, origin);
            assert_eq!(request.destination_floor, destination);
            assert_eq!(request.direction, direction);
        }
    }

    #[test]
    fn test_run_lines_match_grammar() {
        // Arrange
        let config = ScenarioConfig {
            start_time: ClockTime::new(5, 0, 0, 0),
            step_time: ClockTime::new(0, 3, 11, 517),
            n_requests: 500,
            ..ScenarioConfig::default()
        };
        let mut generator = setup_generator(&config, 8);
        let mut emitter: Emitter<Vec<u8>, Vec<u8>> = Emitter::new(Vec::new(), None, Path::new("memory"));

        // Act
        let written = generator.run(&mut emitter).unwrap();
        let output = String::from_utf8(emitter.finish().unwrap()).unwrap();

        // Assert
        assert_eq!(written, 500);
        assert!(output.starts_with("5:0:0.0 "));
        let lines: Vec<&str> = output.split_inclusive('\n').collect();
        assert_eq!(lines.len(), 500);
        for line in lines {
            assert!(matches_grammar(line), "line does not match grammar: {:?}", line);
        }
    }

    #[test]
    fn test_run_stops_on_sink_failure() {
        // Arrange
        let config = ScenarioConfig::default();
        let mut generator = setup_generator(&config, 9);
        let sink = FullDisk { budget: 40 };
        let mut emitter: Emitter<FullDisk, Vec<u8>> = Emitter::new(sink, None, Path::new("memory"));

        // Act
        let result = generator.run(&mut emitter);

        // Assert
        assert!(matches!(result, Err(GeneratorError::Sink { .. })));
        assert!(emitter.lines() < config.n_requests);
    }
}
