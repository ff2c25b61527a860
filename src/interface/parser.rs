use std::io::{BufRead, Write};

use crate::control::commands::Command;
use crate::control::rocket::FlightParameters;
use crate::errors::SimulationError;

pub const THRESHOLD_PROMPT: &str = "Enter altitude threshold (in km): ";
pub const ALTITUDE_INCREASE_PROMPT: &str = "Enter altitude increase per second in simulation: ";
pub const SPEED_INCREASE_PROMPT: &str = "Enter speed increase per iteration: ";
pub const FUEL_DECREMENT_PROMPT: &str = "Enter fuel decrement value (%): ";

/// Turns one command line into a `Command`. `start_checks` reads its four
/// numbers from `input`, prompting on `console`.
pub fn parse_input<R: BufRead, W: Write>(
    line: &str,
    input: &mut R,
    console: &mut W,
) -> Result<Command, SimulationError> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some("start_checks"), None, _) => {
            let altitude_threshold = read_number(THRESHOLD_PROMPT, input, console)?;
            let altitude_increase = read_number(ALTITUDE_INCREASE_PROMPT, input, console)?;
            let speed_increase = read_number(SPEED_INCREASE_PROMPT, input, console)?;
            let fuel_decrement = read_number(FUEL_DECREMENT_PROMPT, input, console)?;
            let parameters = FlightParameters::new(
                altitude_threshold,
                fuel_decrement,
                altitude_increase,
                speed_increase,
            )?;
            Ok(Command::StartChecks(parameters))
        }
        (Some("launch"), None, _) => Ok(Command::Launch),
        (Some("fast_forward"), Some(seconds), None) => seconds
            .parse::<i64>()
            .map(Command::FastForward)
            .map_err(|_| SimulationError::InvalidFastForward),
        (Some("fast_forward"), _, _) => Err(SimulationError::InvalidFastForward),
        _ => Err(SimulationError::UnknownCommand),
    }
}

fn read_number<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    console: &mut W,
) -> Result<u32, SimulationError> {
    write!(console, "{}", prompt)?;
    console.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();

    answer
        .parse::<u32>()
        .map_err(|_| SimulationError::InvalidNumber {
            prompt: prompt.trim_end_matches([':', ' ']).to_string(),
            value: answer.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(line: &str, answers: &str) -> (Result<Command, SimulationError>, String) {
        let mut input = Cursor::new(answers.to_string());
        let mut console = Vec::new();
        let result = parse_input(line, &mut input, &mut console);
        (result, String::from_utf8(console).unwrap())
    }

    #[test]
    fn test_parse_start_checks_reads_prompts_in_order() {
        let (result, prompts) = parse("start_checks", "5\n2\n1\n10\n");

        let expected = FlightParameters::new(5, 10, 2, 1).unwrap();
        assert_eq!(result.unwrap(), Command::StartChecks(expected));
        assert_eq!(
            prompts,
            [
                THRESHOLD_PROMPT,
                ALTITUDE_INCREASE_PROMPT,
                SPEED_INCREASE_PROMPT,
                FUEL_DECREMENT_PROMPT
            ]
            .concat()
        );
    }

    #[test]
    fn test_parse_start_checks_rejects_bad_number() {
        let (result, _) = parse("start_checks", "5\nfast\n1\n10\n");
        match result {
            Err(SimulationError::InvalidNumber { prompt, value }) => {
                assert_eq!(prompt, "Enter altitude increase per second in simulation");
                assert_eq!(value, "fast");
            }
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_start_checks_rejects_negative_number() {
        let (result, _) = parse("start_checks", "-5\n");
        assert!(matches!(result, Err(SimulationError::InvalidNumber { .. })));
    }

    #[test]
    fn test_parse_start_checks_rejects_stalled_parameters() {
        let (result, _) = parse("start_checks", "10\n0\n3\n0\n");
        assert!(matches!(result, Err(SimulationError::InvalidParameters(_))));
    }

    #[test]
    fn test_parse_start_checks_at_end_of_input() {
        let (result, _) = parse("start_checks", "");
        assert!(matches!(result, Err(SimulationError::InvalidNumber { .. })));
    }

    #[test]
    fn test_parse_launch() {
        let (result, prompts) = parse("  launch \n", "");
        assert_eq!(result.unwrap(), Command::Launch);
        assert!(prompts.is_empty());
    }

    #[test]
    fn test_parse_fast_forward() {
        assert_eq!(parse("fast_forward 3", "").0.unwrap(), Command::FastForward(3));
        assert_eq!(
            parse("fast_forward -2", "").0.unwrap(),
            Command::FastForward(-2)
        );
    }

    #[test]
    fn test_parse_fast_forward_invalid_argument() {
        for line in ["fast_forward abc", "fast_forward", "fast_forward 1 2", "fast_forward 2.5"] {
            assert!(
                matches!(parse(line, "").0, Err(SimulationError::InvalidFastForward)),
                "{line:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        for line in ["", "orbit", "launch now", "LAUNCH"] {
            assert!(
                matches!(parse(line, "").0, Err(SimulationError::UnknownCommand)),
                "{line:?} should be unknown"
            );
        }
    }
}
