/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::BuildingConfig;
use crate::shared::Direction;

/***************************************/
/*       Public data structures        */
/***************************************/
/// A well-formed control command. Malformed input never makes it past
/// `parse_command`, so the dispatcher only ever sees validated requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Status,
    Pickup { floor: u8, direction: Direction },
    Step,
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("usage: pickup <floor> <direction>")]
    MissingArguments,
    #[error("invalid floor {0}, expected an integer inside the building floor range")]
    InvalidFloor(String),
    #[error("invalid direction {0}, expected 1 (up) or -1 (down)")]
    InvalidDirection(String),
}

/***************************************/
/*             Public API              */
/***************************************/
/// Parses one input line into a `Command`.
///
/// Recognized forms: `status`, `step`, `exit` and
/// `pickup <floor> <direction>` with the floor inside `building`'s floor
/// range and the direction encoded as 1 (up) or -1 (down).
pub fn parse_command(line: &str, building: &BuildingConfig) -> Result<Command, ParseError> {
    let line = line.trim();

    match line {
        "status" => Ok(Command::Status),
        "step" => Ok(Command::Step),
        "exit" => Ok(Command::Exit),
        _ => match line.strip_prefix("pickup ") {
            Some(arguments) => parse_pickup(arguments, building),
            None => Err(ParseError::UnknownCommand(line.to_string())),
        },
    }
}

fn parse_pickup(arguments: &str, building: &BuildingConfig) -> Result<Command, ParseError> {
    let fields: Vec<&str> = arguments.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(ParseError::MissingArguments);
    }

    let floor: u8 = fields[0]
        .parse()
        .map_err(|_| ParseError::InvalidFloor(fields[0].to_string()))?;
    if floor < building.min_floor || floor > building.max_floor {
        return Err(ParseError::InvalidFloor(fields[0].to_string()));
    }

    let delta: i8 = fields[1]
        .parse()
        .map_err(|_| ParseError::InvalidDirection(fields[1].to_string()))?;
    let direction = Direction::from_delta(delta)
        .ok_or_else(|| ParseError::InvalidDirection(fields[1].to_string()))?;

    Ok(Command::Pickup { floor, direction })
}
