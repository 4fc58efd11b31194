/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*             Constants               */
/***************************************/
/// Floor range of the simulated building. Requests outside this range are
/// rejected at the boundary and never reach the queue.
pub const MIN_FLOOR: u8 = 0;
pub const MAX_FLOOR: u8 = 21;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Floor delta of one move in this direction, matching the wire
    /// encoding used by the command layer (1 == up, -1 == down).
    pub fn as_delta(&self) -> i8 {
        match *self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

    pub fn from_delta(delta: i8) -> Option<Direction> {
        match delta {
            1 => Some(Direction::Up),
            -1 => Some(Direction::Down),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A pending request for service at a floor, tagged with the direction the
/// requester wishes to travel. Immutable once created; lives in the request
/// queue until some elevator accepts it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupRequest {
    pub floor: u8,
    pub direction: Direction,
}

/// Point-in-time summary of a single elevator, produced by
/// `ControlSystem::status`. Reading a snapshot never mutates the fleet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorStatus {
    pub id: usize,
    #[serde(rename = "currentFloor")]
    pub current_floor: u8,
    pub direction: Direction,
    #[serde(rename = "goalFloors")]
    pub goal_floors: Vec<u8>,
}

impl fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Human-readable form keeps the wire encoding for the direction.
        write!(
            f,
            "elevatorID: {}, currentFloor: {}, direction: {}, goalFloors: {:?}",
            self.id,
            self.current_floor,
            self.direction.as_delta(),
            self.goal_floors
        )
    }
}
