/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::BTreeSet;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Direction;
use crate::shared::ElevatorStatus;
use crate::shared::PickupRequest;
use crate::shared::MIN_FLOOR;

/**
 * # Elevator
 * Per-unit goal-tracking state machine.
 *
 * An elevator holds its current floor, its direction of travel and the set
 * of floors it is committed to stopping at. The states are Idle (no goal
 * floors), Moving-Up and Moving-Down; an idle elevator adopts the direction
 * of the first pickup it accepts, a moving elevator only accepts pickups
 * that lie ahead of it in its current direction.
 *
 * # Fields
 * - `id`:            Stable identifier, assigned at creation.
 * - `current_floor`: Floor the elevator is at, starts at 0 (ground).
 * - `direction`:     Current direction of travel, starts Up.
 * - `goal_floors`:   Floors the elevator must stop at. Ordered so that
 *                    status snapshots are deterministic.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elevator {
    id: usize,
    current_floor: u8,
    direction: Direction,
    goal_floors: BTreeSet<u8>,
}

impl Elevator {
    pub fn new(id: usize) -> Elevator {
        Elevator {
            id,
            current_floor: MIN_FLOOR,
            direction: Direction::Up,
            goal_floors: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn current_floor(&self) -> u8 {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// True while the elevator has at least one goal floor left.
    pub fn has_goals(&self) -> bool {
        !self.goal_floors.is_empty()
    }

    /// Whether this elevator may take on `floor` as a new stop for a
    /// passenger travelling in `direction`.
    ///
    /// An idle elevator accepts any request and adopts its direction. A
    /// moving elevator accepts only requests in its own direction whose
    /// floor it has not yet passed: going up, `current_floor <= floor`;
    /// going down, `current_floor >= floor`.
    pub fn can_accept(&mut self, floor: u8, direction: Direction) -> bool {
        if self.goal_floors.is_empty() {
            self.direction = direction;
            return true;
        }

        if self.direction == direction {
            match direction {
                Direction::Up => self.current_floor <= floor,
                Direction::Down => self.current_floor >= floor,
            }
        } else {
            false
        }
    }

    /// One tick of this elevator: commit the move, then try to take on a
    /// new pickup.
    ///
    /// If the elevator is already moving (has goals), it first advances to
    /// `next_floor` and clears that floor from its goal set if it was a
    /// stop. With `Some(pickup)` it then runs the acceptance check and on
    /// success records the pickup floor as a new goal, returning true so the
    /// caller can consume the request. With `None` (continuation move, no
    /// pending pickup to offer) the tick is move-only and the return value
    /// carries no meaning.
    pub fn advance_and_assign(&mut self, next_floor: u8, pickup: Option<&PickupRequest>) -> bool {
        if self.has_goals() {
            self.current_floor = next_floor;
            self.goal_floors.remove(&next_floor);
        }

        match pickup {
            Some(request) => {
                if self.can_accept(request.floor, request.direction) {
                    self.goal_floors.insert(request.floor);
                    true
                } else {
                    false
                }
            }
            None => false,
        }
    }

    /// Floor this elevator would move to on its next tick.
    ///
    /// Clamped at the bottom: a Down elevator already at floor 0 moves up.
    /// There is deliberately no matching clamp at the top floor; see the
    /// dispatch policy notes in DESIGN.md.
    pub fn next_floor(&self) -> u8 {
        if self.direction == Direction::Down && self.current_floor > MIN_FLOOR {
            self.current_floor - 1
        } else {
            self.current_floor.saturating_add(1)
        }
    }

    pub fn status(&self) -> ElevatorStatus {
        ElevatorStatus {
            id: self.id,
            current_floor: self.current_floor,
            direction: self.direction,
            goal_floors: self.goal_floors.iter().copied().collect(),
        }
    }
}
