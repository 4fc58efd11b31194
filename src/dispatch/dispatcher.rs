/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use log::info;
use std::sync::Arc;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::BuildingConfig;
use crate::dispatch::fsm::Elevator;
use crate::dispatch::queue::RequestQueue;
use crate::shared::Direction;
use crate::shared::ElevatorStatus;
use crate::shared::PickupRequest;

/***************************************/
/*               Errors                */
/***************************************/
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("pickup floor {0} is outside the building floor range")]
    FloorOutOfRange(u8),
}

/**
 * # Control System
 * Central dispatcher owning the elevator fleet and the shared request queue.
 *
 * Dispatch is greedy and deterministic: each `step` visits the elevators in
 * creation order, offers the head of the queue to each in turn, and consumes
 * at most one request per step (the first willing elevator takes it).
 * Elevators that are not offered a request, or reject it, simply continue
 * toward their remaining goal floors. A request no elevator accepts stays at
 * the head of the queue and is offered again from elevator 0 on the next
 * step; requests are never dropped or reordered.
 *
 * `step` must not be called concurrently with itself on the same control
 * system. The queue handle, on the other hand, may be shared with producer
 * threads that enqueue pickups while a step is in progress.
 */
pub struct ControlSystem {
    elevators: Vec<Elevator>,
    requests: Arc<RequestQueue>,
    building: BuildingConfig,
}

impl ControlSystem {
    /// Creates a control system with `n_elevators` units, all idle at the
    /// ground floor, serving the default building floor range. The fleet
    /// size is fixed for the lifetime of the system.
    ///
    /// # Panics
    /// Panics if `n_elevators` is zero.
    pub fn new(n_elevators: usize) -> ControlSystem {
        ControlSystem::with_building(n_elevators, BuildingConfig::default())
    }

    /// Same as `new`, but validates pickups against `building`'s floor
    /// range instead of the default one.
    pub fn with_building(n_elevators: usize, building: BuildingConfig) -> ControlSystem {
        assert!(n_elevators > 0, "fleet needs at least one elevator");

        ControlSystem {
            elevators: (0..n_elevators).map(Elevator::new).collect(),
            requests: Arc::new(RequestQueue::new()),
            building,
        }
    }

    /// Shared handle to the request queue, for producers and inspection.
    pub fn request_queue(&self) -> Arc<RequestQueue> {
        Arc::clone(&self.requests)
    }

    /// Validates and enqueues a pickup request. Assignment is deferred to
    /// `step`; the request sits in the queue until an elevator accepts it.
    pub fn pickup(&self, floor: u8, direction: Direction) -> Result<(), RequestError> {
        if floor < self.building.min_floor || floor > self.building.max_floor {
            return Err(RequestError::FloorOutOfRange(floor));
        }

        self.requests.push(PickupRequest { floor, direction });
        debug!("queued pickup at floor {} going {}", floor, direction);
        Ok(())
    }

    /// Advances the whole fleet by one discrete tick.
    ///
    /// For each elevator in index order: offer it the head request if one is
    /// pending and none has been consumed this step; otherwise advance it
    /// toward its remaining goals; otherwise leave it untouched.
    pub fn step(&mut self) {
        let mut consumed = false;

        for elevator in &mut self.elevators {
            let next_floor = elevator.next_floor();

            if !consumed {
                if let Some(request) = self.requests.peek() {
                    if elevator.advance_and_assign(next_floor, Some(&request)) {
                        self.requests.pop();
                        consumed = true;
                        info!(
                            "elevator {} accepted pickup at floor {} going {}",
                            elevator.id(),
                            request.floor,
                            request.direction
                        );
                    } else {
                        debug!(
                            "elevator {} passed on pickup at floor {} going {}",
                            elevator.id(),
                            request.floor,
                            request.direction
                        );
                    }
                    continue;
                }
            }

            if elevator.has_goals() {
                elevator.advance_and_assign(next_floor, None);
                debug!(
                    "elevator {} continued to floor {}",
                    elevator.id(),
                    elevator.current_floor()
                );
            } else {
                debug!("elevator {} is idle, nothing to do", elevator.id());
            }
        }
    }

    /// Point-in-time snapshot of the fleet. Read-only.
    pub fn status(&self) -> Vec<ElevatorStatus> {
        self.elevators.iter().map(Elevator::status).collect()
    }
}
