pub mod macros;
pub mod structs;

pub use structs::Direction;
pub use structs::ElevatorStatus;
pub use structs::PickupRequest;
pub use structs::MAX_FLOOR;
pub use structs::MIN_FLOOR;
