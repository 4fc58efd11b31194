pub mod dispatcher;
pub mod fsm;
pub mod queue;

pub use dispatcher::ControlSystem;
pub use dispatcher::RequestError;
pub use fsm::Elevator;
pub use queue::RequestQueue;
