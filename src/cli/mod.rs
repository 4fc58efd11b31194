pub mod command;
pub mod command_tests;

pub use command::parse_command;
pub use command::Command;
pub use command::ParseError;
