pub mod entities;
pub mod inference;
pub mod interpreter;
pub mod ports;
pub mod prompts;
pub mod rules;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use interpreter::interpret;
pub use ports::*;
pub use value_objects::*;
