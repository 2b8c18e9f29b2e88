pub mod agent;
pub mod entities;
pub mod extractor;
pub mod policies;
pub mod ports;
pub mod presentation;
pub mod prompts;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
