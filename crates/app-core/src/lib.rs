pub mod config;
pub mod geometry;
pub mod links;
pub mod particle;
pub mod scheduler;
pub mod sim;

pub use config::*;
pub use links::*;
pub use particle::*;
pub use scheduler::*;
pub use sim::*;
