mod choice;
mod sampler_choice;
mod scheduler_choice;
mod simulation_config;

pub use choice::{Choice, ChoiceOption};
pub use sampler_choice::*;
pub use scheduler_choice::*;
pub use simulation_config::SimulationConfig;
