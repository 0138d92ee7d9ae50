pub mod engine;
pub mod event;
pub mod observer;
pub mod state;

pub use engine::{Outcome, Simulation};
pub use event::Event;
pub use state::{ProcId, Process, SimState, Ticks};
