//! Collaborator traits
//!
//! These traits define the interface between the decoder and the
//! hardware-specific (or simulated) implementations.

pub mod console;
pub mod line;
pub mod timer;

pub use console::Console;
pub use line::LineSampler;
pub use timer::TickTimer;
