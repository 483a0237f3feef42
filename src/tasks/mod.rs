//! Background Tasks Module
//!
//! Contains the periodic cache sweep task.

mod sweep;

pub use sweep::spawn_sweep_task;
