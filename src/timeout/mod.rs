// src/timeout/mod.rs
mod supervisor;

pub use supervisor::{run_detached, TimeoutSupervisor};
