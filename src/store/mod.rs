pub mod atomic;
pub mod recover;
pub mod tasks;
