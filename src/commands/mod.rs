//! Command implementations for hampath

pub mod demo;
pub mod dispatch;
pub mod find;
pub mod input;
pub mod verify;
