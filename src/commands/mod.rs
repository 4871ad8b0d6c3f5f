//! Command implementations for the Saints statistics CLI

pub mod common;
pub mod draft;
pub mod games;
pub mod leaders;
pub mod players;
pub mod seasons;
pub mod tool;
