//! The slave: answers text commands, one per received chunk.

pub mod command;
pub mod handler;
pub mod listener;
