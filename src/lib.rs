// src/lib.rs — Library root for MindMate

pub mod cli;
pub mod core;
pub mod infra;
pub mod provider;
