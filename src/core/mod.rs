// src/core/mod.rs — Session engine core

pub mod emotion;
pub mod engine;
pub mod fallback;
pub mod history;
pub mod session;
