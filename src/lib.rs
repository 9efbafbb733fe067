// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;

pub mod fsops;
pub mod gui;
pub mod library;
pub mod paths;
pub mod process;
