// src/gui/components/mod.rs
pub mod action_bar;
pub mod game_table;
pub mod status_bar;
pub mod tabs;
