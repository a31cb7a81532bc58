//! tasklist library - task collection, JSON persistence and front ends

pub mod cli;
pub mod config;
pub mod task;
pub mod tui;
