//! Terminal client for a personal activity tracker. Activities are started with a title, ended
//! later, and the time in between is reported in a human readable way.
//!

pub mod activity;
pub mod cli;
pub mod client;
pub mod controller;
pub mod format;
pub mod utils;
