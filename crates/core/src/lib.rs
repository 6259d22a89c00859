#![deny(warnings)]

pub mod assistant;
pub mod config;
pub mod emotion;
pub mod translate;
