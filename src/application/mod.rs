pub mod cli;
pub mod quiz;
