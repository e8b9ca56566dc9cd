pub mod cliopt;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod runner;
