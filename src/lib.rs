pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod model;
pub mod report;
pub mod run;
pub mod scan;
pub mod tally;
