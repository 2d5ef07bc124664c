pub mod completions;
pub mod config;
pub mod run;
pub mod smoke_test;
