pub mod config;
pub mod matrix;
pub mod output;
pub mod scoring;
