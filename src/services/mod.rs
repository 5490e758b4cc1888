pub mod build;
pub mod persistence;
pub mod report;
