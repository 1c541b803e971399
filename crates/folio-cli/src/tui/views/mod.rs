//! Main views

pub mod sections;
