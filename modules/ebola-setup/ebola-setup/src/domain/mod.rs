pub mod catalog;
pub mod configurator;
pub mod error;
pub mod steps;
