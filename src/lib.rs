// Shoes & Staff - Core Library
// Exposes the entity models and the demo report for the CLI and tests

pub mod entities;
pub mod demo;

// Re-export commonly used types
pub use entities::{Employee, Shoe};
pub use demo::{demo_employees, demo_shoes, run, run_json, run_text, DemoReport};
