//! Startup wiring for demo content seeding.

mod config;
mod startup;

pub use config::DemoContentSettings;
pub use startup::seed_demo_content_on_startup;
