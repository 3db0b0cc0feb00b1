pub mod goals;
pub mod health;
pub mod progress;
pub mod stats;
