pub mod diagnostics;
pub mod health;
pub mod metrics;
pub mod posts;
pub mod settings;
