//! Worker Lambda handler for the email queue

pub mod handler;

// Re-export the main handler for convenience
pub use handler::handler;
