//! Email service client and request signing

pub mod client;
pub mod requests;
pub mod signature;

pub use client::{CommunicationEmailClient, EmailSender, SendStatus};
