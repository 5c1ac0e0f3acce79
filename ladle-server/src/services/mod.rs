//! External collaborators

pub mod email;

pub use email::EmailService;
