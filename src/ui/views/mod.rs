pub mod error;
pub mod finish;
pub mod loader;
pub mod question;
pub mod start;
