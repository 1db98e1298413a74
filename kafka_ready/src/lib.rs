pub mod admin;
pub mod clock;
pub mod connection_settings;
pub mod error;
pub mod properties;
pub mod queries;
