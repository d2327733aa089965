// src/application/ports/mod.rs
pub mod security;
pub mod time;

pub type EditorAuthenticatorPort = dyn security::EditorAuthenticator;
pub type ClockPort = dyn time::Clock;
