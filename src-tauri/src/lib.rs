//! CraftStash library
//!
//! This library exposes the application core (store, query engine, services)
//! for testing and for the desktop binary.

pub mod app;
#[cfg(feature = "tauri")]
pub mod commands;
pub mod config;
pub mod error;
pub mod services;
pub mod store;
