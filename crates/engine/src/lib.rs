//! Project Chimera engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Narrative game and generation passthrough
//! - `repositories/` - Game records on top of the key-value store port
//! - `infrastructure/` - Port traits plus the Gemini, SQLite and in-memory adapters
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod prompt_templates;
pub mod repositories;
pub mod use_cases;

pub use app::App;
