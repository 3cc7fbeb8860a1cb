//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - The key-value store (could swap SQLite -> Redis/Vercel KV)
//! - LLM calls (could swap Gemini -> another provider)
//! - Clock (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Store Ports
// =============================================================================
pub use repos::{GameKeys, KvStore};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{
    default_safety_settings, BlockThreshold, GenerationParams, HarmCategory, LlmPort, LlmRequest,
    LlmResponse, SafetySetting,
};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::MockLlmPort;
#[cfg(test)]
pub use repos::MockKvStore;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{LlmError, RepoError};
