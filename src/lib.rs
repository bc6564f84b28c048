//! Hmong RPA toolkit: an [`HmongEngine`] context over the `hmong_core`
//! tables, file-based configuration and tracing setup.

pub mod api;
pub mod trace_init;

pub use api::{
    engine_version, ConfigKind, EngineConfig, HmongEngine, HmongError, TokenAnalysis,
};
pub use hmong_core;
