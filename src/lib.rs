//! Pattern Prophet · adaptive pattern-puzzle engine
//!
//! - Generates parameterized visual sequence puzzles (shape / color / size /
//!   rotation governed by a single rule per sequence)
//! - Grades submissions with partial credit against a set of accepted
//!   solutions (never a rigid single answer)
//! - Classifies interaction signatures from timing and correctness history
//!   and micro-adjusts difficulty to stay clear of frustration cliffs
//!
//! The crate is synchronous and performs no I/O: the host application feeds
//! it configs, attempts, and progress records, and persists whatever comes
//! back. One engine instance per active puzzle session.
//!
//! Typical flow:
//!   1. `factory::default_config` + `factory::default_progress` on first play
//!   2. `factory::create_pattern` to build the engine
//!   3. `generate()` → render `protocol::to_out(&config)` (solutions stay
//!      server-side)
//!   4. `validate_solution(...)` on submission, `hint(...)` on request
//!   5. `engine::update_progress` + `engine::adapt_difficulty`, persist

pub mod telemetry;
pub mod util;
pub mod domain;
pub mod config;
pub mod error;
pub mod engine;
pub mod visual;
pub mod factory;
pub mod protocol;

pub use crate::config::{load_engine_profile, EngineProfile, EngineTexts};
pub use crate::domain::{
    AccessibilityFlags, ElementProperty, InteractionPattern, PatternAttempt, PatternConfig,
    PatternElement, PatternKind, PatternProgress, PatternSolution, SequenceRule, Shape,
};
pub use crate::engine::{
    adapt_difficulty, detect_interaction_pattern, update_progress, PatternEngine,
};
pub use crate::error::EngineError;
pub use crate::factory::{create_pattern, default_config, default_progress};
pub use crate::protocol::{to_out, PatternConfigOut, ValidationResult};
pub use crate::visual::VisualSequenceGenerator;
