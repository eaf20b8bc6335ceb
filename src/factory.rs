//! Single construction point for pattern engines, plus the default records
//! handed out before a user has played anything.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{AccessibilityFlags, PatternConfig, PatternKind, PatternProgress};
use crate::engine::{PatternEngine, DIFFICULTY_MAX, DIFFICULTY_MIN};
use crate::error::EngineError;
use crate::visual::VisualSequenceGenerator;

/// Starting difficulty when a caller does not specify one.
pub const DEFAULT_DIFFICULTY: f32 = 3.0;

/// Build an engine for the requested kind.
///
/// Only `visual-sequence` is wired to a real generator. The other declared
/// kinds fail with a named error so callers can tell "unsupported" apart
/// from a generation failure.
pub fn create_pattern(
  kind: PatternKind,
  config: PatternConfig,
  progress: PatternProgress,
) -> Result<Box<dyn PatternEngine>, EngineError> {
  match kind {
    PatternKind::VisualSequence => {
      info!(target: "puzzle", %kind, difficulty = config.difficulty, "Creating pattern engine");
      Ok(Box::new(VisualSequenceGenerator::new(config, progress)))
    }
    other => {
      warn!(target: "puzzle", kind = %other, "Requested pattern kind has no generator yet");
      Err(EngineError::UnsupportedPatternType(other))
    }
  }
}

/// Empty-elements/empty-solutions skeleton used purely as a seed object
/// before the first `generate()` call. Accessibility defaults all on.
pub fn default_config(kind: PatternKind, difficulty: Option<f32>) -> PatternConfig {
  PatternConfig {
    id: Uuid::new_v4().to_string(),
    pattern_type: kind,
    difficulty: difficulty
      .unwrap_or(DEFAULT_DIFFICULTY)
      .clamp(DIFFICULTY_MIN, DIFFICULTY_MAX),
    elements: vec![],
    masked_positions: vec![],
    rule: None,
    solutions: vec![],
    hints: vec![],
    accessibility: AccessibilityFlags::default(),
  }
}

/// Fresh progress record for a user's first play of a pattern kind.
pub fn default_progress(user_id: &str, kind: PatternKind) -> PatternProgress {
  PatternProgress {
    user_id: user_id.to_string(),
    pattern_type: kind,
    difficulty: DIFFICULTY_MIN,
    total_attempts: 0,
    successful_attempts: 0,
    average_time_to_solve: 0.0,
    preferred_strategies: vec![],
    last_played: Utc::now(),
    mastery_level: 0.0,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn visual_sequence_is_wired() {
    let config = default_config(PatternKind::VisualSequence, None);
    let progress = default_progress("u1", PatternKind::VisualSequence);
    let mut engine = create_pattern(PatternKind::VisualSequence, config, progress).expect("engine");
    let puzzle = engine.generate();
    assert!(!puzzle.elements.is_empty());
    assert!(!puzzle.solutions.is_empty());
  }

  #[test]
  fn unbuilt_kinds_fail_with_a_named_error() {
    for kind in [
      PatternKind::Number,
      PatternKind::Musical,
      PatternKind::Spatial,
      PatternKind::RuleBased,
    ] {
      let config = default_config(kind, None);
      let progress = default_progress("u1", kind);
      let err = create_pattern(kind, config, progress).err().expect("should be unsupported");
      let msg = err.to_string();
      assert!(msg.contains("not implemented"), "unexpected message: {msg}");
      assert!(msg.contains(&kind.to_string()), "error should name the kind: {msg}");
    }
  }

  #[test]
  fn default_config_is_an_empty_skeleton() {
    let config = default_config(PatternKind::VisualSequence, None);
    assert_eq!(config.difficulty, DEFAULT_DIFFICULTY);
    assert!(config.elements.is_empty());
    assert!(config.solutions.is_empty());
    assert!(config.rule.is_none());
    assert!(config.accessibility.high_contrast);
    assert!(config.accessibility.keyboard_navigation);
  }

  #[test]
  fn default_config_clamps_out_of_band_difficulty() {
    assert_eq!(default_config(PatternKind::VisualSequence, Some(0.0)).difficulty, 1.0);
    assert_eq!(default_config(PatternKind::VisualSequence, Some(99.0)).difficulty, 10.0);
  }

  #[test]
  fn default_progress_starts_at_the_floor() {
    let progress = default_progress("u1", PatternKind::VisualSequence);
    assert_eq!(progress.difficulty, 1.0);
    assert_eq!(progress.total_attempts, 0);
    assert_eq!(progress.successful_attempts, 0);
    assert_eq!(progress.mastery_level, 0.0);
    assert!(progress.preferred_strategies.is_empty());
  }
}
