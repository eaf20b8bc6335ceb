//! Loading the engine texts profile (hints, feedback, suggestions) from TOML.
//!
//! Every user-visible string the engine emits lives in `EngineTexts`, with
//! defaults tuned for the built-in visual puzzles. A host can re-voice the
//! engine (other language, other tone) by shipping a TOML profile and
//! passing its path to `load_engine_profile`; the engine itself never reads
//! the environment or the filesystem on its own.

use serde::Deserialize;
use tracing::{error, info};

use crate::error::EngineError;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct EngineProfile {
  #[serde(default)]
  pub texts: EngineTexts,
}

/// User-visible strings emitted by the engine. Defaults are sensible for the
/// visual sequence puzzles; override any subset in TOML to tune the voice.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EngineTexts {
  // The four hints attached to every generated puzzle, in order.
  pub opening_hint: String,
  /// Rule-specific; `{property}` and `{family}` are substituted.
  pub rule_hint_template: String,
  pub continue_hint: String,
  pub plurality_hint: String,

  // Validation feedback ladder, highest confidence tier first.
  pub feedback_perfect: String,
  pub feedback_close: String,
  pub feedback_progress: String,
  pub feedback_explore: String,
  pub suggestions: Vec<String>,

  // Adaptive hints keyed on the classified interaction pattern.
  pub hint_frustrated: String,
  /// `{property}` is substituted with the governing property.
  pub hint_systematic_template: String,
  pub hint_random: String,
  pub hint_exploratory: String,
}

impl Default for EngineTexts {
  fn default() -> Self {
    Self {
      opening_hint: "Look at how the shapes change from left to right.".into(),
      rule_hint_template:
        "Watch the {property}: it follows the {family} rule family.".into(),
      continue_hint: "You're close. Keep going one position at a time.".into(),
      plurality_hint:
        "There can be more than one right answer. Any consistent reading counts.".into(),

      feedback_perfect: "Perfect! You read the pattern exactly.".into(),
      feedback_close: "Very close. One or two positions are off.".into(),
      feedback_progress: "Good start. Part of the pattern is there.".into(),
      feedback_explore: "Keep exploring. Try reading the visible positions again.".into(),
      suggestions: vec![
        "Compare each position with its neighbours.".into(),
        "Check one property at a time: shape, then color, then size.".into(),
        "Use the visible start and end of the row as anchors.".into(),
      ],

      hint_frustrated:
        "Take a breath. There is no timer, and the visible pieces already tell most of the story."
          .into(),
      hint_systematic_template:
        "Your approach is working. Write down the {property} at each position and look at the differences."
          .into(),
      hint_random:
        "Slow down and follow the row step by step: what changes between one tile and the next?"
          .into(),
      hint_exploratory:
        "Experiment freely. Change one thing at a time and see which reading fits.".into(),
    }
  }
}

/// Load an `EngineProfile` from an explicit TOML path supplied by the host.
pub fn load_engine_profile(path: &str) -> Result<EngineProfile, EngineError> {
  let raw = std::fs::read_to_string(path).map_err(|e| {
    error!(target: "pattern_prophet", %path, error = %e, "Failed to read engine profile");
    EngineError::ProfileRead { path: path.to_string(), source: e }
  })?;
  match toml::from_str::<EngineProfile>(&raw) {
    Ok(profile) => {
      info!(target: "pattern_prophet", %path, "Loaded engine profile (TOML)");
      Ok(profile)
    }
    Err(e) => {
      error!(target: "pattern_prophet", %path, error = %e, "Failed to parse engine profile");
      Err(EngineError::ProfileParse { path: path.to_string(), source: e })
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn partial_profile_keeps_defaults_for_missing_fields() {
    let profile: EngineProfile = toml::from_str(
      r#"
        [texts]
        opening_hint = "Mira cómo cambian las formas."
      "#,
    )
    .expect("profile");
    assert_eq!(profile.texts.opening_hint, "Mira cómo cambian las formas.");
    // Untouched fields fall back to the built-in voice.
    assert_eq!(profile.texts.suggestions.len(), 3);
    assert!(!profile.texts.feedback_perfect.is_empty());
  }

  #[test]
  fn empty_profile_is_fully_defaulted() {
    let profile: EngineProfile = toml::from_str("").expect("profile");
    assert!(!profile.texts.hint_frustrated.is_empty());
  }
}
