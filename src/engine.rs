//! Pattern engine contract and the shared adaptation/classification logic.
//!
//! This includes:
//!   - The `PatternEngine` trait every pattern kind implements (generate,
//!     validate, hint) plus two overridable strategy probes
//!   - Difficulty adaptation from recent attempt statistics
//!   - Interaction classification (systematic/random/exploratory/frustrated)
//!   - Progress roll-forward after each attempt
//!
//! The adaptation and classification algorithms are module functions, not
//! trait methods, so concrete generators cannot override them: every
//! pattern kind gets identical frustration-safety behavior.

use chrono::Utc;
use tracing::{debug, instrument};

use crate::domain::{InteractionPattern, PatternAttempt, PatternConfig, PatternElement, PatternProgress};
use crate::protocol::ValidationResult;
use crate::util::clamp01;

pub const DIFFICULTY_MIN: f32 = 1.0;
pub const DIFFICULTY_MAX: f32 = 10.0;

// An attempt counts as a success when marked correct or scored above this.
const SUCCESS_CONFIDENCE: f32 = 0.7;

// Frustration indicators, summed per attempt then averaged over the history.
const FRUSTRATION_RUSHED: f32 = 0.3; // < 3s spent with confidence < 0.3
const FRUSTRATION_HINT_HEAVY: f32 = 0.2; // more than 2 hints consumed
const FRUSTRATION_LOW_CONF_MISS: f32 = 0.1; // incorrect with confidence < 0.1

// Decision thresholds. The order of the branches in
// `apply_difficulty_policy` is load-bearing: the emergency drop must win
// even when the success rate would call for a raise.
const EMERGENCY_FRUSTRATION: f32 = 0.7;
const EMERGENCY_DROP: f32 = 2.0;
const RAISE_SUCCESS_RATE: f32 = 0.8;
const RAISE_FRUSTRATION_CEILING: f32 = 0.3;
const LOWER_SUCCESS_RATE: f32 = 0.4;
const ADJUST_STEP: f32 = 0.5;

// Classification window.
const MIN_HISTORY_FOR_CLASSIFICATION: usize = 3;
const CLASSIFICATION_WINDOW: usize = 5;
const FRUSTRATED_AVG_SECS: f32 = 2.0;
const FRUSTRATED_MISS_THRESHOLD: usize = 3; // strictly more than this many misses

// Mastery smoothing.
const MASTERY_KEEP: f32 = 0.9;
const MASTERY_BLEND: f32 = 0.1;

/// Operations every pattern kind must provide.
///
/// `generate` and `validate_solution` take `&mut self` because a generator
/// caches its most recent config: validation runs against that cache, and
/// self-heals by generating a fresh puzzle when called first.
pub trait PatternEngine {
  /// Produce a brand-new puzzle at the currently configured difficulty.
  /// Repeated calls yield varied puzzles; rule selection is randomized.
  fn generate(&mut self) -> PatternConfig;

  /// Score a submitted element sequence against the accepted solutions of
  /// the most recently generated config.
  fn validate_solution(&mut self, attempt: &[PatternElement]) -> ValidationResult;

  /// One adaptive hint string; never the solution itself.
  fn hint(&self, history: &[PatternAttempt]) -> String;

  /// Probe: does the history show one consistent solving strategy?
  /// Must not panic on malformed history. The default keeps base-only
  /// deployments on the timing heuristic alone.
  fn has_consistent_strategy(&self, _history: &[PatternAttempt]) -> bool {
    false
  }

  /// Probe: does the history show high variance in approach?
  /// Same contract as `has_consistent_strategy`.
  fn has_high_variance_in_approach(&self, _history: &[PatternAttempt]) -> bool {
    false
  }

  /// Classify the user's interaction with this type's probes plugged into
  /// the fixed shared decision order.
  fn classify_interaction(&self, history: &[PatternAttempt]) -> InteractionPattern {
    detect_interaction_pattern(
      history,
      self.has_consistent_strategy(history),
      self.has_high_variance_in_approach(history),
    )
  }
}

fn attempt_succeeded(a: &PatternAttempt) -> bool {
  a.is_correct || a.confidence > SUCCESS_CONFIDENCE
}

/// Fraction of attempts that count as successes. 0.5 with no history, so a
/// fresh user starts in the "unchanged" band instead of being dropped.
pub fn success_rate(attempts: &[PatternAttempt]) -> f32 {
  if attempts.is_empty() {
    return 0.5;
  }
  let hits = attempts.iter().filter(|a| attempt_succeeded(a)).count();
  hits as f32 / attempts.len() as f32
}

/// Averaged frustration score over the given attempts, clamped to 0..=1.
pub fn frustration_score(attempts: &[PatternAttempt]) -> f32 {
  if attempts.is_empty() {
    return 0.0;
  }
  let total: f32 = attempts
    .iter()
    .map(|a| {
      let mut score = 0.0;
      if a.time_spent_secs < 3.0 && a.confidence < 0.3 {
        score += FRUSTRATION_RUSHED;
      }
      if a.hints_used > 2 {
        score += FRUSTRATION_HINT_HEAVY;
      }
      if !a.is_correct && a.confidence < 0.1 {
        score += FRUSTRATION_LOW_CONF_MISS;
      }
      score
    })
    .sum();
  clamp01(total / attempts.len() as f32)
}

/// The adaptation decision, separated from the statistics so the branch
/// ordering can be exercised directly: the emergency drop short-circuits
/// before the success-rate branches are even considered.
pub fn apply_difficulty_policy(current: f32, success: f32, frustration: f32) -> f32 {
  let next = if frustration > EMERGENCY_FRUSTRATION {
    current - EMERGENCY_DROP
  } else if success > RAISE_SUCCESS_RATE && frustration < RAISE_FRUSTRATION_CEILING {
    current + ADJUST_STEP
  } else if success < LOWER_SUCCESS_RATE {
    current - ADJUST_STEP
  } else {
    current
  };
  next.clamp(DIFFICULTY_MIN, DIFFICULTY_MAX)
}

/// Compute the next difficulty from recent attempts. Pure; the caller owns
/// writing the result back into its progress record.
#[instrument(level = "debug", skip(recent), fields(attempts = recent.len()))]
pub fn adapt_difficulty(current: f32, recent: &[PatternAttempt]) -> f32 {
  let success = success_rate(recent);
  let frustration = frustration_score(recent);
  let next = apply_difficulty_policy(current, success, frustration);
  debug!(
    target: "puzzle",
    current, success, frustration, next,
    "Difficulty adaptation"
  );
  next
}

/// Classify how the user is interacting from their attempt history.
///
/// With fewer than 3 attempts everything is exploratory: there is not
/// enough signal to say anything stronger. The probes come from the
/// concrete pattern type; base defaults are `false`, which degrades
/// classification to the timing heuristic.
pub fn detect_interaction_pattern(
  attempts: &[PatternAttempt],
  consistent_strategy: bool,
  high_variance: bool,
) -> InteractionPattern {
  if attempts.len() < MIN_HISTORY_FOR_CLASSIFICATION {
    return InteractionPattern::Exploratory;
  }

  let window = &attempts[attempts.len().saturating_sub(CLASSIFICATION_WINDOW)..];
  let avg_secs =
    window.iter().map(|a| a.time_spent_secs).sum::<f32>() / window.len() as f32;
  let misses = window.iter().filter(|a| !a.is_correct).count();
  if avg_secs < FRUSTRATED_AVG_SECS && misses > FRUSTRATED_MISS_THRESHOLD {
    return InteractionPattern::Frustrated;
  }

  if consistent_strategy {
    InteractionPattern::Systematic
  } else if high_variance {
    InteractionPattern::Random
  } else {
    InteractionPattern::Exploratory
  }
}

/// Roll a progress record forward by one attempt and return the next value.
/// The input is untouched; the host decides when to persist.
#[instrument(level = "debug", skip_all, fields(user = %progress.user_id))]
pub fn update_progress(progress: &PatternProgress, attempt: &PatternAttempt) -> PatternProgress {
  let mut next = progress.clone();
  let succeeded = attempt_succeeded(attempt);

  next.total_attempts += 1;
  if succeeded {
    next.successful_attempts += 1;
  }

  // Incremental mean keeps the running average exact without a history scan.
  next.average_time_to_solve +=
    (attempt.time_spent_secs - next.average_time_to_solve) / next.total_attempts as f32;

  let recent = if succeeded { 1.0 } else { 0.0 };
  next.mastery_level = clamp01(next.mastery_level * MASTERY_KEEP + recent * MASTERY_BLEND);
  next.last_played = Utc::now();

  // A strategy that just paid off is worth remembering on the profile.
  if succeeded {
    let tag = attempt.interaction.as_str().to_string();
    if !next.preferred_strategies.contains(&tag) {
      next.preferred_strategies.push(tag);
    }
  }

  next
}
