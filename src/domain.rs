//! Domain models used by the engine: elements, rules, puzzle configs,
//! attempts, and per-user progress.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which family of puzzles is being played?
///
/// Only `VisualSequence` has a generator today; the other kinds are declared
/// so callers can request them and get a named "not implemented" error
/// instead of a crash somewhere deeper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
  VisualSequence,
  Number,
  Musical,
  Spatial,
  RuleBased,
}

impl Default for PatternKind {
  fn default() -> Self { PatternKind::VisualSequence }
}

impl std::fmt::Display for PatternKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let s = match self {
      PatternKind::VisualSequence => "visual-sequence",
      PatternKind::Number => "number",
      PatternKind::Musical => "musical",
      PatternKind::Spatial => "spatial",
      PatternKind::RuleBased => "rule-based",
    };
    f.write_str(s)
  }
}

/// Shapes a visual element can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
  Circle,
  Square,
  Triangle,
  Star,
  Hexagon,
  Diamond,
}

impl Shape {
  pub const ALL: [Shape; 6] = [
    Shape::Circle,
    Shape::Square,
    Shape::Triangle,
    Shape::Star,
    Shape::Hexagon,
    Shape::Diamond,
  ];
}

/// Element property a rule can act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementProperty {
  Shape,
  Color,
  Size,
  Rotation,
}

impl ElementProperty {
  pub fn name(&self) -> &'static str {
    match self {
      ElementProperty::Shape => "shape",
      ElementProperty::Color => "color",
      ElementProperty::Size => "size",
      ElementProperty::Rotation => "rotation",
    }
  }
}

/// One visual unit of a sequence.
///
/// Immutable once generated; masking (clearing the shape and neutralizing
/// the color) is the only edit applied before an element reaches a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatternElement {
  pub id: String,
  pub element_type: String, // currently always "shape"
  /// `None` once the position has been masked for the player.
  pub shape: Option<Shape>,
  /// Hex color, e.g. "#3498DB".
  pub color: String,
  /// 1..=10.
  pub size: u8,
  /// Degrees, 0..360.
  pub rotation: u16,
  pub stroke_width: u8,
  pub filled: bool,
  #[serde(default)]
  pub position: Option<(f32, f32)>,
}

/// The generative law governing how one property evolves across a sequence.
/// Exactly one rule governs one generated sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum SequenceRule {
  /// Linear step on a numeric property: `base + index * step`.
  Increment { property: ElementProperty, step: i16 },
  /// Period-2 cycle over two values of a property (colors today).
  Alternating { property: ElementProperty, values: [String; 2] },
  /// Fixed-length repeating cycle of values (shapes today).
  Pattern { property: ElementProperty, cycle: Vec<Shape> },
  /// Value depends on another property. Declared extension point; element
  /// synthesis currently passes the base value through unchanged.
  Conditional { property: ElementProperty, depends_on: ElementProperty },
}

impl SequenceRule {
  /// The property this rule varies.
  pub fn property(&self) -> ElementProperty {
    match self {
      SequenceRule::Increment { property, .. } => *property,
      SequenceRule::Alternating { property, .. } => *property,
      SequenceRule::Pattern { property, .. } => *property,
      SequenceRule::Conditional { property, .. } => *property,
    }
  }

  /// Rule family name, used in hints and logs.
  pub fn family(&self) -> &'static str {
    match self {
      SequenceRule::Increment { .. } => "increment",
      SequenceRule::Alternating { .. } => "alternating",
      SequenceRule::Pattern { .. } => "pattern",
      SequenceRule::Conditional { .. } => "conditional",
    }
  }

  /// How much a rule family adds to the presented difficulty.
  pub fn complexity_bonus(&self) -> f32 {
    match self {
      SequenceRule::Increment { .. } => 1.0,
      SequenceRule::Alternating { .. } => 2.0,
      SequenceRule::Pattern { .. } => 3.0,
      SequenceRule::Conditional { .. } => 5.0,
    }
  }
}

/// Presentation-layer switches, passed through untouched.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AccessibilityFlags {
  pub high_contrast: bool,
  pub reduced_motion: bool,
  pub audio_descriptions: bool,
  pub keyboard_navigation: bool,
}

impl Default for AccessibilityFlags {
  fn default() -> Self {
    Self {
      high_contrast: true,
      reduced_motion: true,
      audio_descriptions: true,
      keyboard_navigation: true,
    }
  }
}

/// One accepted answer for the masked positions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatternSolution {
  /// Elements for the masked positions, in order.
  pub elements: Vec<PatternElement>,
  /// 1.0 for the canonical solution, below that for accepted alternates.
  pub confidence: f32,
  #[serde(default)]
  pub reasoning: Option<String>,
}

/// A full puzzle instance. Created once per `generate` call and never
/// mutated afterwards; a new generation replaces it wholesale.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatternConfig {
  pub id: String,
  pub pattern_type: PatternKind,
  /// Presented difficulty, 1..=10. Recomputed from realized complexity, not
  /// just echoed from the request.
  pub difficulty: f32,
  /// Full ordered sequence; elements at `masked_positions` are masked.
  pub elements: Vec<PatternElement>,
  /// Contiguous interior run of indices the player must fill in.
  pub masked_positions: Vec<usize>,
  /// The generating rule. `None` on factory skeletons that have not been
  /// through `generate` yet. Stripped before the config reaches a UI.
  #[serde(default)]
  pub rule: Option<SequenceRule>,
  /// Accepted answers; never empty after generation. Rigid single-answer
  /// puzzles are disallowed, so pattern-family rules carry an alternate.
  pub solutions: Vec<PatternSolution>,
  /// Progressively revealing hints, most general first.
  pub hints: Vec<String>,
  pub accessibility: AccessibilityFlags,
}

/// How a user appears to be interacting, derived from attempt history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionPattern {
  Systematic,
  Random,
  Exploratory,
  Frustrated,
}

impl InteractionPattern {
  pub fn as_str(&self) -> &'static str {
    match self {
      InteractionPattern::Systematic => "systematic",
      InteractionPattern::Random => "random",
      InteractionPattern::Exploratory => "exploratory",
      InteractionPattern::Frustrated => "frustrated",
    }
  }
}

/// One submission event. Immutable; appended to the per-user history the
/// adaptation algorithms consume.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatternAttempt {
  pub id: String,
  pub timestamp: DateTime<Utc>,
  pub elements: Vec<PatternElement>,
  pub is_correct: bool,
  /// 0..=1.
  pub confidence: f32,
  pub time_spent_secs: f32,
  pub hints_used: u32,
  pub interaction: InteractionPattern,
}

/// Per-user, per-pattern-kind rolling state. The host persists this; the
/// engine only computes the next value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatternProgress {
  pub user_id: String,
  pub pattern_type: PatternKind,
  /// Current difficulty, 1..=10 (float so half-step adjustments stick).
  pub difficulty: f32,
  pub total_attempts: u32,
  pub successful_attempts: u32,
  /// Running average solve time in seconds.
  pub average_time_to_solve: f32,
  pub preferred_strategies: Vec<String>,
  pub last_played: DateTime<Utc>,
  /// Exponentially smoothed proficiency estimate, 0..=1.
  pub mastery_level: f32,
}
