//! Public boundary structs handed to the host application (serde ready).
//! Keep this small and stable so the engine and the host UI can evolve
//! independently.

use serde::Serialize;

use crate::domain::{AccessibilityFlags, PatternConfig, PatternElement, PatternKind, Shape};

/// Result of scoring one submission.
#[derive(Clone, Debug, Serialize)]
pub struct ValidationResult {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    /// Best match against the accepted solutions, 0..=1 (partial credit).
    pub confidence: f32,
    pub feedback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

/// Element DTO for rendering. Masked positions arrive with `shape: null`
/// and the neutral placeholder color.
#[derive(Clone, Debug, Serialize)]
pub struct ElementOut {
    pub id: String,
    #[serde(rename = "elementType")]
    pub element_type: String,
    pub shape: Option<Shape>,
    pub color: String,
    pub size: u8,
    pub rotation: u16,
    #[serde(rename = "strokeWidth")]
    pub stroke_width: u8,
    pub filled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<(f32, f32)>,
}

/// Puzzle DTO for rendering. The accepted solutions and the generating rule
/// are deliberately absent: they never cross to a UI.
#[derive(Clone, Debug, Serialize)]
pub struct PatternConfigOut {
    pub id: String,
    #[serde(rename = "patternType")]
    pub pattern_type: PatternKind,
    pub difficulty: f32,
    pub elements: Vec<ElementOut>,
    #[serde(rename = "maskedPositions")]
    pub masked_positions: Vec<usize>,
    pub hints: Vec<String>,
    pub accessibility: AccessibilityOut,
}

#[derive(Clone, Debug, Serialize)]
pub struct AccessibilityOut {
    #[serde(rename = "highContrast")]
    pub high_contrast: bool,
    #[serde(rename = "reducedMotion")]
    pub reduced_motion: bool,
    #[serde(rename = "audioDescriptions")]
    pub audio_descriptions: bool,
    #[serde(rename = "keyboardNavigation")]
    pub keyboard_navigation: bool,
}

fn element_to_out(e: &PatternElement) -> ElementOut {
    ElementOut {
        id: e.id.clone(),
        element_type: e.element_type.clone(),
        shape: e.shape,
        color: e.color.clone(),
        size: e.size,
        rotation: e.rotation,
        stroke_width: e.stroke_width,
        filled: e.filled,
        position: e.position,
    }
}

fn accessibility_to_out(a: &AccessibilityFlags) -> AccessibilityOut {
    AccessibilityOut {
        high_contrast: a.high_contrast,
        reduced_motion: a.reduced_motion,
        audio_descriptions: a.audio_descriptions,
        keyboard_navigation: a.keyboard_navigation,
    }
}

/// Convert a full `PatternConfig` (internal) to the public DTO.
pub fn to_out(c: &PatternConfig) -> PatternConfigOut {
    PatternConfigOut {
        id: c.id.clone(),
        pattern_type: c.pattern_type,
        difficulty: c.difficulty,
        elements: c.elements.iter().map(element_to_out).collect(),
        masked_positions: c.masked_positions.clone(),
        hints: c.hints.clone(),
        accessibility: accessibility_to_out(&c.accessibility),
    }
}
