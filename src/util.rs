//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
/// This is intentionally simple (no nested/conditional logic); it drives the
/// rule-specific hint strings, which only ever substitute a property name
/// and a rule family.
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Clamp a score/ratio into the 0..=1 band shared by confidence, mastery,
/// and frustration values.
pub fn clamp01(v: f32) -> f32 {
  v.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn template_replaces_all_occurrences() {
    let out = fill_template("{p} then {p} via {f}", &[("p", "size"), ("f", "increment")]);
    assert_eq!(out, "size then size via increment");
  }

  #[test]
  fn clamp01_bounds() {
    assert_eq!(clamp01(-0.5), 0.0);
    assert_eq!(clamp01(1.5), 1.0);
    assert_eq!(clamp01(0.42), 0.42);
  }
}
