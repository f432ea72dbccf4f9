//! Validator / sanitizer for untrusted settings input.
//!
//! Settings arrive from places we do not control: a stored JSON blob written
//! by an older build, a hand-edited file, a UI form.  Nothing here ever
//! rejects input.  Instead every field is checked on its own against its
//! registry and replaced with the registered default when it is missing or
//! unknown.  One bad field never affects its siblings.
//!
//! - [`sanitize`] returns just the repaired [`Configuration`].
//! - [`validate`] returns the same configuration plus one diagnostic per
//!   substituted field, for logging.
//!
//! `null` is the first-run case (nothing stored yet) and yields the defaults
//! without diagnostics.  Any other non-object is treated as `{}`.  Keys the
//! schema does not know are dropped.

use serde_json::{Map, Value};

use crate::domain::color_scheme::ColorSchemeId;
use crate::domain::config::{Configuration, LoginSettings, NavigationSettings};
use crate::domain::font::FontId;
use crate::domain::login::LoginLayoutId;
use crate::domain::mode::ThemeMode;
use crate::domain::navigation::{LayoutTypeId, NavPositionId};
use crate::domain::registry::RegistryEntry;

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// `true` when no field had to be substituted.
    pub valid: bool,
    /// One human-readable line per substituted field.
    pub errors: Vec<String>,
    /// The repaired configuration; always fully populated.
    pub sanitized: Configuration,
}

/// Repairs `candidate` into a valid configuration.  Never fails.
pub fn sanitize(candidate: &Value) -> Configuration {
    let mut sink = Vec::new();
    resolve(candidate, &mut sink)
}

/// Like [`sanitize`], but also reports which fields were substituted.
pub fn validate(candidate: &Value) -> ValidationReport {
    let mut errors = Vec::new();
    let sanitized = resolve(candidate, &mut errors);
    ValidationReport {
        valid: errors.is_empty(),
        errors,
        sanitized,
    }
}

fn resolve(candidate: &Value, errors: &mut Vec<String>) -> Configuration {
    let empty = Map::new();
    let root = match candidate {
        Value::Null => return Configuration::defaults(),
        Value::Object(map) => map,
        _ => &empty,
    };

    let navigation = child_object(root, "navigation", &empty);
    let login = child_object(root, "login", &empty);

    Configuration {
        mode: resolve_field::<ThemeMode>(root, "mode", errors),
        color_scheme: resolve_field::<ColorSchemeId>(root, "colorScheme", errors),
        font: resolve_field::<FontId>(root, "font", errors),
        navigation: NavigationSettings {
            position: resolve_field::<NavPositionId>(navigation, "position", errors),
            layout: resolve_field::<LayoutTypeId>(navigation, "layout", errors),
        },
        login: LoginSettings {
            layout: resolve_field::<LoginLayoutId>(login, "layout", errors),
        },
    }
}

/// Returns the nested object at `key`, or `empty` when absent or not an object.
fn child_object<'a>(
    parent: &'a Map<String, Value>,
    key: &str,
    empty: &'a Map<String, Value>,
) -> &'a Map<String, Value> {
    parent.get(key).and_then(Value::as_object).unwrap_or(empty)
}

fn resolve_field<T: RegistryEntry>(
    parent: &Map<String, Value>,
    key: &str,
    errors: &mut Vec<String>,
) -> T {
    let fallback = T::default();
    match parent.get(key) {
        Some(Value::String(id)) => match T::from_id(id) {
            Some(entry) => entry,
            None => {
                errors.push(format!(
                    "{}: invalid value {:?}, using default {:?}",
                    T::FIELD,
                    id,
                    fallback.id()
                ));
                fallback
            }
        },
        Some(other) => {
            errors.push(format!(
                "{}: expected a string, got {}, using default {:?}",
                T::FIELD,
                json_type_name(other),
                fallback.id()
            ));
            fallback
        }
        None => {
            errors.push(format!(
                "{}: missing, using default {:?}",
                T::FIELD,
                fallback.id()
            ));
            fallback
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── Schema description ────────────────────────────────────────────────────────

/// Allowed ids and default for one leaf field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    /// Dot-notation path, e.g. `"navigation.position"`.
    pub path: &'static str,
    pub values: Vec<&'static str>,
    pub default: &'static str,
}

fn field_schema<T: RegistryEntry>() -> FieldSchema {
    FieldSchema {
        path: T::FIELD,
        values: T::ALL.iter().map(|entry| entry.id()).collect(),
        default: T::default().id(),
    }
}

/// Describes every leaf field of a configuration, in storage order.
pub fn settings_schema() -> Vec<FieldSchema> {
    vec![
        field_schema::<ThemeMode>(),
        field_schema::<ColorSchemeId>(),
        field_schema::<FontId>(),
        field_schema::<NavPositionId>(),
        field_schema::<LayoutTypeId>(),
        field_schema::<LoginLayoutId>(),
    ]
}

/// Default value at a dot-notation path (`"navigation"` or `"navigation.layout"`).
///
/// Returns `None` for paths that do not exist in the schema.
pub fn default_value(path: &str) -> Option<Value> {
    let mut current = serde_json::to_value(Configuration::defaults()).ok()?;
    for part in path.split('.') {
        current = current.as_object_mut()?.remove(part)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_valid() -> Value {
        json!({
            "mode": "dark",
            "colorScheme": "forest",
            "font": "poppins",
            "navigation": { "position": "horizontal", "layout": "sticky" },
            "login": { "layout": "right" }
        })
    }

    // ── sanitize ──────────────────────────────────────────────────────────────

    #[test]
    fn test_sanitize_null_returns_defaults() {
        assert_eq!(sanitize(&Value::Null), Configuration::defaults());
    }

    #[test]
    fn test_sanitize_keeps_every_valid_field() {
        // Arrange
        let input = full_valid();

        // Act
        let cfg = sanitize(&input);

        // Assert
        assert_eq!(cfg.mode, ThemeMode::Dark);
        assert_eq!(cfg.color_scheme, ColorSchemeId::Forest);
        assert_eq!(cfg.font, FontId::Poppins);
        assert_eq!(cfg.navigation.position, NavPositionId::Horizontal);
        assert_eq!(cfg.navigation.layout, LayoutTypeId::Sticky);
        assert_eq!(cfg.login.layout, LoginLayoutId::Right);
    }

    #[test]
    fn test_sanitize_replaces_only_the_invalid_field() {
        // Arrange
        let mut input = full_valid();
        input["font"] = json!("comic-sans");

        // Act
        let cfg = sanitize(&input);

        // Assert
        assert_eq!(cfg.font, FontId::Inter);
        assert_eq!(cfg.mode, ThemeMode::Dark);
        assert_eq!(cfg.color_scheme, ColorSchemeId::Forest);
    }

    #[test]
    fn test_sanitize_handles_missing_nested_objects() {
        let cfg = sanitize(&json!({ "mode": "dark" }));
        assert_eq!(cfg.mode, ThemeMode::Dark);
        assert_eq!(cfg.navigation, NavigationSettings::default());
        assert_eq!(cfg.login, LoginSettings::default());
    }

    #[test]
    fn test_sanitize_handles_nested_values_of_wrong_type() {
        let cfg = sanitize(&json!({ "navigation": "sideways", "login": [1, 2] }));
        assert_eq!(cfg, Configuration::defaults());
    }

    #[test]
    fn test_sanitize_non_object_input_yields_defaults() {
        for input in [json!(42), json!("dark"), json!([1, 2, 3]), json!(true)] {
            assert_eq!(sanitize(&input), Configuration::defaults(), "input {input}");
        }
    }

    #[test]
    fn test_sanitize_rejects_ids_with_wrong_case() {
        let cfg = sanitize(&json!({ "mode": "DARK" }));
        assert_eq!(cfg.mode, ThemeMode::Light);
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            Value::Null,
            json!({}),
            json!({ "mode": 7, "colorScheme": "bogus" }),
            full_valid(),
        ];
        for input in inputs {
            let once = sanitize(&input);
            let twice = sanitize(&serde_json::to_value(once).unwrap());
            assert_eq!(once, twice, "input {input}");
        }
    }

    #[test]
    fn test_sanitize_drops_unknown_keys() {
        // Arrange
        let mut input = full_valid();
        input["sparkles"] = json!(true);

        // Act
        let round_tripped = serde_json::to_value(sanitize(&input)).unwrap();

        // Assert
        assert!(round_tripped.get("sparkles").is_none());
    }

    // ── validate ──────────────────────────────────────────────────────────────

    #[test]
    fn test_validate_null_is_valid_without_errors() {
        let report = validate(&Value::Null);
        assert!(report.valid);
        assert!(report.errors.is_empty());
        assert_eq!(report.sanitized, Configuration::defaults());
    }

    #[test]
    fn test_validate_reports_one_error_per_substituted_field() {
        // Arrange
        let input = json!({
            "mode": "dark",
            "colorScheme": "bogus",
            "font": 12,
            "navigation": { "position": "vertical", "layout": "expandable" },
            "login": { "layout": "center" }
        });

        // Act
        let report = validate(&input);

        // Assert
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].starts_with("colorScheme: invalid value \"bogus\""));
        assert!(report.errors[1].starts_with("font: expected a string, got a number"));
    }

    #[test]
    fn test_validate_empty_object_reports_every_field_missing() {
        let report = validate(&json!({}));
        assert_eq!(report.errors.len(), 6);
        assert!(report.errors.iter().all(|e| e.contains("missing")));
    }

    #[test]
    fn test_validate_fully_valid_input() {
        let report = validate(&full_valid());
        assert!(report.valid);
        assert_eq!(report.sanitized, sanitize(&full_valid()));
    }

    // ── schema description ────────────────────────────────────────────────────

    #[test]
    fn test_settings_schema_lists_all_leaf_fields() {
        let paths: Vec<&str> = settings_schema().iter().map(|f| f.path).collect();
        assert_eq!(
            paths,
            vec![
                "mode",
                "colorScheme",
                "font",
                "navigation.position",
                "navigation.layout",
                "login.layout"
            ]
        );
    }

    #[test]
    fn test_default_value_resolves_leaf_and_subtree_paths() {
        assert_eq!(default_value("mode"), Some(json!("light")));
        assert_eq!(default_value("navigation.layout"), Some(json!("expandable")));
        assert_eq!(
            default_value("login"),
            Some(json!({ "layout": "center" }))
        );
    }

    #[test]
    fn test_default_value_unknown_path_is_none() {
        assert_eq!(default_value("navigation.width"), None);
        assert_eq!(default_value("mode.extra"), None);
    }
}
