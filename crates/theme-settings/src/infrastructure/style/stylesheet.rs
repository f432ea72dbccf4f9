//! In-memory style target that renders to CSS text.
//!
//! Holds what a document root would hold: inline properties in insertion
//! order, a class list, and the external stylesheets linked into the head.
//! The binary prints [`Stylesheet::render_css`]; tests read individual
//! properties back.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{StyleError, StyleSink};

#[derive(Debug, Default)]
struct SheetState {
    properties: Vec<(String, String)>,
    classes: BTreeSet<String>,
    links: Vec<String>,
}

/// Thread-safe in-memory [`StyleSink`].
#[derive(Debug, Default)]
pub struct Stylesheet {
    state: Mutex<SheetState>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, SheetState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current value of a root property.
    pub fn property(&self, name: &str) -> Option<String> {
        self.state()
            .properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    /// All root properties in the order they were first set.
    pub fn properties(&self) -> Vec<(String, String)> {
        self.state().properties.clone()
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.state().classes.contains(name)
    }

    /// Links an external stylesheet.  Returns `false` if `url` was already
    /// linked.
    pub fn link(&self, url: &str) -> bool {
        let mut state = self.state();
        if state.links.iter().any(|l| l == url) {
            return false;
        }
        state.links.push(url.to_string());
        true
    }

    pub fn is_linked(&self, url: &str) -> bool {
        self.state().links.iter().any(|l| l == url)
    }

    pub fn links(&self) -> Vec<String> {
        self.state().links.clone()
    }

    /// Renders links as `@import` rules followed by one `:root` rule whose
    /// selector carries the active classes.
    pub fn render_css(&self) -> String {
        let state = self.state();
        let mut css = String::new();

        for url in &state.links {
            css.push_str(&format!("@import url(\"{url}\");\n"));
        }
        if !state.links.is_empty() {
            css.push('\n');
        }

        css.push_str(":root");
        for class in &state.classes {
            css.push('.');
            css.push_str(class);
        }
        css.push_str(" {\n");
        for (name, value) in &state.properties {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push_str("}\n");
        css
    }
}

fn validate_name(name: &str) -> Result<(), StyleError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StyleError::InvalidProperty(name.to_string()))
    }
}

impl StyleSink for Stylesheet {
    fn set_property(&self, name: &str, value: &str) -> Result<(), StyleError> {
        validate_name(name)?;
        if value.contains([';', '{', '}']) {
            return Err(StyleError::InvalidValue {
                name: name.to_string(),
                value: value.to_string(),
            });
        }

        let mut state = self.state();
        match state.properties.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => state.properties.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn remove_property(&self, name: &str) -> Result<(), StyleError> {
        self.state().properties.retain(|(n, _)| n != name);
        Ok(())
    }

    fn set_class(&self, name: &str, enabled: bool) -> Result<(), StyleError> {
        validate_name(name)?;
        let mut state = self.state();
        if enabled {
            state.classes.insert(name.to_string());
        } else {
            state.classes.remove(name);
        }
        Ok(())
    }
}
