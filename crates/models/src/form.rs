//! Allow-list projection of submitted form values.
//!
//! Whatever the transport (urlencoded form, JSON object), submitted pairs are
//! narrowed to an entity's bindable field names before anything binds to
//! them. Names not on the list are dropped here and never reach a record.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::errors::FieldErrors;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    /// Keep only pairs whose name matches `allowed` (ASCII case-insensitive),
    /// stored under the canonical allow-listed spelling. A repeated name keeps
    /// its first value.
    pub fn project<I, K, V>(submitted: I, allowed: &[&str]) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut kept = BTreeMap::new();
        for (name, value) in submitted {
            let name = name.as_ref();
            match allowed.iter().find(|a| a.eq_ignore_ascii_case(name)) {
                Some(canonical) => {
                    kept.entry((*canonical).to_string()).or_insert_with(|| value.into());
                }
                None => debug!(field = %name, "dropping field outside the bind allow-list"),
            }
        }
        Self(kept)
    }

    /// Submitted value, with empty or whitespace-only input treated as absent.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str).filter(|v| !v.trim().is_empty())
    }

    pub fn required(&self, name: &str, max_len: usize, errors: &mut FieldErrors) -> String {
        match self.text(name) {
            Some(v) => {
                check_len(name, v, max_len, errors);
                v.to_string()
            }
            None => {
                errors.add(name, format!("The {name} field is required."));
                String::new()
            }
        }
    }

    pub fn optional(&self, name: &str, max_len: usize, errors: &mut FieldErrors) -> Option<String> {
        let v = self.text(name)?;
        check_len(name, v, max_len, errors);
        Some(v.to_string())
    }

    /// Parse a value that must be present.
    pub fn number<N: FromStr>(&self, name: &str, errors: &mut FieldErrors) -> Option<N> {
        if self.text(name).is_none() {
            errors.add(name, format!("The {name} field is required."));
            return None;
        }
        self.optional_number(name, errors)
    }

    /// Parse a value that may be omitted; malformed input is still an error.
    pub fn optional_number<N: FromStr>(&self, name: &str, errors: &mut FieldErrors) -> Option<N> {
        let raw = self.text(name)?;
        match raw.trim().parse::<N>() {
            Ok(n) => Some(n),
            Err(_) => {
                errors.add(name, format!("The value '{raw}' is not valid for {name}."));
                None
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize { self.0.len() }

    #[cfg(test)]
    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

fn check_len(name: &str, value: &str, max_len: usize, errors: &mut FieldErrors) {
    if value.chars().count() > max_len {
        errors.add(name, format!("The field {name} must be a string with a maximum length of {max_len}."));
    }
}
