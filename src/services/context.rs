//! Caller-supplied session context.
//!
//! The client posts `context` as a JSON string. Anything that does not parse
//! or has the wrong shape is ignored field by field, so a broken context
//! never blocks a reply.

use std::fmt;

use serde_json::Value;

pub const DEFAULT_ROLE: &str = "guest";
pub const DEFAULT_PAGE: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
    pub role: String,
    pub page: String,
    pub logged_in: bool,
    pub name: Option<String>,
}

impl Default for UserContext {
    fn default() -> Self {
        Self { role: DEFAULT_ROLE.to_string(), page: DEFAULT_PAGE.to_string(), logged_in: false, name: None }
    }
}

impl UserContext {
    /// Parse the raw `context` form field. Missing, malformed, or mistyped
    /// fields take their defaults.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) else {
            return Self::default();
        };

        let text = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_owned);
        let defaults = Self::default();
        Self {
            role: text("userRole").unwrap_or(defaults.role),
            page: text("currentPage").unwrap_or(defaults.page),
            logged_in: map
                .get("isLoggedIn")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.logged_in),
            name: text("userName").filter(|n| !n.trim().is_empty()),
        }
    }
}

/// Renders the one-line prompt interpolation.
impl fmt::Display for UserContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User Context: Role={}, Page={}, LoggedIn={}", self.role, self.page, self.logged_in)?;
        if let Some(name) = &self.name {
            write!(f, ", Name={name}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
