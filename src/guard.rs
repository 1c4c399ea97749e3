//! Path guard deciding whether the gate runs on the current page.
//!
//! Auth callbacks, the login screen and the profile form itself must never be
//! polled, otherwise the gate would bounce the user off the very pages that
//! create the session or the profile.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

pub const DEFAULT_EXCLUDED_PREFIXES: [&str; 3] = ["/auth/", "/login", "/profile"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathGuard {
    prefixes: Vec<String>,
}

impl PathGuard {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { prefixes: prefixes.into_iter().map(Into::into).collect() }
    }

    /// True when `path` starts with any excluded prefix. Matching is a plain
    /// case-sensitive prefix test, so `/login-help` is excluded too.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for PathGuard {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_PREFIXES)
    }
}
