use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// A user name as it was typed at creation time.
///
/// Equality through [`Name::matches`] ignores case, the stored casing is
/// kept for display. `==` and `Hash` compare the stored casing exactly.
#[derive(Debug, Eq, PartialEq, Hash)]
pub struct Name(pub Arc<str>);

impl Name {
    #[inline]
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        eq_ignore_case(&self.0, other)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[inline]
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

impl Clone for Name {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl Display for Name {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Name {
    #[inline]
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for Name {
    #[inline]
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<Arc<str>> for Name {
    #[inline]
    fn from(value: Arc<str>) -> Self {
        Self(value)
    }
}

impl From<Name> for Arc<str> {
    #[inline]
    fn from(value: Name) -> Self {
        value.0
    }
}

impl AsRef<str> for Name {
    #[inline]
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}
