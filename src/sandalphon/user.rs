use std::fmt::{Display, Formatter};

use crate::sandalphon::name::Name;

pub const DEFAULT_FOLLOWEE_CAPACITY: usize = 10;

/// A member of a network and the names it follows.
///
/// Followees are kept as names, never as references to other users, in the
/// order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: Name,
    followees: Vec<Name>,
    followee_capacity: usize,
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<Name>) -> Self {
        Self::with_followee_capacity(name, DEFAULT_FOLLOWEE_CAPACITY)
    }

    #[must_use]
    pub fn with_followee_capacity(name: impl Into<Name>, followee_capacity: usize) -> Self {
        Self {
            name: name.into(),
            followees: Vec::with_capacity(followee_capacity),
            followee_capacity,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn followees(&self) -> &[Name] {
        &self.followees
    }

    #[inline]
    #[must_use]
    pub fn followee_capacity(&self) -> usize {
        self.followee_capacity
    }

    #[must_use]
    pub fn follows(&self, name: &str) -> bool {
        self.followees.iter().any(|followee| followee.matches(name))
    }

    /// Appends `name` to the follow list.
    ///
    /// Returns `false` without touching the list when it is full or already
    /// holds `name`. Whether `name` is a real user is the caller's business.
    pub fn add_followee(&mut self, name: impl Into<Name>) -> bool {
        let name = name.into();
        if self.followees.len() >= self.followee_capacity || self.follows(name.as_str()) {
            return false;
        }
        self.followees.push(name);
        true
    }

    /// Number of names followed by both `self` and `other`.
    #[must_use]
    pub fn count_mutual(&self, other: &Self) -> usize {
        self.followees
            .iter()
            .filter(|followee| other.follows(followee.as_str()))
            .count()
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ->", self.name)?;
        for followee in &self.followees {
            write!(f, " {followee}")?;
        }
        Ok(())
    }
}
