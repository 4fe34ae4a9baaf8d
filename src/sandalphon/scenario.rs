use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::sandalphon::error::Error;
use crate::sandalphon::network::{Network, SEED_NAMES};
use crate::sandalphon::user::DEFAULT_FOLLOWEE_CAPACITY;

const DEFAULT_CAPACITY: usize = 10;

/// A network described in RON, replayed through the regular add operations.
///
/// ```text
/// (
///     capacity: 3,
///     users: ["Foo", "Bar", "Baz"],
///     follows: [("Foo", "Bar"), ("Baz", "Bar")],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Scenario {
    pub capacity: usize,
    pub followee_capacity: usize,
    pub seeded: bool,
    pub users: Vec<String>,
    pub follows: Vec<(String, String)>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            followee_capacity: DEFAULT_FOLLOWEE_CAPACITY,
            seeded: false,
            users: Vec::new(),
            follows: Vec::new(),
        }
    }
}

/// An operation the network turned down while a scenario was replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejected {
    User(String),
    Follow(String, String),
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::open(path)?;
        Ok(ron::de::from_reader(file)?)
    }

    #[must_use]
    pub fn build(&self) -> (Network, Vec<Rejected>) {
        let mut network = Network::with_followee_capacity(self.capacity, self.followee_capacity);
        if self.seeded {
            for name in SEED_NAMES {
                network.add_user(name);
            }
        }
        let mut rejected = Vec::new();

        for name in &self.users {
            if !network.add_user(name.as_str()) {
                rejected.push(Rejected::User(name.clone()));
            }
        }

        for (follower, followee) in &self.follows {
            if !network.add_followee(follower, followee) {
                rejected.push(Rejected::Follow(follower.clone(), followee.clone()));
            }
        }

        (network, rejected)
    }
}

impl FromStr for Scenario {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::from_str(s)?)
    }
}
