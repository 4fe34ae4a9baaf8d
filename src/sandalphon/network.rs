use std::fmt::{Display, Formatter};

use crate::sandalphon::name::{eq_ignore_case, Name};
use crate::sandalphon::user::{User, DEFAULT_FOLLOWEE_CAPACITY};

pub const SEED_NAMES: [&str; 3] = ["Foo", "Bar", "Baz"];

/// A capped set of users and the follow edges between them.
///
/// Users are kept in arrival order and never removed. Every query resolves
/// names with a linear, case-insensitive scan.
#[derive(Debug, Clone, Default)]
pub struct Network {
    users: Vec<User>,
    capacity: usize,
    followee_capacity: usize,
}

impl Network {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_followee_capacity(capacity, DEFAULT_FOLLOWEE_CAPACITY)
    }

    #[must_use]
    pub fn with_followee_capacity(capacity: usize, followee_capacity: usize) -> Self {
        Self {
            users: Vec::with_capacity(capacity),
            capacity,
            followee_capacity,
        }
    }

    /// A network holding the demo users "Foo", "Bar" and "Baz".
    ///
    /// Seeds that do not fit in `capacity` are left out.
    #[must_use]
    pub fn getting_started(capacity: usize) -> Self {
        let mut network = Self::new(capacity);
        for name in SEED_NAMES {
            network.add_user(name);
        }
        network
    }

    #[inline]
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn get_user(&self, name: &str) -> Option<&User> {
        self.position(name).map(|idx| &self.users[idx])
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.users.iter().position(|user| user.name().matches(name))
    }

    pub fn add_user(&mut self, name: impl Into<Name>) -> bool {
        let name = name.into();
        if self.users.len() >= self.capacity || self.get_user(name.as_str()).is_some() {
            return false;
        }
        self.users
            .push(User::with_followee_capacity(name, self.followee_capacity));
        true
    }

    /// Makes `follower` follow `followee`.
    ///
    /// Fails when either name is unknown, when both name the same user, or
    /// when the follower's list rejects the name.
    pub fn add_followee(&mut self, follower: &str, followee: &str) -> bool {
        let Some(idx) = self.position(follower) else {
            return false;
        };
        if self.get_user(followee).is_none() || eq_ignore_case(follower, followee) {
            return false;
        }
        self.users[idx].add_followee(followee)
    }

    /// Recommends the user sharing the most followees with `name`.
    ///
    /// Users already followed, and `name` itself, are skipped. Ties go to the
    /// earliest user; a best overlap of zero still counts.
    #[must_use]
    pub fn recommend_who_to_follow(&self, name: &str) -> Option<&Name> {
        let idx = self.position(name)?;
        let user = &self.users[idx];

        let mut recommendation = None;
        let mut max_mutual = None;

        for (potential_idx, potential) in self.users.iter().enumerate() {
            if potential_idx == idx || user.follows(potential.name().as_str()) {
                continue;
            }
            let mutual = user.count_mutual(potential);
            if max_mutual.map_or(true, |max| mutual > max) {
                max_mutual = Some(mutual);
                recommendation = Some(potential.name());
            }
        }
        recommendation
    }

    /// The user that appears in the most follow lists.
    ///
    /// Ties go to the earliest user. Nobody is returned when no one is
    /// followed at all.
    #[must_use]
    pub fn most_popular_user(&self) -> Option<&Name> {
        let mut most_popular = None;
        let mut max_count = 0;

        for user in &self.users {
            let count = self.follower_count(user.name().as_str());
            if count > max_count {
                max_count = count;
                most_popular = Some(user.name());
            }
        }
        most_popular
    }

    /// Number of users whose follow list holds `name`.
    #[must_use]
    pub fn follower_count(&self, name: &str) -> usize {
        self.users.iter().filter(|user| user.follows(name)).count()
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Network:")?;
        for user in &self.users {
            write!(f, "\n{user}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::sandalphon::name::Name;
    use crate::sandalphon::network::Network;

    fn network_data() -> Network {
        let mut network = Network::getting_started(3);
        assert!(network.add_followee("Foo", "Bar"));
        assert!(network.add_followee("Baz", "Bar"));
        network
    }

    fn name_of(name: Option<&Name>) -> Option<&str> {
        name.map(|it| it.as_str())
    }

    #[test]
    fn test_getting_started() {
        let network = Network::getting_started(5);
        assert_eq!(network.user_count(), 3);
        let names = network
            .users()
            .iter()
            .map(|it| it.name().as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Foo", "Bar", "Baz"]);
    }

    #[test]
    fn test_getting_started_small_capacity() {
        let network = Network::getting_started(2);
        assert_eq!(network.user_count(), 2);
        assert!(network.get_user("Baz").is_none());
    }

    #[test]
    fn test_get_user_ignores_case() {
        let network = Network::getting_started(3);
        let user = network.get_user("bAz").unwrap();
        assert_eq!(user.name().as_str(), "Baz");
        assert!(network.get_user("Qux").is_none());
    }

    #[test]
    fn test_add_user() {
        let mut network = Network::new(2);
        assert!(network.add_user("Foo"));
        assert!(!network.add_user("FOO"));
        assert_eq!(network.user_count(), 1);
        assert!(network.add_user("Bar"));
        assert!(!network.add_user("Baz"));
        assert_eq!(network.user_count(), 2);
        assert_eq!(network.capacity(), 2);
    }

    #[test]
    fn test_add_user_zero_capacity() {
        let mut network = Network::new(0);
        assert!(!network.add_user("Foo"));
        assert_eq!(network.user_count(), 0);
    }

    #[test]
    fn test_add_followee() {
        let mut network = network_data();
        assert!(network.get_user("foo").unwrap().follows("BAR"));
        assert!(!network.add_followee("foo", "bar"));
        assert!(network.add_followee("foo", "baz"));
        assert!(network.get_user("Foo").unwrap().follows("Baz"));
    }

    #[test]
    fn test_add_followee_stores_name_as_given() {
        let mut network = Network::getting_started(3);
        assert!(network.add_followee("foo", "bar"));
        let followees = network.get_user("Foo").unwrap().followees();
        assert_eq!(followees[0].as_str(), "bar");
        assert_eq!(network.follower_count("Bar"), 1);
    }

    #[test]
    fn test_add_followee_rejects_self() {
        let mut network = Network::getting_started(3);
        assert!(!network.add_followee("Foo", "foo"));
        assert!(!network.add_followee("Qux", "Qux"));
        assert!(network.get_user("Foo").unwrap().followees().is_empty());
    }

    #[test]
    fn test_add_followee_rejects_unknown() {
        let mut network = Network::getting_started(3);
        assert!(!network.add_followee("Foo", "Qux"));
        assert!(!network.add_followee("Qux", "Foo"));
    }

    #[test]
    fn test_add_followee_rejects_when_list_full() {
        let mut network = Network::with_followee_capacity(3, 1);
        for name in ["Foo", "Bar", "Baz"] {
            network.add_user(name);
        }
        assert!(network.add_followee("Foo", "Bar"));
        assert!(!network.add_followee("Foo", "Baz"));
    }

    #[test]
    fn test_most_popular_user() {
        let network = network_data();
        assert_eq!(name_of(network.most_popular_user()), Some("Bar"));
        assert_eq!(network.follower_count("bar"), 2);
        assert_eq!(network.follower_count("Foo"), 0);
    }

    #[test]
    fn test_most_popular_user_nobody_followed() {
        let network = Network::getting_started(3);
        assert!(network.most_popular_user().is_none());
        assert!(Network::new(3).most_popular_user().is_none());
    }

    #[test]
    fn test_most_popular_user_first_wins_tie() {
        let mut network = Network::getting_started(3);
        network.add_followee("Foo", "Baz");
        network.add_followee("Baz", "Bar");
        assert_eq!(name_of(network.most_popular_user()), Some("Bar"));
    }

    #[test]
    fn test_recommend_first_wins_tie() {
        let mut network = network_data();
        network.add_followee("Foo", "Baz");
        assert_eq!(name_of(network.recommend_who_to_follow("Bar")), Some("Foo"));
    }

    #[test]
    fn test_recommend_prefers_mutual_followees() {
        let mut network = Network::new(5);
        for name in ["Ann", "Bob", "Cat", "Dan", "Eve"] {
            network.add_user(name);
        }
        network.add_followee("Ann", "Eve");
        network.add_followee("Ann", "Dan");
        network.add_followee("Cat", "Eve");
        network.add_followee("Cat", "Dan");
        network.add_followee("Bob", "Eve");
        assert_eq!(name_of(network.recommend_who_to_follow("ann")), Some("Cat"));
    }

    #[test]
    fn test_recommend_skips_followed_and_self() {
        let mut network = network_data();
        network.add_followee("Foo", "Baz");
        assert!(network.recommend_who_to_follow("Foo").is_none());
        assert_eq!(name_of(network.recommend_who_to_follow("baz")), Some("Foo"));
    }

    #[test]
    fn test_recommend_skips_self_queried_in_other_case() {
        let network = Network::getting_started(3);
        assert_eq!(name_of(network.recommend_who_to_follow("foo")), Some("Bar"));
        assert_eq!(name_of(network.recommend_who_to_follow("BAR")), Some("Foo"));
    }

    #[test]
    fn test_recommend_unknown_user() {
        let network = network_data();
        assert!(network.recommend_who_to_follow("Qux").is_none());
    }

    #[test]
    fn test_recommend_alone() {
        let mut network = Network::new(1);
        network.add_user("Foo");
        assert!(network.recommend_who_to_follow("Foo").is_none());
    }

    #[test]
    fn test_display() {
        let network = network_data();
        assert_eq!(
            network.to_string(),
            "Network:\nFoo -> Bar\nBar ->\nBaz -> Bar"
        );
        assert_eq!(Network::new(1).to_string(), "Network:");
    }
}
