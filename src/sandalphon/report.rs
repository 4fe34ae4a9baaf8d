use std::fs::File;
use std::path::Path;

use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use ron::ser::{to_writer_pretty, PrettyConfig};
use serde::Serialize;

use crate::sandalphon::error::Error;
use crate::sandalphon::network::Network;

/// Per-user summary of a finished network, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub user_count: usize,
    pub most_popular: Option<String>,
    pub followers: Vec<(String, usize)>,
    pub recommendations: Vec<(String, Option<String>)>,
}

impl Report {
    #[must_use]
    pub fn new(network: &Network) -> Self {
        Self::with_progress(network, ProgressBar::hidden())
    }

    /// Builds the report, ticking `pb` once per user.
    ///
    /// Rows are computed in parallel over a shared borrow of `network`.
    #[must_use]
    pub fn with_progress(network: &Network, pb: ProgressBar) -> Self {
        let rows = network
            .users()
            .par_iter()
            .progress_with(pb)
            .map(|user| {
                let name = user.name().as_str();
                let followers = network.follower_count(name);
                let recommendation = network
                    .recommend_who_to_follow(name)
                    .map(ToString::to_string);
                (name.to_string(), followers, recommendation)
            })
            .collect::<Vec<_>>();

        let mut followers = Vec::with_capacity(rows.len());
        let mut recommendations = Vec::with_capacity(rows.len());
        for (name, count, recommendation) in rows {
            followers.push((name.clone(), count));
            recommendations.push((name, recommendation));
        }

        Self {
            user_count: network.user_count(),
            most_popular: network.most_popular_user().map(ToString::to_string),
            followers,
            recommendations,
        }
    }

    /// Writes the report as pretty RON, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let file = File::create(path)?;
        to_writer_pretty(file, self, PrettyConfig::default())?;
        Ok(())
    }
}
