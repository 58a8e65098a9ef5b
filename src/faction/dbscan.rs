//! Density-based clustering over an arbitrary pairwise distance
//!
//! A point's neighborhood includes itself and everything within `epsilon`.
//! Points with at least `min_pts` neighbors are core points; a cluster is
//! grown from a core point by claiming every unclassified or outlier point
//! reachable through other core points. Points never reached are outliers.

use std::collections::VecDeque;

use rayon::prelude::*;

use crate::core::types::ClusterLabel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dbscan {
    pub epsilon: f64,
    pub min_pts: usize,
    /// Point count at which neighborhoods are computed in parallel
    pub parallel_threshold: usize,
}

impl Dbscan {
    pub fn new(epsilon: f64, min_pts: usize) -> Self {
        Self {
            epsilon,
            min_pts,
            parallel_threshold: 1000,
        }
    }

    /// Cluster `n` points; labels come back in point order
    pub fn run<F>(&self, n: usize, distance: F) -> Vec<ClusterLabel>
    where
        F: Fn(usize, usize) -> f64 + Sync,
    {
        let regions = self.neighborhoods(n, &distance);

        let mut labels = vec![ClusterLabel::Unclassified; n];
        let mut next = 1u32;
        for point in 0..n {
            if labels[point] != ClusterLabel::Unclassified {
                continue;
            }
            if self.expand(point, next, &regions, &mut labels) {
                next += 1;
            }
        }
        labels
    }

    fn neighborhoods<F>(&self, n: usize, distance: &F) -> Vec<Vec<usize>>
    where
        F: Fn(usize, usize) -> f64 + Sync,
    {
        let eps_squared = self.epsilon * self.epsilon;
        let region = |i: usize| -> Vec<usize> {
            (0..n)
                .filter(|&j| {
                    let d = distance(i, j);
                    d * d <= eps_squared
                })
                .collect()
        };

        if n >= self.parallel_threshold {
            (0..n).into_par_iter().map(region).collect()
        } else {
            (0..n).map(region).collect()
        }
    }

    /// Grow a cluster from `point`. Returns false if it is not a core point
    fn expand(
        &self,
        point: usize,
        cluster: u32,
        regions: &[Vec<usize>],
        labels: &mut [ClusterLabel],
    ) -> bool {
        let seeds = &regions[point];
        if seeds.len() < self.min_pts {
            labels[point] = ClusterLabel::Outlier;
            return false;
        }

        let mut queue: VecDeque<usize> = VecDeque::new();
        for &seed in seeds {
            labels[seed] = ClusterLabel::Cluster(cluster);
            if seed != point {
                queue.push_back(seed);
            }
        }

        while let Some(current) = queue.pop_front() {
            let result = &regions[current];
            if result.len() < self.min_pts {
                continue;
            }
            for &neighbor in result {
                if labels[neighbor].is_claimable() {
                    if labels[neighbor] == ClusterLabel::Unclassified {
                        queue.push_back(neighbor);
                    }
                    labels[neighbor] = ClusterLabel::Cluster(cluster);
                }
            }
        }
        true
    }
}
