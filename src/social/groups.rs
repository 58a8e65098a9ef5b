//! Friend-network statistics: connected groups, clustering, degrees

use crate::core::types::ClusterLabel;
use crate::entity::Population;

/// Label every connected component of the friend graph
///
/// Singletons get their own group. Returns the number of groups.
pub fn label_friend_groups(population: &mut Population) -> usize {
    for person in population.iter_mut() {
        person.friend_group = ClusterLabel::Unclassified;
    }

    let mut next = 0u32;
    let mut stack: Vec<usize> = Vec::new();
    for start in 0..population.len() {
        if population.by_index(start).friend_group != ClusterLabel::Unclassified {
            continue;
        }
        next += 1;
        population.by_index_mut(start).friend_group = ClusterLabel::Searching;
        stack.push(start);

        while let Some(idx) = stack.pop() {
            let neighbors: Vec<usize> = population
                .by_index(idx)
                .friends
                .ids()
                .filter_map(|id| population.index_of(id))
                .collect();
            for neighbor in neighbors {
                let label = &mut population.by_index_mut(neighbor).friend_group;
                if *label == ClusterLabel::Unclassified {
                    *label = ClusterLabel::Searching;
                    stack.push(neighbor);
                }
            }
            population.by_index_mut(idx).friend_group = ClusterLabel::Cluster(next);
        }
    }
    next as usize
}

/// Group sizes, largest first
pub fn friend_group_sizes(population: &Population) -> Vec<usize> {
    let mut sizes: Vec<usize> = Vec::new();
    for person in population.iter() {
        if let Some(id) = person.friend_group.cluster_id() {
            let slot = id as usize - 1;
            if sizes.len() <= slot {
                sizes.resize(slot + 1, 0);
            }
            sizes[slot] += 1;
        }
    }
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes
}

/// Share of connected triplets that are closed triangles
///
/// Each triangle closes three triplets, one centred on each corner.
/// Returns 0 when there are no triplets at all.
pub fn clustering_coefficient(population: &Population) -> f64 {
    let mut closed = 0usize;
    let mut total = 0usize;
    for person in population.iter() {
        let friends: Vec<_> = person.friends.ids().collect();
        for (i, &a) in friends.iter().enumerate() {
            for &b in &friends[i + 1..] {
                total += 1;
                if population.get(a).is_some_and(|p| p.friends.contains(b)) {
                    closed += 1;
                }
            }
        }
    }
    if total == 0 {
        0.0
    } else {
        closed as f64 / total as f64
    }
}

/// Count of people by number of friends
pub fn degree_histogram(population: &Population) -> Vec<usize> {
    let mut histogram = Vec::new();
    for person in population.iter() {
        let degree = person.friends.len();
        if histogram.len() <= degree {
            histogram.resize(degree + 1, 0);
        }
        histogram[degree] += 1;
    }
    histogram
}

pub fn mean_degree(population: &Population) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    population.iter().map(|p| p.friends.len()).sum::<usize>() as f64 / population.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PersonId;
    use crate::entity::Person;
    use crate::generation::PatternKey;
    use crate::social::friends::add_friend;

    fn population(n: u32, edges: &[(u32, u32)]) -> Population {
        let mut pop = Population::new();
        for id in 0..n {
            pop.push(Person::new(PersonId(id), PatternKey(0)));
        }
        for &(a, b) in edges {
            add_friend(&mut pop, PersonId(a), PersonId(b), 0.5);
        }
        pop
    }

    #[test]
    fn test_components_and_singletons() {
        let mut pop = population(6, &[(0, 1), (1, 2), (3, 4)]);
        assert_eq!(label_friend_groups(&mut pop), 3);

        let group = |id: usize| pop.by_index(id).friend_group;
        assert_eq!(group(0), group(2));
        assert_eq!(group(3), group(4));
        assert_ne!(group(0), group(3));
        assert_ne!(group(5), group(0));
        assert!(pop.iter().all(|p| p.friend_group.cluster_id().is_some()));

        assert_eq!(friend_group_sizes(&pop), vec![3, 2, 1]);
    }

    #[test]
    fn test_relabeling_is_stable() {
        let mut pop = population(4, &[(0, 1), (2, 3)]);
        label_friend_groups(&mut pop);
        let first: Vec<_> = pop.iter().map(|p| p.friend_group).collect();
        label_friend_groups(&mut pop);
        let second: Vec<_> = pop.iter().map(|p| p.friend_group).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clustering_coefficient() {
        let triangle = population(3, &[(0, 1), (1, 2), (0, 2)]);
        assert_eq!(clustering_coefficient(&triangle), 1.0);

        let path = population(3, &[(0, 1), (1, 2)]);
        assert_eq!(clustering_coefficient(&path), 0.0);

        // Triangle plus a pendant: 3 closed of 5 triplets
        let pendant = population(4, &[(0, 1), (1, 2), (0, 2), (2, 3)]);
        assert!((clustering_coefficient(&pendant) - 0.6).abs() < 1e-12);

        assert_eq!(clustering_coefficient(&population(2, &[])), 0.0);
    }

    #[test]
    fn test_degree_histogram() {
        let pop = population(4, &[(0, 1), (0, 2), (0, 3)]);
        assert_eq!(degree_histogram(&pop), vec![0, 3, 0, 1]);
        assert_eq!(mean_degree(&pop), 1.5);
    }
}
