//! Faction membership and political make-up

use serde::{Deserialize, Serialize};

use crate::core::types::{ClusterLabel, PersonId};
use crate::entity::{PoliticalCategory, Population};

type CategoryCounts = [usize; PoliticalCategory::COUNT];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactionSummary {
    pub id: u32,
    pub members: Vec<PersonId>,
    /// Members per political category, indexed by `PoliticalCategory::index`
    pub categories: CategoryCounts,
    /// Mean distance from the political centre
    pub mean_radius: f64,
}

impl FactionSummary {
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Most common category, ties going to the lower index
    pub fn dominant_category(&self) -> PoliticalCategory {
        let mut best = 0;
        for (idx, &count) in self.categories.iter().enumerate() {
            if count > self.categories[best] {
                best = idx;
            }
        }
        PoliticalCategory::ALL[best]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactionReport {
    /// Largest first
    pub factions: Vec<FactionSummary>,
    pub outliers: Vec<PersonId>,
    pub outlier_categories: CategoryCounts,
}

impl FactionReport {
    pub fn faction_count(&self) -> usize {
        self.factions.len()
    }
}

/// Summarize the faction labels currently stored on each person
pub fn summarize_factions(population: &Population) -> FactionReport {
    let mut report = FactionReport::default();
    let mut radius_sums: Vec<f64> = Vec::new();

    for person in population.iter() {
        let political = person.mind.as_ref().map(|m| m.political);
        match person.faction {
            ClusterLabel::Cluster(id) => {
                let slot = id as usize - 1;
                while report.factions.len() <= slot {
                    report.factions.push(FactionSummary {
                        id: report.factions.len() as u32 + 1,
                        members: Vec::new(),
                        categories: [0; PoliticalCategory::COUNT],
                        mean_radius: 0.0,
                    });
                    radius_sums.push(0.0);
                }
                let faction = &mut report.factions[slot];
                faction.members.push(person.id);
                if let Some(view) = political {
                    faction.categories[view.category.index()] += 1;
                    radius_sums[slot] += view.radius();
                }
            }
            _ => {
                report.outliers.push(person.id);
                if let Some(view) = political {
                    report.outlier_categories[view.category.index()] += 1;
                }
            }
        }
    }

    for (faction, sum) in report.factions.iter_mut().zip(radius_sums) {
        let counted: usize = faction.categories.iter().sum();
        if counted > 0 {
            faction.mean_radius = sum / counted as f64;
        }
    }
    report.factions.retain(|f| !f.members.is_empty());
    report
        .factions
        .sort_by(|a, b| b.size().cmp(&a.size()).then(a.id.cmp(&b.id)));
    report
}
