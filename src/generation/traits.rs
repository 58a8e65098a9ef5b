//! Trait registry - named pattern modifiers applied in tag order
//!
//! `human` is the base trait: it supplies every distribution and the four
//! attribute initializers. Other traits only override what differs.

use ahash::AHashMap;

use crate::distribution::{Discrete, Gaussian, Uniform};

use super::attributes::{
    generate_body, generate_family, generate_identity, generate_mind, generate_social,
};
use super::pattern::{NameBank, PatternBuilder, Stage};

pub type TraitFn = fn(&mut PatternBuilder);

#[derive(Clone)]
pub struct TraitRegistry {
    traits: AHashMap<String, TraitFn>,
}

impl std::fmt::Debug for TraitRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<&str> = self.tags().collect();
        tags.sort_unstable();
        f.debug_struct("TraitRegistry").field("tags", &tags).finish()
    }
}

impl Default for TraitRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl TraitRegistry {
    pub fn empty() -> Self {
        Self {
            traits: AHashMap::new(),
        }
    }

    /// Registry with the built-in human, american, japanese and student traits
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register("human", human);
        registry.register("american", american);
        registry.register("japanese", japanese);
        registry.register("student", student);
        registry
    }

    pub fn register(&mut self, tag: impl Into<String>, apply: TraitFn) {
        self.traits.insert(tag.into(), apply);
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.traits.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.traits.keys().map(String::as_str)
    }

    /// Apply one trait. Returns false for an unknown tag
    pub fn apply(&self, tag: &str, builder: &mut PatternBuilder) -> bool {
        match self.traits.get(tag) {
            Some(apply) => {
                apply(builder);
                builder.tags.push(tag.to_string());
                true
            }
            None => {
                tracing::warn!("unknown trait '{}', skipping", tag);
                false
            }
        }
    }
}

fn human(b: &mut PatternBuilder) {
    b.ages = Some(Gaussian::with_median(18.0, 30.0, 107.0, 15.0).into());
    b.heights = Some(Gaussian::with_median(54.0, 170.0, 272.0, 7.0).into());
    b.densities = Some(Gaussian::with_median(8.0, 13.0, 25.0, 4.0).into());
    b.iqs = Some(Gaussian::with_median(50.0, 100.0, 150.0, 15.0).into());

    b.skin_lums = Some(Uniform::with_median(0.05, 0.45, 0.85).into());
    b.skin_hues = Some(Gaussian::new(28.0, 36.0).into());
    b.brown_hair_lums = Some(Uniform::with_median(0.05, 0.6, 0.95).into());
    b.grey_hair_sats = Some(Uniform::new(0.0, 0.1).into());
    b.red_hair_lums = Some(Gaussian::with_median(0.30, 0.42, 0.50, 0.02).into());
    b.red_hair_sats = Some(Gaussian::with_median(0.2, 0.4, 0.6, 0.05).into());
    b.red_hair_hues = Some(Gaussian::with_median(5.0, 15.0, 25.0, 3.0).into());

    // Years of schooling by cumulative share of the population
    b.education_tiers = Some(
        Discrete::new([
            (0.03, 25.0),
            (0.13, 20.0),
            (0.34, 18.0),
            (0.61, 14.0),
            (0.89, 12.0),
            (1.00, 8.0),
        ])
        .into(),
    );
    b.family_class = Some(Gaussian::with_median(0.0, 0.5, 1.0, 0.1).into());

    b.add_initializer(Stage::Body, "body", generate_body);
    b.add_initializer(Stage::Mind, "mind", generate_mind);
    b.add_initializer(Stage::Family, "family", generate_family);
    b.add_initializer(Stage::Social, "social", generate_social);
}

fn american(b: &mut PatternBuilder) {
    b.densities = Some(Gaussian::with_median(8.0, 15.0, 25.0, 4.0).into());
    b.names = NameBank::new(
        &[
            "Ray", "Angel", "Gene", "Rowan", "Leslie", "Mell", "Sam", "Danni", "Bev", "Riley",
            "Steff", "Denny", "Phoenix", "Ashley", "Kerry", "Ashton", "Jordan", "Maddox",
            "Aubrey", "Mel", "Dane", "Eli", "Willy", "Rory", "Will", "Cameron", "Clem", "Reed",
            "Val", "Bret", "Jess", "Harley", "Tanner", "Brice",
        ],
        &[
            "Knight", "Barrett", "Barker", "Hamilton", "Miller", "Hernandez", "Bennett",
            "Kelley", "Gamble", "Huber", "Thompson", "Willis", "Mills", "Fox", "Jacobson",
            "Larson", "Slater", "Osborn", "Nieves", "Bailey", "Barnes", "Ryan", "Holmes",
            "Sharp", "Vincent", "Wagner", "Meadows", "Weber", "Mejia", "Chambers", "Murphy",
            "Lawson", "Stephenson", "Dixon", "Mullen", "Guthrie",
        ],
    );
    b.add_initializer(Stage::Identity, "identity", generate_identity);
}

fn japanese(b: &mut PatternBuilder) {
    b.skin_lums = Some(Uniform::with_median(0.05, 0.70, 0.85).into());
    b.heights = Some(Gaussian::with_median(54.0, 150.0, 272.0, 7.0).into());
    b.appearance.red_chance = 0.1;
    b.names = NameBank::new(
        &[
            "Fumiya", "Naora", "Chisato", "Suzu", "Romi", "Nanako", "Marise", "Himeka", "Inari",
            "Akeno", "Yoko", "Suko", "Riku", "Yukiji", "Kao", "Kisa", "Nara", "Hairi", "Riko",
            "Soshitsu", "Nobuyori", "Matsu", "Sadao", "Moromao", "Okakura", "Mabuchi",
            "Ichibei", "Toson", "Keita", "Katsuhito", "Kanezane", "Junnosuke", "Ippei", "Danno",
            "Kyoichi", "Ryoko", "Katsumi", "Naoko", "Gennosuke",
        ],
        &[
            "Kiya", "Kirishima", "Kabuto", "Amari", "Kamiya", "Kurata", "Misaki", "Shirai",
            "Ushioda", "Okimoto", "Sasagawa", "Akagi", "Minami", "Ishida", "Yagami", "Ishikura",
            "Tada", "Ichioka", "Sekino", "Zakaza", "Yamazaki", "Kono", "Tsukamoto", "Teramoto",
            "Masuda", "Yanagi", "Jinnouchi", "Wakatsuchi", "Uyehara", "Muramoto", "Suto",
            "Nishiyama", "Gima", "Hoashi", "Yamaha", "Kawashima", "Ogasawara", "Aomine",
            "Karasu",
        ],
    );
    b.add_initializer(Stage::Identity, "identity", generate_identity);
}

fn student(b: &mut PatternBuilder) {
    b.ages = Some(Gaussian::with_default_dev(18.0, 22.0, 50.0).into());
    b.add_initializer(Stage::Social, "social", generate_social);
}
