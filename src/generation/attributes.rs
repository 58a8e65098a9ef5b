//! Stage generators - one initializer per attribute group
//!
//! Each generator assumes its prerequisite group is present; `run_stage`
//! in the parent module guarantees that ordering.

use rand::{Rng, RngCore};

use crate::core::types::{Polar, Rgb};
use crate::distribution::Uniform;
use crate::entity::{Body, Mind, Name, Person, PoliticalView, Standing};

use super::pattern::{Appearance, Distributions, Pattern};

/// Rejection budget for drawing a point inside the political disk
const MAX_DISK_DRAWS: usize = 1_000;

pub fn generate_identity(person: &mut Person, pattern: &Pattern, rng: &mut dyn RngCore) {
    let names = &pattern.names;
    if names.is_empty() {
        return;
    }
    let first = &names.first[rng.gen_range(0..names.first.len())];
    let last = &names.last[rng.gen_range(0..names.last.len())];
    person.name = Some(Name {
        first: first.clone(),
        last: last.clone(),
    });
}

pub fn generate_body(person: &mut Person, pattern: &Pattern, rng: &mut dyn RngCore) {
    let dists = &pattern.distributions;

    let age = dists.ages.sample(rng);
    let density = dists.densities.sample(rng);
    let height = dists.heights.sample(rng).max(0.0) as u32;
    let weight = Body::weight_for(density, height);

    let skin_lum = dists.skin_lums.sample(rng);
    let skin_hue = dists.skin_hues.sample(rng);
    let skin_sat = (0.5 * skin_lum * skin_lum + 0.5).clamp(0.5, 1.0);
    let skin_color = Rgb::from_hls(skin_hue, skin_lum, skin_sat);

    let hair_color = hair_color(age, skin_lum, dists, &pattern.appearance, rng);

    // Fitness peaks for densities near the median
    let fitness_med = 0.45 * (1.0 - dists.densities.percent_from_median(density));
    let fitness = Uniform::with_median(0.0, fitness_med, 1.0).sample(rng);

    person.body = Some(Body {
        age,
        height,
        weight,
        density,
        skin_lum,
        skin_color,
        hair_color,
        fitness,
        density_distance_factor: inverse_range(dists.densities.range()),
    });
}

fn hair_color(
    age: f64,
    skin_lum: f64,
    dists: &Distributions,
    look: &Appearance,
    rng: &mut dyn RngCore,
) -> Rgb {
    if skin_lum > look.red_threshold && rng.gen::<f64>() < look.red_chance {
        return Rgb::from_hls(
            dists.red_hair_hues.sample(rng),
            dists.red_hair_lums.sample(rng),
            dists.red_hair_sats.sample(rng),
        );
    }

    let mut lum = dists.brown_hair_lums.sample(rng) * skin_lum / 0.9 + 0.05;
    let mut sat = (0.25 + 0.75 * lum * lum + (-0.05 + 0.1 * rng.gen::<f64>())).clamp(0.0, 1.0);
    let hue = 20.0 + 30.0 * lum + (2.0 + 20.0 * (1.0 - lum).powi(2)) * rng.gen::<f64>();

    if look.can_grey && is_greying(age, look, rng) {
        lum = 0.5 + 0.5 * lum;
        sat = dists.grey_hair_sats.sample(rng);
    }

    Rgb::from_hls(hue, lum, sat)
}

fn is_greying(age: f64, look: &Appearance, rng: &mut dyn RngCore) -> bool {
    if age > look.aging_end {
        return true;
    }
    let span = look.aging_end - look.aging_start;
    age > look.aging_start && span > 0.0 && rng.gen::<f64>() < (age - look.aging_start) / span
}

pub fn generate_mind(person: &mut Person, pattern: &Pattern, rng: &mut dyn RngCore) {
    let Some(body) = person.body.as_ref() else {
        tracing::warn!("mind for {} requested without a body, skipping", person.id);
        return;
    };
    let dists = &pattern.distributions;

    let iq = dists.iqs.sample(rng).max(0.0) as u32;

    let self_image = Uniform::with_median(0.1, body.fitness, 1.0).sample(rng);
    let confidence = (self_image + dists.ages.percentile(body.age)) / 2.0;
    let education = dists.education_tiers.sample(rng).max(0.0) as u32;
    let political = political_view(dists.ages.percentile(body.age), rng);

    person.mind = Some(Mind {
        iq,
        confidence,
        friend_mult: Mind::friend_multiplier(confidence),
        education,
        iq_distance_factor: inverse_range(dists.iqs.range()),
        political,
    });
}

/// Uniform point in the unit disk, x-median drifting left with age
fn political_view(age_percentile: f64, rng: &mut dyn RngCore) -> PoliticalView {
    let age_offset = (0.25 - age_percentile).clamp(-0.99, 0.99);
    let x_dist = Uniform::with_median(-1.0, age_offset, 1.0);
    let y_dist = Uniform::new(-1.0, 1.0);

    for _ in 0..MAX_DISK_DRAWS {
        let (x, y) = (x_dist.sample(rng), y_dist.sample(rng));
        if x * x + y * y <= 1.0 {
            return PoliticalView::from_cartesian(x, y);
        }
    }
    tracing::warn!("political draw never landed in the unit disk, using a random angle");
    let angle = rng.gen::<f64>() * std::f64::consts::TAU;
    PoliticalView::new(Polar::new(rng.gen::<f64>().sqrt(), angle))
}

pub fn generate_family(person: &mut Person, pattern: &Pattern, rng: &mut dyn RngCore) {
    let class = pattern.distributions.family_class.sample(rng);
    person.family = Some(Standing::from_class(class));
}

pub fn generate_social(person: &mut Person, _pattern: &Pattern, rng: &mut dyn RngCore) {
    let Some(family) = person.family else {
        tracing::warn!("social standing for {} requested without a family, skipping", person.id);
        return;
    };
    let class = Uniform::with_median(0.0, family.class, 1.0).sample(rng);
    person.social = Some(Standing::from_class(class));
}

fn inverse_range(range: f64) -> f64 {
    if range > 0.0 {
        1.0 / range
    } else {
        0.0
    }
}
