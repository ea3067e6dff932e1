use crate::models::{
    AdopterProfile, AgeBracket, AnimalCandidate, EnergyLevel, FeatureVector, HousingType,
    Lifestyle, SizeClass, Species, AXIS_CHILDREN, AXIS_ENERGY, AXIS_HOUSING, AXIS_LIFESTYLE,
    FEATURE_AXES,
};

/// Default cap used to normalize weekly available hours
pub const DEFAULT_HOURS_CAP: u32 = 40;

/// Neutral value for an axis with nothing to go on
const MIDPOINT: f64 = 0.5;

/// Map an adopter profile onto the shared feature axes.
///
/// Total over every profile shape: missing fields fall back to the neutral
/// defaults of `AdopterProfile`'s accessors.
pub fn adopter_vector(profile: &AdopterProfile, hours_cap: u32) -> FeatureVector {
    let lifestyle = profile.lifestyle_kind();

    let housing = match profile.housing() {
        HousingType::Apartment => 0.0,
        HousingType::HouseWithYard | HousingType::FarmRural => 1.0,
        HousingType::Unknown => MIDPOINT,
    };

    // A childless adopter does not mind either way
    let children = if profile.children() { 1.0 } else { MIDPOINT };

    let cap = hours_cap.max(1);
    let time = profile.weekly_hours().min(cap) as f64 / cap as f64;
    let energy = match lifestyle {
        Lifestyle::Calm | Lifestyle::RarelyHome => time * 0.5,
        Lifestyle::Active | Lifestyle::Sporty => time + (1.0 - time) * 0.5,
        Lifestyle::Moderate | Lifestyle::Unknown => time,
    };

    let activity = match lifestyle {
        Lifestyle::Calm => 0.0,
        Lifestyle::RarelyHome => 0.25,
        Lifestyle::Moderate | Lifestyle::Unknown => MIDPOINT,
        Lifestyle::Active | Lifestyle::Sporty => 1.0,
    };

    axes(housing, children, energy, activity)
}

/// Map an animal onto the same axes as [`adopter_vector`]
pub fn animal_vector(animal: &AnimalCandidate) -> FeatureVector {
    let species = animal.species_kind();
    let size = animal.size_class();
    let bracket = animal.age_bracket();

    let housing = match (species, size) {
        (Species::Cat, _) | (_, SizeClass::Small) => 0.0,
        (Species::Dog, SizeClass::Large) => 1.0,
        (Species::Dog, SizeClass::Medium) => 0.75,
        (_, SizeClass::Large) => 0.75,
        (_, SizeClass::Medium) | (_, SizeClass::Unknown) => MIDPOINT,
    };

    let children = match animal.good_with_children {
        Some(true) => 1.0,
        Some(false) => 0.0,
        None if bracket == AgeBracket::Young => 0.75,
        None => MIDPOINT,
    };

    let energy = match animal.energy_level() {
        Some(level) => energy_value(level),
        None => estimated_energy(species, &bracket),
    };

    // Species decides before age: a kitten is still a cat, a senior dog still a dog
    let activity = match (species, &bracket) {
        (Species::Dog, _) => 1.0,
        (Species::Cat, _) => 0.0,
        (Species::Other, AgeBracket::Young) => 1.0,
        (Species::Other, AgeBracket::Senior) => 0.0,
        (Species::Other, _) => MIDPOINT,
    };

    axes(housing, children, energy, activity)
}

fn axes(housing: f64, children: f64, energy: f64, lifestyle: f64) -> FeatureVector {
    let mut v = [MIDPOINT; FEATURE_AXES];
    v[AXIS_HOUSING] = housing;
    v[AXIS_CHILDREN] = children;
    v[AXIS_ENERGY] = energy;
    v[AXIS_LIFESTYLE] = lifestyle;
    FeatureVector::from(v)
}

fn energy_value(level: EnergyLevel) -> f64 {
    match level {
        EnergyLevel::Low => 0.0,
        EnergyLevel::Medium => MIDPOINT,
        EnergyLevel::High => 1.0,
    }
}

/// Energy guess for catalog rows without an explicit level
fn estimated_energy(species: Species, bracket: &AgeBracket) -> f64 {
    match (species, bracket) {
        (Species::Dog, AgeBracket::Young) => energy_value(EnergyLevel::High),
        (Species::Cat, _) => energy_value(EnergyLevel::Low),
        _ => MIDPOINT,
    }
}
