use crate::models::{AdopterProfile, AnimalCandidate, HousingType, SizeClass, Species};

/// Rule-based exclusions applied before distance scoring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardFilter {
    /// Apartment dwellers at or below this many weekly hours get only cats or small dogs
    pub apartment_max_hours: u32,
    /// At or below this many weekly hours, medium and large dogs are excluded
    pub low_time_max_hours: u32,
}

impl Default for HardFilter {
    fn default() -> Self {
        Self {
            apartment_max_hours: 6,
            low_time_max_hours: 4,
        }
    }
}

/// Outcome of running the hard filter over a candidate pool
#[derive(Debug)]
pub struct FilterOutcome {
    pub candidates: Vec<AnimalCandidate>,
    /// Excluded candidates, in input order
    pub rejected: Vec<AnimalCandidate>,
    /// Set when every candidate was excluded and the full pool was kept instead
    pub discarded: bool,
}

impl FilterOutcome {
    pub fn excluded(&self) -> usize {
        self.rejected.len()
    }
}

impl HardFilter {
    /// Whether the adopter's constraints rule this animal out
    #[inline]
    pub fn excludes(&self, profile: &AdopterProfile, animal: &AnimalCandidate) -> bool {
        let hours = profile.weekly_hours();
        let species = animal.species_kind();
        let size = animal.size_class();

        if profile.housing() == HousingType::Apartment && hours <= self.apartment_max_hours {
            let fits = species == Species::Cat
                || (species == Species::Dog && size == SizeClass::Small);
            if !fits {
                return true;
            }
        }

        hours <= self.low_time_max_hours
            && species == Species::Dog
            && matches!(size, SizeClass::Medium | SizeClass::Large)
    }

    /// Split the pool into kept and excluded candidates, keeping input order.
    ///
    /// Never empties a non-empty pool: if nothing would survive, the
    /// unfiltered pool is returned with `discarded` set.
    pub fn apply(&self, profile: &AdopterProfile, candidates: Vec<AnimalCandidate>) -> FilterOutcome {
        let (kept, rejected): (Vec<_>, Vec<_>) = candidates
            .into_iter()
            .partition(|animal| !self.excludes(profile, animal));

        if kept.is_empty() && !rejected.is_empty() {
            return FilterOutcome {
                candidates: rejected,
                rejected: Vec::new(),
                discarded: true,
            };
        }

        FilterOutcome {
            candidates: kept,
            rejected,
            discarded: false,
        }
    }
}
