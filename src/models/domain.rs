use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of semantic axes shared by adopter and animal vectors
pub const FEATURE_AXES: usize = 4;

/// Axis positions, in vector order
pub const AXIS_HOUSING: usize = 0;
pub const AXIS_CHILDREN: usize = 1;
pub const AXIS_ENERGY: usize = 2;
pub const AXIS_LIFESTYLE: usize = 3;

pub const AXIS_NAMES: [&str; FEATURE_AXES] = ["housing", "children", "energy", "lifestyle"];

/// Errors raised while assembling ranking configuration
#[derive(Debug, Error, PartialEq)]
pub enum RankingError {
    #[error("Invalid weight for axis '{axis}': {value} (weights must be finite and positive)")]
    InvalidWeight { axis: &'static str, value: f64 },
}

/// Adopter housing situation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HousingType {
    Apartment,
    HouseWithYard,
    FarmRural,
    Unknown,
}

impl HousingType {
    pub fn from_text(raw: &str) -> Self {
        let t = raw.trim().to_lowercase();
        if t.contains("apartment") || t.contains("aparta") || t.contains("flat") {
            HousingType::Apartment
        } else if ["farm", "rural", "chácara", "chacara", "sítio", "sitio"]
            .iter()
            .any(|k| t.contains(k))
        {
            HousingType::FarmRural
        } else if ["house", "casa", "yard", "quintal"].iter().any(|k| t.contains(k)) {
            HousingType::HouseWithYard
        } else {
            HousingType::Unknown
        }
    }
}

/// Adopter lifestyle category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifestyle {
    Calm,
    Moderate,
    Active,
    Sporty,
    RarelyHome,
    Unknown,
}

impl Lifestyle {
    pub fn from_text(raw: &str) -> Self {
        let t = raw.trim().to_lowercase();
        let inactive = ["inativ", "inactiv", "sedent"].iter().any(|k| t.contains(k));
        if inactive || t.contains("calm") || t.contains("tranquil") {
            Lifestyle::Calm
        } else if t.contains("moder") {
            Lifestyle::Moderate
        } else if t.contains("sport") || t.contains("esport") {
            Lifestyle::Sporty
        } else if t.contains("activ") || t.contains("ativo") {
            Lifestyle::Active
        } else if t.contains("rarely") || t.contains("pouco") {
            Lifestyle::RarelyHome
        } else {
            Lifestyle::Unknown
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Dog,
    Cat,
    Other,
}

impl Species {
    pub fn from_text(raw: &str) -> Self {
        let t = raw.trim().to_lowercase();
        if ["dog", "cach", "cão", "cao"].iter().any(|k| t.contains(k)) {
            Species::Dog
        } else if t.contains("cat") || t.contains("gato") {
            Species::Cat
        } else {
            Species::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
    Unknown,
}

impl SizeClass {
    pub fn from_text(raw: &str) -> Self {
        let t = raw.trim().to_lowercase();
        if t.contains("small") || t.contains("pequeno") {
            SizeClass::Small
        } else if t.contains("medium") || t.contains("medio") || t.contains("médio") {
            SizeClass::Medium
        } else if t.contains("large") || t.contains("grande") {
            SizeClass::Large
        } else {
            SizeClass::Unknown
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl EnergyLevel {
    /// Returns `None` for text that names no known level
    pub fn from_text(raw: &str) -> Option<Self> {
        let t = raw.trim().to_lowercase();
        if t.contains("low") || t.contains("baixa") {
            Some(EnergyLevel::Low)
        } else if ["medium", "media", "média", "moderate"].iter().any(|k| t.contains(k)) {
            Some(EnergyLevel::Medium)
        } else if t.contains("high") || t.contains("alta") {
            Some(EnergyLevel::High)
        } else {
            None
        }
    }
}

/// Life stage derived from the raw catalog age field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgeBracket {
    /// Puppy or kitten
    Young,
    Adult,
    Senior,
    /// Free-text label that is not a known bracket, kept verbatim
    Labeled(String),
    Unknown,
}

impl AgeBracket {
    /// Derive the bracket from a raw age value.
    ///
    /// The leading decimal number is parsed first (a comma counts as the
    /// decimal separator, so `"2,5 anos"` is 2.5 years). When no number can
    /// be read, the lowercased text itself is taken as the bracket label.
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return AgeBracket::Unknown;
        }

        match leading_number(&text) {
            Some(years) if years <= 1.0 => AgeBracket::Young,
            Some(years) if years <= 7.0 => AgeBracket::Adult,
            Some(_) => AgeBracket::Senior,
            None => Self::from_label(text),
        }
    }

    fn from_label(label: String) -> Self {
        match label.as_str() {
            "filhote" | "puppy" | "kitten" | "young" => AgeBracket::Young,
            "adulto" | "adult" => AgeBracket::Adult,
            "idoso" | "senior" => AgeBracket::Senior,
            _ => AgeBracket::Labeled(label),
        }
    }
}

fn leading_number(text: &str) -> Option<f64> {
    let prefix: String = text
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    prefix.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Stored adopter preferences.
///
/// Every field is optional; the accessors below supply the neutral default
/// so a partially filled (or empty) profile is always usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdopterProfile {
    pub housing_type: Option<String>,
    pub has_children: Option<bool>,
    pub weekly_hours_available: Option<i32>,
    pub lifestyle: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AdopterProfile {
    pub fn housing(&self) -> HousingType {
        self.housing_type
            .as_deref()
            .map(HousingType::from_text)
            .unwrap_or(HousingType::Unknown)
    }

    pub fn children(&self) -> bool {
        self.has_children.unwrap_or(false)
    }

    /// Weekly hours, with negative or missing values read as zero
    pub fn weekly_hours(&self) -> u32 {
        self.weekly_hours_available
            .map(|h| h.max(0) as u32)
            .unwrap_or(0)
    }

    pub fn lifestyle_kind(&self) -> Lifestyle {
        self.lifestyle
            .as_deref()
            .map(Lifestyle::from_text)
            .unwrap_or(Lifestyle::Unknown)
    }
}

/// Adoptable animal as listed in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalCandidate {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub energy: Option<String>,
    #[serde(default)]
    pub good_with_children: Option<bool>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub donor_whatsapp: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl AnimalCandidate {
    pub fn new(id: i64, name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            species: species.into(),
            breed: None,
            age: None,
            size: None,
            energy: None,
            good_with_children: None,
            city: None,
            description: None,
            photo_url: None,
            donor_name: None,
            donor_whatsapp: None,
            created_at: None,
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = Some(age.into());
        self
    }

    pub fn with_energy(mut self, energy: impl Into<String>) -> Self {
        self.energy = Some(energy.into());
        self
    }

    pub fn with_good_with_children(mut self, good: bool) -> Self {
        self.good_with_children = Some(good);
        self
    }

    pub fn species_kind(&self) -> Species {
        Species::from_text(&self.species)
    }

    pub fn size_class(&self) -> SizeClass {
        self.size
            .as_deref()
            .map(SizeClass::from_text)
            .unwrap_or(SizeClass::Unknown)
    }

    pub fn age_bracket(&self) -> AgeBracket {
        self.age
            .as_deref()
            .map(AgeBracket::parse)
            .unwrap_or(AgeBracket::Unknown)
    }

    pub fn energy_level(&self) -> Option<EnergyLevel> {
        self.energy.as_deref().and_then(EnergyLevel::from_text)
    }
}

/// Numeric encoding of a profile or animal along the shared axes
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn new(components: Vec<f64>) -> Self {
        Self(components)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<[f64; FEATURE_AXES]> for FeatureVector {
    fn from(axes: [f64; FEATURE_AXES]) -> Self {
        Self(axes.iter().map(|v| v.clamp(0.0, 1.0)).collect())
    }
}

/// Per-axis importance weights.
///
/// The fixed array length ties the weights to `FEATURE_AXES` at compile time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightVector([f64; FEATURE_AXES]);

impl WeightVector {
    pub fn new(weights: [f64; FEATURE_AXES]) -> Result<Self, RankingError> {
        for (axis, &value) in weights.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(RankingError::InvalidWeight {
                    axis: AXIS_NAMES[axis],
                    value,
                });
            }
        }
        Ok(Self(weights))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        // Energy compatibility dominates, children second.
        Self([1.0, 3.5, 6.0, 1.5])
    }
}

/// One ranked recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// 1-based position in the final ordering
    pub rank: usize,
    pub distance: f64,
    /// `1 / (1 + distance)`, for display
    pub score: f64,
    pub animal: AnimalCandidate,
}
