//! Fixed option sets and answer records for the residential and farm
//! questionnaires.

use serde::{Deserialize, Serialize};

/// Preset average annual rainfall (inches) used by the farm questionnaire.
pub const DEFAULT_ANNUAL_RAINFALL_INCHES: f64 = 14.02;

/// An enumerated answer with a fixed, ordered set of choices.
pub trait Choice: Copy + PartialEq + 'static {
    /// Every choice, in display order.
    const ALL: &'static [Self];

    /// Text shown to the user and embedded in prompts.
    fn label(&self) -> &'static str;

    /// Labels of every choice, in display order.
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.label()).collect()
    }

    /// Choice at `index`, clamped to the last one.
    fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }
}

macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:expr),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choice_enum!(
    /// Number of people in the household.
    HouseholdSize {
        One => "1",
        Two => "2",
        Three => "3",
        Four => "4",
        FivePlus => "5+",
    }
);

choice_enum!(
    /// How often water-intensive activities happen.
    ActivityFrequency {
        Daily => "Daily",
        SeveralTimesAWeek => "Several times a week",
        Weekly => "Weekly",
        Rarely => "Rarely",
    }
);

choice_enum!(
    /// Water-saving practices already in place (multi-select).
    SavingPractice {
        LowFlowShowerheads => "Low-flow showerheads",
        FaucetAerators => "Faucet aerators",
        ReusingWater => "Reusing water",
        ReducingShowerTime => "Reducing shower time",
        NoPractice => "None",
    }
);

choice_enum!(
    /// Primary reason for saving water.
    Motivation {
        EnvironmentalConcern => "Environmental concern",
        ReducingBills => "Reducing bills",
        WaterScarcity => "Water scarcity",
        Other => "Other",
    }
);

choice_enum!(
    /// Crop grown on the farm.
    CropType {
        Wheat => "Wheat",
        Corn => "Corn",
        Rice => "Rice",
        Soybeans => "Soybeans",
        Other => "Other",
    }
);

choice_enum!(
    /// Irrigation method in use.
    IrrigationMethod {
        Drip => "Drip",
        Sprinkler => "Sprinkler",
        Flood => "Flood",
        Furrow => "Furrow",
        Other => "Other",
    }
);

choice_enum!(
    /// Dominant soil type.
    SoilType {
        Clay => "Clay",
        Sandy => "Sandy",
        Loamy => "Loamy",
        Silty => "Silty",
        Peaty => "Peaty",
        Other => "Other",
    }
);

/// Role picked on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    EverydayWaterUser,
    AgriculturalProducer,
}

impl Choice for UserRole {
    const ALL: &'static [Self] = &[UserRole::EverydayWaterUser, UserRole::AgriculturalProducer];

    fn label(&self) -> &'static str {
        match self {
            UserRole::EverydayWaterUser => "Everyday Water User",
            UserRole::AgriculturalProducer => "Agricultural Producer",
        }
    }
}

/// Answers submitted on the residential advice screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidentialAnswers {
    pub household_size: HouseholdSize,
    pub activity_frequency: ActivityFrequency,
    /// Selected practices in display order. May be empty.
    pub practices: Vec<SavingPractice>,
    pub motivation: Motivation,
}

impl Default for ResidentialAnswers {
    fn default() -> Self {
        Self {
            household_size: HouseholdSize::One,
            activity_frequency: ActivityFrequency::Daily,
            practices: Vec::new(),
            motivation: Motivation::EnvironmentalConcern,
        }
    }
}

impl ResidentialAnswers {
    /// Practices joined with `", "`, empty when none are selected.
    pub fn practices_text(&self) -> String {
        self.practices
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Answers submitted on the farmer's screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmAnswers {
    pub crop: CropType,
    pub irrigation: IrrigationMethod,
    pub soil: SoilType,
    pub annual_rainfall_inches: f64,
}

impl Default for FarmAnswers {
    fn default() -> Self {
        Self {
            crop: CropType::Wheat,
            irrigation: IrrigationMethod::Drip,
            soil: SoilType::Clay,
            annual_rainfall_inches: DEFAULT_ANNUAL_RAINFALL_INCHES,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
