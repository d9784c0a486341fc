//! Static guidance banks for growth intensity and goal style.
//!
//! Lookup is lenient: any label is accepted, and unrecognised labels fall back
//! to the default tier. This is not validation.

/// How ambitious generated goals should be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GrowthIntensity {
    Minimal,
    #[default]
    Moderate,
    Aggressive,
}

impl GrowthIntensity {
    pub const ALL: [GrowthIntensity; 3] = [
        GrowthIntensity::Minimal,
        GrowthIntensity::Moderate,
        GrowthIntensity::Aggressive,
    ];

    /// Resolves a label, falling back to `Moderate` for anything unrecognised.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|i| i.as_str() == label)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthIntensity::Minimal => "minimal",
            GrowthIntensity::Moderate => "moderate",
            GrowthIntensity::Aggressive => "aggressive",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            GrowthIntensity::Minimal => {
                "Focus on foundational skill-building and consistency. Emphasize learning over output."
            }
            GrowthIntensity::Moderate => {
                "Balance learning with measurable contributions. Demonstrate reliability and growth."
            }
            GrowthIntensity::Aggressive => {
                "Stretch goals that build strategic capabilities. Show leadership and impact."
            }
        }
    }
}

/// How generated goals relate to each other across time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GoalStyle {
    #[default]
    Independent,
    Progressive,
}

impl GoalStyle {
    pub const ALL: [GoalStyle; 2] = [GoalStyle::Independent, GoalStyle::Progressive];

    /// Resolves a label, falling back to `Independent` for anything unrecognised.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == label)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStyle::Independent => "independent",
            GoalStyle::Progressive => "progressive",
        }
    }

    /// One-line summary used in option listings.
    pub fn summary(&self) -> &'static str {
        match self {
            GoalStyle::Independent => "6–9 standalone goals",
            GoalStyle::Progressive => "4 quarterly goals that build upon each other",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            GoalStyle::Independent => {
                "Generate 6–9 standalone goals. Each goal is independent and can be pursued in any order."
            }
            GoalStyle::Progressive => {
                "Generate 4 quarterly goals that build upon each other. Each Q builds on prior success, \
                 demonstrating commitment and deepening expertise."
            }
        }
    }
}

pub fn growth_intensity_labels() -> Vec<&'static str> {
    GrowthIntensity::ALL.iter().map(|i| i.as_str()).collect()
}

pub fn goal_style_labels() -> Vec<&'static str> {
    GoalStyle::ALL.iter().map(|s| s.as_str()).collect()
}
