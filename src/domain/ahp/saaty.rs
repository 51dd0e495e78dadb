//! Saaty fundamental scale value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Odd intensities of the Saaty fundamental scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SaatyIntensity {
    #[default]
    Equal = 1,
    Moderate = 3,
    Strong = 5,
    VeryStrong = 7,
    Extreme = 9,
}

impl SaatyIntensity {
    /// All intensities, weakest first.
    pub const ALL: [SaatyIntensity; 5] = [
        SaatyIntensity::Equal,
        SaatyIntensity::Moderate,
        SaatyIntensity::Strong,
        SaatyIntensity::VeryStrong,
        SaatyIntensity::Extreme,
    ];

    /// Creates an intensity from its scale value (1, 3, 5, 7 or 9).
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(SaatyIntensity::Equal),
            3 => Ok(SaatyIntensity::Moderate),
            5 => Ok(SaatyIntensity::Strong),
            7 => Ok(SaatyIntensity::VeryStrong),
            9 => Ok(SaatyIntensity::Extreme),
            _ => Err(ValidationError::invalid_format(
                "intensity",
                format!("{} is not one of 1, 3, 5, 7, 9", value),
            )),
        }
    }

    /// Returns the numeric scale value.
    pub fn value(&self) -> f64 {
        f64::from(*self as u8)
    }

    /// Position on a 0..=4 step scale (Equal = 0, Extreme = 4).
    pub fn step(&self) -> u8 {
        (*self as u8 - 1) / 2
    }

    /// Returns the display label, in Italian like the venue criteria.
    pub fn label(&self) -> &'static str {
        match self {
            SaatyIntensity::Equal => "Uguale",
            SaatyIntensity::Moderate => "Moderatamente più importante",
            SaatyIntensity::Strong => "Fortemente più importante",
            SaatyIntensity::VeryStrong => "Molto fortemente più importante",
            SaatyIntensity::Extreme => "Estremamente più importante",
        }
    }
}

/// Which side of a pair a judgment favours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Favored {
    First,
    Second,
}

/// A signed judgment between the first (A) and second (B) criterion of a pair.
///
/// Voters pick a position on a symmetric slider from -4 (B extremely more
/// important) through 0 (equal) to +4 (A extremely more important).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Preference {
    pub intensity: SaatyIntensity,
    pub favored: Favored,
}

impl Preference {
    /// Lowest slider position.
    pub const SLIDER_MIN: i8 = -4;
    /// Highest slider position.
    pub const SLIDER_MAX: i8 = 4;

    /// Equal importance.
    pub fn equal() -> Self {
        Self {
            intensity: SaatyIntensity::Equal,
            favored: Favored::First,
        }
    }

    /// A judgment favouring the first criterion of the pair.
    pub fn first(intensity: SaatyIntensity) -> Self {
        Self {
            intensity,
            favored: Favored::First,
        }
    }

    /// A judgment favouring the second criterion of the pair.
    pub fn second(intensity: SaatyIntensity) -> Self {
        Self {
            intensity,
            favored: Favored::Second,
        }
    }

    /// Creates a preference from a slider position in -4..=4.
    pub fn from_slider(position: i8) -> Result<Self, ValidationError> {
        if !(Self::SLIDER_MIN..=Self::SLIDER_MAX).contains(&position) {
            return Err(ValidationError::out_of_range(
                "slider",
                i32::from(Self::SLIDER_MIN),
                i32::from(Self::SLIDER_MAX),
                i32::from(position),
            ));
        }

        let intensity = SaatyIntensity::ALL[position.unsigned_abs() as usize];
        Ok(if position < 0 {
            Self::second(intensity)
        } else {
            Self::first(intensity)
        })
    }

    /// Slider position of this preference.
    pub fn slider(&self) -> i8 {
        let step = self.intensity.step() as i8;
        match self.favored {
            Favored::First => step,
            Favored::Second => -step,
        }
    }

    /// The matrix entry M[a][b] this judgment produces.
    pub fn value(&self) -> f64 {
        match self.favored {
            Favored::First => self.intensity.value(),
            Favored::Second => 1.0 / self.intensity.value(),
        }
    }

    /// Human-readable label, e.g. "Fortemente più importante (B)".
    pub fn label(&self) -> String {
        if self.intensity == SaatyIntensity::Equal {
            return SaatyIntensity::Equal.label().to_string();
        }
        let side = match self.favored {
            Favored::First => "A",
            Favored::Second => "B",
        };
        format!("{} ({})", self.intensity.label(), side)
    }
}

impl Default for Preference {
    fn default() -> Self {
        Self::equal()
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
