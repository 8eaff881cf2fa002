//! Transformer nameplate parameters.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tl_core::{Nameplate, Real, celsius, cm2, hertz, kva, ohms, volts};

/// Magnetic core material. Collected with the nameplate but not used by the
/// loss formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoreType {
    #[default]
    #[serde(rename = "CRGO")]
    Crgo,
    Ferrite,
    Amorphous,
    #[serde(alias = "Nano-crystalline")]
    Nanocrystalline,
}

impl CoreType {
    pub const ALL: [CoreType; 4] = [
        CoreType::Crgo,
        CoreType::Ferrite,
        CoreType::Amorphous,
        CoreType::Nanocrystalline,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Crgo => "CRGO",
            Self::Ferrite => "Ferrite",
            Self::Amorphous => "Amorphous",
            Self::Nanocrystalline => "Nano-crystalline",
        }
    }
}

impl fmt::Display for CoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CoreType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "crgo" => Ok(Self::Crgo),
            "ferrite" => Ok(Self::Ferrite),
            "amorphous" => Ok(Self::Amorphous),
            "nanocrystalline" => Ok(Self::Nanocrystalline),
            _ => Err(format!(
                "Unknown core type '{}' (expected CRGO, Ferrite, Amorphous or Nanocrystalline)",
                s
            )),
        }
    }
}

/// Input parameter set for one loss calculation.
///
/// Units follow the nameplate: volts, kVA, hertz, ohms, cm² and °C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputParameters {
    pub primary_voltage: Real,
    pub secondary_voltage: Real,
    /// Rated apparent power in kVA
    pub rated_power: Real,
    pub frequency: Real,
    pub winding_resistance: Real,
    pub core_type: CoreType,
    /// Core cross-section in cm²
    pub core_size: Real,
    /// Operating temperature in °C, expected within [-50, 200]
    pub temperature: Real,
    /// Selected load level in percent of rated power, 0..=100
    pub load_level_percent: u8,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            primary_voltage: 1.0,
            secondary_voltage: 1.0,
            rated_power: 1.0,
            frequency: 1.0,
            winding_resistance: 0.1,
            core_type: CoreType::Crgo,
            core_size: 1.0,
            temperature: 0.0,
            load_level_percent: 0,
        }
    }
}

impl InputParameters {
    pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<Real> = -50.0..=200.0;

    /// Positivity gate. Core size and temperature are deliberately not
    /// checked here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let gated = [
            ("primary_voltage", self.primary_voltage),
            ("secondary_voltage", self.secondary_voltage),
            ("rated_power", self.rated_power),
            ("frequency", self.frequency),
            ("winding_resistance", self.winding_resistance),
        ];
        for (field, value) in gated {
            // NaN fails the comparison and is rejected too
            if !(value > 0.0 && value.is_finite()) {
                return Err(ValidationError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    /// Load level as a fraction in [0, 1].
    pub fn load_fraction(&self) -> Real {
        Real::from(self.load_level_percent.min(100)) / 100.0
    }

    pub fn nameplate(&self) -> Nameplate {
        Nameplate {
            primary_voltage: volts(self.primary_voltage),
            secondary_voltage: volts(self.secondary_voltage),
            rated_power: kva(self.rated_power),
            frequency: hertz(self.frequency),
            winding_resistance: ohms(self.winding_resistance),
            core_size: cm2(self.core_size),
            temperature: celsius(self.temperature),
        }
    }
}
