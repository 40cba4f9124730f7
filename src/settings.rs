// Run settings and the JSON scenario description

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Simulation run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Number of Monte Carlo iterations (sample triples) to produce
    pub samples: usize,
    /// RNG seed; `None` seeds from entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

/// One reference isotope as configured by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    pub label: String,
    pub mass_number: u32,
    /// Measured mean TOF
    pub tof_mean: f64,
    /// Measured TOF uncertainty (one standard deviation)
    pub tof_sigma: f64,
}

/// A complete simulation scenario: both reference measurements, the target
/// mass number, and the run settings. Loadable from a JSON file so that
/// measurement campaigns can be described as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub light: SourceSettings,
    pub heavy: SourceSettings,
    pub target_mass_number: u32,
    pub settings: Settings,
}

impl Scenario {
    /// Read a scenario from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_construction() {
        let settings = Settings {
            samples: 10_000,
            seed: Some(42),
        };
        assert_eq!(settings.samples, 10_000);
        assert_eq!(settings.seed, Some(42));
    }

    #[test]
    fn test_scenario_parses_from_json() {
        let json = r#"{
            "light": { "label": "B", "mass_number": 10, "tof_mean": 6.1, "tof_sigma": 0.5 },
            "heavy": { "label": "Ag", "mass_number": 109, "tof_mean": 12.2, "tof_sigma": 1.2 },
            "target_mass_number": 48,
            "settings": { "samples": 10000, "seed": 42 }
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.light.label, "B");
        assert_eq!(scenario.heavy.mass_number, 109);
        assert_eq!(scenario.target_mass_number, 48);
        assert_eq!(scenario.settings.samples, 10_000);
        assert_eq!(scenario.settings.seed, Some(42));
    }

    #[test]
    fn test_seed_defaults_to_none() {
        let json = r#"{
            "light": { "label": "B", "mass_number": 10, "tof_mean": 6.1, "tof_sigma": 0.5 },
            "heavy": { "label": "Ag", "mass_number": 109, "tof_mean": 12.2, "tof_sigma": 1.2 },
            "target_mass_number": 48,
            "settings": { "samples": 100 }
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.settings.seed, None);
    }
}
