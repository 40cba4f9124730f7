// Monte Carlo driver for the two-reference TOF interpolation
//
// One run draws N independent sample pairs from the light and heavy
// reference sources, interpolates each pair to the target mass number, and
// banks the triples. The whole pipeline is a single sequential pass: any
// setup or sampling failure aborts the run.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bank::SampleBank;
use crate::error::Error;
use crate::settings::{Scenario, Settings};
use crate::source::ReferenceSource;
use crate::utilities::interpolate_linear;

/// A validated simulation: two reference sources bracketing a target mass
/// number, plus run settings.
#[derive(Debug, Clone)]
pub struct Model {
    light: ReferenceSource,
    heavy: ReferenceSource,
    target_mass_number: u32,
    settings: Settings,
}

impl Model {
    /// Validate and assemble a model.
    ///
    /// The light source must carry the smaller mass number and the target
    /// must lie inside [light, heavy]; outside that range the linear
    /// interpolation has no physical meaning. A zero sample count is also
    /// rejected here, before any sampling starts.
    pub fn new(
        light: ReferenceSource,
        heavy: ReferenceSource,
        target_mass_number: u32,
        settings: Settings,
    ) -> Result<Self, Error> {
        if light.mass_number() >= heavy.mass_number() {
            return Err(Error::MassNumbersNotOrdered {
                light: light.mass_number(),
                heavy: heavy.mass_number(),
            });
        }
        if target_mass_number < light.mass_number() || target_mass_number > heavy.mass_number() {
            return Err(Error::TargetMassOutOfRange {
                target: target_mass_number,
                light: light.mass_number(),
                heavy: heavy.mass_number(),
            });
        }
        if settings.samples == 0 {
            return Err(Error::NoSamplesRequested);
        }
        Ok(Model {
            light,
            heavy,
            target_mass_number,
            settings,
        })
    }

    /// Build the sources from a scenario description and assemble the model.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, Error> {
        let light = ReferenceSource::new(
            &scenario.light.label,
            scenario.light.mass_number,
            scenario.light.tof_mean,
            scenario.light.tof_sigma,
        )?;
        let heavy = ReferenceSource::new(
            &scenario.heavy.label,
            scenario.heavy.mass_number,
            scenario.heavy.tof_mean,
            scenario.heavy.tof_sigma,
        )?;
        Model::new(
            light,
            heavy,
            scenario.target_mass_number,
            scenario.settings.clone(),
        )
    }

    /// Run the simulation with an RNG built from the settings seed.
    pub fn run(&self) -> Result<SampleBank, Error> {
        let mut rng = match self.settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(&mut rng)
    }

    /// Run the simulation against a caller-provided generator.
    ///
    /// For iteration i, one sample is drawn from the light source and one
    /// independent sample from the heavy source; the interpolated result is
    /// computed from exactly that pair and the triple is banked. Iterations
    /// share nothing but the RNG stream and the output bank.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SampleBank, Error> {
        info!(
            "sampling {} iterations: {} (A={}) and {} (A={}) toward A={}",
            self.settings.samples,
            self.light.label(),
            self.light.mass_number(),
            self.heavy.label(),
            self.heavy.mass_number(),
            self.target_mass_number,
        );

        let mut bank = SampleBank::with_capacity(self.settings.samples);
        for _ in 0..self.settings.samples {
            let light_tof = self.light.sample(rng)?;
            let heavy_tof = self.heavy.sample(rng)?;
            let result = interpolate_linear(
                self.light.mass_number() as f64,
                light_tof,
                self.heavy.mass_number() as f64,
                heavy_tof,
                self.target_mass_number as f64,
            );
            bank.push(light_tof, heavy_tof, result);
        }
        debug!("banked {} sample triples", bank.len());
        Ok(bank)
    }

    pub fn light(&self) -> &ReferenceSource {
        &self.light
    }

    pub fn heavy(&self) -> &ReferenceSource {
        &self.heavy
    }

    pub fn target_mass_number(&self) -> u32 {
        self.target_mass_number
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
