use uom::si::{
    f64::{Length, Time},
    length::meter,
    time::second,
};

use crate::{Material, Rod};

/// Initial and boundary temperatures of a run.
///
/// Temperatures may be given in any affine scale (°C or K) as long as all
/// three use the same one; the scheme is linear, so the field comes back in
/// that scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Temperatures {
    /// Uniform temperature of the interior nodes before the first step.
    pub initial: f64,
    /// Fixed temperature of node `0`.
    pub left: f64,
    /// Fixed temperature of node `Nx`.
    pub right: f64,
}

impl Temperatures {
    #[must_use]
    pub fn new(initial: f64, left: f64, right: f64) -> Self {
        Self {
            initial,
            left,
            right,
        }
    }
}

impl Default for Temperatures {
    fn default() -> Self {
        Self::new(180.0, 300.0, 30.0)
    }
}

/// Requested space step, time step, and simulated duration.
///
/// The space step is a request: the grid rounds `L / h` to a whole number of
/// intervals and uses the resulting effective step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Discretization {
    pub space_step: Length,
    pub time_step: Time,
    /// Total simulated time; zero still runs one step.
    pub duration: Time,
}

impl Discretization {
    #[must_use]
    pub fn new(space_step: Length, time_step: Time, duration: Time) -> Self {
        Self {
            space_step,
            time_step,
            duration,
        }
    }
}

impl Default for Discretization {
    fn default() -> Self {
        Self::new(
            Length::new::<meter>(0.01),
            Time::new::<second>(0.01),
            Time::new::<second>(2.0),
        )
    }
}

/// Everything needed to build one conduction run.
///
/// The default is a copper rod at 180 with ends held at 300 and 30, stepped
/// with `h = 0.01 m` and `τ = 0.01 s` for two seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Parameters {
    pub rod: Rod,
    pub temperatures: Temperatures,
    pub discretization: Discretization,
}

impl Parameters {
    #[must_use]
    pub fn new(rod: Rod, temperatures: Temperatures, discretization: Discretization) -> Self {
        Self {
            rod,
            temperatures,
            discretization,
        }
    }

    /// Returns a copy with a different material, keeping the rod length.
    #[must_use]
    pub fn with_material(mut self, material: Material) -> Self {
        self.rod.material = material;
        self
    }

    /// Returns a copy with a different requested space step.
    #[must_use]
    pub fn with_space_step(mut self, space_step: Length) -> Self {
        self.discretization.space_step = space_step;
        self
    }

    /// Returns a copy with a different time step.
    #[must_use]
    pub fn with_time_step(mut self, time_step: Time) -> Self {
        self.discretization.time_step = time_step;
        self
    }

    /// Returns a copy with a different simulated duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Time) -> Self {
        self.discretization.duration = duration;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::Preset;

    #[test]
    fn defaults_describe_the_copper_scenario() {
        let params = Parameters::default();

        assert_eq!(params.rod, Preset::Copper.rod());
        assert_eq!(params.temperatures, Temperatures::new(180.0, 300.0, 30.0));
        assert_relative_eq!(params.discretization.space_step.get::<meter>(), 0.01);
        assert_relative_eq!(params.discretization.time_step.get::<second>(), 0.01);
        assert_relative_eq!(params.discretization.duration.get::<second>(), 2.0);
    }

    #[test]
    fn builders_replace_one_field() {
        let params = Parameters::default()
            .with_material(Material::steel())
            .with_space_step(Length::new::<meter>(0.001))
            .with_time_step(Time::new::<second>(0.1))
            .with_duration(Time::new::<second>(10.0));

        assert_eq!(params.rod.material, Material::steel());
        assert_relative_eq!(params.rod.length.get::<meter>(), 0.1);
        assert_relative_eq!(params.discretization.space_step.get::<meter>(), 0.001);
        assert_relative_eq!(params.discretization.time_step.get::<second>(), 0.1);
        assert_relative_eq!(params.discretization.duration.get::<second>(), 10.0);
        assert_eq!(params.temperatures, Temperatures::default());
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn load_parameters_from_toml() {
        let text = r"
            [rod]
            length = 0.2

            [rod.material]
            density = 2700.0
            specific_heat = 900.0
            thermal_conductivity = 237.0

            [temperatures]
            initial = 20.0
            left = 100.0
            right = 0.0

            [discretization]
            space_step = 0.005
            time_step = 0.05
            duration = 30.0
        ";

        let params: Parameters = toml::from_str(text).expect("valid parameters");

        assert_eq!(params.rod.material, Material::aluminum());
        assert_relative_eq!(params.rod.length.get::<meter>(), 0.2);
        assert_eq!(params.temperatures, Temperatures::new(20.0, 100.0, 0.0));
        assert_relative_eq!(params.discretization.space_step.get::<meter>(), 0.005);
        assert_relative_eq!(params.discretization.duration.get::<second>(), 30.0);
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn toml_round_trip() {
        let params = Parameters::default();
        let text = toml::to_string(&params).expect("serializable");
        let back: Parameters = toml::from_str(&text).expect("deserializable");
        assert_eq!(back, params);
    }
}
