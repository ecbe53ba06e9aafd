use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{
    f64::{Length, MassDensity, SpecificHeatCapacity, ThermalConductivity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

/// Length of the rod that every [`Preset`] is paired with, in meters.
pub const PRESET_ROD_LENGTH: f64 = 0.1;

/// Homogeneous thermal properties of a rod material.
///
/// Values are not validated here; a [`GridState`](crate::GridState) rejects
/// non-positive properties when a run is built.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Material {
    pub density: MassDensity,
    pub specific_heat: SpecificHeatCapacity,
    pub thermal_conductivity: ThermalConductivity,
}

impl Material {
    /// Creates a material from its three thermal properties.
    #[must_use]
    pub fn new(
        density: MassDensity,
        specific_heat: SpecificHeatCapacity,
        thermal_conductivity: ThermalConductivity,
    ) -> Self {
        Self {
            density,
            specific_heat,
            thermal_conductivity,
        }
    }

    /// Pure copper.
    #[must_use]
    pub fn copper() -> Self {
        Self::from_si(8960.0, 385.0, 401.0)
    }

    /// Aluminum.
    #[must_use]
    pub fn aluminum() -> Self {
        Self::from_si(2700.0, 900.0, 237.0)
    }

    /// Carbon steel.
    #[must_use]
    pub fn steel() -> Self {
        Self::from_si(7850.0, 475.0, 50.0)
    }

    /// Thermal diffusivity `λ / (ρ·c)` in m²/s.
    #[must_use]
    pub fn thermal_diffusivity(&self) -> f64 {
        let (rho, c, lambda) = self.to_si();
        lambda / (rho * c)
    }

    /// Returns `(ρ, c, λ)` in kg/m³, J/(kg·K) and W/(m·K).
    #[must_use]
    pub fn to_si(&self) -> (f64, f64, f64) {
        (
            self.density.get::<kilogram_per_cubic_meter>(),
            self.specific_heat.get::<joule_per_kilogram_kelvin>(),
            self.thermal_conductivity.get::<watt_per_meter_kelvin>(),
        )
    }

    fn from_si(density: f64, specific_heat: f64, thermal_conductivity: f64) -> Self {
        Self::new(
            MassDensity::new::<kilogram_per_cubic_meter>(density),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(specific_heat),
            ThermalConductivity::new::<watt_per_meter_kelvin>(thermal_conductivity),
        )
    }
}

/// A rod of a single homogeneous material.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Rod {
    pub length: Length,
    pub material: Material,
}

impl Rod {
    #[must_use]
    pub fn new(material: Material, length: Length) -> Self {
        Self { length, material }
    }
}

impl Default for Rod {
    fn default() -> Self {
        Preset::Copper.rod()
    }
}

/// Named material presets offered to interactive callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Copper,
    Aluminum,
    Steel,
}

/// Error returned when a preset name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown material preset `{0}`")]
pub struct UnknownPreset(pub String);

impl Preset {
    /// Every preset, in display order.
    pub const ALL: [Preset; 3] = [Preset::Copper, Preset::Aluminum, Preset::Steel];

    /// Lowercase name, also accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Preset::Copper => "copper",
            Preset::Aluminum => "aluminum",
            Preset::Steel => "steel",
        }
    }

    #[must_use]
    pub fn material(self) -> Material {
        match self {
            Preset::Copper => Material::copper(),
            Preset::Aluminum => Material::aluminum(),
            Preset::Steel => Material::steel(),
        }
    }

    /// The preset material as a rod of [`PRESET_ROD_LENGTH`].
    #[must_use]
    pub fn rod(self) -> Rod {
        Rod::new(self.material(), Length::new::<meter>(PRESET_ROD_LENGTH))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownPreset(s.to_owned()))
    }
}
