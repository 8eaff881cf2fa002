// tl-core/src/units.rs

use crate::{TlResult, ensure_finite};
use uom::si::f64::{
    Area as UomArea, ElectricPotential as UomElectricPotential,
    ElectricalResistance as UomElectricalResistance, Frequency as UomFrequency,
    Power as UomPower, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Frequency = UomFrequency;
/// Apparent power is carried as `Power`; 1 kVA maps to 1 kW.
pub type Power = UomPower;
pub type Resistance = UomElectricalResistance;
pub type Temperature = UomThermodynamicTemperature;
pub type Voltage = UomElectricPotential;

#[inline]
pub fn volts(v: f64) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

#[inline]
pub fn hertz(v: f64) -> Frequency {
    use uom::si::frequency::hertz;
    Frequency::new::<hertz>(v)
}

#[inline]
pub fn ohms(v: f64) -> Resistance {
    use uom::si::electrical_resistance::ohm;
    Resistance::new::<ohm>(v)
}

#[inline]
pub fn kva(v: f64) -> Power {
    use uom::si::power::kilowatt;
    Power::new::<kilowatt>(v)
}

#[inline]
pub fn cm2(v: f64) -> Area {
    use uom::si::area::square_centimeter;
    Area::new::<square_centimeter>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

/// Typed view of transformer nameplate data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nameplate {
    pub primary_voltage: Voltage,
    pub secondary_voltage: Voltage,
    pub rated_power: Power,
    pub frequency: Frequency,
    pub winding_resistance: Resistance,
    pub core_size: Area,
    pub temperature: Temperature,
}

impl Nameplate {
    /// Primary over secondary voltage.
    pub fn turns_ratio(&self) -> TlResult<f64> {
        ensure_finite(
            (self.primary_voltage / self.secondary_voltage).value,
            "turns ratio",
        )
    }

    /// Rated primary current in amperes, from S = V * I.
    pub fn rated_primary_current(&self) -> TlResult<f64> {
        use uom::si::electric_current::ampere;
        ensure_finite(
            (self.rated_power / self.primary_voltage).get::<ampere>(),
            "rated primary current",
        )
    }
}
