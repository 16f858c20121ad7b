//! THIS FILE IS GENERATED. DO NOT EDIT DIRECTLY.
//! Regenerate with: cargo run --bin generate_quantities -- --spec dimq/specs/isq.json --out dimq/tests/generated/isq.rs
//!
//! Quantity system `isq`.

use dimq::lazy_static::lazy_static;
use dimq::{QuantityFactory, QuantitySystem};

/// Base dimension symbols, in order.
pub const DIMS: [&str; 7] = ["L", "M", "T", "I", "Θ", "N", "J"];

lazy_static! {
    /// The `isq` quantity system.
    pub static ref SYSTEM: QuantitySystem = QuantitySystem::new("isq", DIMS)
        .expect("generated base dimensions are valid");
}

/// Dimensionless: `dimensionless`.
pub const SCALAR: [i8; 7] = [0, 0, 0, 0, 0, 0, 0];

pub fn scalar() -> QuantityFactory {
    SYSTEM.dimensionless()
}

/// Base quantity `length`: `L`.
pub const LENGTH: [i8; 7] = [1, 0, 0, 0, 0, 0, 0];

/// Factory for length (`L`).
pub fn length() -> QuantityFactory {
    factory(&LENGTH)
}

/// Base quantity `mass`: `M`.
pub const MASS: [i8; 7] = [0, 1, 0, 0, 0, 0, 0];

/// Factory for mass (`M`).
pub fn mass() -> QuantityFactory {
    factory(&MASS)
}

/// Base quantity `time`: `T`.
pub const TIME: [i8; 7] = [0, 0, 1, 0, 0, 0, 0];

/// Factory for time (`T`).
pub fn time() -> QuantityFactory {
    factory(&TIME)
}

/// Base quantity `current`: `I`.
pub const CURRENT: [i8; 7] = [0, 0, 0, 1, 0, 0, 0];

/// Factory for current (`I`).
pub fn current() -> QuantityFactory {
    factory(&CURRENT)
}

/// Base quantity `temperature`: `Θ`.
pub const TEMPERATURE: [i8; 7] = [0, 0, 0, 0, 1, 0, 0];

/// Factory for temperature (`Θ`).
pub fn temperature() -> QuantityFactory {
    factory(&TEMPERATURE)
}

/// Base quantity `amount`: `N`.
pub const AMOUNT: [i8; 7] = [0, 0, 0, 0, 0, 1, 0];

/// Factory for amount (`N`).
pub fn amount() -> QuantityFactory {
    factory(&AMOUNT)
}

/// Base quantity `luminosity`: `J`.
pub const LUMINOSITY: [i8; 7] = [0, 0, 0, 0, 0, 0, 1];

/// Factory for luminosity (`J`).
pub fn luminosity() -> QuantityFactory {
    factory(&LUMINOSITY)
}

/// Derived quantity `area`: `L²`.
pub const AREA: [i8; 7] = [2, 0, 0, 0, 0, 0, 0];

/// Factory for area (`L²`).
pub fn area() -> QuantityFactory {
    factory(&AREA)
}

/// Derived quantity `volume`: `L³`.
pub const VOLUME: [i8; 7] = [3, 0, 0, 0, 0, 0, 0];

/// Factory for volume (`L³`).
pub fn volume() -> QuantityFactory {
    factory(&VOLUME)
}

/// Derived quantity `velocity`: `L·T⁻¹`.
pub const VELOCITY: [i8; 7] = [1, 0, -1, 0, 0, 0, 0];

/// Factory for velocity (`L·T⁻¹`).
pub fn velocity() -> QuantityFactory {
    factory(&VELOCITY)
}

/// Derived quantity `acceleration`: `L·T⁻²`.
pub const ACCELERATION: [i8; 7] = [1, 0, -2, 0, 0, 0, 0];

/// Factory for acceleration (`L·T⁻²`).
pub fn acceleration() -> QuantityFactory {
    factory(&ACCELERATION)
}

/// Derived quantity `force`: `L·M·T⁻²`.
pub const FORCE: [i8; 7] = [1, 1, -2, 0, 0, 0, 0];

/// Factory for force (`L·M·T⁻²`).
pub fn force() -> QuantityFactory {
    factory(&FORCE)
}

/// Derived quantity `energy`: `L²·M·T⁻²`.
pub const ENERGY: [i8; 7] = [2, 1, -2, 0, 0, 0, 0];

/// Factory for energy (`L²·M·T⁻²`).
pub fn energy() -> QuantityFactory {
    factory(&ENERGY)
}

/// Derived quantity `power`: `L²·M·T⁻³`.
pub const POWER: [i8; 7] = [2, 1, -3, 0, 0, 0, 0];

/// Factory for power (`L²·M·T⁻³`).
pub fn power() -> QuantityFactory {
    factory(&POWER)
}

/// Derived quantity `pressure`: `L⁻¹·M·T⁻²`.
pub const PRESSURE: [i8; 7] = [-1, 1, -2, 0, 0, 0, 0];

/// Factory for pressure (`L⁻¹·M·T⁻²`).
pub fn pressure() -> QuantityFactory {
    factory(&PRESSURE)
}

/// Derived quantity `frequency`: `T⁻¹`.
pub const FREQUENCY: [i8; 7] = [0, 0, -1, 0, 0, 0, 0];

/// Factory for frequency (`T⁻¹`).
pub fn frequency() -> QuantityFactory {
    factory(&FREQUENCY)
}

/// Derived quantity `charge`: `T·I`.
pub const CHARGE: [i8; 7] = [0, 0, 1, 1, 0, 0, 0];

/// Factory for charge (`T·I`).
pub fn charge() -> QuantityFactory {
    factory(&CHARGE)
}

/// Derived quantity `voltage`: `L²·M·T⁻³·I⁻¹`.
pub const VOLTAGE: [i8; 7] = [2, 1, -3, -1, 0, 0, 0];

/// Factory for voltage (`L²·M·T⁻³·I⁻¹`).
pub fn voltage() -> QuantityFactory {
    factory(&VOLTAGE)
}

/// Derived quantity `resistance`: `L²·M·T⁻³·I⁻²`.
pub const RESISTANCE: [i8; 7] = [2, 1, -3, -2, 0, 0, 0];

/// Factory for resistance (`L²·M·T⁻³·I⁻²`).
pub fn resistance() -> QuantityFactory {
    factory(&RESISTANCE)
}

/// Derived quantity `capacitance`: `L⁻²·M⁻¹·T⁴·I²`.
pub const CAPACITANCE: [i8; 7] = [-2, -1, 4, 2, 0, 0, 0];

/// Factory for capacitance (`L⁻²·M⁻¹·T⁴·I²`).
pub fn capacitance() -> QuantityFactory {
    factory(&CAPACITANCE)
}

/// Derived quantity `inductance`: `L²·M·T⁻²·I⁻²`.
pub const INDUCTANCE: [i8; 7] = [2, 1, -2, -2, 0, 0, 0];

/// Factory for inductance (`L²·M·T⁻²·I⁻²`).
pub fn inductance() -> QuantityFactory {
    factory(&INDUCTANCE)
}

/// Derived quantity `conductance`: `L⁻²·M⁻¹·T³·I²`.
pub const CONDUCTANCE: [i8; 7] = [-2, -1, 3, 2, 0, 0, 0];

/// Factory for conductance (`L⁻²·M⁻¹·T³·I²`).
pub fn conductance() -> QuantityFactory {
    factory(&CONDUCTANCE)
}

/// Derived quantity `magneticFlux`: `L²·M·T⁻²·I⁻¹`.
pub const MAGNETIC_FLUX: [i8; 7] = [2, 1, -2, -1, 0, 0, 0];

/// Factory for magneticFlux (`L²·M·T⁻²·I⁻¹`).
pub fn magnetic_flux() -> QuantityFactory {
    factory(&MAGNETIC_FLUX)
}

/// Derived quantity `magneticFluxDensity`: `M·T⁻²·I⁻¹`.
pub const MAGNETIC_FLUX_DENSITY: [i8; 7] = [0, 1, -2, -1, 0, 0, 0];

/// Factory for magneticFluxDensity (`M·T⁻²·I⁻¹`).
pub fn magnetic_flux_density() -> QuantityFactory {
    factory(&MAGNETIC_FLUX_DENSITY)
}

/// Derived quantity `luminousFlux`: `J`.
pub const LUMINOUS_FLUX: [i8; 7] = [0, 0, 0, 0, 0, 0, 1];

/// Factory for luminousFlux (`J`).
pub fn luminous_flux() -> QuantityFactory {
    factory(&LUMINOUS_FLUX)
}

/// Derived quantity `illuminance`: `L⁻²·J`.
pub const ILLUMINANCE: [i8; 7] = [-2, 0, 0, 0, 0, 0, 1];

/// Factory for illuminance (`L⁻²·J`).
pub fn illuminance() -> QuantityFactory {
    factory(&ILLUMINANCE)
}

/// Derived quantity `absorbedDose`: `L²·T⁻²`.
pub const ABSORBED_DOSE: [i8; 7] = [2, 0, -2, 0, 0, 0, 0];

/// Factory for absorbedDose (`L²·T⁻²`).
pub fn absorbed_dose() -> QuantityFactory {
    factory(&ABSORBED_DOSE)
}

/// Derived quantity `catalyticActivity`: `T⁻¹·N`.
pub const CATALYTIC_ACTIVITY: [i8; 7] = [0, 0, -1, 0, 0, 1, 0];

/// Factory for catalyticActivity (`T⁻¹·N`).
pub fn catalytic_activity() -> QuantityFactory {
    factory(&CATALYTIC_ACTIVITY)
}

/// Derived quantity `thermalConductance`: `L²·M·T⁻³·Θ⁻¹`.
pub const THERMAL_CONDUCTANCE: [i8; 7] = [2, 1, -3, 0, -1, 0, 0];

/// Factory for thermalConductance (`L²·M·T⁻³·Θ⁻¹`).
pub fn thermal_conductance() -> QuantityFactory {
    factory(&THERMAL_CONDUCTANCE)
}

fn factory(exps: &[i8]) -> QuantityFactory {
    SYSTEM
        .from_exponents(exps)
        .expect("generated exponents are in range")
}
