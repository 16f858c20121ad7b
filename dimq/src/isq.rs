/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! The International System of Quantities, built at first use from
//! the bundled `specs/isq.json`.

use lazy_static::lazy_static;

use super::generator::{generate, SystemDefinition};
use super::spec::QuantitySpec;
use super::system::{QuantityFactory, QuantitySystem};

pub const SPEC: &str = include_str!("../specs/isq.json");

lazy_static! {
    pub static ref ISQ: SystemDefinition = QuantitySpec::from_json(SPEC)
        .and_then(|spec| generate(&spec))
        .expect("bundled ISQ spec is valid");

    pub static ref LENGTH: QuantityFactory = quantity("length");
    pub static ref MASS: QuantityFactory = quantity("mass");
    pub static ref TIME: QuantityFactory = quantity("time");
    pub static ref CURRENT: QuantityFactory = quantity("current");
    pub static ref TEMPERATURE: QuantityFactory = quantity("temperature");
    pub static ref AMOUNT: QuantityFactory = quantity("amount");
    pub static ref LUMINOSITY: QuantityFactory = quantity("luminosity");

    pub static ref AREA: QuantityFactory = quantity("area");
    pub static ref VOLUME: QuantityFactory = quantity("volume");
    pub static ref VELOCITY: QuantityFactory = quantity("velocity");
    pub static ref ACCELERATION: QuantityFactory = quantity("acceleration");
    pub static ref FORCE: QuantityFactory = quantity("force");
    pub static ref ENERGY: QuantityFactory = quantity("energy");
    pub static ref POWER: QuantityFactory = quantity("power");
    pub static ref PRESSURE: QuantityFactory = quantity("pressure");
    pub static ref FREQUENCY: QuantityFactory = quantity("frequency");
    pub static ref CHARGE: QuantityFactory = quantity("charge");
    pub static ref VOLTAGE: QuantityFactory = quantity("voltage");
    pub static ref RESISTANCE: QuantityFactory = quantity("resistance");
    pub static ref CAPACITANCE: QuantityFactory = quantity("capacitance");
    pub static ref INDUCTANCE: QuantityFactory = quantity("inductance");
    pub static ref CONDUCTANCE: QuantityFactory = quantity("conductance");
    pub static ref MAGNETIC_FLUX: QuantityFactory = quantity("magneticFlux");
    pub static ref MAGNETIC_FLUX_DENSITY: QuantityFactory =
        quantity("magneticFluxDensity");
    pub static ref LUMINOUS_FLUX: QuantityFactory = quantity("luminousFlux");
    pub static ref ILLUMINANCE: QuantityFactory = quantity("illuminance");
    pub static ref ABSORBED_DOSE: QuantityFactory = quantity("absorbedDose");
    pub static ref CATALYTIC_ACTIVITY: QuantityFactory =
        quantity("catalyticActivity");
    pub static ref THERMAL_CONDUCTANCE: QuantityFactory =
        quantity("thermalConductance");
}

pub fn system() -> &'static QuantitySystem {
    ISQ.system()
}

/// Factory of a quantity declared in the bundled spec.
fn quantity(name: &str) -> QuantityFactory {
    ISQ.factory(name)
        .cloned()
        .unwrap_or_else(|| panic!("{} is declared in the ISQ spec", name))
}
