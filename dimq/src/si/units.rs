/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use lazy_static::lazy_static;

use super::prefix::SiPrefix;
use super::SI;
use crate::isq;
use crate::system::QuantityFactory;
use crate::unit::{AffineUnit, LinearUnit};

lazy_static! {
    /* Length. */
    pub static ref METER: LinearUnit = base(&isq::LENGTH);
    pub static ref KILOMETER: LinearUnit = METER.prefixed(SiPrefix::Kilo);
    pub static ref CENTIMETER: LinearUnit = METER.prefixed(SiPrefix::Centi);
    pub static ref MILLIMETER: LinearUnit = METER.prefixed(SiPrefix::Milli);
    pub static ref MICROMETER: LinearUnit = METER.prefixed(SiPrefix::Micro);
    pub static ref NANOMETER: LinearUnit = METER.prefixed(SiPrefix::Nano);
    pub static ref PICOMETER: LinearUnit = METER.prefixed(SiPrefix::Pico);

    /* Mass. */
    pub static ref KILOGRAM: LinearUnit = base(&isq::MASS);
    pub static ref GRAM: LinearUnit = KILOGRAM.scaled(1e-3);
    pub static ref MILLIGRAM: LinearUnit = GRAM.prefixed(SiPrefix::Milli);
    pub static ref MICROGRAM: LinearUnit = GRAM.prefixed(SiPrefix::Micro);
    pub static ref NANOGRAM: LinearUnit = GRAM.prefixed(SiPrefix::Nano);
    pub static ref TONNE: LinearUnit = KILOGRAM.scaled(1e3);

    /* Time. */
    pub static ref SECOND: LinearUnit = base(&isq::TIME);
    pub static ref MILLISECOND: LinearUnit = SECOND.prefixed(SiPrefix::Milli);
    pub static ref MICROSECOND: LinearUnit = SECOND.prefixed(SiPrefix::Micro);
    pub static ref NANOSECOND: LinearUnit = SECOND.prefixed(SiPrefix::Nano);
    pub static ref PICOSECOND: LinearUnit = SECOND.prefixed(SiPrefix::Pico);
    pub static ref MINUTE: LinearUnit = SECOND.scaled(60.0);
    pub static ref HOUR: LinearUnit = MINUTE.scaled(60.0);
    pub static ref DAY: LinearUnit = HOUR.scaled(24.0);

    /* Electric current. */
    pub static ref AMPERE: LinearUnit = base(&isq::CURRENT);
    pub static ref MILLIAMPERE: LinearUnit = AMPERE.prefixed(SiPrefix::Milli);
    pub static ref MICROAMPERE: LinearUnit = AMPERE.prefixed(SiPrefix::Micro);

    /* Temperature. */
    pub static ref KELVIN: LinearUnit = base(&isq::TEMPERATURE);
    pub static ref CELSIUS: AffineUnit = KELVIN.offset(273.15);
    pub static ref FAHRENHEIT: AffineUnit =
        KELVIN.scaled(5.0 / 9.0).offset(459.67 * 5.0 / 9.0);

    /* Amount of substance. */
    pub static ref MOLE: LinearUnit = base(&isq::AMOUNT);
    pub static ref MILLIMOLE: LinearUnit = MOLE.prefixed(SiPrefix::Milli);
    pub static ref MICROMOLE: LinearUnit = MOLE.prefixed(SiPrefix::Micro);

    /* Photometry. */
    pub static ref CANDELA: LinearUnit = base(&isq::LUMINOSITY);
    pub static ref LUMEN: LinearUnit = base(&isq::LUMINOUS_FLUX);
    pub static ref LUX: LinearUnit = base(&isq::ILLUMINANCE);

    /* Area and volume. */
    pub static ref SQUARE_METER: LinearUnit = base(&isq::AREA);
    pub static ref HECTARE: LinearUnit = SQUARE_METER.scaled(1e4);
    pub static ref CUBIC_METER: LinearUnit = base(&isq::VOLUME);
    pub static ref LITER: LinearUnit = CUBIC_METER.scaled(1e-3);
    pub static ref MILLILITER: LinearUnit = LITER.prefixed(SiPrefix::Milli);
    pub static ref MICROLITER: LinearUnit = LITER.prefixed(SiPrefix::Micro);

    /* Kinematics. */
    pub static ref METER_PER_SECOND: LinearUnit = base(&isq::VELOCITY);
    pub static ref KILOMETER_PER_HOUR: LinearUnit =
        METER_PER_SECOND.scaled(1000.0 / 3600.0);
    pub static ref METER_PER_SECOND_SQUARED: LinearUnit =
        base(&isq::ACCELERATION);

    /* Mechanics. */
    pub static ref NEWTON: LinearUnit = base(&isq::FORCE);
    pub static ref KILONEWTON: LinearUnit = NEWTON.prefixed(SiPrefix::Kilo);
    pub static ref JOULE: LinearUnit = base(&isq::ENERGY);
    pub static ref KILOJOULE: LinearUnit = JOULE.prefixed(SiPrefix::Kilo);
    pub static ref MEGAJOULE: LinearUnit = JOULE.prefixed(SiPrefix::Mega);
    pub static ref KILOWATT_HOUR: LinearUnit = JOULE.scaled(3.6e6);
    pub static ref WATT: LinearUnit = base(&isq::POWER);
    pub static ref MILLIWATT: LinearUnit = WATT.prefixed(SiPrefix::Milli);
    pub static ref KILOWATT: LinearUnit = WATT.prefixed(SiPrefix::Kilo);
    pub static ref MEGAWATT: LinearUnit = WATT.prefixed(SiPrefix::Mega);
    pub static ref GIGAWATT: LinearUnit = WATT.prefixed(SiPrefix::Giga);
    pub static ref TERAWATT: LinearUnit = WATT.prefixed(SiPrefix::Tera);
    pub static ref PASCAL: LinearUnit = base(&isq::PRESSURE);
    pub static ref KILOPASCAL: LinearUnit = PASCAL.prefixed(SiPrefix::Kilo);
    pub static ref BAR: LinearUnit = PASCAL.scaled(1e5);
    pub static ref MILLIBAR: LinearUnit = BAR.prefixed(SiPrefix::Milli);

    /* Frequency and activity. */
    pub static ref HERTZ: LinearUnit = base(&isq::FREQUENCY);
    pub static ref KILOHERTZ: LinearUnit = HERTZ.prefixed(SiPrefix::Kilo);
    pub static ref MEGAHERTZ: LinearUnit = HERTZ.prefixed(SiPrefix::Mega);
    pub static ref GIGAHERTZ: LinearUnit = HERTZ.prefixed(SiPrefix::Giga);
    pub static ref BECQUEREL: LinearUnit = base(&isq::FREQUENCY);

    /* Electromagnetism. */
    pub static ref COULOMB: LinearUnit = base(&isq::CHARGE);
    pub static ref VOLT: LinearUnit = base(&isq::VOLTAGE);
    pub static ref MILLIVOLT: LinearUnit = VOLT.prefixed(SiPrefix::Milli);
    pub static ref KILOVOLT: LinearUnit = VOLT.prefixed(SiPrefix::Kilo);
    pub static ref OHM: LinearUnit = base(&isq::RESISTANCE);
    pub static ref MILLIOHM: LinearUnit = OHM.prefixed(SiPrefix::Milli);
    pub static ref KILOHM: LinearUnit = OHM.prefixed(SiPrefix::Kilo);
    pub static ref MEGOHM: LinearUnit = OHM.prefixed(SiPrefix::Mega);
    pub static ref SIEMENS: LinearUnit = base(&isq::CONDUCTANCE);
    pub static ref FARAD: LinearUnit = base(&isq::CAPACITANCE);
    pub static ref MICROFARAD: LinearUnit = FARAD.prefixed(SiPrefix::Micro);
    pub static ref NANOFARAD: LinearUnit = FARAD.prefixed(SiPrefix::Nano);
    pub static ref PICOFARAD: LinearUnit = FARAD.prefixed(SiPrefix::Pico);
    pub static ref HENRY: LinearUnit = base(&isq::INDUCTANCE);
    pub static ref MILLIHENRY: LinearUnit = HENRY.prefixed(SiPrefix::Milli);
    pub static ref MICROHENRY: LinearUnit = HENRY.prefixed(SiPrefix::Micro);
    pub static ref WEBER: LinearUnit = base(&isq::MAGNETIC_FLUX);
    pub static ref TESLA: LinearUnit = base(&isq::MAGNETIC_FLUX_DENSITY);

    /* Radiation and chemistry. */
    pub static ref GRAY: LinearUnit = base(&isq::ABSORBED_DOSE);
    pub static ref SIEVERT: LinearUnit = base(&isq::ABSORBED_DOSE);
    pub static ref KATAL: LinearUnit = base(&isq::CATALYTIC_ACTIVITY);

    /* Heat transfer. */
    pub static ref WATT_PER_KELVIN: LinearUnit =
        base(&isq::THERMAL_CONDUCTANCE);
    pub static ref MILLIWATT_PER_KELVIN: LinearUnit =
        WATT_PER_KELVIN.prefixed(SiPrefix::Milli);
    pub static ref KILOWATT_PER_KELVIN: LinearUnit =
        WATT_PER_KELVIN.prefixed(SiPrefix::Kilo);
}

fn base(factory: &QuantityFactory) -> LinearUnit {
    SI.unit(factory)
        .expect("ISQ factories belong to the SI quantity system")
}
