/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum SiPrefix {
    Quecto,
    Ronto,
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Unit,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
    Ronna,
    Quetta,
}

impl SiPrefix {
    pub const LIST: [SiPrefix; 25] = [
        SiPrefix::Quecto,
        SiPrefix::Ronto,
        SiPrefix::Yocto,
        SiPrefix::Zepto,
        SiPrefix::Atto,
        SiPrefix::Femto,
        SiPrefix::Pico,
        SiPrefix::Nano,
        SiPrefix::Micro,
        SiPrefix::Milli,
        SiPrefix::Centi,
        SiPrefix::Deci,
        SiPrefix::Unit,
        SiPrefix::Deca,
        SiPrefix::Hecto,
        SiPrefix::Kilo,
        SiPrefix::Mega,
        SiPrefix::Giga,
        SiPrefix::Tera,
        SiPrefix::Peta,
        SiPrefix::Exa,
        SiPrefix::Zetta,
        SiPrefix::Yotta,
        SiPrefix::Ronna,
        SiPrefix::Quetta,
    ];

    pub fn power(&self) -> i32 {
        match self {
            SiPrefix::Quecto => -30,
            SiPrefix::Ronto => -27,
            SiPrefix::Yocto => -24,
            SiPrefix::Zepto => -21,
            SiPrefix::Atto => -18,
            SiPrefix::Femto => -15,
            SiPrefix::Pico => -12,
            SiPrefix::Nano => -9,
            SiPrefix::Micro => -6,
            SiPrefix::Milli => -3,
            SiPrefix::Centi => -2,
            SiPrefix::Deci => -1,
            SiPrefix::Unit => 0,
            SiPrefix::Deca => 1,
            SiPrefix::Hecto => 2,
            SiPrefix::Kilo => 3,
            SiPrefix::Mega => 6,
            SiPrefix::Giga => 9,
            SiPrefix::Tera => 12,
            SiPrefix::Peta => 15,
            SiPrefix::Exa => 18,
            SiPrefix::Zetta => 21,
            SiPrefix::Yotta => 24,
            SiPrefix::Ronna => 27,
            SiPrefix::Quetta => 30,
        }
    }

    /// Decimal literals, so that e.g. `Milli` is exactly `1e-3`.
    pub fn multiplier(&self) -> f64 {
        match self {
            SiPrefix::Quecto => 1e-30,
            SiPrefix::Ronto => 1e-27,
            SiPrefix::Yocto => 1e-24,
            SiPrefix::Zepto => 1e-21,
            SiPrefix::Atto => 1e-18,
            SiPrefix::Femto => 1e-15,
            SiPrefix::Pico => 1e-12,
            SiPrefix::Nano => 1e-9,
            SiPrefix::Micro => 1e-6,
            SiPrefix::Milli => 1e-3,
            SiPrefix::Centi => 1e-2,
            SiPrefix::Deci => 1e-1,
            SiPrefix::Unit => 1.0,
            SiPrefix::Deca => 1e1,
            SiPrefix::Hecto => 1e2,
            SiPrefix::Kilo => 1e3,
            SiPrefix::Mega => 1e6,
            SiPrefix::Giga => 1e9,
            SiPrefix::Tera => 1e12,
            SiPrefix::Peta => 1e15,
            SiPrefix::Exa => 1e18,
            SiPrefix::Zetta => 1e21,
            SiPrefix::Yotta => 1e24,
            SiPrefix::Ronna => 1e27,
            SiPrefix::Quetta => 1e30,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            SiPrefix::Quecto => "q",
            SiPrefix::Ronto => "r",
            SiPrefix::Yocto => "y",
            SiPrefix::Zepto => "z",
            SiPrefix::Atto => "a",
            SiPrefix::Femto => "f",
            SiPrefix::Pico => "p",
            SiPrefix::Nano => "n",
            SiPrefix::Micro => "µ",
            SiPrefix::Milli => "m",
            SiPrefix::Centi => "c",
            SiPrefix::Deci => "d",
            SiPrefix::Unit => "",
            SiPrefix::Deca => "da",
            SiPrefix::Hecto => "h",
            SiPrefix::Kilo => "k",
            SiPrefix::Mega => "M",
            SiPrefix::Giga => "G",
            SiPrefix::Tera => "T",
            SiPrefix::Peta => "P",
            SiPrefix::Exa => "E",
            SiPrefix::Zetta => "Z",
            SiPrefix::Yotta => "Y",
            SiPrefix::Ronna => "R",
            SiPrefix::Quetta => "Q",
        }
    }
}

impl Display for SiPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.prefix())
    }
}
