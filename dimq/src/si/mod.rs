/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! The SI unit system over the ISQ quantities.

mod prefix;
mod units;

pub use prefix::SiPrefix;
pub use units::*;

use lazy_static::lazy_static;

use super::isq;
use super::unit_system::UnitSystem;

lazy_static! {
    pub static ref SI: UnitSystem = UnitSystem::new("si", isq::system().clone());
}
