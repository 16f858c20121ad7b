/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::dimension::Dimensions;
use super::measure::{Affine, Linear};
use super::si::SiPrefix;
use super::system::{QuantityFactory, SystemName};

/// Common interface of all units. A unit maps its own numerals to the
/// base representation of its unit system as `n * scale + offset`.
pub trait Unit {
    fn scale(&self) -> f64;

    fn offset(&self) -> f64 {
        0.0
    }

    fn is_affine(&self) -> bool {
        false
    }

    /// The unit system this unit belongs to.
    fn system(&self) -> &SystemName;

    fn dimensions(&self) -> &Dimensions;

    fn linearize(&self, n: f64) -> f64 {
        n * self.scale() + self.offset()
    }

    fn delinearize(&self, n: f64) -> f64 {
        (n - self.offset()) / self.scale()
    }
}

/// Units without an offset. Linear quantities can only be read in
/// these.
pub trait LinearScale: Unit {}

/// A base or scaled unit. Produces linear quantities.
#[derive(PartialEq, Clone, Debug)]
pub struct LinearUnit {
    factory: QuantityFactory,
    system: SystemName,
    scale: f64,
}

impl LinearUnit {
    pub(crate) fn new(factory: QuantityFactory, system: SystemName) -> Self {
        Self {
            factory,
            system,
            scale: 1.0,
        }
    }

    pub fn of(&self, value: f64) -> Linear {
        Linear::new(self.factory.of(self.linearize(value)), self.system.clone())
    }

    /// Scale factors compound: `u.scaled(f).scaled(g)` has scale `f * g`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            factory: self.factory.clone(),
            system: self.system.clone(),
            scale: self.scale * factor,
        }
    }

    pub fn prefixed(&self, prefix: SiPrefix) -> Self {
        self.scaled(prefix.multiplier())
    }

    /// An affine unit with the same graduation and its zero at
    /// `amount` base units.
    pub fn offset(&self, amount: f64) -> AffineUnit {
        AffineUnit {
            factory: self.factory.clone(),
            system: self.system.clone(),
            scale: self.scale,
            offset: amount,
        }
    }

    pub fn factory(&self) -> &QuantityFactory {
        &self.factory
    }
}

impl Unit for LinearUnit {
    fn scale(&self) -> f64 {
        self.scale
    }
    fn system(&self) -> &SystemName {
        &self.system
    }
    fn dimensions(&self) -> &Dimensions {
        self.factory.dimensions()
    }
}

impl LinearScale for LinearUnit {}

/// A unit with an arbitrary zero point. Produces affine quantities and
/// cannot be rescaled directly; use its delta unit for differences.
#[derive(PartialEq, Clone, Debug)]
pub struct AffineUnit {
    factory: QuantityFactory,
    system: SystemName,
    scale: f64,
    offset: f64,
}

impl AffineUnit {
    pub fn of(&self, value: f64) -> Affine {
        Affine::new(self.factory.of(self.linearize(value)), self.system.clone())
    }

    pub fn delta(&self) -> DeltaUnit {
        DeltaUnit {
            factory: self.factory.clone(),
            system: self.system.clone(),
            scale: self.scale,
        }
    }

    pub fn factory(&self) -> &QuantityFactory {
        &self.factory
    }
}

impl Unit for AffineUnit {
    fn scale(&self) -> f64 {
        self.scale
    }
    fn offset(&self) -> f64 {
        self.offset
    }
    fn is_affine(&self) -> bool {
        true
    }
    fn system(&self) -> &SystemName {
        &self.system
    }
    fn dimensions(&self) -> &Dimensions {
        self.factory.dimensions()
    }
}

/// The linear companion of an affine unit: same scale, no offset.
#[derive(PartialEq, Clone, Debug)]
pub struct DeltaUnit {
    factory: QuantityFactory,
    system: SystemName,
    scale: f64,
}

impl DeltaUnit {
    pub fn of(&self, value: f64) -> Linear {
        Linear::new(self.factory.of(self.linearize(value)), self.system.clone())
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            factory: self.factory.clone(),
            system: self.system.clone(),
            scale: self.scale * factor,
        }
    }
}

impl Unit for DeltaUnit {
    fn scale(&self) -> f64 {
        self.scale
    }
    fn system(&self) -> &SystemName {
        &self.system
    }
    fn dimensions(&self) -> &Dimensions {
        self.factory.dimensions()
    }
}

impl LinearScale for DeltaUnit {}
