/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Fluent wrappers around [`Linear`] and [`Affine`] values. Which
//! operations are available depends on the wrapper type, so the
//! linear/affine rules are kept across a whole chain:
//!
//! ```ignore
//! let rise = celsius.of(20.0).chain().plus(&celsius.delta().of(5.0))?;
//! let delta = rise.minus(&celsius.of(10.0))?.value_in(&kelvin)?;
//! ```

use super::error::UnitError;
use super::measure::{Affine, Linear};
use super::unit::{LinearScale, Unit};

#[derive(PartialEq, Clone, Debug)]
pub struct LinearChain(Linear);

#[derive(PartialEq, Clone, Debug)]
pub struct AffineChain(Affine);

/// Right-hand operands of [`LinearChain::plus`].
pub trait LinearPlus {
    type Output;
    fn plus_onto(self, lhs: &Linear) -> Result<Self::Output, UnitError>;
}

/// Right-hand operands of [`AffineChain::minus`].
pub trait AffineMinus {
    type Output;
    fn minus_from(self, lhs: &Affine) -> Result<Self::Output, UnitError>;
}

impl LinearChain {
    pub fn new(value: Linear) -> Self {
        Self(value)
    }

    pub fn plus<R: LinearPlus>(self, rhs: R) -> Result<R::Output, UnitError> {
        rhs.plus_onto(&self.0)
    }

    pub fn minus(self, rhs: &Linear) -> Result<Self, UnitError> {
        Ok(Self((&self.0 - rhs)?))
    }

    pub fn times(self, rhs: &Linear) -> Result<Self, UnitError> {
        Ok(Self((&self.0 * rhs)?))
    }

    pub fn div(self, rhs: &Linear) -> Result<Self, UnitError> {
        Ok(Self((&self.0 / rhs)?))
    }

    pub fn scale(self, factor: f64) -> Self {
        Self(self.0.scale(factor))
    }

    pub fn value_in<U: LinearScale + ?Sized>(
        &self,
        unit: &U,
    ) -> Result<f64, UnitError> {
        self.0.value_in(unit)
    }

    pub fn get(&self) -> &Linear {
        &self.0
    }

    pub fn into_inner(self) -> Linear {
        self.0
    }
}

impl AffineChain {
    pub fn new(value: Affine) -> Self {
        Self(value)
    }

    pub fn plus(self, rhs: &Linear) -> Result<Self, UnitError> {
        Ok(Self((&self.0 + rhs)?))
    }

    pub fn minus<R: AffineMinus>(self, rhs: R) -> Result<R::Output, UnitError> {
        rhs.minus_from(&self.0)
    }

    pub fn value_in<U: Unit + ?Sized>(&self, unit: &U) -> Result<f64, UnitError> {
        self.0.value_in(unit)
    }

    pub fn get(&self) -> &Affine {
        &self.0
    }

    pub fn into_inner(self) -> Affine {
        self.0
    }
}

impl LinearPlus for &Linear {
    type Output = LinearChain;
    fn plus_onto(self, lhs: &Linear) -> Result<LinearChain, UnitError> {
        Ok(LinearChain((lhs + self)?))
    }
}

impl LinearPlus for &Affine {
    type Output = AffineChain;
    fn plus_onto(self, lhs: &Linear) -> Result<AffineChain, UnitError> {
        Ok(AffineChain((lhs + self)?))
    }
}

impl AffineMinus for &Linear {
    type Output = AffineChain;
    fn minus_from(self, lhs: &Affine) -> Result<AffineChain, UnitError> {
        Ok(AffineChain((lhs - self)?))
    }
}

impl AffineMinus for &Affine {
    type Output = LinearChain;
    fn minus_from(self, lhs: &Affine) -> Result<LinearChain, UnitError> {
        Ok(LinearChain((lhs - self)?))
    }
}

impl From<LinearChain> for Linear {
    fn from(chain: LinearChain) -> Self {
        chain.0
    }
}

impl From<AffineChain> for Affine {
    fn from(chain: AffineChain) -> Self {
        chain.0
    }
}
