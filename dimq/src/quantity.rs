/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};

use serde::Serialize;

use super::dimension::Dimensions;
use super::error::UnitError;
use super::system::SystemName;

/// A value tagged with its dimension and owning system. The value is
/// always expressed in the system's base representation.
#[derive(Serialize, PartialEq, Clone, Debug)]
pub struct Quantity {
    value: f64,
    #[serde(rename = "dimensions")]
    dim: Dimensions,
    system: SystemName,
}

impl Quantity {
    pub(crate) fn new(value: f64, dim: Dimensions, system: SystemName) -> Self {
        Self { value, dim, system }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dim
    }

    pub fn system(&self) -> &SystemName {
        &self.system
    }

    pub fn try_add(&self, rhs: &Self) -> Result<Self, UnitError> {
        self.check_same(rhs)?;
        Ok(self.with_value(self.value + rhs.value))
    }

    pub fn try_sub(&self, rhs: &Self) -> Result<Self, UnitError> {
        self.check_same(rhs)?;
        Ok(self.with_value(self.value - rhs.value))
    }

    pub fn try_mul(&self, rhs: &Self) -> Result<Self, UnitError> {
        self.system.check(&rhs.system)?;
        Ok(Self::new(
            self.value * rhs.value,
            self.dim.multiply(&rhs.dim)?,
            self.system.clone(),
        ))
    }

    /// Division by zero is not intercepted and yields the IEEE result.
    pub fn try_div(&self, rhs: &Self) -> Result<Self, UnitError> {
        self.system.check(&rhs.system)?;
        Ok(Self::new(
            self.value / rhs.value,
            self.dim.divide(&rhs.dim)?,
            self.system.clone(),
        ))
    }

    pub fn scale(&self, factor: f64) -> Self {
        self.with_value(self.value * factor)
    }

    pub(crate) fn with_value(&self, value: f64) -> Self {
        Self::new(value, self.dim.clone(), self.system.clone())
    }

    /// System first, then dimensions.
    pub(crate) fn check_same(&self, rhs: &Self) -> Result<(), UnitError> {
        self.system.check(&rhs.system)?;
        match self.dim == rhs.dim {
            true => Ok(()),
            false => Err(UnitError::IncompatibleDimension(
                self.dim.formula(),
                rhs.dim.formula(),
            )),
        }
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} {}", self.value, self.dim)
    }
}

impl Add<&Quantity> for &Quantity {
    type Output = Result<Quantity, UnitError>;
    fn add(self, rhs: &Quantity) -> Result<Quantity, UnitError> {
        self.try_add(rhs)
    }
}

impl Add<Quantity> for Quantity {
    type Output = Result<Quantity, UnitError>;
    fn add(self, rhs: Quantity) -> Result<Quantity, UnitError> {
        self.try_add(&rhs)
    }
}

impl Sub<&Quantity> for &Quantity {
    type Output = Result<Quantity, UnitError>;
    fn sub(self, rhs: &Quantity) -> Result<Quantity, UnitError> {
        self.try_sub(rhs)
    }
}

impl Sub<Quantity> for Quantity {
    type Output = Result<Quantity, UnitError>;
    fn sub(self, rhs: Quantity) -> Result<Quantity, UnitError> {
        self.try_sub(&rhs)
    }
}

impl Mul<&Quantity> for &Quantity {
    type Output = Result<Quantity, UnitError>;
    fn mul(self, rhs: &Quantity) -> Result<Quantity, UnitError> {
        self.try_mul(rhs)
    }
}

impl Mul<Quantity> for Quantity {
    type Output = Result<Quantity, UnitError>;
    fn mul(self, rhs: Quantity) -> Result<Quantity, UnitError> {
        self.try_mul(&rhs)
    }
}

impl Div<&Quantity> for &Quantity {
    type Output = Result<Quantity, UnitError>;
    fn div(self, rhs: &Quantity) -> Result<Quantity, UnitError> {
        self.try_div(rhs)
    }
}

impl Div<Quantity> for Quantity {
    type Output = Result<Quantity, UnitError>;
    fn div(self, rhs: Quantity) -> Result<Quantity, UnitError> {
        self.try_div(&rhs)
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: f64) -> Quantity {
        self.scale(rhs)
    }
}

impl Mul<f64> for &Quantity {
    type Output = Quantity;
    fn mul(self, rhs: f64) -> Quantity {
        self.scale(rhs)
    }
}
