/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Quantities of a unit system, split into linear (vector-like) and
//! affine (point-like) values.
//!
//! The typed operators only exist for the legal combinations:
//!
//! | lhs    | op  | rhs    | result |
//! |--------|-----|--------|--------|
//! | Linear | +   | Linear | Linear |
//! | Linear | +   | Affine | Affine |
//! | Affine | +   | Linear | Affine |
//! | Linear | -   | Linear | Linear |
//! | Affine | -   | Linear | Affine |
//! | Affine | -   | Affine | Linear |
//! | Linear | * / | Linear | Linear |
//!
//! ```
//! use dimq::si::{CELSIUS, KELVIN};
//!
//! let morning = CELSIUS.of(12.0);
//! let noon = (&morning + &KELVIN.of(8.0)).unwrap();
//! let rise = (&noon - &morning).unwrap();
//! assert!((rise.value_in(&*KELVIN).unwrap() - 8.0).abs() < 1e-9);
//! ```
//!
//! Anything else is rejected at compile time. Two temperatures cannot
//! be added:
//!
//! ```compile_fail
//! use dimq::si::CELSIUS;
//!
//! let _ = &CELSIUS.of(12.0) + &CELSIUS.of(20.0);
//! ```
//!
//! A temperature cannot be subtracted from a difference:
//!
//! ```compile_fail
//! use dimq::si::{CELSIUS, KELVIN};
//!
//! let _ = &KELVIN.of(8.0) - &CELSIUS.of(12.0);
//! ```
//!
//! Temperatures cannot be multiplied, divided or scaled:
//!
//! ```compile_fail
//! use dimq::si::{CELSIUS, KELVIN};
//!
//! let _ = &CELSIUS.of(12.0) * &KELVIN.of(2.0);
//! ```
//!
//! ```compile_fail
//! use dimq::si::{CELSIUS, METER};
//!
//! let _ = &METER.of(1.0) / &CELSIUS.of(12.0);
//! ```
//!
//! ```compile_fail
//! use dimq::si::CELSIUS;
//!
//! let _ = &CELSIUS.of(12.0) * 2.0;
//! ```
//!
//! A difference cannot be read in an affine unit:
//!
//! ```compile_fail
//! use dimq::si::{CELSIUS, KELVIN};
//!
//! let _ = KELVIN.of(8.0).value_in(&*CELSIUS);
//! ```
//!
//! [`Measurement`] offers the same rules when the kind of a value is
//! only known at runtime, and reports illegal combinations as
//! `InvalidAffineCombination`.

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};

use serde::Serialize;

use super::chain::{AffineChain, LinearChain};
use super::dimension::Dimensions;
use super::error::UnitError;
use super::quantity::Quantity;
use super::system::SystemName;
use super::unit::{LinearScale, Unit};

/// Read access shared by linear and affine values.
pub trait Measure {
    fn quantity(&self) -> &Quantity;

    fn unit_system(&self) -> &SystemName;

    fn is_affine(&self) -> bool;

    /// Value in the base representation of the unit system.
    fn value(&self) -> f64 {
        self.quantity().value()
    }

    fn dimensions(&self) -> &Dimensions {
        self.quantity().dimensions()
    }
}

#[derive(Serialize, PartialEq, Clone, Debug)]
pub struct Linear {
    quantity: Quantity,
    #[serde(rename = "unitSystem")]
    system: SystemName,
}

#[derive(Serialize, PartialEq, Clone, Debug)]
pub struct Affine {
    quantity: Quantity,
    #[serde(rename = "unitSystem")]
    system: SystemName,
}

impl Linear {
    pub(crate) fn new(quantity: Quantity, system: SystemName) -> Self {
        Self { quantity, system }
    }

    pub fn into_quantity(self) -> Quantity {
        self.quantity
    }

    /// Numeral of this value in `unit`. Only offset-free units accept
    /// a linear value.
    pub fn value_in<U: LinearScale + ?Sized>(
        &self,
        unit: &U,
    ) -> Result<f64, UnitError> {
        read_in(&self.quantity, &self.system, unit)
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.quantity.scale(factor), self.system.clone())
    }

    pub fn chain(&self) -> LinearChain {
        LinearChain::new(self.clone())
    }
}

impl Affine {
    pub(crate) fn new(quantity: Quantity, system: SystemName) -> Self {
        Self { quantity, system }
    }

    pub fn into_quantity(self) -> Quantity {
        self.quantity
    }

    pub fn value_in<U: Unit + ?Sized>(&self, unit: &U) -> Result<f64, UnitError> {
        read_in(&self.quantity, &self.system, unit)
    }

    pub fn chain(&self) -> AffineChain {
        AffineChain::new(self.clone())
    }
}

impl Measure for Linear {
    fn quantity(&self) -> &Quantity {
        &self.quantity
    }
    fn unit_system(&self) -> &SystemName {
        &self.system
    }
    fn is_affine(&self) -> bool {
        false
    }
}

impl Measure for Affine {
    fn quantity(&self) -> &Quantity {
        &self.quantity
    }
    fn unit_system(&self) -> &SystemName {
        &self.system
    }
    fn is_affine(&self) -> bool {
        true
    }
}

impl Display for Linear {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.quantity)
    }
}

impl Display for Affine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} (affine)", self.quantity)
    }
}

fn read_in<U: Unit + ?Sized>(
    quantity: &Quantity,
    system: &SystemName,
    unit: &U,
) -> Result<f64, UnitError> {
    system.check(unit.system())?;
    if quantity.dimensions() != unit.dimensions() {
        return Err(UnitError::IncompatibleDimension(
            quantity.dimensions().formula(),
            unit.dimensions().formula(),
        ));
    }
    Ok(unit.delinearize(quantity.value()))
}

/// Checks unit systems, then applies `op` to the underlying quantities.
fn combine<F>(
    lhs: &dyn Measure,
    rhs: &dyn Measure,
    op: F,
) -> Result<(Quantity, SystemName), UnitError>
where
    F: FnOnce(&Quantity, &Quantity) -> Result<Quantity, UnitError>,
{
    lhs.unit_system().check(rhs.unit_system())?;
    Ok((op(lhs.quantity(), rhs.quantity())?, lhs.unit_system().clone()))
}

impl Add<&Linear> for &Linear {
    type Output = Result<Linear, UnitError>;
    fn add(self, rhs: &Linear) -> Self::Output {
        let (q, s) = combine(self, rhs, Quantity::try_add)?;
        Ok(Linear::new(q, s))
    }
}

impl Add<&Affine> for &Linear {
    type Output = Result<Affine, UnitError>;
    fn add(self, rhs: &Affine) -> Self::Output {
        let (q, s) = combine(self, rhs, Quantity::try_add)?;
        Ok(Affine::new(q, s))
    }
}

impl Add<&Linear> for &Affine {
    type Output = Result<Affine, UnitError>;
    fn add(self, rhs: &Linear) -> Self::Output {
        let (q, s) = combine(self, rhs, Quantity::try_add)?;
        Ok(Affine::new(q, s))
    }
}

impl Sub<&Linear> for &Linear {
    type Output = Result<Linear, UnitError>;
    fn sub(self, rhs: &Linear) -> Self::Output {
        let (q, s) = combine(self, rhs, Quantity::try_sub)?;
        Ok(Linear::new(q, s))
    }
}

impl Sub<&Linear> for &Affine {
    type Output = Result<Affine, UnitError>;
    fn sub(self, rhs: &Linear) -> Self::Output {
        let (q, s) = combine(self, rhs, Quantity::try_sub)?;
        Ok(Affine::new(q, s))
    }
}

/// The difference of two points is a vector.
impl Sub<&Affine> for &Affine {
    type Output = Result<Linear, UnitError>;
    fn sub(self, rhs: &Affine) -> Self::Output {
        let (q, s) = combine(self, rhs, Quantity::try_sub)?;
        Ok(Linear::new(q, s))
    }
}

impl Mul<&Linear> for &Linear {
    type Output = Result<Linear, UnitError>;
    fn mul(self, rhs: &Linear) -> Self::Output {
        let (q, s) = combine(self, rhs, Quantity::try_mul)?;
        Ok(Linear::new(q, s))
    }
}

impl Div<&Linear> for &Linear {
    type Output = Result<Linear, UnitError>;
    fn div(self, rhs: &Linear) -> Self::Output {
        let (q, s) = combine(self, rhs, Quantity::try_div)?;
        Ok(Linear::new(q, s))
    }
}

impl Mul<f64> for &Linear {
    type Output = Linear;
    fn mul(self, rhs: f64) -> Linear {
        self.scale(rhs)
    }
}

impl Mul<f64> for Linear {
    type Output = Linear;
    fn mul(self, rhs: f64) -> Linear {
        self.scale(rhs)
    }
}

/// A linear or affine value whose kind is decided at runtime.
#[derive(Serialize, PartialEq, Clone, Debug)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Measurement {
    Linear(Linear),
    Affine(Affine),
}

impl Measurement {
    pub fn add(&self, rhs: &Self) -> Result<Self, UnitError> {
        self.unit_system().check(rhs.unit_system())?;
        match (self, rhs) {
            (Self::Linear(a), Self::Linear(b)) => (a + b).map(Self::Linear),
            (Self::Linear(a), Self::Affine(b)) => (a + b).map(Self::Affine),
            (Self::Affine(a), Self::Linear(b)) => (a + b).map(Self::Affine),
            (Self::Affine(_), Self::Affine(_)) => {
                Err(UnitError::InvalidAffineCombination(
                    "cannot add two affine quantities".to_string(),
                ))
            }
        }
    }

    pub fn subtract(&self, rhs: &Self) -> Result<Self, UnitError> {
        self.unit_system().check(rhs.unit_system())?;
        match (self, rhs) {
            (Self::Linear(a), Self::Linear(b)) => (a - b).map(Self::Linear),
            (Self::Affine(a), Self::Linear(b)) => (a - b).map(Self::Affine),
            (Self::Affine(a), Self::Affine(b)) => (a - b).map(Self::Linear),
            (Self::Linear(_), Self::Affine(_)) => {
                Err(UnitError::InvalidAffineCombination(
                    "cannot subtract an affine quantity from a linear quantity"
                        .to_string(),
                ))
            }
        }
    }

    pub fn multiply(&self, rhs: &Self) -> Result<Self, UnitError> {
        self.unit_system().check(rhs.unit_system())?;
        let (a, b) = Self::both_linear(self, rhs, "multiply")?;
        (a * b).map(Self::Linear)
    }

    pub fn divide(&self, rhs: &Self) -> Result<Self, UnitError> {
        self.unit_system().check(rhs.unit_system())?;
        let (a, b) = Self::both_linear(self, rhs, "divide")?;
        (a / b).map(Self::Linear)
    }

    pub fn scale(&self, factor: f64) -> Result<Self, UnitError> {
        match self {
            Self::Linear(a) => Ok(Self::Linear(a.scale(factor))),
            Self::Affine(_) => Err(UnitError::InvalidAffineCombination(
                "cannot scale an affine quantity".to_string(),
            )),
        }
    }

    /// Reading a linear value in an affine unit is rejected.
    pub fn value_in(&self, unit: &dyn Unit) -> Result<f64, UnitError> {
        self.unit_system().check(unit.system())?;
        match self {
            Self::Linear(_) if unit.is_affine() => {
                Err(UnitError::InvalidAffineCombination(
                    "cannot read a linear quantity in an affine unit"
                        .to_string(),
                ))
            }
            _ => read_in(self.quantity(), self.unit_system(), unit),
        }
    }

    fn both_linear<'a>(
        lhs: &'a Self,
        rhs: &'a Self,
        op: &str,
    ) -> Result<(&'a Linear, &'a Linear), UnitError> {
        match (lhs, rhs) {
            (Self::Linear(a), Self::Linear(b)) => Ok((a, b)),
            _ => Err(UnitError::InvalidAffineCombination(format!(
                "cannot {} an affine quantity",
                op
            ))),
        }
    }
}

impl Measure for Measurement {
    fn quantity(&self) -> &Quantity {
        match self {
            Self::Linear(a) => a.quantity(),
            Self::Affine(a) => a.quantity(),
        }
    }
    fn unit_system(&self) -> &SystemName {
        match self {
            Self::Linear(a) => a.unit_system(),
            Self::Affine(a) => a.unit_system(),
        }
    }
    fn is_affine(&self) -> bool {
        matches!(self, Self::Affine(_))
    }
}

impl From<Linear> for Measurement {
    fn from(value: Linear) -> Self {
        Self::Linear(value)
    }
}

impl From<Affine> for Measurement {
    fn from(value: Affine) -> Self {
        Self::Affine(value)
    }
}

impl Display for Measurement {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Linear(a) => write!(f, "{}", a),
            Self::Affine(a) => write!(f, "{}", a),
        }
    }
}
