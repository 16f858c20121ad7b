/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Free-function forms of the quantity operations.
//!
//! Every binary operation checks system identity before anything
//! else. `add` and `subtract` then require equal dimensions, while
//! `multiply` and `divide` combine them.

use super::error::UnitError;
use super::quantity::Quantity;

pub fn add(a: &Quantity, b: &Quantity) -> Result<Quantity, UnitError> {
    a.try_add(b)
}

pub fn subtract(a: &Quantity, b: &Quantity) -> Result<Quantity, UnitError> {
    a.try_sub(b)
}

pub fn multiply(a: &Quantity, b: &Quantity) -> Result<Quantity, UnitError> {
    a.try_mul(b)
}

pub fn divide(a: &Quantity, b: &Quantity) -> Result<Quantity, UnitError> {
    a.try_div(b)
}

pub fn scale(q: &Quantity, factor: f64) -> Quantity {
    q.scale(factor)
}
