/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use serde::{Serialize, Serializer};

use super::dimension::{BaseDims, Dimensions, PartialDims};
use super::error::UnitError;
use super::quantity::Quantity;

/// Identity token of a quantity or unit system. Values built from
/// different systems never combine, even if their dimensions agree.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct SystemName(Arc<str>);

impl SystemName {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fail with `IncompatibleSystem` unless both names match.
    pub fn check(&self, other: &Self) -> Result<(), UnitError> {
        match self == other {
            true => Ok(()),
            false => Err(UnitError::IncompatibleSystem(
                self.to_string(),
                other.to_string(),
            )),
        }
    }
}

impl Display for SystemName {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl Serialize for SystemName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// A quantity system: a name and an ordered set of base dimensions.
/// Hands out factories for quantities of any dimension over its base.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct QuantitySystem {
    name: SystemName,
    dims: BaseDims,
}

impl QuantitySystem {
    pub fn new<I, S>(name: &str, dims: I) -> Result<Self, UnitError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            name: SystemName::new(name),
            dims: BaseDims::new(dims)?,
        })
    }

    pub fn name(&self) -> &SystemName {
        &self.name
    }

    pub fn dims(&self) -> &BaseDims {
        &self.dims
    }

    /// Factory for the base quantity of `symbol`.
    pub fn base(&self, symbol: &str) -> Result<QuantityFactory, UnitError> {
        Ok(self.make(Dimensions::base(&self.dims, symbol)?))
    }

    /// Factory for a partially given dimension; omitted symbols are zero
    /// and each symbol may be given once.
    pub fn factory<I, S>(&self, exps: I) -> Result<QuantityFactory, UnitError>
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        self.factory_for(&PartialDims::from_entries(exps)?)
    }

    pub fn factory_for(
        &self,
        partial: &PartialDims,
    ) -> Result<QuantityFactory, UnitError> {
        Ok(self.make(Dimensions::with_defaults(&self.dims, partial)?))
    }

    /// Factory from a full exponent vector in base order.
    pub fn from_exponents(
        &self,
        exps: &[i8],
    ) -> Result<QuantityFactory, UnitError> {
        Ok(self.make(Dimensions::from_exponents(&self.dims, exps)?))
    }

    pub fn dimensionless(&self) -> QuantityFactory {
        self.make(Dimensions::dimensionless(&self.dims))
    }

    pub fn scalar(&self, value: f64) -> Quantity {
        self.dimensionless().of(value)
    }

    /// Parse a formula such as `L·T⁻¹` against this system's base.
    pub fn parse_dimensions(&self, formula: &str) -> Result<Dimensions, UnitError> {
        Dimensions::with_defaults(&self.dims, &formula.parse::<PartialDims>()?)
    }

    fn make(&self, dim: Dimensions) -> QuantityFactory {
        QuantityFactory {
            system: self.name.clone(),
            dim,
        }
    }
}

/// Constructor for quantities of one dimension in one system.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct QuantityFactory {
    system: SystemName,
    dim: Dimensions,
}

impl QuantityFactory {
    pub fn of(&self, value: f64) -> Quantity {
        Quantity::new(value, self.dim.clone(), self.system.clone())
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dim
    }

    pub fn system(&self) -> &SystemName {
        &self.system
    }

    pub fn formula(&self) -> String {
        self.dim.formula()
    }
}

impl Display for QuantityFactory {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} ({})", self.dim, self.system)
    }
}
