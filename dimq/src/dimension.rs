/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::{BTreeMap, BTreeSet};
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::ops::{Div, Mul};
use std::str::FromStr;
use std::sync::Arc;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::UnitError;
use super::exponent::Exponent;
use super::formula;

/// The ordered list of base dimension symbols of a system.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct BaseDims(Arc<[String]>);

impl BaseDims {
    pub fn new<I, S>(symbols: I) -> Result<Self, UnitError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols = symbols.into_iter().map(Into::into).collect::<Vec<_>>();
        if symbols.is_empty() {
            return Err(UnitError::InvalidBaseDimensions(
                "at least one base dimension is required".to_string(),
            ));
        }
        let mut seen = BTreeSet::new();
        for sym in &symbols {
            if sym.is_empty() {
                return Err(UnitError::InvalidBaseDimensions(
                    "empty dimension symbol".to_string(),
                ));
            }
            if !seen.insert(sym.as_str()) {
                return Err(UnitError::InvalidBaseDimensions(format!(
                    "duplicate dimension symbol: {}",
                    sym
                )));
            }
        }
        Ok(BaseDims(symbols.into()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn symbols(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn position(&self, symbol: &str) -> Option<usize> {
        self.0.iter().position(|s| s == symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.position(symbol).is_some()
    }
}

impl Display for BaseDims {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0.join(", "))
    }
}

/// A full dimension: one exponent for every base dimension of the
/// system, in base order.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct Dimensions {
    base: BaseDims,
    exponents: Vec<Exponent>,
}

impl Dimensions {
    pub fn dimensionless(base: &BaseDims) -> Self {
        Self {
            base: base.clone(),
            exponents: vec![Exponent::ZERO; base.len()],
        }
    }

    /// The dimension of a single base quantity.
    pub fn base(base: &BaseDims, symbol: &str) -> Result<Self, UnitError> {
        let pos = base
            .position(symbol)
            .ok_or_else(|| UnitError::UnknownDimension(symbol.to_string()))?;
        let mut dims = Self::dimensionless(base);
        dims.exponents[pos] = Exponent::ONE;
        Ok(dims)
    }

    /// Complete a partial dimension, filling omitted symbols with zero.
    pub fn with_defaults(
        base: &BaseDims,
        partial: &PartialDims,
    ) -> Result<Self, UnitError> {
        let mut dims = Self::dimensionless(base);
        for (sym, exp) in partial.iter() {
            let pos = base
                .position(sym)
                .ok_or_else(|| UnitError::UnknownDimension(sym.to_string()))?;
            dims.exponents[pos] = exp;
        }
        Ok(dims)
    }

    /// Build from raw exponents in base order.
    pub fn from_exponents(
        base: &BaseDims,
        exponents: &[i8],
    ) -> Result<Self, UnitError> {
        if exponents.len() != base.len() {
            return Err(UnitError::InvalidBaseDimensions(format!(
                "expected {} exponents for [{}], got {}",
                base.len(),
                base,
                exponents.len()
            )));
        }
        Ok(Self {
            base: base.clone(),
            exponents: exponents
                .iter()
                .map(|n| Exponent::try_from(*n as i32))
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn base_dims(&self) -> &BaseDims {
        &self.base
    }

    pub fn exponent(&self, symbol: &str) -> Option<Exponent> {
        self.base.position(symbol).map(|i| self.exponents[i])
    }

    pub fn exponents(&self) -> &[Exponent] {
        &self.exponents
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Exponent)> {
        self.base.iter().zip(self.exponents.iter().copied())
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|e| e.is_zero())
    }

    pub fn formula(&self) -> String {
        formula::format(self.iter())
    }

    pub fn multiply(&self, rhs: &Self) -> Result<Self, UnitError> {
        self.combine(rhs, |a, b| {
            a.checked_add(b).ok_or_else(|| {
                UnitError::InvalidExponent(i32::from(a) + i32::from(b))
            })
        })
    }

    pub fn divide(&self, rhs: &Self) -> Result<Self, UnitError> {
        self.combine(rhs, |a, b| {
            a.checked_sub(b).ok_or_else(|| {
                UnitError::InvalidExponent(i32::from(a) - i32::from(b))
            })
        })
    }

    fn combine<F>(&self, rhs: &Self, f: F) -> Result<Self, UnitError>
    where
        F: Fn(Exponent, Exponent) -> Result<Exponent, UnitError>,
    {
        if self.base != rhs.base {
            return Err(UnitError::InvalidBaseDimensions(format!(
                "mismatched base dimensions: [{}] <-> [{}]",
                self.base, rhs.base
            )));
        }
        Ok(Self {
            base: self.base.clone(),
            exponents: self
                .exponents
                .iter()
                .zip(rhs.exponents.iter())
                .map(|(a, b)| f(*a, *b))
                .collect::<Result<_, _>>()?,
        })
    }
}

impl Mul<&Dimensions> for &Dimensions {
    type Output = Result<Dimensions, UnitError>;
    fn mul(self, rhs: &Dimensions) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul<Dimensions> for Dimensions {
    type Output = Result<Dimensions, UnitError>;
    fn mul(self, rhs: Dimensions) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Div<&Dimensions> for &Dimensions {
    type Output = Result<Dimensions, UnitError>;
    fn div(self, rhs: &Dimensions) -> Self::Output {
        self.divide(rhs)
    }
}

impl Div<Dimensions> for Dimensions {
    type Output = Result<Dimensions, UnitError>;
    fn div(self, rhs: Dimensions) -> Self::Output {
        self.divide(&rhs)
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.formula())
    }
}

/// Serialized as a map from symbol to exponent, in base order.
impl Serialize for Dimensions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.exponents.len()))?;
        for (sym, exp) in self.iter() {
            map.serialize_entry(sym, &exp)?;
        }
        map.end()
    }
}

/// A dimension with only its non-default exponents given, as written
/// in quantity specs. Symbols are kept in lexical order.
///
/// Deserializes from either an exponent map (`{"L": 1, "T": -1}`) or a
/// formula (`"L·T⁻¹"`). Serializes as a map, or as the formula with
/// the `serialize_as_string` feature.
#[derive(PartialEq, Eq, Hash, Clone, Default, Debug)]
#[cfg_attr(
    not(feature = "serialize_as_string"),
    derive(Serialize),
    serde(transparent)
)]
#[cfg_attr(
    feature = "serialize_as_string",
    derive(serde_with::SerializeDisplay)
)]
pub struct PartialDims(BTreeMap<String, Exponent>);

impl PartialDims {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Build from `(symbol, exponent)` pairs. Repeated symbols are
    /// summed before the range check.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, UnitError>
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        Ok(Self(
            formula::sum_terms(pairs)
                .into_iter()
                .map(|(sym, n)| Exponent::try_from(n).map(|e| (sym, e)))
                .collect::<Result<_, _>>()?,
        ))
    }

    /// Build from `(symbol, exponent)` entries, each symbol given at
    /// most once.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, UnitError>
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        let mut dims = BTreeMap::new();
        for (sym, n) in entries {
            let sym = sym.into();
            let exp = Exponent::try_from(n)?;
            if dims.contains_key(&sym) {
                return Err(UnitError::DuplicateDimension(sym));
            }
            dims.insert(sym, exp);
        }
        Ok(Self(dims))
    }

    pub fn get(&self, symbol: &str) -> Option<Exponent> {
        self.0.get(symbol).copied()
    }

    pub fn insert(&mut self, symbol: String, exp: Exponent) -> Option<Exponent> {
        self.0.insert(symbol, exp)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Exponent)> {
        self.0.iter().map(|(s, e)| (s.as_str(), *e))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&Dimensions> for PartialDims {
    fn from(dims: &Dimensions) -> Self {
        Self(
            dims.iter()
                .filter(|(_, e)| !e.is_zero())
                .map(|(s, e)| (s.to_string(), e))
                .collect(),
        )
    }
}

impl Display for PartialDims {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", formula::format(self.iter()))
    }
}

impl FromStr for PartialDims {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        formula::parse(s)
    }
}

impl<'de> Deserialize<'de> for PartialDims {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PartialDimsVisitor)
    }
}

struct PartialDimsVisitor;

impl<'de> Visitor<'de> for PartialDimsVisitor {
    type Value = PartialDims;
    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "a dimension formula or a map of exponents")
    }
    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut dims = BTreeMap::new();
        while let Some((sym, exp)) = map.next_entry::<String, Exponent>()? {
            if dims.contains_key(&sym) {
                return Err(<A::Error as de::Error>::custom(
                    UnitError::DuplicateDimension(sym),
                ));
            }
            dims.insert(sym, exp);
        }
        Ok(PartialDims(dims))
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for PartialDims {
    fn schema_name() -> String {
        "PartialDims".to_string()
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        schemars::schema::SchemaObject {
            subschemas: Some(Box::new(schemars::schema::SubschemaValidation {
                any_of: Some(vec![
                    gen.subschema_for::<BTreeMap<String, Exponent>>(),
                    gen.subschema_for::<String>(),
                ]),
                ..Default::default()
            })),
            ..Default::default()
        }
        .into()
    }
}
