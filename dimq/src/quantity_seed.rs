/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt;

use serde::de::{
    DeserializeSeed, Deserializer, Error, IgnoredAny, MapAccess, Visitor,
};

use super::dimension::{Dimensions, PartialDims};
use super::error::UnitError;
use super::quantity::Quantity;
use super::system::QuantitySystem;

/// Deserializes `{"value": .., "dimensions": {..}}` into a quantity of
/// the given system. Omitted dimensions default to zero. A `"system"`
/// key, when present, must name the given system.
pub struct QuantitySeed<'a>(pub &'a QuantitySystem);

impl<'a, 'de> DeserializeSeed<'de> for QuantitySeed<'a> {
    type Value = Quantity;
    fn deserialize<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_struct(
            "Quantity",
            &["value", "dimensions", "system"],
            self,
        )
    }
}

impl<'a, 'de> Visitor<'de> for QuantitySeed<'a> {
    type Value = Quantity;
    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a quantity of system {}", self.0.name())
    }
    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut value: Option<f64> = None;
        let mut dims: Option<PartialDims> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "value" => value = Some(map.next_value()?),
                "dimensions" => dims = Some(map.next_value()?),
                "system" => {
                    let system = map.next_value::<String>()?;
                    if system != self.0.name().as_str() {
                        return Err(A::Error::custom(
                            UnitError::IncompatibleSystem(
                                system,
                                self.0.name().to_string(),
                            ),
                        ));
                    }
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        let value = value.ok_or_else(|| A::Error::missing_field("value"))?;
        let dims = dims.ok_or_else(|| A::Error::missing_field("dimensions"))?;
        let dim = Dimensions::with_defaults(self.0.dims(), &dims)
            .map_err(A::Error::custom)?;
        Ok(Quantity::new(value, dim, self.0.name().clone()))
    }
}
