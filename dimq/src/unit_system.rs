/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::error::UnitError;
use super::measure::Linear;
use super::quantity::Quantity;
use super::system::{QuantityFactory, QuantitySystem, SystemName};
use super::unit::LinearUnit;

/// Units layered over the factories of one quantity system.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct UnitSystem {
    name: SystemName,
    quantities: QuantitySystem,
}

impl UnitSystem {
    pub fn new(name: &str, quantities: QuantitySystem) -> Self {
        Self {
            name: SystemName::new(name),
            quantities,
        }
    }

    pub fn name(&self) -> &SystemName {
        &self.name
    }

    pub fn quantity_system(&self) -> &QuantitySystem {
        &self.quantities
    }

    /// The base unit (scale 1, no offset) for a quantity.
    pub fn unit(&self, factory: &QuantityFactory) -> Result<LinearUnit, UnitError> {
        self.quantities.name().check(factory.system())?;
        Ok(LinearUnit::new(factory.clone(), self.name.clone()))
    }

    /// Treat a bare quantity as a linear value in base units.
    pub fn linear(&self, quantity: Quantity) -> Result<Linear, UnitError> {
        self.quantities.name().check(quantity.system())?;
        Ok(Linear::new(quantity, self.name.clone()))
    }
}
