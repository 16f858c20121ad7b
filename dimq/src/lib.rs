/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

#![recursion_limit = "256"]

//! Dimensional analysis for physical quantities.
//!
//! A [`QuantitySystem`] hands out factories for quantities over a
//! fixed set of base dimensions. A [`UnitSystem`] layers scaled and
//! affine units on top of those factories. The [`generator`] builds
//! quantity systems from a declarative [`QuantitySpec`].

pub mod chain;
pub mod dimension;
pub mod error;
pub mod exponent;
pub mod formula;
pub mod generator;
pub mod isq;
pub mod measure;
pub mod ops;
pub mod quantity;
pub mod quantity_seed;
pub mod si;
pub mod spec;
pub mod system;
pub mod unit;
pub mod unit_system;

pub use chain::{AffineChain, LinearChain};
pub use dimension::{BaseDims, Dimensions, PartialDims};
pub use error::UnitError;
pub use exponent::{Exponent, MAX_EXPONENT};
pub use generator::{
    generate, generate_source, QuantityDefinition, QuantityKind,
    SystemDefinition,
};
pub use measure::{Affine, Linear, Measure, Measurement};
pub use quantity::Quantity;
pub use quantity_seed::QuantitySeed;
pub use si::SiPrefix;
pub use spec::{NamedEntries, QuantityDefs, QuantitySpec};
pub use system::{QuantityFactory, QuantitySystem, SystemName};
pub use unit::{AffineUnit, DeltaUnit, LinearScale, LinearUnit, Unit};
pub use unit_system::UnitSystem;

/* Used by generated quantity modules. */
pub use lazy_static;
