/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Turns a [`QuantitySpec`] into a quantity system, either at runtime
//! ([`generate`]) or as Rust source text ([`generate_source`]).

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::dimension::Dimensions;
use super::error::UnitError;
use super::spec::QuantitySpec;
use super::system::{QuantityFactory, QuantitySystem};

pub const DEFAULT_REGEN_HINT: &str = "Regenerate with your generation command.";

const BANNER: &str = "THIS FILE IS GENERATED. DO NOT EDIT DIRECTLY.";

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(rename_all = "snake_case")]
pub enum QuantityKind {
    Base,
    Derived,
}

#[derive(PartialEq, Clone, Debug)]
pub struct QuantityDefinition {
    name: String,
    kind: QuantityKind,
    factory: QuantityFactory,
    formula: String,
}

impl QuantityDefinition {
    fn new(name: &str, kind: QuantityKind, factory: QuantityFactory) -> Self {
        let formula = factory.formula();
        trace!("{} quantity {}: {}", kind.as_str(), name, formula);
        Self {
            name: name.to_string(),
            kind,
            factory,
            formula,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> QuantityKind {
        self.kind
    }

    pub fn factory(&self) -> &QuantityFactory {
        &self.factory
    }

    pub fn dimensions(&self) -> &Dimensions {
        self.factory.dimensions()
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }
}

impl QuantityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityKind::Base => "base",
            QuantityKind::Derived => "derived",
        }
    }
}

/// A generated quantity system with its named quantities, base
/// quantities first, each group in declaration order.
#[derive(PartialEq, Clone, Debug)]
pub struct SystemDefinition {
    system: QuantitySystem,
    quantities: Vec<QuantityDefinition>,
    regen_hint: String,
}

impl SystemDefinition {
    pub fn name(&self) -> &str {
        self.system.name().as_str()
    }

    pub fn system(&self) -> &QuantitySystem {
        &self.system
    }

    pub fn quantities(&self) -> &[QuantityDefinition] {
        &self.quantities
    }

    pub fn get(&self, name: &str) -> Option<&QuantityDefinition> {
        self.quantities.iter().find(|q| q.name == name)
    }

    pub fn factory(&self, name: &str) -> Option<&QuantityFactory> {
        self.get(name).map(|q| q.factory())
    }

    pub fn regen_hint(&self) -> &str {
        &self.regen_hint
    }
}

/// Validate the spec and build the system it describes. Nothing is
/// produced if any part of the spec is invalid.
pub fn generate(spec: &QuantitySpec) -> Result<SystemDefinition, UnitError> {
    spec.validate()?;
    debug!(
        "generating quantity system {} over [{}]",
        spec.name,
        spec.dims.join(", ")
    );

    let system = QuantitySystem::new(&spec.name, spec.dims.iter().cloned())?;
    let mut quantities = Vec::with_capacity(
        spec.quantities.base.len() + spec.quantities.derived.len(),
    );

    for (name, sym) in spec.quantities.base.iter() {
        quantities.push(QuantityDefinition::new(
            name,
            QuantityKind::Base,
            system.base(sym)?,
        ));
    }

    for (name, dims) in spec.quantities.derived.iter() {
        quantities.push(QuantityDefinition::new(
            name,
            QuantityKind::Derived,
            system.factory_for(dims)?,
        ));
    }

    Ok(SystemDefinition {
        system,
        quantities,
        regen_hint: spec
            .regen_hint
            .clone()
            .unwrap_or_else(|| DEFAULT_REGEN_HINT.to_string()),
    })
}

/// Emit a self-contained Rust module defining the system of `spec`.
/// The output only depends on the spec.
pub fn generate_source(spec: &QuantitySpec) -> Result<String, UnitError> {
    let def = generate(spec)?;
    let n = def.system.dims().len();
    let mut lines = Vec::new();

    lines.push(format!("//! {}", BANNER));
    lines.push(format!("//! {}", def.regen_hint));
    lines.push("//!".to_string());
    lines.push(format!("//! Quantity system `{}`.", def.name()));
    lines.push(String::new());
    lines.push("use dimq::lazy_static::lazy_static;".to_string());
    lines.push("use dimq::{QuantityFactory, QuantitySystem};".to_string());
    lines.push(String::new());

    lines.push("/// Base dimension symbols, in order.".to_string());
    lines.push(format!(
        "pub const DIMS: [&str; {}] = [{}];",
        n,
        def.system
            .dims()
            .iter()
            .map(|s| format!("{:?}", s))
            .collect::<Vec<_>>()
            .join(", ")
    ));
    lines.push(String::new());

    lines.push("lazy_static! {".to_string());
    lines.push(format!("    /// The `{}` quantity system.", def.name()));
    lines.push(format!(
        "    pub static ref SYSTEM: QuantitySystem = QuantitySystem::new({:?}, DIMS)",
        def.name()
    ));
    lines.push(
        "        .expect(\"generated base dimensions are valid\");".to_string(),
    );
    lines.push("}".to_string());
    lines.push(String::new());

    lines.push("/// Dimensionless: `dimensionless`.".to_string());
    lines.push(format!(
        "pub const SCALAR: [i8; {}] = [{}];",
        n,
        shape(&Dimensions::dimensionless(def.system.dims()))
    ));
    lines.push(String::new());
    lines.push("pub fn scalar() -> QuantityFactory {".to_string());
    lines.push("    SYSTEM.dimensionless()".to_string());
    lines.push("}".to_string());

    for q in &def.quantities {
        lines.push(String::new());
        lines.push(format!(
            "/// {} quantity `{}`: `{}`.",
            capitalize(q.kind.as_str()),
            q.name,
            q.formula
        ));
        lines.push(format!(
            "pub const {}: [i8; {}] = [{}];",
            screaming_case(&q.name),
            n,
            shape(q.dimensions())
        ));
        lines.push(String::new());
        lines.push(format!("/// Factory for {} (`{}`).", q.name, q.formula));
        lines.push(format!(
            "pub fn {}() -> QuantityFactory {{",
            snake_case(&q.name)
        ));
        lines.push(format!("    factory(&{})", screaming_case(&q.name)));
        lines.push("}".to_string());
    }

    lines.push(String::new());
    lines.push("fn factory(exps: &[i8]) -> QuantityFactory {".to_string());
    lines.push("    SYSTEM".to_string());
    lines.push("        .from_exponents(exps)".to_string());
    lines.push(
        "        .expect(\"generated exponents are in range\")".to_string(),
    );
    lines.push("}".to_string());
    lines.push(String::new());

    debug!(
        "emitted {} lines for quantity system {}",
        lines.len(),
        def.name()
    );
    Ok(lines.join("\n"))
}

fn shape(dims: &Dimensions) -> String {
    dims.exponents()
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `magneticFluxDensity` -> `magnetic_flux_density`.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if let Some(p) = prev {
                if p.is_ascii_lowercase() || p.is_ascii_digit() {
                    out.push('_');
                }
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

/// `magneticFluxDensity` -> `MAGNETIC_FLUX_DENSITY`.
pub fn screaming_case(name: &str) -> String {
    snake_case(name).to_ascii_uppercase()
}
