/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::marker::PhantomData;

use log::debug;
use serde::de::{Deserializer, Error, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::dimension::PartialDims;
use super::error::UnitError;
use super::generator::{screaming_case, snake_case};

/// Declarative description of a quantity system, as read by the
/// generator.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct QuantitySpec {
    pub name: String,
    pub dims: Vec<String>,
    pub quantities: QuantityDefs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regen_hint: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Default, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct QuantityDefs {
    /// Base quantity name to dimension symbol.
    #[serde(default)]
    pub base: NamedEntries<String>,
    /// Derived quantity name to (partial) exponents.
    #[serde(default)]
    pub derived: NamedEntries<PartialDims>,
}

/// Items the generated module defines besides the quantities.
const RESERVED: &[&str] = &["dims", "system", "scalar", "factory"];

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn",
    "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "static", "struct", "super", "trait", "true", "type", "unsafe",
    "use", "where", "while", "yield",
];

impl QuantitySpec {
    pub fn from_json(input: &str) -> Result<Self, UnitError> {
        serde_json::from_str(input).map_err(|e| UnitError::Json(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, UnitError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| UnitError::Json(e.to_string()))
    }

    /// Check the spec as a whole. All problems found are reported
    /// together in a single `SpecValidation` error.
    pub fn validate(&self) -> Result<(), UnitError> {
        let mut problems = Vec::new();

        if !is_identifier(&self.name) {
            problems.push(format!(
                "system name {:?} is not a valid identifier",
                self.name
            ));
        }

        if self.dims.is_empty() {
            problems.push("no base dimensions declared".to_string());
        }
        let mut dims = BTreeSet::new();
        for sym in &self.dims {
            if sym.is_empty() {
                problems.push("empty dimension symbol".to_string());
            } else if !dims.insert(sym.as_str()) {
                problems.push(format!("duplicate dimension symbol {:?}", sym));
            }
        }

        let mut names: BTreeMap<String, String> = BTreeMap::new();
        let mut check_name = |name: &str, problems: &mut Vec<String>| {
            if !is_identifier(name) {
                problems.push(format!(
                    "quantity name {:?} is not a valid identifier",
                    name
                ));
                return;
            }
            let snake = snake_case(name);
            if RESERVED.contains(&snake.as_str())
                || KEYWORDS.contains(&snake.as_str())
            {
                problems.push(format!("quantity name {:?} is reserved", name));
            }
            if let Some(prev) = names.insert(screaming_case(name), name.to_string()) {
                problems.push(format!(
                    "quantity names {:?} and {:?} collide",
                    prev, name
                ));
            }
        };

        for (name, sym) in self.quantities.base.iter() {
            check_name(name, &mut problems);
            if !dims.contains(sym.as_str()) {
                problems.push(format!(
                    "base quantity {} references undeclared dimension {:?}",
                    name, sym
                ));
            }
        }

        for (name, exps) in self.quantities.derived.iter() {
            check_name(name, &mut problems);
            for sym in exps.symbols() {
                if !dims.contains(sym) {
                    problems.push(format!(
                        "derived quantity {} references undeclared dimension {:?}",
                        name, sym
                    ));
                }
            }
        }

        match problems.is_empty() {
            true => {
                debug!(
                    "spec {} is valid: {} dimensions, {} base and {} derived quantities",
                    self.name,
                    self.dims.len(),
                    self.quantities.base.len(),
                    self.quantities.derived.len()
                );
                Ok(())
            }
            false => Err(UnitError::SpecValidation(problems.join("; "))),
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// A JSON object whose key order is significant. Duplicate keys are
/// rejected when deserializing.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct NamedEntries<V>(Vec<(String, V)>);

impl<V> NamedEntries<V> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an entry. Returns false (and leaves the entries
    /// unchanged) if the name is already present.
    pub fn insert(&mut self, name: String, value: V) -> bool {
        match self.get(&name) {
            Some(_) => false,
            None => {
                self.0.push((name, value));
                true
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> Default for NamedEntries<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>, V> FromIterator<(S, V)> for NamedEntries<V> {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut entries = Self::new();
        for (name, value) in iter {
            entries.insert(name.into(), value);
        }
        entries
    }
}

impl<V: Serialize> Serialize for NamedEntries<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for NamedEntries<V> {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_map(NamedEntriesVisitor(PhantomData))
    }
}

struct NamedEntriesVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for NamedEntriesVisitor<V> {
    type Value = NamedEntries<V>;
    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a map with unique keys")
    }
    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = NamedEntries::new();
        while let Some((name, value)) = map.next_entry::<String, V>()? {
            if entries.get(&name).is_some() {
                return Err(A::Error::custom(format!(
                    "duplicate entry: {}",
                    name
                )));
            }
            entries.0.push((name, value));
        }
        Ok(entries)
    }
}

#[cfg(feature = "schemars")]
impl<V: schemars::JsonSchema> schemars::JsonSchema for NamedEntries<V> {
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        format!("NamedEntries_{}", V::schema_name())
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        <BTreeMap<String, V> as schemars::JsonSchema>::json_schema(gen)
    }
}

#[cfg(test)]
mod test {
    use super::QuantitySpec;
    use crate::UnitError;

    fn spec(json: &str) -> QuantitySpec {
        QuantitySpec::from_json(json).unwrap()
    }

    #[test]
    fn keeps_declaration_order() {
        let s = spec(
            r#"{"name":"mech","dims":["L","T"],"quantities":{
                "base":{"time":"T","length":"L"},
                "derived":{"velocity":{"L":1,"T":-1},"area":{"L":2}}}}"#,
        );
        let base = s.quantities.base.iter().map(|(n, _)| n).collect::<Vec<_>>();
        assert_eq!(base, vec!["time", "length"]);
        let derived = s
            .quantities
            .derived
            .iter()
            .map(|(n, _)| n)
            .collect::<Vec<_>>();
        assert_eq!(derived, vec!["velocity", "area"]);
        assert_eq!(s.regen_hint, None);
    }

    #[test]
    fn rejects_duplicate_names() {
        let r = QuantitySpec::from_json(
            r#"{"name":"mech","dims":["L"],"quantities":{
                "base":{"length":"L","length":"L"},"derived":{}}}"#,
        );
        assert!(matches!(r, Err(UnitError::Json(_))));
    }

    #[test]
    fn reads_regen_hint() {
        let s = spec(
            r#"{"name":"mech","dims":["L"],"regenHint":"run it",
                "quantities":{"base":{"length":"L"},"derived":{}}}"#,
        );
        assert_eq!(s.regen_hint.as_deref(), Some("run it"));
    }

    #[test]
    fn reports_all_problems() {
        let s = spec(
            r#"{"name":"mech","dims":["L","L"],"quantities":{
                "base":{"length":"X"},
                "derived":{"velocity":{"L":1,"T":-1}}}}"#,
        );
        match s.validate() {
            Err(UnitError::SpecValidation(msg)) => {
                assert!(msg.contains("duplicate dimension symbol \"L\""));
                assert!(msg.contains("length references undeclared dimension \"X\""));
                assert!(msg.contains("velocity references undeclared dimension \"T\""));
            }
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn rejects_bad_names() {
        let s = spec(
            r#"{"name":"my system","dims":["L"],"quantities":{
                "base":{"length":"L"},
                "derived":{"Length":{"L":1},"type":{"L":2},"2d":{"L":2}}}}"#,
        );
        match s.validate() {
            Err(UnitError::SpecValidation(msg)) => {
                assert!(msg.contains("system name \"my system\""));
                assert!(msg.contains("\"length\" and \"Length\" collide"));
                assert!(msg.contains("\"type\" is reserved"));
                assert!(msg.contains("\"2d\" is not a valid identifier"));
            }
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn rejects_empty_dims() {
        let s = spec(r#"{"name":"empty","dims":[],"quantities":{}}"#);
        assert_eq!(
            s.validate(),
            Err(UnitError::SpecValidation(
                "no base dimensions declared".to_string()
            ))
        );
    }
}
