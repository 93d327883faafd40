//! Host-native stand-in for engine objects.

use std::collections::BTreeMap;

use serde::Serialize;

use super::SceneError;
use crate::Result;
use crate::ast::{DefType, Definition, Node, Number, Statement, Value};
use crate::document::ObjectId;

/// A property value the host can hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Property {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    List(Vec<Property>),
}

impl Property {
    /// Converts an AST value.
    ///
    /// Returns `Ok(None)` for undefined and null. Any other value without a
    /// host representation is an [`SceneError::UnsupportedValue`] naming `property`.
    pub fn from_value(property: &str, value: &Value<'_>) -> Result<Option<Self>> {
        let converted = match value {
            Value::Undefined | Value::Null => return Ok(None),
            Value::Bool(b) => Property::Bool(*b),
            Value::Number(Number::Float(f)) => Property::Float(*f),
            Value::Number(Number::Signed(i)) => Property::Int(*i),
            Value::Number(Number::Unsigned(u)) => Property::Uint(*u),
            Value::String(s) => Property::String(s.clone()),
            Value::Array(range) => {
                let mut items = Vec::with_capacity(range.size());
                for element in range.iter() {
                    match Property::from_value(property, &element?)? {
                        Some(item) => items.push(item),
                        // Dropping holes would shift positions
                        None => {
                            return Err(SceneError::UnsupportedValue {
                                property: property.to_string(),
                                kind: "null list element",
                            }
                            .into());
                        }
                    }
                }
                Property::List(items)
            }
            other => {
                return Err(SceneError::UnsupportedValue {
                    property: property.to_string(),
                    kind: other.type_name(),
                }
                .into());
            }
        };
        Ok(Some(converted))
    }
}

/// An engine object built from one typed definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneObject {
    pub stable_id: ObjectId,
    pub name: String,
    pub kind: DefType,
    pub properties: BTreeMap<String, Property>,
}

impl SceneObject {
    /// Builds the object, consuming the definition.
    ///
    /// Properties come from keyword-less descriptor assignments, then from
    /// `Declaration` statements; a declaration overrides a descriptor entry of
    /// the same name.
    pub fn from_definition(definition: Definition<'_>) -> Result<Self> {
        let name = definition.name()?;
        let kind = definition
            .def_type()?
            .ok_or_else(|| SceneError::UntypedDefinition { name: name.clone() })?;

        let mut properties = BTreeMap::new();
        if let Some(descriptor) = definition.descriptor()? {
            for assignment in &descriptor.assignments()? {
                let assignment = assignment?;
                if assignment.keyword()?.is_some() {
                    continue;
                }
                let identifier = assignment.identifier()?;
                if let Some(property) = Property::from_value(&identifier, &assignment.value()?)? {
                    properties.insert(identifier, property);
                }
            }
        }
        for statement in &definition.statements()? {
            if let Statement::Declaration(declaration) = statement? {
                let identifier = declaration.identifier()?;
                if let Some(property) = Property::from_value(&identifier, &declaration.value()?)? {
                    properties.insert(identifier, property);
                }
            }
        }

        tracing::trace!(name = %name, kind = %kind, properties = properties.len(), "Built scene object");
        Ok(Self {
            stable_id: definition.object_id().clone(),
            name,
            kind,
            properties,
        })
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }
}
