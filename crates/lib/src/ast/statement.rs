//! Statements inside files, definitions and object blocks.

use super::{
    Assignment, ClassDefinition, Declaration, Decode, Definition, ObjectDeclaration, SchemaError,
    VariantSet, value::Candidate, value::decode_first,
};
use crate::document::{Document, Item};

/// Any element of a `statements` or `entries` list.
///
/// Decoded by ordered trial in declaration order of the variants.
#[derive(Debug, Clone)]
pub enum Statement<'a> {
    Definition(Definition<'a>),
    ClassDefinition(ClassDefinition<'a>),
    VariantSet(VariantSet<'a>),
    Declaration(Declaration<'a>),
    ObjectDeclaration(ObjectDeclaration<'a>),
    Assignment(Assignment<'a>),
}

impl<'a> Statement<'a> {
    /// Candidate decoders in trial order
    pub fn candidates() -> [Candidate<'a, Statement<'a>>; 6] {
        [
            ("Definition", |doc, item| {
                Definition::decode(doc, item).map(Statement::Definition)
            }),
            ("ClassDefinition", |doc, item| {
                ClassDefinition::decode(doc, item).map(Statement::ClassDefinition)
            }),
            ("VariantSet", |doc, item| {
                VariantSet::decode(doc, item).map(Statement::VariantSet)
            }),
            ("Declaration", |doc, item| {
                Declaration::decode(doc, item).map(Statement::Declaration)
            }),
            ("ObjectDeclaration", |doc, item| {
                ObjectDeclaration::decode(doc, item).map(Statement::ObjectDeclaration)
            }),
            ("Assignment", |doc, item| {
                Assignment::decode(doc, item).map(Statement::Assignment)
            }),
        ]
    }

    /// Returns the held definition, if any
    pub fn as_definition(&self) -> Option<&Definition<'a>> {
        match self {
            Statement::Definition(definition) => Some(definition),
            _ => None,
        }
    }

    /// Takes the held definition, if any
    pub fn into_definition(self) -> Option<Definition<'a>> {
        match self {
            Statement::Definition(definition) => Some(definition),
            _ => None,
        }
    }

    /// Name of the held alternative
    pub fn type_name(&self) -> &'static str {
        match self {
            Statement::Definition(_) => "Definition",
            Statement::ClassDefinition(_) => "ClassDefinition",
            Statement::VariantSet(_) => "VariantSet",
            Statement::Declaration(_) => "Declaration",
            Statement::ObjectDeclaration(_) => "ObjectDeclaration",
            Statement::Assignment(_) => "Assignment",
        }
    }
}

impl<'a> Decode<'a> for Statement<'a> {
    fn decode(doc: &'a Document, item: Item) -> Result<Self, SchemaError> {
        decode_first(doc, &item, "Statement", &Self::candidates())
    }
}
