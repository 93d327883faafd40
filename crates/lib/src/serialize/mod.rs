//! Canonical text output for scene ASTs.
//!
//! The [`Serializer`] is a [`Visitor`] that renders nodes as JSON-shaped text:
//!
//! - every node is an object whose first key is `"type"`, followed by its
//!   declared fields in declaration order
//! - empty arrays are `[]`; non-empty arrays put one element per line
//! - floats use a fixed decimal precision chosen by the caller; integers are bare
//! - absent values render as `undefined` and null values as `null`
//!
//! Output for documents without undefined values is valid JSON.

use crate::Result;
use crate::ast::{
    Assignment, ClassDefinition, Declaration, Decode, Definition, Descriptor, EnumToken,
    ExternalReference, ExternalReferenceImport, File, NodeKind, Number, ObjectDeclaration,
    ObjectDeclarationEntries, ObjectDeclarationList, Range, ReferenceFile, Value,
    VariantDefinition, VariantSet,
};
use crate::visit::{Accept, Visitor};

/// Decimal places used for floats when no precision is given.
pub const DEFAULT_PRECISION: usize = 6;

const INDENT: &str = "  ";

/// Renders any visitable node to a string.
pub fn to_string<'a, N: Accept<'a>>(node: &N, precision: usize) -> Result<String> {
    let mut serializer = Serializer::new(precision);
    node.accept(&mut serializer)?;
    Ok(serializer.finish())
}

/// Text-emitting visitor.
#[derive(Debug)]
pub struct Serializer {
    out: String,
    depth: usize,
    precision: usize,
    /// One entry per open object: whether it has no fields yet
    open: Vec<bool>,
}

impl Serializer {
    pub fn new(precision: usize) -> Self {
        Self {
            out: String::new(),
            depth: 0,
            precision,
            open: Vec::new(),
        }
    }

    /// Returns the text written so far
    pub fn finish(self) -> String {
        self.out
    }

    fn newline(&mut self) {
        self.out.push('\n');
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }

    fn begin_object(&mut self, kind: NodeKind) -> Result<()> {
        self.out.push('{');
        self.depth += 1;
        self.open.push(true);
        self.field("type")?;
        self.string(kind.token())
    }

    fn field(&mut self, name: &str) -> Result<()> {
        if let Some(first) = self.open.last_mut() {
            if !*first {
                self.out.push(',');
            }
            *first = false;
        }
        self.newline();
        self.string(name)?;
        self.out.push_str(": ");
        Ok(())
    }

    fn end_object(&mut self) {
        self.open.pop();
        self.depth -= 1;
        self.newline();
        self.out.push('}');
    }

    fn string(&mut self, text: &str) -> Result<()> {
        self.out.push_str(&serde_json::to_string(text)?);
        Ok(())
    }

    fn null(&mut self) {
        self.out.push_str("null");
    }

    fn number(&mut self, number: Number) {
        let rendered = match number {
            Number::Float(f) if f.is_finite() => format!("{f:.prec$}", prec = self.precision),
            // JSON has no spelling for NaN or infinities
            Number::Float(_) => "null".to_string(),
            Number::Signed(i) => i.to_string(),
            Number::Unsigned(u) => u.to_string(),
        };
        self.out.push_str(&rendered);
    }

    fn token<T: EnumToken>(&mut self, tag: Option<T>) -> Result<()> {
        match tag {
            Some(tag) => self.string(crate::ast::EnumCodec::encode(tag)),
            None => {
                self.null();
                Ok(())
            }
        }
    }

    fn optional_string(&mut self, text: Option<String>) -> Result<()> {
        match text {
            Some(text) => self.string(&text),
            None => {
                self.null();
                Ok(())
            }
        }
    }

    fn optional<'a, N: Accept<'a>>(&mut self, node: Option<N>) -> Result<()> {
        match node {
            Some(node) => node.accept(self),
            None => {
                self.null();
                Ok(())
            }
        }
    }

    fn array<'a, T>(&mut self, range: &Range<'a, T>) -> Result<()>
    where
        T: Decode<'a> + Accept<'a>,
    {
        if range.is_empty() {
            self.out.push_str("[]");
            return Ok(());
        }
        self.out.push('[');
        self.depth += 1;
        for (index, element) in range.iter().enumerate() {
            let element = element?;
            if index > 0 {
                self.out.push(',');
            }
            self.newline();
            element.accept(self)?;
        }
        self.depth -= 1;
        self.newline();
        self.out.push(']');
        Ok(())
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl<'a> Visitor<'a> for Serializer {
    fn visit_file(&mut self, node: &File<'a>) -> Result<()> {
        self.begin_object(NodeKind::File)?;
        self.field("version")?;
        self.number(node.version()?);
        self.field("descriptor")?;
        self.optional(node.descriptor()?)?;
        self.field("statements")?;
        self.array(&node.statements()?)?;
        self.end_object();
        Ok(())
    }

    fn visit_descriptor(&mut self, node: &Descriptor<'a>) -> Result<()> {
        self.begin_object(NodeKind::Descriptor)?;
        self.field("description")?;
        self.optional_string(node.description()?)?;
        self.field("assignments")?;
        self.array(&node.assignments()?)?;
        self.end_object();
        Ok(())
    }

    fn visit_assignment(&mut self, node: &Assignment<'a>) -> Result<()> {
        self.begin_object(NodeKind::Assignment)?;
        self.field("keyword")?;
        self.token(node.keyword()?)?;
        self.field("identifier")?;
        self.string(&node.identifier()?)?;
        self.field("value")?;
        node.value()?.accept(self)?;
        self.end_object();
        Ok(())
    }

    fn visit_declaration(&mut self, node: &Declaration<'a>) -> Result<()> {
        self.begin_object(NodeKind::Declaration)?;
        self.field("keyword")?;
        self.token(node.keyword()?)?;
        self.field("valueType")?;
        self.string(&node.value_type()?)?;
        self.field("identifier")?;
        self.string(&node.identifier()?)?;
        self.field("value")?;
        node.value()?.accept(self)?;
        self.field("descriptor")?;
        self.optional(node.descriptor()?)?;
        self.end_object();
        Ok(())
    }

    fn visit_definition(&mut self, node: &Definition<'a>) -> Result<()> {
        self.begin_object(NodeKind::Definition)?;
        self.field("subType")?;
        self.token(Some(node.sub_type()?))?;
        self.field("defType")?;
        self.token(node.def_type()?)?;
        self.field("name")?;
        self.string(&node.name()?)?;
        self.field("descriptor")?;
        self.optional(node.descriptor()?)?;
        self.field("statements")?;
        self.array(&node.statements()?)?;
        self.end_object();
        Ok(())
    }

    fn visit_class_definition(&mut self, node: &ClassDefinition<'a>) -> Result<()> {
        self.begin_object(NodeKind::ClassDefinition)?;
        self.field("name")?;
        self.string(&node.name()?)?;
        self.field("descriptor")?;
        self.optional(node.descriptor()?)?;
        self.field("statements")?;
        self.array(&node.statements()?)?;
        self.end_object();
        Ok(())
    }

    fn visit_variant_set(&mut self, node: &VariantSet<'a>) -> Result<()> {
        self.begin_object(NodeKind::VariantSet)?;
        self.field("name")?;
        self.string(&node.name()?)?;
        self.field("variants")?;
        self.array(&node.variants()?)?;
        self.end_object();
        Ok(())
    }

    fn visit_variant_definition(&mut self, node: &VariantDefinition<'a>) -> Result<()> {
        self.begin_object(NodeKind::VariantDefinition)?;
        self.field("name")?;
        self.string(&node.name()?)?;
        self.field("descriptor")?;
        self.optional(node.descriptor()?)?;
        self.field("statements")?;
        self.array(&node.statements()?)?;
        self.end_object();
        Ok(())
    }

    fn visit_object_declaration(&mut self, node: &ObjectDeclaration<'a>) -> Result<()> {
        self.begin_object(NodeKind::ObjectDeclaration)?;
        self.field("keyword")?;
        self.token(node.keyword()?)?;
        self.field("identifier")?;
        self.string(&node.identifier()?)?;
        self.field("value")?;
        node.value()?.accept(self)?;
        self.end_object();
        Ok(())
    }

    fn visit_object_declaration_entries(
        &mut self,
        node: &ObjectDeclarationEntries<'a>,
    ) -> Result<()> {
        self.begin_object(NodeKind::ObjectDeclarationEntries)?;
        self.field("entries")?;
        self.array(&node.entries()?)?;
        self.end_object();
        Ok(())
    }

    fn visit_object_declaration_list(&mut self, node: &ObjectDeclarationList<'a>) -> Result<()> {
        self.begin_object(NodeKind::ObjectDeclarationList)?;
        self.field("items")?;
        self.array(&node.items()?)?;
        self.end_object();
        Ok(())
    }

    fn visit_reference_file(&mut self, node: &ReferenceFile<'a>) -> Result<()> {
        self.begin_object(NodeKind::ReferenceFile)?;
        self.field("path")?;
        self.string(&node.path()?)?;
        self.end_object();
        Ok(())
    }

    fn visit_external_reference(&mut self, node: &ExternalReference<'a>) -> Result<()> {
        self.begin_object(NodeKind::ExternalReference)?;
        self.field("file")?;
        self.optional(node.file()?)?;
        self.field("target")?;
        self.optional_string(node.target()?)?;
        self.end_object();
        Ok(())
    }

    fn visit_external_reference_import(
        &mut self,
        node: &ExternalReferenceImport<'a>,
    ) -> Result<()> {
        self.begin_object(NodeKind::ExternalReferenceImport)?;
        self.field("kind")?;
        self.token(Some(node.kind()?))?;
        self.field("reference")?;
        node.reference()?.accept(self)?;
        self.end_object();
        Ok(())
    }

    fn visit_scalar(&mut self, value: &Value<'a>) -> Result<()> {
        match value {
            Value::Undefined => self.out.push_str("undefined"),
            Value::Null => self.null(),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.number(*n),
            Value::String(s) => self.string(s)?,
            composite => return composite.accept(self),
        }
        Ok(())
    }

    fn visit_array(&mut self, range: &Range<'a, Value<'a>>) -> Result<()> {
        self.array(range)
    }
}
