//! Double-dispatch traversal of the AST.
//!
//! Every node kind has two visitor operations: a borrowing form that leaves
//! the node with its current holder, and an `_owned` form that moves the node
//! into the visitor. Every operation defaults to failing with
//! [`VisitError::Unimplemented`], so a visitor that handles only some kinds
//! fails loudly on the rest instead of skipping them.
//!
//! [`Accept`] forwards from a node, or from a union such as [`Value`] or
//! [`Statement`], to the operation for whichever kind it holds.

use crate::Result;
use crate::ast::{
    Assignment, ClassDefinition, Declaration, Definition, Descriptor, ExternalReference,
    ExternalReferenceImport, File, ObjectDeclaration, ObjectDeclarationEntries,
    ObjectDeclarationList, ObjectValue, Range, ReferenceFile, Statement, Value, VariantDefinition,
    VariantSet,
};

mod errors;

pub use errors::VisitError;

/// Builds the error returned by default visitor operations.
pub fn unimplemented<V: ?Sized>(kind: &'static str) -> crate::Error {
    VisitError::Unimplemented {
        visitor: short_type_name::<V>(),
        kind,
    }
    .into()
}

fn short_type_name<V: ?Sized>() -> &'static str {
    let full = std::any::type_name::<V>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Visitor over the scene AST.
pub trait Visitor<'a> {
    fn visit_file(&mut self, _node: &File<'a>) -> Result<()> {
        Err(unimplemented::<Self>("File"))
    }
    fn visit_file_owned(&mut self, _node: File<'a>) -> Result<()> {
        Err(unimplemented::<Self>("File"))
    }

    fn visit_descriptor(&mut self, _node: &Descriptor<'a>) -> Result<()> {
        Err(unimplemented::<Self>("Descriptor"))
    }
    fn visit_descriptor_owned(&mut self, _node: Descriptor<'a>) -> Result<()> {
        Err(unimplemented::<Self>("Descriptor"))
    }

    fn visit_assignment(&mut self, _node: &Assignment<'a>) -> Result<()> {
        Err(unimplemented::<Self>("Assignment"))
    }
    fn visit_assignment_owned(&mut self, _node: Assignment<'a>) -> Result<()> {
        Err(unimplemented::<Self>("Assignment"))
    }

    fn visit_declaration(&mut self, _node: &Declaration<'a>) -> Result<()> {
        Err(unimplemented::<Self>("Declaration"))
    }
    fn visit_declaration_owned(&mut self, _node: Declaration<'a>) -> Result<()> {
        Err(unimplemented::<Self>("Declaration"))
    }

    fn visit_definition(&mut self, _node: &Definition<'a>) -> Result<()> {
        Err(unimplemented::<Self>("Definition"))
    }
    fn visit_definition_owned(&mut self, _node: Definition<'a>) -> Result<()> {
        Err(unimplemented::<Self>("Definition"))
    }

    fn visit_class_definition(&mut self, _node: &ClassDefinition<'a>) -> Result<()> {
        Err(unimplemented::<Self>("ClassDefinition"))
    }
    fn visit_class_definition_owned(&mut self, _node: ClassDefinition<'a>) -> Result<()> {
        Err(unimplemented::<Self>("ClassDefinition"))
    }

    fn visit_variant_set(&mut self, _node: &VariantSet<'a>) -> Result<()> {
        Err(unimplemented::<Self>("VariantSet"))
    }
    fn visit_variant_set_owned(&mut self, _node: VariantSet<'a>) -> Result<()> {
        Err(unimplemented::<Self>("VariantSet"))
    }

    fn visit_variant_definition(&mut self, _node: &VariantDefinition<'a>) -> Result<()> {
        Err(unimplemented::<Self>("VariantDefinition"))
    }
    fn visit_variant_definition_owned(&mut self, _node: VariantDefinition<'a>) -> Result<()> {
        Err(unimplemented::<Self>("VariantDefinition"))
    }

    fn visit_object_declaration(&mut self, _node: &ObjectDeclaration<'a>) -> Result<()> {
        Err(unimplemented::<Self>("ObjectDeclaration"))
    }
    fn visit_object_declaration_owned(&mut self, _node: ObjectDeclaration<'a>) -> Result<()> {
        Err(unimplemented::<Self>("ObjectDeclaration"))
    }

    fn visit_object_declaration_entries(
        &mut self,
        _node: &ObjectDeclarationEntries<'a>,
    ) -> Result<()> {
        Err(unimplemented::<Self>("ObjectDeclarationEntries"))
    }
    fn visit_object_declaration_entries_owned(
        &mut self,
        _node: ObjectDeclarationEntries<'a>,
    ) -> Result<()> {
        Err(unimplemented::<Self>("ObjectDeclarationEntries"))
    }

    fn visit_object_declaration_list(&mut self, _node: &ObjectDeclarationList<'a>) -> Result<()> {
        Err(unimplemented::<Self>("ObjectDeclarationList"))
    }
    fn visit_object_declaration_list_owned(
        &mut self,
        _node: ObjectDeclarationList<'a>,
    ) -> Result<()> {
        Err(unimplemented::<Self>("ObjectDeclarationList"))
    }

    fn visit_reference_file(&mut self, _node: &ReferenceFile<'a>) -> Result<()> {
        Err(unimplemented::<Self>("ReferenceFile"))
    }
    fn visit_reference_file_owned(&mut self, _node: ReferenceFile<'a>) -> Result<()> {
        Err(unimplemented::<Self>("ReferenceFile"))
    }

    fn visit_external_reference(&mut self, _node: &ExternalReference<'a>) -> Result<()> {
        Err(unimplemented::<Self>("ExternalReference"))
    }
    fn visit_external_reference_owned(&mut self, _node: ExternalReference<'a>) -> Result<()> {
        Err(unimplemented::<Self>("ExternalReference"))
    }

    fn visit_external_reference_import(
        &mut self,
        _node: &ExternalReferenceImport<'a>,
    ) -> Result<()> {
        Err(unimplemented::<Self>("ExternalReferenceImport"))
    }
    fn visit_external_reference_import_owned(
        &mut self,
        _node: ExternalReferenceImport<'a>,
    ) -> Result<()> {
        Err(unimplemented::<Self>("ExternalReferenceImport"))
    }

    /// Undefined, null, bool, number and string values
    fn visit_scalar(&mut self, _value: &Value<'a>) -> Result<()> {
        Err(unimplemented::<Self>("scalar"))
    }

    /// Array values
    fn visit_array(&mut self, _range: &Range<'a, Value<'a>>) -> Result<()> {
        Err(unimplemented::<Self>("array"))
    }
}

/// Dispatch from a node or union to the matching [`Visitor`] operation.
pub trait Accept<'a> {
    /// Visits without giving up ownership
    fn accept(&self, visitor: &mut dyn Visitor<'a>) -> Result<()>;

    /// Moves `self` into the visitor
    fn accept_owned(self, visitor: &mut dyn Visitor<'a>) -> Result<()>
    where
        Self: Sized;
}

macro_rules! accept_node {
    ($name:ident, $visit:ident, $visit_owned:ident) => {
        impl<'a> Accept<'a> for $name<'a> {
            fn accept(&self, visitor: &mut dyn Visitor<'a>) -> Result<()> {
                visitor.$visit(self)
            }

            fn accept_owned(self, visitor: &mut dyn Visitor<'a>) -> Result<()> {
                visitor.$visit_owned(self)
            }
        }
    };
}

accept_node!(File, visit_file, visit_file_owned);
accept_node!(Descriptor, visit_descriptor, visit_descriptor_owned);
accept_node!(Assignment, visit_assignment, visit_assignment_owned);
accept_node!(Declaration, visit_declaration, visit_declaration_owned);
accept_node!(Definition, visit_definition, visit_definition_owned);
accept_node!(ClassDefinition, visit_class_definition, visit_class_definition_owned);
accept_node!(VariantSet, visit_variant_set, visit_variant_set_owned);
accept_node!(VariantDefinition, visit_variant_definition, visit_variant_definition_owned);
accept_node!(ObjectDeclaration, visit_object_declaration, visit_object_declaration_owned);
accept_node!(
    ObjectDeclarationEntries,
    visit_object_declaration_entries,
    visit_object_declaration_entries_owned
);
accept_node!(
    ObjectDeclarationList,
    visit_object_declaration_list,
    visit_object_declaration_list_owned
);
accept_node!(ReferenceFile, visit_reference_file, visit_reference_file_owned);
accept_node!(ExternalReference, visit_external_reference, visit_external_reference_owned);
accept_node!(
    ExternalReferenceImport,
    visit_external_reference_import,
    visit_external_reference_import_owned
);

impl<'a> Accept<'a> for Statement<'a> {
    fn accept(&self, visitor: &mut dyn Visitor<'a>) -> Result<()> {
        match self {
            Statement::Definition(node) => node.accept(visitor),
            Statement::ClassDefinition(node) => node.accept(visitor),
            Statement::VariantSet(node) => node.accept(visitor),
            Statement::Declaration(node) => node.accept(visitor),
            Statement::ObjectDeclaration(node) => node.accept(visitor),
            Statement::Assignment(node) => node.accept(visitor),
        }
    }

    fn accept_owned(self, visitor: &mut dyn Visitor<'a>) -> Result<()> {
        match self {
            Statement::Definition(node) => node.accept_owned(visitor),
            Statement::ClassDefinition(node) => node.accept_owned(visitor),
            Statement::VariantSet(node) => node.accept_owned(visitor),
            Statement::Declaration(node) => node.accept_owned(visitor),
            Statement::ObjectDeclaration(node) => node.accept_owned(visitor),
            Statement::Assignment(node) => node.accept_owned(visitor),
        }
    }
}

impl<'a> Accept<'a> for ObjectValue<'a> {
    fn accept(&self, visitor: &mut dyn Visitor<'a>) -> Result<()> {
        match self {
            ObjectValue::Entries(node) => node.accept(visitor),
            ObjectValue::List(node) => node.accept(visitor),
        }
    }

    fn accept_owned(self, visitor: &mut dyn Visitor<'a>) -> Result<()> {
        match self {
            ObjectValue::Entries(node) => node.accept_owned(visitor),
            ObjectValue::List(node) => node.accept_owned(visitor),
        }
    }
}

impl<'a> Accept<'a> for Value<'a> {
    fn accept(&self, visitor: &mut dyn Visitor<'a>) -> Result<()> {
        match self {
            Value::Array(range) => visitor.visit_array(range),
            Value::Import(node) => node.accept(visitor),
            Value::Reference(node) => node.accept(visitor),
            Value::Object(node) => node.accept(visitor),
            scalar => visitor.visit_scalar(scalar),
        }
    }

    fn accept_owned(self, visitor: &mut dyn Visitor<'a>) -> Result<()> {
        match self {
            Value::Array(range) => visitor.visit_array(&range),
            Value::Import(node) => (*node).accept_owned(visitor),
            Value::Reference(node) => (*node).accept_owned(visitor),
            Value::Object(node) => (*node).accept_owned(visitor),
            scalar => visitor.visit_scalar(&scalar),
        }
    }
}
