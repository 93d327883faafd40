//! Concrete node kinds of the scene schema.
//!
//! Each kind is a map with a `"type"` discriminator and a fixed field table;
//! the accessors below decode individual fields on demand.

use super::{
    DefType, ImportKind, Keyword, Number, ObjectValue, Range, SchemaError, Statement, SubType,
    Value, node::node_kind,
};

node_kind! {
    /// Root of a scene document.
    File => File ["type", "version", "descriptor", "statements"]
}

impl<'a> File<'a> {
    pub fn version(&self) -> Result<Number, SchemaError> {
        self.base.object_property("version")
    }

    pub fn descriptor(&self) -> Result<Option<Descriptor<'a>>, SchemaError> {
        self.base.nullable_object_property("descriptor")
    }

    pub fn statements(&self) -> Result<Range<'a, Statement<'a>>, SchemaError> {
        self.base.array_property("statements")
    }
}

node_kind! {
    /// Metadata block attached to files, definitions and declarations.
    Descriptor => Descriptor ["type", "description", "assignments"]
}

impl<'a> Descriptor<'a> {
    pub fn description(&self) -> Result<Option<String>, SchemaError> {
        self.base.nullable_object_property("description")
    }

    pub fn assignments(&self) -> Result<Range<'a, Assignment<'a>>, SchemaError> {
        self.base.array_property("assignments")
    }
}

node_kind! {
    /// `[keyword] identifier = value`
    Assignment => Assignment ["type", "keyword", "identifier", "value"]
}

impl<'a> Assignment<'a> {
    pub fn keyword(&self) -> Result<Option<Keyword>, SchemaError> {
        self.base.nullable_enum_property("keyword")
    }

    pub fn identifier(&self) -> Result<String, SchemaError> {
        self.base.object_property("identifier")
    }

    pub fn value(&self) -> Result<Value<'a>, SchemaError> {
        self.base.object_property("value")
    }

    /// Returns whether the identifier equals `name`, without caching the lookup
    pub fn identifier_is(&self, name: &str) -> Result<bool, SchemaError> {
        self.base.matches_string_property("identifier", name)
    }
}

node_kind! {
    /// A typed attribute: `[keyword] valueType identifier = value ( descriptor )`
    Declaration => Declaration ["type", "keyword", "valueType", "identifier", "value", "descriptor"]
}

impl<'a> Declaration<'a> {
    pub fn keyword(&self) -> Result<Option<Keyword>, SchemaError> {
        self.base.nullable_enum_property("keyword")
    }

    pub fn value_type(&self) -> Result<String, SchemaError> {
        self.base.object_property("valueType")
    }

    pub fn identifier(&self) -> Result<String, SchemaError> {
        self.base.object_property("identifier")
    }

    pub fn value(&self) -> Result<Value<'a>, SchemaError> {
        self.base.object_property("value")
    }

    pub fn descriptor(&self) -> Result<Option<Descriptor<'a>>, SchemaError> {
        self.base.nullable_object_property("descriptor")
    }
}

node_kind! {
    /// A prim: `subType [defType] "name" ( descriptor ) { statements }`
    Definition => Definition ["type", "subType", "defType", "name", "descriptor", "statements"]
}

impl<'a> Definition<'a> {
    pub fn sub_type(&self) -> Result<SubType, SchemaError> {
        self.base.enum_property("subType")
    }

    pub fn def_type(&self) -> Result<Option<DefType>, SchemaError> {
        self.base.nullable_enum_property("defType")
    }

    pub fn name(&self) -> Result<String, SchemaError> {
        self.base.object_property("name")
    }

    pub fn descriptor(&self) -> Result<Option<Descriptor<'a>>, SchemaError> {
        self.base.nullable_object_property("descriptor")
    }

    pub fn statements(&self) -> Result<Range<'a, Statement<'a>>, SchemaError> {
        self.base.array_property("statements")
    }
}

node_kind! {
    /// `class "name" ( descriptor ) { statements }`
    ClassDefinition => ClassDefinition ["type", "name", "descriptor", "statements"]
}

impl<'a> ClassDefinition<'a> {
    pub fn name(&self) -> Result<String, SchemaError> {
        self.base.object_property("name")
    }

    pub fn descriptor(&self) -> Result<Option<Descriptor<'a>>, SchemaError> {
        self.base.nullable_object_property("descriptor")
    }

    pub fn statements(&self) -> Result<Range<'a, Statement<'a>>, SchemaError> {
        self.base.array_property("statements")
    }
}

node_kind! {
    /// `variantSet "name" = { variants }`
    VariantSet => VariantSet ["type", "name", "variants"]
}

impl<'a> VariantSet<'a> {
    pub fn name(&self) -> Result<String, SchemaError> {
        self.base.object_property("name")
    }

    pub fn variants(&self) -> Result<Range<'a, VariantDefinition<'a>>, SchemaError> {
        self.base.array_property("variants")
    }
}

node_kind! {
    /// One branch of a variant set.
    VariantDefinition => VariantDefinition ["type", "name", "descriptor", "statements"]
}

impl<'a> VariantDefinition<'a> {
    pub fn name(&self) -> Result<String, SchemaError> {
        self.base.object_property("name")
    }

    pub fn descriptor(&self) -> Result<Option<Descriptor<'a>>, SchemaError> {
        self.base.nullable_object_property("descriptor")
    }

    pub fn statements(&self) -> Result<Range<'a, Statement<'a>>, SchemaError> {
        self.base.array_property("statements")
    }
}

node_kind! {
    /// `[keyword] dictionary identifier = { ... }`
    ObjectDeclaration => ObjectDeclaration ["type", "keyword", "identifier", "value"]
}

impl<'a> ObjectDeclaration<'a> {
    pub fn keyword(&self) -> Result<Option<Keyword>, SchemaError> {
        self.base.nullable_enum_property("keyword")
    }

    pub fn identifier(&self) -> Result<String, SchemaError> {
        self.base.object_property("identifier")
    }

    pub fn value(&self) -> Result<ObjectValue<'a>, SchemaError> {
        self.base.object_property("value")
    }
}

node_kind! {
    /// A braced block of statements used as a value.
    ObjectDeclarationEntries => ObjectDeclarationEntries ["type", "entries"]
}

impl<'a> ObjectDeclarationEntries<'a> {
    pub fn entries(&self) -> Result<Range<'a, Statement<'a>>, SchemaError> {
        self.base.array_property("entries")
    }
}

node_kind! {
    /// A list of braced blocks.
    ObjectDeclarationList => ObjectDeclarationList ["type", "items"]
}

impl<'a> ObjectDeclarationList<'a> {
    pub fn items(&self) -> Result<Range<'a, ObjectDeclarationEntries<'a>>, SchemaError> {
        self.base.array_property("items")
    }
}

node_kind! {
    /// An asset path: `@path@`
    ReferenceFile => ReferenceFile ["type", "path"]
}

impl ReferenceFile<'_> {
    pub fn path(&self) -> Result<String, SchemaError> {
        self.base.object_property("path")
    }
}

node_kind! {
    /// `@file@</target>`; a missing file denotes an internal reference.
    ExternalReference => ExternalReference ["type", "file", "target"]
}

impl<'a> ExternalReference<'a> {
    pub fn file(&self) -> Result<Option<ReferenceFile<'a>>, SchemaError> {
        self.base.nullable_object_property("file")
    }

    pub fn target(&self) -> Result<Option<String>, SchemaError> {
        self.base.nullable_object_property("target")
    }
}

node_kind! {
    /// A composition arc: `kind @file@</target>`
    ExternalReferenceImport => ExternalReferenceImport ["type", "kind", "reference"]
}

impl<'a> ExternalReferenceImport<'a> {
    pub fn kind(&self) -> Result<ImportKind, SchemaError> {
        self.base.enum_property("kind")
    }

    pub fn reference(&self) -> Result<ExternalReference<'a>, SchemaError> {
        self.base.object_property("reference")
    }
}
