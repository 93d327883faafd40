//! Token tables for closed string vocabularies.
//!
//! Each enum in the scene schema is stored in the document as a string token.
//! [`EnumCodec`] resolves tokens in both directions from a static table
//! declared by the enum itself through [`EnumToken`].

use std::{fmt, marker::PhantomData};

use super::SchemaError;

/// A closed set of tagged tokens.
pub trait EnumToken: Copy + PartialEq + 'static {
    /// Name of the vocabulary, used in error messages
    const NAME: &'static str;
    /// Every `(token, tag)` pair of the vocabulary
    const TABLE: &'static [(&'static str, Self)];
}

/// Bidirectional string/tag lookup over an [`EnumToken`] table.
pub struct EnumCodec<T>(PhantomData<T>);

impl<T: EnumToken> EnumCodec<T> {
    /// Resolves a token to its tag
    pub fn decode(token: &str) -> Option<T> {
        T::TABLE
            .iter()
            .find(|(candidate, _)| *candidate == token)
            .map(|(_, tag)| *tag)
    }

    /// Resolves a token, failing with [`SchemaError::UnknownToken`]
    pub fn try_decode(token: &str) -> Result<T, SchemaError> {
        Self::decode(token).ok_or_else(|| SchemaError::UnknownToken {
            enum_name: T::NAME,
            token: token.to_string(),
        })
    }

    /// Returns the token of a tag
    pub fn encode(tag: T) -> &'static str {
        T::TABLE
            .iter()
            .find(|(_, candidate)| *candidate == tag)
            .map(|(token, _)| *token)
            .unwrap_or("")
    }

    /// Returns every token in table order
    pub fn tokens() -> impl Iterator<Item = &'static str> {
        T::TABLE.iter().map(|(token, _)| *token)
    }
}

/// Declares an enum together with its token table.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $vocabulary:literal {
            $( $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
        }

        impl EnumToken for $name {
            const NAME: &'static str = $vocabulary;
            const TABLE: &'static [(&'static str, Self)] = &[
                $( ($token, $name::$variant), )+
            ];
        }

        impl $name {
            /// Returns the document token for this tag
            pub fn token(self) -> &'static str {
                EnumCodec::<$name>::encode(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.token())
            }
        }
    };
}

token_enum! {
    /// The `"type"` discriminator of every node map.
    NodeKind, "node kind" {
        File => "File",
        Descriptor => "Descriptor",
        Assignment => "Assignment",
        Declaration => "Declaration",
        Definition => "Definition",
        ClassDefinition => "ClassDefinition",
        VariantSet => "VariantSet",
        VariantDefinition => "VariantDefinition",
        ObjectDeclaration => "ObjectDeclaration",
        ObjectDeclarationEntries => "ObjectDeclarationEntries",
        ObjectDeclarationList => "ObjectDeclarationList",
        ReferenceFile => "ReferenceFile",
        ExternalReference => "ExternalReference",
        ExternalReferenceImport => "ExternalReferenceImport",
    }
}

token_enum! {
    /// Qualifier in front of an assignment or declaration.
    Keyword, "keyword" {
        Uniform => "uniform",
        Custom => "custom",
        Varying => "varying",
        Config => "config",
        Prepend => "prepend",
        Append => "append",
        Add => "add",
        Delete => "delete",
        Reorder => "reorder",
    }
}

token_enum! {
    /// Specifier of a definition.
    SubType, "definition specifier" {
        Def => "def",
        Over => "over",
        Class => "class",
    }
}

token_enum! {
    /// Schema type of a definition.
    DefType, "definition type" {
        Xform => "Xform",
        Scope => "Scope",
        Cube => "Cube",
        Sphere => "Sphere",
        Cylinder => "Cylinder",
        Cone => "Cone",
        Capsule => "Capsule",
        Mesh => "Mesh",
        Points => "Points",
        Camera => "Camera",
        DistantLight => "DistantLight",
        SphereLight => "SphereLight",
        RectLight => "RectLight",
        DomeLight => "DomeLight",
        Material => "Material",
        Shader => "Shader",
        GeomSubset => "GeomSubset",
        SkelRoot => "SkelRoot",
        Skeleton => "Skeleton",
    }
}

token_enum! {
    /// Composition arc introduced by an external reference import.
    ImportKind, "import kind" {
        References => "references",
        Payload => "payload",
        Inherits => "inherits",
        Specializes => "specializes",
        SubLayers => "subLayers",
    }
}
