//! Typed, read-only projection of a scene document.
//!
//! The document itself is schemaless. This module layers a validated AST over
//! it without copying: nodes, values and ranges are thin views that decode
//! their contents lazily and borrow the [`Document`](crate::Document) they
//! came from.
//!
//! # Core Types
//!
//! - [`Node`] / [`NodeBase`] - validated map views with per-field caching
//! - [`Value`] - polymorphic property slot decoded by ordered trial
//! - [`Range`] / [`Cursor`] - lazy typed sequences over lists
//! - [`PathAddress`] - comparable resolved paths
//! - [`EnumCodec`] - token tables for closed string vocabularies
//!
//! # Usage
//!
//! ```
//! use crdt_scene::{Document, ast::{File, PathAddress}};
//!
//! let doc = Document::from_json(&serde_json::json!({
//!     "type": "File",
//!     "version": 1,
//!     "descriptor": null,
//!     "statements": [],
//! }))
//! .unwrap();
//!
//! let file: File = PathAddress::root(&doc).decode().unwrap();
//! assert_eq!(file.version().unwrap().as_i64(), Some(1));
//! assert!(file.statements().unwrap().is_empty());
//! ```

pub mod enums;
pub mod errors;
pub mod node;
pub mod nodes;
pub mod path;
pub mod range;
pub mod statement;
pub mod value;

pub use enums::{DefType, EnumCodec, EnumToken, ImportKind, Keyword, NodeKind, SubType};
pub use errors::SchemaError;
pub use node::{Decode, Node, NodeBase, TYPE_FIELD};
pub use nodes::{
    Assignment, ClassDefinition, Declaration, Definition, Descriptor, ExternalReference,
    ExternalReferenceImport, File, ObjectDeclaration, ObjectDeclarationEntries,
    ObjectDeclarationList, ReferenceFile, VariantDefinition, VariantSet,
};
pub use path::{PathAddress, Step};
pub use range::{Cursor, Range};
pub use statement::Statement;
pub use value::{Number, ObjectValue, Value, decode_first};
