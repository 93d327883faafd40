//! Reconciliation of a scene document against live engine objects.
//!
//! A [`SceneReconciler`] walks the `File` at a path, finds the root definition
//! named by the descriptor's `defaultPrim`, and compares that definition's
//! typed children with a pool of live bodies by stable id:
//!
//! - a child whose id matches a live body is [`Action::Keep`]
//! - a child with no matching body is [`Action::Add`], with a body built from the child
//! - a live body left unmatched after the scan is [`Action::Remove`]
//!
//! The result is an exact partition: every live body and every matched child
//! appears in exactly one action. Any structural problem with the scene root
//! aborts the pass and no actions are returned.

use tracing::{debug, info};

use crate::Result;
use crate::ast::{DefType, Definition, File, Node, PathAddress, Statement};
use crate::document::{Document, ObjectId};
use crate::visit::{Accept, Visitor};

mod errors;
mod object;

pub use errors::SceneError;
pub use object::{Property, SceneObject};

/// The only scene version this reconciler accepts.
pub const SUPPORTED_VERSION: i64 = 1;

/// Descriptor assignment that names the root definition.
pub const DEFAULT_PRIM: &str = "defaultPrim";

/// Def-type token of the root definition.
pub const ROOT_DEF_TYPE: DefType = DefType::Xform;

/// What the host should do with a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    /// Create the body
    Add,
    /// Leave the body alone without tracking it
    Ignore,
    /// The body is still in the scene
    Keep,
    /// Destroy the body
    Remove,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Add => "ADD",
            Action::Ignore => "IGNORE",
            Action::Keep => "KEEP",
            Action::Remove => "REMOVE",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action paired with the body it applies to.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffAction<B> {
    pub action: Action,
    pub body: B,
}

/// A host body, optionally tagged with the stable id it was created from.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveBody<B> {
    pub body: B,
    pub stable_id: Option<ObjectId>,
}

impl<B> LiveBody<B> {
    pub fn new(body: B, stable_id: impl Into<Option<ObjectId>>) -> Self {
        Self {
            body,
            stable_id: stable_id.into(),
        }
    }

    /// A body with no recorded id; it never matches a definition
    pub fn untracked(body: B) -> Self {
        Self {
            body,
            stable_id: None,
        }
    }
}

impl From<SceneObject> for LiveBody<SceneObject> {
    fn from(object: SceneObject) -> Self {
        let stable_id = Some(object.stable_id.clone());
        Self {
            body: object,
            stable_id,
        }
    }
}

/// Visitor that diffs the scene at a path against a pool of live bodies.
///
/// `create` turns a definition into a new body and is called once per ADD.
pub struct SceneReconciler<B, F> {
    pending: Vec<LiveBody<B>>,
    actions: Vec<DiffAction<B>>,
    create: F,
}

impl<B, F> SceneReconciler<B, F> {
    pub fn new(live: impl IntoIterator<Item = LiveBody<B>>, create: F) -> Self {
        Self {
            pending: live.into_iter().collect(),
            actions: Vec::new(),
            create,
        }
    }

    /// Runs a full pass over the `File` at `path`.
    ///
    /// On error no actions are produced.
    pub fn run<'a>(mut self, doc: &'a Document, path: &str) -> Result<Vec<DiffAction<B>>>
    where
        F: FnMut(Definition<'a>) -> Result<B>,
    {
        let file: File<'a> = PathAddress::parse(doc, path)?.decode()?;
        file.accept(&mut self)?;

        for remaining in self.pending.drain(..) {
            debug!(stable_id = ?remaining.stable_id, action = %Action::Remove, "Reconcile action");
            self.actions.push(DiffAction {
                action: Action::Remove,
                body: remaining.body,
            });
        }

        info!(
            path = %path,
            add = count(&self.actions, Action::Add),
            keep = count(&self.actions, Action::Keep),
            remove = count(&self.actions, Action::Remove),
            "Reconciled scene"
        );
        Ok(self.actions)
    }

    fn take_pending(&mut self, id: &ObjectId) -> Option<LiveBody<B>> {
        let index = self
            .pending
            .iter()
            .position(|live| live.stable_id.as_ref() == Some(id))?;
        Some(self.pending.remove(index))
    }
}

fn count<B>(actions: &[DiffAction<B>], action: Action) -> usize {
    actions.iter().filter(|a| a.action == action).count()
}

/// Finds the root definition's name in the file descriptor.
fn default_prim(file: &File<'_>) -> Result<String> {
    let descriptor = file.descriptor()?.ok_or(SceneError::MissingDescriptor)?;
    for assignment in &descriptor.assignments()? {
        let assignment = assignment?;
        if assignment.keyword()?.is_none() && assignment.identifier_is(DEFAULT_PRIM)? {
            if let Some(name) = assignment.value()?.as_str() {
                return Ok(name.to_string());
            }
        }
    }
    Err(SceneError::MissingDefaultPrim.into())
}

impl<'a, B, F> Visitor<'a> for SceneReconciler<B, F>
where
    F: FnMut(Definition<'a>) -> Result<B>,
{
    fn visit_file(&mut self, file: &File<'a>) -> Result<()> {
        let version = file.version()?;
        if version.as_i64() != Some(SUPPORTED_VERSION) {
            return Err(SceneError::UnsupportedVersion {
                version: version.to_string(),
                expected: SUPPORTED_VERSION,
            }
            .into());
        }

        let root_name = default_prim(file)?;
        let mut root = None;
        for statement in &file.statements()? {
            if let Statement::Definition(definition) = statement? {
                if definition.def_type()? == Some(ROOT_DEF_TYPE) && definition.name()? == root_name
                {
                    root = Some(definition);
                    break;
                }
            }
        }
        let root = root.ok_or_else(|| SceneError::MissingRootDefinition {
            name: root_name.clone(),
            def_type: ROOT_DEF_TYPE.token(),
        })?;
        debug!(root = %root_name, stable_id = %root.object_id(), "Found root definition");

        for statement in &root.statements()? {
            let Some(child) = statement?.into_definition() else {
                continue;
            };
            if child.def_type()?.is_none() {
                continue;
            }
            match self.take_pending(child.object_id()) {
                Some(live) => {
                    debug!(stable_id = %child.object_id(), action = %Action::Keep, "Reconcile action");
                    self.actions.push(DiffAction {
                        action: Action::Keep,
                        body: live.body,
                    });
                }
                None => child.accept_owned(self)?,
            }
        }
        Ok(())
    }

    fn visit_definition_owned(&mut self, definition: Definition<'a>) -> Result<()> {
        let stable_id = definition.object_id().clone();
        let body = (self.create)(definition)?;
        debug!(stable_id = %stable_id, action = %Action::Add, "Reconcile action");
        self.actions.push(DiffAction {
            action: Action::Add,
            body,
        });
        Ok(())
    }
}

/// Reconciles the `File` at `path` against `live`.
pub fn reconcile<'a, B, F>(
    doc: &'a Document,
    path: &str,
    live: impl IntoIterator<Item = LiveBody<B>>,
    create: F,
) -> Result<Vec<DiffAction<B>>>
where
    F: FnMut(Definition<'a>) -> Result<B>,
{
    SceneReconciler::new(live, create).run(doc, path)
}

/// Reconciles with [`SceneObject`] bodies.
pub fn reconcile_objects(
    doc: &Document,
    path: &str,
    live: impl IntoIterator<Item = LiveBody<SceneObject>>,
) -> Result<Vec<DiffAction<SceneObject>>> {
    reconcile(doc, path, live, SceneObject::from_definition)
}
