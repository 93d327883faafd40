//! Reconcile command - diffs the scene against live body ids.

use crdt_scene::{
    Document,
    document::ObjectId,
    scene::{self, Action, DiffAction, LiveBody},
};
use serde::Serialize;

use crate::cli::ReconcileArgs;
use crate::output::{OutputFormat, print_table};

/// One reported action; ADD rows carry the new object, others only the id.
#[derive(Debug, Serialize)]
struct Row {
    action: Action,
    stable_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
}

/// Body used for the command: either a new object or an id given on the command line
enum Body {
    Created(scene::SceneObject),
    Live(ObjectId),
}

fn to_row(diff: DiffAction<Body>) -> Row {
    match diff.body {
        Body::Created(object) => Row {
            action: diff.action,
            stable_id: object.stable_id.to_string(),
            name: Some(object.name),
            kind: Some(object.kind.to_string()),
        },
        Body::Live(id) => Row {
            action: diff.action,
            stable_id: id.to_string(),
            name: None,
            kind: None,
        },
    }
}

/// Run the reconcile command
pub fn run(args: &ReconcileArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let doc = Document::load_file(&args.doc)?;
    let live = args.live.iter().map(|raw| {
        let id = ObjectId::from(raw.as_str());
        LiveBody::new(Body::Live(id.clone()), id)
    });
    let actions = scene::reconcile(&doc, &args.path, live, |definition| {
        scene::SceneObject::from_definition(definition).map(Body::Created)
    })?;
    let rows: Vec<Row> = actions.into_iter().map(to_row).collect();

    match format {
        OutputFormat::Human => {
            if rows.is_empty() {
                println!("No actions.");
                return Ok(());
            }
            let table: Vec<Vec<String>> = rows
                .iter()
                .map(|row| {
                    vec![
                        row.action.to_string(),
                        row.stable_id.clone(),
                        row.name.clone().unwrap_or_default(),
                        row.kind.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            print_table(&["ACTION", "STABLE ID", "NAME", "KIND"], &table);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&rows)?);
        }
    }
    Ok(())
}
