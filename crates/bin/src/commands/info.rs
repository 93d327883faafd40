//! Document info command - shows root id, root size and encoded size.

use crdt_scene::Document;

use crate::cli::InfoArgs;
use crate::output::OutputFormat;

/// Run the info command
pub fn run(args: &InfoArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let doc = Document::load_file(&args.doc)?;
    let root = doc.root();
    let root_id = doc.root_item().as_object().map(|object| object.id().to_string());
    let keys = doc.map_len(&root);
    let bytes = doc.save().len();

    match format {
        OutputFormat::Human => {
            println!("Root ID:     {}", root_id.as_deref().unwrap_or("-"));
            println!("Root keys:   {keys}");
            println!("Saved size:  {bytes} bytes");
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "root_id": root_id,
                "root_keys": keys,
                "bytes": bytes,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
