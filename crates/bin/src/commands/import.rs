//! Import command - builds a document from a JSON file.

use crdt_scene::Document;

use crate::cli::ImportArgs;
use crate::output::OutputFormat;

/// Run the import command
pub fn run(args: &ImportArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&args.json)?;
    let doc = Document::from_json_str(&text)?;
    doc.save_file(&args.out)?;
    let bytes = doc.save().len();

    match format {
        OutputFormat::Human => {
            println!("Wrote {} ({bytes} bytes)", args.out.display());
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "out": args.out.display().to_string(),
                "bytes": bytes,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}
