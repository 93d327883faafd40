//! Dump command - prints the canonical serialization of a scene file.

use crdt_scene::{
    Document,
    ast::{File, PathAddress},
    serialize,
};

use crate::cli::DumpArgs;

/// Run the dump command
///
/// The serializer output is already JSON-shaped, so the format flag does not apply.
pub fn run(args: &DumpArgs) -> Result<(), Box<dyn std::error::Error>> {
    let doc = Document::load_file(&args.doc)?;
    let file: File = PathAddress::parse(&doc, &args.path)?.decode()?;
    println!("{}", serialize::to_string(&file, args.precision)?);
    Ok(())
}
