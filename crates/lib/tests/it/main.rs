/*! Integration tests for crdt-scene.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - document: Loading, saving and building documents
 * - ast: Node validation, ordered-trial value decoding, ranges and paths
 * - serialize: Canonical text output checked against reference JSON
 * - scene: Reconciliation against live bodies and host object extraction
 * - host: The result/message boundary
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("crdt_scene=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod ast;
mod document;
mod helpers;
mod host;
mod scene;
mod serialize;
