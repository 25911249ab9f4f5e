#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Reader binary: mounts the app in the browser and explains the target elsewhere.

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_HINT: &str = "folio-ui renders in a browser tab; run `trunk serve` or build for \
wasm32-unknown-unknown and open index.html.";

#[cfg(target_arch = "wasm32")]
fn main() {
    folio_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    writeln!(std::io::stderr().lock(), "{NATIVE_HINT}")
}
