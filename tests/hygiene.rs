//! Source budgets for the `sketchguess` binary.
//!
//! Session output goes through the driver's writer and diagnostics through
//! `tracing`, so the print macros are held at zero along with the panicking
//! calls. The process exits by returning from `main`.

use hygiene::{DEFAULT, Sources};

fn sources() -> Sources {
    match Sources::scan(concat!(env!("CARGO_MANIFEST_DIR"), "/src")) {
        Ok(sources) => sources,
        Err(e) => panic!("cannot scan src: {e}"),
    }
}

#[test]
fn sources_include_the_services() {
    let sources = sources();
    assert!(sources.len() >= 9, "expected main, cli, error, state and services/*");
}

#[test]
fn budgets_hold() {
    if let Err(report) = sources().check_all(DEFAULT) {
        panic!("{report}");
    }
}

