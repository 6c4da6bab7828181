//! geoheat-cli
//! ===========
//!
//! Command-line interface for the `geoheat-core` map engine.
//!
//! This crate primarily provides a binary (`geoheat`). The library target
//! exists so that the crate has a rendered documentation page.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! geoheat --help
//! geoheat normalize "United States of America"
//! geoheat color 13
//! geoheat nearest -- -0.12 51.5
//! geoheat --input world.geojson connectors --json
//! geoheat --config engine.json render
//! ```
//!
//! For programmatic access use the [`geoheat-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// No API here; the binary is the deliverable.
