//! parkdb-cli
//! ==========
//!
//! Command-line interface for the `parkdb-core` protected-area database.
//!
//! This crate primarily provides a binary (`parkdb-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Basic usage:
//!
//! ```text
//! parkdb-cli --help
//! parkdb-cli stats
//! parkdb-cli parks serengeti
//! parkdb-cli park 916
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! `parkdb-core` crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
