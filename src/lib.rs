//! parkdb-rs — workspace facade crate.
//!
//! Re-exports the public API of `parkdb-core` so the demos under `demos/`
//! can depend on a single crate. For library usage, depend on
//! `parkdb-core` directly.

pub use parkdb_core::*;

pub mod prelude {
    pub use parkdb_core::prelude::*;
}
