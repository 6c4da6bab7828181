//! geoheat-rs
//!
//! Umbrella crate for the workspace: re-exports [`geoheat_core`] so the demos
//! (and anyone who wants a single dependency) can write
//! `use geoheat_rs::prelude::*;`.

pub use geoheat_core::*;

pub mod prelude {
    pub use geoheat_core::prelude::*;
}
