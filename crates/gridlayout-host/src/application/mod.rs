//! Application layer use cases for the grid host.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure placement rules) and the infrastructure (files, renderers).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a user goal (e.g., "build the
//!   grid described by this configuration").
//! - **Depend on abstractions** (the `VisualSurface` trait) rather than a
//!   concrete renderer, so the surface can be swapped without changing this
//!   code.
//! - **Contain no file system access**: configuration arrives already parsed.
//!
//! # Sub-modules
//!
//! - **`build_grid`** – Applies a parsed configuration to a fresh `GridModel`
//!   and remembers the display name of every placed item.

pub mod build_grid;
