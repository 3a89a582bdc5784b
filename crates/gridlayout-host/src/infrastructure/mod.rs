//! Infrastructure layer for the grid host.
//!
//! Contains the outward-facing adapters: the recording visual surface and
//! file-system storage of grid configurations.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `gridlayout_core`, but MUST NOT be imported by the domain layer.

pub mod storage;
pub mod surface;
