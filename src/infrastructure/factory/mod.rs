//! Factory modules for building components from configuration.
//!
//! # Submodules
//!
//! - [`decision`] - Decision engine construction
//! - [`fusion`] - Fusion strategy construction

pub mod decision;
pub mod fusion;

pub use decision::build_engine;
pub use fusion::build_fuser;
