//! Types library for the casino simulation service
//!
//! Wire-level and domain types shared by the simulation library and the
//! HTTP gateway. Nothing in here runs a simulation.
//!
//! # Modules
//! - `ids`: Run identifiers (RunId)
//! - `request`: Raw, unvalidated simulation request
//! - `outcome`: Simulation result record
//! - `response`: Success-or-failure response envelope
//! - `errors`: Validation error taxonomy

// Public modules
pub mod ids;
pub mod request;
pub mod outcome;
pub mod response;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::request::*;
    pub use crate::outcome::*;
    pub use crate::response::*;
    pub use crate::errors::*;
}
