//! Local horizon coordinates handed to the services.
//!
//! Frame and centre transforms live in siderust; this module only holds the
//! crate's own view of an altitude/azimuth pair.

pub mod horizontal;

pub use horizontal::*;
