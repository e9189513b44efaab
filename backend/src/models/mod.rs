pub mod body;
pub mod location;
pub mod time;

pub use body::*;
pub use location::*;
pub use time::*;
