pub mod control;
pub mod curve;
pub mod experience;
pub mod stoch;

pub use control::*;
pub use curve::*;
pub use experience::*;
pub use stoch::*;
