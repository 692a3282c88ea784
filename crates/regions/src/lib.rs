pub mod builder;
pub mod extrude;
pub mod region;
pub mod ribbon;
pub mod style;

pub use builder::*;
pub use region::*;
pub use style::*;
