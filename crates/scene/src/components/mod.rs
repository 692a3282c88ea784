pub mod appearance;
pub mod bounds;
pub mod primitive;
pub mod region_tag;
pub mod transform;
pub mod visibility;

pub use appearance::*;
pub use bounds::*;
pub use primitive::*;
pub use region_tag::*;
pub use transform::*;
pub use visibility::*;
