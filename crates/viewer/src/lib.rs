pub mod backdrop;
pub mod view;

pub use view::*;
