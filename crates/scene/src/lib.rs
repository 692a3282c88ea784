pub mod camera;
pub mod components;
pub mod entity;
pub mod interaction;
pub mod picking;
pub mod world;

pub use world::*;
