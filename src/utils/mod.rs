pub mod color;
pub mod frame_counter;
pub mod math;

pub use color::*;
pub use frame_counter::*;
pub use math::*;
