pub mod gl;

mod bitmap;
mod canvas;
mod color;
mod event;
mod window;

pub use bitmap::*;
pub use canvas::*;
pub use color::*;
pub use event::*;
pub use window::*;
