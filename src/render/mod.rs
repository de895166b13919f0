//! Drawing side of the game
//!
//! The world never touches a drawing surface. A `Painter` reads the world
//! and issues primitive calls against whatever `RenderTarget` the caller
//! injects.

pub mod ascii;
pub mod painter;
pub mod target;

pub use ascii::AsciiCanvas;
pub use painter::Painter;
pub use target::{Color, NullTarget, RenderTarget};
