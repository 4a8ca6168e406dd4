pub mod pointer;
pub mod resize;

pub use pointer::{wire_pointermove, PointerSlot};
pub use resize::{wire_resize, ResizeSample, ResizeSlot};
