pub mod backend;
pub mod camera;
pub mod cloud;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod kernel;
pub mod pointer;
pub mod state;
pub mod tween;

pub use backend::*;
pub use camera::*;
pub use cloud::*;
pub use config::*;
pub use driver::*;
pub use error::*;
pub use kernel::*;
pub use pointer::*;
pub use state::*;
pub use tween::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
