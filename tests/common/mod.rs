// The main crate is wasm-only, so host tests include the platform-free
// `scene` files directly under the same module names.

#![allow(dead_code)]

pub mod scene {
    pub mod constants {
        include!("../../src/scene/constants.rs");
    }
    pub mod backend {
        include!("../../src/scene/backend.rs");
    }
    pub mod error {
        include!("../../src/scene/error.rs");
    }
    pub mod config {
        include!("../../src/scene/config.rs");
    }
    pub mod kernel {
        include!("../../src/scene/kernel.rs");
    }
    pub mod cloud {
        include!("../../src/scene/cloud.rs");
    }
    pub mod camera {
        include!("../../src/scene/camera.rs");
    }
    pub mod pointer {
        include!("../../src/scene/pointer.rs");
    }
    pub mod tween {
        include!("../../src/scene/tween.rs");
    }
    pub mod driver {
        include!("../../src/scene/driver.rs");
    }
    pub mod state {
        include!("../../src/scene/state.rs");
    }
}
