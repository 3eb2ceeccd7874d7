//! Glade: a small wgpu viewer for a baked portal scene.
//!
//! The scene is a glTF export with a single baked lightmap, two emissive
//! pole lights, an animated noise portal, and a field of drifting firefly
//! points. A debug panel exposes the firefly count and size and the scene
//! colors at runtime.
//!
//! ```no_run
//! use glade::Viewer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     Viewer::new()
//!         .with_model("assets/portal.glb")
//!         .with_texture("assets/baked.jpg")
//!         .run()?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fireflies;
pub mod gpu;
pub mod scene;
pub mod time;
pub mod uniforms;
pub mod viewer;

pub use config::{Settings, SettingsChanged};
pub use error::{AssetError, GpuError, ViewerError};
pub use fireflies::FireflyField;
pub use scene::SceneManifest;
pub use time::FrameClock;
pub use viewer::Viewer;
