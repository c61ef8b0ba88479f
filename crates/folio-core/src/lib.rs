pub mod camera;
pub mod constants;
pub mod controls;
pub mod debug;
pub mod dpr;
pub mod error;
pub mod follower;
pub mod geometry;
pub mod glb;
pub mod markers;
pub mod panels;
pub mod scene;
pub mod sections;
pub mod visual;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use controls::*;
pub use error::*;
pub use follower::{Activity, Follower, FollowerParams, FollowerTransform, YawBlend};
pub use geometry::*;
pub use scene::*;
pub use sections::*;
