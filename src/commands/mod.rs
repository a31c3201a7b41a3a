pub mod render;
mod sync;

pub use render::cmd_render;
pub use sync::cmd_sync;
