pub mod input;
pub mod render;
pub mod terminal;

pub use input::{action_for_key, Action};
pub use render::Renderer;
pub use terminal::TerminalGuard;
