//! Lookalike popup: the shell that wires the pure controller to the HTTP
//! client and the embedding browser surface.
mod effects;
pub mod logging;
mod render;
mod shell;

pub use effects::Navigator;
pub use render::render_lines;
pub use shell::PopupShell;
