//! Normalization of identifier references nested in node attributes.

pub mod gui;
mod references;

pub use gui::{GUI_REWRITES, GuiRewrite, apply_gui_rewrites};
pub use references::*;
