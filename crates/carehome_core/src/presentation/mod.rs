//! Presentation metadata looked up by the view layer.

pub mod badge;
