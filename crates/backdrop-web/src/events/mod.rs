pub mod keyboard;
pub mod pointer;

pub use pointer::{wire_button_press, wire_pointer_handlers, PointerWiring};
