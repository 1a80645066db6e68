pub mod config;
pub mod constants;
pub mod cursor;
pub mod decor;
pub mod driver;
pub mod error;
pub mod field;
pub mod modal;
pub mod reveal;
pub mod surface;

pub use config::*;
pub use cursor::*;
pub use decor::*;
pub use driver::*;
pub use error::*;
pub use field::*;
pub use modal::*;
pub use reveal::*;
pub use surface::*;
