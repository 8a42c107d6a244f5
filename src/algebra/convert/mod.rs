//! Conversions between sparse matrix representations.

mod anymatrix;
pub use anymatrix::*;
mod conversions;
mod format;
pub use format::*;
mod settings;
pub use settings::*;
