#![allow(non_snake_case)]

mod add;
mod core;
mod iter;
pub use iter::*;
mod utils;
#[cfg(feature = "serde")]
mod json;
