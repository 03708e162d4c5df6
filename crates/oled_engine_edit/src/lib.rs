#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

pub mod transform;

mod stamp;
pub use stamp::*;

pub use oled_engine::{EngineError, EngineResult};
