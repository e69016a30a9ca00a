pub mod carousel;
pub mod catalog;
pub mod contact;
pub mod content;
pub mod media;
pub mod modal;
pub mod motion;
pub mod preload;
pub mod progress;
pub mod schedule;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use schedule::{Millis, Scheduled};
