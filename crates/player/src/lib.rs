//! Character builder client.
//!
//! UI, application services and the store adapter in one crate. Native and
//! web targets are selected with `cfg`.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::presentation;

pub use config::PlayerConfig;
pub use ui::app;
