//! Shine TUI - Terminal interface for the Shine confidence coach
//!
//! A full-screen terminal rendering of the three Shine screens (home,
//! conversation, growth story) with a floating navigation bar and the
//! celebration overlay. All state lives in `shine-core`; this crate only
//! draws it and turns keys and clicks into actions.
//!
//! # Architecture
//!
//! - **Compositor**: Layered rendering with z-ordering (view, nav, overlay)
//! - **Avatar**: Gradient personality badges and the personality picker
//! - **Views**: One module per screen plus the nav bar and the overlay
//! - **Widgets**: Cards, buttons, gradient bars, scrolling text
//! - **Theme**: Design tokens resolved to terminal colors

pub mod app;
pub mod avatar;
pub mod compositor;
pub mod icons;
pub mod theme;
pub mod views;
pub mod widgets;

pub use app::App;
