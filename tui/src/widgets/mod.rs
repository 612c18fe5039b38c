//! Widgets
//!
//! Reusable building blocks shared by the views.

mod card;
mod progress_bar;
mod text_block;
mod viewport;

pub use card::{fill_gradient, Button, Card};
pub use progress_bar::GradientBar;
pub use text_block::{TextBlock, TextBlockState};
pub use viewport::Viewport;
