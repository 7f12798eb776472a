//! Decorative plexus (constellation) background.
//!
//! Three layers of drifting points linked by fading lines, reacting to the
//! pointer and to clicks. Unrelated to the wallet; it only shares the page.

pub mod frame;
pub mod layer;
pub mod render;
pub mod sim;

pub use frame::Frame;
pub use layer::{LayerConfig, Rgba, LAYERS};
pub use render::CanvasRenderer;
pub use sim::{Plexus, Ripple};
