//! Canvas client for single-player Pong
//!
//! The simulation, snapshot and renderer build natively; the browser wiring
//! in `app` only exists on wasm32.

pub mod input;
pub mod renderer;
pub mod simulation;
pub mod state;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::{start, DEFAULT_CANVAS_ID};

pub use renderer::{Painter, Renderer, Theme};
pub use simulation::LocalGame;
pub use state::GameStateSnapshot;
