pub mod draw;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use crate::state::GameStateSnapshot;
use game_core::{Config, GameMap, Params};

/// Immediate-mode 2D drawing surface
pub trait Painter {
    fn clear(&mut self, width: f64, height: f64);
    fn set_fill(&mut self, color: &str);
    fn set_font(&mut self, font: &str);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) -> Result<(), String>;
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), String>;
}

/// Colours, fonts and text anchors
#[derive(Debug, Clone)]
pub struct Theme {
    pub color: String,
    pub score_font: String,
    pub hint_font: String,
    pub hint_text: String,
    pub score_inset: f64, // Distance of "You" from the left edge
    pub score_width: f64, // Distance of "CPU" from the right edge
    pub score_baseline: f64,
    pub hint_offset: f64, // Hint starts this far left of center
    pub hint_margin: f64, // Hint baseline above the bottom edge
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            color: "#0f0".to_string(),
            score_font: "16px \"Comic Sans MS\", cursive, sans-serif".to_string(),
            hint_font: "14px \"Comic Sans MS\", cursive, sans-serif".to_string(),
            hint_text: "Touch and drag to move paddle".to_string(),
            score_inset: 50.0,
            score_width: 100.0,
            score_baseline: 20.0,
            hint_offset: 100.0,
            hint_margin: 10.0,
        }
    }
}

/// Paints a [`GameStateSnapshot`]; holds only presentation settings
pub struct Renderer {
    pub theme: Theme,
    pub map: GameMap,
    pub config: Config,
    pub show_touch_hint: bool,
}

impl Renderer {
    pub fn new(map: GameMap, config: Config, show_touch_hint: bool) -> Self {
        Self {
            theme: Theme::default(),
            map,
            config,
            show_touch_hint,
        }
    }

    pub fn draw(
        &self,
        painter: &mut impl Painter,
        snapshot: &GameStateSnapshot,
    ) -> Result<(), String> {
        draw::draw_frame(self, painter, snapshot)
    }
}

/// Y offsets of the net's dashes down the centerline
pub fn net_dashes(height: f32) -> impl Iterator<Item = f32> {
    let count = (height.max(0.0) / Params::NET_STEP).ceil() as usize;
    (0..count).map(|i| i as f32 * Params::NET_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_dashes_cover_height() {
        let dashes: Vec<f32> = net_dashes(200.0).collect();
        assert_eq!(dashes.len(), 14);
        assert_eq!(dashes[0], 0.0);
        assert_eq!(dashes[1], 15.0);
        assert_eq!(*dashes.last().unwrap(), 195.0);
    }

    #[test]
    fn test_net_dashes_exact_multiple() {
        let dashes: Vec<f32> = net_dashes(30.0).collect();
        assert_eq!(dashes, vec![0.0, 15.0]);
        assert_eq!(net_dashes(0.0).count(), 0);
    }
}
