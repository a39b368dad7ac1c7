use super::Painter;
use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;

impl Painter for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn set_fill(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) -> Result<(), String> {
        self.begin_path();
        self.arc(x, y, radius, 0.0, TAU)
            .map_err(|e| format!("Failed to trace ball: {:?}", e))?;
        self.fill();
        self.close_path();
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), String> {
        CanvasRenderingContext2d::fill_text(self, text, x, y)
            .map_err(|e| format!("Failed to draw text: {:?}", e))
    }
}
