use super::{net_dashes, Painter, Renderer};
use crate::state::GameStateSnapshot;
use game_core::{Params, Side};

pub fn draw_frame(
    renderer: &Renderer,
    painter: &mut impl Painter,
    snapshot: &GameStateSnapshot,
) -> Result<(), String> {
    let map = &renderer.map;
    let theme = &renderer.theme;
    let width = map.width as f64;
    let height = map.height as f64;

    painter.clear(width, height);
    painter.set_fill(&theme.color);

    draw_net(renderer, painter);

    painter.fill_circle(
        snapshot.ball_x as f64,
        snapshot.ball_y as f64,
        renderer.config.ball_radius as f64,
    )?;

    for (side, y) in [
        (Side::Left, snapshot.paddle_left_y),
        (Side::Right, snapshot.paddle_right_y),
    ] {
        let rect = map.paddle_rect(side, y, &renderer.config);
        let size = rect.size();
        painter.fill_rect(
            rect.min.x as f64,
            rect.min.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    let (player_line, opponent_line) = snapshot.score_lines();
    painter.set_font(&theme.score_font);
    painter.fill_text(&player_line, theme.score_inset, theme.score_baseline)?;
    painter.fill_text(
        &opponent_line,
        width - theme.score_width,
        theme.score_baseline,
    )?;

    if renderer.show_touch_hint {
        painter.set_font(&theme.hint_font);
        painter.fill_text(
            &theme.hint_text,
            width / 2.0 - theme.hint_offset,
            height - theme.hint_margin,
        )?;
    }

    Ok(())
}

fn draw_net(renderer: &Renderer, painter: &mut impl Painter) {
    let x = (renderer.map.width / 2.0 - Params::NET_WIDTH / 2.0) as f64;
    for y in net_dashes(renderer.map.height) {
        painter.fill_rect(
            x,
            y as f64,
            Params::NET_WIDTH as f64,
            Params::NET_DASH as f64,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Config, GameMap};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear(f64, f64),
        Fill(String),
        Font(String),
        Rect(f64, f64, f64, f64),
        Circle(f64, f64, f64),
        Text(String, f64, f64),
    }

    #[derive(Default)]
    struct RecordingPainter {
        calls: Vec<Call>,
        fail_text: bool,
    }

    impl Painter for RecordingPainter {
        fn clear(&mut self, width: f64, height: f64) {
            self.calls.push(Call::Clear(width, height));
        }
        fn set_fill(&mut self, color: &str) {
            self.calls.push(Call::Fill(color.to_string()));
        }
        fn set_font(&mut self, font: &str) {
            self.calls.push(Call::Font(font.to_string()));
        }
        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.calls.push(Call::Rect(x, y, width, height));
        }
        fn fill_circle(&mut self, x: f64, y: f64, radius: f64) -> Result<(), String> {
            self.calls.push(Call::Circle(x, y, radius));
            Ok(())
        }
        fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), String> {
            if self.fail_text {
                return Err("text unavailable".to_string());
            }
            self.calls.push(Call::Text(text.to_string(), x, y));
            Ok(())
        }
    }

    fn snapshot() -> GameStateSnapshot {
        GameStateSnapshot {
            ball_x: 120.0,
            ball_y: 45.0,
            paddle_left_y: 70.0,
            paddle_right_y: 12.0,
            score_player: 2,
            score_opponent: 5,
            frame: 600,
        }
    }

    fn texts(calls: &[Call]) -> Vec<(String, f64, f64)> {
        calls
            .iter()
            .filter_map(|c| match c {
                Call::Text(t, x, y) => Some((t.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_frame_starts_with_clear() {
        let renderer = Renderer::new(GameMap::new(), Config::new(), false);
        let mut painter = RecordingPainter::default();

        renderer.draw(&mut painter, &snapshot()).unwrap();

        assert_eq!(painter.calls[0], Call::Clear(600.0, 200.0));
        assert_eq!(painter.calls[1], Call::Fill("#0f0".to_string()));
    }

    #[test]
    fn test_net_ball_and_paddles() {
        let renderer = Renderer::new(GameMap::new(), Config::new(), false);
        let mut painter = RecordingPainter::default();

        renderer.draw(&mut painter, &snapshot()).unwrap();

        let rects: Vec<&Call> = painter
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Rect(..)))
            .collect();
        // 14 net dashes plus two paddles
        assert_eq!(rects.len(), 16);
        assert_eq!(*rects[0], Call::Rect(299.0, 0.0, 2.0, 10.0));
        assert_eq!(*rects[13], Call::Rect(299.0, 195.0, 2.0, 10.0));
        assert_eq!(*rects[14], Call::Rect(0.0, 70.0, 10.0, 60.0));
        assert_eq!(*rects[15], Call::Rect(590.0, 12.0, 10.0, 60.0));

        assert!(painter.calls.contains(&Call::Circle(120.0, 45.0, 10.0)));
    }

    #[test]
    fn test_scores_without_hint() {
        let renderer = Renderer::new(GameMap::new(), Config::new(), false);
        let mut painter = RecordingPainter::default();

        renderer.draw(&mut painter, &snapshot()).unwrap();

        assert_eq!(
            texts(&painter.calls),
            vec![
                ("You: 2".to_string(), 50.0, 20.0),
                ("CPU: 5".to_string(), 500.0, 20.0),
            ]
        );
    }

    #[test]
    fn test_touch_hint_on_touch_devices() {
        let renderer = Renderer::new(GameMap::new(), Config::new(), true);
        let mut painter = RecordingPainter::default();

        renderer.draw(&mut painter, &snapshot()).unwrap();

        let texts = texts(&painter.calls);
        assert_eq!(texts.len(), 3);
        assert_eq!(
            texts[2],
            ("Touch and drag to move paddle".to_string(), 200.0, 190.0)
        );
        assert_eq!(
            painter.calls.last(),
            Some(&Call::Text(
                "Touch and drag to move paddle".to_string(),
                200.0,
                190.0
            ))
        );
    }

    #[test]
    fn test_painter_errors_propagate() {
        let renderer = Renderer::new(GameMap::new(), Config::new(), false);
        let mut painter = RecordingPainter {
            fail_text: true,
            ..Default::default()
        };

        let result = renderer.draw(&mut painter, &snapshot());

        assert_eq!(result, Err("text unavailable".to_string()));
    }

    #[test]
    fn test_draw_does_not_touch_state() {
        let renderer = Renderer::new(GameMap::new(), Config::new(), true);
        let snapshot = snapshot();
        let before = snapshot.clone();

        renderer
            .draw(&mut RecordingPainter::default(), &snapshot)
            .unwrap();
        renderer
            .draw(&mut RecordingPainter::default(), &snapshot)
            .unwrap();

        assert_eq!(snapshot, before);
    }
}
