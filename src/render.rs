use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Context, Line},
        Block, BorderType, Borders, Paragraph,
    },
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::{
    config::CourtBounds,
    game::{Game, Screen, Winner, AI_SIDE, HUMAN_SIDE},
    game_theme::{GameTheme, ThemeColors},
    helpers::{centered_rect_with_percentage, court_rect},
    input::Viewport,
    sprite::Sprite,
};

const APP_NAME: &str = "court.pong";
const NET_DASH: f64 = 20.0;

/// Draws the current screen and returns where the court landed, so pointer
/// events can be mapped back into court space.
pub fn draw(frame: &mut Frame, game: &Game, theme: GameTheme) -> Viewport {
    let colors = theme.colors();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Fill(1),   // court
            Constraint::Length(3), // controls
        ])
        .split(frame.area());

    let Some(court_area) = court_rect(layout[0]) else {
        draw_resize_warning(frame, &colors);
        return Viewport::default();
    };

    let block = Block::default()
        .title(block_title(game, court_area.width))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .style(Style::default().fg(colors.border).bg(colors.background));
    let inner = block.inner(court_area);
    let bounds = *game.bounds();
    let units_per_column = f64::from(bounds.width) / f64::from(inner.width.max(1));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(colors.background)
        .x_bounds([0.0, f64::from(bounds.width)])
        .y_bounds([0.0, f64::from(bounds.height)])
        .paint(|ctx| {
            draw_court(ctx, game, &colors);
            ctx.layer();
            draw_labels(ctx, game, &colors, units_per_column);
        });
    frame.render_widget(canvas, court_area);

    match game.screen() {
        Screen::Title => draw_banner(frame, inner, &bounds, "PONG", &colors),
        Screen::GameOver { .. } => draw_banner(frame, inner, &bounds, "GAME OVER", &colors),
        Screen::Playing => {}
    }

    let controls = Paragraph::new(" Mouse = move paddle  |  Click/Enter = start  |  Q/Esc = quit ")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(colors.border)),
        )
        .style(Style::default().fg(colors.text))
        .alignment(Alignment::Center);
    frame.render_widget(controls, layout[1]);

    Viewport::new(inner, &bounds)
}

fn draw_resize_warning(frame: &mut Frame, colors: &ThemeColors) {
    let area = frame.area();
    let popup_area = centered_rect_with_percentage(60, 20, area.width, area.height);
    let popup = Paragraph::new("Terminal too small!\nPlease resize.")
        .block(
            Block::default()
                .title("Warning")
                .borders(Borders::ALL)
                .border_type(BorderType::Thick),
        )
        .style(Style::default().fg(colors.ball))
        .alignment(Alignment::Center);
    frame.render_widget(popup, popup_area);
}

fn block_title(game: &Game, width: u16) -> String {
    let scores = game.scores();
    let left = format!("COMPUTER ({})", scores[AI_SIDE]);
    let right = format!("({}) PLAYER", scores[HUMAN_SIDE]);

    let used = left.len() + APP_NAME.len() + right.len() + 6;
    let dashes = (width as usize).saturating_sub(used + 2) / 2;

    format!(
        " {} {} {} {} {} ",
        left,
        "─".repeat(dashes),
        APP_NAME,
        "─".repeat(dashes),
        right,
    )
}

/// Canvas y grows upward; court y grows downward.
fn flip(bounds: &CourtBounds, y: f32) -> f64 {
    f64::from(bounds.height - y)
}

fn draw_court(ctx: &mut Context, game: &Game, colors: &ThemeColors) {
    let bounds = game.bounds();
    let mid_x = f64::from(bounds.width / 2.0);
    let height = f64::from(bounds.height);

    let mut y = 0.0;
    while y < height {
        let end = (y + NET_DASH).min(height);
        ctx.draw(&Line::new(mid_x, y, mid_x, end, colors.net));
        y += NET_DASH * 2.0;
    }

    for side in [AI_SIDE, HUMAN_SIDE] {
        fill_rect(ctx, bounds, game.paddle(side).sprite(), colors);
    }
    fill_ball(ctx, bounds, game.ball().sprite(), colors);
}

fn fill_rect(ctx: &mut Context, bounds: &CourtBounds, sprite: &Sprite, colors: &ThemeColors) {
    let [top_left, _, bottom_right, _] = sprite.corners();
    let (y1, y2) = (flip(bounds, bottom_right.y), flip(bounds, top_left.y));

    let mut x = f64::from(top_left.x);
    while x <= f64::from(bottom_right.x) {
        ctx.draw(&Line::new(x, y1, x, y2, colors.paddle));
        x += 1.0;
    }
}

fn fill_ball(ctx: &mut Context, bounds: &CourtBounds, sprite: &Sprite, colors: &ThemeColors) {
    let centre = sprite.position();
    let (cx, cy) = (f64::from(centre.x), flip(bounds, centre.y));
    let radius = f64::from(sprite.width()) / 2.0;

    let mut dy = -radius;
    while dy <= radius {
        let half = (radius * radius - dy * dy).max(0.0).sqrt();
        ctx.draw(&Line::new(cx - half, cy + dy, cx + half, cy + dy, colors.ball));
        dy += 1.0;
    }
}

fn draw_labels(ctx: &mut Context, game: &Game, colors: &ThemeColors, units_per_column: f64) {
    let bounds = game.bounds();
    let (w, h) = (bounds.width, bounds.height);
    let scores = game.scores();
    let text = Style::default().fg(colors.text);
    let accent = Style::default().fg(colors.accent).bold();

    let mut print = |x: f32, y: f32, label: String, style: Style| {
        // labels are centred on their anchor, like the court's other sprites
        let offset = label.chars().count() as f64 * units_per_column / 2.0;
        ctx.print(f64::from(x) - offset, flip(bounds, y), Span::styled(label, style));
    };

    match game.screen() {
        Screen::Title => {
            print(w / 2.0, h * 0.375, "CLICK THE MOUSE TO START".to_string(), text);
        }
        Screen::Playing => {
            print(w / 4.0, h * 0.175, scores[AI_SIDE].to_string(), accent);
            print(w * 0.75, h * 0.175, scores[HUMAN_SIDE].to_string(), accent);
        }
        Screen::GameOver { winner } => {
            print(w / 4.0, h * 0.75, scores[AI_SIDE].to_string(), accent);
            print(w * 0.75, h * 0.75, scores[HUMAN_SIDE].to_string(), accent);

            let banner_x = match winner {
                Winner::Computer => w / 4.0 + 25.0,
                Winner::Player => w * 0.75 - 25.0,
            };
            print(banner_x, h / 2.0 - 12.0, winner.label().to_string(), accent);
            print(banner_x, h / 2.0 + 12.0, "WINS".to_string(), accent);
            print(w / 2.0, h * 0.95, "CLICK TO PLAY AGAIN".to_string(), text);
        }
    }
}

/// Big lettering across the court, a quarter of the way down.
fn draw_banner(frame: &mut Frame, inner: Rect, bounds: &CourtBounds, text: &'static str, colors: &ThemeColors) {
    let rows = 4;
    let anchor = (f32::from(inner.height) * 100.0 / bounds.height) as u16;
    let top = inner.y + anchor.saturating_sub(rows / 2);
    let area = Rect::new(inner.x, top, inner.width, rows).intersection(inner);

    let big_text = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(Style::default().fg(colors.text))
        .lines(vec![text.into()])
        .alignment(Alignment::Center)
        .build();
    frame.render_widget(big_text, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;
    use crate::{config::Config, input::InputEvent};

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn render(game: &Game, width: u16, height: u16) -> (String, Viewport) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut viewport = Viewport::default();
        terminal
            .draw(|frame| viewport = draw(frame, game, GameTheme::Classic))
            .unwrap();
        (screen_text(terminal.backend().buffer()), viewport)
    }

    fn seeded_game() -> Game {
        Game::new(&Config {
            seed: Some(5),
            ..Config::default()
        })
    }

    #[test]
    fn title_screen_prompts_for_a_click() {
        let (text, viewport) = render(&seeded_game(), 120, 45);

        assert!(text.contains("CLICK THE MOUSE TO START"));
        assert!(text.contains(APP_NAME));
        assert!(viewport.area().width > 0);
        assert_eq!(viewport.area().width, viewport.area().height * 3);
    }

    #[test]
    fn playing_screen_shows_scores() {
        let mut game = seeded_game();
        game.push_input(InputEvent::PrimaryClick);
        game.tick();

        let (text, _) = render(&game, 120, 45);

        assert!(!text.contains("CLICK THE MOUSE TO START"));
        assert!(text.contains("COMPUTER (0)"));
        assert!(text.contains("(0) PLAYER"));
    }

    #[test]
    fn tiny_terminal_shows_warning() {
        let (text, viewport) = render(&seeded_game(), 40, 12);

        assert!(text.contains("Terminal too small!"));
        assert_eq!(viewport, Viewport::default());
    }
}
