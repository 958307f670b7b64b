use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::{
    ui::{app::App, layout, state::Phase},
    util::colors,
};

const FALLBACK_HINDI: &str = "दोहा लोड नहीं हो सका";
const FALLBACK_TRANSLITERATION: &str = "Could not load doha";
const FALLBACK_MEANING: &str =
    "There was an error loading the poetry. Restart the app or point it at a directory of doha files.";

const LOADING_TEXT: &str = "dohas load ho rahe hain…";

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        Block::bordered()
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::NEUTRAL))
            .title_top(Line::from("॥ dohatui ॥").centered())
            .title_bottom(
                Line::from(" space/enter or click: naya doha · q: quit ").centered(),
            )
            .render(area, buf);

        let regions = layout::regions(area);
        match &self.state.phase {
            Phase::Loading => {
                render_region(
                    buf,
                    regions.transliteration,
                    LOADING_TEXT,
                    Style::new().fg(colors::NEUTRAL),
                );
            }
            Phase::Failed => {
                let style = Style::new().fg(colors::ERROR);
                render_region(
                    buf,
                    regions.hindi,
                    FALLBACK_HINDI,
                    style.add_modifier(Modifier::BOLD),
                );
                render_region(buf, regions.transliteration, FALLBACK_TRANSLITERATION, style);
                render_region(
                    buf,
                    regions.meaning,
                    FALLBACK_MEANING,
                    Style::new().fg(colors::NEUTRAL),
                );
            }
            Phase::Ready(library) => {
                if let Some(doha) = library.current() {
                    let highlight = self.state.highlight_active();
                    render_region(
                        buf,
                        regions.hindi,
                        &doha.hindi,
                        text_style(colors::PRIMARY, highlight).add_modifier(Modifier::BOLD),
                    );
                    render_region(
                        buf,
                        regions.transliteration,
                        &doha.transliteration,
                        text_style(colors::NEUTRAL, highlight).add_modifier(Modifier::ITALIC),
                    );
                    render_region(
                        buf,
                        regions.meaning,
                        &doha.meaning,
                        text_style(colors::NEUTRAL, highlight),
                    );
                    render_button(buf, regions.button);
                }
            }
        }
    }
}

fn text_style(normal: Color, highlight: bool) -> Style {
    if highlight {
        Style::new().fg(colors::ACCENT)
    } else {
        Style::new().fg(normal)
    }
}

/// An absent (zero-area) region is skipped, never an error.
fn render_region(buf: &mut Buffer, area: Rect, text: &str, style: Style) {
    if area.is_empty() {
        return;
    }
    Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(vcenter(area, text), buf);
}

// Pre-wrap line count; wrapping on narrow terminals shifts the centering
// a little, which is fine.
fn vcenter(area: Rect, text: &str) -> Rect {
    let lines = text.lines().count().max(1) as u16;
    if lines >= area.height {
        return area;
    }
    let pad = (area.height - lines) / 2;
    Rect::new(area.x, area.y + pad, area.width, area.height - pad)
}

fn render_button(buf: &mut Buffer, area: Rect) {
    if area.is_empty() {
        return;
    }
    let block = Block::bordered()
        .border_set(border::ROUNDED)
        .border_style(Style::new().fg(colors::PRIMARY));
    let inner = block.inner(area);
    block.render(area, buf);
    Paragraph::new(layout::BUTTON_LABEL)
        .style(Style::new().fg(colors::PRIMARY))
        .alignment(Alignment::Center)
        .render(inner, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::library::{Doha, Library};
    use std::path::PathBuf;

    fn app() -> App {
        App::new(Config {
            poems_dir: PathBuf::from("unused"),
        })
    }

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);

        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn ready_shows_all_three_fields_of_the_current_doha() {
        let mut app = app();
        app.state.phase = Phase::Ready(Library::new(vec![Doha {
            hindi: "kalpana ka doha".into(),
            transliteration: "kalpana ka doha (roman)".into(),
            meaning: "an invented couplet".into(),
        }]));

        let screen = render_to_string(&app, 80, 24);
        assert!(screen.contains("kalpana ka doha"));
        assert!(screen.contains("kalpana ka doha (roman)"));
        assert!(screen.contains("an invented couplet"));
        assert!(screen.contains(layout::BUTTON_LABEL));
    }

    #[test]
    fn failed_shows_the_fixed_fallback() {
        let mut app = app();
        app.state.phase = Phase::Failed;

        let screen = render_to_string(&app, 110, 24);
        assert!(screen.contains(FALLBACK_TRANSLITERATION));
        assert!(screen.contains("There was an error loading the poetry."));
        assert!(!screen.contains(layout::BUTTON_LABEL));
    }

    #[test]
    fn loading_shows_the_placeholder() {
        let app = app();
        let screen = render_to_string(&app, 80, 24);
        assert!(screen.contains(LOADING_TEXT));
    }

    #[tokio::test]
    async fn partial_load_end_to_end_never_shows_the_fallback() {
        use crate::event::events::Event;
        use crate::library;
        use crate::ui::input::AppMessage;
        use crate::ui::util::handler::EventHandler;

        let tmp = tempfile::tempdir().unwrap();
        let doha_json = |n: usize| {
            format!(
                r#"{{"hindi": "doha {n} hindi", "english": "doha {n} roman", "translation": "doha {n} meaning"}}"#
            )
        };
        std::fs::write(tmp.path().join("doha_1.json"), doha_json(1)).unwrap();
        std::fs::write(tmp.path().join("doha_2.json"), "{broken").unwrap();
        std::fs::write(tmp.path().join("doha_3.json"), doha_json(3)).unwrap();

        let mut app = app();
        let evt = match library::loader::load(tmp.path()).await {
            Ok(library) => Event::LibraryLoaded(library),
            Err(err) => Event::LoadFailed(err.to_string()),
        };
        EventHandler::handle_app_event(&mut app, evt);

        let Phase::Ready(library) = &app.state.phase else {
            panic!("expected Ready");
        };
        assert_eq!(library.len(), 2);
        assert_eq!(library.dohas()[0].transliteration, "doha 1 roman");
        assert_eq!(library.dohas()[1].transliteration, "doha 3 roman");

        for _ in 0..20 {
            EventHandler::apply(&mut app, AppMessage::NextDoha);
            let Phase::Ready(library) = &app.state.phase else {
                panic!("expected Ready");
            };
            let current = library.current().unwrap().clone();
            let screen = render_to_string(&app, 80, 24);
            assert!(screen.contains(&current.hindi));
            assert!(screen.contains(&current.transliteration));
            assert!(screen.contains(&current.meaning));
            assert!(!screen.contains(FALLBACK_TRANSLITERATION));
        }
    }

    #[test]
    fn rendering_into_a_degenerate_area_is_harmless() {
        let mut app = app();
        app.state.phase = Phase::Ready(Library::new(vec![Doha {
            hindi: "a".into(),
            transliteration: "b".into(),
            meaning: "c".into(),
        }]));

        for (w, h) in [(0, 0), (1, 1), (5, 2), (80, 3)] {
            let _ = render_to_string(&app, w, h);
        }
    }
}
