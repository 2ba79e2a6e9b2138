//! Bridges egui frames to the document model.

use eframe::egui;

use crate::listeners::KeyEvent;
use crate::portal::{Document, PORTAL_ID};

use super::painter;
use super::theme::Stylesheet;

/// Owns the document modals mount into and paints its `"portal"` layer.
///
/// Call `forward_input` once per frame before rendering modals, and `show`
/// after all modals have rendered.
pub struct EguiHost {
    document: Document,
    stylesheet: Stylesheet,
}

impl EguiHost {
    pub fn new(stylesheet: Stylesheet) -> Self {
        Self {
            document: Document::with_portal(),
            stylesheet,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    pub fn set_stylesheet(&mut self, stylesheet: Stylesheet) {
        self.stylesheet = stylesheet;
    }

    /// Deliver this frame's key presses and releases to the document's
    /// key listeners. Returns the number of events delivered.
    pub fn forward_input(&self, ctx: &egui::Context) -> usize {
        // Listeners may write to egui memory, so collect outside `input`
        let events = ctx.input(|i| key_events(&i.events));
        for event in &events {
            self.document.dispatch_key(event);
        }
        events.len()
    }

    /// Paint everything mounted at `"portal"` and dispatch this frame's
    /// clicks. Returns the number of actions performed.
    pub fn show(&self, ctx: &egui::Context) -> usize {
        let mut clicked = Vec::new();
        for (key, root) in self.document.mounted(PORTAL_ID) {
            for path in painter::paint_mounted(ctx, key, &root, &self.stylesheet) {
                clicked.push((key, path));
            }
        }

        clicked
            .into_iter()
            .map(|(key, path)| self.document.dispatch_click(PORTAL_ID, key, &path))
            .sum()
    }
}

impl Default for EguiHost {
    fn default() -> Self {
        Self::new(Stylesheet::default())
    }
}

/// Convert egui key events to `KeyEvent`s, skipping auto-repeats.
pub fn key_events(events: &[egui::Event]) -> Vec<KeyEvent> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                pressed,
                repeat: false,
                ..
            } => Some(if *pressed {
                KeyEvent::down(key.name())
            } else {
                KeyEvent::up(key.name())
            }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DialogConfig;
    use crate::listeners::KeyEventKind;
    use crate::modal::Modal;
    use crate::node::{Node, Tag};
    use std::cell::Cell;
    use std::rc::Rc;

    fn key(key: egui::Key, pressed: bool, repeat: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_key_events_conversion() {
        let events = key_events(&[
            key(egui::Key::Escape, true, false),
            key(egui::Key::Escape, true, true),
            key(egui::Key::Escape, false, false),
            egui::Event::Text("x".to_string()),
        ]);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, KeyEventKind::Down);
        assert_eq!(events[1], KeyEvent::up("Escape"));
    }

    #[test]
    fn test_forward_input_reaches_modal() {
        let host = EguiHost::default();
        let hits = Rc::new(Cell::new(0));
        let hits_inner = hits.clone();
        let mut modal =
            Modal::mount(host.document(), move || hits_inner.set(hits_inner.get() + 1)).unwrap();
        modal
            .render(
                true,
                &DialogConfig::new().dismiss_on_escape(true),
                Node::new(Tag::P).with_text("hi"),
            )
            .unwrap();

        let ctx = egui::Context::default();
        let input = egui::RawInput {
            events: vec![key(egui::Key::Escape, false, false)],
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            host.forward_input(ctx);
        });
        assert_eq!(hits.get(), 1);
    }

    fn screen() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0))
    }

    fn run_frame(ctx: &egui::Context, host: &EguiHost, events: Vec<egui::Event>) -> usize {
        let input = egui::RawInput {
            screen_rect: Some(screen()),
            events,
            ..Default::default()
        };
        let mut performed = 0;
        let _ = ctx.run(input, |ctx| {
            performed = host.show(ctx);
        });
        performed
    }

    fn pointer_click(ctx: &egui::Context, host: &EguiHost, pos: egui::Pos2) -> usize {
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        run_frame(ctx, host, vec![egui::Event::PointerMoved(pos)])
            + run_frame(ctx, host, vec![button(true)])
            + run_frame(ctx, host, vec![button(false)])
            + run_frame(ctx, host, vec![])
    }

    #[test]
    fn test_painted_clicks_follow_bubbling_rules() {
        let host = EguiHost::default();
        let hits = Rc::new(Cell::new(0));
        let hits_inner = hits.clone();
        let mut modal =
            Modal::mount(host.document(), move || hits_inner.set(hits_inner.get() + 1)).unwrap();
        modal
            .render(
                true,
                &DialogConfig::new()
                    .dismiss_on_overlay(true)
                    .show_close_icon(false),
                Node::new(Tag::P).with_text("Hello, Modal"),
            )
            .unwrap();

        let ctx = egui::Context::default();
        for _ in 0..3 {
            run_frame(&ctx, &host, vec![]);
        }

        // The panel sits over the middle of the screen and swallows clicks
        assert_eq!(pointer_click(&ctx, &host, screen().center()), 0);
        assert_eq!(hits.get(), 0);

        // Corners are bare overlay
        let corner = screen().min + egui::vec2(5.0, 5.0);
        assert_eq!(pointer_click(&ctx, &host, corner), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_click_on_wrapper_padding_reaches_overlay() {
        let stylesheet = Stylesheet::empty().with(
            "modalWrapper",
            crate::ui::theme::ClassStyle::default().padding(100.0),
        );
        let host = EguiHost::new(stylesheet);
        let hits = Rc::new(Cell::new(0));
        let hits_inner = hits.clone();
        let mut modal =
            Modal::mount(host.document(), move || hits_inner.set(hits_inner.get() + 1)).unwrap();
        modal
            .render(
                true,
                &DialogConfig::new()
                    .dismiss_on_overlay(true)
                    .show_close_icon(false),
                Node::new(Tag::P).with_text("Hi"),
            )
            .unwrap();

        let ctx = egui::Context::default();
        for _ in 0..3 {
            run_frame(&ctx, &host, vec![]);
        }

        // Below the small panel, inside the wrapper's padding
        let padding = screen().center() + egui::vec2(0.0, 80.0);
        assert_eq!(pointer_click(&ctx, &host, padding), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_show_paints_mounted_modal_headlessly() {
        let host = EguiHost::default();
        let mut modal = Modal::mount(host.document(), || {}).unwrap();
        modal
            .render(
                true,
                &DialogConfig::new().show_footer_button(true).style_suffix("dark"),
                Node::new(Tag::H1).with_text("Hello"),
            )
            .unwrap();

        let ctx = egui::Context::default();
        let mut performed = usize::MAX;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            performed = host.show(ctx);
        });
        assert_eq!(performed, 0);
    }
}
