//! Paints a mounted node tree with egui.
//!
//! The root (overlay) covers the whole screen in its own foreground area;
//! each child of the root is laid out centered in a second foreground area
//! kept above the overlay. Clicks are not handled here: the painter records
//! the path of every clicked container, button or clickable label and the
//! host routes it through the document, so bubbling follows the same rules
//! as the headless model. A click on wrapper padding reaches the overlay.

use eframe::egui::{self, Align, Align2, Color32, Layout, Margin, RichText, Sense, Vec2};

use crate::classes::ClassName;
use crate::node::{Node, NodePath, Tag};
use crate::portal::{SlotKey, PORTAL_ID};

use super::theme::{ResolvedStyle, Stylesheet};

const FALLBACK_BACKDROP: Color32 = Color32::from_black_alpha(150);
const FALLBACK_SPINNER_SIZE: f32 = 32.0;

/// Paint one mounted tree and return the paths of nodes clicked this frame.
pub fn paint_mounted(
    ctx: &egui::Context,
    key: SlotKey,
    root: &Node,
    stylesheet: &Stylesheet,
) -> Vec<NodePath> {
    let mut clicks: Vec<NodePath> = Vec::new();
    let screen = ctx.screen_rect();
    let backdrop = stylesheet.resolve(&root.classes);

    egui::Area::new(egui::Id::new((PORTAL_ID, key, "overlay")))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, backdrop.fill.unwrap_or(FALLBACK_BACKDROP));
            if response.clicked() {
                clicks.push(Vec::new());
            }
        });

    for (index, child) in root.children.iter().enumerate() {
        let shown = egui::Area::new(egui::Id::new((PORTAL_ID, key, "panel", index)))
            .order(egui::Order::Foreground)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                let mut path = vec![index];
                paint_node(ui, child, &mut path, stylesheet, &mut clicks);
            });
        // Keep the panel above its own overlay
        ctx.move_to_top(shown.response.layer_id);
    }

    clicks
}

fn paint_node(
    ui: &mut egui::Ui,
    node: &Node,
    path: &mut NodePath,
    stylesheet: &Stylesheet,
    clicks: &mut Vec<NodePath>,
) {
    let style = stylesheet.resolve(&node.classes);

    match node.tag {
        Tag::Button => {
            let label = button_label(node);
            let mut text = RichText::new(label);
            if let Some(color) = style.text_color {
                text = text.color(color);
            }
            if let Some(size) = style.size {
                text = text.size(size);
            }
            let mut button = egui::Button::new(text);
            if let Some(fill) = style.fill {
                button = button.fill(fill);
            }
            if let Some(radius) = style.corner_radius {
                button = button.corner_radius(radius);
            }
            let mut response = ui.add(button);
            if let Some(label) = node.attr("aria-label") {
                response = response.on_hover_text(label);
            }
            if response.clicked() {
                clicks.push(path.clone());
            }
        }
        Tag::H1 | Tag::H2 | Tag::P | Tag::Span | Tag::I => {
            let text = styled_text(node, &style);
            let response = if node.on_click.is_some() {
                ui.add(egui::Label::new(text).sense(Sense::click()))
            } else {
                ui.label(text)
            };
            if response.clicked() {
                clicks.push(path.clone());
            }
        }
        _ if node.has_class(ClassName::Spinner.base()) => {
            let mut spinner =
                egui::Spinner::new().size(style.size.unwrap_or(FALLBACK_SPINNER_SIZE));
            if let Some(color) = style.text_color {
                spinner = spinner.color(color);
            }
            ui.add(spinner);
        }
        _ => paint_container(ui, node, path, &style, stylesheet, clicks),
    }
}

fn paint_container(
    ui: &mut egui::Ui,
    node: &Node,
    path: &mut NodePath,
    style: &ResolvedStyle,
    stylesheet: &Stylesheet,
    clicks: &mut Vec<NodePath>,
) {
    let mut frame = egui::Frame::new();
    if let Some(fill) = style.fill {
        frame = frame.fill(fill);
    }
    if let Some(stroke) = style.stroke {
        frame = frame.stroke(stroke);
    }
    if let Some(radius) = style.corner_radius {
        frame = frame.corner_radius(radius);
    }
    if let Some(padding) = style.padding {
        frame = frame.inner_margin(Margin::same(padding.round().clamp(0.0, 127.0) as i8));
    }

    // Header and footer controls sit on the right edge
    let layout = match node.tag {
        Tag::Header | Tag::Footer => Layout::right_to_left(Align::Center),
        _ => Layout::top_down(Align::Min),
    };

    // Registered before the children so they sit on top for hit testing.
    // The rect is last frame's, as egui hit-tests against last frame anyway.
    let id = ui.id().with(("node", path.as_slice()));
    if let Some(rect) = ui.ctx().data(|d| d.get_temp::<egui::Rect>(id)) {
        if ui.interact(rect, id, Sense::click()).clicked() {
            clicks.push(path.clone());
        }
    }

    let shown = frame.show(ui, |ui| {
        if let Some(width) = style.min_width {
            ui.set_min_width(width);
        }
        if let Some(text) = &node.text {
            ui.label(styled_plain(text, style));
        }
        ui.with_layout(layout, |ui| {
            for (index, child) in node.children.iter().enumerate() {
                path.push(index);
                paint_node(ui, child, path, stylesheet, clicks);
                path.pop();
            }
        });
    });

    let rect = shown.response.rect;
    ui.ctx().data_mut(|d| d.insert_temp(id, rect));
}

fn button_label(node: &Node) -> String {
    if let Some(text) = &node.text {
        return text.clone();
    }
    node.children
        .iter()
        .find(|child| child.tag == Tag::I)
        .map(|icon| icon_glyph(icon).to_string())
        .unwrap_or_default()
}

fn icon_glyph(icon: &Node) -> &'static str {
    if icon.has_class("fa-times") {
        "✕"
    } else {
        "•"
    }
}

fn styled_text(node: &Node, style: &ResolvedStyle) -> RichText {
    let text = match (node.tag, &node.text) {
        (Tag::I, _) => icon_glyph(node).to_string(),
        (_, Some(text)) => text.clone(),
        (_, None) => String::new(),
    };
    let mut rich = styled_plain(&text, style);
    match node.tag {
        Tag::H1 => rich = rich.heading(),
        Tag::H2 => rich = rich.strong(),
        _ => {}
    }
    rich
}

fn styled_plain(text: &str, style: &ResolvedStyle) -> RichText {
    let mut rich = RichText::new(text);
    if let Some(color) = style.text_color {
        rich = rich.color(color);
    }
    rich
}
