//! Class-based styling for painted modals.
//!
//! A `Stylesheet` maps class names (`modal`, `modal-dark`, ...) to a
//! `ClassStyle`. A node's style is the merge of the rules for each of its
//! classes in order, so a suffixed class refines its base class field by
//! field. Colours are hex strings (`#rrggbb` or `#rrggbbaa`).

use std::collections::BTreeMap;

use eframe::egui::{Color32, Stroke};
use serde::{Deserialize, Serialize};

use crate::classes::ClassName;

/// Style rule for one class. Unset fields inherit from earlier classes.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ClassStyle {
    pub fill: Option<String>,
    pub text_color: Option<String>,
    pub stroke_color: Option<String>,
    pub stroke_width: Option<f32>,
    pub corner_radius: Option<f32>,
    pub padding: Option<f32>,
    pub min_width: Option<f32>,
    /// Spinner diameter or icon size
    pub size: Option<f32>,
}

impl ClassStyle {
    pub fn fill(mut self, hex: &str) -> Self {
        self.fill = Some(hex.to_string());
        self
    }

    pub fn text_color(mut self, hex: &str) -> Self {
        self.text_color = Some(hex.to_string());
        self
    }

    pub fn stroke(mut self, hex: &str, width: f32) -> Self {
        self.stroke_color = Some(hex.to_string());
        self.stroke_width = Some(width);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }
}

/// A merged style ready for painting.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolvedStyle {
    pub fill: Option<Color32>,
    pub text_color: Option<Color32>,
    pub stroke: Option<Stroke>,
    pub corner_radius: Option<f32>,
    pub padding: Option<f32>,
    pub min_width: Option<f32>,
    pub size: Option<f32>,
}

/// Rules keyed by class name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct Stylesheet {
    rules: BTreeMap<String, ClassStyle>,
}

impl Stylesheet {
    pub fn empty() -> Self {
        Self { rules: BTreeMap::new() }
    }

    pub fn insert(&mut self, class: impl Into<String>, style: ClassStyle) {
        self.rules.insert(class.into(), style);
    }

    pub fn with(mut self, class: impl Into<String>, style: ClassStyle) -> Self {
        self.insert(class, style);
        self
    }

    pub fn rule(&self, class: &str) -> Option<&ClassStyle> {
        self.rules.get(class)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Merge the rules for `classes`, later classes winning.
    pub fn resolve(&self, classes: &[String]) -> ResolvedStyle {
        let mut resolved = ResolvedStyle::default();
        let mut stroke_color: Option<Color32> = None;
        let mut stroke_width: Option<f32> = None;

        for class in classes {
            let Some(rule) = self.rules.get(class) else {
                continue;
            };
            if let Some(color) = rule.fill.as_deref().and_then(|hex| parse_color(class, "fill", hex)) {
                resolved.fill = Some(color);
            }
            if let Some(color) = rule
                .text_color
                .as_deref()
                .and_then(|hex| parse_color(class, "text_color", hex))
            {
                resolved.text_color = Some(color);
            }
            if let Some(color) = rule
                .stroke_color
                .as_deref()
                .and_then(|hex| parse_color(class, "stroke_color", hex))
            {
                stroke_color = Some(color);
            }
            stroke_width = rule.stroke_width.or(stroke_width);
            resolved.corner_radius = rule.corner_radius.or(resolved.corner_radius);
            resolved.padding = rule.padding.or(resolved.padding);
            resolved.min_width = rule.min_width.or(resolved.min_width);
            resolved.size = rule.size.or(resolved.size);
        }

        resolved.stroke = stroke_color.map(|color| Stroke::new(stroke_width.unwrap_or(1.0), color));
        resolved
    }
}

impl Default for Stylesheet {
    /// Light base theme plus a `dark` variant for every class.
    fn default() -> Self {
        let base = |class: ClassName| class.base().to_string();
        let dark = |class: ClassName| class.suffixed("dark");

        Self::empty()
            .with(base(ClassName::Overlay), ClassStyle::default().fill("#00000099"))
            .with(
                base(ClassName::Panel),
                ClassStyle::default()
                    .fill("#fafafa")
                    .text_color("#1f1f1f")
                    .stroke("#00000033", 1.0)
                    .corner_radius(8.0)
                    .padding(16.0)
                    .min_width(360.0),
            )
            .with(base(ClassName::CloseButton), ClassStyle::default().text_color("#555555").size(16.0))
            .with(base(ClassName::Section), ClassStyle::default().padding(8.0))
            .with(
                base(ClassName::FooterButton),
                ClassStyle::default()
                    .fill("#3b82f6")
                    .text_color("#ffffff")
                    .corner_radius(4.0),
            )
            .with(base(ClassName::Spinner), ClassStyle::default().text_color("#3b82f6").size(32.0))
            .with(dark(ClassName::Overlay), ClassStyle::default().fill("#000000c0"))
            .with(
                dark(ClassName::Panel),
                ClassStyle::default()
                    .fill("#1e1e1e")
                    .text_color("#e6e6e6")
                    .stroke("#ffffff22", 1.0),
            )
            .with(dark(ClassName::CloseButton), ClassStyle::default().text_color("#bbbbbb"))
            .with(dark(ClassName::FooterButton), ClassStyle::default().fill("#2563eb"))
            .with(dark(ClassName::Spinner), ClassStyle::default().text_color("#93c5fd"))
    }
}

fn parse_color(class: &str, field: &str, hex: &str) -> Option<Color32> {
    match Color32::from_hex(hex) {
        Ok(color) => Some(color),
        Err(err) => {
            tracing::warn!(class, field, hex, ?err, "ignoring invalid colour in stylesheet");
            None
        }
    }
}
