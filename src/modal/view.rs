//! Pure rendering of a modal into a node tree.

use crate::classes::ClassName;
use crate::config::DialogConfig;
use crate::node::{Node, Tag};
use crate::spinner;

use super::actions::{DialogAction, DismissSource};

/// Label of the optional footer button.
pub const FOOTER_BUTTON_LABEL: &str = "Close Modal";

/// Which of the three mutually exclusive outputs a render produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogView {
    Open,
    LoadingOnly,
    Hidden,
}

impl DialogView {
    /// `open` takes precedence; the spinner only shows while closed.
    pub fn resolve(open: bool, show_spinner: bool) -> Self {
        match (open, show_spinner) {
            (true, _) => Self::Open,
            (false, true) => Self::LoadingOnly,
            (false, false) => Self::Hidden,
        }
    }
}

/// Output of a render.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderResult {
    Open(Node),
    LoadingOnly(Node),
    Hidden,
}

impl RenderResult {
    pub fn view(&self) -> DialogView {
        match self {
            Self::Open(_) => DialogView::Open,
            Self::LoadingOnly(_) => DialogView::LoadingOnly,
            Self::Hidden => DialogView::Hidden,
        }
    }

    pub fn node(&self) -> Option<&Node> {
        match self {
            Self::Open(node) | Self::LoadingOnly(node) => Some(node),
            Self::Hidden => None,
        }
    }

    pub fn into_node(self) -> Option<Node> {
        match self {
            Self::Open(node) | Self::LoadingOnly(node) => Some(node),
            Self::Hidden => None,
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Render a modal. Does not validate `config`; `Modal::render` does.
pub fn render(open: bool, config: &DialogConfig, content: Node) -> RenderResult {
    match DialogView::resolve(open, config.show_spinner) {
        DialogView::Open => RenderResult::Open(open_tree(config, content)),
        DialogView::LoadingOnly => RenderResult::LoadingOnly(spinner::render(config.suffix())),
        DialogView::Hidden => RenderResult::Hidden,
    }
}

fn open_tree(config: &DialogConfig, content: Node) -> Node {
    let suffix = config.suffix();

    let mut header = Node::new(Tag::Header).with_classes(ClassName::Header.class_list(suffix));
    if config.show_close_icon {
        header = header.with_child(
            Node::new(Tag::Button)
                .with_classes(ClassName::CloseButton.class_list(suffix))
                .with_attr("aria-label", "Close")
                .with_attr("data-dismiss", "modal")
                .with_attr("type", "button")
                .on_click(DialogAction::dismiss(DismissSource::CloseIcon))
                .with_child(Node::new(Tag::I).with_class("fas").with_class("fa-times")),
        );
    }

    let body = Node::new(Tag::Section)
        .with_classes(ClassName::Section.class_list(suffix))
        .with_child(content);

    let mut footer = Node::new(Tag::Footer).with_classes(ClassName::Footer.class_list(suffix));
    if config.show_footer_button {
        footer = footer.with_child(
            Node::new(Tag::Button)
                .with_classes(ClassName::FooterButton.class_list(suffix))
                .with_text(FOOTER_BUTTON_LABEL)
                .on_click(DialogAction::dismiss(DismissSource::FooterButton)),
        );
    }

    // Clicks inside the panel never reach the overlay
    let panel = Node::new(Tag::Section)
        .with_classes(ClassName::Panel.class_list(suffix))
        .stop_propagation()
        .with_child(header)
        .with_child(body)
        .with_child(footer);

    let wrapper = Node::new(Tag::Aside)
        .with_classes(ClassName::Wrapper.class_list(suffix))
        .with_attr("aria-modal", "true")
        .with_attr("role", "dialog")
        .with_child(panel);

    let mut overlay = Node::new(Tag::Div)
        .with_classes(ClassName::Overlay.class_list(suffix))
        .with_child(wrapper);
    if config.dismiss_on_overlay {
        overlay = overlay.on_click(DialogAction::dismiss(DismissSource::Overlay));
    }
    overlay
}
