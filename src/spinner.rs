//! Loading spinner - a stateless placeholder shaped like the modal.

use crate::classes::ClassName;
use crate::node::{Node, Tag};

/// Build the spinner tree: overlay > wrapper > panel > section > spinner.
///
/// Carries no click actions, so nothing in it can dismiss anything.
pub fn render(style_suffix: Option<&str>) -> Node {
    let indicator = Node::new(Tag::Div).with_classes(ClassName::Spinner.class_list(style_suffix));

    let section = Node::new(Tag::Article)
        .with_classes(ClassName::Section.class_list(style_suffix))
        .with_child(indicator);

    let panel = Node::new(Tag::Section)
        .with_classes(ClassName::Panel.class_list(style_suffix))
        .with_child(section);

    let wrapper = Node::new(Tag::Aside)
        .with_classes(ClassName::Wrapper.class_list(style_suffix))
        .with_attr("aria-modal", "true")
        .with_attr("aria-hidden", "true")
        .with_attr("tabindex", "-1")
        .with_attr("role", "dialog")
        .with_child(panel);

    Node::new(Tag::Div)
        .with_classes(ClassName::Overlay.class_list(style_suffix))
        .with_child(wrapper)
}
