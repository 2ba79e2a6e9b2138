//! Integration tests for portal-modal
//!
//! These tests exercise full workflows across the visibility hook, the
//! mounted modal, the document and the dismissal policy.

#[cfg(test)]
mod integration_tests {
    use crate::config::DialogConfig;
    use crate::listeners::KeyEvent;
    use crate::modal::{DialogView, Modal};
    use crate::node::{Node, Tag};
    use crate::portal::{Document, PORTAL_ID};
    use crate::visibility::use_modal;
    use eframe::egui;
    use std::cell::Cell;
    use std::rc::Rc;

    fn content() -> Node {
        Node::new(Tag::Div)
            .with_child(Node::new(Tag::H1).with_text("Hello, Modal"))
            .with_child(Node::new(Tag::P).with_text("bla bla bla"))
    }

    fn counting_modal(document: &Document) -> (Modal, Rc<Cell<usize>>) {
        let hits = Rc::new(Cell::new(0));
        let inner = hits.clone();
        let modal = Modal::mount(document, move || inner.set(inner.get() + 1)).unwrap();
        (modal, hits)
    }

    /// Open with the hook, close with escape, observe the flag flip back
    #[test]
    fn test_escape_closes_hook_driven_modal() {
        let ctx = egui::Context::default();
        let document = Document::with_portal();
        let (_, toggle) = use_modal(&ctx, "escape", false);
        let mut modal = Modal::mount(&document, toggle.as_dismiss()).unwrap();
        let config = DialogConfig::new().dismiss_on_escape(true);

        toggle.toggle();
        let (open, _) = use_modal(&ctx, "escape", false);
        assert!(open);
        modal.render(open, &config, content()).unwrap();
        assert_eq!(document.mounted_count(PORTAL_ID), 1);

        document.dispatch_key(&KeyEvent::up("Escape"));
        let (open, _) = use_modal(&ctx, "escape", false);
        assert!(!open);

        modal.render(open, &config, content()).unwrap();
        assert_eq!(document.mounted_count(PORTAL_ID), 0);
    }

    /// Two escape releases in one frame close the modal and keep it closed
    #[test]
    fn test_double_escape_before_render_stays_closed() {
        let ctx = egui::Context::default();
        let document = Document::with_portal();
        let (_, toggle) = use_modal(&ctx, "double_escape", false);
        let mut modal = Modal::mount(&document, toggle.as_dismiss()).unwrap();
        let config = DialogConfig::new().dismiss_on_escape(true);

        toggle.toggle();
        let (open, _) = use_modal(&ctx, "double_escape", false);
        modal.render(open, &config, content()).unwrap();

        document.dispatch_key(&KeyEvent::up("Escape"));
        document.dispatch_key(&KeyEvent::up("Escape"));
        let (open, _) = use_modal(&ctx, "double_escape", false);
        assert!(!open, "second escape reopened the modal");
        assert!(!modal.is_open());

        // Re-opening re-arms escape
        toggle.toggle();
        let (open, _) = use_modal(&ctx, "double_escape", false);
        modal.render(open, &config, content()).unwrap();
        document.dispatch_key(&KeyEvent::up("Escape"));
        let (open, _) = use_modal(&ctx, "double_escape", false);
        assert!(!open);
    }

    /// Overlay clicks dismiss exactly once per click, only when enabled
    #[test]
    fn test_overlay_click_policy() {
        let document = Document::with_portal();
        let (mut modal, hits) = counting_modal(&document);

        modal.render(true, &DialogConfig::default(), content()).unwrap();
        modal.click(&[]);
        assert_eq!(hits.get(), 0);

        modal
            .render(true, &DialogConfig::new().dismiss_on_overlay(true), content())
            .unwrap();
        modal.click(&[]);
        assert_eq!(hits.get(), 1);
        modal.click(&[]);
        assert_eq!(hits.get(), 2);
    }

    /// Clicks anywhere inside the panel never dismiss
    #[test]
    fn test_panel_clicks_are_swallowed() {
        let document = Document::with_portal();
        let (mut modal, hits) = counting_modal(&document);
        let result = modal
            .render(true, &DialogConfig::new().dismiss_on_overlay(true), content())
            .unwrap();
        let root = result.node().unwrap().clone();

        for class in ["modal", "modalHeader", "modalSection", "modalFooter"] {
            let path = root.find_by_class(class).unwrap();
            assert_eq!(modal.click(&path), 0, "{} click leaked", class);
        }
        assert_eq!(hits.get(), 0);
    }

    /// Close icon and footer button each dismiss once
    #[test]
    fn test_close_affordances() {
        let document = Document::with_portal();
        let (mut modal, hits) = counting_modal(&document);
        let config = DialogConfig::new()
            .dismiss_on_overlay(true)
            .show_footer_button(true);
        let root = modal
            .render(true, &config, content())
            .unwrap()
            .node()
            .unwrap()
            .clone();

        modal.click(&root.find_by_class("modalCloseButton").unwrap());
        assert_eq!(hits.get(), 1);
        modal.click(&root.find_by_class("modalButton").unwrap());
        assert_eq!(hits.get(), 2);
    }

    /// Escape only for the escape key going up, only while open
    #[test]
    fn test_escape_key_filtering() {
        let document = Document::with_portal();
        let (mut modal, hits) = counting_modal(&document);
        let config = DialogConfig::new().dismiss_on_escape(true);

        modal.render(false, &config, content()).unwrap();
        document.dispatch_key(&KeyEvent::up("Escape"));
        assert_eq!(hits.get(), 0);

        modal.render(true, &config, content()).unwrap();
        for key in ["Enter", "Space", "A", "Tab"] {
            document.dispatch_key(&KeyEvent::up(key));
        }
        document.dispatch_key(&KeyEvent::down("Escape"));
        assert_eq!(hits.get(), 0);

        document.dispatch_key(&KeyEvent::up("Escape"));
        assert_eq!(hits.get(), 1);
    }

    /// Spinner while closed: rendered, not interactive, escape inert
    #[test]
    fn test_spinner_while_closed() {
        let document = Document::with_portal();
        let (mut modal, hits) = counting_modal(&document);
        let config = DialogConfig::new()
            .show_spinner(true)
            .dismiss_on_escape(true)
            .dismiss_on_overlay(true);

        let result = modal.render(false, &config, content()).unwrap();
        assert_eq!(result.view(), DialogView::LoadingOnly);
        assert!(!result.node().unwrap().is_interactive());
        assert_eq!(document.mounted_count(PORTAL_ID), 1);

        modal.click(&[]);
        document.dispatch_key(&KeyEvent::up("Escape"));
        assert_eq!(hits.get(), 0);
    }

    /// Closed without spinner: nothing attached to the mount point
    #[test]
    fn test_hidden_leaves_mount_point_empty() {
        let document = Document::with_portal();
        let (mut modal, _) = counting_modal(&document);
        assert!(modal.render(false, &DialogConfig::default(), content()).unwrap().is_hidden());
        assert_eq!(document.mounted_count(PORTAL_ID), 0);
        assert!(document.mounted(PORTAL_ID).is_empty());
    }

    /// Repeated mount/unmount cycles leave no listeners behind
    #[test]
    fn test_unmount_releases_listeners() {
        let document = Document::with_portal();
        for _ in 0..10 {
            let (mut modal, _) = counting_modal(&document);
            for _ in 0..5 {
                modal
                    .render(true, &DialogConfig::new().dismiss_on_escape(true), content())
                    .unwrap();
            }
            assert_eq!(document.key_listener_count(), 1);
            modal.unmount();
        }
        assert_eq!(document.key_listener_count(), 0);
        assert_eq!(document.mounted_count(PORTAL_ID), 0);
    }

    /// Several modals share one document, each with its own slot and listener
    #[test]
    fn test_independent_modals_in_one_document() {
        let document = Document::with_portal();
        let (mut first, first_hits) = counting_modal(&document);
        let (mut second, second_hits) = counting_modal(&document);
        assert_eq!(document.key_listener_count(), 2);

        first
            .render(true, &DialogConfig::new().dismiss_on_escape(true), content())
            .unwrap();
        second.render(true, &DialogConfig::default(), content()).unwrap();
        assert_eq!(document.mounted_count(PORTAL_ID), 2);

        document.dispatch_key(&KeyEvent::up("Escape"));
        assert_eq!(first_hits.get(), 1);
        assert_eq!(second_hits.get(), 0);

        drop(first);
        assert_eq!(document.key_listener_count(), 1);
        assert_eq!(document.mounted_count(PORTAL_ID), 1);
        assert!(second.is_open());
    }

    /// A dismiss callback may unmount the modal that invoked it
    #[test]
    fn test_dismiss_can_unmount_reentrantly() {
        let document = Document::with_portal();
        let slot: Rc<std::cell::RefCell<Option<Modal>>> = Rc::new(std::cell::RefCell::new(None));
        let slot_inner = slot.clone();
        let mut modal = Modal::mount(&document, move || {
            let taken = slot_inner.borrow_mut().take();
            drop(taken);
        })
        .unwrap();
        modal
            .render(true, &DialogConfig::new().dismiss_on_escape(true), content())
            .unwrap();
        *slot.borrow_mut() = Some(modal);

        document.dispatch_key(&KeyEvent::up("Escape"));
        assert!(slot.borrow().is_none());
        assert_eq!(document.key_listener_count(), 0);
        assert_eq!(document.mounted_count(PORTAL_ID), 0);
    }
}
