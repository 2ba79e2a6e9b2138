//! Open/closed state for a modal.
//!
//! `DialogVisibility` is the plain flag. `use_modal` keeps one in egui's
//! per-context memory so that it survives across frames, and hands back the
//! current value together with a `Toggle` that flips it.

use std::hash::Hash;

use eframe::egui;

/// Whether a dialog is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogVisibility {
    open: bool,
}

impl DialogVisibility {
    pub fn new(initial: bool) -> Self {
        Self { open: initial }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the flag
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn show(&mut self) {
        self.open = true;
    }

    pub fn hide(&mut self) {
        self.open = false;
    }
}

/// Read the visibility stored under `id_source`, creating it with `initial`
/// on first use, and return it with a handle that toggles it.
pub fn use_modal(ctx: &egui::Context, id_source: impl Hash, initial: bool) -> (bool, Toggle) {
    let id = egui::Id::new(id_source);
    let open = ctx.data_mut(|data| {
        data.get_temp_mut_or(id, DialogVisibility::new(initial))
            .is_open()
    });
    let toggle = Toggle {
        ctx: ctx.clone(),
        id,
        initial,
    };
    (open, toggle)
}

/// Flips one stored `DialogVisibility` and schedules a repaint.
#[derive(Clone)]
pub struct Toggle {
    ctx: egui::Context,
    id: egui::Id,
    initial: bool,
}

impl Toggle {
    pub fn toggle(&self) {
        let open = self.ctx.data_mut(|data| {
            let visibility = data.get_temp_mut_or(self.id, DialogVisibility::new(self.initial));
            visibility.toggle();
            visibility.is_open()
        });
        tracing::trace!(id = ?self.id, open, "modal visibility toggled");
        self.ctx.request_repaint();
    }

    /// Current value, as the next frame will see it.
    pub fn is_open(&self) -> bool {
        self.ctx.data_mut(|data| {
            data.get_temp_mut_or(self.id, DialogVisibility::new(self.initial))
                .is_open()
        })
    }

    /// Adapt into a dismiss callback for `Modal::mount`.
    pub fn as_dismiss(&self) -> impl Fn() + 'static {
        let toggle = self.clone();
        move || toggle.toggle()
    }
}
