//! Class names for rendered elements.
//!
//! Stylesheets target these names directly, so the base strings below are
//! a public contract. When a style suffix is configured every element gets a
//! second class `<base>-<suffix>` next to its base class.

/// Structural elements that carry a themeable class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassName {
    Overlay,
    Wrapper,
    Panel,
    Header,
    CloseButton,
    Section,
    Footer,
    FooterButton,
    Spinner,
}

impl ClassName {
    pub const ALL: [ClassName; 9] = [
        Self::Overlay,
        Self::Wrapper,
        Self::Panel,
        Self::Header,
        Self::CloseButton,
        Self::Section,
        Self::Footer,
        Self::FooterButton,
        Self::Spinner,
    ];

    /// The unsuffixed class name.
    pub fn base(&self) -> &'static str {
        match self {
            Self::Overlay => "modalOverlay",
            Self::Wrapper => "modalWrapper",
            Self::Panel => "modal",
            Self::Header => "modalHeader",
            Self::CloseButton => "modalCloseButton",
            Self::Section => "modalSection",
            Self::Footer => "modalFooter",
            Self::FooterButton => "modalButton",
            Self::Spinner => "spinner",
        }
    }

    /// The suffixed variant, e.g. `modal-dark`.
    pub fn suffixed(&self, suffix: &str) -> String {
        format!("{}-{}", self.base(), suffix)
    }

    /// Base class followed by the suffixed class when a suffix is present.
    pub fn class_list(&self, suffix: Option<&str>) -> Vec<String> {
        let mut classes = vec![self.base().to_string()];
        if let Some(suffix) = suffix {
            classes.push(self.suffixed(suffix));
        }
        classes
    }
}

/// Join a class list the way a `class` attribute would hold it.
pub fn class_attr(classes: &[String]) -> String {
    classes.join(" ")
}
