//! Icon service for managing different icon themes
//!
//! Checkbox and control glyphs are looked up here so the list can be drawn with
//! emoji, Unicode, or plain ASCII depending on what the terminal handles well.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Checkbox glyphs for an item row
#[derive(Debug, Clone)]
pub struct CheckboxIcons {
    pub unchecked: &'static str,
    pub checked: &'static str,
}

/// Glyphs for the interactive controls
#[derive(Debug, Clone)]
pub struct ControlIcons {
    pub add: &'static str,
    pub delete: &'static str,
    pub cursor: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub checkbox: CheckboxIcons,
    pub controls: ControlIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            checkbox: CheckboxIcons {
                unchecked: "🔳",
                checked: "✅",
            },
            controls: ControlIcons {
                add: "➕",
                delete: "🗑️",
                cursor: "▏",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            checkbox: CheckboxIcons {
                unchecked: "☐",
                checked: "☑",
            },
            controls: ControlIcons {
                add: "+",
                delete: "✗",
                cursor: "▏",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            checkbox: CheckboxIcons {
                unchecked: "[ ]",
                checked: "[X]",
            },
            controls: ControlIcons {
                add: "[+]",
                delete: "[x]",
                cursor: "_",
            },
        }
    }

    /// Checkbox glyph matching an item's completion flag
    #[must_use]
    pub fn checkbox(&self, completed: bool) -> &'static str {
        let icons = self.icons();
        if completed {
            icons.checkbox.checked
        } else {
            icons.checkbox.unchecked
        }
    }

    #[must_use]
    pub fn add(&self) -> &'static str {
        self.icons().controls.add
    }

    #[must_use]
    pub fn delete(&self) -> &'static str {
        self.icons().controls.delete
    }

    #[must_use]
    pub fn cursor(&self) -> &'static str {
        self.icons().controls.cursor
    }
}
