//! Static Theme
//!
//! Colors and spacing, provided through context at the root.

/// Inert style configuration shared by every component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub page_background: &'static str,
    pub surface: &'static str,
    pub dialog_surface: &'static str,
    pub text: &'static str,
    pub muted_text: &'static str,
    pub chip: &'static str,
    pub weakness_chip: &'static str,
    pub accent: &'static str,
    pub error: &'static str,
    pub radius_px: u32,
    pub gap_px: u32,
}

pub const DARK: Theme = Theme {
    page_background: "#121212",
    surface: "#222",
    dialog_surface: "#1e1e2f",
    text: "#fff",
    muted_text: "#bbb",
    chip: "#444",
    weakness_chip: "#d32f2f",
    accent: "#90caf9",
    error: "#f44336",
    radius_px: 12,
    gap_px: 20,
};

impl Default for Theme {
    fn default() -> Self {
        DARK
    }
}

impl Theme {
    pub fn page_style(&self) -> String {
        format!("background: {}; color: {}; min-height: 100vh; font-family: sans-serif;", self.page_background, self.text)
    }

    pub fn grid_style(&self) -> String {
        format!(
            "display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: {}px; padding: 32px;",
            self.gap_px
        )
    }

    pub fn card_style(&self) -> String {
        format!(
            "background: {}; color: {}; padding: 16px; border-radius: {}px; box-shadow: 0 4px 8px rgba(0,0,0,0.2); text-align: center; user-select: none; cursor: pointer;",
            self.surface, self.text, self.radius_px
        )
    }

    pub fn search_style(&self) -> String {
        "width: 100%; max-width: 400px; margin: 16px auto; display: block; padding: 8px 12px; border-radius: 8px; border: 1px solid #ccc; font-size: 1rem; background-color: #fff;".to_string()
    }

    /// `weakness` chips get the warning color.
    pub fn chip_style(&self, weakness: bool) -> String {
        let background = if weakness { self.weakness_chip } else { self.chip };
        format!(
            "display: inline-block; background: {}; color: {}; padding: 4px 8px; margin: 4px; border-radius: 8px; font-size: 0.8rem;",
            background, self.text
        )
    }

    pub fn backdrop_style(&self) -> String {
        "position: fixed; inset: 0; background: rgba(0,0,0,0.6); display: flex; align-items: center; justify-content: center; z-index: 10;".to_string()
    }

    pub fn dialog_style(&self) -> String {
        format!(
            "background: {}; color: {}; padding: 16px; border-radius: {}px; width: min(600px, 92vw); max-height: 90vh; overflow-y: auto;",
            self.dialog_surface, self.text, self.radius_px
        )
    }

    pub fn page_panel_style(&self) -> String {
        format!(
            "background: {}; color: {}; padding: 24px; margin: 0 32px 32px; border-radius: {}px;",
            self.dialog_surface, self.text, self.radius_px
        )
    }

    pub fn message_style(&self, error: bool) -> String {
        let color = if error { self.error } else { self.muted_text };
        format!("text-align: center; padding: 2rem; font-size: 1.2rem; color: {};", color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weakness_chips_are_distinct() {
        let theme = Theme::default();
        assert_ne!(theme.chip_style(true), theme.chip_style(false));
        assert!(theme.chip_style(true).contains(theme.weakness_chip));
    }
}
