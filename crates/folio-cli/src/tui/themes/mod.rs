//! Colour theme for the Folio TUI

use folio_core::ContentType;
use ratatui::style::Color;

/// A complete theme definition
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Core colors
    pub bg_color: Color,
    pub border_color: Color,
    pub title_color: Color,
    pub accent_color: Color,
    pub text_color: Color,
    pub dim_color: Color,

    // Special colors
    pub link_color: Color,
    pub highlight_color: Color,

    // UI element colors
    pub selection_bg_color: Color,
    pub status_bar_bg_color: Color,
    pub input_bg_color: Color,

    // Result badge colors
    pub badge_project_color: Color,
    pub badge_publication_color: Color,
    pub badge_experience_color: Color,
    pub badge_talk_color: Color,
    pub badge_blog_color: Color,
}

impl Theme {
    /// Badge colour for a search result type
    pub fn badge_color(&self, kind: ContentType) -> Color {
        match kind {
            ContentType::Project => self.badge_project_color,
            ContentType::Publication => self.badge_publication_color,
            ContentType::Experience => self.badge_experience_color,
            ContentType::Talk => self.badge_talk_color,
            ContentType::Blog => self.badge_blog_color,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        folio_dark()
    }
}

/// The default dark theme
pub fn folio_dark() -> Theme {
    Theme {
        name: "folio-dark".to_string(),
        bg_color: Color::Rgb(22, 24, 33),
        border_color: Color::Rgb(84, 92, 118),
        title_color: Color::Rgb(236, 196, 120), // Warm gold for headings
        accent_color: Color::Rgb(122, 184, 255),
        text_color: Color::Rgb(214, 219, 230),
        dim_color: Color::Rgb(138, 146, 168),
        link_color: Color::Rgb(110, 208, 224),
        highlight_color: Color::Rgb(255, 170, 120),
        selection_bg_color: Color::Rgb(46, 54, 78),
        status_bar_bg_color: Color::Rgb(32, 35, 48),
        input_bg_color: Color::Rgb(38, 42, 58),
        badge_project_color: Color::Rgb(122, 184, 255),
        badge_publication_color: Color::Rgb(196, 150, 255),
        badge_experience_color: Color::Rgb(126, 214, 146),
        badge_talk_color: Color::Rgb(255, 170, 120),
        badge_blog_color: Color::Rgb(240, 128, 176),
    }
}
