//! Cells for the list surface.

use stranger_themes_core::{ColorUpdatable, Theme};
use stranger_themes_style::{Color, ColorPalette};

use super::{CellDescription, CellStyle, ReusableCell, TapHandler};
use crate::error::{Result, SurfaceError};
use crate::widget::Label;

/// What a list row displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCellViewModel {
    /// Theme the cell renders with.
    pub theme: Theme,
    /// Main label text.
    pub title: String,
    /// Detail label text. Needs a [`CellStyle::Subtitle`] cell.
    pub subtitle: Option<String>,
}

impl ListCellViewModel {
    /// A row with a title and a subtitle.
    pub fn new(theme: Theme, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            theme,
            title: title.into(),
            subtitle: Some(subtitle.into()),
        }
    }

    /// A row with a title only.
    pub fn title_only(theme: Theme, title: impl Into<String>) -> Self {
        Self {
            theme,
            title: title.into(),
            subtitle: None,
        }
    }
}

/// A list row with a title label and, in [`CellStyle::Subtitle`], a detail label.
#[derive(Clone)]
pub struct ListCell {
    style: CellStyle,
    theme: Theme,
    title_label: Label,
    subtitle_label: Option<Label>,
    background_color: Color,
    view_model: Option<ListCellViewModel>,
    tap_handler: Option<TapHandler>,
    renders: usize,
}

impl ListCell {
    /// Create a fresh cell, rendered once with [`Theme::Light`].
    pub fn new(style: CellStyle) -> Self {
        let subtitle_label = match style {
            CellStyle::Basic => None,
            CellStyle::Subtitle => Some(Label::default()),
        };
        let mut cell = Self {
            style,
            theme: Theme::Light,
            title_label: Label::default(),
            subtitle_label,
            background_color: Color::TRANSPARENT,
            view_model: None,
            tap_handler: None,
            renders: 0,
        };
        cell.apply_colors(Theme::Light);
        cell
    }

    pub fn style(&self) -> CellStyle {
        self.style
    }

    pub fn title_label(&self) -> &Label {
        &self.title_label
    }

    pub fn subtitle_label(&self) -> Option<&Label> {
        self.subtitle_label.as_ref()
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }
}

impl ColorUpdatable for ListCell {
    fn theme(&self) -> Theme {
        self.theme
    }

    fn store_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn apply_colors(&mut self, theme: Theme) {
        let palette = ColorPalette::for_theme(theme);
        self.title_label
            .set_colors(palette.primary_text, palette.content_background);
        if let Some(subtitle) = self.subtitle_label.as_mut() {
            subtitle.set_colors(palette.secondary_text, palette.content_background);
        }
        self.background_color = palette.content_background;
        self.renders += 1;
    }
}

impl ReusableCell for ListCell {
    type ViewModel = ListCellViewModel;

    fn configure(&mut self, description: CellDescription<ListCellViewModel>) -> Result<()> {
        let CellDescription {
            view_model,
            tap_handler,
        } = description;

        match (&view_model.subtitle, self.subtitle_label.as_mut()) {
            (Some(text), Some(label)) => label.text.clone_from(text),
            (Some(_), None) => {
                return Err(SurfaceError::MissingWidget {
                    widget: "subtitle label",
                });
            }
            (None, Some(label)) => label.text.clear(),
            (None, None) => {}
        }
        self.title_label.text.clone_from(&view_model.title);
        self.tap_handler = tap_handler;

        let theme = view_model.theme;
        self.view_model = Some(view_model);
        self.set_theme(theme);
        Ok(())
    }

    fn view_model(&self) -> Option<&ListCellViewModel> {
        self.view_model.as_ref()
    }

    fn tap_handler(&self) -> Option<TapHandler> {
        self.tap_handler.clone()
    }

    fn render_count(&self) -> usize {
        self.renders
    }
}

impl std::fmt::Debug for ListCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListCell")
            .field("style", &self.style)
            .field("theme", &self.theme)
            .field("title", &self.title_label.text)
            .field("renders", &self.renders)
            .finish_non_exhaustive()
    }
}
