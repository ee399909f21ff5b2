//! Cells for the grid surface.

use stranger_themes_core::{ColorUpdatable, Theme};
use stranger_themes_style::{Color, ColorPalette};

use super::{CellDescription, ReusableCell, TapHandler};
use crate::error::Result;
use crate::widget::{ImageView, Label};

/// What a grid item displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCellViewModel {
    /// Theme the cell renders with.
    pub theme: Theme,
    /// Character name shown under the picture.
    pub name: String,
    /// Image name, or `None` for an empty image view.
    pub image: Option<String>,
}

impl GridCellViewModel {
    /// An item showing `name` and the named image.
    pub fn new(theme: Theme, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            theme,
            name: name.into(),
            image: Some(image.into()),
        }
    }

    /// An item with no name and no picture.
    pub fn blank(theme: Theme) -> Self {
        Self {
            theme,
            name: String::new(),
            image: None,
        }
    }
}

/// A grid item: a picture with a name underneath.
#[derive(Clone)]
pub struct GridCell {
    theme: Theme,
    name_label: Label,
    image_view: ImageView,
    background_color: Color,
    view_model: Option<GridCellViewModel>,
    tap_handler: Option<TapHandler>,
    renders: usize,
}

impl GridCell {
    /// Create a fresh cell, rendered once with [`Theme::Light`].
    pub fn new() -> Self {
        let mut cell = Self {
            theme: Theme::Light,
            name_label: Label::default(),
            image_view: ImageView::default(),
            background_color: Color::TRANSPARENT,
            view_model: None,
            tap_handler: None,
            renders: 0,
        };
        cell.apply_colors(Theme::Light);
        cell
    }

    pub fn name_label(&self) -> &Label {
        &self.name_label
    }

    pub fn image_view(&self) -> &ImageView {
        &self.image_view
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }
}

impl Default for GridCell {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorUpdatable for GridCell {
    fn theme(&self) -> Theme {
        self.theme
    }

    fn store_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn apply_colors(&mut self, theme: Theme) {
        let palette = ColorPalette::for_theme(theme);
        self.name_label
            .set_colors(palette.primary_text, palette.content_background);
        self.background_color = palette.content_background;
        self.renders += 1;
    }
}

impl ReusableCell for GridCell {
    type ViewModel = GridCellViewModel;

    fn configure(&mut self, description: CellDescription<GridCellViewModel>) -> Result<()> {
        let CellDescription {
            view_model,
            tap_handler,
        } = description;

        self.name_label.text.clone_from(&view_model.name);
        self.image_view.image.clone_from(&view_model.image);
        self.tap_handler = tap_handler;

        let theme = view_model.theme;
        self.view_model = Some(view_model);
        self.set_theme(theme);
        Ok(())
    }

    fn view_model(&self) -> Option<&GridCellViewModel> {
        self.view_model.as_ref()
    }

    fn tap_handler(&self) -> Option<TapHandler> {
        self.tap_handler.clone()
    }

    fn render_count(&self) -> usize {
        self.renders
    }
}

impl std::fmt::Debug for GridCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridCell")
            .field("theme", &self.theme)
            .field("name", &self.name_label.text)
            .field("image", &self.image_view.image)
            .field("renders", &self.renders)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use stranger_themes_style::Palette;

    #[test]
    fn test_configure_grid_cell() {
        let taps = Arc::new(AtomicUsize::new(0));
        let counter = taps.clone();

        let mut cell = GridCell::new();
        cell.configure(CellDescription {
            view_model: GridCellViewModel::new(Theme::Dark, "Eleven", "Eleven Dark"),
            tap_handler: Some(Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })),
        })
        .unwrap();

        assert_eq!(cell.name_label().text, "Eleven");
        assert_eq!(cell.image_view().image.as_deref(), Some("Eleven Dark"));
        assert_eq!(cell.name_label().text_color, Palette::WHITE);
        assert_eq!(cell.background_color(), Palette::BLACK);
        assert_eq!(cell.render_count(), 2);

        (cell.tap_handler().unwrap())();
        assert_eq!(taps.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reconfigure_keeps_render_count_on_same_theme() {
        let mut cell = GridCell::new();
        cell.configure(CellDescription::inert(GridCellViewModel::new(
            Theme::Light,
            "Mike",
            "Mike",
        )))
        .unwrap();
        cell.configure(CellDescription::inert(GridCellViewModel::new(
            Theme::Light,
            "Dustin",
            "Dustin",
        )))
        .unwrap();

        assert_eq!(cell.render_count(), 1);
        assert_eq!(cell.name_label().text, "Dustin");
    }

    #[test]
    fn test_blank_clears_image() {
        let mut cell = GridCell::new();
        cell.configure(CellDescription::inert(GridCellViewModel::new(
            Theme::Dark,
            "Nancy",
            "Nancy",
        )))
        .unwrap();
        cell.configure(CellDescription::inert(GridCellViewModel::blank(Theme::Dark)))
            .unwrap();

        assert_eq!(cell.image_view().image, None);
        assert_eq!(cell.name_label().text, "");
        assert_eq!(cell.theme(), Theme::Dark);
    }
}
