//! The two-row list of locations.

use stranger_themes_core::{Theme, ThemePublisher};

use super::{check_path, publish_on_tap, ContentProvider, ViewModelOf};
use crate::cell::{CellDescription, CellStyle, IndexPath, ListCell, ListCellViewModel};
use crate::error::Result;

/// A row of the list surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Theme published when the row is tapped.
    pub theme: Theme,
}

/// Rows of the list surface, in display order.
pub const LOCATIONS: [Location; 2] = [
    Location {
        title: "Hawkins, Indiana",
        subtitle: "A small town with a terrible secret.",
        theme: Theme::Light,
    },
    Location {
        title: "The Upside Down",
        subtitle: "A mysterious realm bathed in darkness.",
        theme: Theme::Dark,
    },
];

/// Content of the "Table View Demo" surface.
#[derive(Debug, Clone)]
pub struct ListProvider {
    publisher: ThemePublisher,
}

impl ContentProvider for ListProvider {
    type Cell = ListCell;

    const TITLE: &'static str = "Table View Demo";

    fn build(publisher: ThemePublisher) -> Self {
        Self { publisher }
    }

    fn number_of_items(&self, section: usize) -> usize {
        match section {
            0 => LOCATIONS.len(),
            _ => 0,
        }
    }

    fn dequeue_cell(&self) -> ListCell {
        ListCell::new(CellStyle::Subtitle)
    }

    fn describe(&self, path: IndexPath, theme: Theme) -> Result<CellDescription<ViewModelOf<Self>>> {
        check_path(self, path)?;
        let location = LOCATIONS[path.item];
        Ok(CellDescription {
            view_model: ListCellViewModel::new(theme, location.title, location.subtitle),
            tap_handler: Some(publish_on_tap(&self.publisher, location.theme)),
        })
    }

    fn placeholder(&self, theme: Theme) -> CellDescription<ViewModelOf<Self>> {
        CellDescription::inert(ListCellViewModel::title_only(theme, ""))
    }
}
