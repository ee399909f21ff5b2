//! The ten-item grid of characters.

use stranger_themes_core::{Theme, ThemePublisher};

use super::{check_path, publish_on_tap, ContentProvider, ViewModelOf};
use crate::cell::{CellDescription, GridCell, GridCellViewModel, IndexPath};
use crate::error::Result;

/// Picture shown for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterImage {
    /// The same image under both themes.
    Fixed(&'static str),
    /// A separate image per theme.
    Themed {
        light: &'static str,
        dark: &'static str,
    },
}

impl CharacterImage {
    /// Image name under `theme`.
    pub fn for_theme(self, theme: Theme) -> &'static str {
        match self {
            Self::Fixed(name) => name,
            Self::Themed { light, dark } => match theme {
                Theme::Light => light,
                Theme::Dark => dark,
            },
        }
    }
}

/// An item of the grid surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub name: &'static str,
    pub image: CharacterImage,
    /// Theme published when the item is tapped.
    pub theme: Theme,
}

impl Character {
    const fn new(name: &'static str, theme: Theme) -> Self {
        Self {
            name,
            image: CharacterImage::Fixed(name),
            theme,
        }
    }

    const fn themed(name: &'static str, light: &'static str, dark: &'static str, theme: Theme) -> Self {
        Self {
            name,
            image: CharacterImage::Themed { light, dark },
            theme,
        }
    }
}

/// Items of the grid surface, in display order.
pub const CHARACTERS: [Character; 10] = [
    Character::themed("Eleven", "Eleven Light", "Eleven Dark", Theme::Dark),
    Character::new("Will", Theme::Dark),
    Character::new("Mike", Theme::Light),
    Character::new("Dustin", Theme::Light),
    Character::new("Lucas", Theme::Light),
    Character::new("Hopper", Theme::Light),
    Character::new("Joyce", Theme::Light),
    Character::new("Johnathan", Theme::Light),
    Character::new("Nancy", Theme::Dark),
    Character::themed("Demigorgen", "Demigorgen Light", "Demigorgen Dark", Theme::Dark),
];

/// Content of the "Collection View Demo" surface.
#[derive(Debug, Clone)]
pub struct GridProvider {
    publisher: ThemePublisher,
}

impl ContentProvider for GridProvider {
    type Cell = GridCell;

    const TITLE: &'static str = "Collection View Demo";

    fn build(publisher: ThemePublisher) -> Self {
        Self { publisher }
    }

    fn number_of_items(&self, section: usize) -> usize {
        match section {
            0 => CHARACTERS.len(),
            _ => 0,
        }
    }

    fn dequeue_cell(&self) -> GridCell {
        GridCell::new()
    }

    fn describe(&self, path: IndexPath, theme: Theme) -> Result<CellDescription<ViewModelOf<Self>>> {
        check_path(self, path)?;
        let character = CHARACTERS[path.item];
        Ok(CellDescription {
            view_model: GridCellViewModel::new(theme, character.name, character.image.for_theme(theme)),
            tap_handler: Some(publish_on_tap(&self.publisher, character.theme)),
        })
    }

    fn placeholder(&self, theme: Theme) -> CellDescription<ViewModelOf<Self>> {
        CellDescription::inert(GridCellViewModel::blank(theme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_ten_items() {
        let provider = GridProvider::build(ThemePublisher::from_fn(|_| {}));
        assert_eq!(provider.number_of_items(0), 10);
        assert_eq!(provider.index_paths().len(), 10);
        assert!(provider.describe(IndexPath::new(0, 10), Theme::Light).is_err());
    }

    #[test]
    fn test_themed_images() {
        let provider = GridProvider::build(ThemePublisher::from_fn(|_| {}));
        let light = provider.describe(IndexPath::new(0, 0), Theme::Light).unwrap();
        let dark = provider.describe(IndexPath::new(0, 0), Theme::Dark).unwrap();
        assert_eq!(light.view_model.image.as_deref(), Some("Eleven Light"));
        assert_eq!(dark.view_model.image.as_deref(), Some("Eleven Dark"));

        let demigorgen = provider.describe(IndexPath::new(0, 9), Theme::Dark).unwrap();
        assert_eq!(demigorgen.view_model.name, "Demigorgen");
        assert_eq!(demigorgen.view_model.image.as_deref(), Some("Demigorgen Dark"));

        let hopper = provider.describe(IndexPath::new(0, 5), Theme::Dark).unwrap();
        assert_eq!(hopper.view_model.image.as_deref(), Some("Hopper"));
    }

    #[test]
    fn test_placeholder_has_no_image() {
        let provider = GridProvider::build(ThemePublisher::from_fn(|_| {}));
        let placeholder = provider.describe_or_placeholder(
            IndexPath::new(0, 12),
            Theme::Dark,
            stranger_themes_core::FailurePolicy::Degrade,
        );
        assert_eq!(placeholder.view_model.image, None);
        assert!(placeholder.tap_handler.is_none());
    }

    #[test]
    fn test_tap_themes() {
        let published = Arc::new(Mutex::new(Vec::new()));
        let sink = published.clone();
        let provider = GridProvider::build(ThemePublisher::from_fn(move |theme| sink.lock().push(theme)));

        for path in provider.index_paths() {
            let description = provider.describe(path, Theme::Light).unwrap();
            (description.tap_handler.unwrap())();
        }

        let expected: Vec<Theme> = CHARACTERS.iter().map(|character| character.theme).collect();
        assert_eq!(*published.lock(), expected);
        assert_eq!(
            expected.iter().filter(|theme| **theme == Theme::Dark).count(),
            4
        );
    }
}
