//! Content providers: fixed tables mapping a position and a theme to a cell.
//!
//! A provider is built once per surface and handed that surface's
//! [`ThemePublisher`]. Every call to [`ContentProvider::describe`] is a pure
//! function of its arguments; the only state a provider carries is the
//! publisher its tap handlers capture.

mod grid;
mod list;

use stranger_themes_core::{FailurePolicy, Theme, ThemePublisher};

use crate::cell::{CellDescription, IndexPath, ReusableCell, TapHandler};
use crate::error::{Result, SurfaceError};
use crate::targets;

pub use grid::{Character, CharacterImage, GridProvider, CHARACTERS};
pub use list::{ListProvider, Location, LOCATIONS};

/// Shorthand for the view-model of a provider's cells.
pub type ViewModelOf<P> = <<P as ContentProvider>::Cell as ReusableCell>::ViewModel;

/// Source of cells for a list or grid surface.
pub trait ContentProvider: Send + 'static {
    /// The kind of cell this provider configures.
    type Cell: ReusableCell;

    /// Navigation title of the surface showing this content.
    const TITLE: &'static str;

    /// Build the provider. Tap handlers publish through `publisher`.
    fn build(publisher: ThemePublisher) -> Self;

    /// Number of sections in the table.
    fn number_of_sections(&self) -> usize {
        1
    }

    /// Number of items in `section`. Zero for an unknown section.
    fn number_of_items(&self, section: usize) -> usize;

    /// A fresh cell of the registered kind.
    fn dequeue_cell(&self) -> Self::Cell;

    /// Describe the content at `path` under `theme`.
    ///
    /// Fails with [`SurfaceError::PositionOutOfRange`] outside the table.
    fn describe(&self, path: IndexPath, theme: Theme) -> Result<CellDescription<ViewModelOf<Self>>>;

    /// Harmless content shown in place of a misconfigured position.
    fn placeholder(&self, theme: Theme) -> CellDescription<ViewModelOf<Self>>;

    /// Whether `path` lies inside the table.
    fn contains(&self, path: IndexPath) -> bool {
        path.section < self.number_of_sections() && path.item < self.number_of_items(path.section)
    }

    /// Every position in the table, in section then item order.
    fn index_paths(&self) -> Vec<IndexPath> {
        (0..self.number_of_sections())
            .flat_map(|section| {
                (0..self.number_of_items(section)).map(move |item| IndexPath::new(section, item))
            })
            .collect()
    }

    /// [`describe`](Self::describe), reporting failures to `policy`.
    ///
    /// Panics under [`FailurePolicy::Assert`]; otherwise logs and returns the
    /// [`placeholder`](Self::placeholder).
    #[track_caller]
    fn describe_or_placeholder(
        &self,
        path: IndexPath,
        theme: Theme,
        policy: FailurePolicy,
    ) -> CellDescription<ViewModelOf<Self>> {
        match self.describe(path, theme) {
            Ok(description) => description,
            Err(err) => {
                tracing::error!(target: targets::SURFACE, %path, %err, "content configuration error");
                policy.violation(&err.to_string());
                self.placeholder(theme)
            }
        }
    }
}

/// A tap handler publishing `theme`.
pub(crate) fn publish_on_tap(publisher: &ThemePublisher, theme: Theme) -> TapHandler {
    let publisher = publisher.clone();
    std::sync::Arc::new(move || publisher.publish(theme))
}

/// Check `path` against `provider`'s table.
pub(crate) fn check_path<P: ContentProvider + ?Sized>(provider: &P, path: IndexPath) -> Result<()> {
    if provider.contains(path) {
        Ok(())
    } else {
        Err(SurfaceError::out_of_range(path))
    }
}
