//! Reusable, color-updatable cells.
//!
//! A surface keeps one cell per visible position and reconfigures it in place
//! whenever its content is reloaded. Each reconfiguration hands the cell a
//! fresh [`CellDescription`]: an immutable view-model plus the tap handler
//! for that position. The view-model replaces the previous one wholesale.

mod grid_cell;
mod list_cell;

use std::fmt;
use std::sync::Arc;

use stranger_themes_core::ColorUpdatable;

use crate::error::Result;

pub use grid_cell::{GridCell, GridCellViewModel};
pub use list_cell::{ListCell, ListCellViewModel};

/// Position of a cell: a section and an item (row) within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    /// Section of the table.
    pub section: usize,
    /// Row or item within the section.
    pub item: usize,
}

impl IndexPath {
    /// Create an index path.
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.section, self.item)
    }
}

/// Layout of a list cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellStyle {
    /// Title label only.
    Basic,
    /// Title label with a detail label underneath.
    #[default]
    Subtitle,
}

/// Action run when the user taps a cell.
pub type TapHandler = Arc<dyn Fn() + Send + Sync>;

/// Everything needed to configure one cell for one position.
#[derive(Clone)]
pub struct CellDescription<VM> {
    /// Content to display.
    pub view_model: VM,
    /// Run when the cell is tapped. `None` makes the cell inert.
    pub tap_handler: Option<TapHandler>,
}

impl<VM> CellDescription<VM> {
    /// A description whose tap publishes nothing.
    pub fn inert(view_model: VM) -> Self {
        Self {
            view_model,
            tap_handler: None,
        }
    }
}

impl<VM: fmt::Debug> fmt::Debug for CellDescription<VM> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellDescription")
            .field("view_model", &self.view_model)
            .field("tappable", &self.tap_handler.is_some())
            .finish()
    }
}

/// A cell a surface can reuse across reloads.
pub trait ReusableCell: ColorUpdatable + Clone + Send + 'static {
    /// Immutable snapshot of what the cell displays.
    type ViewModel: Clone + fmt::Debug + Send + 'static;

    /// Replace the cell's content.
    ///
    /// Re-renders only if the view-model carries a different theme.
    fn configure(&mut self, description: CellDescription<Self::ViewModel>) -> Result<()>;

    /// The current view-model, if the cell has been configured.
    fn view_model(&self) -> Option<&Self::ViewModel>;

    /// The current tap handler, if any.
    fn tap_handler(&self) -> Option<TapHandler>;

    /// How many times the cell has re-rendered.
    fn render_count(&self) -> usize;
}
