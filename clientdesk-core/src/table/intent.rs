use crate::query::{
    filtering::ClientTab,
    sorting::{SortDirection, SortField},
};

/// User intents emitted by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableIntent {
    ChangeTab(ClientTab),
    ToggleSortPanel,
    AddSortField(SortField),
    RemoveSortField(SortField),
    SetSortDirection(SortField, SortDirection),
    ToggleSortDirection(SortField),
    /// Positional move, as reported by an index-based list
    ReorderSortFields { from: usize, to: usize },
    /// Drag-and-drop move: `active` was dropped onto `over`
    DragSortField { active: SortField, over: SortField },
    ApplySort,
    ClearSort,
    AddClient,
}

/// Result of dispatching a [`TableIntent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// Nothing observable changed
    Unchanged,
    /// State changed; the view should be re-rendered
    Updated,
    /// The rule set was persisted and the sort panel closed
    SortApplied { criteria: usize },
    /// The rule set was emptied and persisted state removed
    SortCleared,
    /// The add-client action was triggered; there is no flow behind it yet
    AddClientRequested,
}

impl TableEvent {
    pub fn changed(&self) -> bool {
        !matches!(self, TableEvent::Unchanged)
    }
}
