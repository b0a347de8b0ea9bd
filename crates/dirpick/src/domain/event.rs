/// Requested change of the highlighted row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionMove {
    /// Moves relative to the current selection.
    By(isize),
    /// Moves to an absolute index; out-of-range values are clamped.
    To(isize),
}

/// Host-originated input consumed by `SessionController::handle`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerEvent {
    /// The live query text changed.
    QueryChanged(String),
    /// The user moved the highlight.
    SelectionMoved(SelectionMove),
    /// Descend into the selected directory or open the selected file.
    Commit,
    /// Abort the session and restore the previous context.
    Cancel,
    /// Descend into the first visible directory entry.
    NextDirectory,
    /// Go up to the parent directory.
    Ascend,
}
