use crate::domain::SelectionMove;

/// Owns the highlighted index within the visible entries.
///
/// The index always satisfies `0 <= index < max(1, len)` for the length
/// passed to the last mutating call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionController {
    selected_index: usize,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the highlighted index.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Clamps `target` into the visible range and selects it.
    ///
    /// Returns whether the index changed, so the caller knows when the host
    /// highlight needs updating.
    pub fn move_to(&mut self, target: isize, visible_len: usize) -> bool {
        let last_index = visible_len.saturating_sub(1);
        let clamped = usize::try_from(target).map_or(0, |index| index.min(last_index));

        self.replace(clamped)
    }

    /// Moves by `delta` rows, clamped like [`Self::move_to`].
    pub fn move_by(&mut self, delta: isize, visible_len: usize) -> bool {
        let current = isize::try_from(self.selected_index).unwrap_or(isize::MAX);

        self.move_to(current.saturating_add(delta), visible_len)
    }

    /// Applies a host selection request.
    pub fn apply(&mut self, selection_move: SelectionMove, visible_len: usize) -> bool {
        match selection_move {
            SelectionMove::By(delta) => self.move_by(delta, visible_len),
            SelectionMove::To(target) => self.move_to(target, visible_len),
        }
    }

    pub fn reset_to_top(&mut self) -> bool {
        self.replace(0)
    }

    /// Re-clamps the current index after the visible list changed length.
    pub fn clamp(&mut self, visible_len: usize) -> bool {
        let current = isize::try_from(self.selected_index).unwrap_or(isize::MAX);

        self.move_to(current, visible_len)
    }

    fn replace(&mut self, index: usize) -> bool {
        let changed = self.selected_index != index;
        self.selected_index = index;

        changed
    }
}
