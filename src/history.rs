use crate::stroke::Stroke;

/// Ordered stacks of committed and undone strokes.
///
/// Both stacks run oldest to newest. Undo moves the newest committed
/// stroke onto the undone stack and redo moves it back, so an undo
/// followed by a redo restores the exact prior state. Committing new
/// work clears the undone stack.
#[derive(Debug, Default)]
pub struct History {
    committed: Vec<Stroke>,
    undone: Vec<Stroke>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finished stroke. New work invalidates any redoable work.
    pub fn commit(&mut self, stroke: Stroke) {
        self.undone.clear();
        self.committed.push(stroke);
    }

    /// Moves the newest committed stroke to the undone stack.
    /// Returns false (and does nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(stroke) => {
                self.undone.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Moves the newest undone stroke back onto the committed stack.
    /// Returns false (and does nothing) when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(stroke) => {
                self.committed.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Empties both stacks.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.undone.clear();
    }

    /// Drops the newest committed stroke without touching the undone
    /// stack; swallows the dot left behind by the first half of a
    /// double-click. No-op on an empty history.
    pub fn remove_last(&mut self) -> bool {
        self.committed.pop().is_some()
    }

    /// Called when a fresh stroke begins: starting new work makes the
    /// undone stack unreachable.
    pub fn invalidate_redo(&mut self) {
        self.undone.clear();
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.committed
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}
