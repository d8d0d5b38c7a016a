/// Result of a stage which is skipped when its output is already complete.
#[derive(Debug, Clone, PartialEq)]
pub enum StageOutcome<T> {
    Computed(T),
    Skipped,
}

impl<T> StageOutcome<T> {
    pub fn is_skipped(&self) -> bool {
        matches!(self, StageOutcome::Skipped)
    }

    pub fn computed(self) -> Option<T> {
        match self {
            StageOutcome::Computed(value) => Some(value),
            StageOutcome::Skipped => None,
        }
    }
}
