/// Clock state of a single employee name.
/// Two states only: an employee cycles in -> out -> in indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftStatus {
    ClockedIn,
    ClockedOut,
}

impl ShiftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftStatus::ClockedIn => "clocked in",
            ShiftStatus::ClockedOut => "not clocked in",
        }
    }

    pub fn is_clocked_in(&self) -> bool {
        matches!(self, ShiftStatus::ClockedIn)
    }
}
