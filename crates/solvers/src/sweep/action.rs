/// Actions an observer can request between sweep cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Skip every cell not yet computed.
    StopEarly,
}
