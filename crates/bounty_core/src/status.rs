/// Presentation status of a bounty, derived from its raw lifecycle fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DerivedStatus {
    Todo,
    Assigned,
    Review,
    Complete,
    Paid,
}

impl DerivedStatus {
    pub const ALL: [DerivedStatus; 5] = [
        DerivedStatus::Todo,
        DerivedStatus::Assigned,
        DerivedStatus::Review,
        DerivedStatus::Complete,
        DerivedStatus::Paid,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DerivedStatus::Todo => "todo",
            DerivedStatus::Assigned => "assigned",
            DerivedStatus::Review => "review",
            DerivedStatus::Complete => "complete",
            DerivedStatus::Paid => "paid",
        }
    }
}

/// Raw fields a status is derived from.
pub trait StatusSource {
    fn paid(&self) -> bool;
    fn completed(&self) -> bool;
    fn payment_pending(&self) -> bool;
    fn proof_count(&self) -> Option<u32>;
    fn has_assignee(&self) -> bool;
}

/// Resolves a record's status. Rules are checked in order and the first match wins,
/// so payment outranks completion, which outranks pending proofs and assignment.
pub fn resolve_status<S: StatusSource + ?Sized>(record: &S) -> DerivedStatus {
    if record.paid() {
        DerivedStatus::Paid
    } else if record.completed() || record.payment_pending() {
        DerivedStatus::Complete
    } else if record.proof_count().is_some_and(|count| count > 0) {
        DerivedStatus::Review
    } else if record.has_assignee() {
        DerivedStatus::Assigned
    } else {
        DerivedStatus::Todo
    }
}
