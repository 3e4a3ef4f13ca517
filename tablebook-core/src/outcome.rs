use serde::{Deserialize, Serialize};
use tablebook_shared::TableId;

/// Result of a coordinator command that ran without a fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome<T = ()> {
    Applied(T),
    Rejected(Rejection),
    NoOp(NoOpReason),
}

/// The command was valid but state was left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rejection {
    NoTableAvailable,
    DoubleBooked { table: TableId },
    OverflowDeclined { table: TableId, covers: u32, capacity: u32 },
    CancellationDeclined,
}

/// Nothing to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoOpReason {
    NothingSelected,
    ArrivalAlreadyRecorded,
    SameTable,
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(value) => Some(value),
            _ => None,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Outcome::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let applied: Outcome<u32> = Outcome::Applied(7);
        assert!(applied.is_applied());
        assert_eq!(applied.applied(), Some(7));

        let rejected: Outcome = Outcome::Rejected(Rejection::DoubleBooked { table: 3 });
        assert!(!rejected.is_applied());
        assert_eq!(rejected.rejection(), Some(Rejection::DoubleBooked { table: 3 }));

        let noop: Outcome = Outcome::NoOp(NoOpReason::SameTable);
        assert_eq!(noop.rejection(), None);
        assert_eq!(noop.applied(), None);
    }

    #[test]
    fn test_wire_format() {
        let outcome: Outcome = Outcome::Rejected(Rejection::OverflowDeclined {
            table: 5,
            covers: 8,
            capacity: 4,
        });
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "REJECTED");
        assert_eq!(json["detail"]["OVERFLOW_DECLINED"]["capacity"], 4);

        let noop: Outcome = Outcome::NoOp(NoOpReason::NothingSelected);
        assert_eq!(serde_json::to_value(&noop).unwrap()["detail"], "NOTHING_SELECTED");
    }
}
