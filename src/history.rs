use chrono::{DateTime, Local};
use rust_decimal::Decimal;

use crate::transaction::TransactionKind;

/// One successfully applied transaction, as recorded in an account history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    kind: TransactionKind,
    amount: Decimal,
    recorded_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn recorded_at(&self) -> DateTime<Local> {
        self.recorded_at
    }
}

/// Append-only log of the transactions applied to one account.
///
/// Recording happens only after the corresponding balance mutation has
/// already succeeded, so the log and the balance cannot diverge. There is
/// no removal or in-place mutation path.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn record(&mut self, kind: TransactionKind, amount: Decimal, recorded_at: DateTime<Local>) {
        self.entries.push(HistoryEntry {
            kind,
            amount,
            recorded_at,
        });
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of recorded entries of the given kind.
    pub fn count_of(&self, kind: TransactionKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use super::*;

    #[test]
    fn record_keeps_insertion_order() {
        let now = Local::now();
        let mut history = History::default();
        history.record(
            TransactionKind::Deposit,
            Decimal::from_u32(10).unwrap(),
            now,
        );
        history.record(
            TransactionKind::Withdrawal,
            Decimal::from_u32(3).unwrap(),
            now,
        );
        history.record(
            TransactionKind::Deposit,
            Decimal::from_u32(7).unwrap(),
            now,
        );

        let kinds: Vec<_> = history.entries().iter().map(HistoryEntry::kind).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::Deposit,
                TransactionKind::Withdrawal,
                TransactionKind::Deposit
            ]
        );
        assert_eq!(
            history.entries()[1].amount(),
            Decimal::from_u32(3).unwrap()
        );
        assert_eq!(history.entries()[1].recorded_at(), now);
    }

    #[test]
    fn count_of_filters_by_kind() {
        let now = Local::now();
        let mut history = History::default();
        assert_eq!(history.count_of(TransactionKind::Withdrawal), 0);

        history.record(
            TransactionKind::Deposit,
            Decimal::from_u32(10).unwrap(),
            now,
        );
        history.record(
            TransactionKind::Withdrawal,
            Decimal::from_u32(1).unwrap(),
            now,
        );
        history.record(
            TransactionKind::Withdrawal,
            Decimal::from_u32(2).unwrap(),
            now,
        );

        assert_eq!(history.count_of(TransactionKind::Deposit), 1);
        assert_eq!(history.count_of(TransactionKind::Withdrawal), 2);
    }
}
