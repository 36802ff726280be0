//! Business logic helpers for the transaction ledger.

use uuid::Uuid;

use crate::core::services::{CoreError, ServiceResult};
use crate::domain::transaction::{
    FinanceSummary, Transaction, TransactionKind, UNKNOWN_PERSON_LABEL,
};
use crate::workspace::Workspace;

/// Provides validated CRUD and reporting helpers for [`Transaction`]
/// records.
pub struct TransactionService;

impl TransactionService {
    /// Upserts a transaction by identifier.
    ///
    /// The denormalized person name is recomputed from the live identity
    /// store on every save, falling back to [`UNKNOWN_PERSON_LABEL`] when
    /// the referenced person no longer exists.
    pub fn save(
        workspace: &mut Workspace,
        mut transaction: Transaction,
    ) -> ServiceResult<Transaction> {
        Self::validate(&transaction)?;

        transaction.person_name = workspace
            .person(transaction.person_id)
            .map(|person| person.full_name.clone())
            .unwrap_or_else(|| UNKNOWN_PERSON_LABEL.to_string());

        match workspace
            .transactions
            .iter_mut()
            .find(|stored| stored.id == transaction.id)
        {
            Some(stored) => *stored = transaction.clone(),
            None => workspace.transactions.push(transaction.clone()),
        }
        workspace.touch();
        Ok(transaction)
    }

    /// Removes the transaction with `id`. Missing ids are a no-op.
    pub fn remove(workspace: &mut Workspace, id: Uuid) {
        workspace.transactions.retain(|txn| txn.id != id);
        workspace.touch();
    }

    /// Returns a view of all transactions.
    pub fn list(workspace: &Workspace) -> &[Transaction] {
        &workspace.transactions
    }

    /// Totals over the live ledger, recomputed on every call.
    pub fn summary(workspace: &Workspace) -> FinanceSummary {
        let total = |kind: TransactionKind| {
            workspace
                .transactions
                .iter()
                .filter(|txn| txn.kind == kind)
                .map(|txn| txn.value)
                .sum::<f64>()
        };
        let total_revenue = total(TransactionKind::Revenue);
        let total_expense = total(TransactionKind::Expense);
        FinanceSummary {
            total_revenue,
            total_expense,
            balance: total_revenue - total_expense,
        }
    }

    fn validate(transaction: &Transaction) -> ServiceResult<()> {
        let mut missing = Vec::new();
        if transaction.description.trim().is_empty() {
            missing.push("description");
        }
        if transaction.value <= 0.0 {
            missing.push("value");
        }
        if transaction.transaction_date.trim().is_empty() {
            missing.push("transaction_date");
        }
        if transaction.person_id.is_nil() {
            missing.push("person_id");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::validation(missing))
        }
    }
}
