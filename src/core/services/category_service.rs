//! Business logic helpers for the category registry.

use crate::core::services::{CoreError, ServiceResult};
use crate::domain::category::CategoryKind;
use crate::workspace::Workspace;

/// Provides validated operations over the two category label lists.
pub struct CategoryService;

impl CategoryService {
    /// Adds a trimmed label to the list for `kind`, keeping it sorted.
    /// Duplicates are rejected case-sensitively.
    pub fn add(
        workspace: &mut Workspace,
        kind: CategoryKind,
        label: impl AsRef<str>,
    ) -> ServiceResult<()> {
        let label = label.as_ref().trim();
        if label.is_empty() {
            return Err(CoreError::validation(["category"]));
        }
        let list = workspace.categories.list_mut(kind);
        if list.iter().any(|existing| existing == label) {
            return Err(CoreError::DuplicateCategory(label.to_string()));
        }
        list.push(label.to_string());
        list.sort();
        workspace.touch();
        Ok(())
    }

    /// Removes a label, refusing while any transaction still references it.
    /// The in-use check scans the live transaction ledger at call time.
    pub fn remove(
        workspace: &mut Workspace,
        kind: CategoryKind,
        label: &str,
    ) -> ServiceResult<()> {
        let in_use = workspace
            .transactions
            .iter()
            .any(|txn| txn.category.as_deref() == Some(label));
        if in_use {
            return Err(CoreError::CategoryInUse(label.to_string()));
        }
        workspace
            .categories
            .list_mut(kind)
            .retain(|existing| existing != label);
        workspace.touch();
        Ok(())
    }

    /// Returns the sorted view of the list for `kind`.
    pub fn list(workspace: &Workspace, kind: CategoryKind) -> &[String] {
        workspace.categories.list(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::{Transaction, TransactionKind};
    use uuid::Uuid;

    fn empty_workspace() -> Workspace {
        let mut workspace = Workspace::new("Categories");
        workspace.categories = crate::domain::category::CategoryBook::empty();
        workspace
    }

    #[test]
    fn add_rejects_duplicates_and_keeps_sorted_order() {
        let mut workspace = empty_workspace();
        CategoryService::add(&mut workspace, CategoryKind::Expense, "Rent").unwrap();
        CategoryService::add(&mut workspace, CategoryKind::Expense, "  Marketing  ").unwrap();

        let err = CategoryService::add(&mut workspace, CategoryKind::Expense, "Rent")
            .expect_err("duplicate fails");
        assert_eq!(err, CoreError::DuplicateCategory("Rent".into()));

        assert_eq!(
            CategoryService::list(&workspace, CategoryKind::Expense),
            ["Marketing", "Rent"]
        );
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let mut workspace = empty_workspace();
        CategoryService::add(&mut workspace, CategoryKind::Revenue, "Consulting").unwrap();
        CategoryService::add(&mut workspace, CategoryKind::Revenue, "consulting")
            .expect("different case is a different label");
    }

    #[test]
    fn remove_blocks_labels_referenced_by_transactions() {
        let mut workspace = empty_workspace();
        CategoryService::add(&mut workspace, CategoryKind::Expense, "Rent").unwrap();
        let txn = Transaction::new(
            TransactionKind::Expense,
            "Office rent",
            1200.0,
            "2024-03-01",
            Uuid::new_v4(),
        )
        .with_category("Rent");
        let txn_id = txn.id;
        workspace.transactions.push(txn);

        let err = CategoryService::remove(&mut workspace, CategoryKind::Expense, "Rent")
            .expect_err("in-use label cannot be removed");
        assert_eq!(err, CoreError::CategoryInUse("Rent".into()));

        workspace.transactions.retain(|txn| txn.id != txn_id);
        CategoryService::remove(&mut workspace, CategoryKind::Expense, "Rent").unwrap();
        assert!(CategoryService::list(&workspace, CategoryKind::Expense).is_empty());
    }

    #[test]
    fn add_rejects_blank_labels() {
        let mut workspace = empty_workspace();
        let err = CategoryService::add(&mut workspace, CategoryKind::Expense, "   ")
            .expect_err("blank label fails");
        assert!(matches!(err, CoreError::Validation { .. }));
    }
}
