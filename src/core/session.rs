//! The single-session controller routing dashboard operations.

use uuid::Uuid;

use crate::core::credentials::{CredentialVerifier, PlaintextVerifier};
use crate::core::services::{
    AppointmentService, CategoryService, CoreError, IdentityService, ServiceResult,
    TransactionService,
};
use crate::domain::appointment::Appointment;
use crate::domain::category::CategoryKind;
use crate::domain::person::Person;
use crate::domain::transaction::{FinanceSummary, Transaction};
use crate::workspace::Workspace;

/// Observable session state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState<'a> {
    LoggedOut,
    LoggedIn(&'a Person),
}

/// Holds the single active identity and routes every dashboard operation
/// to the ledgers, applying role-based view gates.
///
/// The held person is a by-value copy taken at login; later edits to the
/// identity store do not retroactively change the session's view of
/// itself. The admin-only gates guard the Users, Finance, and Settings
/// views; the ledger services themselves stay role-agnostic apart from the
/// appointment ownership rule.
pub struct SessionController {
    current: Option<Person>,
    verifier: Box<dyn CredentialVerifier>,
}

impl SessionController {
    /// A controller using the plaintext credential comparison.
    pub fn new() -> Self {
        Self::with_verifier(Box::new(PlaintextVerifier))
    }

    /// A controller using a custom credential verification scheme.
    pub fn with_verifier(verifier: Box<dyn CredentialVerifier>) -> Self {
        Self {
            current: None,
            verifier,
        }
    }

    pub fn state(&self) -> SessionState<'_> {
        match &self.current {
            Some(person) => SessionState::LoggedIn(person),
            None => SessionState::LoggedOut,
        }
    }

    pub fn current(&self) -> Option<&Person> {
        self.current.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(Person::is_admin)
    }

    /// `LoggedOut -> LoggedIn` on a matching credential pair.
    pub fn login(
        &mut self,
        workspace: &Workspace,
        login_id: &str,
        secret: &str,
    ) -> ServiceResult<Person> {
        let person =
            IdentityService::authenticate(workspace, login_id, secret, self.verifier.as_ref())?;
        self.current = Some(person.clone());
        Ok(person)
    }

    /// Self-registration; a successful one always auto-authenticates.
    pub fn register(&mut self, workspace: &mut Workspace, draft: Person) -> ServiceResult<Person> {
        let person = IdentityService::register(workspace, draft)?;
        self.current = Some(person.clone());
        Ok(person)
    }

    /// `LoggedIn -> LoggedOut`.
    pub fn logout(&mut self) {
        self.current = None;
    }

    // Users view (admin only).

    pub fn people<'a>(&self, workspace: &'a Workspace) -> ServiceResult<&'a [Person]> {
        self.require_admin("Users")?;
        Ok(IdentityService::list(workspace))
    }

    pub fn save_person(&self, workspace: &mut Workspace, person: Person) -> ServiceResult<Person> {
        self.require_admin("Users")?;
        IdentityService::save(workspace, person)
    }

    pub fn delete_person(&self, workspace: &mut Workspace, id: Uuid) -> ServiceResult<()> {
        self.require_admin("Users")?;
        IdentityService::remove(workspace, id);
        Ok(())
    }

    // Appointments view (any session).

    pub fn appointments<'a>(&self, workspace: &'a Workspace) -> ServiceResult<Vec<&'a Appointment>> {
        let actor = self.require_session()?;
        Ok(AppointmentService::list_visible(workspace, actor))
    }

    pub fn save_appointment(
        &self,
        workspace: &mut Workspace,
        appointment: Appointment,
    ) -> ServiceResult<Appointment> {
        let actor = self.require_session()?.clone();
        AppointmentService::save(workspace, appointment, &actor)
    }

    pub fn delete_appointment(&self, workspace: &mut Workspace, id: Uuid) -> ServiceResult<()> {
        self.require_session()?;
        AppointmentService::remove(workspace, id);
        Ok(())
    }

    // Finance view (admin only).

    pub fn transactions<'a>(&self, workspace: &'a Workspace) -> ServiceResult<&'a [Transaction]> {
        self.require_admin("Finance")?;
        Ok(TransactionService::list(workspace))
    }

    pub fn save_transaction(
        &self,
        workspace: &mut Workspace,
        transaction: Transaction,
    ) -> ServiceResult<Transaction> {
        self.require_admin("Finance")?;
        TransactionService::save(workspace, transaction)
    }

    pub fn delete_transaction(&self, workspace: &mut Workspace, id: Uuid) -> ServiceResult<()> {
        self.require_admin("Finance")?;
        TransactionService::remove(workspace, id);
        Ok(())
    }

    pub fn summary(&self, workspace: &Workspace) -> ServiceResult<FinanceSummary> {
        self.require_admin("Finance")?;
        Ok(TransactionService::summary(workspace))
    }

    // Settings view (admin only).

    pub fn categories<'a>(
        &self,
        workspace: &'a Workspace,
        kind: CategoryKind,
    ) -> ServiceResult<&'a [String]> {
        self.require_admin("Settings")?;
        Ok(CategoryService::list(workspace, kind))
    }

    pub fn add_category(
        &self,
        workspace: &mut Workspace,
        kind: CategoryKind,
        label: &str,
    ) -> ServiceResult<()> {
        self.require_admin("Settings")?;
        CategoryService::add(workspace, kind, label)
    }

    pub fn remove_category(
        &self,
        workspace: &mut Workspace,
        kind: CategoryKind,
        label: &str,
    ) -> ServiceResult<()> {
        self.require_admin("Settings")?;
        CategoryService::remove(workspace, kind, label)
    }

    fn require_session(&self) -> ServiceResult<&Person> {
        self.current.as_ref().ok_or(CoreError::NotLoggedIn)
    }

    fn require_admin(&self, view: &str) -> ServiceResult<&Person> {
        let person = self.require_session()?;
        if person.is_admin() {
            Ok(person)
        } else {
            Err(CoreError::Forbidden(view.to_string()))
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::person::Role;

    fn draft(name: &str, login: &str) -> Person {
        let mut person = Person::new(name, login, Role::User).with_secret("pw");
        person.date_of_birth = "020292".into();
        person.phone = "555-0101".into();
        person
    }

    #[test]
    fn login_logout_transitions() {
        let workspace = Workspace::with_bootstrap_admin("Session");
        let mut session = SessionController::new();
        assert_eq!(session.state(), SessionState::LoggedOut);

        let err = session.login(&workspace, "admin", "nope").expect_err("bad secret");
        assert_eq!(err, CoreError::InvalidCredentials);
        assert_eq!(session.state(), SessionState::LoggedOut);

        session.login(&workspace, "admin", "admin").unwrap();
        assert!(session.is_admin());

        session.logout();
        assert_eq!(session.state(), SessionState::LoggedOut);
    }

    #[test]
    fn register_auto_authenticates_with_user_role() {
        let mut workspace = Workspace::new("Session");
        let mut session = SessionController::new();
        let mut wanted_admin = draft("Jane", "98765432100");
        wanted_admin.role = Role::Admin;

        let person = session.register(&mut workspace, wanted_admin).unwrap();
        assert_eq!(person.role, Role::User);
        match session.state() {
            SessionState::LoggedIn(current) => assert_eq!(current.full_name, "Jane"),
            SessionState::LoggedOut => panic!("registration must auto-login"),
        }
    }

    #[test]
    fn role_gated_views_return_forbidden_for_users() {
        let mut workspace = Workspace::with_bootstrap_admin("Session");
        let mut session = SessionController::new();
        session.register(&mut workspace, draft("Jane", "98765432100")).unwrap();

        assert_eq!(
            session.people(&workspace).expect_err("Users view is gated"),
            CoreError::Forbidden("Users".into())
        );
        assert_eq!(
            session.summary(&workspace).expect_err("Finance view is gated"),
            CoreError::Forbidden("Finance".into())
        );
        assert_eq!(
            session
                .categories(&workspace, CategoryKind::Expense)
                .expect_err("Settings view is gated"),
            CoreError::Forbidden("Settings".into())
        );
        assert!(session.appointments(&workspace).is_ok());
    }

    #[test]
    fn routed_calls_require_a_session() {
        let workspace = Workspace::with_bootstrap_admin("Session");
        let session = SessionController::new();
        assert_eq!(
            session.appointments(&workspace).expect_err("logged out"),
            CoreError::NotLoggedIn
        );
    }

    #[test]
    fn session_holds_a_copy_not_a_live_link() {
        let mut workspace = Workspace::with_bootstrap_admin("Session");
        let mut session = SessionController::new();
        session.login(&workspace, "admin", "admin").unwrap();

        let mut edited = workspace.people[0].clone();
        edited.full_name = "Renamed Admin".into();
        session.save_person(&mut workspace, edited).unwrap();

        assert_eq!(session.current().unwrap().full_name, "Admin User");
        assert_eq!(workspace.people[0].full_name, "Renamed Admin");
    }
}
