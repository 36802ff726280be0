//! Business logic helpers for the identity store.

use uuid::Uuid;

use crate::core::credentials::CredentialVerifier;
use crate::core::services::{CoreError, ServiceResult};
use crate::domain::person::{Person, Role};
use crate::workspace::Workspace;

/// Provides validated CRUD and authentication helpers for [`Person`]
/// records.
pub struct IdentityService;

impl IdentityService {
    /// Finds the first person matching the login key whose stored secret
    /// verifies against `secret`. No lockout or rate limiting.
    pub fn authenticate(
        workspace: &Workspace,
        login_id: &str,
        secret: &str,
        verifier: &dyn CredentialVerifier,
    ) -> ServiceResult<Person> {
        workspace
            .people
            .iter()
            .find(|person| person.national_id == login_id && verifier.verify(person, secret))
            .cloned()
            .ok_or(CoreError::InvalidCredentials)
    }

    /// Upserts a person record by identifier.
    ///
    /// On an edit with an empty incoming secret, the stored secret is kept
    /// so an edit-without-password-change never wipes credentials.
    pub fn save(workspace: &mut Workspace, mut person: Person) -> ServiceResult<Person> {
        let existing_secret = workspace
            .person(person.id)
            .map(|stored| stored.secret.clone());
        Self::validate(&person, existing_secret.is_none())?;

        match workspace
            .people
            .iter_mut()
            .find(|stored| stored.id == person.id)
        {
            Some(stored) => {
                if person.secret.is_empty() {
                    person.secret = existing_secret.unwrap_or_default();
                }
                *stored = person.clone();
            }
            None => workspace.people.push(person.clone()),
        }
        workspace.touch();
        Ok(person)
    }

    /// Self-registration: validates like a create, then forces the role to
    /// [`Role::User`] regardless of what the draft requested.
    pub fn register(workspace: &mut Workspace, mut draft: Person) -> ServiceResult<Person> {
        draft.role = Role::User;
        Self::validate(&draft, true)?;
        workspace.people.push(draft.clone());
        workspace.touch();
        Ok(draft)
    }

    /// Removes the person with `id`. Missing ids are a no-op; appointments
    /// and transactions referencing the removed person are left in place.
    pub fn remove(workspace: &mut Workspace, id: Uuid) {
        workspace.people.retain(|person| person.id != id);
        workspace.touch();
    }

    /// Returns a view of all people.
    pub fn list(workspace: &Workspace) -> &[Person] {
        &workspace.people
    }

    fn validate(person: &Person, is_create: bool) -> ServiceResult<()> {
        let mut missing = Vec::new();
        if person.full_name.trim().is_empty() {
            missing.push("full_name");
        }
        if person.national_id.trim().is_empty() {
            missing.push("national_id");
        }
        if person.date_of_birth.trim().is_empty() {
            missing.push("date_of_birth");
        }
        if person.phone.trim().is_empty() {
            missing.push("phone");
        }
        if is_create && person.secret.is_empty() {
            missing.push("secret");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::validation(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::credentials::PlaintextVerifier;

    fn sample_person(name: &str, login: &str, secret: &str, role: Role) -> Person {
        let mut person = Person::new(name, login, role).with_secret(secret);
        person.date_of_birth = "010190".into();
        person.phone = "555-0000".into();
        person
    }

    #[test]
    fn authenticate_matches_exact_pair_only() {
        let mut workspace = Workspace::new("Identity");
        IdentityService::save(
            &mut workspace,
            sample_person("Alice", "11122233344", "hunter2", Role::User),
        )
        .unwrap();

        let person =
            IdentityService::authenticate(&workspace, "11122233344", "hunter2", &PlaintextVerifier)
                .expect("valid pair authenticates");
        assert_eq!(person.full_name, "Alice");

        let err =
            IdentityService::authenticate(&workspace, "11122233344", "wrong", &PlaintextVerifier)
                .expect_err("wrong secret fails");
        assert_eq!(err, CoreError::InvalidCredentials);
    }

    #[test]
    fn save_preserves_secret_when_blank_on_edit() {
        let mut workspace = Workspace::new("Identity");
        let person = sample_person("Bob", "22233344455", "original", Role::User);
        let id = person.id;
        IdentityService::save(&mut workspace, person).unwrap();

        let mut edit = workspace.person(id).unwrap().clone();
        edit.full_name = "Bob Updated".into();
        edit.secret = String::new();
        IdentityService::save(&mut workspace, edit).unwrap();

        let stored = workspace.person(id).unwrap();
        assert_eq!(stored.full_name, "Bob Updated");
        assert_eq!(stored.secret, "original");
    }

    #[test]
    fn register_forces_user_role() {
        let mut workspace = Workspace::new("Identity");
        let draft = sample_person("Mallory", "33344455566", "pw", Role::Admin);
        let saved = IdentityService::register(&mut workspace, draft).unwrap();
        assert_eq!(saved.role, Role::User);
    }

    #[test]
    fn save_rejects_missing_required_fields() {
        let mut workspace = Workspace::new("Identity");
        let mut draft = Person::new("", "", Role::User);
        draft.secret = String::new();
        let err = IdentityService::save(&mut workspace, draft).expect_err("must fail");
        match err {
            CoreError::Validation { fields } => {
                assert_eq!(
                    fields,
                    vec!["full_name", "national_id", "date_of_birth", "phone", "secret"]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn remove_is_a_noop_for_missing_id() {
        let mut workspace = Workspace::new("Identity");
        IdentityService::save(
            &mut workspace,
            sample_person("Carol", "44455566677", "pw", Role::User),
        )
        .unwrap();
        IdentityService::remove(&mut workspace, Uuid::new_v4());
        assert_eq!(workspace.people.len(), 1);
    }
}
