//! Business logic helpers for the appointment ledger.

use uuid::Uuid;

use crate::core::services::{CoreError, ServiceResult};
use crate::domain::appointment::{is_canonical_slot, Appointment};
use crate::domain::person::Person;
use crate::workspace::Workspace;

/// Provides validated CRUD helpers for [`Appointment`] records.
pub struct AppointmentService;

impl AppointmentService {
    /// Upserts an appointment by identifier.
    ///
    /// On creation the owner fields are forced from `actor`: a person may
    /// only create appointments for themselves. Edits replace the stored
    /// record whole and leave the owner fields as the draft carries them.
    pub fn save(
        workspace: &mut Workspace,
        mut appointment: Appointment,
        actor: &Person,
    ) -> ServiceResult<Appointment> {
        Self::validate(&appointment)?;

        match workspace
            .appointments
            .iter_mut()
            .find(|stored| stored.id == appointment.id)
        {
            Some(stored) => {
                *stored = appointment.clone();
            }
            None => {
                appointment.owner_id = actor.id;
                appointment.owner_name = actor.full_name.clone();
                workspace.appointments.push(appointment.clone());
            }
        }
        workspace.touch();
        Ok(appointment)
    }

    /// Removes the appointment with `id`. Missing ids are a no-op.
    pub fn remove(workspace: &mut Workspace, id: Uuid) {
        workspace.appointments.retain(|apt| apt.id != id);
        workspace.touch();
    }

    /// Returns the appointments `actor` may see: everything for an admin,
    /// own records only otherwise. The filter is a read-time projection.
    pub fn list_visible<'a>(workspace: &'a Workspace, actor: &Person) -> Vec<&'a Appointment> {
        workspace
            .appointments
            .iter()
            .filter(|apt| actor.is_admin() || apt.owner_id == actor.id)
            .collect()
    }

    fn validate(appointment: &Appointment) -> ServiceResult<()> {
        let mut missing = Vec::new();
        if appointment.title.trim().is_empty() {
            missing.push("title");
        }
        if appointment.date.trim().is_empty() {
            missing.push("date");
        }
        if appointment.time.trim().is_empty() || !is_canonical_slot(&appointment.time) {
            missing.push("time");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::validation(missing))
        }
    }
}
