//! Form state controller
//!
//! Owns the registration draft, per-field dirty/validation status, and the
//! wizard step. All transitions are synchronous; the controller has exactly
//! one writer (the active UI session) and performs no IO.

use crate::draft::{FieldId, RegistrationDraft, Role};
use crate::notify::{Notice, NoticeQueue};
use crate::schema::{FieldStatus, Schema};
use tracing::{debug, info};

/// Wizard step. Two pages only; illegal steps are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    /// Step 0: username, email, phone, role
    #[default]
    Profile,
    /// Step 1: password, confirm password
    Credentials,
}

impl WizardStep {
    /// Number of wizard steps
    pub const COUNT: usize = 2;

    /// Zero-based step index
    pub fn index(self) -> usize {
        match self {
            WizardStep::Profile => 0,
            WizardStep::Credentials => 1,
        }
    }

    /// Fields shown on this step
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            WizardStep::Profile => &[
                FieldId::Username,
                FieldId::Email,
                FieldId::Phone,
                FieldId::Role,
            ],
            WizardStep::Credentials => &[FieldId::Password, FieldId::ConfirmPassword],
        }
    }
}

/// Per-field bookkeeping derived from the schema
#[derive(Debug, Clone, Copy)]
pub struct FieldState {
    /// Touched at least once
    pub dirty: bool,
    /// Latest validation outcome
    pub status: FieldStatus,
}

impl FieldState {
    /// A field blocks step advancement unless it is both dirty and valid
    pub fn blocks_advance(&self) -> bool {
        !self.dirty || !self.status.is_valid()
    }

    /// Inline message to display, shown only once the field is dirty
    pub fn visible_message(&self) -> Option<&'static str> {
        if self.dirty { self.status.message_key() } else { None }
    }
}

/// The form state controller
#[derive(Debug)]
pub struct FormController {
    draft: RegistrationDraft,
    schema: Schema,
    step: WizardStep,
    fields: [FieldState; FieldId::COUNT],
    notices: NoticeQueue,
}

impl FormController {
    /// Fresh controller: empty draft, all fields pristine, step Profile
    pub fn new() -> Self {
        let schema = Schema::registration();
        let draft = RegistrationDraft::default();
        let fields = std::array::from_fn(|index| {
            let field = FieldId::all()[index];
            FieldState {
                dirty: false,
                status: schema.validate(field, draft.field_text(field)),
            }
        });
        Self {
            draft,
            schema,
            step: WizardStep::default(),
            fields,
            notices: NoticeQueue::default(),
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn field_state(&self, field: FieldId) -> FieldState {
        self.fields[field.index()]
    }

    /// Update a field value, mark it dirty, and eagerly revalidate it.
    /// No side effect beyond local state.
    pub fn set_field(&mut self, field: FieldId, value: &str) {
        match field {
            FieldId::Username => self.draft.username = value.to_string(),
            FieldId::Email => self.draft.email = value.to_string(),
            FieldId::Phone => self.draft.phone = value.to_string(),
            FieldId::Role => self.draft.role = Role::parse(value),
            FieldId::Password => self.draft.password = value.to_string(),
            FieldId::ConfirmPassword => self.draft.confirm_password = value.to_string(),
        }
        let status = self.schema.validate(field, self.draft.field_text(field));
        self.fields[field.index()] = FieldState {
            dirty: true,
            status,
        };
        debug!(?field, valid = status.is_valid(), "field value updated");
    }

    /// Advance Profile -> Credentials when every profile field is dirty and
    /// valid. Anything less is a silent no-op: no message is surfaced and
    /// untouched fields stay pristine. Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        for &field in WizardStep::Profile.fields() {
            let status = self.schema.validate(field, self.draft.field_text(field));
            self.fields[field.index()].status = status;
            if self.fields[field.index()].blocks_advance() {
                debug!(?field, "step advance suppressed");
                return false;
            }
        }
        self.step = WizardStep::Credentials;
        info!("advanced to credentials step");
        true
    }

    /// Unconditionally return to the profile step
    pub fn retreat(&mut self) {
        self.step = WizardStep::Profile;
    }

    /// Finalize the draft, or queue the mismatch notice and abort.
    ///
    /// The equality check is the only cross-field rule and runs here only,
    /// never continuously. Finalizing returns a snapshot of the collected
    /// values; the form stays mounted and editable either way.
    pub fn submit(&mut self) -> Option<RegistrationDraft> {
        if self.draft.password != self.draft.confirm_password {
            self.notices.push(Notice::error("notice_password_mismatch"));
            info!("submission rejected: password mismatch");
            return None;
        }
        info!(username = %self.draft.username, "registration finalized");
        Some(self.draft.clone())
    }

    /// Drain the next pending notification, if any
    pub fn poll_notice(&mut self) -> Option<Notice> {
        self.notices.pop()
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Severity;
    use std::time::Duration;

    fn fill_profile(form: &mut FormController) {
        form.set_field(FieldId::Username, "홍길동");
        form.set_field(FieldId::Email, "a@b.com");
        form.set_field(FieldId::Phone, "01000000000");
        form.set_field(FieldId::Role, "user");
    }

    #[test]
    fn test_starts_on_profile_with_pristine_fields() {
        let form = FormController::new();
        assert_eq!(form.step(), WizardStep::Profile);
        for field in FieldId::all() {
            let state = form.field_state(*field);
            assert!(!state.dirty);
            assert!(!state.status.is_valid());
            // pristine fields never show their message
            assert_eq!(state.visible_message(), None);
        }
    }

    #[test]
    fn test_set_field_marks_dirty_and_revalidates() {
        let mut form = FormController::new();
        form.set_field(FieldId::Email, "abc");
        let state = form.field_state(FieldId::Email);
        assert!(state.dirty);
        assert_eq!(state.visible_message(), Some("msg_email_invalid"));

        form.set_field(FieldId::Email, "a@b.com");
        let state = form.field_state(FieldId::Email);
        assert!(state.status.is_valid());
        assert_eq!(state.visible_message(), None);
    }

    #[test]
    fn test_advance_noop_when_untouched() {
        let mut form = FormController::new();
        assert!(!form.advance());
        assert_eq!(form.step(), WizardStep::Profile);
        // still silent: no field was marked dirty by the attempt
        for field in WizardStep::Profile.fields() {
            assert_eq!(form.field_state(*field).visible_message(), None);
        }
    }

    #[test]
    fn test_advance_noop_when_one_field_invalid() {
        let mut form = FormController::new();
        fill_profile(&mut form);
        form.set_field(FieldId::Email, "abc");
        assert!(!form.advance());
        assert_eq!(form.step(), WizardStep::Profile);
    }

    #[test]
    fn test_advance_noop_when_touched_but_emptied() {
        let mut form = FormController::new();
        fill_profile(&mut form);
        form.set_field(FieldId::Phone, "");
        assert!(!form.advance());
        assert_eq!(form.step(), WizardStep::Profile);
    }

    #[test]
    fn test_advance_when_profile_complete() {
        let mut form = FormController::new();
        fill_profile(&mut form);
        assert!(form.advance());
        assert_eq!(form.step(), WizardStep::Credentials);
    }

    #[test]
    fn test_retreat_is_unconditional_and_reenterable() {
        let mut form = FormController::new();
        form.retreat();
        assert_eq!(form.step(), WizardStep::Profile);

        fill_profile(&mut form);
        assert!(form.advance());
        form.retreat();
        assert_eq!(form.step(), WizardStep::Profile);

        // both states stay reachable
        assert!(form.advance());
        assert_eq!(form.step(), WizardStep::Credentials);
    }

    #[test]
    fn test_submit_mismatch_notifies_and_aborts() {
        let mut form = FormController::new();
        fill_profile(&mut form);
        form.advance();
        form.set_field(FieldId::Password, "x");
        form.set_field(FieldId::ConfirmPassword, "y");

        assert_eq!(form.submit(), None);

        let notice = form.poll_notice().expect("mismatch queues a notice");
        assert_eq!(notice.title_key, "notice_password_mismatch");
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.duration, Duration::from_millis(1000));
        assert_eq!(form.poll_notice(), None);

        // form stays on the credentials step and remains editable
        assert_eq!(form.step(), WizardStep::Credentials);
        form.set_field(FieldId::ConfirmPassword, "x");
        assert!(form.submit().is_some());
    }

    #[test]
    fn test_submit_finalizes_exact_values() {
        let mut form = FormController::new();
        fill_profile(&mut form);
        form.advance();
        form.set_field(FieldId::Password, "x");
        form.set_field(FieldId::ConfirmPassword, "x");

        let draft = form.submit().expect("matching passwords finalize");
        assert_eq!(draft.username, "홍길동");
        assert_eq!(draft.email, "a@b.com");
        assert_eq!(draft.phone, "01000000000");
        assert_eq!(draft.role, Some(Role::User));
        assert_eq!(draft.password, "x");
        assert_eq!(draft.confirm_password, "x");
        assert_eq!(form.poll_notice(), None);

        // submission is not a terminal state
        assert_eq!(form.step(), WizardStep::Credentials);
    }

    #[test]
    fn test_invalid_role_text_clears_selection() {
        let mut form = FormController::new();
        form.set_field(FieldId::Role, "admin");
        assert_eq!(form.draft().role, Some(Role::Admin));

        form.set_field(FieldId::Role, "bogus");
        assert_eq!(form.draft().role, None);
        assert_eq!(
            form.field_state(FieldId::Role).visible_message(),
            Some("msg_role_required")
        );
    }
}
