//! Validation guards.
//!
//! Stateless guard functions, one per field or record, each raising
//! [`MobitrackError::InvalidInput`] with a fixed, field-specific message.
//! Guards run before any store access and have no other side effects.

use crate::domain::{Admin, Organization};
use crate::{MobitrackError, MobitrackResult};

/// Message raised for a blank id.
pub const ID_BLANK: &str = "id must not be blank";
/// Message raised for a blank email.
pub const EMAIL_BLANK: &str = "email must not be blank";
/// Message raised for a blank first name.
pub const FIRST_NAME_BLANK: &str = "first name must not be blank";
/// Message raised for a blank last name.
pub const LAST_NAME_BLANK: &str = "last name must not be blank";
/// Message raised for a blank organization id.
pub const ORGANIZATION_ID_BLANK: &str = "organization id must not be blank";
/// Message raised for a blank organization name.
pub const NAME_BLANK: &str = "name must not be blank";
/// Message raised for a missing admin record.
pub const ADMIN_RECORD_NULL: &str = "admin record must not be null";
/// Message raised for a missing organization record.
pub const ORGANIZATION_RECORD_NULL: &str = "organization record must not be null";

/// Fails with `message` when `value` is empty or whitespace-only.
pub fn not_blank(value: &str, message: &'static str) -> MobitrackResult<()> {
    if value.trim().is_empty() {
        return Err(MobitrackError::invalid_input(message));
    }
    Ok(())
}

/// Presence guard for optional aggregates.
///
/// The aggregate must exist before its fields can be checked, so callers
/// holding an `Option<_>` payload run this first and feed the returned
/// reference into the field guards. DAO methods take the record by
/// reference directly, where absence is unrepresentable.
pub fn require_record<'a, T>(record: Option<&'a T>, message: &'static str) -> MobitrackResult<&'a T> {
    record.ok_or_else(|| MobitrackError::invalid_input(message))
}

/// Field guards for an admin about to be created.
///
/// The caller-supplied id is ignored on create, so it is not checked here.
pub fn admin_for_create(record: &Admin) -> MobitrackResult<()> {
    not_blank(&record.email, EMAIL_BLANK)?;
    not_blank(&record.first_name, FIRST_NAME_BLANK)?;
    not_blank(&record.last_name, LAST_NAME_BLANK)?;
    not_blank(&record.organization_id, ORGANIZATION_ID_BLANK)
}

/// Field guards for an admin about to be updated. Also requires the id.
pub fn admin_for_update(record: &Admin) -> MobitrackResult<()> {
    not_blank(&record.id, ID_BLANK)?;
    admin_for_create(record)
}

/// Field guards for an organization about to be created.
pub fn organization_for_create(record: &Organization) -> MobitrackResult<()> {
    not_blank(&record.name, NAME_BLANK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(err: MobitrackError) -> String {
        match err {
            MobitrackError::InvalidInput(message) => message,
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello", ID_BLANK).is_ok());
        assert!(not_blank("", ID_BLANK).is_err());
        assert!(not_blank("   ", ID_BLANK).is_err());
        assert!(not_blank("\t\n", ID_BLANK).is_err());
    }

    #[test]
    fn test_not_blank_carries_fixed_message() {
        let err = not_blank("", EMAIL_BLANK).unwrap_err();
        assert_eq!(message_of(err), EMAIL_BLANK);
    }

    #[test]
    fn test_require_record_absent() {
        let err = require_record::<Admin>(None, ADMIN_RECORD_NULL).unwrap_err();
        assert_eq!(message_of(err), ADMIN_RECORD_NULL);
    }

    #[test]
    fn test_require_record_present() {
        let admin = Admin::new("a@x.com", "John", "Smith", "org-1");
        let passed = require_record(Some(&admin), ADMIN_RECORD_NULL).unwrap();
        assert_eq!(passed.email, "a@x.com");
    }

    #[test]
    fn test_admin_for_create_happy() {
        let admin = Admin::new("a@x.com", "John", "Smith", "org-1");
        assert!(admin_for_create(&admin).is_ok());
    }

    #[test]
    fn test_admin_for_create_checks_fields_in_order() {
        // Every field blank: the email guard fires first.
        let admin = Admin::new("", "", "", "");
        let err = admin_for_create(&admin).unwrap_err();
        assert_eq!(message_of(err), EMAIL_BLANK);
    }

    #[test]
    fn test_admin_for_create_per_field_messages() {
        let cases = [
            (Admin::new("", "John", "Smith", "org-1"), EMAIL_BLANK),
            (Admin::new("a@x.com", " ", "Smith", "org-1"), FIRST_NAME_BLANK),
            (Admin::new("a@x.com", "John", "", "org-1"), LAST_NAME_BLANK),
            (Admin::new("a@x.com", "John", "Smith", ""), ORGANIZATION_ID_BLANK),
        ];
        for (admin, expected) in cases {
            let err = admin_for_create(&admin).unwrap_err();
            assert_eq!(message_of(err), expected);
        }
    }

    #[test]
    fn test_admin_for_update_requires_id_first() {
        let admin = Admin::new("a@x.com", "John", "Smith", "org-1");
        let err = admin_for_update(&admin).unwrap_err();
        assert_eq!(message_of(err), ID_BLANK);
    }

    #[test]
    fn test_admin_for_update_happy() {
        let mut admin = Admin::new("a@x.com", "John", "Smith", "org-1");
        admin.id = "admin-1".to_string();
        assert!(admin_for_update(&admin).is_ok());
    }

    #[test]
    fn test_organization_for_create() {
        assert!(organization_for_create(&Organization::new("Clinic")).is_ok());
        let err = organization_for_create(&Organization::new("  ")).unwrap_err();
        assert_eq!(message_of(err), NAME_BLANK);
    }
}
