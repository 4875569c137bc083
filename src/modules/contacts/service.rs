use tracing::{debug, instrument};

use crate::store::PortalStore;
use parentportal_core::AppError;

use super::model::ContactLookup;

pub struct ContactService;

impl ContactService {
    /// Resolves a phone number to its inquiry and that inquiry's students.
    ///
    /// The phone must match the stored value exactly. `Ok(None)` means no
    /// inquiry has that phone; an inquiry without students is still `Some`.
    #[instrument(skip(store))]
    pub async fn find_inquiry_by_contact_phone(
        store: &dyn PortalStore,
        contact_phone: &str,
    ) -> Result<Option<ContactLookup>, AppError> {
        let Some(inquiry) = store.find_inquiry_by_phone(contact_phone).await? else {
            debug!("No inquiry for contact phone");
            return Ok(None);
        };

        let students = store.students_for_inquiry(inquiry.inquiry_id).await?;
        debug!(inquiry_id = %inquiry.inquiry_id, students = students.len(), "Resolved contact phone");

        Ok(Some(ContactLookup { inquiry, students }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use parentportal_models::{Inquiry, InquiryId, Student, StudentId};

    fn inquiry(id: i32, phone: &str) -> Inquiry {
        Inquiry {
            inquiry_id: InquiryId(id),
            email: Some(format!("parent{id}@example.com")),
            contact_phone: Some(phone.to_string()),
        }
    }

    fn student(id: i32, first: &str) -> Student {
        Student {
            id: StudentId(id),
            first_name: first.to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_inquiry(inquiry(7, "555-0100"))
            .with_inquiry(inquiry(8, "555-0199"))
            .with_student(InquiryId(7), student(11, "Ada"))
            .with_student(InquiryId(8), student(21, "Byron"))
            .with_student(InquiryId(7), student(12, "Anne"))
    }

    #[tokio::test]
    async fn test_returns_inquiry_and_its_students() {
        let lookup = ContactService::find_inquiry_by_contact_phone(&store(), "555-0100")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(lookup.inquiry.inquiry_id, InquiryId(7));
        let ids: Vec<_> = lookup.students.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![StudentId(11), StudentId(12)]);
    }

    #[tokio::test]
    async fn test_unknown_phone_is_not_found() {
        let lookup = ContactService::find_inquiry_by_contact_phone(&store(), "555-0000")
            .await
            .unwrap();
        assert!(lookup.is_none());
    }

    #[tokio::test]
    async fn test_phone_match_is_exact() {
        let lookup = ContactService::find_inquiry_by_contact_phone(&store(), "5550100")
            .await
            .unwrap();
        assert!(lookup.is_none());
    }

    #[tokio::test]
    async fn test_inquiry_without_students_is_found() {
        let store = MemoryStore::new().with_inquiry(inquiry(9, "555-0142"));

        let lookup = ContactService::find_inquiry_by_contact_phone(&store, "555-0142")
            .await
            .unwrap()
            .unwrap();

        assert!(lookup.students.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let result =
            ContactService::find_inquiry_by_contact_phone(&store().failing_contacts(), "555-0100")
                .await;
        assert!(result.is_err());
    }
}
