use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::attendance::{AttendanceEvent, OvertimeRequest, OVERTIME_PENDING};
use crate::models::booking::{Booking, CreateBookingRequest, STATUS_CONFIRMED};
use crate::models::business::{Business, DEFAULT_TIMEZONE};
use crate::models::faq::{default_faqs, Faq};
use crate::models::lead::{CreateLeadRequest, Lead};
use crate::models::staff::{CreateStaffRequest, Staff, ROLE_STAFF};

/// In-memory backing store. Every read is filtered by business id;
/// entities are append-only apart from status transitions and FAQ
/// replacement. Constructed once in main and injected via AppState so
/// tests can build their own isolated instance.
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    businesses: HashMap<Uuid, Business>,
    staff: Vec<Staff>,
    bookings: Vec<Booking>,
    leads: Vec<Lead>,
    attendance: Vec<AttendanceEvent>,
    overtime: Vec<OvertimeRequest>,
    faqs: HashMap<Uuid, Vec<Faq>>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner::default())),
        }
    }

    /// Creates the business and seeds its default FAQ list under one
    /// write guard, so a business never exists without its FAQs.
    pub async fn create_business(
        &self,
        name: String,
        industry: String,
        timezone: Option<String>,
    ) -> Business {
        let business = Business {
            id: Uuid::new_v4(),
            name,
            industry,
            timezone: timezone.unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
            created_at: Utc::now(),
        };

        let mut inner = self.inner.write().await;
        inner.faqs.insert(business.id, default_faqs());
        inner.businesses.insert(business.id, business.clone());
        business
    }

    pub async fn get_business(&self, id: Uuid) -> Option<Business> {
        let inner = self.inner.read().await;
        inner.businesses.get(&id).cloned()
    }

    pub async fn create_staff(&self, business_id: Uuid, req: CreateStaffRequest) -> Staff {
        let staff = Staff {
            id: Uuid::new_v4(),
            business_id,
            name: req.name,
            national_id: req.national_id,
            pin: req.pin,
            role: req.role.unwrap_or_else(|| ROLE_STAFF.to_string()),
            created_at: Utc::now(),
        };

        let mut inner = self.inner.write().await;
        inner.staff.push(staff.clone());
        staff
    }

    /// First record matching all three credentials wins; duplicates are
    /// allowed at creation time and indistinguishable at login.
    pub async fn find_staff_login(
        &self,
        business_id: Uuid,
        name: &str,
        national_id: &str,
        pin: &str,
    ) -> Option<Staff> {
        let inner = self.inner.read().await;
        inner
            .staff
            .iter()
            .find(|s| {
                s.business_id == business_id
                    && s.name == name
                    && s.national_id == national_id
                    && s.pin == pin
            })
            .cloned()
    }

    pub async fn create_booking(&self, business_id: Uuid, req: CreateBookingRequest) -> Booking {
        let booking = Booking {
            id: Uuid::new_v4(),
            business_id,
            client_name: req.client_name,
            contact: req.contact,
            service: req.service,
            when: req.when,
            staff_id: req.staff_id,
            notes: req.notes,
            status: STATUS_CONFIRMED.to_string(),
            created_at: Utc::now(),
        };

        let mut inner = self.inner.write().await;
        inner.bookings.push(booking.clone());
        booking
    }

    pub async fn list_bookings(&self, business_id: Uuid) -> Vec<Booking> {
        let inner = self.inner.read().await;
        inner
            .bookings
            .iter()
            .filter(|b| b.business_id == business_id)
            .cloned()
            .collect()
    }

    /// Bookings assigned to one staff member, skipping the given status.
    pub async fn staff_agenda(
        &self,
        business_id: Uuid,
        staff_id: Uuid,
        exclude_status: &str,
    ) -> Vec<Booking> {
        let inner = self.inner.read().await;
        inner
            .bookings
            .iter()
            .filter(|b| {
                b.business_id == business_id
                    && b.staff_id == Some(staff_id)
                    && b.status != exclude_status
            })
            .cloned()
            .collect()
    }

    /// Status transition support for bookings. No route exposes this
    /// yet; kept so cancellation can land without a storage change.
    pub async fn set_booking_status(
        &self,
        business_id: Uuid,
        booking_id: Uuid,
        status: &str,
    ) -> Option<Booking> {
        let mut inner = self.inner.write().await;
        let booking = inner
            .bookings
            .iter_mut()
            .find(|b| b.business_id == business_id && b.id == booking_id)?;
        booking.status = status.to_string();
        Some(booking.clone())
    }

    pub async fn create_lead(&self, business_id: Uuid, req: CreateLeadRequest) -> Lead {
        let lead = Lead {
            id: Uuid::new_v4(),
            business_id,
            name: req.name,
            contact: req.contact,
            service: req.service,
            budget: req.budget,
            source: req.source,
            notes: req.notes,
            created_at: Utc::now(),
        };

        let mut inner = self.inner.write().await;
        inner.leads.push(lead.clone());
        lead
    }

    pub async fn list_leads(&self, business_id: Uuid) -> Vec<Lead> {
        let inner = self.inner.read().await;
        inner
            .leads
            .iter()
            .filter(|l| l.business_id == business_id)
            .cloned()
            .collect()
    }

    pub async fn record_attendance(
        &self,
        business_id: Uuid,
        staff_id: Uuid,
        kind: &str,
    ) -> AttendanceEvent {
        let event = AttendanceEvent {
            id: Uuid::new_v4(),
            staff_id,
            business_id,
            kind: kind.to_string(),
            at: Utc::now(),
        };

        let mut inner = self.inner.write().await;
        inner.attendance.push(event.clone());
        event
    }

    pub async fn list_attendance(&self, business_id: Uuid, staff_id: Uuid) -> Vec<AttendanceEvent> {
        let inner = self.inner.read().await;
        inner
            .attendance
            .iter()
            .filter(|e| e.business_id == business_id && e.staff_id == staff_id)
            .cloned()
            .collect()
    }

    pub async fn create_overtime(
        &self,
        business_id: Uuid,
        staff_id: Uuid,
        hours: f64,
        reason: String,
    ) -> OvertimeRequest {
        let request = OvertimeRequest {
            id: Uuid::new_v4(),
            staff_id,
            business_id,
            hours,
            reason,
            status: OVERTIME_PENDING.to_string(),
            created_at: Utc::now(),
        };

        let mut inner = self.inner.write().await;
        inner.overtime.push(request.clone());
        request
    }

    /// Same rationale as set_booking_status: approval routes are not
    /// exposed yet, but the store supports the transition.
    pub async fn set_overtime_status(
        &self,
        business_id: Uuid,
        request_id: Uuid,
        status: &str,
    ) -> Option<OvertimeRequest> {
        let mut inner = self.inner.write().await;
        let request = inner
            .overtime
            .iter_mut()
            .find(|o| o.business_id == business_id && o.id == request_id)?;
        request.status = status.to_string();
        Some(request.clone())
    }

    pub async fn list_overtime(&self, business_id: Uuid, staff_id: Uuid) -> Vec<OvertimeRequest> {
        let inner = self.inner.read().await;
        inner
            .overtime
            .iter()
            .filter(|o| o.business_id == business_id && o.staff_id == staff_id)
            .cloned()
            .collect()
    }

    pub async fn list_faqs(&self, business_id: Uuid) -> Vec<Faq> {
        let inner = self.inner.read().await;
        inner.faqs.get(&business_id).cloned().unwrap_or_default()
    }

    /// Full overwrite, not a merge.
    pub async fn replace_faqs(&self, business_id: Uuid, items: Vec<Faq>) -> Vec<Faq> {
        let mut inner = self.inner.write().await;
        inner.faqs.insert(business_id, items.clone());
        items
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::STATUS_CANCELLED;

    fn booking_req(client: &str, staff_id: Option<Uuid>) -> CreateBookingRequest {
        CreateBookingRequest {
            client_name: client.to_string(),
            contact: "082 000 0000".to_string(),
            service: "Haircut".to_string(),
            when: "2026-09-01T10:00".to_string(),
            staff_id,
            notes: None,
        }
    }

    fn staff_req(name: &str, national_id: &str, pin: &str) -> CreateStaffRequest {
        CreateStaffRequest {
            name: name.to_string(),
            national_id: national_id.to_string(),
            pin: pin.to_string(),
            role: None,
        }
    }

    #[tokio::test]
    async fn tenant_isolation_on_bookings() {
        let store = Store::new();
        let a = store
            .create_business("A".into(), "salon".into(), None)
            .await;
        let b = store
            .create_business("B".into(), "salon".into(), None)
            .await;

        store.create_booking(a.id, booking_req("Thandi", None)).await;
        store.create_booking(a.id, booking_req("Sipho", None)).await;

        assert_eq!(store.list_bookings(a.id).await.len(), 2);
        assert!(store.list_bookings(b.id).await.is_empty());
    }

    #[tokio::test]
    async fn bookings_list_in_insertion_order() {
        let store = Store::new();
        let biz = store
            .create_business("A".into(), "salon".into(), None)
            .await;

        let first = store.create_booking(biz.id, booking_req("One", None)).await;
        let second = store.create_booking(biz.id, booking_req("Two", None)).await;

        let listed = store.list_bookings(biz.id).await;
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);

        // Idempotent: a second read returns the same sequence.
        let again = store.list_bookings(biz.id).await;
        assert_eq!(
            listed.iter().map(|b| b.id).collect::<Vec<_>>(),
            again.iter().map(|b| b.id).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn login_matches_first_duplicate_record() {
        let store = Store::new();
        let biz = store
            .create_business("A".into(), "salon".into(), None)
            .await;

        let first = store
            .create_staff(biz.id, staff_req("Jo", "123", "9999"))
            .await;
        let _second = store
            .create_staff(biz.id, staff_req("Jo", "123", "9999"))
            .await;

        let found = store
            .find_staff_login(biz.id, "Jo", "123", "9999")
            .await
            .unwrap();
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn login_requires_exact_match_on_all_fields() {
        let store = Store::new();
        let biz = store
            .create_business("A".into(), "salon".into(), None)
            .await;
        store
            .create_staff(biz.id, staff_req("Jo", "123", "9999"))
            .await;

        assert!(store.find_staff_login(biz.id, "Jo", "123", "0000").await.is_none());
        assert!(store.find_staff_login(biz.id, "Jo", "124", "9999").await.is_none());
        assert!(store.find_staff_login(biz.id, "Joe", "123", "9999").await.is_none());

        let other = store
            .create_business("B".into(), "salon".into(), None)
            .await;
        assert!(store
            .find_staff_login(other.id, "Jo", "123", "9999")
            .await
            .is_none());
    }

    #[tokio::test]
    async fn agenda_excludes_cancelled_and_other_staff() {
        let store = Store::new();
        let biz = store
            .create_business("A".into(), "salon".into(), None)
            .await;
        let staff = store
            .create_staff(biz.id, staff_req("Jo", "123", "9999"))
            .await;

        let mine = store
            .create_booking(biz.id, booking_req("Keep", Some(staff.id)))
            .await;
        let cancelled = store
            .create_booking(biz.id, booking_req("Gone", Some(staff.id)))
            .await;
        store
            .create_booking(biz.id, booking_req("Unassigned", None))
            .await;

        store
            .set_booking_status(biz.id, cancelled.id, STATUS_CANCELLED)
            .await
            .unwrap();

        let agenda = store.staff_agenda(biz.id, staff.id, STATUS_CANCELLED).await;
        assert_eq!(agenda.len(), 1);
        assert_eq!(agenda[0].id, mine.id);
    }

    #[tokio::test]
    async fn booking_status_update_is_tenant_scoped() {
        let store = Store::new();
        let a = store
            .create_business("A".into(), "salon".into(), None)
            .await;
        let b = store
            .create_business("B".into(), "salon".into(), None)
            .await;
        let booking = store.create_booking(a.id, booking_req("X", None)).await;

        // Wrong tenant cannot touch it.
        assert!(store
            .set_booking_status(b.id, booking.id, STATUS_CANCELLED)
            .await
            .is_none());

        let updated = store
            .set_booking_status(a.id, booking.id, STATUS_CANCELLED)
            .await
            .unwrap();
        assert_eq!(updated.status, STATUS_CANCELLED);
    }

    #[tokio::test]
    async fn attendance_log_appends_without_pairing() {
        let store = Store::new();
        let biz = store
            .create_business("A".into(), "salon".into(), None)
            .await;
        let staff = store
            .create_staff(biz.id, staff_req("Jo", "123", "9999"))
            .await;

        // Two clock-ins in a row are recorded as-is.
        store.record_attendance(biz.id, staff.id, "in").await;
        store.record_attendance(biz.id, staff.id, "in").await;
        store.record_attendance(biz.id, staff.id, "out").await;

        let log = store.list_attendance(biz.id, staff.id).await;
        assert_eq!(log.len(), 3);
        assert_eq!(log[0].kind, "in");
        assert_eq!(log[2].kind, "out");

        let other = store
            .create_staff(biz.id, staff_req("Zan", "456", "1111"))
            .await;
        assert!(store.list_attendance(biz.id, other.id).await.is_empty());
    }

    #[tokio::test]
    async fn leads_are_tenant_scoped() {
        let store = Store::new();
        let a = store
            .create_business("A".into(), "salon".into(), None)
            .await;
        let b = store
            .create_business("B".into(), "salon".into(), None)
            .await;

        store
            .create_lead(
                a.id,
                CreateLeadRequest {
                    name: "Nandi".to_string(),
                    contact: "082 000 0001".to_string(),
                    service: Some("Braids".to_string()),
                    budget: Some(350.0),
                    source: Some("walk-in".to_string()),
                    notes: None,
                },
            )
            .await;

        assert_eq!(store.list_leads(a.id).await.len(), 1);
        assert!(store.list_leads(b.id).await.is_empty());
    }

    #[tokio::test]
    async fn overtime_starts_pending_and_can_transition() {
        let store = Store::new();
        let biz = store
            .create_business("A".into(), "salon".into(), None)
            .await;
        let staff = store
            .create_staff(biz.id, staff_req("Jo", "123", "9999"))
            .await;

        let ot = store
            .create_overtime(biz.id, staff.id, 2.5, "stock take".into())
            .await;
        assert_eq!(ot.status, OVERTIME_PENDING);

        let approved = store
            .set_overtime_status(biz.id, ot.id, "approved")
            .await
            .unwrap();
        assert_eq!(approved.status, "approved");

        let listed = store.list_overtime(biz.id, staff.id).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].status, "approved");
    }

    #[tokio::test]
    async fn new_business_gets_seeded_faqs_and_replace_overwrites() {
        let store = Store::new();
        let biz = store
            .create_business("A".into(), "salon".into(), None)
            .await;

        assert_eq!(store.list_faqs(biz.id).await.len(), 2);

        let replacement = vec![Faq {
            q: "Do you take cards?".to_string(),
            a: "Yes, and SnapScan.".to_string(),
        }];
        store.replace_faqs(biz.id, replacement).await;

        let faqs = store.list_faqs(biz.id).await;
        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].q, "Do you take cards?");
    }
}
