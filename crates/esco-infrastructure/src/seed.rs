//! The firm's seeded demo dataset.
//!
//! The hosted portal ships with a fixed set of staff, CRM clients, work
//! items, appointments, and invoices. The `with_seed` repository
//! constructors start from these records.

use esco_core::appointment::{Appointment, AppointmentStatus};
use esco_core::client::{Client, ClientStatus};
use esco_core::invoice::{Invoice, InvoiceStatus};
use esco_core::staff::{StaffMember, StaffStatus};
use esco_core::todo::{Priority, TodoItem};

pub fn seed_staff() -> Vec<StaffMember> {
    vec![
        StaffMember {
            id: "jared".to_string(),
            name: "Jared Escobar".to_string(),
            title: "Power User".to_string(),
            email: "admin@esco.cpa".to_string(),
            status: StaffStatus::Active,
        },
        StaffMember {
            id: "cynthia".to_string(),
            name: "Cynthia Lozano".to_string(),
            title: "Staff (Tax)".to_string(),
            email: "cynthia@esco.cpa".to_string(),
            status: StaffStatus::Active,
        },
        StaffMember {
            id: "guadalupe".to_string(),
            name: "Guadalupe Escobar".to_string(),
            title: "Staff (Accounting)".to_string(),
            email: "guadalupe@esco.cpa".to_string(),
            status: StaffStatus::Active,
        },
    ]
}

pub fn seed_clients() -> Vec<Client> {
    vec![
        Client {
            id: "client-1".to_string(),
            contact_person: "Alice Smith".to_string(),
            company_name: "Acme Solutions Inc.".to_string(),
            status: ClientStatus::Active,
            email: "alice@acmesolutions.com".to_string(),
            phone: "(915) 555-0123".to_string(),
            personal_address: "4529 Coolidge Dr, El Paso, TX 79924".to_string(),
            company_address: "1200 Airway Blvd, Suite 10, El Paso, TX 79925".to_string(),
            assigned_to: Some("jared".to_string()),
        },
        Client {
            id: "client-2".to_string(),
            contact_person: "Jane Doe".to_string(),
            company_name: "N/A (Individual)".to_string(),
            status: ClientStatus::Active,
            email: "jane.doe@email.com".to_string(),
            phone: "(915) 555-0199".to_string(),
            personal_address: "8821 Gazelle Dr, El Paso, TX 79925".to_string(),
            company_address: "N/A".to_string(),
            assigned_to: Some("cynthia".to_string()),
        },
        Client {
            id: "client-3".to_string(),
            contact_person: "Robert Martinez".to_string(),
            company_name: "QuickMart LLC".to_string(),
            status: ClientStatus::Inactive,
            email: "robert@quickmart.com".to_string(),
            phone: "(915) 555-0888".to_string(),
            personal_address: "10101 Montwood Dr, El Paso, TX 79935".to_string(),
            company_address: "3030 Zaragoza Rd, El Paso, TX 79938".to_string(),
            assigned_to: Some("guadalupe".to_string()),
        },
        Client {
            id: "client-4".to_string(),
            contact_person: "Sarah Lee".to_string(),
            company_name: "West Side Eatery".to_string(),
            status: ClientStatus::Active,
            email: "sarah@westsideoats.com".to_string(),
            phone: "(915) 555-0777".to_string(),
            personal_address: "500 Mesa St, El Paso, TX 79901".to_string(),
            company_address: "700 N Mesa St, El Paso, TX 79902".to_string(),
            assigned_to: Some("cynthia".to_string()),
        },
    ]
}

pub fn seed_todos() -> Vec<TodoItem> {
    vec![
        TodoItem {
            id: 1,
            client_id: Some("client-1".to_string()),
            task: "Review Q3 financials for Acme Solutions".to_string(),
            priority: Priority::High,
            done: false,
            assigned_to: None,
        },
        TodoItem {
            id: 2,
            client_id: Some("client-2".to_string()),
            task: "Confirm W-2 receipt from Jane Doe".to_string(),
            priority: Priority::Medium,
            done: false,
            assigned_to: Some("cynthia".to_string()),
        },
        TodoItem {
            id: 3,
            client_id: Some("client-3".to_string()),
            task: "Send late payment notice to QuickMart LLC".to_string(),
            priority: Priority::High,
            done: false,
            assigned_to: None,
        },
        TodoItem {
            id: 4,
            client_id: None,
            task: "Schedule internal training on new tax codes".to_string(),
            priority: Priority::Low,
            done: true,
            assigned_to: Some("jared".to_string()),
        },
    ]
}

pub fn seed_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: 1,
            date_time: "2025-01-15T10:00:00".to_string(),
            client_text: "Alice Smith (Acme Solutions)".to_string(),
            assigned_to: "jared".to_string(),
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: 2,
            date_time: "2025-01-16T14:30:00".to_string(),
            client_text: "Robert Martinez (QuickMart LLC)".to_string(),
            assigned_to: "cynthia".to_string(),
            status: AppointmentStatus::Confirmed,
        },
        Appointment {
            id: 3,
            date_time: "2025-02-01T09:00:00".to_string(),
            client_text: "Jane Doe (Individual)".to_string(),
            assigned_to: "guadalupe".to_string(),
            status: AppointmentStatus::Scheduled,
        },
    ]
}

pub fn seed_invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "inv-001".to_string(),
            client: "Acme Solutions Inc.".to_string(),
            date: "10/20/2024".to_string(),
            amount: 750.00,
            status: InvoiceStatus::Outstanding,
        },
        Invoice {
            id: "inv-002".to_string(),
            client: "Jane Doe".to_string(),
            date: "11/05/2024".to_string(),
            amount: 350.00,
            status: InvoiceStatus::Paid,
        },
        Invoice {
            id: "inv-003".to_string(),
            client: "QuickMart LLC".to_string(),
            date: "09/15/2024".to_string(),
            amount: 1200.00,
            status: InvoiceStatus::Outstanding,
        },
        Invoice {
            id: "inv-004".to_string(),
            client: "Acme Solutions Inc.".to_string(),
            date: "08/01/2024".to_string(),
            amount: 600.00,
            status: InvoiceStatus::Paid,
        },
    ]
}
