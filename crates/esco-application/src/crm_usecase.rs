//! Firm CRM operations.
//!
//! `CrmUseCase` carries the admin- and portal-side operations over the
//! firm's in-memory repositories: to-do assignment and creation, staff
//! status toggles, appointment scheduling, and client onboarding. Every
//! operation goes load → mutate → save through a repository and returns an
//! owned snapshot; no shared mutable collection is ever handed out.
//!
//! Access gating stays at the view layer ([`esco_core::View::can_access`]);
//! these operations themselves are ungated, matching the hosted demo.

use anyhow::{Result, anyhow};
use esco_core::appointment::{Appointment, AppointmentRepository, AppointmentStatus};
use esco_core::client::{Client, ClientRepository, ClientStatus, NewClient};
use esco_core::invoice::{Invoice, InvoiceRepository};
use esco_core::staff::{StaffMember, StaffRepository};
use esco_core::todo::{Priority, TodoItem, TodoRepository};
use std::sync::Arc;

/// Use case for the firm's CRM data.
pub struct CrmUseCase {
    clients: Arc<dyn ClientRepository>,
    staff: Arc<dyn StaffRepository>,
    todos: Arc<dyn TodoRepository>,
    appointments: Arc<dyn AppointmentRepository>,
    invoices: Arc<dyn InvoiceRepository>,
}

impl CrmUseCase {
    /// Creates a new `CrmUseCase` over the firm repositories.
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        staff: Arc<dyn StaffRepository>,
        todos: Arc<dyn TodoRepository>,
        appointments: Arc<dyn AppointmentRepository>,
        invoices: Arc<dyn InvoiceRepository>,
    ) -> Self {
        Self {
            clients,
            staff,
            todos,
            appointments,
            invoices,
        }
    }

    /// Assigns (or unassigns) a to-do item to a staff member.
    ///
    /// # Errors
    ///
    /// Returns an error if the item does not exist or the save fails.
    pub async fn assign_todo(&self, todo_id: u32, staff_id: Option<String>) -> Result<TodoItem> {
        let mut item = self
            .todos
            .find_by_id(todo_id)
            .await?
            .ok_or_else(|| anyhow!("To-do not found: {}", todo_id))?;

        item.assigned_to = staff_id;
        self.todos.save(&item).await?;

        tracing::info!(
            "[CrmUseCase] To-do {} assigned to {:?}",
            todo_id,
            item.assigned_to
        );
        Ok(item)
    }

    /// Creates a new to-do for a client and prepends it to the list.
    pub async fn create_client_todo(
        &self,
        client_id: Option<String>,
        task: &str,
        priority: Priority,
        assigned_to: Option<String>,
    ) -> Result<TodoItem> {
        let item = TodoItem {
            id: self.todos.next_id().await?,
            client_id,
            task: task.to_string(),
            priority,
            done: false,
            assigned_to,
        };
        self.todos.save(&item).await?;

        tracing::info!("[CrmUseCase] Created to-do {}: {}", item.id, item.task);
        Ok(item)
    }

    /// Flips the done flag of a to-do item.
    pub async fn toggle_todo_done(&self, todo_id: u32) -> Result<TodoItem> {
        let mut item = self
            .todos
            .find_by_id(todo_id)
            .await?
            .ok_or_else(|| anyhow!("To-do not found: {}", todo_id))?;

        item.done = !item.done;
        self.todos.save(&item).await?;
        Ok(item)
    }

    /// Toggles a staff member between Active and Inactive.
    ///
    /// # Errors
    ///
    /// Returns an error if the staff member does not exist.
    pub async fn toggle_staff_status(&self, staff_id: &str) -> Result<StaffMember> {
        let mut member = self
            .staff
            .find_by_id(staff_id)
            .await?
            .ok_or_else(|| anyhow!("Staff member not found: {}", staff_id))?;

        member.status = member.status.toggled();
        self.staff.save(&member).await?;

        tracing::info!(
            "[CrmUseCase] Staff {} is now {:?}",
            member.id,
            member.status
        );
        Ok(member)
    }

    /// Schedules a new appointment with status `Scheduled`.
    ///
    /// The repository keeps the calendar ascending by date, so the new
    /// entry lands in chronological position.
    pub async fn create_appointment(
        &self,
        date_time: &str,
        client_text: &str,
        assigned_to: &str,
    ) -> Result<Appointment> {
        let appointment = Appointment {
            id: self.appointments.next_id().await?,
            date_time: date_time.to_string(),
            client_text: client_text.to_string(),
            assigned_to: assigned_to.to_string(),
            status: AppointmentStatus::Scheduled,
        };
        self.appointments.save(&appointment).await?;

        tracing::info!(
            "[CrmUseCase] Appointment {} scheduled for {}",
            appointment.id,
            appointment.date_time
        );
        Ok(appointment)
    }

    /// Onboards a new client with an allocated `client-{n}` id and status
    /// `Active`, prepended to the client list.
    pub async fn create_client(&self, new_client: NewClient) -> Result<Client> {
        let client = Client {
            id: self.clients.next_client_id().await?,
            contact_person: new_client.contact_person,
            company_name: new_client.company_name,
            status: ClientStatus::Active,
            email: new_client.email,
            phone: new_client.phone,
            personal_address: new_client.personal_address,
            company_address: new_client.company_address,
            assigned_to: new_client.assigned_to,
        };
        self.clients.save(&client).await?;

        tracing::info!("[CrmUseCase] New client created with ID: {}", client.id);
        Ok(client)
    }

    /// All CRM clients in display order.
    pub async fn clients(&self) -> Result<Vec<Client>> {
        Ok(self.clients.list_all().await?)
    }

    /// All firm staff.
    pub async fn staff(&self) -> Result<Vec<StaffMember>> {
        Ok(self.staff.list_all().await?)
    }

    /// All to-do items in display order.
    pub async fn todos(&self) -> Result<Vec<TodoItem>> {
        Ok(self.todos.list_all().await?)
    }

    /// All appointments ascending by date.
    pub async fn appointments(&self) -> Result<Vec<Appointment>> {
        Ok(self.appointments.list_all().await?)
    }

    /// Outstanding invoices billed to one client, by display name.
    pub async fn outstanding_invoices(&self, client: &str) -> Result<Vec<Invoice>> {
        Ok(self.invoices.list_outstanding_for(client).await?)
    }
}
