//! In-memory repository for taquilla tickets
//!
//! No files, no daemon - tickets live in a `Vec` for the lifetime of the
//! process, in insertion order. The repository is the only place tickets
//! are constructed or mutated; `find` hands out shared references only.
//!
//! "Not found" is reported through `bool`/`Option` returns. No repository
//! operation fails or panics.

use crate::id::IdSequence;
use crate::ticket::{Status, Ticket};
use chrono::{Local, NaiveDate};

/// In-memory ticket repository
///
/// Owns the ordered ticket collection and the identifier sequence.
pub struct Repository {
    tickets: Vec<Ticket>,
    ids: IdSequence,
}

impl Repository {
    /// Create an empty repository with the default identifier seed.
    pub fn new() -> Self {
        Self {
            tickets: Vec::new(),
            ids: IdSequence::new(),
        }
    }

    /// Create an empty repository minting ids from `seed` upwards.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            tickets: Vec::new(),
            ids: IdSequence::from_seed(seed),
        }
    }

    /// Create a ticket stamped with today's date.
    ///
    /// Reads the local clock once; everything else goes through
    /// [`Repository::create_on`].
    pub fn create(&mut self, title: String, description: String) -> &Ticket {
        self.create_on(title, description, Local::now().date_naive())
    }

    /// Create a ticket with an explicit creation date.
    ///
    /// Mints the next id, appends the ticket (status `Pending`) and returns
    /// a reference to it so the caller can report the assigned id.
    pub fn create_on(
        &mut self,
        title: String,
        description: String,
        created_on: NaiveDate,
    ) -> &Ticket {
        let id = self.ids.mint();
        tracing::debug!("created ticket {}", id);
        let index = self.tickets.len();
        self.tickets
            .push(Ticket::new(id, title, description, created_on));
        &self.tickets[index]
    }

    /// Look up a ticket by exact id.
    pub fn find(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Overwrite a ticket's title and description, and optionally its status.
    ///
    /// `None` preserves the current status. Returns `false` and changes
    /// nothing when the id is unknown.
    pub fn edit(
        &mut self,
        id: &str,
        title: String,
        description: String,
        status: Option<Status>,
    ) -> bool {
        let Some(ticket) = self.tickets.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        ticket.title = title;
        ticket.description = description;
        if let Some(status) = status {
            ticket.status = status;
        }
        tracing::debug!("edited ticket {}", id);
        true
    }

    /// Overwrite only a ticket's status.
    ///
    /// Returns `false` when the id is unknown.
    pub fn set_status(&mut self, id: &str, status: Status) -> bool {
        let Some(ticket) = self.tickets.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        ticket.status = status;
        tracing::debug!("ticket {} is now {:?}", id, status);
        true
    }

    /// Remove a ticket, keeping the remaining tickets in order.
    ///
    /// Returns `false` when the id is unknown.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.tickets.iter().position(|t| t.id == id) {
            Some(index) => {
                self.tickets.remove(index);
                tracing::debug!("deleted ticket {}", id);
                true
            }
            None => false,
        }
    }

    /// All tickets in creation order. Empty is a valid state.
    pub fn list(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Number of tickets currently held.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Whether the repository holds no tickets.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
