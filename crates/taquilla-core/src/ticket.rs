//! Ticket data model for taquilla
//!
//! A ticket is an identity plus free text and a status. Tickets are only
//! constructed and mutated through the repository.

use chrono::NaiveDate;

/// Ticket status
///
/// Three values, no transition restrictions - any status may follow any
/// other. Display text matches the console UI (Spanish).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl Status {
    /// Map the numeric menu choice (1/2/3) to a status.
    ///
    /// Anything out of range falls back to `Pending`.
    pub fn from_choice(choice: u8) -> Self {
        match choice {
            2 => Status::InProgress,
            3 => Status::Completed,
            _ => Status::Pending,
        }
    }
}

impl std::str::FromStr for Status {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pendiente" | "pending" => Ok(Status::Pending),
            "en proceso" | "en_proceso" | "in_progress" | "in-progress" | "inprogress" => {
                Ok(Status::InProgress)
            }
            "completado" | "completed" => Ok(Status::Completed),
            _ => Err(crate::Error::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Pending => write!(f, "Pendiente"),
            Status::InProgress => write!(f, "En Proceso"),
            Status::Completed => write!(f, "Completado"),
        }
    }
}

/// Core ticket structure
///
/// The id is assigned by the repository and never reassigned. The creation
/// date is passed in explicitly so construction stays clock-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Unique identifier, a decimal string minted by the repository
    pub id: String,

    /// Ticket title, free text
    pub title: String,

    /// Detailed description, free text
    pub description: String,

    /// Current status
    pub status: Status,

    /// Calendar date the ticket was created on
    pub created_on: NaiveDate,
}

impl Ticket {
    /// Create a new ticket, always starting out as `Pending`.
    pub fn new(id: String, title: String, description: String, created_on: NaiveDate) -> Self {
        Self {
            id,
            title,
            description,
            status: Status::Pending,
            created_on,
        }
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}\nTitulo: {}\nDescripcion: {}\nEstado: {}\nFecha: {}",
            self.id,
            self.title,
            self.description,
            self.status,
            self.created_on.format("%d/%m/%Y")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 30).unwrap()
    }

    #[test]
    fn test_new_ticket_starts_pending() {
        let ticket = Ticket::new(
            "2000".to_string(),
            "Fix login".to_string(),
            "Login button unresponsive".to_string(),
            fixed_date(),
        );
        assert_eq!(ticket.id, "2000");
        assert_eq!(ticket.title, "Fix login");
        assert_eq!(ticket.description, "Login button unresponsive");
        assert_eq!(ticket.status, Status::Pending);
        assert_eq!(ticket.created_on, fixed_date());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Pending.to_string(), "Pendiente");
        assert_eq!(Status::InProgress.to_string(), "En Proceso");
        assert_eq!(Status::Completed.to_string(), "Completado");
    }

    #[test]
    fn test_status_from_choice() {
        assert_eq!(Status::from_choice(1), Status::Pending);
        assert_eq!(Status::from_choice(2), Status::InProgress);
        assert_eq!(Status::from_choice(3), Status::Completed);
        // Out of range falls back to Pending
        assert_eq!(Status::from_choice(0), Status::Pending);
        assert_eq!(Status::from_choice(9), Status::Pending);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("pendiente".parse::<Status>().unwrap(), Status::Pending);
        assert_eq!("Pending".parse::<Status>().unwrap(), Status::Pending);
        assert_eq!("en proceso".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("Completado".parse::<Status>().unwrap(), Status::Completed);
        assert!("desconocido".parse::<Status>().is_err());
    }

    #[test]
    fn test_ticket_render() {
        let mut ticket = Ticket::new(
            "2001".to_string(),
            "Update docs".to_string(),
            "Add changelog".to_string(),
            fixed_date(),
        );
        ticket.status = Status::InProgress;
        assert_eq!(
            ticket.to_string(),
            "ID: 2001\n\
             Titulo: Update docs\n\
             Descripcion: Add changelog\n\
             Estado: En Proceso\n\
             Fecha: 30/09/2025"
        );
    }
}
