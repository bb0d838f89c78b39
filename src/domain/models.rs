use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub type ReservationId = u64;

/// Datetime layouts the reservation form suggests ("2024-03-15 19:30").
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// The mutable part of a reservation.
///
/// `create` and `update` both take the full set of details, so an update
/// always replaces all four fields together.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReservationDetails {
    pub name: String,
    pub phone: String,
    /// Free-form date and time, kept exactly as entered.
    pub datetime: String,
    pub guests: u32,
}

impl ReservationDetails {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        datetime: impl Into<String>,
        guests: u32,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            datetime: datetime.into(),
            guests,
        }
    }
}

/// A single table booking as persisted in the reservation slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub name: String,
    pub phone: String,
    pub datetime: String,
    pub guests: u32,
    /// ISO-8601 creation timestamp, fixed when the reservation is made.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Reservation {
    pub fn new(id: ReservationId, details: ReservationDetails, created_at: String) -> Self {
        Self {
            id,
            name: details.name,
            phone: details.phone,
            datetime: details.datetime,
            guests: details.guests,
            created_at,
        }
    }

    /// Returns a copy of the mutable fields.
    pub fn details(&self) -> ReservationDetails {
        ReservationDetails {
            name: self.name.clone(),
            phone: self.phone.clone(),
            datetime: self.datetime.clone(),
            guests: self.guests,
        }
    }

    /// Replaces every mutable field, leaving `id` and `created_at` alone.
    pub fn apply(&mut self, details: ReservationDetails) {
        self.name = details.name;
        self.phone = details.phone;
        self.datetime = details.datetime;
        self.guests = details.guests;
    }

    /// Formats the reservation time for display.
    ///
    /// Recognised layouts render as `Fri, Mar 15, 2024, 07:30 PM`; anything
    /// else is returned as entered.
    ///
    /// # Examples
    ///
    /// ```
    /// use kamayan::domain::{Reservation, ReservationDetails};
    ///
    /// let details = ReservationDetails::new("Ana", "0917", "2024-03-15 19:30", 2);
    /// let reservation = Reservation::new(1, details, "2024-03-01T00:00:00.000Z".to_string());
    /// assert_eq!(reservation.display_datetime(), "Fri, Mar 15, 2024, 07:30 PM");
    /// ```
    pub fn display_datetime(&self) -> String {
        let trimmed = self.datetime.trim();
        DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .map(|parsed| parsed.format("%a, %b %-d, %Y, %I:%M %p").to_string())
            .unwrap_or_else(|| self.datetime.clone())
    }

    /// The creation date alone, e.g. `3/1/2024`.
    pub fn display_created_date(&self) -> String {
        format_created_date(&self.created_at)
    }

    /// Pluralised guest count, e.g. "1 guest" or "4 guests".
    pub fn guest_label(&self) -> String {
        if self.guests == 1 {
            "1 guest".to_string()
        } else {
            format!("{} guests", self.guests)
        }
    }
}

/// Renders an RFC 3339 `createdAt` timestamp as a month/day/year date in UTC.
/// Unparseable values come back unchanged.
pub fn format_created_date(created_at: &str) -> String {
    DateTime::parse_from_rfc3339(created_at.trim())
        .map(|parsed| parsed.naive_utc().format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|_| created_at.to_string())
}
