//! Reservation form input and validation.

use crate::domain::{Reservation, ReservationDetails, ReservationId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// A blank field on a new booking.
    #[error("Please fill out all fields to make a reservation.")]
    Incomplete,
    /// A blank field while editing an existing reservation.
    #[error("Please fill out all fields.")]
    IncompleteUpdate,
    #[error("Please enter a valid number of guests.")]
    InvalidGuestCount,
}

/// The input field that currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Phone,
    Datetime,
    Guests,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Phone,
        FormField::Datetime,
        FormField::Guests,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Phone => "Phone Number",
            FormField::Datetime => "Date & Time",
            FormField::Guests => "Number of Guests",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Datetime => "e.g., 2024-03-15 19:30",
            _ => "",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Phone,
            FormField::Phone => FormField::Datetime,
            FormField::Datetime => FormField::Guests,
            FormField::Guests => FormField::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Name => FormField::Guests,
            FormField::Phone => FormField::Name,
            FormField::Datetime => FormField::Phone,
            FormField::Guests => FormField::Datetime,
        }
    }
}

/// Text typed into the new/edit reservation form.
///
/// `editing` holds the id of the reservation being edited, or `None` for a
/// new booking. `created_at` is the edited reservation's creation time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationForm {
    pub name: String,
    pub phone: String,
    pub datetime: String,
    pub guests: String,
    pub focus: FormField,
    pub editing: Option<ReservationId>,
    pub created_at: Option<String>,
}

impl ReservationForm {
    /// Pre-fills the form from an existing reservation.
    pub fn for_reservation(reservation: &Reservation) -> Self {
        Self {
            name: reservation.name.clone(),
            phone: reservation.phone.clone(),
            datetime: reservation.datetime.clone(),
            guests: reservation.guests.to_string(),
            focus: FormField::Name,
            editing: Some(reservation.id),
            created_at: Some(reservation.created_at.clone()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Datetime => &self.datetime,
            FormField::Guests => &self.guests,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Phone => &mut self.phone,
            FormField::Datetime => &mut self.datetime,
            FormField::Guests => &mut self.guests,
        }
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.focus;
        self.value_mut(field).push(c);
    }

    pub fn pop_char(&mut self) {
        let field = self.focus;
        self.value_mut(field).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Checks the input and returns trimmed details ready for the store.
    ///
    /// # Errors
    ///
    /// [`FormError::Incomplete`] (or [`FormError::IncompleteUpdate`] when
    /// editing) if any field is blank, [`FormError::InvalidGuestCount`] if guests is not a whole number of at least 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use kamayan::application::{FormError, ReservationForm};
    ///
    /// let mut form = ReservationForm::default();
    /// form.name = " Juan Dela Cruz ".to_string();
    /// form.phone = "09171234567".to_string();
    /// form.datetime = "2024-03-15 19:30".to_string();
    /// form.guests = "0".to_string();
    /// assert_eq!(form.validate(), Err(FormError::InvalidGuestCount));
    ///
    /// form.guests = "4".to_string();
    /// let details = form.validate().unwrap();
    /// assert_eq!(details.name, "Juan Dela Cruz");
    /// assert_eq!(details.guests, 4);
    /// ```
    pub fn validate(&self) -> Result<ReservationDetails, FormError> {
        let name = self.name.trim();
        let phone = self.phone.trim();
        let datetime = self.datetime.trim();
        let guests = self.guests.trim();

        if name.is_empty() || phone.is_empty() || datetime.is_empty() || guests.is_empty() {
            return Err(if self.is_editing() {
                FormError::IncompleteUpdate
            } else {
                FormError::Incomplete
            });
        }

        let guests = guests
            .parse::<u32>()
            .ok()
            .filter(|&count| count >= 1)
            .ok_or(FormError::InvalidGuestCount)?;

        Ok(ReservationDetails::new(name, phone, datetime, guests))
    }
}
