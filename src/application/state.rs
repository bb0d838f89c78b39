//! Application state management for the reservation terminal app.
//!
//! This module contains the main application state, the screen and mode
//! tracking, and the reservation workflows the UI triggers.

use super::form::ReservationForm;
use crate::domain::{Reservation, ReservationStore};
use tracing::warn;

/// The top-level screens, shown as tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    About,
    Reservations,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::About, Screen::Reservations];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::About => "About",
            Screen::Reservations => "Reservations",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Screen::Home => 0,
            Screen::About => 1,
            Screen::Reservations => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Represents the current mode of the application.
///
/// The mode determines how key presses are interpreted and which popups
/// are drawn over the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Moving between screens and reservations
    Browse,
    /// The new/edit reservation form is open
    Form,
    /// Waiting for the user to confirm a cancellation
    ConfirmDelete,
    /// Help screen is displayed
    Help,
}

/// Main application state.
///
/// Holds the reservation store, the list currently shown and all UI state.
/// The list is a snapshot reloaded from the store after every change.
#[derive(Debug)]
pub struct App {
    /// The persistent reservation store
    pub store: ReservationStore,
    /// Screen currently shown
    pub screen: Screen,
    /// Current application mode
    pub mode: AppMode,
    /// Reservations as last loaded, newest first
    pub reservations: Vec<Reservation>,
    /// Index of the highlighted reservation
    pub selected: usize,
    /// Form contents while in form mode
    pub form: ReservationForm,
    /// Reservation awaiting cancel confirmation
    pub pending_delete: Option<Reservation>,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Scroll offset of the Home and About screens
    pub scroll: usize,
    /// Scroll position in help text
    pub help_scroll: usize,
}

impl App {
    /// Creates the app over `store`, initializing it and loading the list.
    pub fn new(store: ReservationStore) -> Self {
        let mut app = Self {
            store,
            screen: Screen::Home,
            mode: AppMode::Browse,
            reservations: Vec::new(),
            selected: 0,
            form: ReservationForm::default(),
            pending_delete: None,
            status_message: None,
            scroll: 0,
            help_scroll: 0,
        };
        app.refresh();
        app
    }

    /// Reloads reservations from the store, newest booking first.
    pub fn refresh(&mut self) {
        self.store.initialize();
        let mut reservations = self.store.list();
        reservations.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        self.reservations = reservations;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.reservations.len() {
            self.selected = self.reservations.len().saturating_sub(1);
        }
    }

    pub fn selected_reservation(&self) -> Option<&Reservation> {
        self.reservations.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.reservations.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn show_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            self.screen = screen;
            self.scroll = 0;
        }
        self.status_message = None;
    }

    pub fn next_screen(&mut self) {
        self.show_screen(self.screen.next());
    }

    pub fn previous_screen(&mut self) {
        self.show_screen(self.screen.previous());
    }

    /// Scrolls the Home or About text one line, stopping at `max`.
    pub fn scroll_down(&mut self, max: usize) {
        self.scroll = (self.scroll + 1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Opens an empty form for a new booking.
    pub fn open_new_form(&mut self) {
        self.show_screen(Screen::Reservations);
        self.form = ReservationForm::default();
        self.mode = AppMode::Form;
    }

    /// Opens the form pre-filled with the selected reservation.
    ///
    /// The reservation is re-read from the store; if it has disappeared the
    /// list is refreshed and an error is shown instead.
    pub fn open_edit_form(&mut self) {
        let Some(id) = self.selected_reservation().map(|r| r.id) else {
            return;
        };

        match self.store.get(id) {
            Some(reservation) => {
                self.form = ReservationForm::for_reservation(&reservation);
                self.mode = AppMode::Form;
                self.status_message = None;
            }
            None => {
                self.status_message = Some("Reservation not found".to_string());
                self.refresh();
            }
        }
    }

    /// Leaves the form without saving.
    pub fn cancel_form(&mut self) {
        self.mode = AppMode::Browse;
        self.form = ReservationForm::default();
        self.status_message = None;
    }

    /// Validates the form and creates or updates the reservation.
    ///
    /// Validation and update failures keep the form open with the message in
    /// the status bar.
    pub fn submit_form(&mut self) {
        let details = match self.form.validate() {
            Ok(details) => details,
            Err(err) => {
                self.status_message = Some(err.to_string());
                return;
            }
        };

        let message = match self.form.editing {
            None => {
                self.store.create(details);
                self.selected = 0;
                "Reservation Confirmed! Your table has been reserved successfully."
            }
            Some(id) => match self.store.update(id, details) {
                Ok(()) => "Updated! Reservation has been updated successfully.",
                Err(err) => {
                    warn!(error = %err, "reservation update failed");
                    self.status_message =
                        Some("Failed to update reservation. Please try again.".to_string());
                    return;
                }
            },
        };

        self.status_message = Some(message.to_string());
        self.mode = AppMode::Browse;
        self.form = ReservationForm::default();
        self.refresh();
    }

    /// Asks for confirmation before cancelling the selected reservation.
    pub fn request_delete(&mut self) {
        if let Some(reservation) = self.selected_reservation().cloned() {
            self.pending_delete = Some(reservation);
            self.mode = AppMode::ConfirmDelete;
            self.status_message = None;
        }
    }

    pub fn delete_prompt(&self) -> Option<String> {
        self.pending_delete.as_ref().map(|r| {
            format!("Are you sure you want to cancel {}'s reservation?", r.name)
        })
    }

    pub fn confirm_delete(&mut self) {
        if let Some(reservation) = self.pending_delete.take() {
            self.store.delete(reservation.id);
            self.refresh();
            self.status_message = Some(
                "Reservation Cancelled. The reservation has been cancelled successfully."
                    .to_string(),
            );
        }
        self.mode = AppMode::Browse;
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.mode = AppMode::Browse;
    }

    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Browse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ReservationDetails, DEFAULT_SLOT, SlotStorage};
    use crate::infrastructure::MemoryStorage;

    fn app_with_storage() -> (App, MemoryStorage) {
        let storage = MemoryStorage::new();
        let app = App::new(ReservationStore::new(Box::new(storage.clone())));
        (app, storage)
    }

    fn fill_form(app: &mut App, name: &str, guests: &str) {
        app.form.name = name.to_string();
        app.form.phone = "09171234567".to_string();
        app.form.datetime = "2024-03-15 19:30".to_string();
        app.form.guests = guests.to_string();
    }

    fn seeded(names: &[&str]) -> (App, MemoryStorage) {
        let (mut app, storage) = app_with_storage();
        for name in names {
            app.store
                .create(ReservationDetails::new(*name, "0917", "2024-03-15 19:30", 2));
        }
        app.refresh();
        (app, storage)
    }

    #[test]
    fn test_app_new_initializes_store() {
        let (app, storage) = app_with_storage();

        assert_eq!(storage.get(DEFAULT_SLOT).unwrap().as_deref(), Some("[]"));
        assert!(app.reservations.is_empty());
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.mode, AppMode::Browse);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_screen_cycling() {
        let (mut app, _) = app_with_storage();
        app.scroll = 4;

        app.next_screen();
        assert_eq!(app.screen, Screen::About);
        assert_eq!(app.scroll, 0);
        app.next_screen();
        app.next_screen();
        assert_eq!(app.screen, Screen::Home);
        app.previous_screen();
        assert_eq!(app.screen, Screen::Reservations);
    }

    #[test]
    fn test_scroll_stops_at_max() {
        let (mut app, _) = app_with_storage();
        for _ in 0..10 {
            app.scroll_down(3);
        }
        assert_eq!(app.scroll, 3);

        app.scroll_up();
        assert_eq!(app.scroll, 2);
    }

    #[test]
    fn test_submit_new_reservation() {
        let (mut app, _) = app_with_storage();
        app.open_new_form();
        assert_eq!(app.screen, Screen::Reservations);
        assert_eq!(app.mode, AppMode::Form);

        fill_form(&mut app, "  Juan Dela Cruz ", "4");
        app.submit_form();

        assert_eq!(app.mode, AppMode::Browse);
        assert_eq!(app.reservations.len(), 1);
        assert_eq!(app.reservations[0].name, "Juan Dela Cruz");
        assert_eq!(app.reservations[0].guests, 4);
        assert_eq!(app.form, ReservationForm::default());
        assert!(app.status_message.unwrap().contains("reserved successfully"));
    }

    #[test]
    fn test_submit_invalid_form_stays_open() {
        let (mut app, _) = app_with_storage();
        app.open_new_form();
        fill_form(&mut app, "Juan", "zero");

        app.submit_form();

        assert_eq!(app.mode, AppMode::Form);
        assert_eq!(app.status_message.as_deref(), Some("Please enter a valid number of guests."));
        assert!(app.store.list().is_empty());

        app.form.name.clear();
        app.submit_form();
        assert_eq!(
            app.status_message.as_deref(),
            Some("Please fill out all fields to make a reservation.")
        );
    }

    #[test]
    fn test_blank_field_in_edit_form_stays_open() {
        let (mut app, _) = seeded(&["Ana"]);
        app.open_edit_form();
        app.form.phone.clear();

        app.submit_form();

        assert_eq!(app.mode, AppMode::Form);
        assert_eq!(app.status_message.as_deref(), Some("Please fill out all fields."));
        assert_eq!(app.reservations[0].phone, "0917");
    }

    #[test]
    fn test_list_is_newest_first() {
        let (app, _) = seeded(&["First", "Second", "Third"]);

        let names: Vec<_> = app.reservations.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"Third"));
        assert!(app.reservations.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn test_edit_selected_reservation() {
        let (mut app, _) = seeded(&["Ana"]);
        let original = app.reservations[0].clone();

        app.open_edit_form();
        assert_eq!(app.mode, AppMode::Form);
        assert_eq!(app.form.editing, Some(original.id));
        assert_eq!(app.form.name, "Ana");

        app.form.guests = "6".to_string();
        app.form.datetime = "2024-03-15 20:00".to_string();
        app.submit_form();

        assert_eq!(app.mode, AppMode::Browse);
        let updated = &app.reservations[0];
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.guests, 6);
        assert_eq!(updated.datetime, "2024-03-15 20:00");
        assert!(app.status_message.unwrap().contains("updated successfully"));
    }

    #[test]
    fn test_edit_of_vanished_reservation() {
        let (mut app, _) = seeded(&["Ana"]);
        let id = app.reservations[0].id;
        app.store.delete(id);

        app.open_edit_form();

        assert_eq!(app.mode, AppMode::Browse);
        assert_eq!(app.status_message.as_deref(), Some("Reservation not found"));
        assert!(app.reservations.is_empty());
    }

    #[test]
    fn test_update_failure_keeps_form_open() {
        let (mut app, _) = seeded(&["Ana"]);
        app.open_edit_form();
        let id = app.form.editing.unwrap();
        app.store.delete(id);

        app.submit_form();

        assert_eq!(app.mode, AppMode::Form);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Failed to update reservation. Please try again.")
        );
    }

    #[test]
    fn test_cancel_form() {
        let (mut app, _) = app_with_storage();
        app.open_new_form();
        fill_form(&mut app, "Ana", "2");

        app.cancel_form();

        assert_eq!(app.mode, AppMode::Browse);
        assert_eq!(app.form, ReservationForm::default());
        assert!(app.store.list().is_empty());
    }

    #[test]
    fn test_delete_flow() {
        let (mut app, _) = seeded(&["Ana", "Ben"]);
        app.select_next();
        let target = app.selected_reservation().unwrap().clone();

        app.request_delete();
        assert_eq!(app.mode, AppMode::ConfirmDelete);
        assert_eq!(
            app.delete_prompt().unwrap(),
            format!("Are you sure you want to cancel {}'s reservation?", target.name)
        );

        app.confirm_delete();

        assert_eq!(app.mode, AppMode::Browse);
        assert_eq!(app.reservations.len(), 1);
        assert!(app.reservations.iter().all(|r| r.id != target.id));
        assert_eq!(app.selected, 0);
        assert!(app.status_message.unwrap().contains("cancelled successfully"));
    }

    #[test]
    fn test_keep_reservation() {
        let (mut app, _) = seeded(&["Ana"]);
        app.request_delete();

        app.cancel_delete();

        assert_eq!(app.mode, AppMode::Browse);
        assert!(app.pending_delete.is_none());
        assert_eq!(app.reservations.len(), 1);
    }

    #[test]
    fn test_request_delete_with_empty_list() {
        let (mut app, _) = app_with_storage();
        app.request_delete();
        assert_eq!(app.mode, AppMode::Browse);
        assert!(app.pending_delete.is_none());
    }

    #[test]
    fn test_selection_is_clamped() {
        let (mut app, _) = seeded(&["Ana", "Ben"]);
        app.select_previous();
        assert_eq!(app.selected, 0);
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_help_mode() {
        let (mut app, _) = app_with_storage();
        app.help_scroll = 3;
        app.show_help();
        assert_eq!(app.mode, AppMode::Help);
        assert_eq!(app.help_scroll, 0);
        app.close_help();
        assert_eq!(app.mode, AppMode::Browse);
    }
}
