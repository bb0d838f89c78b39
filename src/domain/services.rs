//! Reservation persistence services.
//!
//! The [`ReservationStore`] owns the durable reservation collection. It keeps
//! the whole collection as one JSON array in a single named slot of a
//! [`SlotStorage`] backend and rewrites that slot on every change.

use super::errors::{StorageError, StoreError, StoreResult};
use super::models::{Reservation, ReservationDetails, ReservationId};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use tracing::{debug, info, warn};

/// Slot name the reservation collection is stored under unless overridden.
pub const DEFAULT_SLOT: &str = "filipino_restaurant_reservations";

/// A key-value medium holding text blobs in named slots.
///
/// `get` returns `Ok(None)` for a slot that was never written.
pub trait SlotStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// CRUD access to the persisted reservation collection.
///
/// Every mutating call reads the whole collection, changes it and writes it
/// back. Nothing is locked between the read and the write, so two stores
/// sharing one backend follow last-write-wins.
///
/// Storage failures are logged and absorbed: reads come back empty and
/// writes become no-ops. The only error a caller sees is
/// [`StoreError::NotFound`] from [`ReservationStore::update`].
///
/// # Examples
///
/// ```
/// use kamayan::domain::{ReservationDetails, ReservationStore};
/// use kamayan::infrastructure::MemoryStorage;
///
/// let store = ReservationStore::new(Box::new(MemoryStorage::new()));
/// store.initialize();
/// store.create(ReservationDetails::new("Juan Dela Cruz", "09171234567", "2024-03-15 19:30", 4));
///
/// let reservations = store.list();
/// assert_eq!(reservations.len(), 1);
/// assert_eq!(reservations[0].guests, 4);
/// ```
pub struct ReservationStore {
    storage: Box<dyn SlotStorage>,
    slot: String,
}

impl fmt::Debug for ReservationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReservationStore")
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

impl ReservationStore {
    /// Creates a store over `storage` using [`DEFAULT_SLOT`].
    pub fn new(storage: Box<dyn SlotStorage>) -> Self {
        Self::with_slot(storage, DEFAULT_SLOT)
    }

    /// Creates a store over `storage` using a custom slot name.
    pub fn with_slot(storage: Box<dyn SlotStorage>, slot: impl Into<String>) -> Self {
        Self {
            storage,
            slot: slot.into(),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Writes an empty collection if the slot does not exist yet.
    ///
    /// Calling it again, or on a slot that already has data, changes nothing.
    pub fn initialize(&self) {
        match self.storage.get(&self.slot) {
            Ok(Some(_)) => {}
            Ok(None) => match self.storage.set(&self.slot, "[]") {
                Ok(()) => debug!(slot = %self.slot, "initialized empty reservation slot"),
                Err(err) => warn!(slot = %self.slot, error = %err, "could not initialize reservation slot"),
            },
            Err(err) => warn!(slot = %self.slot, error = %err, "reservation storage unavailable"),
        }
    }

    /// Reads the collection, surfacing storage and parse failures.
    ///
    /// An absent slot reads as an empty collection.
    pub fn try_list(&self) -> StoreResult<Vec<Reservation>> {
        let Some(blob) = self.storage.get(&self.slot)? else {
            return Ok(Vec::new());
        };
        let reservations: Vec<Reservation> = serde_json::from_str(&blob)
            .map_err(|e| StoreError::CorruptData(e.to_string()))?;
        debug!(slot = %self.slot, count = reservations.len(), "loaded reservations");
        Ok(reservations)
    }

    /// Returns every stored reservation in stored order.
    ///
    /// Never fails: unavailable storage and corrupt data both read as empty.
    pub fn list(&self) -> Vec<Reservation> {
        self.try_list().unwrap_or_else(|err| {
            warn!(slot = %self.slot, error = %err, "treating reservations as empty");
            Vec::new()
        })
    }

    pub fn get(&self, id: ReservationId) -> Option<Reservation> {
        self.list().into_iter().find(|r| r.id == id)
    }

    /// Adds a new reservation with a fresh id and the current time as `createdAt`.
    ///
    /// No check is made against existing bookings for the same time.
    pub fn create(&self, details: ReservationDetails) {
        let Some(mut reservations) = self.load_for_write() else {
            return;
        };

        let now = Utc::now();
        let id = next_id(&reservations, self.last_issued_id(), &now);
        self.record_issued_id(id);
        let reservation = Reservation::new(id, details, timestamp(&now));
        info!(id, guests = reservation.guests, "created reservation");

        reservations.push(reservation);
        self.persist(&reservations);
    }

    /// Replaces all mutable fields of the reservation with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no reservation has that id; in
    /// that case nothing is written.
    pub fn update(&self, id: ReservationId, details: ReservationDetails) -> StoreResult<()> {
        let Some(mut reservations) = self.load_for_write() else {
            return Ok(());
        };

        let reservation = reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        reservation.apply(details);
        info!(id, "updated reservation");

        self.persist(&reservations);
        Ok(())
    }

    /// Removes the reservation with `id`. Deleting an unknown id is not an error.
    pub fn delete(&self, id: ReservationId) {
        let Some(mut reservations) = self.load_for_write() else {
            return;
        };

        let before = reservations.len();
        reservations.retain(|r| r.id != id);
        if reservations.len() < before {
            info!(id, "deleted reservation");
        } else {
            debug!(id, "delete of unknown reservation");
        }

        self.persist(&reservations);
    }

    /// Slot holding the largest id ever issued, so deleted ids are never reused.
    fn last_id_slot(&self) -> String {
        format!("{}_last_id", self.slot)
    }

    fn last_issued_id(&self) -> Option<ReservationId> {
        match self.storage.get(&self.last_id_slot()) {
            Ok(Some(value)) => value.trim().parse().ok(),
            Ok(None) => None,
            Err(err) => {
                warn!(slot = %self.last_id_slot(), error = %err, "could not read last issued id");
                None
            }
        }
    }

    fn record_issued_id(&self, id: ReservationId) {
        if let Err(err) = self.storage.set(&self.last_id_slot(), &id.to_string()) {
            warn!(slot = %self.last_id_slot(), error = %err, "could not record last issued id");
        }
    }

    /// Loads the collection ahead of a write.
    ///
    /// `None` means the medium is unreachable and the write must be skipped.
    /// Corrupt data loads as empty, so the next write replaces it.
    fn load_for_write(&self) -> Option<Vec<Reservation>> {
        match self.try_list() {
            Ok(reservations) => Some(reservations),
            Err(StoreError::CorruptData(reason)) => {
                warn!(slot = %self.slot, %reason, "discarding unreadable reservation data");
                Some(Vec::new())
            }
            Err(err) => {
                warn!(slot = %self.slot, error = %err, "skipping write");
                None
            }
        }
    }

    fn persist(&self, reservations: &[Reservation]) {
        let blob = match serde_json::to_string(reservations) {
            Ok(blob) => blob,
            Err(err) => {
                warn!(error = %err, "could not serialize reservations");
                return;
            }
        };

        match self.storage.set(&self.slot, &blob) {
            Ok(()) => debug!(slot = %self.slot, count = reservations.len(), "saved reservations"),
            Err(err) => warn!(slot = %self.slot, error = %err, "could not save reservations"),
        }
    }
}

/// Millisecond timestamp id, bumped past every id stored or issued before.
fn next_id(
    existing: &[Reservation],
    last_issued: Option<ReservationId>,
    now: &DateTime<Utc>,
) -> ReservationId {
    let millis = ReservationId::try_from(now.timestamp_millis()).unwrap_or(0);
    existing
        .iter()
        .map(|r| r.id)
        .chain(last_issued)
        .max()
        .map_or(millis, |max| millis.max(max.saturating_add(1)))
}

fn timestamp(now: &DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
