use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::table::TableId;
use super::time_slot::TimeSlot;
use crate::pii::Masked;

pub type BookingId = Uuid;

/// Contact details taken over the phone for a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: Masked<String>,
}

impl Customer {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: Masked(phone.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingKind {
    Reservation { customer: Customer },
    WalkIn,
}

/// A party holding a table for one slot on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub covers: u32,
    pub date: NaiveDate,
    pub slot: TimeSlot,
    pub table: TableId,
    pub kind: BookingKind,
    pub arrival: Option<NaiveTime>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        kind: BookingKind,
        covers: u32,
        date: NaiveDate,
        time: NaiveTime,
        table: TableId,
        duration: Duration,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            covers,
            date,
            slot: TimeSlot::starting_at(date.and_time(time), duration),
            table,
            kind,
            arrival: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn reservation(
        customer: Customer,
        covers: u32,
        date: NaiveDate,
        time: NaiveTime,
        table: TableId,
        duration: Duration,
    ) -> Self {
        Self::new(BookingKind::Reservation { customer }, covers, date, time, table, duration)
    }

    pub fn walk_in(
        covers: u32,
        date: NaiveDate,
        time: NaiveTime,
        table: TableId,
        duration: Duration,
    ) -> Self {
        Self::new(BookingKind::WalkIn, covers, date, time, table, duration)
    }

    pub fn start_time(&self) -> NaiveTime {
        self.slot.start.time()
    }

    pub fn end_time(&self) -> NaiveTime {
        self.slot.end.time()
    }

    pub fn customer(&self) -> Option<&Customer> {
        match &self.kind {
            BookingKind::Reservation { customer } => Some(customer),
            BookingKind::WalkIn => None,
        }
    }

    pub fn is_walk_in(&self) -> bool {
        matches!(self.kind, BookingKind::WalkIn)
    }

    pub fn has_arrived(&self) -> bool {
        self.arrival.is_some()
    }

    /// One-line summary for the booking sheet. Shows the phone number, so
    /// never pass it to a log macro.
    pub fn details(&self) -> String {
        match &self.kind {
            BookingKind::Reservation { customer } if customer.phone.is_empty() => {
                format!("{}, {} covers", customer.name, self.covers)
            }
            BookingKind::Reservation { customer } => {
                format!("{} {}, {} covers", customer.name, customer.phone.expose(), self.covers)
            }
            BookingKind::WalkIn => format!("Walk-in, {} covers", self.covers),
        }
    }

    pub fn record_arrival(&mut self, time: NaiveTime) {
        self.arrival = Some(time);
        self.updated_at = Utc::now();
    }

    pub fn move_to(&mut self, table: TableId) {
        self.table = table;
        self.updated_at = Utc::now();
    }
}
