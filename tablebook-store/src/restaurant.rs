use chrono::{Duration, NaiveDate, NaiveTime};
use tablebook_core::{CoreError, CoreResult, ReservationStore};
use tablebook_shared::{Booking, BookingId, Customer, Table, TableId};
use tracing::{debug, info};

use crate::app_config::Config;
use crate::layout::TableLayout;

/// In-memory restaurant: the table layout and every booking on every date.
pub struct Restaurant {
    layout: TableLayout,
    booking_duration: Duration,
    bookings: Vec<Booking>,
    customers: Vec<Customer>,
}

impl Restaurant {
    pub fn new(layout: TableLayout, booking_duration: Duration) -> Self {
        Self {
            layout,
            booking_duration,
            bookings: Vec::new(),
            customers: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> CoreResult<Self> {
        let layout = TableLayout::from_config(&config.restaurant)?;
        if config.booking_rules.booking_duration_minutes <= 0 {
            return Err(CoreError::Validation(format!(
                "booking duration must be positive, got {} minutes",
                config.booking_rules.booking_duration_minutes
            )));
        }
        Ok(Self::new(layout, config.booking_rules.booking_duration()))
    }

    /// Standard ten-table floor with two-hour bookings.
    pub fn standard() -> Self {
        Self::new(
            TableLayout::standard(),
            Config::default().booking_rules.booking_duration(),
        )
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn booking(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Existing record with the same name and phone, or a newly registered one.
    fn customer(&mut self, name: &str, phone: &str) -> Customer {
        if let Some(existing) = self
            .customers
            .iter()
            .find(|c| c.name == name && c.phone.expose() == phone)
        {
            return existing.clone();
        }

        let customer = Customer::new(name, phone);
        debug!("Registered customer {}", customer.name);
        self.customers.push(customer.clone());
        customer
    }

    fn validate(&self, covers: u32, table: TableId) -> CoreResult<()> {
        if covers == 0 {
            return Err(CoreError::Validation("a booking needs at least one cover".to_string()));
        }
        if !self.layout.contains(table) {
            return Err(CoreError::TableNotFound(table));
        }
        Ok(())
    }

    fn insert(&mut self, booking: Booking) -> Booking {
        info!(
            "Stored booking {} for {} covers at table {} on {} {}",
            booking.id,
            booking.covers,
            booking.table,
            booking.date,
            booking.start_time()
        );
        self.bookings.push(booking.clone());
        booking
    }
}

impl ReservationStore for Restaurant {
    fn bookings_on<'a>(&'a self, date: NaiveDate) -> Box<dyn Iterator<Item = &'a Booking> + 'a> {
        Box::new(self.bookings.iter().filter(move |b| b.date == date))
    }

    fn make_reservation(
        &mut self,
        covers: u32,
        date: NaiveDate,
        time: NaiveTime,
        table: TableId,
        name: &str,
        phone: &str,
    ) -> CoreResult<Booking> {
        self.validate(covers, table)?;
        let customer = self.customer(name, phone);
        let booking =
            Booking::reservation(customer, covers, date, time, table, self.booking_duration);
        Ok(self.insert(booking))
    }

    fn make_walk_in(
        &mut self,
        covers: u32,
        date: NaiveDate,
        time: NaiveTime,
        table: TableId,
    ) -> CoreResult<Booking> {
        self.validate(covers, table)?;
        let booking = Booking::walk_in(covers, date, time, table, self.booking_duration);
        Ok(self.insert(booking))
    }

    fn remove_booking(&mut self, id: BookingId) -> CoreResult<()> {
        let index = self
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or(CoreError::BookingNotFound(id))?;
        self.bookings.remove(index);
        info!("Removed booking {}", id);
        Ok(())
    }

    fn update_booking(&mut self, booking: &Booking) -> CoreResult<()> {
        if !self.layout.contains(booking.table) {
            return Err(CoreError::TableNotFound(booking.table));
        }
        let stored = self
            .bookings
            .iter_mut()
            .find(|b| b.id == booking.id)
            .ok_or(CoreError::BookingNotFound(booking.id))?;
        *stored = booking.clone();
        debug!("Updated booking {}", booking.id);
        Ok(())
    }

    fn table(&self, number: TableId) -> CoreResult<Table> {
        self.layout
            .get(number)
            .copied()
            .ok_or(CoreError::TableNotFound(number))
    }

    fn table_numbers(&self) -> Vec<TableId> {
        self.layout.numbers()
    }

    fn booking_duration(&self) -> Duration {
        self.booking_duration
    }
}

impl Default for Restaurant {
    fn default() -> Self {
        Self::standard()
    }
}
