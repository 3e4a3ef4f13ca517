use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveTime};
use tablebook_core::{
    BookingObserver, ConfirmationPrompt, CoreError, CoreResult, NoOpReason, Notifier, Outcome,
    Rejection, ReservationStore,
};
use tablebook_shared::{Booking, BookingId, TableId, TimeSlot};
use tablebook_store::BookingRules;
use tracing::{debug, info, warn};

use crate::assignment::auto_assign_table;
use crate::conflict::is_double_booked;

pub const CONFIRM_CANCEL: &str = "Are you sure?";
pub const CONFIRM_OVERFILL: &str = "Ok to overfill table?";
pub const DOUBLE_BOOKING: &str = "Double booking!";
pub const ARRIVAL_ALREADY_RECORDED: &str = "Arrival already recorded";
pub const NO_TABLE_AVAILABLE: &str = "No table available";

/// Keeps one day of bookings on screen and applies the front-of-house
/// commands to it.
///
/// Construct one per process (or per session, see
/// [`SharedBookingSystem`](crate::SharedBookingSystem)) and pass it to
/// whoever drives the view. Every command that changes what the view shows
/// ends by calling `update` on all observers.
pub struct BookingCoordinator<S: ReservationStore> {
    store: S,
    rules: BookingRules,
    notifier: Notifier,
    today: NaiveDate,
    current_date: NaiveDate,
    current: Vec<Booking>,
    selected: Option<BookingId>,
}

impl<S: ReservationStore> BookingCoordinator<S> {
    pub fn new(store: S, rules: BookingRules) -> Self {
        Self::with_today(store, rules, Local::now().date_naive())
    }

    /// Starts out displaying `today`.
    pub fn with_today(store: S, rules: BookingRules, today: NaiveDate) -> Self {
        let current = store.bookings_on(today).cloned().collect();
        Self {
            store,
            rules,
            notifier: Notifier::new(),
            today,
            current_date: today,
            current,
            selected: None,
        }
    }

    pub fn add_observer(&mut self, observer: Arc<dyn BookingObserver>) {
        self.notifier.add_observer(observer);
    }

    pub fn set_prompt(&mut self, prompt: Arc<dyn ConfirmationPrompt>) {
        self.notifier.set_prompt(prompt);
    }

    /// Registers a view that both redraws and answers questions. The first
    /// such view becomes the prompt.
    pub fn attach_view<V>(&mut self, view: Arc<V>)
    where
        V: BookingObserver + ConfirmationPrompt + 'static,
    {
        self.notifier.add_observer(view.clone());
        if !self.notifier.has_prompt() {
            self.notifier.set_prompt(view);
        }
    }

    pub fn display(&mut self, date: NaiveDate) {
        self.current_date = date;
        self.current = self.store.bookings_on(date).cloned().collect();
        self.selected = None;
        debug!("Displaying {} with {} bookings", date, self.current.len());
        self.notifier.notify();
    }

    pub fn make_reservation(
        &mut self,
        covers: u32,
        date: NaiveDate,
        time: NaiveTime,
        requested_table: Option<TableId>,
        name: &str,
        phone: &str,
    ) -> CoreResult<Outcome<BookingId>> {
        let table = match self.place_party(covers, date, time, requested_table)? {
            Ok(table) => table,
            Err(rejection) => return Ok(Outcome::Rejected(rejection)),
        };
        let booking = self.store.make_reservation(covers, date, time, table, name, phone)?;
        Ok(Outcome::Applied(self.admit(booking)))
    }

    pub fn make_walk_in(
        &mut self,
        covers: u32,
        date: NaiveDate,
        time: NaiveTime,
        requested_table: Option<TableId>,
    ) -> CoreResult<Outcome<BookingId>> {
        let table = match self.place_party(covers, date, time, requested_table)? {
            Ok(table) => table,
            Err(rejection) => return Ok(Outcome::Rejected(rejection)),
        };
        let booking = self.store.make_walk_in(covers, date, time, table)?;
        Ok(Outcome::Applied(self.admit(booking)))
    }

    /// Selects the booking sitting at `table` at `time` on the displayed
    /// date, or clears the selection if there is none.
    pub fn select_booking(&mut self, table: TableId, time: NaiveTime) -> Option<BookingId> {
        let instant = self.current_date.and_time(time);
        self.selected = self
            .current
            .iter()
            .filter(|b| b.table == table && b.slot.strictly_contains(instant))
            .last()
            .map(|b| b.id);
        self.notifier.notify();
        self.selected
    }

    pub fn deselect(&mut self) {
        self.selected = None;
        self.notifier.notify();
    }

    pub fn cancel(&mut self) -> CoreResult<Outcome> {
        let Some(id) = self.selected else {
            return Ok(Outcome::NoOp(NoOpReason::NothingSelected));
        };

        if !self.notifier.confirm(CONFIRM_CANCEL) {
            self.notifier.notify();
            return Ok(Outcome::Rejected(Rejection::CancellationDeclined));
        }

        self.store.remove_booking(id)?;
        self.current.retain(|b| b.id != id);
        self.selected = None;
        info!("Cancelled booking {}", id);
        self.notifier.notify();
        Ok(Outcome::Applied(()))
    }

    pub fn record_arrival(&mut self, time: NaiveTime) -> CoreResult<Outcome> {
        let Some(mut booking) = self.selected_booking().cloned() else {
            return Ok(Outcome::NoOp(NoOpReason::NothingSelected));
        };

        if booking.has_arrived() {
            self.notifier.inform(ARRIVAL_ALREADY_RECORDED);
            return Ok(Outcome::NoOp(NoOpReason::ArrivalAlreadyRecorded));
        }

        booking.record_arrival(time);
        self.store.update_booking(&booking)?;
        info!("Recorded arrival at {} for booking {}", time, booking.id);
        self.replace_cached(booking);
        self.notifier.notify();
        Ok(Outcome::Applied(()))
    }

    /// Moves the selected booking to `table`. Observers are told about the
    /// attempt whether or not it succeeds.
    pub fn transfer(&mut self, time: NaiveTime, table: TableId) -> CoreResult<Outcome> {
        let Some(booking) = self.selected_booking().cloned() else {
            return Ok(Outcome::NoOp(NoOpReason::NothingSelected));
        };

        debug!("Transfer of booking {} to table {} requested at {}", booking.id, table, time);
        let outcome = self.move_booking(booking, table);
        self.notifier.notify();
        outcome
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Bookings of the displayed date, oldest first.
    pub fn bookings(&self) -> impl Iterator<Item = &Booking> + '_ {
        self.current.iter()
    }

    pub fn selected_booking(&self) -> Option<&Booking> {
        let id = self.selected?;
        self.current.iter().find(|b| b.id == id)
    }

    pub fn table_numbers(&self) -> Vec<TableId> {
        self.store.table_numbers()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn rules(&self) -> &BookingRules {
        &self.rules
    }

    fn move_booking(&mut self, mut booking: Booking, table: TableId) -> CoreResult<Outcome> {
        if booking.table == table {
            return Ok(Outcome::NoOp(NoOpReason::SameTable));
        }

        let nearby = self.bookings_near(&booking.slot);
        if is_double_booked(&nearby, &booking.slot, table, Some(booking.id)) {
            self.notifier.inform(DOUBLE_BOOKING);
            return Ok(Outcome::Rejected(Rejection::DoubleBooked { table }));
        }

        if let Err(rejection) = self.check_overflow(table, booking.covers)? {
            return Ok(Outcome::Rejected(rejection));
        }

        let from = booking.table;
        booking.move_to(table);
        self.store.update_booking(&booking)?;
        info!("Moved booking {} from table {} to table {}", booking.id, from, table);
        self.replace_cached(booking);
        Ok(Outcome::Applied(()))
    }

    /// Picks the table for a new party and clears it with the user if the
    /// party does not fit.
    fn place_party(
        &self,
        covers: u32,
        date: NaiveDate,
        time: NaiveTime,
        requested_table: Option<TableId>,
    ) -> CoreResult<Result<TableId, Rejection>> {
        if covers == 0 {
            return Err(CoreError::Validation("a booking needs at least one cover".to_string()));
        }

        let slot = TimeSlot::starting_at(date.and_time(time), self.store.booking_duration());
        let nearby = self.bookings_near(&slot);

        let table = match self.honored_request(requested_table) {
            Some(table) => {
                if is_double_booked(&nearby, &slot, table, None) {
                    self.notifier.inform(DOUBLE_BOOKING);
                    return Ok(Err(Rejection::DoubleBooked { table }));
                }
                table
            }
            None => {
                let tables = self.store.table_numbers();
                match auto_assign_table(&nearby, &tables, covers, &slot, &self.rules) {
                    Some(table) => table,
                    None => {
                        self.notifier.inform(NO_TABLE_AVAILABLE);
                        return Ok(Err(Rejection::NoTableAvailable));
                    }
                }
            }
        };

        Ok(self.check_overflow(table, covers)?.map(|()| table))
    }

    fn honored_request(&self, requested_table: Option<TableId>) -> Option<TableId> {
        if !self.rules.honor_requested_table {
            return None;
        }
        requested_table.filter(|table| self.store.table(*table).is_ok())
    }

    fn check_overflow(&self, table: TableId, covers: u32) -> CoreResult<Result<(), Rejection>> {
        let found = self.store.table(table)?;
        if !found.overflows(covers) {
            return Ok(Ok(()));
        }
        let capacity = found.capacity;
        if self.notifier.confirm(CONFIRM_OVERFILL) {
            info!("Overfilling table {} ({} seats) with {} covers", table, capacity, covers);
            Ok(Ok(()))
        } else {
            warn!("Declined to seat {} covers at table {} ({} seats)", covers, table, capacity);
            Ok(Err(Rejection::OverflowDeclined { table, covers, capacity }))
        }
    }

    /// Every booking dated on a day that `slot` could share a table with:
    /// from the earliest start whose slot still runs into `slot`, up to the
    /// day `slot` ends on. Covers slots that cross midnight in either
    /// direction.
    fn bookings_near(&self, slot: &TimeSlot) -> Vec<Booking> {
        let mut day = (slot.start - self.store.booking_duration()).date();
        let last = slot.end.date();
        let mut bookings = Vec::new();
        while day <= last {
            if day == self.current_date {
                bookings.extend(self.current.iter().cloned());
            } else {
                bookings.extend(self.store.bookings_on(day).cloned());
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        bookings
    }

    /// Adds a freshly stored booking to the view if it is for the displayed date.
    fn admit(&mut self, booking: Booking) -> BookingId {
        let id = booking.id;
        if booking.date == self.current_date {
            self.current.push(booking);
        }
        self.notifier.notify();
        id
    }

    fn replace_cached(&mut self, booking: Booking) {
        if let Some(cached) = self.current.iter_mut().find(|b| b.id == booking.id) {
            *cached = booking;
        }
    }
}
