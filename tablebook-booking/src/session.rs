use std::sync::{Arc, Mutex};

use tablebook_core::{CoreError, CoreResult, ReservationStore};

use crate::coordinator::BookingCoordinator;

/// A coordinator that several callers can hold at once.
///
/// The lock is held for the whole command, including any confirmation
/// prompt, so a prompt must not call back into the same system.
pub struct SharedBookingSystem<S: ReservationStore> {
    inner: Arc<Mutex<BookingCoordinator<S>>>,
}

impl<S: ReservationStore> Clone for SharedBookingSystem<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ReservationStore> SharedBookingSystem<S> {
    pub fn new(coordinator: BookingCoordinator<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(coordinator)),
        }
    }

    /// Runs one command against the coordinator with exclusive access.
    pub fn with<R>(&self, command: impl FnOnce(&mut BookingCoordinator<S>) -> R) -> CoreResult<R> {
        let mut coordinator = self
            .inner
            .lock()
            .map_err(|e| CoreError::Internal(format!("booking system lock poisoned: {}", e)))?;
        Ok(command(&mut coordinator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use std::thread;
    use tablebook_store::{BookingRules, Restaurant};

    #[test]
    fn test_commands_from_several_threads_are_serialized() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        let system = SharedBookingSystem::new(BookingCoordinator::with_today(
            Restaurant::standard(),
            BookingRules::default(),
            date,
        ));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let system = system.clone();
                thread::spawn(move || {
                    let time = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
                    system
                        .with(|c| c.make_walk_in(2, date, time, None))
                        .unwrap()
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_applied());
        }

        let mut tables = system
            .with(|c| c.bookings().map(|b| b.table).collect::<Vec<_>>())
            .unwrap();
        tables.sort_unstable();
        assert_eq!(tables, vec![1, 2, 3, 4]);
    }
}
