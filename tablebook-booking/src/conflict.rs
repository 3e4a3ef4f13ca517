use tablebook_shared::{Booking, BookingId, TableId, TimeSlot};

/// True when a booking other than `exclude` holds `table` during any part
/// of `slot`.
pub fn is_double_booked<'a, I>(
    bookings: I,
    slot: &TimeSlot,
    table: TableId,
    exclude: Option<BookingId>,
) -> bool
where
    I: IntoIterator<Item = &'a Booking>,
{
    bookings
        .into_iter()
        .any(|b| Some(b.id) != exclude && b.table == table && slot.overlaps(&b.slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveTime};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    fn walk_in(table: TableId, h: u32, m: u32) -> Booking {
        let time = NaiveTime::from_hms_opt(h, m, 0).unwrap();
        Booking::walk_in(2, date(), time, table, Duration::hours(2))
    }

    #[test]
    fn test_overlap_on_same_table_conflicts() {
        let existing = vec![walk_in(1, 18, 0)];
        let request = walk_in(1, 18, 30);
        assert!(is_double_booked(&existing, &request.slot, 1, None));
        assert!(!is_double_booked(&existing, &request.slot, 2, None));
    }

    #[test]
    fn test_conflict_is_symmetric() {
        let a = walk_in(4, 18, 0);
        let b = walk_in(4, 19, 15);
        let c = walk_in(4, 20, 0);
        for (x, y) in [(&a, &b), (&a, &c), (&b, &c)] {
            assert_eq!(
                is_double_booked([x], &y.slot, 4, None),
                is_double_booked([y], &x.slot, 4, None)
            );
        }
    }

    #[test]
    fn test_adjacent_bookings_do_not_conflict() {
        let existing = vec![walk_in(1, 18, 0)];
        assert!(!is_double_booked(&existing, &walk_in(1, 20, 0).slot, 1, None));
        assert!(!is_double_booked(&existing, &walk_in(1, 16, 0).slot, 1, None));
        assert!(is_double_booked(&existing, &walk_in(1, 16, 1).slot, 1, None));
    }

    #[test]
    fn test_excluded_booking_is_ignored() {
        let booking = walk_in(1, 18, 0);
        let existing = vec![booking.clone()];
        assert!(is_double_booked(&existing, &booking.slot, 1, None));
        assert!(!is_double_booked(&existing, &booking.slot, 1, Some(booking.id)));
    }
}
