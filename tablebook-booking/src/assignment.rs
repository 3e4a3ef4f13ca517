use tablebook_shared::{Booking, TableId, TimeSlot};
use tablebook_store::BookingRules;
use tracing::debug;

use crate::conflict::is_double_booked;

/// Tables a party of `covers` may be auto-assigned to, in the order they
/// are tried. Small parties may use any table; larger ones skip the
/// two-tops at the front of the room.
pub fn candidate_tables<'a>(
    tables: &'a [TableId],
    covers: u32,
    rules: &BookingRules,
) -> impl Iterator<Item = TableId> + 'a {
    let first = if covers <= rules.small_party_max_covers {
        1
    } else {
        rules.large_party_first_table
    };
    tables.iter().copied().filter(move |number| *number >= first)
}

/// First candidate table that is free for the whole of `slot`, or `None`
/// when every candidate is taken. `tables` must be in ascending order.
pub fn auto_assign_table(
    bookings: &[Booking],
    tables: &[TableId],
    covers: u32,
    slot: &TimeSlot,
    rules: &BookingRules,
) -> Option<TableId> {
    let assigned = candidate_tables(tables, covers, rules)
        .find(|table| !is_double_booked(bookings, slot, *table, None));
    debug!(
        "Auto-assigned table {:?} for {} covers at {}",
        assigned, covers, slot.start
    );
    assigned
}
