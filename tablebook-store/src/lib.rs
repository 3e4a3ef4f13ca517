pub mod app_config;
pub mod layout;
pub mod restaurant;

pub use app_config::{BookingRules, Config};
pub use layout::{standard_table_numbers, TableLayout};
pub use restaurant::Restaurant;
