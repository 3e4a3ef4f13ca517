use tablebook_core::{CoreError, CoreResult};
use tablebook_shared::{Table, TableId};

use crate::app_config::{RestaurantConfig, TableConfig};

/// The fixed set of tables, ordered by number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    tables: Vec<Table>,
}

impl TableLayout {
    pub fn new(tables: impl IntoIterator<Item = Table>) -> CoreResult<Self> {
        let mut tables: Vec<Table> = tables.into_iter().collect();
        tables.sort_by_key(|t| t.number);

        if let Some(table) = tables.iter().find(|t| t.number == 0) {
            return Err(CoreError::Validation(format!(
                "table numbers start at 1, got {} (capacity {})",
                table.number, table.capacity
            )));
        }
        if let Some(table) = tables.iter().find(|t| t.capacity == 0) {
            return Err(CoreError::Validation(format!("table {} has no seats", table.number)));
        }
        if let Some(pair) = tables.windows(2).find(|w| w[0].number == w[1].number) {
            return Err(CoreError::Validation(format!("table {} listed twice", pair[0].number)));
        }

        Ok(Self { tables })
    }

    pub fn from_config(config: &RestaurantConfig) -> CoreResult<Self> {
        Self::new(
            config
                .tables
                .iter()
                .map(|TableConfig { number, capacity }| Table::new(*number, *capacity)),
        )
    }

    /// Tables 1-10 as shipped in the default configuration.
    pub fn standard() -> Self {
        Self {
            tables: RestaurantConfig::default()
                .tables
                .iter()
                .map(|t| Table::new(t.number, t.capacity))
                .collect(),
        }
    }

    pub fn get(&self, number: TableId) -> Option<&Table> {
        self.tables
            .binary_search_by_key(&number, |t| t.number)
            .ok()
            .map(|i| &self.tables[i])
    }

    pub fn contains(&self, number: TableId) -> bool {
        self.get(number).is_some()
    }

    pub fn numbers(&self) -> Vec<TableId> {
        self.tables.iter().map(|t| t.number).collect()
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }
}

/// Table numbers of the standard floor plan, the same for every process.
pub fn standard_table_numbers() -> Vec<TableId> {
    TableLayout::standard().numbers()
}
