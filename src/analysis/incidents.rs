use log::warn;

use crate::data::columns::ColumnRole;
use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Incident filter
// ---------------------------------------------------------------------------

/// Filter high-severity incidents out of a loaded table.
///
/// Keeps the rows whose traffic condition equals `condition` exactly and
/// whose vehicle count is strictly greater than `min_vehicles`, then
/// drops the columns that are missing across every kept row.
///
/// A table without the two required columns yields an empty table:
/// "this dataset doesn't support this analysis" is an expected outcome,
/// not a failure.
pub fn filter_conditions(table: &Table, condition: &str, min_vehicles: i64) -> Table {
    let Some(cond_idx) = ColumnRole::TrafficCondition.resolve(table) else {
        warn!("column 'Condizioni traffico' not found in dataset");
        return Table::empty();
    };
    let Some(vehicles_idx) = ColumnRole::VehicleCount.resolve(table) else {
        warn!("column 'N. veicoli coinvolti' not found in dataset");
        return Table::empty();
    };

    let threshold = min_vehicles as f64;
    table
        .retain_rows(|row| {
            let condition_matches = row[cond_idx].as_text() == Some(condition);
            let vehicles_exceed = row[vehicles_idx]
                .as_f64()
                .map(|count| count > threshold)
                .unwrap_or(false);
            condition_matches && vehicles_exceed
        })
        .drop_empty_columns()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;

    fn incidents() -> Table {
        parse_csv(
            "Condizioni traffico,N. veicoli coinvolti,Note\n\
             Intenso,3,\n\
             Intenso,1,\n\
             Normale,5,\n",
        )
        .unwrap()
    }

    #[test]
    fn default_predicate_keeps_only_severe_rows() {
        let filtered = filter_conditions(&incidents(), "Intenso", 2);
        assert_eq!(filtered.len(), 1);
        assert_eq!(
            filtered.rows[0][0].as_text(),
            Some("Intenso"),
            "only the Intenso row with >2 vehicles survives"
        );
    }

    #[test]
    fn threshold_is_strictly_greater_than() {
        // A count equal to the minimum does not pass.
        let table = parse_csv("Condizioni traffico,N. veicoli coinvolti\nIntenso,2\n").unwrap();
        assert!(filter_conditions(&table, "Intenso", 2).is_empty());
    }

    #[test]
    fn missing_required_column_yields_empty_table() {
        let table = parse_csv("Condizioni traffico,Note\nIntenso,x\n").unwrap();
        let filtered = filter_conditions(&table, "Intenso", 2);
        assert!(filtered.is_empty());
        assert!(filtered.columns.is_empty());
    }

    #[test]
    fn all_null_columns_are_dropped_from_the_subset() {
        // "Note" is empty on the surviving row, so it disappears.
        let filtered = filter_conditions(&incidents(), "Intenso", 2);
        assert_eq!(
            filtered.columns,
            vec!["Condizioni traffico", "N. veicoli coinvolti"]
        );
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = filter_conditions(&incidents(), "Intenso", 2);
        let twice = filter_conditions(&once, "Intenso", 2);
        assert_eq!(twice.columns, once.columns);
        assert_eq!(twice.rows, once.rows);
    }
}
