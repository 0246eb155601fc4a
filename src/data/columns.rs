use super::model::Table;

// ---------------------------------------------------------------------------
// Declarative column roles
// ---------------------------------------------------------------------------
//
// Every component that needs a domain column goes through this table
// instead of scattering name literals: the incident filter matches its
// two columns literally, the coordinate locator searches an alias set
// case-insensitively.

/// How a role's aliases are compared against header names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchPolicy {
    Exact,
    CaseInsensitive,
}

/// A column the analysis recognizes, with its alias set in priority
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    TrafficCondition,
    VehicleCount,
    Latitude,
    Longitude,
}

impl ColumnRole {
    /// Recognized header names, highest priority first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            ColumnRole::TrafficCondition => &["Condizioni traffico"],
            ColumnRole::VehicleCount => &["N. veicoli coinvolti"],
            ColumnRole::Latitude => &["latitudine", "latitude", "lat", "y_coord", "y"],
            ColumnRole::Longitude => &["longitudine", "longitude", "lon", "x_coord", "x"],
        }
    }

    fn policy(self) -> MatchPolicy {
        match self {
            ColumnRole::TrafficCondition | ColumnRole::VehicleCount => MatchPolicy::Exact,
            ColumnRole::Latitude | ColumnRole::Longitude => MatchPolicy::CaseInsensitive,
        }
    }

    /// Resolve the role to a column index of `table`.
    ///
    /// Aliases are tried in listed order; the first alias present in the
    /// table wins, regardless of column position.
    pub fn resolve(self, table: &Table) -> Option<usize> {
        let policy = self.policy();
        for alias in self.aliases() {
            let hit = match policy {
                MatchPolicy::Exact => table.columns.iter().position(|c| c == alias),
                MatchPolicy::CaseInsensitive => table
                    .columns
                    .iter()
                    .position(|c| c.to_lowercase() == *alias),
            };
            if hit.is_some() {
                return hit;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(columns: &[&str]) -> Table {
        Table::new(columns.iter().map(|c| c.to_string()).collect(), Vec::new())
    }

    #[test]
    fn coordinate_aliases_are_case_insensitive() {
        let table = table_with(&["Latitudine", "LONGITUDE"]);
        assert_eq!(ColumnRole::Latitude.resolve(&table), Some(0));
        assert_eq!(ColumnRole::Longitude.resolve(&table), Some(1));
    }

    #[test]
    fn alias_priority_follows_listed_order() {
        // Both "y" and "latitudine" present: "latitudine" is listed
        // first, so it wins even though "y" comes first positionally.
        let table = table_with(&["y", "latitudine"]);
        assert_eq!(ColumnRole::Latitude.resolve(&table), Some(1));
    }

    #[test]
    fn incident_columns_match_literally() {
        let table = table_with(&["Condizioni traffico", "N. veicoli coinvolti"]);
        assert_eq!(ColumnRole::TrafficCondition.resolve(&table), Some(0));
        assert_eq!(ColumnRole::VehicleCount.resolve(&table), Some(1));

        // Case-variant headers do not satisfy the exact policy.
        let table = table_with(&["condizioni traffico"]);
        assert_eq!(ColumnRole::TrafficCondition.resolve(&table), None);
    }

    #[test]
    fn unresolvable_role_is_none() {
        let table = table_with(&["foo", "bar"]);
        assert_eq!(ColumnRole::Latitude.resolve(&table), None);
    }
}
