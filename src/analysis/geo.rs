use log::info;

use crate::data::columns::ColumnRole;
use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Coordinate extraction
// ---------------------------------------------------------------------------

/// A validated latitude/longitude pair usable for map plotting. Both
/// values are present and numeric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Extract one [`GeoPoint`] per geolocated row, in original row order.
///
/// When `lat_col`/`lon_col` are not supplied, the coordinate columns are
/// resolved through the [`ColumnRole`] alias sets. Rows with a missing
/// or non-numeric value in either column are dropped. If no coordinate
/// columns can be resolved the result is empty, not an error.
pub fn locate_points(table: &Table, lat_col: Option<&str>, lon_col: Option<&str>) -> Vec<GeoPoint> {
    let lat_idx = match lat_col {
        Some(name) => table.column_index(name),
        None => ColumnRole::Latitude.resolve(table),
    };
    let lon_idx = match lon_col {
        Some(name) => table.column_index(name),
        None => ColumnRole::Longitude.resolve(table),
    };
    let (Some(lat_idx), Some(lon_idx)) = (lat_idx, lon_idx) else {
        info!("no coordinate columns found; available: {:?}", table.columns);
        return Vec::new();
    };

    table
        .rows
        .iter()
        .filter_map(|row| {
            let lat = row[lat_idx].as_f64()?;
            let lon = row[lon_idx].as_f64()?;
            Some(GeoPoint { lat, lon })
        })
        .collect()
}

/// Mean of the points; used to center the map. `None` for an empty set.
pub fn mean_center(points: &[GeoPoint]) -> Option<GeoPoint> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    Some(GeoPoint {
        lat: points.iter().map(|p| p.lat).sum::<f64>() / n,
        lon: points.iter().map(|p| p.lon).sum::<f64>() / n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;

    #[test]
    fn rows_with_missing_coordinates_are_excluded() {
        let table = parse_csv(
            "Latitudine,Longitudine\n\
             41.9,12.5\n\
             ,12.6\n\
             41.8,12.4\n",
        )
        .unwrap();
        let points = locate_points(&table, None, None);
        assert_eq!(
            points,
            vec![
                GeoPoint { lat: 41.9, lon: 12.5 },
                GeoPoint { lat: 41.8, lon: 12.4 },
            ]
        );
    }

    #[test]
    fn explicit_column_names_bypass_alias_search() {
        let table = parse_csv("posizione_y,posizione_x\n41.9,12.5\n").unwrap();
        // Aliases can't resolve these headers...
        assert!(locate_points(&table, None, None).is_empty());
        // ...but explicit names can.
        let points = locate_points(&table, Some("posizione_y"), Some("posizione_x"));
        assert_eq!(points, vec![GeoPoint { lat: 41.9, lon: 12.5 }]);
    }

    #[test]
    fn non_numeric_coordinates_count_as_missing() {
        let table = parse_csv("lat,lon\nnord,12.5\n41.9,12.5\n").unwrap();
        assert_eq!(locate_points(&table, None, None).len(), 1);
    }

    #[test]
    fn no_resolvable_columns_is_an_empty_result() {
        let table = parse_csv("a,b\n1,2\n").unwrap();
        assert!(locate_points(&table, None, None).is_empty());
    }

    #[test]
    fn center_is_the_coordinate_mean() {
        let points = vec![
            GeoPoint { lat: 41.0, lon: 12.0 },
            GeoPoint { lat: 43.0, lon: 13.0 },
        ];
        let center = mean_center(&points).unwrap();
        assert_eq!(center, GeoPoint { lat: 42.0, lon: 12.5 });
        assert_eq!(mean_center(&[]), None);
    }
}
