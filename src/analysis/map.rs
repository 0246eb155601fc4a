use serde_json::json;

use super::geo::{mean_center, GeoPoint};

// ---------------------------------------------------------------------------
// Map document
// ---------------------------------------------------------------------------

/// Render a self-contained Leaflet HTML document with one marker per
/// point, centered on the coordinate mean. `None` when there is nothing
/// to plot.
pub fn render_map(points: &[GeoPoint], zoom: u8) -> Option<String> {
    let center = mean_center(points)?;

    let markers = json!(points
        .iter()
        .map(|p| [p.lat, p.lon])
        .collect::<Vec<[f64; 2]>>());

    Some(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Mappa incidenti</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map('map').setView([{lat}, {lon}], {zoom});
L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
    attribution: '&copy; OpenStreetMap contributors'
}}).addTo(map);
var markers = {markers};
markers.forEach(function (coords, idx) {{
    L.marker(coords).addTo(map).bindPopup('Incidente ' + (idx + 1));
}});
</script>
</body>
</html>
"#,
        lat = center.lat,
        lon = center.lon,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_embeds_every_marker_and_the_mean_center() {
        let points = vec![
            GeoPoint { lat: 41.0, lon: 12.0 },
            GeoPoint { lat: 43.0, lon: 13.0 },
        ];
        let html = render_map(&points, 13).unwrap();
        assert!(html.contains("[[41.0,12.0],[43.0,13.0]]"));
        assert!(html.contains("setView([42, 12.5], 13)"));
        assert!(html.contains("Incidente "));
    }

    #[test]
    fn no_points_means_no_document() {
        assert_eq!(render_map(&[], 13), None);
    }
}
