//! Spatial risk normalization for the advisory density map.
//!
//! This crate turns raw geo-tagged risk points into renderable marker
//! geometry (radius, color tier) scaled against the current point set.

/// Min-max normalization of risk points into map markers.
pub mod heatmap {
    use ifa_core::wire::RiskPoint;
    use serde::Serialize;

    /// Default map centroid when no points are available (approximate
    /// center of India).
    pub const DEFAULT_CENTER: (f64, f64) = (22.5, 79.0);

    /// Zoom level when points exist.
    pub const POPULATED_ZOOM: u8 = 8;

    /// Zoom level for an empty map.
    pub const EMPTY_ZOOM: u8 = 5;

    /// Radius range for markers, in pixels.
    const MIN_RADIUS: f64 = 6.0;
    const RADIUS_SPAN: f64 = 16.0;

    /// Radius for a point whose intensity is missing or zero.
    const FALLBACK_RADIUS: f64 = 4.0;

    /// Stand-in for zero/missing intensities when computing the scale
    /// reference, so one dead sensor cannot zero out the whole map.
    const VALUE_EPSILON: f64 = 1e-4;

    /// Color tier for a normalized risk intensity.
    #[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
    pub enum RiskTier {
        Low,
        Mid,
        High,
    }

    impl RiskTier {
        /// Tier thresholds over the normalized value `v = value / max`.
        pub fn from_normalized(v: f64) -> RiskTier {
            if v > 0.66 {
                RiskTier::High
            } else if v > 0.33 {
                RiskTier::Mid
            } else {
                RiskTier::Low
            }
        }

        pub fn color(&self) -> &'static str {
            match self {
                RiskTier::High => "#ef4444",
                RiskTier::Mid => "#facc15",
                RiskTier::Low => "#4ade80",
            }
        }
    }

    /// A renderable density-map marker. Serialized to JSON for the map
    /// bridge.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct RiskMarker {
        pub lat: f64,
        pub lon: f64,
        pub value: f64,
        pub radius: f64,
        pub color: &'static str,
    }

    /// A fully normalized map: center, zoom and markers.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct RiskMap {
        pub center: (f64, f64),
        pub zoom: u8,
        pub markers: Vec<RiskMarker>,
    }

    fn usable(value: f64) -> bool {
        value.is_finite() && value > 0.0
    }

    /// Scale reference for the point set: 1.0 when empty, otherwise the
    /// maximum intensity with zero/missing values counted as epsilon.
    pub fn max_value(points: &[RiskPoint]) -> f64 {
        if points.is_empty() {
            return 1.0;
        }
        points
            .iter()
            .map(|p| if usable(p.value) { p.value } else { VALUE_EPSILON })
            .fold(f64::MIN, f64::max)
    }

    /// Arithmetic mean of the point coordinates; `DEFAULT_CENTER` when
    /// the set is empty.
    pub fn center(points: &[RiskPoint]) -> (f64, f64) {
        if points.is_empty() {
            return DEFAULT_CENTER;
        }
        let n = points.len() as f64;
        let lat = points.iter().map(|p| p.lat).sum::<f64>() / n;
        let lon = points.iter().map(|p| p.lon).sum::<f64>() / n;
        (lat, lon)
    }

    /// Marker radius for an intensity against the scale reference.
    pub fn radius_for(value: f64, max: f64) -> f64 {
        if !usable(value) || !usable(max) {
            return FALLBACK_RADIUS;
        }
        MIN_RADIUS + (value / max) * RADIUS_SPAN
    }

    /// Marker color for an intensity against the scale reference.
    /// Missing intensities always read as low risk.
    pub fn color_for(value: f64, max: f64) -> &'static str {
        if !usable(value) || !usable(max) {
            return RiskTier::Low.color();
        }
        RiskTier::from_normalized(value / max).color()
    }

    /// Normalize a point set into a renderable map.
    ///
    /// Pure function of the input: recomputed fully on every new fetch,
    /// never updated incrementally.
    pub fn normalize(points: &[RiskPoint]) -> RiskMap {
        let max = max_value(points);
        let markers = points
            .iter()
            .map(|p| RiskMarker {
                lat: p.lat,
                lon: p.lon,
                value: p.value,
                radius: radius_for(p.value, max),
                color: color_for(p.value, max),
            })
            .collect::<Vec<RiskMarker>>();
        let zoom = if markers.is_empty() {
            EMPTY_ZOOM
        } else {
            POPULATED_ZOOM
        };
        RiskMap {
            center: center(points),
            zoom,
            markers,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn point(lat: f64, lon: f64, value: f64) -> RiskPoint {
            RiskPoint { lat, lon, value }
        }

        #[test]
        fn test_normalize_scales_radii_and_colors() {
            let points = vec![
                point(9.9, 76.2, 1.0),
                point(10.0, 76.3, 5.0),
                point(10.1, 76.4, 10.0),
            ];
            let map = normalize(&points);
            assert_eq!(map.zoom, POPULATED_ZOOM);
            assert_eq!(map.markers.len(), 3);

            // max = 10: radii are 6 + (v/10)*16
            assert!((map.markers[0].radius - 7.6).abs() < 1e-9);
            assert!((map.markers[1].radius - 14.0).abs() < 1e-9);
            assert!((map.markers[2].radius - 22.0).abs() < 1e-9);

            // 0.1 -> low, 0.5 -> mid, 1.0 -> high
            assert_eq!(map.markers[0].color, RiskTier::Low.color());
            assert_eq!(map.markers[1].color, RiskTier::Mid.color());
            assert_eq!(map.markers[2].color, RiskTier::High.color());
        }

        #[test]
        fn test_center_is_mean_of_coordinates() {
            let points = vec![point(10.0, 76.0, 1.0), point(12.0, 78.0, 2.0)];
            let (lat, lon) = center(&points);
            assert!((lat - 11.0).abs() < 1e-9);
            assert!((lon - 77.0).abs() < 1e-9);
        }

        #[test]
        fn test_empty_set_renders_default_view() {
            let map = normalize(&[]);
            assert_eq!(map.center, DEFAULT_CENTER);
            assert_eq!(map.zoom, EMPTY_ZOOM);
            assert!(map.markers.is_empty());
            assert!((max_value(&[]) - 1.0).abs() < f64::EPSILON);
        }

        #[test]
        fn test_zero_value_point_gets_fallback_radius_and_low_color() {
            let points = vec![point(9.9, 76.2, 0.0), point(10.0, 76.3, 2.0)];
            let map = normalize(&points);
            assert!((map.markers[0].radius - FALLBACK_RADIUS).abs() < f64::EPSILON);
            assert_eq!(map.markers[0].color, RiskTier::Low.color());
            assert!((map.markers[1].radius - 22.0).abs() < 1e-9);
        }

        #[test]
        fn test_all_zero_values_scale_by_epsilon() {
            let points = vec![point(9.9, 76.2, 0.0)];
            assert!((max_value(&points) - VALUE_EPSILON).abs() < f64::EPSILON);
            let map = normalize(&points);
            assert!((map.markers[0].radius - FALLBACK_RADIUS).abs() < f64::EPSILON);
        }

        #[test]
        fn test_tier_thresholds() {
            assert_eq!(RiskTier::from_normalized(1.0), RiskTier::High);
            assert_eq!(RiskTier::from_normalized(0.67), RiskTier::High);
            assert_eq!(RiskTier::from_normalized(0.66), RiskTier::Mid);
            assert_eq!(RiskTier::from_normalized(0.34), RiskTier::Mid);
            assert_eq!(RiskTier::from_normalized(0.33), RiskTier::Low);
            assert_eq!(RiskTier::from_normalized(0.0), RiskTier::Low);
        }
    }
}
