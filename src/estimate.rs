use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 30.0;

// Served while either endpoint is still unresolved, so the form stays usable
// pending manual correction.
pub const FALLBACK_ESTIMATE: Estimate = Estimate {
    distance_km: 15.0,
    time_minutes: 35,
};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub distance_km: f64,
    pub time_minutes: i64,
}

pub fn leg(from: Option<Coordinates>, to: Option<Coordinates>, average_speed_kmh: f64) -> Estimate {
    match (from, to) {
        (Some(from), Some(to)) => {
            let distance_km = from.haversine_km(&to);
            let time_minutes = (distance_km / average_speed_kmh * 60.0).round() as i64;

            Estimate {
                distance_km,
                time_minutes,
            }
        }
        _ => FALLBACK_ESTIMATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noida() -> Coordinates {
        Coordinates::new(28.609000, 77.363000).unwrap()
    }

    fn connaught_place() -> Coordinates {
        Coordinates::new(28.632700, 77.219800).unwrap()
    }

    #[test]
    fn distance_is_symmetric() {
        let a = leg(Some(noida()), Some(connaught_place()), DEFAULT_AVERAGE_SPEED_KMH);
        let b = leg(Some(connaught_place()), Some(noida()), DEFAULT_AVERAGE_SPEED_KMH);

        assert_eq!(a.distance_km, b.distance_km);
        assert_eq!(a.time_minutes, b.time_minutes);
    }

    #[test]
    fn identical_endpoints_estimate_to_zero() {
        let estimate = leg(Some(noida()), Some(noida()), DEFAULT_AVERAGE_SPEED_KMH);

        assert_eq!(estimate.distance_km, 0.0);
        assert_eq!(estimate.time_minutes, 0);
    }

    #[test]
    fn sector_62_to_connaught_place() {
        let estimate = leg(Some(noida()), Some(connaught_place()), DEFAULT_AVERAGE_SPEED_KMH);

        assert!((estimate.distance_km - 14.2).abs() < 1.0);
        let expected_minutes = (estimate.distance_km / 30.0 * 60.0).round() as i64;
        assert_eq!(estimate.time_minutes, expected_minutes);
        assert!((estimate.time_minutes - 28).abs() <= 2);
    }

    #[test]
    fn unresolved_endpoint_falls_back_to_default_pair() {
        assert_eq!(
            leg(None, Some(noida()), DEFAULT_AVERAGE_SPEED_KMH),
            FALLBACK_ESTIMATE
        );
        assert_eq!(
            leg(Some(noida()), None, DEFAULT_AVERAGE_SPEED_KMH),
            FALLBACK_ESTIMATE
        );
        assert_eq!(leg(None, None, DEFAULT_AVERAGE_SPEED_KMH), FALLBACK_ESTIMATE);
    }

    #[test]
    fn slower_speed_lengthens_the_time_estimate() {
        let city = leg(Some(noida()), Some(connaught_place()), 30.0);
        let crawl = leg(Some(noida()), Some(connaught_place()), 15.0);

        assert_eq!(city.distance_km, crawl.distance_km);
        assert!(crawl.time_minutes > city.time_minutes);
        assert_eq!(
            crawl.time_minutes,
            (crawl.distance_km / 15.0 * 60.0).round() as i64
        );
    }
}
