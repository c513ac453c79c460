//! Route summary and unit conversion.

use serde::Serialize;

/// Distance and duration of a route, in display units.
///
/// Built from the raw metres and seconds reported by the routing service.
/// Both conversions round the stored binary value, ties to even: `2.5`
/// minutes becomes `2`, while 1050 m (1.05 is stored slightly above) becomes
/// `1.1` km.
///
/// # Examples
///
/// ```
/// use distance_server::domain::RouteSummary;
///
/// let s = RouteSummary::from_raw(145_230.0, 6_120.0);
/// assert_eq!(s.distance_km, 145.2);
/// assert_eq!(s.duration_min, 102);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteSummary {
    /// Kilometres, one decimal place.
    pub distance_km: f64,

    /// Whole minutes.
    pub duration_min: u64,
}

impl RouteSummary {
    /// Convert raw metres and seconds.
    ///
    /// Negative or non-finite inputs clamp to zero.
    pub fn from_raw(distance_m: f64, duration_s: f64) -> Self {
        // Scaling by ten first would round 1.05 to an exact tie; formatting
        // rounds the exact value instead.
        let km = format!("{:.1}", distance_m / 1000.0)
            .parse::<f64>()
            .unwrap_or(0.0);
        let mins = (duration_s / 60.0).round_ties_even();

        Self {
            distance_km: if km.is_finite() { km.max(0.0) } else { 0.0 },
            duration_min: if mins.is_finite() && mins > 0.0 {
                mins as u64
            } else {
                0
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_example() {
        let s = RouteSummary::from_raw(145_230.0, 6_120.0);
        assert_eq!(s.distance_km, 145.2);
        assert_eq!(s.duration_min, 102);
    }

    #[test]
    fn zero_route() {
        let s = RouteSummary::from_raw(0.0, 0.0);
        assert_eq!(s.distance_km, 0.0);
        assert_eq!(s.duration_min, 0);
    }

    #[test]
    fn minutes_round_half_to_even() {
        assert_eq!(RouteSummary::from_raw(0.0, 90.0).duration_min, 2);
        assert_eq!(RouteSummary::from_raw(0.0, 150.0).duration_min, 2);
        assert_eq!(RouteSummary::from_raw(0.0, 210.0).duration_min, 4);
        assert_eq!(RouteSummary::from_raw(0.0, 29.0).duration_min, 0);
        assert_eq!(RouteSummary::from_raw(0.0, 31.0).duration_min, 1);
    }

    #[test]
    fn kilometres_keep_one_decimal() {
        assert_eq!(RouteSummary::from_raw(1_049.0, 0.0).distance_km, 1.0);
        assert_eq!(RouteSummary::from_raw(1_051.0, 0.0).distance_km, 1.1);
        assert_eq!(RouteSummary::from_raw(587_912.4, 0.0).distance_km, 587.9);
    }

    #[test]
    fn kilometre_ties_follow_stored_value() {
        let cases = [
            (1_050.0, 1.1),
            (350.0, 0.3),
            (250.0, 0.2),
            (2_650.0, 2.6),
            (450.0, 0.5),
            (145_230.0, 145.2),
        ];
        for (metres, km) in cases {
            assert_eq!(RouteSummary::from_raw(metres, 0.0).distance_km, km, "{metres} m");
        }
    }

    #[test]
    fn garbage_clamps_to_zero() {
        let s = RouteSummary::from_raw(f64::NAN, -60.0);
        assert_eq!(s.distance_km, 0.0);
        assert_eq!(s.duration_min, 0);
    }
}
