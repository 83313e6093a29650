//! Pure allocation helpers for the hourly balance step.
//!
//! These functions carry the ordering and tie-break rules of the balance
//! step; the engine strings them together and owns the device state.

use crate::sim::types::PathEfficiency;

/// Result of allocating solar output across the three load categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarAllocation {
    /// Hotel load not covered by solar (kW).
    pub hotel_left_kw: f32,
    /// Auxiliary load not covered by solar (kW).
    pub aux_left_kw: f32,
    /// Propulsion load not covered by solar (kW).
    pub prop_left_kw: f32,
    /// Solar output left after all three categories (kW).
    pub surplus_kw: f32,
}

/// Allocates solar output to loads in strict hotel > aux > prop priority.
///
/// Each category consumes the minimum of its remaining load and the
/// remaining solar; whatever solar survives all three becomes surplus
/// offered to the battery at the end of the hour.
pub fn allocate_solar(solar_kw: f32, hotel_kw: f32, aux_kw: f32, prop_kw: f32) -> SolarAllocation {
    let used_h = hotel_kw.min(solar_kw);
    let mut s_left = solar_kw - used_h;

    let used_a = aux_kw.min(s_left);
    s_left -= used_a;

    let used_p = prop_kw.min(s_left);
    s_left -= used_p;

    SolarAllocation {
        hotel_left_kw: hotel_kw - used_h,
        aux_left_kw: aux_kw - used_a,
        prop_left_kw: prop_kw - used_p,
        surplus_kw: s_left,
    }
}

/// Delivers power through a lossy path and debits the source capacity.
///
/// Delivered power is `min(need, avail * eff)`; the source is debited by
/// `delivered / eff` (the raw input backing the delivery). A degenerate
/// (<= 0) efficiency delivers nothing and leaves the source untouched.
///
/// Returns `(delivered_kw, avail_after_kw)`.
pub fn take_path(need_kw: f32, avail_kw: f32, eff: f32) -> (f32, f32) {
    if eff <= 0.0 {
        return (0.0, avail_kw);
    }
    let delivered = need_kw.min(avail_kw * eff);
    (delivered, avail_kw - delivered / eff)
}

/// Mechanical power routing from the two motors to the two shafts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropulsionRouting {
    /// Shaft 1 power from motor 1's direct path (kW).
    pub p1_from_m1: f32,
    /// Shaft 2 power from motor 2's direct path (kW).
    pub p2_from_m2: f32,
    /// Shaft 2 power cross-fed from motor 1 (kW).
    pub p2_from_m1: f32,
    /// Shaft 1 power cross-fed from motor 2 (kW).
    pub p1_from_m2: f32,
    /// Motor 1 capacity remaining for grid production (kW).
    pub m1_avail_kw: f32,
    /// Motor 2 capacity remaining for grid production (kW).
    pub m2_avail_kw: f32,
}

impl PropulsionRouting {
    /// Total mechanical power delivered to shaft 1.
    pub fn p1_supplied_kw(&self) -> f32 {
        self.p1_from_m1 + self.p1_from_m2
    }

    /// Total mechanical power delivered to shaft 2.
    pub fn p2_supplied_kw(&self) -> f32 {
        self.p2_from_m2 + self.p2_from_m1
    }
}

/// Routes motor capacity to the two shafts: direct feed first, then
/// cross-feed.
///
/// Ordering is fixed: each motor serves its own shaft at the direct
/// efficiency, then motor 1 cross-feeds shaft 2's remaining need, then
/// motor 2 cross-feeds shaft 1's. Capacity left afterwards is available
/// for grid production.
pub fn route_propulsion(
    need_p1_kw: f32,
    need_p2_kw: f32,
    m1_avail_kw: f32,
    m2_avail_kw: f32,
    path: &PathEfficiency,
) -> PropulsionRouting {
    let (p1_from_m1, m1_avail) = take_path(need_p1_kw, m1_avail_kw, path.motor_direct);
    let (p2_from_m2, m2_avail) = take_path(need_p2_kw, m2_avail_kw, path.motor_direct);

    let (p2_from_m1, m1_avail) = take_path(need_p2_kw - p2_from_m2, m1_avail, path.motor_cross);
    let (p1_from_m2, m2_avail) = take_path(need_p1_kw - p1_from_m1, m2_avail, path.motor_cross);

    PropulsionRouting {
        p1_from_m1,
        p2_from_m2,
        p2_from_m1,
        p1_from_m2,
        m1_avail_kw: m1_avail,
        m2_avail_kw: m2_avail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solar_covers_hotel_first() {
        let a = allocate_solar(100.0, 190.0, 30.0, 900.0);
        assert_eq!(a.hotel_left_kw, 90.0);
        assert_eq!(a.aux_left_kw, 30.0);
        assert_eq!(a.prop_left_kw, 900.0);
        assert_eq!(a.surplus_kw, 0.0);
    }

    #[test]
    fn solar_spills_in_priority_order() {
        let a = allocate_solar(230.0, 190.0, 30.0, 900.0);
        assert_eq!(a.hotel_left_kw, 0.0);
        assert_eq!(a.aux_left_kw, 20.0);
        assert_eq!(a.prop_left_kw, 900.0);
        assert_eq!(a.surplus_kw, 0.0);
    }

    #[test]
    fn solar_surplus_after_all_loads() {
        let a = allocate_solar(50.0, 10.0, 5.0, 20.0);
        assert_eq!(a.hotel_left_kw, 0.0);
        assert_eq!(a.aux_left_kw, 0.0);
        assert_eq!(a.prop_left_kw, 0.0);
        assert_eq!(a.surplus_kw, 15.0);
    }

    #[test]
    fn zero_solar_leaves_loads_intact() {
        let a = allocate_solar(0.0, 190.0, 30.0, 900.0);
        assert_eq!(a.hotel_left_kw, 190.0);
        assert_eq!(a.aux_left_kw, 30.0);
        assert_eq!(a.prop_left_kw, 900.0);
        assert_eq!(a.surplus_kw, 0.0);
    }

    #[test]
    fn take_path_caps_at_need() {
        let (delivered, left) = take_path(100.0, 500.0, 0.95);
        assert_eq!(delivered, 100.0);
        assert!((left - (500.0 - 100.0 / 0.95)).abs() < 1e-4);
    }

    #[test]
    fn take_path_caps_at_capacity() {
        let (delivered, left) = take_path(1000.0, 200.0, 0.9);
        assert!((delivered - 180.0).abs() < 1e-4);
        assert!(left.abs() < 1e-4);
    }

    #[test]
    fn take_path_degenerate_eff_delivers_nothing() {
        let (delivered, left) = take_path(100.0, 200.0, 0.0);
        assert_eq!(delivered, 0.0);
        assert_eq!(left, 200.0);
    }

    #[test]
    fn direct_feed_serves_own_shaft() {
        let path = PathEfficiency::default();
        let r = route_propulsion(450.0, 450.0, 800.0, 800.0, &path);
        assert_eq!(r.p1_from_m1, 450.0);
        assert_eq!(r.p2_from_m2, 450.0);
        assert_eq!(r.p2_from_m1, 0.0);
        assert_eq!(r.p1_from_m2, 0.0);
        assert_eq!(r.m1_avail_kw, 350.0);
        assert_eq!(r.m2_avail_kw, 350.0);
    }

    #[test]
    fn cross_feed_covers_dead_motor() {
        let path = PathEfficiency::default();
        // Motor 2 is off: shaft 2 is served by motor 1's cross-feed.
        let r = route_propulsion(450.0, 450.0, 1000.0, 0.0, &path);
        assert_eq!(r.p1_from_m1, 450.0);
        assert_eq!(r.p2_from_m2, 0.0);
        // 550 kW of motor 1 capacity remains; cross-feed delivers
        // min(450, 550 * 0.9025) = 450 kW.
        assert!((r.p2_from_m1 - 450.0).abs() < 1e-4);
        assert!((r.m1_avail_kw - (550.0 - 450.0 / 0.9025)).abs() < 1e-3);
    }

    #[test]
    fn cross_feed_limited_by_capacity() {
        let path = PathEfficiency::default();
        let r = route_propulsion(450.0, 450.0, 500.0, 0.0, &path);
        assert_eq!(r.p1_from_m1, 450.0);
        // Only 50 kW of motor 1 capacity remains for cross-feed.
        assert!((r.p2_from_m1 - 50.0 * 0.9025).abs() < 1e-3);
        assert!(r.m1_avail_kw.abs() < 1e-3);
        assert!(r.p2_supplied_kw() < 450.0);
    }

    #[test]
    fn direct_eff_below_one_debits_more_capacity() {
        let path = PathEfficiency {
            motor_direct: 0.9,
            ..PathEfficiency::default()
        };
        let r = route_propulsion(90.0, 0.0, 200.0, 0.0, &path);
        assert_eq!(r.p1_from_m1, 90.0);
        assert!((r.m1_avail_kw - 100.0).abs() < 1e-4);
    }
}
