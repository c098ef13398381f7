//! Active-period lookup.

use super::types::DashaPeriod;

/// First period whose inclusive range holds `jd`, if any.
///
/// Adjacent periods share a boundary; the earlier one wins there.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<&DashaPeriod> {
    periods.iter().find(|p| p.contains(jd))
}
