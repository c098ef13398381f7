//! Proportional sub-period generation.

use super::types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};
use crate::graha::Graha;

/// Snap the last child's end to the parent's end to absorb floating-point drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Split a parent period in proportion to each entry's full-cycle years.
///
/// Child years = `full_years / total_years * parent.years`; children are
/// chained so each starts where the previous ended.
pub fn proportional_children(
    parent: &DashaPeriod,
    sequence: &[(Graha, f64)],
    total_years: f64,
    child_level: DashaLevel,
) -> Vec<DashaPeriod> {
    let mut children = Vec::with_capacity(sequence.len());
    let mut cursor = parent.start_jd;

    for (order_0, &(lord, full_years)) in sequence.iter().enumerate() {
        let years = full_years * parent.years / total_years;
        let end = cursor + years * DAYS_PER_YEAR;
        children.push(DashaPeriod {
            lord,
            start_jd: cursor,
            end_jd: end,
            years,
            level: child_level,
            order: (order_0 as u16) + 1,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}
