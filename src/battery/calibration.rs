use super::calibration_data::CELL_EM_AH;

/// Capacity of a full cell, the first entry of `CELL_CALIBRATION`.
pub const NOMINAL_CAPACITY_AH: f64 = 7.637600658527782;

/// Rest-voltage characterization shared by every estimator instance.
pub static CELL_CALIBRATION: CalibrationTable = CalibrationTable::new(&CELL_EM_AH);

/// Read-only `(voltage, capacity)` table ordered by strictly decreasing voltage.
///
/// Only the voltage column is ordered. The capacity column comes from
/// measurements and is allowed to wobble.
#[derive(Debug, Clone, Copy)]
pub struct CalibrationTable {
    entries: &'static [(f64, f64)],
}

impl CalibrationTable {
    /// `entries` must be non-empty and strictly decreasing in voltage.
    pub const fn new(entries: &'static [(f64, f64)]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [(f64, f64)] {
        self.entries
    }

    pub fn nominal_capacity(&self) -> f64 {
        self.entries[0].1
    }

    /// Capacity in Ah for a rest voltage, linearly interpolated between the
    /// two bracketing entries and clamped to the ends of the table.
    pub fn capacity_at(&self, voltage: f64) -> f64 {
        let (v_first, cap_first) = self.entries[0];
        let (v_last, cap_last) = self.entries[self.entries.len() - 1];
        if voltage >= v_first {
            return cap_first;
        }
        if voltage <= v_last {
            return cap_last;
        }

        // First entry at or below `voltage`; entry `idx - 1` is above it
        let idx = self.entries.partition_point(|&(v, _)| v > voltage);
        if idx == 0 {
            // Only reachable with NaN
            return cap_first;
        }
        let (v_hi, cap_hi) = self.entries[idx - 1];
        let (v_lo, cap_lo) = self.entries[idx];

        let t = (voltage - v_lo) / (v_hi - v_lo);
        cap_lo + t * (cap_hi - cap_lo)
    }

    /// Fraction of `nominal_capacity_ah` stored at this rest voltage.
    pub fn soc_at(&self, voltage: f64, nominal_capacity_ah: f64) -> f64 {
        self.capacity_at(voltage) / nominal_capacity_ah
    }
}
