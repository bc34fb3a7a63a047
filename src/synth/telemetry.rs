// ===== benchdash/src/synth/telemetry.rs =====
//
// Per-game CPU telemetry for the expanded table rows. The draw is a
// single sine hash of the game name, so it is pure and recomputed on
// every render. All six metrics share the one fractional draw and
// therefore sit at the same relative position inside their ranges.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// The limiting factor preventing the CPU from clocking higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize)]
pub enum ClipReason {
    None,
    Thermal,
    Power,
    Current,
    #[strum(serialize = "Thermal + Power")]
    #[serde(rename = "Thermal + Power")]
    ThermalPower,
    #[strum(serialize = "Power + Current")]
    #[serde(rename = "Power + Current")]
    PowerCurrent,
}

impl ClipReason {
    pub const ALL: [ClipReason; 6] = [
        ClipReason::None,
        ClipReason::Thermal,
        ClipReason::Power,
        ClipReason::Current,
        ClipReason::ThermalPower,
        ClipReason::PowerCurrent,
    ];

    pub fn severity(self) -> Severity {
        match self {
            ClipReason::None => Severity::Nominal,
            ClipReason::Thermal | ClipReason::ThermalPower => Severity::Critical,
            ClipReason::Power | ClipReason::Current | ClipReason::PowerCurrent => {
                Severity::Elevated
            }
        }
    }
}

/// Shared traffic-light scale for telemetry cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Nominal,
    Elevated,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpuMetrics {
    pub p_core_ghz: f64,
    pub e_core_ghz: f64,
    pub ia_power_w: f64,
    pub package_power_w: f64,
    pub clipping: ClipReason,
    pub package_temp_c: u32,
}

pub fn temp_severity(celsius: u32) -> Severity {
    if celsius <= 70 {
        Severity::Nominal
    } else if celsius <= 80 {
        Severity::Elevated
    } else {
        Severity::Critical
    }
}

/// Derive the six metrics for a game, keyed on the name length only.
pub fn cpu_metrics(game: &str) -> CpuMetrics {
    let seed = (game.len() * 13) as f64;
    let draw = |min: f64, max: f64| {
        let x = (seed * 9.9731).sin() * 10_000.0;
        min + (x - x.floor()) * (max - min)
    };

    let reason_idx = draw(0.0, ClipReason::ALL.len() as f64).floor() as usize;

    CpuMetrics {
        p_core_ghz: draw(4.5, 5.8),
        e_core_ghz: draw(3.2, 4.4),
        ia_power_w: draw(45.0, 125.0),
        package_power_w: draw(65.0, 185.0),
        clipping: ClipReason::ALL[reason_idx],
        package_temp_c: draw(55.0, 85.0).floor() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn all_covers_every_variant() {
        assert_eq!(ClipReason::iter().count(), ClipReason::ALL.len());
    }

    #[test]
    fn combined_reasons_render_with_separator() {
        assert_eq!(ClipReason::ThermalPower.to_string(), "Thermal + Power");
        assert_eq!(ClipReason::PowerCurrent.to_string(), "Power + Current");
    }

    #[test]
    fn metrics_are_pure_per_game() {
        assert_eq!(cpu_metrics("Starfield"), cpu_metrics("Starfield"));
    }
}
