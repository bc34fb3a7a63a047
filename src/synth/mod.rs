// ===== benchdash/src/synth/mod.rs =====
//
// Synthetic data generators. Everything the dashboard displays comes
// from these three modules; there is no measurement pipeline behind
// them. Generators that roll dice take a caller-owned RNG so a run can
// be pinned with `--seed`.

pub mod scores;
pub mod telemetry;
pub mod trend;
