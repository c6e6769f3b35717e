/// Data layer: core types, loading, and derived views.
///
/// Architecture:
/// ```text
///  SN_m_tot_V2.0.csv  (headerless, 7 columns)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ObservationTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ ObservationTable  │  immutable rows, shared by every view
///   └──────────────────┘
///        │
///        ├──────────────────────┐
///        ▼                      ▼
///   ┌────────────────┐   ┌────────────┐
///   │ historical_view │   │ cycle_view  │
///   │ years + rolling │   │ FracDate % L│
///   └────────────────┘   └────────────┘
/// ```

pub mod loader;
pub mod model;
pub mod smoothing;
pub mod views;
