/// Data layer: core types, loading, and series shaping.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → filter rows → ExpenditureDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────────┐
///   │ ExpenditureDataset  │  Vec<DataPoint>, category + year indices
///   └────────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  series   │  (category → line points), (year → pie slices)
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod series;
