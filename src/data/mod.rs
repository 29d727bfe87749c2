/// Data layer: core types, ingestion, money parsing, and filtering.
///
/// Architecture:
/// ```text
///  data/startups.json  (category → [records])
///        │
///        ▼
///   ┌──────────┐     ┌──────────┐
///   │  loader   │ ──▶ │  money    │  $-string → funding/valuation ($B)
///   └──────────┘     └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ StartupDataset  │  Vec<Startup>, category + year indices
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  category/year/search predicates → filtered indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod money;
