//! Content loading: datasets, providers, and the built-in fallback.

pub mod dataset;
pub mod defaults;
pub mod provider;

pub use dataset::Dataset;
pub use defaults::{default_characters, default_dataset, default_events};
pub use provider::{DataError, DataProvider, DataSource, JsonProvider};
