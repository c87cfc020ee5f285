//! Data models shared by the generator, the chart mapper and the dashboard
//! cards.
//!
//! All models serialize with the field names a JS presentation layer
//! expects (camelCase where the name has more than one word).

pub mod bar;
pub mod prediction;
pub mod quote;

pub use bar::Bar;
pub use prediction::{Direction, Prediction};
pub use quote::{StockQuote, load_universe, popular_stocks};
