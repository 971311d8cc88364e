pub mod config;
pub mod error;
pub mod interpolate;
pub mod score;
pub mod segment;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::*;
pub use score::{IndicatorScore, TotalScore};
pub use segment::MarketSegment;
pub use traits::*;
pub use types::*;
