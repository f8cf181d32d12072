pub mod bytes;
pub mod currency;
pub mod duration;
pub mod formatter;
pub mod locale;
pub mod number;
pub mod timestamp;

pub use crate::domain::model::{FormatOutcome, FormatRequest, RenderSummary, TimeZoneSetting};
pub use crate::domain::ports::{FormatSettings, TimestampCell, TimestampElement};
pub use crate::utils::error::Result;
