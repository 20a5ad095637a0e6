pub mod conversion;

pub use conversion::{ConversionRecord, ConversionStatus};
