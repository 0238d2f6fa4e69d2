pub mod histogram;
pub mod train;

// re-export for cleaner imports
pub use self::histogram::{DroppedPair, Histogram};
pub use self::train::Train;
