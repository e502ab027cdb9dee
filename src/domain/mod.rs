//! Pure data types for the donation service. No I/O, no CLI.

pub mod booking;
pub mod center;
pub mod donor;
pub mod sample;
pub mod supply;

pub use booking::*;
pub use center::*;
pub use donor::*;
pub use supply::*;
