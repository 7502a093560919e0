//! Grayscale image containers consumed by the search core.
//!
//! Callers hand in a borrowed 8-bit view ([`ImageU8`]); the detector converts
//! it once to an owned [`ImageF32`] holding raw intensities (0..=255) and
//! works on that and its downsampled copies.
pub mod f32;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
