//! Conversion between the RGB and HSV color models.
//!
//! Both directions work on normalized `f64` triples in `[0.0, 1.0]` and are
//! pure, allocation-free, and safe to call from any number of threads. Scaling
//! to bytes, degrees, or percentages is left to the caller:
//!
//! ```
//! let (h, s, v) = hsv_convert::rgb_to_hsv(25.0 / 255.0, 60.0 / 255.0, 128.0 / 255.0);
//! println!("H: {:.1}°, S: {:.1}%, V: {:.1}%", h * 360.0, s * 100.0, v * 100.0);
//!
//! let (r, g, b) = hsv_convert::hsv_to_rgb(h, s, v);
//! assert!((r * 255.0 - 25.0).abs() < 1e-6);
//! assert!((g * 255.0 - 60.0).abs() < 1e-6);
//! assert!((b * 255.0 - 128.0).abs() < 1e-6);
//! ```

mod convert;

pub use convert::{hsv_to_rgb, rgb_to_hsv};
