//! Colors, typography and page metrics.
//!
//! A theme carries one shared layout and several color variants. The variant
//! in use is picked by the [`ActiveVariantId`] global, which is what the
//! dark/light toggle flips.

mod schema;
pub use schema::*;

mod deserializers;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
