mod colors;
pub use colors::*;

mod element_id;
pub use element_id::*;

mod pixels;
pub use pixels::*;

mod squircle;
pub use squircle::*;

mod transitions;
pub use transitions::*;
