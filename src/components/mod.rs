mod avatar;
pub use avatar::*;

mod badge;
pub use badge::*;

mod bar_chart;
pub use bar_chart::*;

mod button;
pub use button::*;

mod card;
pub use card::*;

mod icon;
pub use icon::*;

mod link;
pub use link::*;

mod section_title;
pub use section_title::*;

mod separator;
pub use separator::*;

mod tabs;
pub use tabs::*;

mod text_field;
pub use text_field::*;

mod theme_toggle_button;
pub use theme_toggle_button::*;
