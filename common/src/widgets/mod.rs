//! Widget components for the Lemonade screen.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod caption;
mod card;
mod header;
mod pictures;

pub use caption::{draw_caption, wrap_lines};
pub use card::draw_card;
pub use header::draw_header;
pub use pictures::draw_picture;
