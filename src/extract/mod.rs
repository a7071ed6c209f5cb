//! Text-extraction pipeline: link discovery on the listing page and
//! nutrition-record extraction from detail pages.

mod fields;
mod links;
mod numeric;
mod record;
mod types;

pub use fields::extract_pairs;
pub use links::discover_links;
pub use numeric::parse_quantity;
pub use record::build_record;
pub use types::{NutritionRecord, PropertyKey, PROPERTY_COLUMNS};
