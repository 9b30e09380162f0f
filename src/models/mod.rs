pub mod de;
pub mod item;
pub mod price;
pub mod subset;
pub mod superset;

pub use de::Decimal;
pub use item::*;
pub use price::*;
pub use subset::*;
pub use superset::*;
