pub mod card;
pub mod restriction;
pub mod verdict;

pub use card::*;
pub use restriction::*;
pub use verdict::*;
