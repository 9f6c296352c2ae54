pub mod category;
pub mod item;
pub mod report;
pub mod roster;
pub mod slot;

pub use category::Category;
pub use item::Item;
pub use report::{ActivityBuckets, BucketEntry, Report};
pub use roster::{NO_NAME, RosterEntry};
pub use slot::Slot;
