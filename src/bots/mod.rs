pub mod cautious;
pub mod human;
pub mod random;
pub mod registry;
pub mod tracker;

pub use cautious::CautiousBot;
pub use human::HumanBot;
pub use random::RandomBot;
pub use tracker::TrackerBot;
