mod dto;

pub use dto::{TripLeaf, TripNode};
