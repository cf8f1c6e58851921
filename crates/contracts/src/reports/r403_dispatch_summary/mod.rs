mod dto;

pub use dto::DispatchLineDto;
