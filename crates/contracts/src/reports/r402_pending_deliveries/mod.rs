mod dto;

pub use dto::PendingDeliveryDto;
