pub mod r401_logistics_summary;
pub mod r402_pending_deliveries;
pub mod r403_dispatch_summary;
