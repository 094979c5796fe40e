pub mod dispatch;
pub mod iface;
pub mod version;
