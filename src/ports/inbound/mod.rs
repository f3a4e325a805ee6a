/// Inbound ports (Driving ports) - interfaces the CLI drives
pub mod table_view_port;

pub use table_view_port::TableViewPort;
