pub mod reverse_name;
pub mod service_ports;

pub use reverse_name::ReverseName;
pub use service_ports::SystemServicePorts;
