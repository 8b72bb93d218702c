mod dns;
mod zones;

pub use dns::DnsServices;
pub use zones::ZoneServices;
