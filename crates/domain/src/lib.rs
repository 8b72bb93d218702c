//! authdns Domain Layer
pub mod config;
pub mod dns_name;
pub mod dns_question;
pub mod dns_record;
pub mod errors;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError, LogFormat, ReloadMode};
pub use dns_name::DomainName;
pub use dns_question::DnsQuestion;
pub use dns_record::{QueryType, Record};
pub use errors::DomainError;
pub use zone::Zone;
