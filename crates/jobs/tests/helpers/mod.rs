#![allow(unused_imports)]

mod mock_repositories;

pub use mock_repositories::{reload_use_case, CountingZoneProvider, SimpleZoneStore};
