#![allow(unused_imports)]

pub mod builders;

pub use builders::{name_bytes, question_bytes, QueryBuilder};
