#[path = "../common/mod.rs"]
mod common;

mod batch;
mod boeing_747;
mod config;
mod propulsion;
mod serialization;
mod twin_otter;
