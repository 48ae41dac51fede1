#![no_std]

pub mod auction;
pub mod bid;
pub mod checks;
pub mod constants;
pub mod distribution;
pub mod errors;
pub mod event;
pub mod storage;
pub mod traits;
pub mod types;
pub mod withdrawal;
