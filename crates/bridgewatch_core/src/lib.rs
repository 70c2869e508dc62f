pub mod checkin;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod mock;
pub mod model;
pub mod page;
pub mod route;
pub mod stats;
pub mod storage;
pub mod ticker;
pub mod validate;
pub mod work;
