//! fundnav-rs: historical mutual fund net asset values.
//!
//! The pipeline fetches a fund's trend series from the provider, maps the provider's
//! columns onto [`NavRecord`]s, sorts them by date and applies an optional date window.
//!
//! ```no_run
//! use fundnav_rs::{FundClient, NavHistoryBuilder};
//!
//! # async fn demo() -> Result<(), fundnav_rs::NavError> {
//! let client = FundClient::builder().build()?;
//! let records = NavHistoryBuilder::new(&client, "000001").start("2024-01-01").fetch().await?;
//! for r in &records {
//!     println!("{} {} {}", r.date, r.net_value, r.cumulative_net_value);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod nav;
pub mod trend;

pub use crate::core::{
    Cell, FundClient, FundClientBuilder, Indicator, NavError, NavRecord, RawTable, TrendService,
};
pub use nav::{ColumnTokens, DateWindow, NavHistoryBuilder};
