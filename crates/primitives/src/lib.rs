#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/basket-rs/basket/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod symbol;
pub use symbol::Symbol;

mod basket;
pub use basket::Basket;

mod series;
pub use series::PriceSeries;

/// Re-export common date type.
pub type Date = chrono::NaiveDate;
