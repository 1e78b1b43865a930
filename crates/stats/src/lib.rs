#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/basket-rs/basket/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod returns;
pub use returns::{geometric_mean_return, log_returns};

mod dispersion;
pub use dispersion::{mean, std_pop};

mod drawdown;
pub use drawdown::max_drawdown;

mod error;
pub use error::StatsError;
