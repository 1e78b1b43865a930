//! # basket
//!
//! Basket portfolio analytics with a digit-run divisibility core.
//!
//! This crate provides a unified interface to the basket toolkit.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `digits`: Digit-run divisibility filtering
//! - `primitives`: Core type definitions
//! - `stats`: Time-series statistics
//! - `portfolio`: Portfolio analytics
//!
//! ## Example
//!
//! ```rust,ignore
//! // With default features (all components):
//! use basket::digits::divisible;
//! use basket::portfolio::Portfolio;
//!
//! // Or with specific features only:
//! // [dependencies]
//! // basket = { version = "0.1", default-features = false, features = ["digits"] }
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "digits")]
#[doc(inline)]
pub use basket_digits as digits;
#[cfg(feature = "primitives")]
#[doc(inline)]
pub use basket_primitives as primitives;
#[cfg(feature = "stats")]
#[doc(inline)]
pub use basket_stats as stats;
#[cfg(feature = "portfolio")]
#[doc(inline)]
pub use basket_portfolio as portfolio;
