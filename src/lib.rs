//! # valeq
//!
//! Value equality for dynamic object graphs: deep, shallow, strict and
//! cycle-safe.
//!
//! ---
//!
//! ## Two values, one question
//!
//! Identity says whether two handles point at the same object. `valeq` asks
//! whether two values *look the same*: arrays element by element, maps and
//! sets by one-to-one matching, plain objects key by key, dates by
//! timestamp, regular expressions by source and flags.
//!
//! ```
//! use valeq::{circular_deep_equal, deep_equal, shallow_equal, Value};
//!
//! let a = Value::object([("a", Value::object([("b", 1)]))]);
//! let b = Value::object([("a", Value::object([("b", 1)]))]);
//! assert!(deep_equal(&a, &b));
//! assert!(!shallow_equal(&a, &b));
//!
//! let x = Value::new_object();
//! x.as_object().unwrap().set("self", x.clone()).unwrap();
//! let y = Value::new_object();
//! y.as_object().unwrap().set("self", y.clone()).unwrap();
//! assert!(circular_deep_equal(&x, &y));
//! ```
//!
//! ## The pipeline
//!
//! ```text
//! deep_equal(a, b) → CustomEqual → Dispatcher → Category → Rule
//!                                      ↑                     │
//!                                      └── State::equals ←───┘
//!                                            (circular: PairCache)
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`value`] | [`Value`], [`Obj`], [`Symbol`] | Reference-counted dynamic object model |
//! | [`same_value`] | [`same_value_zero`] | Primitive identity with `NaN`/`-0` handling |
//! | [`classify`] | [`Category`] | Closed classification of objects |
//! | [`rules`] | [`Rule`] | One comparison rule per category |
//! | [`cache`] | [`PairCache`], [`DefaultPairCache`] | Identity-pair cache and the cycle-safe wrapper |
//! | [`state`] | [`State`], [`Key`], [`StateInit`] | Per-call traversal context |
//! | [`config`] | [`Config`], [`PartialConfig`] | Category → rule table |
//! | [`dispatch`] | [`Dispatcher`] | Category dispatch |
//! | [`factory`] | [`CustomEqual`], [`CustomEqualOptions`] | Bespoke comparators |
//!
//! ## Pre-built comparators
//!
//! | Function | Cycle-safe | Strict | Depth |
//! |----------|:---:|:---:|-------|
//! | [`deep_equal`] | | | full |
//! | [`shallow_equal`] | | | one level |
//! | [`circular_deep_equal`] | ✓ | | full |
//! | [`circular_shallow_equal`] | ✓ | | one level |
//! | [`strict_deep_equal`] | | ✓ | full |
//! | [`strict_shallow_equal`] | | ✓ | one level |
//! | [`strict_circular_deep_equal`] | ✓ | ✓ | full |
//! | [`strict_circular_shallow_equal`] | ✓ | ✓ | one level |
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default and needs `alloc`. Enable the `std`
//! feature for std-backed `tracing` and `thiserror`. Enable the `serde`
//! feature for serialization of [`Value`].
//!
//! ## License
//!
//! Business Source License 1.1. Free for evaluation and non-production use.
//! Change date: 23 February 2032, after which it is Apache License 2.0.
//! Commercial production use requires a license from Flout Labs (cbyrne@floutlabs.com).

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

#[macro_use]
mod macros;

pub mod cache;
pub mod classify;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod factory;
mod presets;
pub mod rules;
pub mod same_value;
pub mod state;
pub mod value;

#[cfg(feature = "serde")]
mod serde_impl;

pub use cache::{circular, DefaultPairCache, HashPairCache, LinearPairCache, PairCache};
pub use classify::Category;
pub use config::{Config, PartialConfig, UnknownTagHook};
pub use dispatch::Dispatcher;
pub use error::ValueError;
pub use factory::{
    create_custom_equal, internal_comparator, shallow_internal_comparator, CustomConfigFn,
    CustomEqual, CustomEqualOptions, InternalComparatorFactory, StateFactory,
};
pub use presets::{
    circular_deep_equal, circular_shallow_equal, deep_equal, same_value_zero_equal,
    shallow_equal, strict_circular_deep_equal, strict_circular_shallow_equal,
    strict_deep_equal, strict_shallow_equal,
};
pub use rules::{combine, rule, Rule};
pub use same_value::same_value_zero;
pub use state::{interceptor, Compare, InternalComparator, Key, State, StateInit};
pub use value::{Obj, Symbol, Value};
