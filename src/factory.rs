/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Building bespoke comparators.
//!
//! [`create_custom_equal`] turns a [`CustomEqualOptions`] into a reusable
//! [`CustomEqual`]. The options mirror the knobs the pre-built comparators
//! are made from: cycle safety, strict mode, rule overrides, interception of
//! every nested comparison, and a per-call state factory.
//!
//! ```
//! use valeq::{create_custom_equal, CustomEqualOptions, Value};
//!
//! let loose: valeq::CustomEqual<()> =
//!     create_custom_equal(CustomEqualOptions::default().circular(true));
//! let x = Value::new_object();
//! x.as_object().unwrap().set("self", x.clone()).unwrap();
//! let y = Value::new_object();
//! y.as_object().unwrap().set("self", y.clone()).unwrap();
//! assert!(loose.equals(&x, &y));
//! ```

use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::cache::{DefaultPairCache, PairCache};
use crate::config::{Config, PartialConfig};
use crate::dispatch::Dispatcher;
use crate::same_value::same_value_zero;
use crate::state::{interceptor, Compare, InternalComparator, State, StateInit};
use crate::value::Value;

/// Rule overrides derived from the default configuration.
pub type CustomConfigFn<M> = Arc<dyn Fn(&Config<M>) -> PartialConfig<M> + Send + Sync>;

/// Builds the internal comparator from the dispatcher entry point.
pub type InternalComparatorFactory<M> =
    Arc<dyn Fn(Compare<M>) -> InternalComparator<M> + Send + Sync>;

/// Produces the context of one top-level comparison.
pub type StateFactory<M> = Arc<dyn Fn() -> StateInit<M> + Send + Sync>;

// ─── CustomEqualOptions ──────────────────────────────────────────────────────

/// Options for [`create_custom_equal`].
pub struct CustomEqualOptions<M> {
    /// Tolerate self- and mutually-referential graphs.  Default: `false`.
    pub circular: bool,

    /// Compare every own property with its descriptor flags.  Default: `false`.
    pub strict: bool,

    /// Rule overrides, applied before cycle wrapping.  Default: none.
    pub create_custom_config: Option<CustomConfigFn<M>>,

    /// Replaces the pass-through that nested comparisons go through.
    /// Default: recurse into the dispatcher.
    pub create_internal_comparator: Option<InternalComparatorFactory<M>>,

    /// Per-call cache and meta.  Default: no cache (the default cache when
    /// circular) and `M::default()`.
    pub create_state: Option<StateFactory<M>>,
}

impl<M> Default for CustomEqualOptions<M> {
    fn default() -> Self {
        Self {
            circular: false,
            strict: false,
            create_custom_config: None,
            create_internal_comparator: None,
            create_state: None,
        }
    }
}

impl<M> Clone for CustomEqualOptions<M> {
    fn clone(&self) -> Self {
        Self {
            circular: self.circular,
            strict: self.strict,
            create_custom_config: self.create_custom_config.clone(),
            create_internal_comparator: self.create_internal_comparator.clone(),
            create_state: self.create_state.clone(),
        }
    }
}

impl<M> CustomEqualOptions<M> {
    /// Set [`circular`](Self::circular).
    pub fn circular(mut self, circular: bool) -> Self {
        self.circular = circular;
        self
    }

    /// Set [`strict`](Self::strict).
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set [`create_custom_config`](Self::create_custom_config).
    pub fn with_custom_config<F>(mut self, f: F) -> Self
    where
        F: Fn(&Config<M>) -> PartialConfig<M> + Send + Sync + 'static,
    {
        self.create_custom_config = Some(Arc::new(f));
        self
    }

    /// Set [`create_internal_comparator`](Self::create_internal_comparator).
    pub fn with_internal_comparator<F>(mut self, f: F) -> Self
    where
        F: Fn(Compare<M>) -> InternalComparator<M> + Send + Sync + 'static,
    {
        self.create_internal_comparator = Some(Arc::new(f));
        self
    }

    /// Set [`create_state`](Self::create_state).
    pub fn with_state<F>(mut self, f: F) -> Self
    where
        F: Fn() -> StateInit<M> + Send + Sync + 'static,
    {
        self.create_state = Some(Arc::new(f));
        self
    }
}

// ─── CustomEqual ─────────────────────────────────────────────────────────────

/// A reusable comparator.
///
/// Each call to [`equals`](Self::equals) gets a fresh [`State`]; nothing is
/// carried over between calls unless the state factory hands out shared
/// objects.
pub struct CustomEqual<M> {
    dispatcher: Arc<Dispatcher<M>>,
    comparator: InternalComparator<M>,
    create_state: Option<StateFactory<M>>,
    circular: bool,
    strict: bool,
}

impl<M: Default + 'static> CustomEqual<M> {
    /// Assemble a comparator from `options`.
    pub fn new(options: CustomEqualOptions<M>) -> Self {
        let CustomEqualOptions {
            circular,
            strict,
            create_custom_config,
            create_internal_comparator,
            create_state,
        } = options;

        let mut config = Config::new(strict);
        if let Some(custom) = create_custom_config {
            let overrides = custom(&config);
            config = config.merge(overrides);
        }
        if circular {
            config = config.into_circular();
        }

        let dispatcher = Arc::new(Dispatcher::new(Arc::new(config)));
        let entry = dispatcher.clone();
        let compare = entry_point(move |a, b, state| entry.compare(a, b, state));
        let comparator = match create_internal_comparator {
            Some(factory) => factory(compare),
            None => internal_comparator(compare),
        };

        Self { dispatcher, comparator, create_state, circular, strict }
    }

    /// Compare two values with a state from the state factory.
    pub fn equals(&self, a: &Value, b: &Value) -> bool {
        let init = match &self.create_state {
            Some(factory) => factory(),
            None => StateInit::default(),
        };
        self.equals_with(a, b, init)
    }
}

impl<M> CustomEqual<M> {
    /// Compare two values with an explicit per-call state.
    ///
    /// Useful for contexts that cannot cross threads, such as a shared
    /// `Rc<RefCell<_>>` cache kept across calls.
    pub fn equals_with(&self, a: &Value, b: &Value, init: StateInit<M>) -> bool {
        let cache = match init.cache {
            None if self.circular => Some(Box::new(DefaultPairCache::default()) as Box<dyn PairCache>),
            cache => cache,
        };
        let state = State::new(&self.comparator, cache, init.meta, self.strict);
        self.dispatcher.compare(a, b, &state)
    }

    /// The rule table this comparator dispatches through.
    pub fn config(&self) -> &Config<M> {
        self.dispatcher.config()
    }

    /// `true` if this comparator is cycle-safe.
    pub fn is_circular(&self) -> bool {
        self.circular
    }

    /// `true` if this comparator uses the strict rules.
    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

fn entry_point<M, F>(f: F) -> Compare<M>
where
    F: Fn(&Value, &Value, &State<'_, M>) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Build a comparator; see [`CustomEqualOptions`].
pub fn create_custom_equal<M: Default + 'static>(options: CustomEqualOptions<M>) -> CustomEqual<M> {
    CustomEqual::new(options)
}

/// The default internal comparator: recurse into `compare`, ignoring keys
/// and parents.
pub fn internal_comparator<M: 'static>(compare: Compare<M>) -> InternalComparator<M> {
    interceptor(move |a, b, _, _, _, _, state| compare(a, b, state))
}

/// An internal comparator that compares nested values with SameValueZero
/// only, for shallow comparison.
pub fn shallow_internal_comparator<M: 'static>(_compare: Compare<M>) -> InternalComparator<M> {
    interceptor(|a, b, _, _, _, _, _| same_value_zero(a, b))
}
