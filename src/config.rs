/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! The category → rule table a comparator dispatches through.
//!
//! A [`Config`] is assembled once per comparator in three steps:
//!
//! 1. [`Config::new`] picks the default rules, strict or not.
//! 2. [`Config::merge`] applies a caller's [`PartialConfig`] overrides.
//! 3. [`Config::into_circular`] wraps the recursive rules with
//!    [`circular`](crate::cache::circular) when cycle safety is requested.
//!
//! Overrides are applied before the circular wrapping, so a custom array
//! rule on a circular comparator is itself cycle-safe.

use alloc::sync::Arc;

use crate::cache::circular;
use crate::rules::{
    are_arrays_equal, are_arrays_equal_strict, are_dates_equal, are_functions_equal,
    are_maps_equal, are_objects_equal, are_objects_equal_strict, are_primitive_wrappers_equal,
    are_promises_equal, are_regexps_equal, are_sets_equal, are_typed_arrays_equal, combine, rule,
    Rule,
};

/// Late-bound rule lookup for unclassified objects, keyed by type tag.
pub type UnknownTagHook<M> = Arc<dyn Fn(&str) -> Option<Rule<M>> + Send + Sync>;

// ─── Config ──────────────────────────────────────────────────────────────────

/// One rule per dedicated category, plus the unclassified fallback.
pub struct Config<M> {
    /// Arrays.
    pub are_arrays_equal: Rule<M>,
    /// Dates.
    pub are_dates_equal: Rule<M>,
    /// Functions.
    pub are_functions_equal: Rule<M>,
    /// Maps.
    pub are_maps_equal: Rule<M>,
    /// Plain keyed objects; also the fallback when `are_unclassified_equal`
    /// is unset.
    pub are_objects_equal: Rule<M>,
    /// Boxed booleans, numbers and strings.
    pub are_primitive_wrappers_equal: Rule<M>,
    /// Promises and other thenables.
    pub are_promises_equal: Rule<M>,
    /// Regular expressions.
    pub are_regexps_equal: Rule<M>,
    /// Sets.
    pub are_sets_equal: Rule<M>,
    /// Typed arrays.
    pub are_typed_arrays_equal: Rule<M>,
    /// Fallback for unclassified objects the hook declines.
    pub are_unclassified_equal: Option<Rule<M>>,
    /// Consulted first for unclassified objects. Rules it returns are called
    /// as-is, without cycle wrapping.
    pub unknown_tag: Option<UnknownTagHook<M>>,
}

impl<M: 'static> Config<M> {
    /// The default rule set; `strict` selects the descriptor-aware variants
    /// for arrays, objects, maps, sets and typed arrays.
    pub fn new(strict: bool) -> Self {
        let strict_extras = || rule(are_objects_equal_strict::<M>);
        let (arrays, objects, maps, sets, typed_arrays) = if strict {
            (
                rule(are_arrays_equal_strict::<M>),
                rule(are_objects_equal_strict::<M>),
                combine(rule(are_maps_equal::<M>), strict_extras()),
                combine(rule(are_sets_equal::<M>), strict_extras()),
                combine(rule(are_typed_arrays_equal::<M>), strict_extras()),
            )
        } else {
            (
                rule(are_arrays_equal::<M>),
                rule(are_objects_equal::<M>),
                rule(are_maps_equal::<M>),
                rule(are_sets_equal::<M>),
                rule(are_typed_arrays_equal::<M>),
            )
        };
        Self {
            are_arrays_equal: arrays,
            are_dates_equal: rule(are_dates_equal::<M>),
            are_functions_equal: rule(are_functions_equal::<M>),
            are_maps_equal: maps,
            are_objects_equal: objects,
            are_primitive_wrappers_equal: rule(are_primitive_wrappers_equal::<M>),
            are_promises_equal: rule(are_promises_equal::<M>),
            are_regexps_equal: rule(are_regexps_equal::<M>),
            are_sets_equal: sets,
            are_typed_arrays_equal: typed_arrays,
            are_unclassified_equal: None,
            unknown_tag: None,
        }
    }

    /// Replace every rule `overrides` sets; keep the rest.
    pub fn merge(mut self, overrides: PartialConfig<M>) -> Self {
        let PartialConfig {
            are_arrays_equal,
            are_dates_equal,
            are_functions_equal,
            are_maps_equal,
            are_objects_equal,
            are_primitive_wrappers_equal,
            are_promises_equal,
            are_regexps_equal,
            are_sets_equal,
            are_typed_arrays_equal,
            are_unclassified_equal,
            unknown_tag,
        } = overrides;
        replace(&mut self.are_arrays_equal, are_arrays_equal);
        replace(&mut self.are_dates_equal, are_dates_equal);
        replace(&mut self.are_functions_equal, are_functions_equal);
        replace(&mut self.are_maps_equal, are_maps_equal);
        replace(&mut self.are_objects_equal, are_objects_equal);
        replace(&mut self.are_primitive_wrappers_equal, are_primitive_wrappers_equal);
        replace(&mut self.are_promises_equal, are_promises_equal);
        replace(&mut self.are_regexps_equal, are_regexps_equal);
        replace(&mut self.are_sets_equal, are_sets_equal);
        replace(&mut self.are_typed_arrays_equal, are_typed_arrays_equal);
        if are_unclassified_equal.is_some() {
            self.are_unclassified_equal = are_unclassified_equal;
        }
        if unknown_tag.is_some() {
            self.unknown_tag = unknown_tag;
        }
        self
    }

    /// Wrap the rules that recurse into reference-typed children: arrays,
    /// maps, objects, sets, typed arrays and the unclassified fallback.
    ///
    /// Typed arrays only recurse through their extra own properties in
    /// strict mode, but any override may recurse too.
    pub fn into_circular(mut self) -> Self {
        self.are_arrays_equal = circular(self.are_arrays_equal);
        self.are_maps_equal = circular(self.are_maps_equal);
        self.are_objects_equal = circular(self.are_objects_equal);
        self.are_sets_equal = circular(self.are_sets_equal);
        self.are_typed_arrays_equal = circular(self.are_typed_arrays_equal);
        self.are_unclassified_equal = self.are_unclassified_equal.map(circular);
        self
    }
}

impl<M> Clone for Config<M> {
    fn clone(&self) -> Self {
        Self {
            are_arrays_equal: self.are_arrays_equal.clone(),
            are_dates_equal: self.are_dates_equal.clone(),
            are_functions_equal: self.are_functions_equal.clone(),
            are_maps_equal: self.are_maps_equal.clone(),
            are_objects_equal: self.are_objects_equal.clone(),
            are_primitive_wrappers_equal: self.are_primitive_wrappers_equal.clone(),
            are_promises_equal: self.are_promises_equal.clone(),
            are_regexps_equal: self.are_regexps_equal.clone(),
            are_sets_equal: self.are_sets_equal.clone(),
            are_typed_arrays_equal: self.are_typed_arrays_equal.clone(),
            are_unclassified_equal: self.are_unclassified_equal.clone(),
            unknown_tag: self.unknown_tag.clone(),
        }
    }
}

fn replace<M>(slot: &mut Rule<M>, with: Option<Rule<M>>) {
    if let Some(with) = with {
        *slot = with;
    }
}

// ─── PartialConfig ───────────────────────────────────────────────────────────

/// Rule overrides returned by a custom-config callback. `None` keeps the
/// default.
pub struct PartialConfig<M> {
    /// See [`Config::are_arrays_equal`].
    pub are_arrays_equal: Option<Rule<M>>,
    /// See [`Config::are_dates_equal`].
    pub are_dates_equal: Option<Rule<M>>,
    /// See [`Config::are_functions_equal`].
    pub are_functions_equal: Option<Rule<M>>,
    /// See [`Config::are_maps_equal`].
    pub are_maps_equal: Option<Rule<M>>,
    /// See [`Config::are_objects_equal`].
    pub are_objects_equal: Option<Rule<M>>,
    /// See [`Config::are_primitive_wrappers_equal`].
    pub are_primitive_wrappers_equal: Option<Rule<M>>,
    /// See [`Config::are_promises_equal`].
    pub are_promises_equal: Option<Rule<M>>,
    /// See [`Config::are_regexps_equal`].
    pub are_regexps_equal: Option<Rule<M>>,
    /// See [`Config::are_sets_equal`].
    pub are_sets_equal: Option<Rule<M>>,
    /// See [`Config::are_typed_arrays_equal`].
    pub are_typed_arrays_equal: Option<Rule<M>>,
    /// See [`Config::are_unclassified_equal`].
    pub are_unclassified_equal: Option<Rule<M>>,
    /// See [`Config::unknown_tag`].
    pub unknown_tag: Option<UnknownTagHook<M>>,
}

impl<M> Default for PartialConfig<M> {
    fn default() -> Self {
        Self {
            are_arrays_equal: None,
            are_dates_equal: None,
            are_functions_equal: None,
            are_maps_equal: None,
            are_objects_equal: None,
            are_primitive_wrappers_equal: None,
            are_promises_equal: None,
            are_regexps_equal: None,
            are_sets_equal: None,
            are_typed_arrays_equal: None,
            are_unclassified_equal: None,
            unknown_tag: None,
        }
    }
}
