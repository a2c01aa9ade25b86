//! Named-rule registry.
//!
//! A [`RuleRegistry`] maps names to date rules plus optional descriptions.
//! Registration is a two-step builder, mirroring a decorator: name the rule,
//! then bind it, getting the rule back unchanged.
//!
//! ```
//! use hol_rules::{fixed, DateRule, RuleRegistry};
//!
//! let registry = RuleRegistry::new();
//! let rule = registry
//!     .register("Bastille Day")
//!     .description("Fête nationale")
//!     .bind(fixed(7, 14));
//! assert!(registry.contains("Bastille Day"));
//! assert!(rule.evaluate(2024).is_ok());
//! ```
//!
//! The storage is `Rc<RefCell<..>>`: several registries (or other callers)
//! can share it, and every holder sees later registrations.  It is meant for
//! single-threaded use.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::warn;

use hol_core::errors::{Error, Result};

use crate::date_rule::{DateRule, SharedRule};
use crate::holiday_rule::HolidayRule;
use crate::library::{self, new_year_no_obs};
use crate::rule_set::RuleSet;

/// A registered rule and its descriptions.
#[derive(Debug, Clone)]
pub struct RegisteredRule {
    /// The date rule.
    pub rule: SharedRule,
    /// Short description.
    pub description: Option<String>,
    /// Long description.
    pub long_description: Option<String>,
}

/// Shared, live registry storage in registration order.
pub type SharedRules = Rc<RefCell<IndexMap<String, RegisteredRule>>>;

/// Registry of named date rules.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    storage: SharedRules,
}

impl RuleRegistry {
    /// An empty registry with its own storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry writing into existing storage.
    pub fn with_storage(storage: SharedRules) -> Self {
        RuleRegistry { storage }
    }

    /// A registry pre-populated with the stock library rules and
    /// `"New Years Day"` (1 January, unadjusted).
    pub fn standard() -> Self {
        let registry = Self::new();
        for holiday in library::standard_rules() {
            registry
                .register(holiday.name())
                .description(holiday.description())
                .bind_shared(holiday.rule().clone());
        }
        registry
            .register("New Years Day")
            .description("New year, without any observation")
            .bind(new_year_no_obs());
        registry
    }

    /// Start registering `name`.  Nothing is stored until the returned
    /// [`Registration`] is bound.
    pub fn register(&self, name: impl Into<String>) -> Registration {
        Registration {
            storage: Rc::clone(&self.storage),
            name: name.into(),
            description: None,
            long_description: None,
        }
    }

    /// The live storage.  Later registrations show up through it.
    pub fn standard_ruleset(&self) -> SharedRules {
        Rc::clone(&self.storage)
    }

    /// `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.storage.borrow().contains_key(name)
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.storage.borrow().len()
    }

    /// `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.storage.borrow().is_empty()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.storage.borrow().keys().cloned().collect()
    }

    /// The entry for `name`, if registered.
    pub fn get(&self, name: &str) -> Option<RegisteredRule> {
        self.storage.borrow().get(name).cloned()
    }

    /// Build a [`HolidayRule`] from the entry for `name`.
    pub fn holiday_rule(&self, name: &str) -> Result<HolidayRule> {
        let entry = self
            .get(name)
            .ok_or_else(|| Error::UnknownRule(name.to_string()))?;
        Ok(HolidayRule::from_shared(
            name,
            entry.description.unwrap_or_default(),
            entry.rule,
        ))
    }

    /// A [`RuleSet`] of the named rules, in the order given.
    pub fn rule_set(&self, names: &[&str]) -> Result<RuleSet> {
        let rules = names
            .iter()
            .map(|name| self.holiday_rule(name))
            .collect::<Result<Vec<_>>>()?;
        Ok(RuleSet::new(rules))
    }
}

/// Pending registration returned by [`RuleRegistry::register`].
#[derive(Debug)]
#[must_use = "a registration stores nothing until bound"]
pub struct Registration {
    storage: SharedRules,
    name: String,
    description: Option<String>,
    long_description: Option<String>,
}

impl Registration {
    /// Attach a short description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a long description.
    pub fn long_description(mut self, long_description: impl Into<String>) -> Self {
        self.long_description = Some(long_description.into());
        self
    }

    /// Store `rule` under the registration name and hand it back shared.
    pub fn bind<R: DateRule + 'static>(self, rule: R) -> SharedRule {
        self.bind_shared(Arc::new(rule))
    }

    /// Store an already shared rule.  An existing entry of the same name is
    /// replaced with a warning.
    pub fn bind_shared(self, rule: SharedRule) -> SharedRule {
        let mut storage = self.storage.borrow_mut();
        if storage.contains_key(&self.name) {
            warn!(name = %self.name, "repeated definition of holiday rule");
        }
        storage.insert(
            self.name,
            RegisteredRule {
                rule: Arc::clone(&rule),
                description: self.description,
                long_description: self.long_description,
            },
        );
        rule
    }
}
