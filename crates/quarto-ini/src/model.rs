/*
 * model.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The in-memory configuration model.

use crate::error::{IniError, IniResult};
use indexmap::IndexMap;

/// Name under which the default section is addressed.
pub const DEFAULT_SECTION: &str = "default";

/// Option name to value mapping for a single section.
pub type OptionMap = IndexMap<String, String>;

/// Returns true if `name` addresses the default section.
///
/// The comparison is case-insensitive: `default`, `Default` and `DEFAULT`
/// all resolve to the default section.
pub fn is_default_section_name(name: &str) -> bool {
    name.eq_ignore_ascii_case(DEFAULT_SECTION)
}

/// An INI configuration: a default section plus named sections.
///
/// Named sections enumerate in the order they were first registered. The
/// default section always exists but is never listed by [`Ini::sections`]
/// or reported by [`Ini::has_section`].
///
/// Equality compares contents, not ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ini {
    defaults: OptionMap,
    sections: IndexMap<String, OptionMap>,
}

impl Ini {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options of the default section.
    pub fn defaults(&self) -> &OptionMap {
        &self.defaults
    }

    /// Names of the registered sections, in first-seen order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Register a new, empty section.
    ///
    /// # Errors
    ///
    /// - [`IniError::InvalidName`] if `name` is `default` in any case
    /// - [`IniError::DuplicateSection`] if `name` is already registered
    pub fn add_section(&mut self, name: &str) -> IniResult<()> {
        if is_default_section_name(name) {
            return Err(IniError::InvalidName {
                name: name.to_string(),
            });
        }
        if self.sections.contains_key(name) {
            return Err(IniError::DuplicateSection {
                name: name.to_string(),
            });
        }
        self.sections.insert(name.to_string(), OptionMap::new());
        Ok(())
    }

    /// Returns true if `name` is a registered section. Case-sensitive.
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Option names of a section, or `None` if the section is not registered.
    pub fn options<'a>(
        &'a self,
        section: &str,
    ) -> Option<impl Iterator<Item = &'a str> + use<'a>> {
        self.resolve(section).map(|map| map.keys().map(String::as_str))
    }

    /// Returns true if the section exists and contains `option`.
    pub fn has_option(&self, section: &str, option: &str) -> bool {
        self.resolve(section).is_some_and(|map| map.contains_key(option))
    }

    /// Value of an option, or `None` if the section or option is missing.
    pub fn get(&self, section: &str, option: &str) -> Option<&str> {
        self.resolve(section)?.get(option).map(String::as_str)
    }

    /// `(option, value)` pairs of a section, or `None` if the section is not
    /// registered.
    pub fn items<'a>(
        &'a self,
        section: &str,
    ) -> Option<impl Iterator<Item = (&'a str, &'a str)> + use<'a>> {
        self.resolve(section)
            .map(|map| map.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Set an option, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// [`IniError::NoSection`] if the section is not the default section and
    /// has not been registered.
    pub fn set(
        &mut self,
        section: &str,
        option: impl Into<String>,
        value: impl Into<String>,
    ) -> IniResult<()> {
        self.resolve_mut(section)?.insert(option.into(), value.into());
        Ok(())
    }

    /// Remove an option. Returns whether it was present.
    ///
    /// # Errors
    ///
    /// [`IniError::NoSection`] if the section does not exist.
    pub fn remove_option(&mut self, section: &str, option: &str) -> IniResult<bool> {
        Ok(self.resolve_mut(section)?.shift_remove(option).is_some())
    }

    /// Remove a section. Returns true only if a registered section was removed.
    ///
    /// Naming the default section empties it instead, since the default
    /// section cannot be removed. Emptying it does not count as a removal,
    /// so `remove_section("default")` returns `false` even when defaults were
    /// present.
    pub fn remove_section(&mut self, name: &str) -> bool {
        if is_default_section_name(name) {
            self.defaults.clear();
        }
        self.sections.shift_remove(name).is_some()
    }

    /// Returns true if there are no defaults and no sections.
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty() && self.sections.is_empty()
    }

    fn resolve(&self, section: &str) -> Option<&OptionMap> {
        if is_default_section_name(section) {
            Some(&self.defaults)
        } else {
            self.sections.get(section)
        }
    }

    fn resolve_mut(&mut self, section: &str) -> IniResult<&mut OptionMap> {
        if is_default_section_name(section) {
            return Ok(&mut self.defaults);
        }
        self.sections
            .get_mut(section)
            .ok_or_else(|| IniError::NoSection {
                name: section.to_string(),
            })
    }
}
