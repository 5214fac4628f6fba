//! The built-in policy code table and its lookup type.
//!
//! The table unifies the historically separate feature-code and
//! timestamp-code lists into one registry keyed by code string. Entries are
//! validated once during construction; a bad entry aborts startup rather
//! than failing at request time.

use std::collections::HashMap;

use chrono::NaiveTime;

use crate::error::{EngineError, EngineResult};

use super::types::{CapabilityClass, PolicyCode};

/// A raw table entry before validation.
struct RegistryEntry {
    code: &'static str,
    class: CapabilityClass,
    description: &'static str,
    fixed_start: Option<&'static str>,
}

/// The built-in code table. `fixed_start` is an `HH:MM` time of day and is
/// only legal on `FixedStart` entries.
const BUILTIN_CODES: &[RegistryEntry] = &[
    RegistryEntry {
        code: "bm0123",
        class: CapabilityClass::Casual,
        description: "Casual dress code allowed",
        fixed_start: None,
    },
    RegistryEntry {
        code: "bm0789",
        class: CapabilityClass::Casual,
        description: "Extended break time",
        fixed_start: None,
    },
    RegistryEntry {
        code: "bm0111",
        class: CapabilityClass::HealthWaiver,
        description: "Health monitoring waived",
        fixed_start: None,
    },
    RegistryEntry {
        code: "bm0456",
        class: CapabilityClass::HealthWaiver,
        description: "Remote work option",
        fixed_start: None,
    },
    RegistryEntry {
        code: "ts2024",
        class: CapabilityClass::Backdate,
        description: "Backdated entry for 2024",
        fixed_start: None,
    },
    RegistryEntry {
        code: "flex01",
        class: CapabilityClass::FlexibleHours,
        description: "Flexible timing mode",
        fixed_start: None,
    },
    RegistryEntry {
        code: "early9",
        class: CapabilityClass::FixedStart,
        description: "Early bird - 9 AM start",
        fixed_start: Some("09:00"),
    },
    RegistryEntry {
        code: "night8",
        class: CapabilityClass::FixedStart,
        description: "Night shift - 8 PM start",
        fixed_start: Some("20:00"),
    },
    RegistryEntry {
        code: "admin0",
        class: CapabilityClass::AdminOverride,
        description: "Admin override for any time",
        fixed_start: None,
    },
];

/// The immutable mapping from code string to policy descriptor.
///
/// Constructed once at process start and shared by reference into the
/// evaluator; there is no runtime mutation API.
///
/// # Example
///
/// ```
/// use policy_engine::registry::{CapabilityClass, CodeRegistry};
///
/// let registry = CodeRegistry::builtin().unwrap();
/// let policy = registry.lookup("early9").unwrap();
/// assert_eq!(policy.class, CapabilityClass::FixedStart);
/// ```
#[derive(Debug, Clone)]
pub struct CodeRegistry {
    codes: HashMap<String, PolicyCode>,
}

impl CodeRegistry {
    /// Builds the registry from the built-in code table.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRegistryEntry` if a `FixedStart` entry carries a
    /// time that is not a legal `HH:MM` time of day, if a fixed time appears
    /// on any other class, or if a code occurs twice. These are startup
    /// configuration defects and must abort process initialization.
    pub fn builtin() -> EngineResult<Self> {
        Self::from_entries(BUILTIN_CODES)
    }

    /// Builds and validates a registry from raw entries.
    fn from_entries(entries: &[RegistryEntry]) -> EngineResult<Self> {
        let mut codes = HashMap::with_capacity(entries.len());

        for entry in entries {
            let fixed_start = match (entry.class, entry.fixed_start) {
                (CapabilityClass::FixedStart, Some(raw)) => {
                    let time = NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| {
                        EngineError::MalformedRegistryEntry {
                            code: entry.code.to_string(),
                            message: format!(
                                "fixed start time '{}' is not a valid time of day",
                                raw
                            ),
                        }
                    })?;
                    Some(time)
                }
                (CapabilityClass::FixedStart, None) => {
                    return Err(EngineError::MalformedRegistryEntry {
                        code: entry.code.to_string(),
                        message: "fixed_start class requires an HH:MM time parameter".to_string(),
                    });
                }
                (_, Some(raw)) => {
                    return Err(EngineError::MalformedRegistryEntry {
                        code: entry.code.to_string(),
                        message: format!(
                            "fixed start time '{}' is only valid on fixed_start codes",
                            raw
                        ),
                    });
                }
                (_, None) => None,
            };

            let policy = PolicyCode {
                code: entry.code.to_string(),
                class: entry.class,
                description: entry.description.to_string(),
                fixed_start,
            };

            if codes.insert(policy.code.clone(), policy).is_some() {
                return Err(EngineError::MalformedRegistryEntry {
                    code: entry.code.to_string(),
                    message: "duplicate code in registry table".to_string(),
                });
            }
        }

        Ok(Self { codes })
    }

    /// Looks up a policy code.
    ///
    /// Surrounding whitespace is trimmed from the input before comparison;
    /// the comparison itself is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns `CodeNotFound` if no entry matches.
    pub fn lookup(&self, code: &str) -> EngineResult<&PolicyCode> {
        let trimmed = code.trim();
        self.codes
            .get(trimmed)
            .ok_or_else(|| EngineError::CodeNotFound {
                code: trimmed.to_string(),
            })
    }

    /// Returns the number of registered codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the registry holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates over the registered policy codes in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &PolicyCode> {
        self.codes.values()
    }
}
