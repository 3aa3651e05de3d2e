use std::fmt;

use indexmap::IndexSet;

use crate::error::CoreError;

/// The fixed set of RPC method names the gateway is willing to forward.
///
/// Matching is exact and case-sensitive. The set keeps the order in which
/// methods were configured so startup logs mirror the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allowlist(IndexSet<String>);

impl Allowlist {
    /// Builds an allowlist from a comma-separated list such as
    /// `getblockcount,getblockhash`.
    ///
    /// Empty entries are dropped. Entries are not trimmed, so `" getinfo"`
    /// is a different method than `"getinfo"`.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyAllowlist`] if no non-empty entry remains.
    pub fn from_csv(csv: &str) -> Result<Self, CoreError> {
        Self::new(csv.split(','))
    }

    /// Builds an allowlist from individual method names.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyAllowlist`] if no non-empty name is given.
    pub fn new<I, S>(methods: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: IndexSet<String> = methods
            .into_iter()
            .map(Into::into)
            .filter(|m| !m.is_empty())
            .collect();
        if set.is_empty() {
            return Err(CoreError::EmptyAllowlist);
        }
        Ok(Self(set))
    }

    /// Returns `true` if `method` may be forwarded.
    #[must_use]
    pub fn contains(&self, method: &str) -> bool {
        self.0.contains(method)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for Allowlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, method) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(method)?;
        }
        Ok(())
    }
}
