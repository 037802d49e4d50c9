use std::collections::BTreeSet;

use crate::error::SuiteError;

use super::catalog::{GuestCatalog, ALL_GUESTS};

/// Guests an operation targets: unique names in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuestSet {
    names: Vec<String>,
}

impl GuestSet {
    /// Resolves user supplied names against the catalog.
    ///
    /// Unknown names are a usage error, even next to `all`. Otherwise no names,
    /// or any occurrence of `all`, selects the whole catalog.
    pub fn resolve<S: AsRef<str>>(
        requested: &[S],
        catalog: &GuestCatalog,
    ) -> Result<Self, SuiteError> {
        let unknown = requested
            .iter()
            .map(AsRef::as_ref)
            .find(|g| *g != ALL_GUESTS && !catalog.contains(g));
        if let Some(unknown) = unknown {
            return Err(SuiteError::usage(format!(
                "unknown guest '{}' (choose from: {}, {})",
                unknown,
                ALL_GUESTS,
                catalog.all().join(", ")
            )));
        }

        if requested.is_empty() || requested.iter().any(|g| g.as_ref() == ALL_GUESTS) {
            return Ok(Self::from_names(catalog.all()));
        }

        Ok(Self::from_names(requested.iter().map(|g| g.as_ref())))
    }

    /// Exactly the given names, sorted and de-duplicated. `all` is not special
    /// here and an empty input stays empty.
    pub fn exact<I, S>(names: I, catalog: &GuestCatalog) -> Result<Self, SuiteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = Self::from_names(names);
        if let Some(unknown) = set.iter().find(|g| !catalog.contains(g)) {
            return Err(SuiteError::usage(format!("unknown guest '{unknown}'")));
        }
        Ok(set)
    }

    fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        Self {
            names: names.into_iter().collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl std::fmt::Display for GuestSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.names.join(", "))
    }
}
