use serde::Serialize;
use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Route-keyed aggregation of validation failures. Leaf errors are plain
/// strings; children group failures under the node that reported them.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorTree {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, ErrorTree>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            children: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, err: impl ToString) {
        self.errors.push(err.to_string());
    }

    /// Child tree for a route key, created on first use.
    pub fn child(&mut self, route: impl Into<String>) -> &mut Self {
        self.children.entry(route.into()).or_default()
    }

    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
        for (route, child) in other.children {
            self.child(route).merge(child);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of leaf errors across the tree.
    #[must_use]
    pub fn count(&self) -> usize {
        self.errors.len() + self.children.values().map(Self::count).sum::<usize>()
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    fn fmt_routed(&self, route: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for err in &self.errors {
            if route.is_empty() {
                writeln!(f, "{err}")?;
            } else {
                writeln!(f, "{route}: {err}")?;
            }
        }
        for (key, child) in &self.children {
            let route = if route.is_empty() {
                key.clone()
            } else {
                format!("{route}.{key}")
            };
            child.fmt_routed(&route, f)?;
        }

        Ok(())
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_routed("", f)
    }
}

impl std::error::Error for ErrorTree {}

/// Push a formatted error onto an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}
