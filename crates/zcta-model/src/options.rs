//! Lookup policy options shared by all resolvers.

use serde::{Deserialize, Serialize};

/// What a lookup returns when the code is not in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissPolicy {
    /// Treat the normalized input as its own answer.
    UseInput,
    /// Return nothing (`None` or an empty list).
    Empty,
}

/// Whether lookups emit human-readable miss diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagnostics {
    #[default]
    Emit,
    Suppress,
}

impl Diagnostics {
    pub fn enabled(self) -> bool {
        matches!(self, Self::Emit)
    }
}

impl From<bool> for Diagnostics {
    /// `true` means "suppress".
    fn from(suppress: bool) -> Self {
        if suppress { Self::Suppress } else { Self::Emit }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOptions {
    pub on_miss: MissPolicy,
    pub diagnostics: Diagnostics,
}

impl LookupOptions {
    /// ZIP -> ZCTA default: unknown codes resolve to nothing.
    pub const fn forward() -> Self {
        Self {
            on_miss: MissPolicy::Empty,
            diagnostics: Diagnostics::Emit,
        }
    }

    /// ZCTA -> ZIPs default: unknown ZCTAs come back as themselves.
    pub const fn reverse() -> Self {
        Self {
            on_miss: MissPolicy::UseInput,
            diagnostics: Diagnostics::Emit,
        }
    }

    #[must_use]
    pub const fn with_on_miss(mut self, on_miss: MissPolicy) -> Self {
        self.on_miss = on_miss;
        self
    }

    #[must_use]
    pub const fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    #[must_use]
    pub const fn suppressed(self) -> Self {
        self.with_diagnostics(Diagnostics::Suppress)
    }
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self::forward()
    }
}
