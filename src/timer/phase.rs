use std::fmt;

/// Which countdown is active. Phases strictly alternate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Session,
    Break,
}

impl Phase {
    pub fn other(self) -> Self {
        match self {
            Phase::Session => Phase::Break,
            Phase::Break => Phase::Session,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Session => "Session",
            Phase::Break => "Break",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
