#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeKinds {
    Classic,
    Smooth,
}

impl EscapeKinds {
    pub const ALL: &'static [Self] = &[Self::Classic, Self::Smooth];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic escape time",
            Self::Smooth => "Smooth escape time",
        }
    }
}

impl Default for EscapeKinds {
    fn default() -> Self {
        Self::Classic
    }
}

impl std::fmt::Display for EscapeKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
