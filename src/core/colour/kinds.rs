#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourMapKinds {
    GreenBanding,
    ChannelInterleave,
}

impl ColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::GreenBanding, Self::ChannelInterleave];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::GreenBanding => "Green banding",
            Self::ChannelInterleave => "Channel interleave",
        }
    }
}

impl Default for ColourMapKinds {
    fn default() -> Self {
        Self::GreenBanding
    }
}

impl std::fmt::Display for ColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
