/// Colouring strategy selected once per render session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColourAlgorithm {
    #[default]
    Smooth,
    Log,
    Flat,
}

impl ColourAlgorithm {
    pub const ALL: &'static [Self] = &[Self::Smooth, Self::Log, Self::Flat];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Smooth => "Smooth",
            Self::Log => "Logarithmic greyscale",
            Self::Flat => "Flat",
        }
    }

    #[must_use]
    pub const fn config_name(self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Log => "log",
            Self::Flat => "flat",
        }
    }

    /// Looks up a configuration name, case-insensitively.
    #[must_use]
    pub fn from_config_name(name: &str) -> Option<Self> {
        let name = name.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.config_name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for ColourAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).config_name())
    }
}
