/// Which code path services a render. Both variants honour the same
/// per-pixel contract; the serial path exists as a reference and for
/// debugging the parallel one against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelVariant {
    Serial,
    #[default]
    Parallel,
}

impl KernelVariant {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Serial => Self::Parallel,
            Self::Parallel => Self::Serial,
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Parallel => "parallel",
        }
    }
}
