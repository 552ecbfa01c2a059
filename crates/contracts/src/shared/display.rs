use serde::{Deserialize, Serialize};

/// Visual emphasis of a badge, dot or stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Neutral,
    Primary,
    Success,
    Warning,
    Error,
}

impl Tone {
    /// Suffix used by the `badge--*` / `stat-card--*` CSS modifiers
    pub fn code(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Primary => "primary",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Error => "error",
        }
    }
}

/// Label and tone for one enum variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMeta {
    pub label: &'static str,
    pub tone: Tone,
}

impl StatusMeta {
    pub const fn new(label: &'static str, tone: Tone) -> Self {
        Self { label, tone }
    }
}

/// Closed enum with a stable code and display metadata.
///
/// Implementations spell out every variant in `meta()` so adding a variant
/// without a label fails to compile.
pub trait CodedEnum: Sized + Copy + 'static {
    /// Name used in parse errors
    const KIND: &'static str;

    fn code(&self) -> &'static str;

    fn meta(&self) -> StatusMeta;

    /// Variants in the order the UI lists them
    fn all() -> &'static [Self];

    fn label(&self) -> &'static str {
        self.meta().label
    }

    fn tone(&self) -> Tone {
        self.meta().tone
    }

    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.code() == code)
    }
}

/// Implements `FromStr` and `Display` in terms of [`CodedEnum`].
#[macro_export]
macro_rules! impl_code_conversions {
    ($ty:ty) => {
        impl ::std::str::FromStr for $ty {
            type Err = $crate::shared::error::ParseCodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::shared::display::CodedEnum>::from_code(s).ok_or_else(|| {
                    $crate::shared::error::ParseCodeError::unknown(
                        <$ty as $crate::shared::display::CodedEnum>::KIND,
                        s,
                    )
                })
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::shared::display::CodedEnum::code(self))
            }
        }
    };
}
