use strum::{Display, EnumString, IntoStaticStr, VariantArray};

/// The four paints of the sample puzzle.
///
/// [`Paint::VARIANTS`] is the default palette and its order decides hint tie-breaks.
/// String forms are lowercase: `"red"`, `"blue"`, `"yellow"`, `"green"`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Display, EnumString, IntoStaticStr, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum Paint {
    /// `"red"`
    Red,
    /// `"blue"`
    Blue,
    /// `"yellow"`
    Yellow,
    /// `"green"`
    Green,
}

impl Paint {
    /// Every paint, in hint tie-break order. Same as [`Paint::VARIANTS`].
    pub fn palette() -> &'static [Paint] {
        Self::VARIANTS
    }

    /// A single character for grid dumps.
    pub fn glyph(&self) -> char {
        match self {
            Paint::Red => 'r',
            Paint::Blue => 'b',
            Paint::Yellow => 'y',
            Paint::Green => 'g',
        }
    }
}
