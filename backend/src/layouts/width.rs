use std::fmt::{Debug, Display};

/// Runtime tag of a supported integer bit-width.
///
/// Variants are declared narrowest first so that the derived ordering is the
/// ordering by bit-width. The discriminant is the type byte sent on the wire.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WidthTag {
    Euint8 = 0,
    Euint16 = 1,
    Euint32 = 2,
}

impl WidthTag {
    pub const ALL: [WidthTag; 3] = [WidthTag::Euint8, WidthTag::Euint16, WidthTag::Euint32];

    /// Widest supported width.
    pub const MAX: WidthTag = WidthTag::Euint32;

    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            WidthTag::Euint8 => 8,
            WidthTag::Euint16 => 16,
            WidthTag::Euint32 => 32,
        }
    }

    #[inline]
    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Bit mask selecting the low `bits()` bits of a `u64`.
    #[inline]
    pub const fn mask(self) -> u64 {
        (1u64 << self.bits()) - 1
    }

    /// Type byte used on the wire.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    pub const fn from_tag(tag: u8) -> Option<WidthTag> {
        match tag {
            0 => Some(WidthTag::Euint8),
            1 => Some(WidthTag::Euint16),
            2 => Some(WidthTag::Euint32),
            _ => None,
        }
    }
}

impl Display for WidthTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "euint{}", self.bits())
    }
}

mod private {
    pub trait Sealed {}
}

/// Compile-time width marker.
///
/// Handles and scalars carry their width as a type parameter, so mixing
/// widths without an explicit cast does not type-check.
pub trait Width: private::Sealed + Copy + Clone + Default + Debug + PartialEq + Eq + std::hash::Hash + 'static {
    const TAG: WidthTag;

    /// Plaintext integer type of the declared parameter width.
    type Plain: Copy + Debug + PartialEq + Into<u64>;

    /// Keeps the low bits of `value` that fit in [`Self::Plain`].
    fn truncate(value: u64) -> Self::Plain;
}

macro_rules! width_marker {
    ($(#[$attr:meta])* $name:ident, $tag:expr, $plain:ty) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl private::Sealed for $name {}

        impl Width for $name {
            const TAG: WidthTag = $tag;
            type Plain = $plain;

            #[inline]
            fn truncate(value: u64) -> $plain {
                value as $plain
            }
        }
    };
}

width_marker!(
    /// 8-bit encrypted integers.
    W8,
    WidthTag::Euint8,
    u8
);
width_marker!(
    /// 16-bit encrypted integers.
    W16,
    WidthTag::Euint16,
    u16
);
width_marker!(
    /// 32-bit encrypted integers.
    W32,
    WidthTag::Euint32,
    u32
);
