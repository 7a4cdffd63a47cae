use alloc::string::ToString;
use core::str::FromStr;

use crate::Error;

/// The scroll container being animated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ancestor<N> {
    /// The whole viewport (document scrolling).
    #[default]
    Viewport,
    /// A specific scrollable element.
    Element(N),
}

impl<N> Ancestor<N> {
    pub fn element(&self) -> Option<&N> {
        match self {
            Self::Viewport => None,
            Self::Element(node) => Some(node),
        }
    }
}

/// Which point of the target lines up with which point of the ancestor's viewport once the
/// animation completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Position {
    /// Target top at the viewport top. Also accepted as `"top"`.
    #[cfg_attr(feature = "serde", serde(alias = "top"))]
    Start,
    /// Target center at the viewport center.
    #[default]
    Center,
    /// Target bottom at the viewport bottom.
    End,
}

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("start") || name.eq_ignore_ascii_case("top") {
            Ok(Self::Start)
        } else if name.eq_ignore_ascii_case("center") {
            Ok(Self::Center)
        } else if name.eq_ignore_ascii_case("end") {
            Ok(Self::End)
        } else {
            Err(Error::UnknownPosition(s.to_string()))
        }
    }
}

/// How the target's offset from the top of the ancestor's content is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OffsetResolution {
    /// Sum each node's offset from its parent, walking up until the ancestor element is reached.
    ///
    /// This supports scrolling inside nested scroll containers.
    #[default]
    Scoped,
    /// Read the target's offset from the document directly, ignoring nested containers.
    DocumentRelative,
}

impl FromStr for OffsetResolution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("scoped") {
            Ok(Self::Scoped)
        } else if name.eq_ignore_ascii_case("document-relative") {
            Ok(Self::DocumentRelative)
        } else {
            Err(Error::UnknownOffsetResolution(s.to_string()))
        }
    }
}
