//! The [`CellState`] type is the state of one maze cell.

/// State of a single maze cell.
///
/// `Source` marks a query endpoint: both the chosen source and the chosen
/// destination carry it, so the renderer can tell them apart from ordinary
/// cells and the replay never erases them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Blocked,
    Open,
    OnPath,
    Source,
    SourceOnPath,
}

impl CellState {
    /// Whether a path may cross this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Blocked)
    }

    /// Whether this cell is a query endpoint, painted or not.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Source | Self::SourceOnPath)
    }

    /// State of the cell while a path is painted over it.
    #[inline]
    pub const fn painted(self) -> Self {
        if self.is_endpoint() {
            Self::SourceOnPath
        } else {
            Self::OnPath
        }
    }

    /// State of the cell once the painted path is erased.
    #[inline]
    pub const fn erased(self) -> Self {
        if self.is_endpoint() {
            Self::Source
        } else {
            Self::Open
        }
    }
}
