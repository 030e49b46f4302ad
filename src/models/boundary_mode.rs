use crate::constants::{END_MARKER, START_MARKER};
use std::fmt;
use std::str::FromStr;

/// Selects how the body of a book is told apart from its header and license text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BoundaryMode {
    /// Reproduces the long-standing marker check, which only recognizes a marker
    /// at column 0 and with inverted polarity for the start marker.
    ///
    /// In practice nearly the whole file is treated as content: the flag turns on
    /// for the first line that does not begin with the start marker, and a line
    /// beginning with the end marker turns it off again (until the next line).
    #[default]
    Legacy,
    /// Only text strictly between a line containing the start marker and a line
    /// containing the end marker is treated as content.
    Markers,
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryMode::Legacy => write!(f, "legacy"),
            BoundaryMode::Markers => write!(f, "markers"),
        }
    }
}

impl FromStr for BoundaryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(BoundaryMode::Legacy),
            "markers" => Ok(BoundaryMode::Markers),
            other => Err(format!(
                "unknown boundary mode '{}' (expected 'legacy' or 'markers')",
                other
            )),
        }
    }
}

/// Position of a `BoundaryMode::Markers` scan relative to the book body.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MarkerScanState {
    BeforeStart,
    InContent,
    AfterEnd,
}

/// Line-by-line content region detector.
#[derive(Debug, Clone)]
pub struct ContentBoundary {
    mode: BoundaryMode,
    in_content: bool,
    state: MarkerScanState,
}

impl ContentBoundary {
    pub fn new(mode: BoundaryMode) -> Self {
        Self {
            mode,
            in_content: false,
            state: MarkerScanState::BeforeStart,
        }
    }

    pub fn mode(&self) -> BoundaryMode {
        self.mode
    }

    pub fn state(&self) -> MarkerScanState {
        self.state
    }

    /// Advances past `line` and returns whether its tokens belong to the book body.
    pub fn accept_line(&mut self, line: &str) -> bool {
        match self.mode {
            BoundaryMode::Legacy => self.accept_line_legacy(line),
            BoundaryMode::Markers => self.accept_line_markers(line),
        }
    }

    fn accept_line_legacy(&mut self, line: &str) -> bool {
        if !line.starts_with(START_MARKER) {
            self.in_content = true;
        }
        if line.starts_with(END_MARKER) {
            self.in_content = false;
        }

        self.in_content
    }

    fn accept_line_markers(&mut self, line: &str) -> bool {
        match self.state {
            MarkerScanState::BeforeStart => {
                if line.contains(START_MARKER) {
                    self.state = MarkerScanState::InContent;
                }
                false
            }
            MarkerScanState::InContent => {
                if line.contains(END_MARKER) {
                    self.state = MarkerScanState::AfterEnd;
                    false
                } else {
                    true
                }
            }
            MarkerScanState::AfterEnd => false,
        }
    }
}
