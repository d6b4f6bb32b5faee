/// Output document format requested from the service.
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Result format of a compile request.
///
/// The user's value is taken verbatim: anything outside the known set is kept
/// as [`Format::Other`] and left for the service to reject.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Pdf,
    Odt,
    Docx,
    Doc,
    /// Unrecognized value, forwarded unchanged.
    Other(String),
}

impl Format {
    /// Wire value, which doubles as the canonical file extension.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pdf => "pdf",
            Self::Odt => "odt",
            Self::Docx => "docx",
            Self::Doc => "doc",
            Self::Other(s) => s,
        }
    }

    /// Extension appended to an output name that has none.
    #[must_use]
    pub fn extension(&self) -> &str {
        self.as_str()
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl FromStr for Format {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "pdf" => Self::Pdf,
            "odt" => Self::Odt,
            "docx" => Self::Docx,
            "doc" => Self::Doc,
            other => Self::Other(other.to_owned()),
        })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
