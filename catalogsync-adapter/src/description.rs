//! Short vs. long glossary term description selection.

/// Longest text, in characters, that still fits the short description field.
pub const SHORT_DESCRIPTION_MAX_CHARS: usize = 1024;

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Description fields to send with a glossary term create or update.
///
/// At most one of the two fields is ever set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionFields {
    pub short_description: Option<String>,
    pub long_description: Option<String>,
}

impl DescriptionFields {
    /// Picks the field for a list of description paragraphs.
    ///
    /// A single paragraph of at most [`SHORT_DESCRIPTION_MAX_CHARS`]
    /// characters becomes the short description. Anything else non-empty is
    /// joined with blank lines into the long description.
    pub fn from_descriptions<S: AsRef<str>>(descriptions: &[S]) -> Self {
        match descriptions {
            [] => Self::default(),
            [only] if only.as_ref().chars().count() <= SHORT_DESCRIPTION_MAX_CHARS => Self {
                short_description: Some(only.as_ref().to_string()),
                long_description: None,
            },
            many => Self {
                short_description: None,
                long_description: Some(
                    many.iter()
                        .map(|d| d.as_ref())
                        .collect::<Vec<&str>>()
                        .join(PARAGRAPH_SEPARATOR),
                ),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.short_description.is_none() && self.long_description.is_none()
    }
}
