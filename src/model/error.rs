//! Error enum definition wrapping potential model implementation errors.

use std::error::Error as StdError;
use std::fmt;

/// An error returned from the model logic, most notably the event envelope
/// decoders.
///
/// Every variant is a local, data-level failure: the decode of one frame is
/// pure and independent, so an error here never blocks or corrupts the decode
/// of the next frame, and there is nothing to retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The envelope's `type` discriminator was missing or not a string.
    ///
    /// Raised before any payload field is examined, since the discriminator
    /// determines how the remainder of the frame is decoded.
    MalformedEnvelope,
    /// The discriminator was a well-formed string but is not present in the
    /// dispatch table.
    ///
    /// Carries the literal tag so the caller can log, ignore or report it.
    UnknownEventType(String),
    /// A payload field was absent despite being required, or was present with
    /// an incompatible wire type.
    FieldDecode {
        /// The offending field, when the decoder identifies one.
        field: Option<String>,
        /// The decoder's description of the failure.
        reason: String,
    },
}

impl Error {
    /// Classifies a payload decode failure, extracting the field name when
    /// the backend's message carries one (missing, unknown and duplicate
    /// field failures all do).
    pub(crate) fn field_decode(err: &crate::json::JsonError) -> Self {
        let reason = err.to_string();
        let field = named_field(&reason);

        Self::FieldDecode {
            field,
            reason,
        }
    }
}

// Both backends phrase field-level failures as "... field `name` ...".
fn named_field(reason: &str) -> Option<String> {
    let start = reason.find("field `")? + "field `".len();
    let rest = reason.get(start..)?;
    let end = rest.find('`')?;

    Some(rest[..end].to_owned())
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedEnvelope => {
                f.write_str("event envelope is missing a string `type` discriminator")
            },
            Self::UnknownEventType(tag) => write!(f, "unknown event type `{tag}`"),
            Self::FieldDecode {
                field: Some(field),
                reason,
            } => write!(f, "failed to decode field `{field}`: {reason}"),
            Self::FieldDecode {
                field: None,
                reason,
            } => write!(f, "failed to decode payload: {reason}"),
        }
    }
}

impl StdError for Error {}

#[cfg(test)]
mod test {
    use super::named_field;

    #[test]
    fn field_name_extraction() {
        assert_eq!(named_field("missing field `cid`"), Some("cid".to_owned()));
        assert_eq!(
            named_field("unknown field `cidd`, expected one of `cid`, `type`"),
            Some("cidd".to_owned())
        );
        assert_eq!(named_field("invalid type: null, expected a string"), None);
    }
}
