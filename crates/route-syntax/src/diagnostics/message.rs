use rowan::TextRange;
use serde::Serialize;

/// Diagnostic kinds, grouped by the stage that raises them.
///
/// Message wording follows the runtime routing library so that consumers matching on
/// message text see the same strings at analysis time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DiagnosticKind {
    // Lexical: attached to the offending token
    MismatchedParameter,
    UnescapedBrace,
    InvalidParameterName,
    InvalidLiteral,
    UnescapedReplacementBracket,
    ImbalancedReplacementDelimiters,

    // Structural: raised for missing tokens
    MissingPolicyArgumentsClose,
    UnclosedReplacementToken,

    // Semantic: raised by the validator
    InvalidRouteTemplate,
    CannotHaveConsecutiveSeparators,
    CannotHaveConsecutiveParameters,
    CatchAllMustBeLast,
    CannotHaveCatchAllInMultiSegment,
    OptionalParameterHasToBeLast,
    OptionalParameterCanBePrecededByPeriod,
    OptionalCannotHaveDefaultValue,
    CatchAllCannotBeOptional,
    RepeatedParameter,
    EmptyReplacementToken,
}

impl DiagnosticKind {
    /// Message used when the call site provides no detail.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::MismatchedParameter => {
                "There is an incomplete parameter in the route template. Check that each '{' character has a matching '}' character."
            }
            Self::UnescapedBrace => {
                "In a route parameter, '{' and '}' must be escaped with '{{' and '}}'."
            }
            Self::InvalidParameterName => "The route parameter name is invalid.",
            Self::InvalidLiteral => {
                "The literal section is invalid. Literal sections cannot contain the '?' character."
            }
            Self::UnescapedReplacementBracket => {
                "An unescaped '[' token is not allowed inside of a replacement token. Use '[[' to escape."
            }
            Self::ImbalancedReplacementDelimiters => "Token delimiters ('[', ']') are imbalanced.",

            Self::MissingPolicyArgumentsClose => {
                "The policy argument list is not closed. Check that each '(' character has a matching ')' character."
            }
            Self::UnclosedReplacementToken => "A replacement token is not closed.",

            Self::InvalidRouteTemplate => {
                "The route template cannot start with a '~' character unless followed by a '/'."
            }
            Self::CannotHaveConsecutiveSeparators => {
                "The route template separator character '/' cannot appear consecutively. It must be separated by either a parameter or a literal value."
            }
            Self::CannotHaveConsecutiveParameters => {
                "A path segment cannot contain two consecutive parameters. They must be separated by a '/' or by a literal string."
            }
            Self::CatchAllMustBeLast => {
                "A catch-all parameter can only appear as the last segment of the route template."
            }
            Self::CannotHaveCatchAllInMultiSegment => {
                "A path segment that contains more than one section, such as a literal section or a parameter, cannot contain a catch-all parameter."
            }
            Self::OptionalParameterHasToBeLast => {
                "An optional parameter must be at the end of the segment."
            }
            Self::OptionalParameterCanBePrecededByPeriod => {
                "Only a period (.) can precede an optional parameter."
            }
            Self::OptionalCannotHaveDefaultValue => {
                "An optional parameter cannot have default value."
            }
            Self::CatchAllCannotBeOptional => "A catch-all parameter cannot be marked optional.",
            Self::RepeatedParameter => {
                "The route parameter name appears more than one time in the route template."
            }
            Self::EmptyReplacementToken => "An empty replacement token ('[]') is not allowed.",
        }
    }

    /// Template for messages with caller-provided detail. `{}` placeholders are filled
    /// in order.
    pub fn custom_message(&self) -> &'static str {
        match self {
            Self::InvalidParameterName => {
                "The route parameter name '{}' is invalid. Route parameter names must be non-empty and cannot contain these characters: '{', '}', '/'. The '?' character marks a parameter as optional, and can occur only at the end of the parameter. The '*' character marks a parameter as catch-all, and can occur only at the start of the parameter."
            }
            Self::InvalidLiteral => {
                "The literal section '{}' is invalid. Literal sections cannot contain the '?' character."
            }
            Self::RepeatedParameter => {
                "The route parameter name '{}' appears more than one time in the route template."
            }
            Self::OptionalParameterHasToBeLast => {
                "An optional parameter must be at the end of the segment. In the segment '{}', optional parameter '{}' is followed by '{}'."
            }
            Self::OptionalParameterCanBePrecededByPeriod => {
                "In the segment '{}', the optional parameter '{}' is preceded by an invalid segment '{}'. Only a period (.) can precede an optional parameter."
            }
            _ => self.fallback_message(),
        }
    }

    /// Render the final message.
    ///
    /// - empty `args` → `fallback_message()`
    /// - otherwise → `custom_message()` with each `{}` replaced by the next arg
    pub fn message(&self, args: &[&str]) -> String {
        if args.is_empty() {
            return self.fallback_message().to_string();
        }
        let template = self.custom_message();
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        let mut args = args.iter();
        while let Some(at) = rest.find("{}") {
            out.push_str(&rest[..at]);
            out.push_str(args.next().copied().unwrap_or_default());
            rest = &rest[at + 2..];
        }
        out.push_str(rest);
        out
    }
}

/// A message anchored to a source range.
///
/// Equality and hashing cover every field; the message is a function of the kind and its
/// detail, so two diagnostics are equal exactly when their message and range are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    pub(crate) kind: DiagnosticKind,
    pub(crate) message: String,
    #[serde(serialize_with = "serialize_range")]
    pub(crate) range: TextRange,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            range,
        }
    }

    pub fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Range in the original source.
    pub fn range(&self) -> TextRange {
        self.range
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )
    }
}

/// Serializes a range as `{start, end}`.
pub(crate) fn serialize_range<S: serde::Serializer>(range: &TextRange, s: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeStruct;
    let mut st = s.serialize_struct("Range", 2)?;
    st.serialize_field("start", &u32::from(range.start()))?;
    st.serialize_field("end", &u32::from(range.end()))?;
    st.end()
}
