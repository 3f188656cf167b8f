use smallvec::SmallVec;

pub type KeyList = SmallVec<[ParameterToken; 4]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Parameter(ParameterToken),
}

impl Token {
    pub fn as_parameter(&self) -> Option<&ParameterToken> {
        match self {
            Token::Parameter(param) => Some(param),
            Token::Literal(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterToken {
    /// Declared name, or the positional index for unnamed groups.
    pub name: String,
    /// Delimiter character consumed right before the parameter; may be empty.
    pub prefix: String,
    /// Joiner placed between repeated values.
    pub delimiter: String,
    pub quantifier: Quantifier,
    /// The prefix is also meaningful on its own and stays outside optional groups.
    pub partial: bool,
    /// Sub-pattern a single value must match.
    pub pattern: String,
}

impl ParameterToken {
    pub fn is_optional(&self) -> bool {
        self.quantifier.is_optional()
    }

    pub fn is_repeating(&self) -> bool {
        self.quantifier.is_repeating()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantifier {
    #[default]
    One,
    ZeroOrOne,
    ZeroOrMore,
    OneOrMore,
}

impl Quantifier {
    pub fn from_modifier(modifier: Option<&str>) -> Self {
        match modifier {
            Some("?") => Self::ZeroOrOne,
            Some("*") => Self::ZeroOrMore,
            Some("+") => Self::OneOrMore,
            _ => Self::One,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::ZeroOrOne | Self::ZeroOrMore)
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self, Self::ZeroOrMore | Self::OneOrMore)
    }
}
