//! Per-endpoint input schemas.
//!
//! A [`Schema`] lists the fields an endpoint accepts, each with a [`Rule`]
//! and whether it is required. Validation is strict: undeclared fields are
//! rejected, and the validated fields come back as ordered query pairs.

use serde::Serialize;
use serde_json::Value;

use crate::error::{InputValidationError, Violation};
use crate::inputs::{MATCH_TYPES, PLATFORMS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Any string with at least one non-whitespace character.
    NonEmpty,
    /// A single numeric id.
    Digits,
    /// One or more numeric ids separated by commas.
    DigitList,
    OneOf(&'static [&'static str]),
}

impl Rule {
    fn check(self, value: &str) -> Result<(), Violation> {
        match self {
            Rule::NonEmpty if value.trim().is_empty() => Err(Violation::Empty),
            Rule::NonEmpty => Ok(()),
            Rule::Digits if value.is_empty() => Err(Violation::Empty),
            Rule::Digits if !is_digits(value) => Err(Violation::NotNumeric),
            Rule::Digits => Ok(()),
            Rule::DigitList if value.is_empty() => Err(Violation::Empty),
            Rule::DigitList if !value.split(',').all(is_digits) => Err(Violation::NotIdList),
            Rule::DigitList => Ok(()),
            Rule::OneOf(allowed) if allowed.iter().any(|a| *a == value) => Ok(()),
            Rule::OneOf(allowed) => Err(Violation::NotOneOf(allowed)),
        }
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub rule: Rule,
    pub required: bool,
}

impl Field {
    pub const fn required(name: &'static str, rule: Rule) -> Self {
        Self {
            name,
            rule,
            required: true,
        }
    }

    /// Left off the query entirely when the input omits it.
    pub const fn optional(name: &'static str, rule: Rule) -> Self {
        Self {
            name,
            rule,
            required: false,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    pub fields: &'static [Field],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Checks `input` against the schema and returns the query pairs to send.
    ///
    /// `input` must serialize to a JSON object whose values are strings; a
    /// `null` value counts as an omitted field. Pairs keep the input's field
    /// order and hold only what the input set.
    pub fn validate<I: Serialize + ?Sized>(
        &self,
        input: &I,
    ) -> Result<Vec<(String, String)>, InputValidationError> {
        let object = match serde_json::to_value(input) {
            Ok(Value::Object(object)) => object,
            _ => return Err(InputValidationError::new("<input>", Violation::NotAnObject)),
        };

        let mut pairs = Vec::with_capacity(self.fields.len());
        for (name, value) in object {
            let field = self
                .field(&name)
                .ok_or_else(|| InputValidationError::new(&name, Violation::Unknown))?;
            let value = match value {
                Value::Null => continue,
                Value::String(value) => value,
                _ => return Err(InputValidationError::new(&name, Violation::NotAString)),
            };
            field
                .rule
                .check(&value)
                .map_err(|violation| InputValidationError::new(&name, violation))?;
            pairs.push((name, value));
        }

        if let Some(missing) = self
            .fields
            .iter()
            .filter(|f| f.required)
            .find(|f| !pairs.iter().any(|(name, _)| name == f.name))
        {
            return Err(InputValidationError::new(missing.name, Violation::Missing));
        }

        Ok(pairs)
    }
}

const PLATFORM: Field = Field::required("platform", Rule::OneOf(PLATFORMS));
const CLUB_ID: Field = Field::required("clubId", Rule::Digits);
const CLUB_IDS: Field = Field::required("clubIds", Rule::DigitList);

pub static CLUB_SEARCH: Schema = Schema {
    fields: &[Field::required("name", Rule::NonEmpty), PLATFORM],
};

pub static OVERALL_STATS: Schema = Schema {
    fields: &[CLUB_IDS, PLATFORM],
};

pub static MEMBER_CAREER_STATS: Schema = Schema {
    fields: &[CLUB_ID, PLATFORM],
};

pub static MEMBER_STATS: Schema = Schema {
    fields: &[CLUB_ID, PLATFORM],
};

pub static MATCHES_STATS: Schema = Schema {
    fields: &[
        CLUB_IDS,
        PLATFORM,
        Field::optional("matchType", Rule::OneOf(MATCH_TYPES)),
    ],
};

pub static CLUB_INFO: Schema = Schema {
    fields: &[CLUB_IDS, PLATFORM],
};
