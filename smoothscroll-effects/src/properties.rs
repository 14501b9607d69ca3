use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::TransitionError;

/// Signed decimal numbers. Matches glued to a preceding letter are skipped, since they belong
/// to identifiers such as `translate3d`.
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?\d+(?:\.\d+)?").expect("number pattern is valid")
});

/// A style property value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyValue {
    /// A discrete keyword (e.g. `visibility: hidden`). Switches to the target as soon as the
    /// transition leaves its initial stage.
    Keyword(String),
    /// A unitless number (e.g. `opacity`, `z-index`).
    Number(f64),
    /// Free text with embedded numbers (e.g. `translateX(50%) scale(1.2)`, `12px`).
    Text(String),
}

impl PropertyValue {
    pub fn keyword(value: impl Into<String>) -> Self {
        Self::Keyword(value.into())
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Keyword(_) => "keyword",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(v) | Self::Text(v) => f.write_str(v),
            Self::Number(v) => write!(f, "{}", normalize(*v)),
        }
    }
}

/// An ordered set of named style properties.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Properties {
    entries: Vec<(String, PropertyValue)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Properties::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets `name`, replacing an existing value in place or appending a new entry.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|entry| entry.0 == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut properties = Self::new();
        for (name, value) in iter {
            properties.set(name, value);
        }
        properties
    }
}

/// Text split around its numbers: `literals.len() == numbers + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberTemplate {
    literals: Vec<String>,
}

impl NumberTemplate {
    /// Splits `text` into literal pieces and the numbers between them.
    pub fn parse(text: &str) -> (Self, Vec<f64>) {
        let mut literals = Vec::new();
        let mut numbers = Vec::new();
        let mut cursor = 0;

        for m in NUMBER.find_iter(text) {
            if text[..m.start()].ends_with(|c: char| c.is_ascii_alphabetic()) {
                continue;
            }
            let Ok(value) = m.as_str().parse::<f64>() else {
                continue;
            };
            literals.push(text[cursor..m.start()].to_owned());
            numbers.push(value);
            cursor = m.end();
        }
        literals.push(text[cursor..].to_owned());

        (Self { literals }, numbers)
    }

    /// Number of numeric slots.
    pub fn slots(&self) -> usize {
        self.literals.len().saturating_sub(1)
    }

    /// Renders the template with `numbers` in place of the original ones.
    pub fn render(&self, numbers: impl IntoIterator<Item = f64>) -> String {
        let slots = self.slots();
        let mut out = String::new();
        let mut numbers = numbers.into_iter();
        for (i, piece) in self.literals.iter().enumerate() {
            out.push_str(piece);
            if i < slots {
                if let Some(n) = numbers.next() {
                    out.push_str(&normalize(n).to_string());
                }
            }
        }
        out
    }
}

/// How one property moves from its initial to its target value.
#[derive(Clone, Debug, PartialEq)]
pub enum MappedValue {
    Keyword {
        initial: String,
        target: String,
    },
    Number {
        initial: f64,
        target: f64,
    },
    Text {
        template: NumberTemplate,
        initial: Vec<f64>,
        target: Vec<f64>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct MappedProperty {
    pub name: String,
    pub value: MappedValue,
}

/// Pairs every property of `from` with its value in `to`.
///
/// Fails before anything is animated if a target is missing, kinds differ, or text values do
/// not carry the same amount of numbers. Text properties render through the `from` string, so
/// units and function names come from the initial value.
pub fn map_properties(
    from: &Properties,
    to: &Properties,
) -> Result<Vec<MappedProperty>, TransitionError> {
    if let Some((name, _)) = from.iter().find(|(name, _)| to.get(name).is_none()) {
        return Err(TransitionError::MissingTarget {
            property: name.to_owned(),
        });
    }

    from.iter()
        .map(|(name, initial)| {
            let target = to.get(name).ok_or_else(|| TransitionError::MissingTarget {
                property: name.to_owned(),
            })?;
            let value = map_value(name, initial, target)?;
            Ok(MappedProperty {
                name: name.to_owned(),
                value,
            })
        })
        .collect()
}

fn map_value(
    name: &str,
    initial: &PropertyValue,
    target: &PropertyValue,
) -> Result<MappedValue, TransitionError> {
    match (initial, target) {
        (PropertyValue::Keyword(a), PropertyValue::Keyword(b)) => Ok(MappedValue::Keyword {
            initial: a.clone(),
            target: b.clone(),
        }),
        (PropertyValue::Number(a), PropertyValue::Number(b)) => Ok(MappedValue::Number {
            initial: *a,
            target: *b,
        }),
        (PropertyValue::Text(a), PropertyValue::Text(b)) => {
            let (template, initial) = NumberTemplate::parse(a);
            let (_, target) = NumberTemplate::parse(b);
            if initial.is_empty() {
                return Err(TransitionError::InvalidValue {
                    property: name.to_owned(),
                    value: a.clone(),
                });
            }
            if target.is_empty() {
                return Err(TransitionError::InvalidValue {
                    property: name.to_owned(),
                    value: b.clone(),
                });
            }
            if initial.len() != target.len() {
                return Err(TransitionError::NumberCountMismatch {
                    property: name.to_owned(),
                    from: initial.len(),
                    to: target.len(),
                });
            }
            Ok(MappedValue::Text {
                template,
                initial,
                target,
            })
        }
        (a, b) => Err(TransitionError::KindMismatch {
            property: name.to_owned(),
            from: a.kind(),
            to: b.kind(),
        }),
    }
}

/// Linear interpolation between `initial` and `target` at `stage`.
pub fn apply_ease(initial: f64, target: f64, stage: f64) -> f64 {
    stage * (target - initial) + initial
}

/// Renders every mapped property at `stage` (`0` is `from`, `1` is `to`).
pub fn stringify(mapped: &[MappedProperty], stage: f64) -> Properties {
    mapped
        .iter()
        .map(|p| {
            let value = match &p.value {
                MappedValue::Keyword { initial, target } => {
                    let current = if stage == 0.0 { initial } else { target };
                    PropertyValue::Keyword(current.clone())
                }
                MappedValue::Number { initial, target } => {
                    PropertyValue::Number(apply_ease(*initial, *target, stage))
                }
                MappedValue::Text {
                    template,
                    initial,
                    target,
                } => PropertyValue::Text(
                    template.render(
                        initial
                            .iter()
                            .zip(target)
                            .map(|(a, b)| apply_ease(*a, *b, stage)),
                    ),
                ),
            };
            (p.name.clone(), value)
        })
        .collect()
}

// `-0` renders as "0".
fn normalize(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}
