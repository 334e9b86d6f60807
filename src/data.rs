//! Input values and datasets.
//!
//! Algorithms operate on [`Element`]s, which are either numbers (integer or
//! float) or text. A [`Dataset`] is guaranteed to hold only one of the two
//! kinds, so every pair of elements inside it is meaningfully comparable.

use crate::error::{LabError, Result};
use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A single comparable input value.
///
/// Numbers compare numerically regardless of representation (`1 == 1.0`).
/// Integers and floats are compared exactly, without rounding the integer
/// to `f64`, so the order stays transitive above 2^53. `-0.0` equals `0.0`;
/// otherwise floats follow `f64::total_cmp`, which puts NaN past the
/// infinities. Numbers sort before text.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Element {
    Int(i64),
    Float(f64),
    Text(String),
}

/// The kind of values a dataset holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    Numeric,
    Text,
}

impl Element {
    pub fn kind(&self) -> DataKind {
        match self {
            Element::Int(_) | Element::Float(_) => DataKind::Numeric,
            Element::Text(_) => DataKind::Text,
        }
    }

    /// Convert a JSON scalar. Only numbers and strings are accepted.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Element::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Element::Float(f))
                } else {
                    Err(LabError::invalid(format!("Unsupported number: {}", n)))
                }
            }
            Value::String(s) => Ok(Element::Text(s.clone())),
            other => Err(LabError::invalid(format!(
                "Elements must be numbers or strings, got {}",
                json_type_name(other)
            ))),
        }
    }
}

/// Exact comparison of an integer with a float.
fn cmp_int_float(i: i64, f: f64) -> Ordering {
    // 2^63; every i64 lies in [-2^63, 2^63)
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if f >= LIMIT {
        return Ordering::Less;
    }
    if f < -LIMIT {
        return Ordering::Greater;
    }

    // `whole` is integral and in range, so the cast is exact
    let whole = f.trunc();
    i.cmp(&(whole as i64)).then_with(|| {
        if f > whole {
            Ordering::Less
        } else if f < whole {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Element::Int(a), Element::Int(b)) => a.cmp(b),
            (Element::Float(a), Element::Float(b)) if a == b => Ordering::Equal,
            (Element::Float(a), Element::Float(b)) => a.total_cmp(b),
            (Element::Int(a), Element::Float(b)) => cmp_int_float(*a, *b),
            (Element::Float(a), Element::Int(b)) => cmp_int_float(*b, *a).reverse(),
            (Element::Text(a), Element::Text(b)) => a.cmp(b),
            (Element::Text(_), _) => Ordering::Greater,
            (_, Element::Text(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Element {}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Int(i) => write!(f, "{}", i),
            Element::Float(x) => write!(f, "{}", x),
            Element::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Parses an integer first, then a finite float, and falls back to text.
impl FromStr for Element {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Element::Int(i));
        }
        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Element::Float(f)),
            _ => Ok(Element::Text(s.to_string())),
        }
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Int(value)
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::Float(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::Text(value.to_string())
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::Text(value)
    }
}

/// An ordered, uniformly typed input sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    elements: Vec<Element>,
}

impl Dataset {
    /// Build a dataset, rejecting sequences that mix numbers and text.
    pub fn new(elements: Vec<Element>) -> Result<Self> {
        if let Some(first) = elements.first() {
            let kind = first.kind();
            if let Some(pos) = elements.iter().position(|e| e.kind() != kind) {
                return Err(LabError::invalid(format!(
                    "Elements must be all numbers or all strings (mixed types at index {})",
                    pos
                )));
            }
        }
        Ok(Self { elements })
    }

    /// Build a dataset from a JSON array's items.
    pub fn from_json(values: &[Value]) -> Result<Self> {
        let elements = values
            .iter()
            .map(Element::from_json)
            .collect::<Result<Vec<_>>>()?;
        Self::new(elements)
    }

    /// Dataset of integers.
    pub fn integers(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            elements: values.into_iter().map(Element::Int).collect(),
        }
    }

    /// The kind of the elements, `None` for an empty dataset.
    pub fn kind(&self) -> Option<DataKind> {
        self.elements.first().map(Element::kind)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.elements
    }

    pub fn into_inner(self) -> Vec<Element> {
        self.elements
    }

    /// Whether the elements are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        is_non_decreasing(&self.elements)
    }
}

pub(crate) fn is_non_decreasing(values: &[Element]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

impl From<Vec<i64>> for Dataset {
    fn from(values: Vec<i64>) -> Self {
        Self {
            elements: values.into_iter().map(Element::Int).collect(),
        }
    }
}

impl From<Vec<String>> for Dataset {
    fn from(values: Vec<String>) -> Self {
        Self {
            elements: values.into_iter().map(Element::Text).collect(),
        }
    }
}

impl From<Vec<&str>> for Dataset {
    fn from(values: Vec<&str>) -> Self {
        Self {
            elements: values.into_iter().map(Element::from).collect(),
        }
    }
}
