use std::collections::BTreeMap;

/// A configuration value attached to an operator instance.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Float(f32),
    Floats(Vec<f32>),
    Int(i64),
    Bool(bool),
}

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

/// Narrowed to `f32`, which is what every scalar attribute is read as.
impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value as f32)
    }
}

impl From<Vec<f32>> for AttrValue {
    fn from(value: Vec<f32>) -> Self {
        Self::Floats(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Why an attribute couldn't be read. The driver turns this into a
/// [crate::tensor::Error] naming the entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrError {
    Missing(&'static str),
    WrongType(&'static str),
}

/// Named attribute values of one operator instance.
///
/// ```rust
/// # use actkern_core::prelude::*;
/// let attrs = AttrTable::new().with("alpha", 0.02).with("threshold", 6i64);
/// assert_eq!(attrs.try_get_f32("alpha"), Ok(0.02));
/// assert_eq!(attrs.try_get_f32("threshold"), Ok(6.0));
/// assert_eq!(attrs.try_get_f32("beta"), Err(AttrError::Missing("beta")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrTable {
    values: BTreeMap<String, AttrValue>,
}

impl AttrTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Reads a float attribute. Integers are accepted and converted.
    pub fn try_get_f32(&self, name: &'static str) -> Result<f32, AttrError> {
        match self.values.get(name) {
            None => Err(AttrError::Missing(name)),
            Some(AttrValue::Float(v)) => Ok(*v),
            Some(AttrValue::Int(v)) => Ok(*v as f32),
            Some(_) => Err(AttrError::WrongType(name)),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Scalar parameters an activation reads from its [AttrTable] before running.
///
/// Usually derived with `#[derive(Attributes)]`, marking each parameter field
/// with `#[attr]`.
pub trait Attributes {
    /// Attribute names, in binding order.
    const ATTR_NAMES: &'static [&'static str];

    /// Overwrites every declared slot from `attrs`. Stops at the first missing
    /// or mistyped name.
    fn try_set_attributes(&mut self, attrs: &AttrTable) -> Result<(), AttrError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, Copy, actkern_derives::Attributes)]
    struct Clamp {
        #[attr]
        lo: f32,
        #[attr(name = "upper")]
        hi: f32,
        untouched: f32,
    }

    #[derive(Debug, Default, Clone, Copy, actkern_derives::Attributes)]
    struct Scaled(#[attr(name = "scale")] f32);

    #[derive(Debug, Default, Clone, Copy, actkern_derives::Attributes)]
    struct Plain;

    #[test]
    fn test_derived_attribute_names() {
        assert_eq!(Clamp::ATTR_NAMES, ["lo", "upper"]);
        assert_eq!(Scaled::ATTR_NAMES, ["scale"]);
        assert!(Plain::ATTR_NAMES.is_empty());
    }

    #[test]
    fn test_derived_binding() {
        let attrs = AttrTable::new().with("lo", -1.0).with("upper", 2i64);
        let mut op = Clamp {
            untouched: 9.0,
            ..Default::default()
        };
        op.try_set_attributes(&attrs).unwrap();
        assert_eq!((op.lo, op.hi, op.untouched), (-1.0, 2.0, 9.0));

        let mut s = Scaled::default();
        s.try_set_attributes(&AttrTable::new().with("scale", 0.5))
            .unwrap();
        assert_eq!(s.0, 0.5);

        Plain.try_set_attributes(&AttrTable::new()).unwrap();
    }

    #[test]
    fn test_missing_and_mistyped() {
        let mut op = Clamp::default();
        assert_eq!(
            op.try_set_attributes(&AttrTable::new().with("lo", 0.0)),
            Err(AttrError::Missing("upper"))
        );
        assert_eq!(
            op.try_set_attributes(&AttrTable::new().with("lo", true)),
            Err(AttrError::WrongType("lo"))
        );
        assert_eq!(
            op.try_set_attributes(&AttrTable::new().with("lo", vec![1.0f32])),
            Err(AttrError::WrongType("lo"))
        );
    }
}
