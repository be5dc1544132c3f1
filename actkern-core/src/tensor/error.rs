/// Represents the different errors that can occur while creating tensors or
/// running an activation entry point.
///
/// Every variant is a configuration error of the invocation it came from: none
/// of them are transient, and nothing in this crate retries after one.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Device is out of memory
    OutOfMemory,
    /// Not enough elements were provided when creating a tensor
    WrongNumElements,
    /// A required tensor binding is absent.
    MissingOperand { op: String, slot: &'static str },
    /// A declared attribute is absent from the attribute table.
    MissingAttribute { op: String, attr: &'static str },
    /// An attribute is present but not convertible to a float.
    AttributeType { op: String, attr: &'static str },
    /// A tensor is bound with a layout or shape the kernel can't accept.
    ShapeOrDeviceMismatch {
        op: String,
        slot: &'static str,
        expected: String,
        found: String,
    },
    /// A tensor valued exponent doesn't hold exactly one element.
    InvalidFactorShape { op: String, numel: usize },
    /// No entry point is registered under this name.
    UnknownOp(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingOperand { op, slot } => {
                write!(f, "{op}: required operand `{slot}` is not bound")
            }
            Self::MissingAttribute { op, attr } => {
                write!(f, "{op}: attribute `{attr}` is not configured")
            }
            Self::AttributeType { op, attr } => {
                write!(f, "{op}: attribute `{attr}` is not a float")
            }
            Self::ShapeOrDeviceMismatch {
                op,
                slot,
                expected,
                found,
            } => write!(f, "{op}: `{slot}` expected {expected}, found {found}"),
            Self::InvalidFactorShape { op, numel } => write!(
                f,
                "{op}: `FactorTensor` must hold exactly one element, found {numel}"
            ),
            Self::UnknownOp(name) => write!(f, "no activation entry point named `{name}`"),
            _ => write!(f, "{self:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_slot_and_op() {
        let e = Error::MissingOperand {
            op: "relu_grad".into(),
            slot: "DOut",
        };
        assert_eq!(e.to_string(), "relu_grad: required operand `DOut` is not bound");

        let e = Error::InvalidFactorShape {
            op: "pow".into(),
            numel: 3,
        };
        assert!(e.to_string().contains("found 3"));
    }
}
