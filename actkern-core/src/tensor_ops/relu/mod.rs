mod cpu_kernel;

use super::ops::{Activation, DoubleGradActivation, DoubleGradOperands};
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct ReluKernelOp;

/// [Rectified Linear Unit (ReLU)](https://en.wikipedia.org/wiki/Rectifier_(neural_networks)). `max(0, x)`
///
/// The derivative is the [Heaviside](https://en.wikipedia.org/wiki/Heaviside_step_function)
/// function of `out`, with `0` at `0`. The second derivative passes `DDX`
/// through where `out > 0`.
///
/// Examples:
/// ```rust
/// # use actkern_core::prelude::*;
/// # let dev: Cpu = Default::default();
/// let x: Tensor<f32> = dev.tensor([-1.0, 0.0, 1.0, 2.0]);
/// let mut b = Bindings::new().with_input(Slot::X, x).with_output(Slot::Out);
/// try_activation_forward::<ReluKernelOp, _, _>(&dev, &mut b, &AttrTable::new()).unwrap();
/// assert_eq!(b.output(Slot::Out).unwrap().value().as_vec(), [0.0, 0.0, 1.0, 2.0]);
/// ```
impl Activation for ReluKernelOp {
    const NAME: &'static str = "relu";
    const DEPS: ForwardDependency = ForwardDependency::NeedsOutput;
}

impl DoubleGradActivation for ReluKernelOp {
    const DOUBLE_GRAD: DoubleGradOperands = DoubleGradOperands::Standard;
}

#[cfg(test)]
mod tests {
    use crate::{tensor::*, tensor_ops::*, tests::*};

    #[test]
    fn test_relu() {
        let dev: TestDevice = Default::default();
        let x = tensor(&dev, [-2.0, -1.0, 0.0, 1.0, 2.0]);
        let (r, g) = forward_backward::<ReluKernelOp>(&x, &AttrTable::new());
        assert_close_to_literal!(r, [0.0, 0.0, 0.0, 1.0, 2.0]);
        assert_close_to_literal!(g, [0.0, 0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_relu_double_backward() {
        let dev: TestDevice = Default::default();
        let mut b = Bindings::new()
            .with_input(Slot::Out, tensor(&dev, [-1.0, 0.0, 2.0]))
            .with_input(Slot::DDX, tensor(&dev, [5.0, 5.0, 5.0]))
            .with_output(Slot::DDOut)
            .with_output(Slot::DOut);
        try_activation_double_backward::<ReluKernelOp, _, _>(&dev, &mut b, &AttrTable::new())
            .unwrap();
        assert_close_to_literal!(b.output(Slot::DDOut).unwrap().value(), [0.0, 0.0, 5.0]);
        assert_close_to_literal!(b.output(Slot::DOut).unwrap().value(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_relu_double_backward_only_writes_requested() {
        let dev: TestDevice = Default::default();
        let mut b = Bindings::new()
            .with_input(Slot::Out, tensor(&dev, [1.0, -1.0]))
            .with_input(Slot::DDX, tensor(&dev, [2.0, 2.0]))
            .with_output(Slot::DDOut);
        try_activation_double_backward::<ReluKernelOp, _, _>(&dev, &mut b, &AttrTable::new())
            .unwrap();
        assert_close_to_literal!(b.output(Slot::DDOut).unwrap().value(), [2.0, 0.0]);
        assert!(!b.is_output_requested(Slot::DOut));
        assert!(b.output(Slot::DX).is_none());
    }

    #[test]
    fn test_relu_double_backward_requires_out() {
        let dev: TestDevice = Default::default();
        let mut b = Bindings::new()
            .with_input(Slot::X, tensor(&dev, [1.0]))
            .with_input(Slot::DDX, tensor(&dev, [1.0]))
            .with_output(Slot::DDOut);
        let attrs = AttrTable::new();
        let e = try_activation_double_backward::<ReluKernelOp, _, _>(&dev, &mut b, &attrs)
            .unwrap_err();
        assert_eq!(
            e,
            Error::MissingOperand {
                op: "relu_grad_grad".into(),
                slot: "Out"
            }
        );
    }
}
