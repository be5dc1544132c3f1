mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct CosKernelOp;

/// [Cosine function](https://en.wikipedia.org/wiki/Sine_and_cosine).
///
/// The derivative is `-sin(x)`.
impl Activation for CosKernelOp {
    const NAME: &'static str = "cos";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}

#[cfg(test)]
mod tests {
    use crate::{tensor_ops::*, tests::*};

    #[test]
    fn test_cos() {
        let dev: TestDevice = Default::default();
        let x = tensor(&dev, [-2.0, -1.0, 0.0, 1.0, 2.0]);
        let (r, g) = forward_backward::<CosKernelOp>(&x, &AttrTable::new());
        assert_close_to_literal!(r, [-0.416146837, 0.540302306, 1.0, 0.540302306, -0.416146837]);
        assert_close_to_literal!(g, [0.909297427, 0.841470985, 0.0, -0.841470985, -0.909297427]);
    }
}
