mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct RoundKernelOp;

/// Rounds to the nearest integer, with halves rounded away from zero. The
/// gradient is zero everywhere.
impl Activation for RoundKernelOp {
    const NAME: &'static str = "round";
    const DEPS: ForwardDependency = ForwardDependency::NoDeps;
}

#[cfg(test)]
mod tests {
    use crate::{tensor_ops::*, tests::*};

    #[test]
    fn test_round() {
        let dev: TestDevice = Default::default();
        let x = tensor(&dev, [-2.5, -1.5, -0.5, 0.4, 0.5, 1.5, 2.7]);
        let (r, g) = forward_backward::<RoundKernelOp>(&x, &AttrTable::new());
        assert_close_to_literal!(r, [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0]);
        assert_close_to_literal!(g, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }
}
