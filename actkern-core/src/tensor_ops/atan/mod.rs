mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct AtanKernelOp;

impl Activation for AtanKernelOp {
    const NAME: &'static str = "atan";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}

#[cfg(test)]
mod tests {
    use crate::{tensor_ops::*, tests::*};

    #[test]
    fn test_atan() {
        let dev: TestDevice = Default::default();
        let x = tensor(&dev, [-2.0, -1.0, 0.0, 1.0, 2.0]);
        let (r, g) = forward_backward::<AtanKernelOp>(&x, &AttrTable::new());
        assert_close_to_literal!(r, [-1.10714872, -0.785398163, 0.0, 0.785398163, 1.10714872]);
        assert_close_to_literal!(g, [0.2, 0.5, 1.0, 0.5, 0.2]);
    }
}
