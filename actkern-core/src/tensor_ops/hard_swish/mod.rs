mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

/// [Hard swish](https://arxiv.org/abs/1905.02244):
/// `min(max(x + offset, 0), threshold) * x / scale`.
///
/// The usual configuration is `threshold = 6`, `scale = 6`, `offset = 3`.
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct HardSwishKernelOp {
    #[attr]
    pub threshold: f32,
    #[attr]
    pub scale: f32,
    #[attr]
    pub offset: f32,
}

impl Activation for HardSwishKernelOp {
    const NAME: &'static str = "hard_swish";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}

#[cfg(test)]
mod tests {
    use crate::{tensor_ops::*, tests::*};

    #[test]
    fn test_hard_swish() {
        let dev: TestDevice = Default::default();
        let x = tensor(&dev, [-4.0, -3.0, -1.0, 0.0, 1.0, 3.0, 4.0]);
        let attrs = AttrTable::new().with("threshold", 6.0).with("scale", 6.0).with("offset", 3.0);
        let (r, g) = forward_backward::<HardSwishKernelOp>(&x, &attrs);
        assert_close_to_literal!(r, [0.0, 0.0, -0.333333333, 0.0, 0.666666667, 3.0, 4.0]);
        assert_close_to_literal!(g, [0.0, 0.0, 0.166666667, 0.5, 0.833333333, 1.0, 1.0]);
    }
}
