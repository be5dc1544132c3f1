//! Entry points looked up by their registered name.

use std::collections::HashMap;

use log::trace;

use super::{
    attrs::AttrTable,
    bindings::Bindings,
    deps::ForwardDependency,
    device::Device,
    ops::{
        grad_grad_name, grad_name, try_activation_backward, try_activation_double_backward,
        try_activation_forward, Activation, ActivationDoubleKernel, ActivationKernel,
        DoubleGradActivation,
    },
};
use crate::{
    dtypes::Dtype,
    tensor::{Cpu, Error, Storage},
};

/// The signature every registered entry point shares.
pub type KernelFn<E, D> = fn(&D, &mut Bindings<E, D>, &AttrTable) -> Result<(), Error>;

/// Which pass an entry point computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    DoubleBackward,
}

/// A named entry point, with the properties the surrounding graph needs to
/// plan buffer reuse.
pub struct OpKernel<E, D: Storage<E> = Cpu> {
    pub name: String,
    pub direction: Direction,
    pub deps: ForwardDependency,
    pub sparse_safe: bool,
    pub run: KernelFn<E, D>,
}

impl<E, D: Storage<E>> Clone for OpKernel<E, D> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            direction: self.direction,
            deps: self.deps,
            sparse_safe: self.sparse_safe,
            run: self.run,
        }
    }
}

impl<E, D: Storage<E>> std::fmt::Debug for OpKernel<E, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpKernel")
            .field("name", &self.name)
            .field("direction", &self.direction)
            .field("deps", &self.deps)
            .field("sparse_safe", &self.sparse_safe)
            .finish()
    }
}

impl<E, D: Storage<E>> OpKernel<E, D> {
    pub fn forward<Op: Activation>() -> Self
    where
        E: Dtype,
        D: ActivationKernel<Op, E>,
    {
        Self::with_run::<Op>(
            Op::NAME.to_string(),
            Direction::Forward,
            try_activation_forward::<Op, E, D>,
        )
    }

    pub fn backward<Op: Activation>() -> Self
    where
        E: Dtype,
        D: ActivationKernel<Op, E>,
    {
        Self::with_run::<Op>(
            grad_name::<Op>(),
            Direction::Backward,
            try_activation_backward::<Op, E, D>,
        )
    }

    pub fn double_backward<Op: DoubleGradActivation>() -> Self
    where
        E: Dtype,
        D: ActivationDoubleKernel<Op, E>,
    {
        Self::with_run::<Op>(
            grad_grad_name::<Op>(),
            Direction::DoubleBackward,
            try_activation_double_backward::<Op, E, D>,
        )
    }

    /// An entry point of `Op` that runs through a custom driver.
    pub fn with_run<Op: Activation>(
        name: String,
        direction: Direction,
        run: KernelFn<E, D>,
    ) -> Self {
        Self {
            name,
            direction,
            deps: Op::DEPS,
            sparse_safe: Op::SPARSE_SAFE,
            run,
        }
    }
}

/// Every activation entry point of a device, keyed by name.
///
/// [Registry::new] registers the forward (`name`) and backward (`name_grad`)
/// entry points of every activation in this crate, plus `name_grad_grad` for
/// those with a second order pass. More can be added with
/// [Registry::register].
///
/// ```rust
/// # use actkern_core::prelude::*;
/// let dev: Cpu = Default::default();
/// let registry: Registry<f32> = Registry::new();
/// let mut b = Bindings::new()
///     .with_input(Slot::X, dev.tensor([-1.0f32, 2.0]))
///     .with_output(Slot::Out);
/// registry.try_run("relu", &dev, &mut b, &AttrTable::new()).unwrap();
/// assert_eq!(b.output(Slot::Out).unwrap().value().as_vec(), [0.0, 2.0]);
/// ```
pub struct Registry<E, D: Storage<E> = Cpu> {
    kernels: HashMap<String, OpKernel<E, D>>,
}

macro_rules! register_activations {
    ($reg:ident; $($Op:ident),* $(,)?) => {
        $(
            $reg.register(OpKernel::forward::<super::super::$Op>());
            $reg.register(OpKernel::backward::<super::super::$Op>());
        )*
    };
}

macro_rules! register_double_activations {
    ($reg:ident; $($Op:ident),* $(,)?) => {
        $(
            register_activations!($reg; $Op);
            $reg.register(OpKernel::double_backward::<super::super::$Op>());
        )*
    };
}

impl<E: Dtype, D: Device<E>> Registry<E, D> {
    pub fn new() -> Self {
        use super::super::pow::{try_pow_backward, try_pow_forward, PowKernelOp};

        let mut reg = Self::empty();
        register_activations!(reg;
            SigmoidKernelOp,
            LogSigmoidKernelOp,
            ExpKernelOp,
            GeluKernelOp,
            TanhKernelOp,
            TanhShrinkKernelOp,
            AtanKernelOp,
            AcosKernelOp,
            AsinKernelOp,
            CosKernelOp,
            SinKernelOp,
            SoftShrinkKernelOp,
            HardShrinkKernelOp,
            RsqrtKernelOp,
            CeilKernelOp,
            FloorKernelOp,
            RoundKernelOp,
            AbsKernelOp,
            ReciprocalKernelOp,
            LogKernelOp,
            BReluKernelOp,
            Relu6KernelOp,
            SoftReluKernelOp,
            STanhKernelOp,
            SoftplusKernelOp,
            SoftsignKernelOp,
            ThresholdedReluKernelOp,
            HardSigmoidKernelOp,
            SwishKernelOp,
            HardSwishKernelOp,
        );
        register_double_activations!(reg;
            ReluKernelOp,
            LeakyReluKernelOp,
            EluKernelOp,
            SquareKernelOp,
            SqrtKernelOp,
        );

        // the exponent may come from a tensor
        reg.register(OpKernel::with_run::<PowKernelOp>(
            PowKernelOp::NAME.to_string(),
            Direction::Forward,
            try_pow_forward::<E, D>,
        ));
        reg.register(OpKernel::with_run::<PowKernelOp>(
            grad_name::<PowKernelOp>(),
            Direction::Backward,
            try_pow_backward::<E, D>,
        ));
        reg
    }
}

impl<E: Dtype, D: Device<E>> Default for Registry<E, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, D: Storage<E>> Registry<E, D> {
    /// A registry without any entry points.
    pub fn empty() -> Self {
        Self {
            kernels: HashMap::new(),
        }
    }

    /// Adds an entry point, replacing any with the same name.
    pub fn register(&mut self, kernel: OpKernel<E, D>) {
        self.kernels.insert(kernel.name.clone(), kernel);
    }

    pub fn get(&self, name: &str) -> Option<&OpKernel<E, D>> {
        self.kernels.get(name)
    }

    /// Runs the entry point registered as `name`.
    pub fn try_run(
        &self,
        name: &str,
        dev: &D,
        bindings: &mut Bindings<E, D>,
        attrs: &AttrTable,
    ) -> Result<(), Error> {
        let kernel = self
            .get(name)
            .ok_or_else(|| Error::UnknownOp(name.to_string()))?;
        trace!("dispatching {name}");
        (kernel.run)(dev, bindings, attrs)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.kernels.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }
}

impl<E, D: Storage<E>> std::fmt::Debug for Registry<E, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("count", &self.kernels.len())
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tensor::*, tensor_ops::*, tests::*};

    #[test]
    fn test_registry_names() {
        let reg: Registry<TestDtype> = Registry::new();
        // 36 forward, 36 backward, 5 second order
        assert_eq!(reg.len(), 77);
        let names = reg.names();
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        for name in ["sigmoid", "sigmoid_grad", "relu_grad_grad", "pow", "pow_grad"] {
            assert!(names.contains(&name), "{name}");
        }
        assert!(reg.get("sigmoid_grad_grad").is_none());
        assert!(reg.get("pow_grad_grad").is_none());
    }

    #[test]
    fn test_registry_properties() {
        let reg: Registry<TestDtype> = Registry::new();
        let sqrt = reg.get("sqrt_grad").unwrap();
        assert_eq!(sqrt.direction, Direction::Backward);
        assert_eq!(sqrt.deps, ForwardDependency::NeedsOutput);
        assert!(sqrt.sparse_safe);

        let elu = reg.get("elu_grad_grad").unwrap();
        assert_eq!(elu.direction, Direction::DoubleBackward);
        assert_eq!(elu.deps, ForwardDependency::NeedsInput);
        assert!(!elu.sparse_safe);

        assert_eq!(reg.get("floor").unwrap().deps, ForwardDependency::NoDeps);
        assert_eq!(reg.get("abs").unwrap().deps, ForwardDependency::NeedsBoth);
    }

    #[test]
    fn test_registry_unknown_op() {
        let dev: TestDevice = Default::default();
        let reg: Registry<TestDtype> = Registry::new();
        let mut b = Bindings::new()
            .with_input(Slot::X, tensor(&dev, [1.0]))
            .with_output(Slot::Out);
        let e = reg
            .try_run("mish", &dev, &mut b, &AttrTable::new())
            .unwrap_err();
        assert_eq!(e, Error::UnknownOp("mish".into()));
        assert!(!b.any_output_written());
    }

    #[test]
    fn test_registry_runs_pow_with_factor_tensor() {
        let dev: TestDevice = Default::default();
        let reg: Registry<TestDtype> = Registry::new();
        let mut b = Bindings::new()
            .with_input(Slot::X, tensor(&dev, [2.0]))
            .with_input(Slot::FactorTensor, tensor(&dev, [3.0]))
            .with_output(Slot::Out);
        let attrs = AttrTable::new().with("factor", 2.0);
        reg.try_run("pow", &dev, &mut b, &attrs).unwrap();
        assert_close_to_literal!(b.output(Slot::Out).unwrap().value(), [8.0]);
    }

    #[test]
    fn test_register_custom_entry_point() {
        fn noop(_: &Cpu, _: &mut Bindings<TestDtype>, _: &AttrTable) -> Result<(), Error> {
            Ok(())
        }
        let mut reg: Registry<TestDtype> = Registry::empty();
        assert!(reg.is_empty());
        reg.register(OpKernel::with_run::<ReluKernelOp>(
            "relu_noop".to_string(),
            Direction::Forward,
            noop,
        ));
        assert_eq!(reg.names(), ["relu_noop"]);
        let dev: TestDevice = Default::default();
        reg.try_run("relu_noop", &dev, &mut Bindings::new(), &AttrTable::new())
            .unwrap();
    }
}
