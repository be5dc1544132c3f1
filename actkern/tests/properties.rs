use actkern::prelude::*;

fn ones(dev: &Cpu, n: usize) -> Tensor<f32> {
    dev.tensor(vec![1.0; n])
}

#[test]
fn test_forward_in_place_consumes_input() {
    let dev: Cpu = Default::default();
    let x: Tensor<f32> = dev.tensor([-1.0, 0.0, 2.0]);
    let mut b = Bindings::new()
        .with_input(Slot::X, x.clone())
        .with_output_buffer(Slot::Out, x);
    try_activation_forward::<ReluKernelOp, _, _>(&dev, &mut b, &AttrTable::new()).unwrap();
    assert!(!b.has_input(Slot::X));
    assert_eq!(b.output(Slot::Out).unwrap().value().as_vec(), [0.0, 0.0, 2.0]);

    // relu's backward only reads Out, so the overwritten X isn't missed
    let out = b.take_output(Slot::Out).unwrap();
    let mut b = Bindings::new()
        .with_input(Slot::Out, out)
        .with_input(Slot::DOut, dev.tensor([3.0f32, 3.0, 3.0]))
        .with_output(Slot::DX);
    try_activation_backward::<ReluKernelOp, _, _>(&dev, &mut b, &AttrTable::new()).unwrap();
    assert_eq!(b.output(Slot::DX).unwrap().value().as_vec(), [0.0, 0.0, 3.0]);
}

#[test]
fn test_forward_keeps_input_when_backward_needs_it() {
    let dev: Cpu = Default::default();
    let x: Tensor<f32> = dev.tensor([0.0, 1.0]);
    let mut b = Bindings::new()
        .with_input(Slot::X, x.clone())
        .with_output_buffer(Slot::Out, x.clone());
    try_activation_forward::<SinKernelOp, _, _>(&dev, &mut b, &AttrTable::new()).unwrap();
    assert!(b.has_input(Slot::X));
    assert_eq!(b.input(Slot::X).unwrap().value().as_vec(), [0.0, 1.0]);
    assert_eq!(x.as_vec(), [0.0, 1.0]);
    let out = b.output(Slot::Out).unwrap().value();
    assert!(!out.shares_storage_with(&x));
    assert_eq!(out.as_vec(), [0.0, 1.0f32.sin()]);
}

#[test]
fn test_backward_in_place_over_grad_out() {
    let dev: Cpu = Default::default();
    let x: Tensor<f32> = dev.tensor([1.0, 2.0]);
    let dout: Tensor<f32> = dev.tensor([1.0, 0.5]);
    let mut b = Bindings::new()
        .with_input(Slot::X, x)
        .with_input(Slot::DOut, dout.clone())
        .with_output_buffer(Slot::DX, dout);
    try_activation_backward::<SquareKernelOp, _, _>(&dev, &mut b, &AttrTable::new()).unwrap();
    assert!(!b.has_input(Slot::DOut));
    assert_eq!(b.output(Slot::DX).unwrap().value().as_vec(), [2.0, 2.0]);
}

#[test]
fn test_output_only_backward_without_input() {
    let dev: Cpu = Default::default();
    let mut b = Bindings::new()
        .with_input(Slot::Out, dev.tensor([0.5f32, 0.25]))
        .with_input(Slot::DOut, ones(&dev, 2))
        .with_output(Slot::DX);
    try_activation_backward::<SigmoidKernelOp, _, _>(&dev, &mut b, &AttrTable::new()).unwrap();
    assert_eq!(b.output(Slot::DX).unwrap().value().as_vec(), [0.25, 0.1875]);
}

fn run_grad(
    reg: &Registry<f32>,
    name: &str,
    attrs: &AttrTable,
    b: &mut Bindings<f32>,
) -> Vec<f32> {
    reg.try_run(name, &Cpu::default(), b, attrs).unwrap();
    b.output(Slot::DX).unwrap().value().as_vec()
}

#[test]
fn test_backward_ignores_input_storage_when_it_is_not_read() {
    let dev: Cpu = Default::default();
    let reg: Registry<f32> = Registry::new();
    let attrs = AttrTable::new()
        .with("alpha", 0.1)
        .with("threshold", 6.0)
        .with("slope", 0.2)
        .with("offset", 0.5);
    let signed = vec![-2.5f32, -1.2, -0.3, 0.0, 0.4, 1.1, 2.7];
    let douts = vec![0.5f32, -1.0, 2.0, 1.5, -0.25, 3.0, 1.0];

    let mut checked = 0;
    for name in reg.names() {
        let kernel = reg.get(name).unwrap();
        if kernel.direction != Direction::Backward || kernel.deps.needs_input() {
            continue;
        }
        let fwd = name.strip_suffix("_grad").unwrap();
        let xs: Vec<f32> = match fwd {
            "sqrt" | "rsqrt" => signed.iter().map(|x| x.abs() + 0.5).collect(),
            _ => signed.clone(),
        };
        let mut b = Bindings::new()
            .with_input(Slot::X, dev.tensor(xs.clone()))
            .with_output(Slot::Out);
        reg.try_run(fwd, &dev, &mut b, &attrs).unwrap();
        let out = b.take_output(Slot::Out).unwrap().value().clone();

        let mut without_x = Bindings::new()
            .with_input(Slot::Out, out.clone())
            .with_input(Slot::DOut, dev.tensor(douts.clone()))
            .with_output(Slot::DX);
        let expected = run_grad(&reg, name, &attrs, &mut without_x);

        let mut with_x = Bindings::new()
            .with_input(Slot::X, dev.tensor(xs.clone()))
            .with_input(Slot::Out, out.clone())
            .with_input(Slot::DOut, dev.tensor(douts.clone()))
            .with_output(Slot::DX);
        assert_eq!(run_grad(&reg, name, &attrs, &mut with_x), expected, "{name}");

        // X overwritten by Out, DX written over DOut
        let dout = dev.tensor(douts.clone());
        let mut shared = Bindings::new()
            .with_input(Slot::X, out.clone())
            .with_input(Slot::Out, out)
            .with_input(Slot::DOut, dout.clone())
            .with_output_buffer(Slot::DX, dout);
        assert_eq!(run_grad(&reg, name, &attrs, &mut shared), expected, "{name}");
        assert!(!shared.has_input(Slot::DOut), "{name}");
        checked += 1;
    }
    // 11 read only Out, ceil/floor/round read nothing
    assert_eq!(checked, 14);
}

#[test]
fn test_no_deps_backward_reads_nothing() {
    let dev: Cpu = Default::default();
    let mut b = Bindings::new()
        .with_input(Slot::DOut, dev.tensor([1.0f32, -4.0]))
        .with_output(Slot::DX);
    try_activation_backward::<FloorKernelOp, _, _>(&dev, &mut b, &AttrTable::new()).unwrap();
    assert_eq!(b.output(Slot::DX).unwrap().value().as_vec(), [0.0, 0.0]);
}

#[test]
fn test_missing_operands_leave_bindings_untouched() {
    let dev: Cpu = Default::default();

    let mut b: Bindings<f32> = Bindings::new().with_output(Slot::Out);
    let e = try_activation_forward::<TanhKernelOp, _, _>(&dev, &mut b, &AttrTable::new());
    assert_eq!(
        e,
        Err(Error::MissingOperand {
            op: "tanh".into(),
            slot: "X"
        })
    );

    let mut b = Bindings::new()
        .with_input(Slot::X, dev.tensor([1.0f32]))
        .with_input(Slot::DOut, dev.tensor([1.0f32]))
        .with_output(Slot::DX);
    let e = try_activation_backward::<TanhKernelOp, _, _>(&dev, &mut b, &AttrTable::new());
    assert_eq!(
        e,
        Err(Error::MissingOperand {
            op: "tanh_grad".into(),
            slot: "Out"
        })
    );
    assert!(b.has_input(Slot::X));
    assert!(b.has_input(Slot::DOut));
    assert!(!b.any_output_written());

    let mut b = Bindings::new()
        .with_input(Slot::Out, dev.tensor([1.0f32]))
        .with_output(Slot::DX);
    let e = try_activation_backward::<TanhKernelOp, _, _>(&dev, &mut b, &AttrTable::new());
    assert_eq!(
        e,
        Err(Error::MissingOperand {
            op: "tanh_grad".into(),
            slot: "DOut"
        })
    );

    let mut b = Bindings::new().with_input(Slot::X, dev.tensor([1.0f32]));
    let e = try_activation_forward::<TanhKernelOp, _, _>(&dev, &mut b, &AttrTable::new());
    assert_eq!(
        e,
        Err(Error::MissingOperand {
            op: "tanh".into(),
            slot: "Out"
        })
    );
}

#[test]
fn test_operand_errors_come_before_attribute_errors() {
    let dev: Cpu = Default::default();
    let mut b: Bindings<f32> = Bindings::new().with_output(Slot::Out);
    let e = try_activation_forward::<EluKernelOp, _, _>(&dev, &mut b, &AttrTable::new());
    assert!(matches!(e, Err(Error::MissingOperand { slot: "X", .. })));

    b.bind_input(Slot::X, dev.tensor([1.0f32]));
    let e = try_activation_forward::<EluKernelOp, _, _>(&dev, &mut b, &AttrTable::new());
    assert!(matches!(e, Err(Error::MissingAttribute { attr: "alpha", .. })));

    let attrs = AttrTable::new().with("alpha", vec![1.0f32, 2.0]);
    let e = try_activation_forward::<EluKernelOp, _, _>(&dev, &mut b, &attrs);
    assert!(matches!(e, Err(Error::AttributeType { attr: "alpha", .. })));
    assert!(!b.any_output_written());
}

#[test]
fn test_shape_mismatches() {
    let dev: Cpu = Default::default();
    let mut b = Bindings::new()
        .with_input(Slot::X, dev.tensor([1.0f32, 2.0]))
        .with_input(Slot::DOut, dev.tensor([1.0f32, 2.0, 3.0]))
        .with_output(Slot::DX);
    let e = try_activation_backward::<CosKernelOp, _, _>(&dev, &mut b, &AttrTable::new())
        .unwrap_err();
    assert_eq!(
        e,
        Error::ShapeOrDeviceMismatch {
            op: "cos_grad".into(),
            slot: "X",
            expected: "shape [3]".into(),
            found: "shape [2]".into(),
        }
    );

    let mut b = Bindings::new()
        .with_input(Slot::X, dev.tensor([[1.0f32, 2.0], [3.0, 4.0]]))
        .with_output_buffer(Slot::Out, dev.tensor([1.0f32, 2.0, 3.0, 4.0]));
    let e = try_activation_forward::<CosKernelOp, _, _>(&dev, &mut b, &AttrTable::new())
        .unwrap_err();
    assert!(matches!(e, Error::ShapeOrDeviceMismatch { slot: "Out", .. }));
    assert!(!b.any_output_written());
}

#[test]
fn test_output_keeps_input_shape() {
    let dev: Cpu = Default::default();
    let x: Tensor<f32> = dev.sample_normal_like([2, 3, 4]);
    let mut b = Bindings::new()
        .with_input(Slot::X, x.clone())
        .with_output(Slot::Out);
    try_activation_forward::<GeluKernelOp, _, _>(&dev, &mut b, &AttrTable::new()).unwrap();
    let out = b.output(Slot::Out).unwrap().value();
    assert_eq!(out.shape(), x.shape());
    assert_eq!(out.num_elements(), 24);
}

#[test]
fn test_empty_tensors() {
    let dev: Cpu = Default::default();
    let x: Tensor<f32> = dev.tensor(Vec::new());
    let mut b = Bindings::new().with_input(Slot::X, x).with_output(Slot::Out);
    try_activation_forward::<SigmoidKernelOp, _, _>(&dev, &mut b, &AttrTable::new()).unwrap();
    assert!(b.output(Slot::Out).unwrap().value().as_vec().is_empty());
}

#[test]
fn test_relu_double_backward_example() {
    let dev: Cpu = Default::default();
    let mut b = Bindings::new()
        .with_input(Slot::Out, dev.tensor([-1.0f32, 0.0, 2.0]))
        .with_input(Slot::DDX, dev.tensor([5.0f32, 5.0, 5.0]))
        .with_output(Slot::DDOut);
    try_activation_double_backward::<ReluKernelOp, _, _>(&dev, &mut b, &AttrTable::new())
        .unwrap();
    assert_eq!(b.output(Slot::DDOut).unwrap().value().as_vec(), [0.0, 0.0, 5.0]);
}

#[test]
fn test_sparse_rows_whitelist() {
    let dev: Cpu = Default::default();
    let rows = || {
        let value: Tensor<f32> = dev.tensor([[4.0, 9.0], [0.0, 0.0]]);
        SelectedRows::try_new(vec![7, 2], 10, value).unwrap()
    };
    for name in ["abs", "square", "sqrt"] {
        let reg: Registry<f32> = Registry::new();
        assert!(reg.get(name).unwrap().sparse_safe);
        let mut b = Bindings::new()
            .with_input(Slot::X, rows())
            .with_output(Slot::Out);
        reg.try_run(name, &dev, &mut b, &AttrTable::new()).unwrap();
        let out = b.take_output(Slot::Out).unwrap();
        let out = out.as_selected_rows().unwrap();
        assert_eq!(out.rows(), &[7, 2]);
        assert_eq!(out.height(), 10);
        let dense = out.to_dense_vec();
        assert_eq!(dense.len(), 20);
        assert_eq!(dense[4..6], [0.0, 0.0]);
        assert_eq!(out.value().as_vec()[2..], [0.0, 0.0]);
    }

    let reg: Registry<f32> = Registry::new();
    let mut b = Bindings::new()
        .with_input(Slot::X, rows())
        .with_output(Slot::Out);
    let e = reg
        .try_run("exp", &dev, &mut b, &AttrTable::new())
        .unwrap_err();
    assert!(matches!(e, Error::ShapeOrDeviceMismatch { .. }));
}

#[test]
fn test_hard_shrink_example() {
    let dev: Cpu = Default::default();
    let mut b = Bindings::new()
        .with_input(Slot::X, dev.tensor([-1.0f32, 0.3, 0.6]))
        .with_output(Slot::Out);
    let attrs = AttrTable::new().with("threshold", 0.5);
    try_activation_forward::<HardShrinkKernelOp, _, _>(&dev, &mut b, &attrs).unwrap();
    assert_eq!(b.output(Slot::Out).unwrap().value().as_vec(), [-1.0, 0.0, 0.6]);
}

#[test]
fn test_pow_factor_tensor_wins() {
    let dev: Cpu = Default::default();
    let reg: Registry<f32> = Registry::new();
    let mut b = Bindings::new()
        .with_input(Slot::X, dev.tensor([2.0f32, -1.0]))
        .with_input(Slot::FactorTensor, dev.tensor([3.0f32]))
        .with_output(Slot::Out);
    reg.try_run("pow", &dev, &mut b, &AttrTable::new().with("factor", 2.0))
        .unwrap();
    assert_eq!(b.output(Slot::Out).unwrap().value().as_vec(), [8.0, -1.0]);
}

#[test]
fn test_error_messages() {
    let e = Error::MissingOperand {
        op: "relu_grad".into(),
        slot: "DOut",
    };
    assert_eq!(e.to_string(), "relu_grad: required operand `DOut` is not bound");
    let e: Box<dyn std::error::Error> = Box::new(Error::UnknownOp("mish".into()));
    assert_eq!(e.to_string(), "no activation entry point named `mish`");
}
