use super::ops::{ActivationDoubleKernel, ActivationKernel};
use crate::{dtypes::Dtype, tensor::Storage};

/// A single trait bound for everything a device needs to run every
/// activation in this crate, in every direction.
pub trait Device<E: Dtype>:
    Storage<E>
    + ActivationKernel<super::super::abs::AbsKernelOp, E>
    + ActivationKernel<super::super::acos::AcosKernelOp, E>
    + ActivationKernel<super::super::asin::AsinKernelOp, E>
    + ActivationKernel<super::super::atan::AtanKernelOp, E>
    + ActivationKernel<super::super::brelu::BReluKernelOp, E>
    + ActivationKernel<super::super::ceil::CeilKernelOp, E>
    + ActivationKernel<super::super::cos::CosKernelOp, E>
    + ActivationKernel<super::super::exp::ExpKernelOp, E>
    + ActivationKernel<super::super::floor::FloorKernelOp, E>
    + ActivationKernel<super::super::gelu::GeluKernelOp, E>
    + ActivationKernel<super::super::hard_shrink::HardShrinkKernelOp, E>
    + ActivationKernel<super::super::hard_sigmoid::HardSigmoidKernelOp, E>
    + ActivationKernel<super::super::hard_swish::HardSwishKernelOp, E>
    + ActivationKernel<super::super::log::LogKernelOp, E>
    + ActivationKernel<super::super::logsigmoid::LogSigmoidKernelOp, E>
    + ActivationKernel<super::super::pow::PowKernelOp, E>
    + ActivationKernel<super::super::reciprocal::ReciprocalKernelOp, E>
    + ActivationKernel<super::super::relu6::Relu6KernelOp, E>
    + ActivationKernel<super::super::round::RoundKernelOp, E>
    + ActivationKernel<super::super::rsqrt::RsqrtKernelOp, E>
    + ActivationKernel<super::super::sigmoid::SigmoidKernelOp, E>
    + ActivationKernel<super::super::sin::SinKernelOp, E>
    + ActivationKernel<super::super::soft_relu::SoftReluKernelOp, E>
    + ActivationKernel<super::super::softplus::SoftplusKernelOp, E>
    + ActivationKernel<super::super::softshrink::SoftShrinkKernelOp, E>
    + ActivationKernel<super::super::softsign::SoftsignKernelOp, E>
    + ActivationKernel<super::super::stanh::STanhKernelOp, E>
    + ActivationKernel<super::super::swish::SwishKernelOp, E>
    + ActivationKernel<super::super::tanh::TanhKernelOp, E>
    + ActivationKernel<super::super::tanh_shrink::TanhShrinkKernelOp, E>
    + ActivationKernel<super::super::thresholded_relu::ThresholdedReluKernelOp, E>

    // second order
    + ActivationDoubleKernel<super::super::elu::EluKernelOp, E>
    + ActivationDoubleKernel<super::super::leaky_relu::LeakyReluKernelOp, E>
    + ActivationDoubleKernel<super::super::relu::ReluKernelOp, E>
    + ActivationDoubleKernel<super::super::sqrt::SqrtKernelOp, E>
    + ActivationDoubleKernel<super::super::square::SquareKernelOp, E>
{
}

impl Device<f32> for crate::tensor::Cpu {}
impl Device<f64> for crate::tensor::Cpu {}
#[cfg(feature = "f16")]
impl Device<crate::dtypes::f16> for crate::tensor::Cpu {}
