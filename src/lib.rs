// Copyright 2023 the oneiros contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! `oneiros` runs pretrained text-to-image diffusion models with [ONNX Runtime], driving the denoising loop with one
//! of a small set of interchangeable numerical samplers.
//!
//! The library is parameter-passing glue by design: model execution is delegated entirely to ONNX Runtime, and the
//! caller supplies a prompt, a step count, a seed, a guidance scale, and output dimensions. An optional resize-based
//! upscaler can post-process the result.
//!
//! ```ignore
//! use oneiros::{EulerSampler, GenerateOptions, OrtEnvironment, PipelineOptions, TextToImagePipeline};
//!
//! let environment = OrtEnvironment::default().into_arc();
//! let mut sampler = EulerSampler::sd_v1()?;
//! let pipeline = TextToImagePipeline::new(&environment, "./stable-diffusion-v1-5/", PipelineOptions::default())?;
//!
//! let mut images = GenerateOptions::default()
//! 	.with_prompts("photo of a red fox", None)
//! 	.with_steps(20)
//! 	.run(&pipeline, &mut sampler)?;
//! images.remove(0).into_rgb8().save("result.png")?;
//! ```
//!
//! See [`TextToImagePipeline`] for the pipeline itself and [`samplers`] for the available samplers.
//!
//! [ONNX Runtime]: https://onnxruntime.ai/

#![warn(missing_docs)]
#![warn(rustdoc::all)]
#![warn(clippy::correctness, clippy::suspicious, clippy::complexity, clippy::perf, clippy::style)]
#![allow(clippy::tabs_in_doc_comments)]

#[cfg(feature = "tokenizers")]
#[doc(hidden)]
pub mod clip;
pub(crate) mod config;
pub mod pipelines;
pub mod samplers;
pub mod upscale;
pub(crate) mod util;

pub use ort::Environment as OrtEnvironment;
use ort::ExecutionProvider;

pub use self::pipelines::*;
pub use self::samplers::*;
pub use self::upscale::{ResizeUpscaler, UpscaleFilter, Upscaler};
pub use self::util::prompting;

/// The strategy used to grow the device memory arena.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum ArenaExtendStrategy {
	/// Each allocation extends the arena by successively larger amounts (powers of two).
	#[default]
	PowerOfTwo,
	/// Each allocation extends the arena only by the requested amount.
	SameAsRequested
}

impl From<ArenaExtendStrategy> for String {
	fn from(val: ArenaExtendStrategy) -> Self {
		match val {
			ArenaExtendStrategy::PowerOfTwo => "kNextPowerOfTwo".to_string(),
			ArenaExtendStrategy::SameAsRequested => "kSameAsRequested".to_string()
		}
	}
}

/// The type of search done for cuDNN convolution algorithms.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum CudnnConvSearch {
	/// Exhaustive kernel search; spends more time and memory to find the most optimal kernel for this GPU. This is
	/// ONNX Runtime's default.
	#[default]
	Exhaustive,
	/// Heuristic kernel search; spends a small amount of time and memory to find an optimal kernel.
	Heuristic,
	/// Uses the default cuDNN kernels, which may not be optimized for this GPU.
	Default
}

impl From<CudnnConvSearch> for String {
	fn from(val: CudnnConvSearch) -> Self {
		match val {
			CudnnConvSearch::Exhaustive => "EXHAUSTIVE".to_string(),
			CudnnConvSearch::Heuristic => "HEURISTIC".to_string(),
			CudnnConvSearch::Default => "DEFAULT".to_string()
		}
	}
}

/// Tuning options for the CUDA execution provider.
///
/// For low-VRAM GPUs running a float16 Stable Diffusion v1 UNet at 512x512, a workable configuration is:
/// ```ignore
/// CudaOptions {
/// 	memory_limit: Some(3000000000),
/// 	arena_extend_strategy: Some(ArenaExtendStrategy::SameAsRequested),
/// 	..Default::default()
/// }
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CudaOptions {
	/// The strategy used to grow the device memory arena; see [`ArenaExtendStrategy`].
	pub arena_extend_strategy: Option<ArenaExtendStrategy>,
	/// Per-session (i.e. per-model) memory limit in bytes. Without a limit, a model may use all available VRAM.
	pub memory_limit: Option<usize>,
	/// The type of search done for cuDNN convolution algorithms; see [`CudnnConvSearch`].
	///
	/// **NOTE**: any value other than `Exhaustive` seems to break float16 models.
	pub cudnn_conv_search: Option<CudnnConvSearch>
}

impl From<CudaOptions> for ExecutionProvider {
	fn from(val: CudaOptions) -> Self {
		let mut ep = ExecutionProvider::cuda();
		if let Some(arena_extend_strategy) = val.arena_extend_strategy {
			ep = ep.with("arena_extend_strategy", arena_extend_strategy);
		}
		if let Some(memory_limit) = val.memory_limit {
			ep = ep.with("gpu_mem_limit", memory_limit.to_string());
		}
		if let Some(cudnn_conv_search) = val.cudnn_conv_search {
			ep = ep.with("cudnn_conv_algo_search", cudnn_conv_search);
		}
		ep
	}
}

/// A device on which to place a model.
///
/// If the configured execution provider is not available at runtime, ONNX Runtime falls back to the CPU.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Device {
	/// Run on the CPU. **This is the default.**
	Cpu,
	/// Run on an NVIDIA GPU via CUDA. Requires a Kepler GPU or later.
	///
	/// The first value is the device ID (0 in most cases). The second value holds additional execution provider
	/// parameters, which can be tuned for inference on low-VRAM GPUs; see [`CudaOptions`].
	Cuda(usize, Option<CudaOptions>),
	/// Run on an NVIDIA GPU via TensorRT. Requires a Kepler GPU or later.
	TensorRt,
	/// A custom execution provider with options. Untested providers may not work with some models.
	Custom(ExecutionProvider)
}

impl Default for Device {
	fn default() -> Self {
		Self::Cpu
	}
}

impl From<Device> for ExecutionProvider {
	fn from(value: Device) -> Self {
		match value {
			Device::Cpu => ExecutionProvider::cpu(),
			Device::Cuda(device, options) => {
				let options = options.unwrap_or_default();
				let mut ep: ExecutionProvider = options.into();
				ep = ep.with("device_id", device.to_string());
				ep
			}
			Device::TensorRt => ExecutionProvider::tensorrt(),
			Device::Custom(ep) => ep
		}
	}
}

/// Per-model device placement.
///
/// On GPUs with little VRAM it can be favorable to keep the text encoder and VAE decoder on the CPU so the much more
/// intensive UNet can have the GPU to itself:
/// ```ignore
/// DeviceMap {
/// 	unet: Device::Cuda(0, None),
/// 	..Default::default()
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeviceMap {
	/// The device on which to place the text encoder.
	pub text_encoder: Device,
	/// The device on which to place the UNet.
	pub unet: Device,
	/// The device on which to place the VAE decoder.
	pub vae_decoder: Device
}

impl DeviceMap {
	/// Places all models on the same device.
	///
	/// Note that a `memory_limit` in [`CudaOptions`] applies **per session** (i.e. per model), not to the pipeline as
	/// a whole.
	pub fn all(device: Device) -> Self {
		Self {
			text_encoder: device.clone(),
			unet: device.clone(),
			vae_decoder: device
		}
	}
}
