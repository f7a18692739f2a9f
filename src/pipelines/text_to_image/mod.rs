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

use std::fmt::Debug;

use image::DynamicImage;
use ndarray::Array4;

mod generate;
mod pipeline;

pub use self::generate::GenerateOptions;
pub use self::pipeline::TextToImagePipeline;
use crate::DeviceMap;

/// Pipeline-level options: where each model is placed.
#[derive(Default, Debug, Clone)]
pub struct PipelineOptions {
	/// A [`DeviceMap`] assigning each model in the pipeline to a device.
	pub devices: DeviceMap
}

/// A function called between denoising steps. Returning `false` from a callback cancels the generation early.
pub enum GenerationCallback {
	/// A cheap callback for e.g. reporting progress.
	Progress {
		/// How often to invoke the callback (3 = every 3 steps).
		frequency: usize,
		/// Receives the current step number and this step's timestep.
		cb: Box<dyn Fn(usize, f32) -> bool>
	},
	/// A callback receiving this step's latents.
	Latents {
		/// How often to invoke the callback (3 = every 3 steps).
		frequency: usize,
		/// Receives the current step number, this step's timestep, and the sampler's latent output.
		cb: Box<dyn Fn(usize, f32, Array4<f32>) -> bool>
	},
	/// A callback receiving this step's latents fully decoded into images, e.g. for visual progress. This is
	/// expensive: it runs the VAE decoder on every invocation.
	Decoded {
		/// How often to invoke the callback (3 = every 3 steps).
		frequency: usize,
		/// Receives the current step number, this step's timestep, and the decoded images.
		cb: Box<dyn Fn(usize, f32, Vec<DynamicImage>) -> bool>
	}
}

impl Debug for GenerationCallback {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("<GenerationCallback>")
	}
}
