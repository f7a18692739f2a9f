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

use image::DynamicImage;
use ndarray::{concatenate, s, Array1, Array4, Axis, IxDyn};
use ndarray_rand::{rand_distr::StandardNormal, RandomExt};
use num_traits::ToPrimitive;
use ort::tensor::{FromArray, InputTensor, OrtOwnedTensor};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use super::{GenerationCallback, TextToImagePipeline};
use crate::{samplers::Sampler, upscale::Upscaler, Prompt};

/// Options for a single text-to-image generation.
///
/// The entire parameter surface of the pipeline lives here: prompt text, step count, seed, guidance scale, output
/// dimensions, an optional per-step callback, and an optional upscaler applied to the decoded images.
pub struct GenerateOptions {
	pub(crate) width: u32,
	pub(crate) height: u32,
	pub(crate) steps: usize,
	pub(crate) guidance_scale: f32,
	pub(crate) seed: Option<u64>,
	pub(crate) positive_prompt: Prompt,
	pub(crate) negative_prompt: Option<Prompt>,
	pub(crate) callback: Option<GenerationCallback>,
	pub(crate) upscaler: Option<Box<dyn Upscaler>>
}

impl Default for GenerateOptions {
	fn default() -> Self {
		Self {
			width: 512,
			height: 512,
			steps: 25,
			guidance_scale: 7.5,
			seed: None,
			positive_prompt: Prompt::from(""),
			negative_prompt: None,
			callback: None,
			upscaler: None
		}
	}
}

impl GenerateOptions {
	/// Set the size of the image. **Dimensions will be rounded down to a multiple of 8.**
	pub fn with_size(self, width: u32, height: u32) -> Self {
		self.with_width(width).with_height(height)
	}

	/// Returns the configured output dimensions as `(width, height)`.
	pub fn size(&self) -> (u32, u32) {
		(self.width, self.height)
	}

	/// Set the width of the image. **Width will be rounded down to a multiple of 8.**
	#[inline]
	pub fn with_width(mut self, width: u32) -> Self {
		self.width = (width / 8).max(1) * 8;
		self
	}

	/// Set the height of the image. **Height will be rounded down to a multiple of 8.**
	#[inline]
	pub fn with_height(mut self, height: u32) -> Self {
		self.height = (height / 8).max(1) * 8;
		self
	}

	/// The number of denoising steps. More steps typically yield higher quality images at the cost of runtime.
	pub fn with_steps(mut self, steps: usize) -> Self {
		self.steps = steps;
		self
	}

	/// Set the prompt(s), and optionally the negative prompt(s), used for generation.
	pub fn with_prompts<P>(mut self, positive_prompt: P, negative_prompt: Option<P>) -> Self
	where
		P: Into<Prompt>
	{
		self.positive_prompt = positive_prompt.into();
		self.negative_prompt = negative_prompt.map(|p| p.into());
		self
	}

	/// Set the seed used to generate the initial noise. The same seed with the same parameters reproduces the same
	/// image exactly.
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	/// Use a random seed, so that each run generates a different image. This is the default.
	pub fn with_random_seed(mut self) -> Self {
		self.seed = None;
		self
	}

	/// The guidance scale for classifier-free guidance. Lower values give the model more freedom; higher values
	/// follow the prompt more strictly but may introduce artifacts. `7.5` is a good balance. Values of 1 and below
	/// disable guidance entirely (the negative prompt is then ignored).
	pub fn with_guidance_scale(mut self, guidance_scale: f32) -> Self {
		self.guidance_scale = guidance_scale;
		self
	}

	/// Apply `upscaler` to each decoded image before returning; see [`crate::ResizeUpscaler`].
	pub fn with_upscaler(mut self, upscaler: impl Upscaler + 'static) -> Self {
		self.upscaler = Some(Box::new(upscaler));
		self
	}

	/// Register a progress callback, invoked every `frequency` steps with the step number and timestep. Returning
	/// `false` cancels the generation.
	pub fn callback_progress<F>(mut self, frequency: usize, callback: F) -> Self
	where
		F: Fn(usize, f32) -> bool + 'static
	{
		self.callback = Some(GenerationCallback::Progress { frequency, cb: Box::new(callback) });
		self
	}

	/// Register a callback receiving the raw latents every `frequency` steps. Returning `false` cancels the
	/// generation.
	pub fn callback_latents<F>(mut self, frequency: usize, callback: F) -> Self
	where
		F: Fn(usize, f32, Array4<f32>) -> bool + 'static
	{
		self.callback = Some(GenerationCallback::Latents { frequency, cb: Box::new(callback) });
		self
	}

	/// Register a callback receiving fully decoded images every `frequency` steps. This runs the VAE decoder per
	/// invocation and is expensive. Returning `false` cancels the generation.
	pub fn callback_decoded<F>(mut self, frequency: usize, callback: F) -> Self
	where
		F: Fn(usize, f32, Vec<DynamicImage>) -> bool + 'static
	{
		self.callback = Some(GenerationCallback::Decoded { frequency, cb: Box::new(callback) });
		self
	}
}

impl GenerateOptions {
	/// Generates images from the configured prompt(s). Returns one [`image::DynamicImage`] per prompt, using float32
	/// buffers; in most cases you'll want `img.into_rgb8()`.
	///
	/// `sampler` may be any of the interchangeable samplers in [`crate::samplers`].
	///
	/// ```ignore
	/// # fn main() -> anyhow::Result<()> {
	/// # use oneiros::{TextToImagePipeline, EulerSampler, PipelineOptions, GenerateOptions, OrtEnvironment};
	/// # let environment = OrtEnvironment::default().into_arc();
	/// # let mut sampler = EulerSampler::sd_v1()?;
	/// let pipeline = TextToImagePipeline::new(&environment, "./stable-diffusion-v1-5/", PipelineOptions::default())?;
	///
	/// let mut images = GenerateOptions::default()
	/// 	.with_prompts("photo of a red fox", None)
	/// 	.with_seed(42)
	/// 	.run(&pipeline, &mut sampler)?;
	/// images.remove(0).into_rgb8().save("result.png")?;
	/// # Ok(())
	/// # }
	/// ```
	pub fn run<S: Sampler>(&self, pipeline: &TextToImagePipeline, sampler: &mut S) -> anyhow::Result<Vec<DynamicImage>> {
		if self.height % 8 != 0 || self.width % 8 != 0 {
			anyhow::bail!("width ({}) and height ({}) must be divisible by 8", self.width, self.height);
		}

		let seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen::<u64>());
		let mut rng = StdRng::seed_from_u64(seed);
		debug!(steps = self.steps, seed, guidance_scale = self.guidance_scale, "starting generation");

		let prompt = self.positive_prompt.clone();
		let batch_size = prompt.len();

		let do_classifier_free_guidance = self.guidance_scale > 1.0;
		let text_embeddings = pipeline.encode_prompt(prompt, do_classifier_free_guidance, self.negative_prompt.as_ref())?;

		let latents_shape = (batch_size, 4_usize, (self.height / 8) as usize, (self.width / 8) as usize);
		let mut latents = Array4::<f32>::random_using(latents_shape, StandardNormal, &mut rng);

		sampler.set_timesteps(self.steps);
		latents *= sampler.init_noise_sigma();

		let timesteps = sampler.timesteps().to_owned();
		let num_warmup_steps = timesteps.len().saturating_sub(self.steps * S::order());

		for (i, t) in timesteps.indexed_iter() {
			let timestep = t.to_f32().ok_or_else(|| anyhow::anyhow!("timestep not representable as f32"))?;

			// when guidance is enabled, the unconditional and conditional batches run through the UNet together
			let latent_model_input = if do_classifier_free_guidance {
				concatenate![Axis(0), latents, latents]
			} else {
				latents.clone()
			};
			let latent_model_input = sampler.scale_model_input(latent_model_input.view(), *t);

			let noise_pred = pipeline.unet.run(vec![
				InputTensor::from_array(latent_model_input.into_dyn()),
				InputTensor::from_array(Array1::from_iter([timestep]).into_dyn()),
				InputTensor::from_array(text_embeddings.clone()),
			])?;
			let noise_pred: OrtOwnedTensor<'_, f32, IxDyn> = noise_pred[0].try_extract()?;
			let mut noise_pred: Array4<f32> = noise_pred.view().to_owned().into_dimensionality()?;

			if do_classifier_free_guidance {
				let split_len = (noise_pred.shape()[0] / 2) as isize;
				let noise_pred_uncond = noise_pred.slice(s![..split_len, .., .., ..]).to_owned();
				let noise_pred_text = noise_pred.slice(s![split_len.., .., .., ..]).to_owned();
				noise_pred = &noise_pred_uncond + self.guidance_scale * (noise_pred_text - &noise_pred_uncond);
			}

			let output = sampler.step(noise_pred.view(), *t, latents.view(), &mut rng);
			latents = output.prev_sample;

			if let Some(callback) = self.callback.as_ref() {
				if i == timesteps.len() - 1 || ((i + 1) > num_warmup_steps && (i + 1) % S::order() == 0) {
					let keep_going = match callback {
						GenerationCallback::Progress { frequency, cb } if i % frequency == 0 => cb(i, timestep),
						GenerationCallback::Latents { frequency, cb } if i % frequency == 0 => cb(i, timestep, latents.clone()),
						GenerationCallback::Decoded { frequency, cb } if i != 0 && i % frequency == 0 => {
							cb(i, timestep, pipeline.decode_latents(latents.view())?)
						}
						_ => true
					};
					if !keep_going {
						debug!(step = i, "generation cancelled by callback");
						break;
					}
				}
			}
		}

		let images = pipeline.decode_latents(latents.view())?;
		match self.upscaler.as_ref() {
			Some(upscaler) => images.iter().map(|image| upscaler.upscale(image)).collect(),
			None => Ok(images)
		}
	}
}
