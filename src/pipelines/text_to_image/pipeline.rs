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

use std::{fs, path::PathBuf, sync::Arc};

use image::{DynamicImage, Rgb32FImage};
use ndarray::{concatenate, Array4, ArrayD, ArrayView4, Axis, IxDyn};
use ort::{
	tensor::{FromArray, InputTensor, OrtOwnedTensor},
	Environment, Session, SessionBuilder
};
use tracing::debug;

use super::PipelineOptions;
use crate::{
	clip::ClipTokenizer,
	config::{PipelineManifest, TokenizerConfig},
	Prompt
};

/// The magic constant Stable Diffusion's VAE scales latents by.
const LATENT_SCALE: f32 = 0.18215;

/// A text-to-image diffusion pipeline: a CLIP text encoder, a denoising UNet, and a VAE decoder, loaded from a model
/// directory and glued together by a numerical sampler.
///
/// ```ignore
/// # fn main() -> anyhow::Result<()> {
/// use oneiros::{EulerSampler, GenerateOptions, OrtEnvironment, PipelineOptions, TextToImagePipeline};
///
/// let environment = OrtEnvironment::default().into_arc();
/// let mut sampler = EulerSampler::sd_v1()?;
/// let pipeline = TextToImagePipeline::new(&environment, "./stable-diffusion-v1-5/", PipelineOptions::default())?;
///
/// let images = GenerateOptions::default().with_prompts("photo of a red fox", None).run(&pipeline, &mut sampler)?;
/// # Ok(())
/// # }
/// ```
pub struct TextToImagePipeline {
	options: PipelineOptions,
	tokenizer: ClipTokenizer,
	text_encoder: Session,
	pub(crate) unet: Session,
	vae_decoder: Session
}

impl TextToImagePipeline {
	/// Creates a new text-to-image pipeline, loading models described by the `oneiros.toml` manifest in `root`.
	pub fn new(environment: &Arc<Environment>, root: impl Into<PathBuf>, options: PipelineOptions) -> anyhow::Result<Self> {
		let root: PathBuf = root.into();
		debug!("loading pipeline manifest from {}", root.display());

		let manifest: PipelineManifest = toml::from_str(&fs::read_to_string(root.join("oneiros.toml"))?)?;
		let PipelineManifest::TextToImage { inner: config } = manifest;

		let tokenizer = match &config.tokenizer {
			TokenizerConfig::CLIPTokenizer {
				path,
				model_max_length,
				bos_token,
				eos_token
			} => ClipTokenizer::new(root.join(path), *model_max_length, *bos_token, *eos_token)?
		};

		let text_encoder = SessionBuilder::new(environment)?
			.with_execution_providers([options.devices.text_encoder.clone().into()])?
			.with_model_from_file(root.join(&config.text_encoder.path))?;
		debug!("text encoder loaded from {}", config.text_encoder.path);

		let unet = SessionBuilder::new(environment)?
			.with_execution_providers([options.devices.unet.clone().into()])?
			.with_model_from_file(root.join(&config.unet.path))?;
		debug!("unet loaded from {}", config.unet.path);

		let vae_decoder = SessionBuilder::new(environment)?
			.with_execution_providers([options.devices.vae_decoder.clone().into()])?
			.with_model_from_file(root.join(&config.vae_decoder.path))?;
		debug!("vae decoder loaded from {}", config.vae_decoder.path);

		Ok(Self {
			options,
			tokenizer,
			text_encoder,
			unet,
			vae_decoder
		})
	}

	/// Returns the options this pipeline was created with.
	pub fn options(&self) -> &PipelineOptions {
		&self.options
	}

	/// Encodes the given prompt(s) into an array of text embeddings to be used as input to the UNet.
	///
	/// When `do_classifier_free_guidance` is set, the embeddings of the negative prompt (or of an empty prompt if
	/// none is given) are prepended along the batch axis. A single negative prompt is broadcast across the whole
	/// batch; otherwise the negative batch size must match the positive one.
	pub fn encode_prompt(&self, prompt: Prompt, do_classifier_free_guidance: bool, negative_prompt: Option<&Prompt>) -> anyhow::Result<ArrayD<f32>> {
		let batch_size = prompt.len();
		let negative_prompt = match negative_prompt {
			Some(negative_prompt) if batch_size > 1 && negative_prompt.len() == 1 => Some(Prompt::from(vec![negative_prompt[0].clone(); batch_size])),
			Some(negative_prompt) => {
				if negative_prompt.len() != batch_size {
					anyhow::bail!(
						"got {} positive prompts but {} negative prompts; negative prompt count must be 1 or match",
						batch_size,
						negative_prompt.len()
					);
				}
				Some(negative_prompt.to_owned())
			}
			None => None
		};

		let text_embeddings = self.embed(prompt)?;
		if !do_classifier_free_guidance {
			return Ok(text_embeddings);
		}

		let uncond_embeddings = self.embed(negative_prompt.unwrap_or_else(|| Prompt::default_batched(batch_size)))?;
		Ok(concatenate![Axis(0), uncond_embeddings, text_embeddings])
	}

	fn embed(&self, prompt: Prompt) -> anyhow::Result<ArrayD<f32>> {
		let token_ids = self.tokenizer.encode_for_text_model(prompt.0)?;
		let output = self.text_encoder.run(vec![InputTensor::from_array(token_ids.into_dyn())])?;
		let embeddings: OrtOwnedTensor<'_, f32, IxDyn> = output[0].try_extract()?;
		Ok(embeddings.view().to_owned())
	}

	fn to_image(&self, width: u32, height: u32, arr: &Array4<f32>) -> anyhow::Result<DynamicImage> {
		Ok(DynamicImage::ImageRgb32F(
			Rgb32FImage::from_raw(width, height, arr.map(|f| f.clamp(0.0, 1.0)).into_iter().collect::<Vec<_>>())
				.ok_or_else(|| anyhow::anyhow!("failed to construct image"))?
		))
	}

	/// Decodes UNet latents through the VAE decoder into an array of [`image::DynamicImage`]s using float32 buffers.
	/// In most cases you'll want to convert them to RGB8 via `img.into_rgb8()`.
	pub fn decode_latents(&self, latents: ArrayView4<'_, f32>) -> anyhow::Result<Vec<DynamicImage>> {
		let latents = (1.0 / LATENT_SCALE) * &latents;

		let mut images = Vec::new();
		for latent_chunk in latents.axis_iter(Axis(0)) {
			let latent_chunk = latent_chunk.into_dyn().insert_axis(Axis(0));
			let output = self.vae_decoder.run(vec![InputTensor::from_array(latent_chunk.to_owned())])?;
			let image: OrtOwnedTensor<'_, f32, IxDyn> = output[0].try_extract()?;
			let image: Array4<f32> = image.view().to_owned().into_dimensionality()?;
			let image = image.permuted_axes([0, 2, 3, 1]) / 2.0 + 0.5;

			images.push(self.to_image(image.shape()[2] as _, image.shape()[1] as _, &image)?);
		}

		Ok(images)
	}
}
