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

use ndarray::{Array1, Array4, ArrayView4};
use ndarray_rand::{rand_distr::StandardNormal, RandomExt};
use rand::Rng;

use super::{PredictionType, Sampler, SamplerSchedule, SamplerStepOutput};

/// How the [`DdpmSampler`] computes the variance of the noise it re-injects each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum DdpmVariance {
	/// The lower bound of the reverse-process variance, clamped away from zero.
	#[default]
	FixedSmall,
	/// The upper bound of the reverse-process variance (the forward-process beta).
	FixedLarge
}

/// Additional configuration for the [`DdpmSampler`].
#[derive(Default, Debug, Clone)]
pub struct DdpmConfig {
	/// Clamp the predicted denoised sample to `[-1, 1]` for numerical stability.
	pub clip_sample: bool,
	/// Which bound of the reverse-process variance to use; see [`DdpmVariance`].
	pub variance: DdpmVariance
}

/// [Denoising diffusion probabilistic models][ddpm]: the original ancestral sampler, re-injecting
/// schedule-determined noise at every step.
///
/// [ddpm]: https://arxiv.org/abs/2006.11239
#[derive(Clone)]
pub struct DdpmSampler {
	schedule: SamplerSchedule,
	alphas_cumprod: Array1<f32>,
	timesteps: Array1<usize>,
	num_inference_steps: Option<usize>,
	config: DdpmConfig
}

impl DdpmSampler {
	/// Creates a new DDPM sampler over the given noise schedule.
	///
	/// # Errors
	/// Errors if the schedule is degenerate; see [`SamplerSchedule::betas`](SamplerSchedule).
	pub fn new(schedule: SamplerSchedule, config: DdpmConfig) -> anyhow::Result<Self> {
		let alphas_cumprod = schedule.alphas_cumprod()?;

		let timesteps = Array1::from_iter((0..schedule.train_timesteps).rev());

		Ok(Self {
			schedule,
			alphas_cumprod,
			timesteps,
			num_inference_steps: None,
			config
		})
	}

	/// A DDPM sampler preconfigured for Stable Diffusion v1 models.
	pub fn sd_v1() -> anyhow::Result<Self> {
		Self::new(SamplerSchedule::sd_v1(), DdpmConfig::default())
	}

	fn variance(&self, timestep: usize, prev_timestep: isize) -> f32 {
		let alpha_prod_t = self.alphas_cumprod[timestep];
		let alpha_prod_t_prev = if prev_timestep >= 0 { self.alphas_cumprod[prev_timestep as usize] } else { 1.0 };
		// the effective beta of this (possibly strided) transition
		let current_beta_t = 1.0 - alpha_prod_t / alpha_prod_t_prev;

		let variance = (1.0 - alpha_prod_t_prev) / (1.0 - alpha_prod_t) * current_beta_t;
		match self.config.variance {
			DdpmVariance::FixedSmall => variance.max(1e-20),
			DdpmVariance::FixedLarge => current_beta_t
		}
	}
}

impl Sampler for DdpmSampler {
	type Timestep = usize;

	fn scale_model_input(&mut self, sample: ArrayView4<'_, f32>, _: usize) -> Array4<f32> {
		sample.to_owned()
	}

	fn set_timesteps(&mut self, num_inference_steps: usize) {
		let num_inference_steps = num_inference_steps.min(self.schedule.train_timesteps);
		self.num_inference_steps = Some(num_inference_steps);

		let step_ratio = self.schedule.train_timesteps / num_inference_steps;
		let mut timesteps: Vec<usize> = (0..num_inference_steps).map(|i| i * step_ratio).collect();
		timesteps.reverse();

		self.timesteps = Array1::from_vec(timesteps);
	}

	fn step<R: Rng + ?Sized>(&mut self, model_output: ArrayView4<'_, f32>, timestep: usize, sample: ArrayView4<'_, f32>, rng: &mut R) -> SamplerStepOutput {
		let num_inference_steps = self.num_inference_steps.expect("set_timesteps must be called before step");
		let prev_timestep = timestep as isize - (self.schedule.train_timesteps / num_inference_steps) as isize;

		let alpha_prod_t = self.alphas_cumprod[timestep];
		let alpha_prod_t_prev = if prev_timestep >= 0 { self.alphas_cumprod[prev_timestep as usize] } else { 1.0 };
		let beta_prod_t = 1.0 - alpha_prod_t;
		let beta_prod_t_prev = 1.0 - alpha_prod_t_prev;
		let current_alpha_t = alpha_prod_t / alpha_prod_t_prev;
		let current_beta_t = 1.0 - current_alpha_t;

		// predicted x_0, formula (15) of the DDPM paper
		let mut pred_original_sample = match self.schedule.prediction_type {
			PredictionType::Epsilon => (sample.to_owned() - beta_prod_t.sqrt() * model_output.to_owned()) / alpha_prod_t.sqrt(),
			PredictionType::Sample => model_output.to_owned(),
			PredictionType::VPrediction => alpha_prod_t.sqrt() * sample.to_owned() - beta_prod_t.sqrt() * model_output.to_owned()
		};

		if self.config.clip_sample {
			pred_original_sample.mapv_inplace(|f| f.clamp(-1.0, 1.0));
		}

		// coefficients for x_0 and the current sample x_t, formula (7)
		let pred_original_sample_coeff = (alpha_prod_t_prev.sqrt() * current_beta_t) / beta_prod_t;
		let current_sample_coeff = current_alpha_t.sqrt() * beta_prod_t_prev / beta_prod_t;

		// predicted previous sample mean
		let pred_prev_sample = pred_original_sample_coeff * &pred_original_sample + current_sample_coeff * sample.to_owned();

		// noise is only re-injected while there are steps left
		let prev_sample = if prev_timestep >= 0 {
			let noise = Array4::<f32>::random_using(model_output.raw_dim(), StandardNormal, rng);
			pred_prev_sample + self.variance(timestep, prev_timestep).sqrt() * noise
		} else {
			pred_prev_sample
		};

		SamplerStepOutput {
			prev_sample,
			pred_original_sample: Some(pred_original_sample)
		}
	}

	fn add_noise(&mut self, original_samples: ArrayView4<'_, f32>, noise: ArrayView4<'_, f32>, timestep: usize) -> Array4<f32> {
		let alpha_prod_t = self.alphas_cumprod[timestep];
		alpha_prod_t.sqrt() * original_samples.to_owned() + (1.0 - alpha_prod_t).sqrt() * noise.to_owned()
	}

	fn timesteps(&self) -> ndarray::ArrayView1<'_, usize> {
		self.timesteps.view()
	}

	fn init_noise_sigma(&self) -> f32 {
		1.0
	}

	fn len(&self) -> usize {
		self.schedule.train_timesteps
	}
}

#[cfg(test)]
mod tests {
	use ndarray::Array4;
	use rand::{rngs::StdRng, SeedableRng};

	use super::DdpmSampler;
	use crate::samplers::Sampler;

	#[test]
	fn timestep_spacing() {
		let mut sampler = DdpmSampler::sd_v1().unwrap();
		sampler.set_timesteps(50);

		let timesteps = sampler.timesteps();
		assert_eq!(timesteps.len(), 50);
		assert_eq!(timesteps[0], 980);
		assert_eq!(timesteps[49], 0);
	}

	#[test]
	fn inference_steps_capped_at_train_steps() {
		let mut sampler = DdpmSampler::sd_v1().unwrap();
		sampler.set_timesteps(5000);
		assert_eq!(sampler.timesteps().len(), 1000);
	}

	#[test]
	fn final_step_injects_no_noise() {
		let mut sampler = DdpmSampler::sd_v1().unwrap();
		sampler.set_timesteps(10);
		let t_last = *sampler.timesteps().last().unwrap();
		assert_eq!(t_last, 0);

		let sample = Array4::from_elem((1, 4, 8, 8), 0.5_f32);
		let model_output = Array4::from_elem((1, 4, 8, 8), 0.1_f32);

		// different RNGs agree on the final step because its variance term is skipped
		let mut rng_a = StdRng::seed_from_u64(0);
		let mut rng_b = StdRng::seed_from_u64(42);
		let a = sampler.clone().step(model_output.view(), t_last, sample.view(), &mut rng_a);
		let b = sampler.step(model_output.view(), t_last, sample.view(), &mut rng_b);
		assert_eq!(a.prev_sample, b.prev_sample);
	}

	#[test]
	fn seeded_steps_reproduce() {
		let mut sampler = DdpmSampler::sd_v1().unwrap();
		sampler.set_timesteps(10);
		let t = sampler.timesteps()[0];

		let sample = Array4::from_elem((1, 4, 8, 8), 0.5_f32);
		let model_output = Array4::from_elem((1, 4, 8, 8), 0.1_f32);

		let mut rng_a = StdRng::seed_from_u64(7);
		let mut rng_b = StdRng::seed_from_u64(7);
		let a = sampler.clone().step(model_output.view(), t, sample.view(), &mut rng_a);
		let b = sampler.step(model_output.view(), t, sample.view(), &mut rng_b);
		assert_eq!(a.prev_sample, b.prev_sample);
	}
}
