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

use anyhow::Context;
use ndarray::{Array1, Array4, ArrayView4};
use ndarray_rand::{rand_distr::StandardNormal, RandomExt};
use rand::Rng;

use super::{sigma_space, PredictionType, Sampler, SamplerSchedule, SamplerStepOutput};

/// Stochastic churn configuration for the [`EulerSampler`], per Algorithm 2 of Karras et al. The defaults disable
/// churn entirely, making the sampler deterministic given its inputs.
#[derive(Debug, Clone)]
pub struct EulerConfig {
	/// How much noise to re-inject per step; 0 disables churn.
	pub s_churn: f32,
	/// Lowest sigma at which churn applies.
	pub s_tmin: f32,
	/// Highest sigma at which churn applies.
	pub s_tmax: f32,
	/// Scale of the churn noise.
	pub s_noise: f32
}

impl Default for EulerConfig {
	fn default() -> Self {
		Self {
			s_churn: 0.0,
			s_tmin: 0.0,
			s_tmax: f32::INFINITY,
			s_noise: 1.0
		}
	}
}

/// Euler sampler (Algorithm 2) from [Karras et al. (2022)](https://arxiv.org/abs/2206.00364).
///
/// Follows the [`k-diffusion` implementation by Katherine Crowson][kd].
///
/// [kd]: https://github.com/crowsonkb/k-diffusion/blob/481677d114f6ea445aa009cf5bd7a9cdee909e47/k_diffusion/sampling.py#L51
#[derive(Clone)]
pub struct EulerSampler {
	schedule: SamplerSchedule,
	alphas_cumprod: Array1<f32>,
	sigmas: Array1<f32>,
	init_noise_sigma: f32,
	timesteps: Array1<f32>,
	config: EulerConfig,
	has_scale_input_been_called: bool
}

impl EulerSampler {
	/// Creates a new Euler sampler over the given noise schedule.
	///
	/// # Errors
	/// Errors if the schedule is degenerate or uses sample prediction, which this sampler does not support.
	pub fn new(schedule: SamplerSchedule, config: EulerConfig) -> anyhow::Result<Self> {
		if schedule.prediction_type == PredictionType::Sample {
			anyhow::bail!("sample prediction is not supported by the Euler sampler");
		}
		let alphas_cumprod = schedule.alphas_cumprod()?;
		let (sigmas, timesteps) = sigma_space(&alphas_cumprod, schedule.train_timesteps, schedule.train_timesteps);
		let init_noise_sigma = sigmas[0];

		Ok(Self {
			schedule,
			alphas_cumprod,
			sigmas,
			init_noise_sigma,
			timesteps,
			config,
			has_scale_input_been_called: false
		})
	}

	/// An Euler sampler preconfigured for Stable Diffusion v1 models.
	pub fn sd_v1() -> anyhow::Result<Self> {
		Self::new(SamplerSchedule::sd_v1(), EulerConfig::default())
	}

	fn step_index(&self, timestep: f32) -> usize {
		self.timesteps
			.iter()
			.position(|&p| p == timestep)
			.with_context(|| format!("timestep out of this sampler's bounds: {timestep}"))
			.unwrap()
	}
}

impl Sampler for EulerSampler {
	type Timestep = f32;

	/// Scales the denoising model input by `1 / sqrt(sigma^2 + 1)` to match the k-diffusion algorithm.
	///
	/// # Panics
	/// Panics if the given `timestep` did not come from this sampler's [`Sampler::timesteps`].
	fn scale_model_input(&mut self, sample: ArrayView4<'_, f32>, timestep: f32) -> Array4<f32> {
		let sigma = self.sigmas[self.step_index(timestep)];
		self.has_scale_input_been_called = true;
		&sample / (sigma.powi(2) + 1.0).sqrt()
	}

	fn set_timesteps(&mut self, num_inference_steps: usize) {
		let (sigmas, timesteps) = sigma_space(&self.alphas_cumprod, self.schedule.train_timesteps, num_inference_steps);
		self.sigmas = sigmas;
		self.timesteps = timesteps;
	}

	fn step<R: Rng + ?Sized>(&mut self, model_output: ArrayView4<'_, f32>, timestep: f32, sample: ArrayView4<'_, f32>, rng: &mut R) -> SamplerStepOutput {
		assert!(self.has_scale_input_been_called, "scale_model_input must be called before step");

		let step_index = self.step_index(timestep);
		let sigma = self.sigmas[step_index];

		let gamma = if self.config.s_tmin <= sigma && sigma <= self.config.s_tmax {
			(self.config.s_churn / (self.sigmas.len() as f32 - 1.0)).min(2.0_f32.sqrt() - 1.0)
		} else {
			0.0
		};
		let sigma_hat = sigma * (gamma + 1.0);

		let sample = if gamma > 0.0 {
			let eps = Array4::<f32>::random_using(model_output.raw_dim(), StandardNormal, rng) * self.config.s_noise;
			sample.to_owned() + eps * sigma_hat.mul_add(sigma_hat, -sigma.powi(2)).sqrt()
		} else {
			sample.to_owned()
		};

		let pred_original_sample = match self.schedule.prediction_type {
			PredictionType::VPrediction => {
				// denoised estimate for a v-prediction model, in sigma space
				model_output.to_owned() * (-sigma_hat / (sigma_hat.powi(2) + 1.0).sqrt()) + &sample / (sigma_hat.powi(2) + 1.0)
			}
			_ => sample.clone() - sigma_hat * model_output.to_owned()
		};

		let derivative = (&sample - &pred_original_sample) / sigma_hat;
		let dt = self.sigmas[step_index + 1] - sigma_hat;
		let prev_sample = sample + derivative * dt;

		SamplerStepOutput {
			prev_sample,
			pred_original_sample: Some(pred_original_sample)
		}
	}

	fn add_noise(&mut self, original_samples: ArrayView4<'_, f32>, noise: ArrayView4<'_, f32>, timestep: f32) -> Array4<f32> {
		let sigma = self.sigmas[self.step_index(timestep)];
		original_samples.to_owned() + noise.to_owned() * sigma
	}

	fn timesteps(&self) -> ndarray::ArrayView1<'_, f32> {
		self.timesteps.view()
	}

	fn init_noise_sigma(&self) -> f32 {
		self.init_noise_sigma
	}

	fn len(&self) -> usize {
		self.schedule.train_timesteps
	}
}

#[cfg(test)]
mod tests {
	use ndarray::Array4;
	use rand::{rngs::StdRng, SeedableRng};

	use super::EulerSampler;
	use crate::samplers::Sampler;

	#[test]
	fn sigma_sequence_descends_to_zero() {
		let mut sampler = EulerSampler::sd_v1().unwrap();
		sampler.set_timesteps(30);

		assert_eq!(sampler.timesteps().len(), 30);
		assert_eq!(sampler.sigmas.len(), 31);
		assert_eq!(sampler.sigmas[30], 0.0);
		for w in sampler.sigmas.as_slice().unwrap().windows(2) {
			assert!(w[1] < w[0]);
		}
		// the first inference sigma is the largest in the schedule
		assert!((sampler.sigmas[0] - sampler.init_noise_sigma()).abs() < 1e-3);
	}

	#[test]
	fn init_noise_sigma_matches_sd_v1() {
		let sampler = EulerSampler::sd_v1().unwrap();
		// known value for the Stable Diffusion v1 schedule
		assert!((sampler.init_noise_sigma() - 14.6).abs() < 0.2);
	}

	#[test]
	fn scale_input_required_before_step() {
		let mut sampler = EulerSampler::sd_v1().unwrap();
		sampler.set_timesteps(10);
		let t = sampler.timesteps()[0];

		let sample = Array4::from_elem((1, 4, 8, 8), 0.5_f32);
		let scaled = sampler.scale_model_input(sample.view(), t);
		// at high sigma the scaled input is much smaller than the sample
		assert!(scaled[[0, 0, 0, 0]] < 0.1);

		let mut rng = StdRng::seed_from_u64(0);
		let out = sampler.step(sample.view(), t, sample.view(), &mut rng);
		assert_eq!(out.prev_sample().shape(), &[1, 4, 8, 8]);
	}

	#[test]
	#[should_panic]
	fn step_without_scaling_panics() {
		let mut sampler = EulerSampler::sd_v1().unwrap();
		sampler.set_timesteps(10);
		let t = sampler.timesteps()[0];
		let sample = Array4::from_elem((1, 4, 8, 8), 0.5_f32);
		let mut rng = StdRng::seed_from_u64(0);
		sampler.step(sample.view(), t, sample.view(), &mut rng);
	}
}
