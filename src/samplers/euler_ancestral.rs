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

/// Ancestral sampling with Euler method steps: an Euler step towards the denoised estimate, followed by
/// schedule-scaled noise injection.
///
/// Follows the [`k-diffusion` implementation by Katherine Crowson][kd].
///
/// [kd]: https://github.com/crowsonkb/k-diffusion/blob/481677d114f6ea445aa009cf5bd7a9cdee909e47/k_diffusion/sampling.py#L72
#[derive(Clone)]
pub struct EulerAncestralSampler {
	schedule: SamplerSchedule,
	alphas_cumprod: Array1<f32>,
	sigmas: Array1<f32>,
	init_noise_sigma: f32,
	timesteps: Array1<f32>,
	has_scale_input_been_called: bool
}

impl EulerAncestralSampler {
	/// Creates a new Euler Ancestral sampler over the given noise schedule.
	///
	/// # Errors
	/// Errors if the schedule is degenerate or uses sample prediction, which this sampler does not support.
	pub fn new(schedule: SamplerSchedule) -> anyhow::Result<Self> {
		if schedule.prediction_type == PredictionType::Sample {
			anyhow::bail!("sample prediction is not supported by the Euler Ancestral sampler");
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
			has_scale_input_been_called: false
		})
	}

	/// An Euler Ancestral sampler preconfigured for Stable Diffusion v1 models.
	pub fn sd_v1() -> anyhow::Result<Self> {
		Self::new(SamplerSchedule::sd_v1())
	}

	fn step_index(&self, timestep: f32) -> usize {
		self.timesteps
			.iter()
			.position(|&p| p == timestep)
			.with_context(|| format!("timestep out of this sampler's bounds: {timestep}"))
			.unwrap()
	}
}

impl Sampler for EulerAncestralSampler {
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
		let sigma_from = self.sigmas[step_index];
		let sigma_to = self.sigmas[step_index + 1];

		// denoised estimate (x_0) from the sigma-scaled model output
		let pred_original_sample = match self.schedule.prediction_type {
			PredictionType::VPrediction => {
				model_output.to_owned() * (-sigma_from / (sigma_from.powi(2) + 1.0).sqrt()) + sample.to_owned() / (sigma_from.powi(2) + 1.0)
			}
			_ => sample.to_owned() - sigma_from * model_output.to_owned()
		};

		// split the transition into a deterministic shrink and an ancestral noise term
		let sigma_up = (sigma_to.powi(2) * (sigma_from.powi(2) - sigma_to.powi(2)) / sigma_from.powi(2)).sqrt();
		let sigma_down = (sigma_to.powi(2) - sigma_up.powi(2)).sqrt();

		let derivative = (&sample - &pred_original_sample) / sigma_from;
		let dt = sigma_down - sigma_from;
		let prev_sample = sample.to_owned() + derivative * dt;

		let noise = Array4::<f32>::random_using(model_output.raw_dim(), StandardNormal, rng);
		let prev_sample = prev_sample + noise * sigma_up;

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

	use super::EulerAncestralSampler;
	use crate::samplers::Sampler;

	#[test]
	fn timesteps_descend() {
		let mut sampler = EulerAncestralSampler::sd_v1().unwrap();
		sampler.set_timesteps(25);

		let timesteps = sampler.timesteps();
		assert_eq!(timesteps.len(), 25);
		assert_eq!(timesteps[0], 999.0);
		assert_eq!(timesteps[24], 0.0);
		for w in timesteps.to_vec().windows(2) {
			assert!(w[1] < w[0]);
		}
	}

	#[test]
	fn seeded_steps_reproduce() {
		let mut sampler = EulerAncestralSampler::sd_v1().unwrap();
		sampler.set_timesteps(10);
		let t = sampler.timesteps()[0];

		let sample = Array4::from_elem((1, 4, 8, 8), 0.5_f32);
		let model_output = Array4::from_elem((1, 4, 8, 8), 0.1_f32);

		let _ = sampler.scale_model_input(sample.view(), t);

		let mut rng_a = StdRng::seed_from_u64(7);
		let mut rng_b = StdRng::seed_from_u64(7);
		let a = sampler.clone().step(model_output.view(), t, sample.view(), &mut rng_a);
		let b = sampler.step(model_output.view(), t, sample.view(), &mut rng_b);
		assert_eq!(a.prev_sample, b.prev_sample);
	}

	#[test]
	fn last_transition_removes_all_noise() {
		let mut sampler = EulerAncestralSampler::sd_v1().unwrap();
		sampler.set_timesteps(10);
		let t_last = *sampler.timesteps().last().unwrap();
		let step_index = sampler.timesteps().len() - 1;

		// sigma_to of the final transition is the appended 0: no ancestral noise remains
		assert_eq!(sampler.sigmas[step_index + 1], 0.0);

		let sample = Array4::from_elem((1, 4, 8, 8), 0.5_f32);
		let model_output = Array4::from_elem((1, 4, 8, 8), 0.1_f32);
		let _ = sampler.scale_model_input(sample.view(), t_last);

		let mut rng_a = StdRng::seed_from_u64(0);
		let mut rng_b = StdRng::seed_from_u64(1);
		let a = sampler.clone().step(model_output.view(), t_last, sample.view(), &mut rng_a);
		let b = sampler.step(model_output.view(), t_last, sample.view(), &mut rng_b);
		assert_eq!(a.prev_sample, b.prev_sample);
	}
}
