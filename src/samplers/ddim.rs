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
use rand::Rng;

use super::{PredictionType, Sampler, SamplerSchedule, SamplerStepOutput};

/// Additional configuration for the [`DdimSampler`].
#[derive(Debug, Clone)]
pub struct DdimConfig {
	/// Clamp the predicted denoised sample to `[-1, 1]` for numerical stability.
	pub clip_sample: bool,
	/// Each step uses the alpha-bar value of the current timestep and of the previous one; at the final step there is
	/// no previous timestep. When this is true the previous alpha-bar is fixed to 1, otherwise the alpha-bar of step
	/// 0 is used.
	pub set_alpha_to_one: bool,
	/// An offset added to every inference timestep. Stable Diffusion combines `steps_offset: 1` with
	/// `set_alpha_to_one: true` so the last step uses step 0's alpha-bar as the previous value.
	pub steps_offset: usize
}

impl Default for DdimConfig {
	fn default() -> Self {
		Self {
			clip_sample: false,
			set_alpha_to_one: false,
			steps_offset: 1
		}
	}
}

/// [Denoising diffusion implicit models][ddim]: extends the DDPM denoising procedure with non-Markovian guidance,
/// yielding a deterministic update rule.
///
/// [ddim]: https://arxiv.org/abs/2010.02502
#[derive(Clone)]
pub struct DdimSampler {
	schedule: SamplerSchedule,
	alphas_cumprod: Array1<f32>,
	final_alpha_cumprod: f32,
	timesteps: Array1<usize>,
	num_inference_steps: Option<usize>,
	config: DdimConfig
}

impl DdimSampler {
	/// Creates a new DDIM sampler over the given noise schedule.
	///
	/// # Errors
	/// Errors if the schedule is degenerate; see [`SamplerSchedule::betas`](SamplerSchedule).
	pub fn new(schedule: SamplerSchedule, config: DdimConfig) -> anyhow::Result<Self> {
		let alphas_cumprod = schedule.alphas_cumprod()?;
		let final_alpha_cumprod = if config.set_alpha_to_one { 1.0 } else { alphas_cumprod[0] };

		let timesteps = Array1::from_iter((0..schedule.train_timesteps).rev());

		Ok(Self {
			schedule,
			alphas_cumprod,
			final_alpha_cumprod,
			timesteps,
			num_inference_steps: None,
			config
		})
	}

	/// A DDIM sampler preconfigured for Stable Diffusion v1 models.
	pub fn sd_v1() -> anyhow::Result<Self> {
		Self::new(
			SamplerSchedule::sd_v1(),
			DdimConfig {
				set_alpha_to_one: true,
				..Default::default()
			}
		)
	}

	fn alpha_cumprod_prev(&self, prev_timestep: isize) -> f32 {
		if prev_timestep >= 0 { self.alphas_cumprod[prev_timestep as usize] } else { self.final_alpha_cumprod }
	}
}

impl Sampler for DdimSampler {
	type Timestep = usize;

	fn scale_model_input(&mut self, sample: ArrayView4<'_, f32>, _: usize) -> Array4<f32> {
		sample.to_owned()
	}

	fn set_timesteps(&mut self, num_inference_steps: usize) {
		self.num_inference_steps = Some(num_inference_steps);

		let step_ratio = self.schedule.train_timesteps / num_inference_steps;
		let mut timesteps: Vec<usize> = (0..num_inference_steps)
			.map(|i| (i * step_ratio + self.config.steps_offset).min(self.schedule.train_timesteps - 1))
			.collect();
		timesteps.reverse();

		self.timesteps = Array1::from_vec(timesteps);
	}

	fn step<R: Rng + ?Sized>(&mut self, model_output: ArrayView4<'_, f32>, timestep: usize, sample: ArrayView4<'_, f32>, _rng: &mut R) -> SamplerStepOutput {
		let num_inference_steps = self.num_inference_steps.expect("set_timesteps must be called before step");

		// the previous timestep; negative at the end of the trajectory, where final_alpha_cumprod takes over
		let prev_timestep = timestep as isize - (self.schedule.train_timesteps / num_inference_steps) as isize;

		let alpha_prod_t = self.alphas_cumprod[timestep];
		let alpha_prod_t_prev = self.alpha_cumprod_prev(prev_timestep);
		let beta_prod_t = 1.0 - alpha_prod_t;

		// predicted x_0, formula (12) of the DDIM paper
		let mut model_output = model_output.to_owned();
		let mut pred_original_sample = match self.schedule.prediction_type {
			PredictionType::Epsilon => (sample.to_owned() - beta_prod_t.sqrt() * &model_output) / alpha_prod_t.sqrt(),
			PredictionType::Sample => model_output.clone(),
			PredictionType::VPrediction => {
				let pred = alpha_prod_t.sqrt() * sample.to_owned() - beta_prod_t.sqrt() * &model_output;
				// re-derive epsilon from v so the direction term below stays consistent
				model_output = alpha_prod_t.sqrt() * &model_output + beta_prod_t.sqrt() * sample.to_owned();
				pred
			}
		};

		if self.config.clip_sample {
			pred_original_sample.mapv_inplace(|f| f.clamp(-1.0, 1.0));
		}

		// direction pointing to x_t, with eta = 0 the update is fully deterministic
		let pred_sample_direction = (1.0 - alpha_prod_t_prev).sqrt() * &model_output;
		let prev_sample = alpha_prod_t_prev.sqrt() * &pred_original_sample + pred_sample_direction;

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

	use super::DdimSampler;
	use crate::samplers::Sampler;

	#[test]
	fn timestep_spacing() {
		let mut sampler = DdimSampler::sd_v1().unwrap();
		sampler.set_timesteps(50);

		let timesteps = sampler.timesteps();
		assert_eq!(timesteps.len(), 50);
		assert_eq!(timesteps[0], 981);
		assert_eq!(timesteps[49], 1);
		// strictly descending with the uniform train/inference stride
		for w in timesteps.to_vec().windows(2) {
			assert_eq!(w[0] - w[1], 20);
		}
	}

	#[test]
	fn step_is_deterministic() {
		let mut sampler = DdimSampler::sd_v1().unwrap();
		sampler.set_timesteps(10);
		let t = sampler.timesteps()[0];

		let sample = Array4::from_elem((1, 4, 8, 8), 0.5_f32);
		let model_output = Array4::from_elem((1, 4, 8, 8), 0.1_f32);

		let mut rng_a = StdRng::seed_from_u64(0);
		let mut rng_b = StdRng::seed_from_u64(42);
		let a = sampler.clone().step(model_output.view(), t, sample.view(), &mut rng_a);
		let b = sampler.step(model_output.view(), t, sample.view(), &mut rng_b);
		assert_eq!(a.prev_sample, b.prev_sample);
	}

	#[test]
	fn add_noise_endpoints() {
		let mut sampler = DdimSampler::sd_v1().unwrap();
		let original = Array4::from_elem((1, 4, 2, 2), 1.0_f32);
		let noise = Array4::from_elem((1, 4, 2, 2), 1.0_f32);

		// at t=0 alpha-bar is near 1: the sample dominates
		let early = sampler.add_noise(original.view(), noise.view(), 0);
		assert!(early[[0, 0, 0, 0]] > 0.99 && early[[0, 0, 0, 0]] < 1.1);

		// at the last train timestep alpha-bar is near 0: the noise dominates
		let late = sampler.add_noise(original.view(), noise.view(), 999);
		assert!(late[[0, 0, 0, 0]] < 1.1);
		assert!((late[[0, 0, 0, 0]] - 1.0).abs() < 0.12);
	}
}
