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

//! The numerical samplers that drive the reverse diffusion process.
//!
//! A sampler takes the output of the trained denoising model, the sample the diffusion process is iterating on, and a
//! timestep, and produces a less noisy sample. The samplers are interchangeable: each one defines a noise schedule
//! and an update rule for solving the same differential equation, trading step count against output quality in
//! different ways.

use ndarray::{Array1, Array4, ArrayBase, ArrayView1, ArrayView4};
use num_traits::ToPrimitive;
use rand::Rng;

cfg_if::cfg_if! {
	if #[cfg(feature = "sampler-ddim")] {
		mod ddim;
		pub use self::ddim::*;
	}
}
cfg_if::cfg_if! {
	if #[cfg(feature = "sampler-ddpm")] {
		mod ddpm;
		pub use self::ddpm::*;
	}
}
cfg_if::cfg_if! {
	if #[cfg(feature = "sampler-euler")] {
		mod euler;
		pub use self::euler::*;
	}
}
cfg_if::cfg_if! {
	if #[cfg(feature = "sampler-euler-ancestral")] {
		mod euler_ancestral;
		pub use self::euler_ancestral::*;
	}
}

/// A mapping from a beta range to the per-timestep sequence of betas used to train the model.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum BetaSchedule {
	/// Linear beta schedule.
	Linear,
	/// Betas linear in sqrt-space; the schedule Stable Diffusion v1 was trained with.
	ScaledLinear,
	/// The squared-cosine schedule from [Nichol & Dhariwal (2021)](https://arxiv.org/abs/2102.09672).
	SquaredCosCapV2,
	/// An explicit beta sequence taken from the trained model.
	TrainedBetas(Array1<f32>)
}

/// What quantity the denoising model was trained to predict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredictionType {
	/// The model predicts the noise added to the sample. This is what Stable Diffusion v1 predicts.
	#[default]
	Epsilon,
	/// The model predicts the denoised sample directly.
	Sample,
	/// The model predicts `v` as defined in [Salimans & Ho (2022)](https://arxiv.org/abs/2202.00512), section 2.4.
	VPrediction
}

/// The noise schedule shared by every sampler: how many timesteps the model was trained with, the beta range, and how
/// the betas are spaced across it.
#[derive(Debug, Clone)]
pub struct SamplerSchedule {
	/// Number of diffusion steps used to train the model.
	pub train_timesteps: usize,
	/// The starting beta value.
	pub beta_start: f32,
	/// The final beta value.
	pub beta_end: f32,
	/// How betas are spaced between `beta_start` and `beta_end`; see [`BetaSchedule`].
	pub beta_schedule: BetaSchedule,
	/// What the model predicts; see [`PredictionType`].
	pub prediction_type: PredictionType
}

impl SamplerSchedule {
	/// The schedule Stable Diffusion v1 models were trained with: 1000 timesteps, scaled-linear betas over
	/// `[0.00085, 0.012]`, epsilon prediction.
	pub fn sd_v1() -> Self {
		Self {
			train_timesteps: 1000,
			beta_start: 0.00085,
			beta_end: 0.012,
			beta_schedule: BetaSchedule::ScaledLinear,
			prediction_type: PredictionType::Epsilon
		}
	}

	/// Materializes the per-timestep beta sequence.
	///
	/// # Errors
	/// Errors if `train_timesteps` is 0, if `beta_start`/`beta_end` are not normal numbers, if
	/// `beta_start >= beta_end`, or if an explicit beta sequence does not match `train_timesteps`.
	pub(crate) fn betas(&self) -> anyhow::Result<Array1<f32>> {
		if self.train_timesteps == 0 {
			anyhow::bail!("train_timesteps ({}) must be >0", self.train_timesteps);
		}
		if !self.beta_start.is_normal() || !self.beta_end.is_normal() {
			anyhow::bail!(
				"beta_start ({}) and beta_end ({}) must be normal (not zero, infinite, NaN, or subnormal)",
				self.beta_start,
				self.beta_end
			);
		}
		if self.beta_start >= self.beta_end {
			anyhow::bail!("beta_start must be < beta_end");
		}

		Ok(match &self.beta_schedule {
			BetaSchedule::TrainedBetas(betas) => {
				if betas.len() != self.train_timesteps {
					anyhow::bail!("trained beta sequence has {} entries, expected {}", betas.len(), self.train_timesteps);
				}
				betas.clone()
			}
			BetaSchedule::Linear => Array1::linspace(self.beta_start, self.beta_end, self.train_timesteps),
			BetaSchedule::ScaledLinear => {
				let mut betas = Array1::linspace(self.beta_start.sqrt(), self.beta_end.sqrt(), self.train_timesteps);
				betas.par_map_inplace(|f| *f = f.powi(2));
				betas
			}
			BetaSchedule::SquaredCosCapV2 => betas_for_alpha_bar(self.train_timesteps, 0.999)
		})
	}

	/// Materializes the cumulative product of alphas, `alpha-bar`, over the train timesteps.
	pub(crate) fn alphas_cumprod(&self) -> anyhow::Result<Array1<f32>> {
		let alphas = 1.0 - self.betas()?;
		Ok(alphas
			.view()
			.into_iter()
			.scan(1.0, |prod, alpha| {
				*prod *= *alpha;
				Some(*prod)
			})
			.collect::<Array1<_>>())
	}
}

/// Computes the sigma sequence (with a trailing 0) and the matching descending timestep positions for the given
/// number of inference steps. Shared by the sigma-space (k-diffusion) samplers.
#[cfg(any(feature = "sampler-euler", feature = "sampler-euler-ancestral"))]
pub(crate) fn sigma_space(alphas_cumprod: &Array1<f32>, train_timesteps: usize, num_inference_steps: usize) -> (Array1<f32>, Array1<f32>) {
	use crate::util::interpolation::interp;

	let timesteps = Array1::linspace(train_timesteps as f32 - 1.0, 0.0, num_inference_steps);

	let mut train_sigmas = alphas_cumprod.clone();
	train_sigmas.par_map_inplace(|f| {
		*f = ((1.0 - *f) / *f).sqrt();
	});

	let positions = Array1::range(0.0, train_sigmas.len() as f32, 1.0);
	let sigmas = interp(timesteps.view(), positions.view(), train_sigmas.view());
	let sigmas = ndarray::concatenate![ndarray::Axis(0), sigmas, Array1::zeros(1)];

	(sigmas, timesteps)
}

/// Discretizes the continuous squared-cosine alpha-bar into per-timestep betas, capped at `max_beta`.
pub(crate) fn betas_for_alpha_bar(num_timesteps: usize, max_beta: f32) -> Array1<f32> {
	fn alpha_bar(time_step: f32) -> f32 {
		((time_step + 0.008) / 1.008 * std::f32::consts::FRAC_PI_2).cos().powi(2)
	}

	let mut betas = Vec::with_capacity(num_timesteps);
	for i in 0..num_timesteps {
		let t1 = i as f32 / num_timesteps as f32;
		let t2 = (i + 1) as f32 / num_timesteps as f32;
		betas.push((1.0 - alpha_bar(t2) / alpha_bar(t1)).min(max_beta));
	}
	Array1::from_vec(betas)
}

/// The output of a sampler's `step` function.
pub struct SamplerStepOutput {
	pub(crate) prev_sample: Array4<f32>,
	pub(crate) pred_original_sample: Option<Array4<f32>>
}

impl SamplerStepOutput {
	/// Computed sample (`x_{t-1}`) of the previous timestep, to be used as the next model input in the denoising
	/// loop.
	pub fn prev_sample(&self) -> ArrayView4<'_, f32> {
		self.prev_sample.view()
	}

	/// The predicted fully denoised sample (`x_0`) based on the model output from the current timestep. Can be used
	/// to preview progress or for guidance.
	pub fn pred_original_sample(&self) -> Option<ArrayView4<'_, f32>> {
		self.pred_original_sample.as_ref().map(ArrayBase::view)
	}
}

/// A numerical sampler driving the reverse diffusion process in a pipeline.
#[allow(clippy::len_without_is_empty)]
pub trait Sampler: Clone {
	/// How this sampler indexes into its schedule: integer train timesteps for the DDIM/DDPM family, fractional
	/// positions for the sigma-space samplers.
	type Timestep: Copy + ToPrimitive;

	/// The order of the solver; the denoising loop runs `order` model evaluations per output step.
	fn order() -> usize {
		1
	}

	/// Scales the denoising model input to match what the sampler's update rule expects. Must be called on the model
	/// input before every [`Sampler::step`].
	fn scale_model_input(&mut self, sample: ArrayView4<'_, f32>, timestep: Self::Timestep) -> Array4<f32>;

	/// Recomputes the timestep sequence for the given number of inference steps. Must be called before
	/// [`Sampler::step`].
	fn set_timesteps(&mut self, num_inference_steps: usize);

	/// Predicts the sample at the previous timestep from the model output - the core function propagating the
	/// diffusion process.
	fn step<R: Rng + ?Sized>(
		&mut self,
		model_output: ArrayView4<'_, f32>,
		timestep: Self::Timestep,
		sample: ArrayView4<'_, f32>,
		rng: &mut R
	) -> SamplerStepOutput;

	/// Adds schedule-scaled noise to the given samples at the given timestep.
	fn add_noise(&mut self, original_samples: ArrayView4<'_, f32>, noise: ArrayView4<'_, f32>, timestep: Self::Timestep) -> Array4<f32>;

	/// Returns the computed timestep sequence, in the order the denoising loop should visit it.
	fn timesteps(&self) -> ArrayView1<'_, Self::Timestep>;

	/// Returns the standard deviation of the initial noise distribution.
	fn init_noise_sigma(&self) -> f32;

	/// Returns the number of train timesteps.
	fn len(&self) -> usize;
}

#[cfg(test)]
mod tests {
	use super::{betas_for_alpha_bar, BetaSchedule, SamplerSchedule};

	#[test]
	fn sd_v1_schedule_shape() {
		let schedule = SamplerSchedule::sd_v1();
		let alphas_cumprod = schedule.alphas_cumprod().unwrap();
		assert_eq!(alphas_cumprod.len(), 1000);
		// alpha-bar decreases monotonically from just under 1 towards 0
		assert!(alphas_cumprod[0] > 0.99);
		assert!(alphas_cumprod[999] < 0.01);
		for w in alphas_cumprod.as_slice().unwrap().windows(2) {
			assert!(w[1] < w[0]);
		}
	}

	#[test]
	fn rejects_degenerate_schedules() {
		let mut schedule = SamplerSchedule::sd_v1();
		schedule.train_timesteps = 0;
		assert!(schedule.betas().is_err());

		let mut schedule = SamplerSchedule::sd_v1();
		schedule.beta_start = schedule.beta_end;
		assert!(schedule.betas().is_err());

		let mut schedule = SamplerSchedule::sd_v1();
		schedule.beta_start = f32::NAN;
		assert!(schedule.betas().is_err());
	}

	#[test]
	fn trained_betas_length_checked() {
		let mut schedule = SamplerSchedule::sd_v1();
		schedule.beta_schedule = BetaSchedule::TrainedBetas(ndarray::Array1::linspace(0.0001, 0.02, 10));
		assert!(schedule.betas().is_err());
	}

	#[test]
	fn squaredcos_betas_bounded() {
		let betas = betas_for_alpha_bar(1000, 0.999);
		assert_eq!(betas.len(), 1000);
		for beta in betas.iter() {
			assert!((0.0..=0.999).contains(beta));
		}
	}
}
