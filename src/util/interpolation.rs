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

use ndarray::{Array1, ArrayView1};

/// Piecewise-linear interpolation of `(xp, fp)` sampled at each point of `x`, with `xp` strictly ascending.
/// Points outside the range of `xp` clamp to the first/last value of `fp`.
pub(crate) fn interp(x: ArrayView1<'_, f32>, xp: ArrayView1<'_, f32>, fp: ArrayView1<'_, f32>) -> Array1<f32> {
	debug_assert_eq!(xp.len(), fp.len());
	x.mapv(|xi| {
		if xi <= xp[0] {
			return fp[0];
		}
		if xi >= xp[xp.len() - 1] {
			return fp[fp.len() - 1];
		}
		let hi = partition_point(&xp, xi);
		let lo = hi - 1;
		let dx = xp[hi] - xp[lo];
		fp[lo] + (xi - xp[lo]) / dx * (fp[hi] - fp[lo])
	})
}

/// Index of the first element of `xp` strictly greater than `x`. `x` is known to be within `xp`'s range.
fn partition_point(xp: &ArrayView1<'_, f32>, x: f32) -> usize {
	let mut lo = 0;
	let mut hi = xp.len();
	while lo < hi {
		let mid = (lo + hi) / 2;
		if xp[mid] <= x { lo = mid + 1 } else { hi = mid }
	}
	lo
}

#[cfg(test)]
mod tests {
	use ndarray::Array1;

	use super::interp;

	#[test]
	fn interpolates_midpoints() {
		let xp = Array1::from_vec(vec![0.0, 1.0, 2.0]);
		let fp = Array1::from_vec(vec![0.0, 10.0, 40.0]);
		let x = Array1::from_vec(vec![0.5, 1.5]);
		let out = interp(x.view(), xp.view(), fp.view());
		assert!((out[0] - 5.0).abs() < 1e-6);
		assert!((out[1] - 25.0).abs() < 1e-6);
	}

	#[test]
	fn passes_through_knots() {
		let xp = Array1::from_vec(vec![0.0, 1.0, 2.0, 3.0]);
		let fp = Array1::from_vec(vec![3.0, 1.0, 4.0, 1.0]);
		let out = interp(xp.view(), xp.view(), fp.view());
		for (a, b) in out.iter().zip(fp.iter()) {
			assert!((a - b).abs() < 1e-6);
		}
	}

	#[test]
	fn clamps_out_of_range() {
		let xp = Array1::from_vec(vec![1.0, 2.0]);
		let fp = Array1::from_vec(vec![5.0, 7.0]);
		let x = Array1::from_vec(vec![0.0, 3.0]);
		let out = interp(x.view(), xp.view(), fp.view());
		assert_eq!(out[0], 5.0);
		assert_eq!(out[1], 7.0);
	}
}
