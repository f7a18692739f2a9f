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

//! Optional post-processing of generated images.
//!
//! The built-in [`ResizeUpscaler`] is intentionally nothing more than a resampling resize; anything smarter (a
//! learned super-resolution model, for instance) plugs in through the [`Upscaler`] trait.

use image::{imageops::FilterType, DynamicImage};

/// A post-processing hook that scales a generated image up to a higher resolution.
pub trait Upscaler {
	/// Returns an upscaled copy of `image`.
	fn upscale(&self, image: &DynamicImage) -> anyhow::Result<DynamicImage>;
}

/// The resampling filter used by [`ResizeUpscaler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpscaleFilter {
	/// Nearest-neighbor sampling; fastest, blocky output.
	Nearest,
	/// Bilinear filtering.
	Triangle,
	/// Catmull-Rom (bicubic) filtering.
	CatmullRom,
	/// Gaussian filtering.
	Gaussian,
	/// Lanczos filtering with a window of 3; slowest, best quality.
	#[default]
	Lanczos3
}

impl From<UpscaleFilter> for FilterType {
	fn from(value: UpscaleFilter) -> Self {
		match value {
			UpscaleFilter::Nearest => FilterType::Nearest,
			UpscaleFilter::Triangle => FilterType::Triangle,
			UpscaleFilter::CatmullRom => FilterType::CatmullRom,
			UpscaleFilter::Gaussian => FilterType::Gaussian,
			UpscaleFilter::Lanczos3 => FilterType::Lanczos3
		}
	}
}

/// Upscales by an integer factor with a plain resampling resize.
#[derive(Debug, Clone)]
pub struct ResizeUpscaler {
	factor: u32,
	filter: UpscaleFilter
}

impl ResizeUpscaler {
	/// Creates an upscaler that multiplies both image dimensions by `factor`.
	///
	/// # Errors
	/// Errors if `factor` is 0. A factor of 1 is accepted and resamples the image at its original size.
	pub fn new(factor: u32) -> anyhow::Result<Self> {
		if factor == 0 {
			anyhow::bail!("upscale factor must be >=1");
		}
		Ok(Self {
			factor,
			filter: UpscaleFilter::default()
		})
	}

	/// Use a different resampling filter; see [`UpscaleFilter`].
	pub fn with_filter(mut self, filter: UpscaleFilter) -> Self {
		self.filter = filter;
		self
	}
}

impl Upscaler for ResizeUpscaler {
	fn upscale(&self, image: &DynamicImage) -> anyhow::Result<DynamicImage> {
		let width = image.width() * self.factor;
		let height = image.height() * self.factor;
		Ok(image.resize_exact(width, height, self.filter.into()))
	}
}

#[cfg(test)]
mod tests {
	use image::DynamicImage;

	use super::{ResizeUpscaler, UpscaleFilter, Upscaler};

	#[test]
	fn doubles_dimensions() {
		let image = DynamicImage::new_rgb8(64, 48);
		let upscaled = ResizeUpscaler::new(2).unwrap().upscale(&image).unwrap();
		assert_eq!((upscaled.width(), upscaled.height()), (128, 96));
	}

	#[test]
	fn factor_one_is_identity_size() {
		let image = DynamicImage::new_rgb8(64, 48);
		let upscaled = ResizeUpscaler::new(1).unwrap().upscale(&image).unwrap();
		assert_eq!((upscaled.width(), upscaled.height()), (64, 48));
	}

	#[test]
	fn rejects_zero_factor() {
		assert!(ResizeUpscaler::new(0).is_err());
	}

	#[test]
	fn nearest_preserves_flat_color() {
		let mut image = image::RgbImage::new(4, 4);
		for pixel in image.pixels_mut() {
			*pixel = image::Rgb([10, 20, 30]);
		}
		let image = DynamicImage::ImageRgb8(image);
		let upscaled = ResizeUpscaler::new(4).unwrap().with_filter(UpscaleFilter::Nearest).upscale(&image).unwrap();
		assert_eq!(upscaled.to_rgb8().get_pixel(15, 15), &image::Rgb([10, 20, 30]));
	}
}
