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

//! CLIP tokenizer wrapper.

use std::path::PathBuf;

use ndarray::Array2;
use tokenizers::Tokenizer;

/// A [CLIP](https://arxiv.org/abs/2103.00020) tokenizer.
///
/// CLIP is used by many diffusion models, including Stable Diffusion, for prompt tokenization. This wrapper frames
/// encoded prompts explicitly - BOS, then the prompt tokens (truncated to fit), then EOS padding out to the model's
/// maximum length - so a stock `tokenizer.json` works unmodified.
pub struct ClipTokenizer {
	inner: Tokenizer,
	model_max_length: usize,
	bos_token_id: u32,
	eos_token_id: u32
}

unsafe impl Send for ClipTokenizer {}
unsafe impl Sync for ClipTokenizer {}

impl ClipTokenizer {
	/// Loads a CLIP tokenizer from a `tokenizer.json` file.
	pub fn new(path: impl Into<PathBuf>, model_max_length: usize, bos_token_id: u32, eos_token_id: u32) -> anyhow::Result<Self> {
		let path = path.into();
		let bytes = std::fs::read(path)?;
		Self::from_bytes(bytes, model_max_length, bos_token_id, eos_token_id)
	}

	/// Loads a CLIP tokenizer from serialized tokenizer JSON.
	pub fn from_bytes<B: AsRef<[u8]>>(bytes: B, model_max_length: usize, bos_token_id: u32, eos_token_id: u32) -> anyhow::Result<Self> {
		if model_max_length < 2 {
			anyhow::bail!("model_max_length ({model_max_length}) must fit at least BOS and EOS");
		}
		let inner: Tokenizer = serde_json::from_slice(bytes.as_ref())?;
		Ok(Self {
			inner,
			model_max_length,
			bos_token_id,
			eos_token_id
		})
	}

	/// Returns the maximum sequence length this tokenizer produces. For most CLIP models, this is 77 tokens.
	#[allow(clippy::len_without_is_empty)]
	pub fn len(&self) -> usize {
		self.model_max_length
	}

	/// Returns the ID of the beginning-of-string token.
	pub fn bos(&self) -> u32 {
		self.bos_token_id
	}

	/// Returns the ID of the end-of-string token.
	pub fn eos(&self) -> u32 {
		self.eos_token_id
	}

	/// Encodes a batch of prompts into an [`Array2`] of token IDs, shaped `(batch, model_max_length)`, to be passed
	/// to a CLIP text model.
	pub fn encode_for_text_model(&self, prompts: Vec<String>) -> anyhow::Result<Array2<i32>> {
		let batch_size = prompts.len();
		let mut ids = Vec::with_capacity(batch_size * self.model_max_length);
		for encoding in self.inner.encode_batch(prompts, false).map_err(|e| anyhow::anyhow!("{e:?}"))? {
			let row = frame_ids(encoding.get_ids(), self.model_max_length, self.bos_token_id, self.eos_token_id);
			ids.extend(row.into_iter().map(|tok| tok as i32));
		}
		Ok(Array2::from_shape_vec((batch_size, self.model_max_length), ids)?)
	}
}

/// Frames raw token IDs as BOS + tokens + EOS, truncating the tokens to fit and padding with EOS to `max_length`.
fn frame_ids(ids: &[u32], max_length: usize, bos: u32, eos: u32) -> Vec<u32> {
	let content_len = ids.len().min(max_length - 2);
	let mut row = Vec::with_capacity(max_length);
	row.push(bos);
	row.extend_from_slice(&ids[..content_len]);
	row.resize(max_length, eos);
	row
}

#[cfg(test)]
mod tests {
	use super::frame_ids;

	#[test]
	fn frames_and_pads() {
		assert_eq!(frame_ids(&[5, 6, 7], 8, 1, 2), vec![1, 5, 6, 7, 2, 2, 2, 2]);
	}

	#[test]
	fn truncates_long_input() {
		let ids: Vec<u32> = (10..30).collect();
		let row = frame_ids(&ids, 8, 1, 2);
		assert_eq!(row.len(), 8);
		assert_eq!(row[0], 1);
		assert_eq!(row[7], 2);
		assert_eq!(&row[1..7], &[10, 11, 12, 13, 14, 15]);
	}

	#[test]
	fn empty_prompt_is_bos_then_eos() {
		assert_eq!(frame_ids(&[], 4, 1, 2), vec![1, 2, 2, 2]);
	}
}
