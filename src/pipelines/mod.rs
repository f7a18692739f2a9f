//! Diffusion pipelines.

use std::{borrow::Cow, ops::Deref};

cfg_if::cfg_if! {
	if #[cfg(feature = "text-to-image")] {
		mod text_to_image;
		pub use self::text_to_image::*;
	}
}

/// Text prompt(s) used as input to a diffusion pipeline. Multiple prompts generate one image per prompt in a single
/// batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(pub(crate) Vec<String>);

impl Prompt {
	/// A batch of `batch_size` empty prompts, used as the unconditional input for classifier-free guidance.
	pub(crate) fn default_batched(batch_size: usize) -> Self {
		Self(vec![String::new(); batch_size])
	}
}

impl Deref for Prompt {
	type Target = Vec<String>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<'s> From<&'s str> for Prompt {
	fn from(value: &'s str) -> Self {
		Self(vec![value.to_string()])
	}
}

impl From<String> for Prompt {
	fn from(value: String) -> Self {
		Self(vec![value])
	}
}

impl<'s> From<Cow<'s, str>> for Prompt {
	fn from(value: Cow<'s, str>) -> Self {
		Self(vec![value.to_string()])
	}
}

impl<'s> From<&'s [&'s str]> for Prompt {
	fn from(value: &'s [&'s str]) -> Self {
		Self(value.iter().map(|v| v.to_string()).collect())
	}
}

impl<'s> From<&'s [String]> for Prompt {
	fn from(value: &'s [String]) -> Self {
		Self(value.to_vec())
	}
}

impl<'s> From<Vec<&'s str>> for Prompt {
	fn from(value: Vec<&'s str>) -> Self {
		Self(value.iter().map(|v| v.to_string()).collect())
	}
}

impl From<Vec<String>> for Prompt {
	fn from(value: Vec<String>) -> Self {
		Self(value)
	}
}

#[cfg(test)]
mod tests {
	use super::Prompt;

	#[test]
	fn single_and_batched_conversions() {
		assert_eq!(Prompt::from("a red fox").len(), 1);
		assert_eq!(Prompt::from(vec!["a", "b", "c"]).len(), 3);
		assert_eq!(Prompt::default_batched(4).len(), 4);
		assert!(Prompt::default_batched(2).iter().all(String::is_empty));
	}
}
