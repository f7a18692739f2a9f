//! Utilities for cleaning and combining tag-style prompts.

use regex::Regex;

/// Cleans up a potentially dirty tag-style prompt: collapses comma and whitespace runs and strips leading/trailing
/// commas.
///
/// ```
/// # use oneiros::prompting::cleanup_prompt;
/// assert_eq!(cleanup_prompt("a red fox,,  detailed fur , forest,").as_str(), "a red fox, detailed fur, forest");
/// ```
pub fn cleanup_prompt<S: AsRef<str>>(prompt: S) -> String {
	let comma_run = Regex::new(r"\s*,[\s,]*").unwrap();
	let whitespace_run = Regex::new(r"\s+").unwrap();
	let edge_commas = Regex::new(r"^[\s,]+|[\s,]+$").unwrap();

	let prompt = edge_commas.replace_all(prompt.as_ref(), "");
	let prompt = comma_run.replace_all(prompt.as_ref(), ", ");
	let prompt = whitespace_run.replace_all(prompt.as_ref(), " ");
	prompt.trim().to_string()
}

/// Combines two prompt fragments into one, cleaning the seam.
///
/// ```
/// # use oneiros::prompting::combine_prompts;
/// assert_eq!(combine_prompts("oil painting, detailed,,", "a red fox, ").as_str(), "oil painting, detailed, a red fox");
/// ```
pub fn combine_prompts<A: AsRef<str>, B: AsRef<str>>(a: A, b: B) -> String {
	cleanup_prompt(format!("{}, {}", a.as_ref(), b.as_ref()))
}

#[cfg(test)]
mod tests {
	use super::{cleanup_prompt, combine_prompts};

	#[test]
	fn test_cleanup_prompt() {
		assert_eq!(cleanup_prompt(",best quality,,  a red fox , solo,  ").as_str(), "best quality, a red fox, solo");
	}

	#[test]
	fn test_cleanup_prompt_untouched() {
		assert_eq!(cleanup_prompt("a red fox").as_str(), "a red fox");
	}

	#[test]
	fn test_combine_prompts() {
		assert_eq!(combine_prompts("masterpiece, best quality,,", "a red fox, solo, ").as_str(), "masterpiece, best quality, a red fox, solo");
	}
}
