use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type")]
#[non_exhaustive]
pub enum TokenizerConfig {
	#[serde(rename_all = "kebab-case")]
	CLIPTokenizer {
		path: String,
		model_max_length: usize,
		bos_token: u32,
		eos_token: u32
	}
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TextEncoderConfig {
	pub path: String
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UNetConfig {
	pub path: String
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct VAEDecoderConfig {
	pub path: String
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TextToImageConfig {
	pub tokenizer: TokenizerConfig,
	pub text_encoder: TextEncoderConfig,
	pub unet: UNetConfig,
	pub vae_decoder: VAEDecoderConfig
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "pipeline", rename_all = "kebab-case")]
#[non_exhaustive]
pub enum PipelineManifest {
	TextToImage {
		#[serde(flatten)]
		inner: TextToImageConfig
	}
}

#[cfg(test)]
mod tests {
	use super::PipelineManifest;

	#[test]
	fn parse_manifest() {
		let manifest: PipelineManifest = toml::from_str(
			r#"
pipeline = "text-to-image"

[tokenizer]
type = "CLIPTokenizer"
path = "tokenizer.json"
model-max-length = 77
bos-token = 49406
eos-token = 49407

[text-encoder]
path = "text_encoder.onnx"

[unet]
path = "unet.onnx"

[vae-decoder]
path = "vae_decoder.onnx"
"#
		)
		.unwrap();
		let PipelineManifest::TextToImage { inner } = manifest;
		assert_eq!(inner.unet.path, "unet.onnx");
		match inner.tokenizer {
			super::TokenizerConfig::CLIPTokenizer { model_max_length, bos_token, eos_token, .. } => {
				assert_eq!(model_max_length, 77);
				assert_eq!(bos_token, 49406);
				assert_eq!(eos_token, 49407);
			}
		}
	}
}
