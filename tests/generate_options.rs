use oneiros::{GenerateOptions, ResizeUpscaler, UpscaleFilter};

#[test]
fn size_rounds_down_to_multiple_of_8() {
	let options = GenerateOptions::default().with_size(513, 769);
	assert_eq!(options.size(), (512, 768));
}

#[test]
fn size_has_a_floor_of_8() {
	let options = GenerateOptions::default().with_size(7, 3);
	assert_eq!(options.size(), (8, 8));
}

#[test]
fn default_size_is_512() {
	assert_eq!(GenerateOptions::default().size(), (512, 512));
}

#[test]
fn builder_chain_composes() {
	let options = GenerateOptions::default()
		.with_prompts("a red fox", Some("blurry, low quality"))
		.with_steps(30)
		.with_seed(42)
		.with_guidance_scale(9.0)
		.with_size(640, 448)
		.with_upscaler(ResizeUpscaler::new(2).unwrap().with_filter(UpscaleFilter::CatmullRom))
		.callback_progress(1, |_, _| true);
	assert_eq!(options.size(), (640, 448));
}
