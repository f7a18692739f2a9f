use std::cell::RefCell;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use kdam::{tqdm, BarExt};
use oneiros::{
	prompting::cleanup_prompt, DdimSampler, DdpmSampler, EulerAncestralSampler, EulerSampler, GenerateOptions, OrtEnvironment, PipelineOptions, Sampler,
	TextToImagePipeline
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SamplerKind {
	Ddim,
	Ddpm,
	Euler,
	EulerAncestral
}

#[derive(Parser)]
#[command(author, version, about = "generate an image from a text prompt")]
struct Args {
	/// Path to a model directory containing an oneiros.toml manifest.
	#[arg(long, value_name = "DIR")]
	model: PathBuf,

	/// The prompt to generate an image for.
	#[arg(long, default_value = "photo of a red fox in a snowy forest, highly detailed")]
	prompt: String,

	/// Things the image should not contain.
	#[arg(long)]
	negative_prompt: Option<String>,

	/// Which numerical sampler drives the denoising loop.
	#[arg(long, value_enum, default_value = "euler")]
	sampler: SamplerKind,

	/// The number of denoising steps.
	#[arg(long, default_value_t = 25)]
	steps: usize,

	/// Random seed; omit for a different image every run.
	#[arg(long)]
	seed: Option<u64>,

	/// Classifier-free guidance scale.
	#[arg(long, default_value_t = 7.5)]
	guidance_scale: f32,

	/// Output image width in pixels.
	#[arg(long, default_value_t = 512)]
	width: u32,

	/// Output image height in pixels.
	#[arg(long, default_value_t = 512)]
	height: u32,

	/// Where to write the generated PNG.
	#[arg(long, value_name = "FILE", default_value = "result.png")]
	output: PathBuf
}

fn generate<S: Sampler>(args: &Args, pipeline: &TextToImagePipeline, sampler: &mut S) -> anyhow::Result<Vec<image::DynamicImage>> {
	let pb = RefCell::new(tqdm!(total = args.steps, desc = "generating"));
	let mut options = GenerateOptions::default()
		.with_prompts(cleanup_prompt(&args.prompt), args.negative_prompt.as_deref().map(cleanup_prompt))
		.with_steps(args.steps)
		.with_guidance_scale(args.guidance_scale)
		.with_size(args.width, args.height)
		.callback_progress(1, move |step, _| {
			let _ = pb.borrow_mut().update_to(step + 1);
			true
		});
	if let Some(seed) = args.seed {
		options = options.with_seed(seed);
	}
	options.run(pipeline, sampler)
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

	let args = Args::parse();

	let environment = OrtEnvironment::default().into_arc();
	let pipeline = TextToImagePipeline::new(&environment, &args.model, PipelineOptions::default())?;

	let mut images = match args.sampler {
		SamplerKind::Ddim => generate(&args, &pipeline, &mut DdimSampler::sd_v1()?)?,
		SamplerKind::Ddpm => generate(&args, &pipeline, &mut DdpmSampler::sd_v1()?)?,
		SamplerKind::Euler => generate(&args, &pipeline, &mut EulerSampler::sd_v1()?)?,
		SamplerKind::EulerAncestral => generate(&args, &pipeline, &mut EulerAncestralSampler::sd_v1()?)?
	};

	images.remove(0).into_rgb8().save(&args.output)?;
	println!("saved to {}", args.output.display());

	Ok(())
}
