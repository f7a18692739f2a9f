use std::cell::RefCell;
use std::path::PathBuf;

use clap::Parser;
use kdam::{tqdm, BarExt};
use oneiros::{EulerAncestralSampler, GenerateOptions, OrtEnvironment, PipelineOptions, ResizeUpscaler, TextToImagePipeline};

#[derive(Parser)]
#[command(author, version, about = "generate an image and upscale it with a plain resize")]
struct Args {
	/// Path to a model directory containing an oneiros.toml manifest.
	#[arg(long, value_name = "DIR")]
	model: PathBuf,

	/// The prompt to generate an image for.
	#[arg(long, default_value = "an oil painting of a lighthouse in a storm")]
	prompt: String,

	/// The number of denoising steps.
	#[arg(long, default_value_t = 30)]
	steps: usize,

	/// Random seed; the default reproduces the same image every run.
	#[arg(long, default_value_t = 42)]
	seed: u64,

	/// Integer factor to multiply the output resolution by.
	#[arg(long, default_value_t = 2)]
	upscale: u32,

	/// Where to write the generated PNG.
	#[arg(long, value_name = "FILE", default_value = "result-upscaled.png")]
	output: PathBuf
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

	let args = Args::parse();

	let environment = OrtEnvironment::default().into_arc();
	let mut sampler = EulerAncestralSampler::sd_v1()?;
	let pipeline = TextToImagePipeline::new(&environment, &args.model, PipelineOptions::default())?;

	let pb = RefCell::new(tqdm!(total = args.steps, desc = "generating"));
	let mut images = GenerateOptions::default()
		.with_prompts(args.prompt.as_str(), None)
		.with_steps(args.steps)
		.with_seed(args.seed)
		.with_upscaler(ResizeUpscaler::new(args.upscale)?)
		.callback_progress(1, move |step, _| {
			let _ = pb.borrow_mut().update_to(step + 1);
			true
		})
		.run(&pipeline, &mut sampler)?;

	images.remove(0).into_rgb8().save(&args.output)?;
	println!("saved to {}", args.output.display());

	Ok(())
}
