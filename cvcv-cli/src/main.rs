use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use cvcv_core::{FilterKind, NameConfig, io::clear_letter_files};

/// Advanced CVCV name generator.
///
/// Prints every consonant-vowel-consonant-vowel name over the chosen letter
/// sets, or exports them to one file per starting letter.
#[derive(Parser, Debug)]
#[command(name = "cvcv", version)]
struct Args {
	/// Filter type (none, repeat_vowels, repeat_consonants, repeat_both)
	#[arg(long)]
	filter: Option<FilterKind>,

	/// Optional suffix (e.g. ly, io, ai)
	#[arg(long)]
	suffix: Option<String>,

	/// Custom vowels (e.g. ae, io)
	#[arg(long)]
	vowels: Option<String>,

	/// Custom consonants (e.g. bcdkpr)
	#[arg(long)]
	consonants: Option<String>,

	/// Append additional vowels to base set
	#[arg(long)]
	add_vowels: Option<String>,

	/// Append additional consonants to base set
	#[arg(long)]
	add_consonants: Option<String>,

	/// Pin first character (must exist in consonant set)
	#[arg(long)]
	first: Option<String>,

	/// Include 'y' as vowel (if vowels not manually set)
	#[arg(long)]
	include_y: bool,

	/// Export grouped files instead of printing
	#[arg(long)]
	export: bool,

	/// Delete single-letter txt files outside the allowed letters before running
	#[arg(long)]
	clear: bool,

	/// Output folder for export and clear
	#[arg(long, env = "CVCV_OUTPUT", default_value = "output")]
	output: PathBuf,

	/// JSON configuration file; flags override its values
	#[arg(long)]
	config: Option<PathBuf>,

	/// Log written and deleted files
	#[arg(short, long)]
	verbose: bool,
}

impl Args {
	/// Merges the optional config file with the command-line flags.
	fn name_config(&self) -> Result<NameConfig, cvcv_core::NameGenError> {
		let mut config = match &self.config {
			Some(path) => NameConfig::load(path)?,
			None => NameConfig::default(),
		};

		let letters = &mut config.letters;
		override_with(&mut letters.vowels, &self.vowels);
		override_with(&mut letters.consonants, &self.consonants);
		override_with(&mut letters.add_vowels, &self.add_vowels);
		override_with(&mut letters.add_consonants, &self.add_consonants);
		letters.include_y |= self.include_y;
		override_with(&mut config.first, &self.first);
		if let Some(filter) = self.filter {
			config.filter = filter;
		}
		if let Some(suffix) = &self.suffix {
			config.suffix = suffix.clone();
		}

		Ok(config)
	}
}

fn override_with(target: &mut Option<String>, flag: &Option<String>) {
	if flag.is_some() {
		target.clone_from(flag);
	}
}

fn main() {
	let args = Args::parse();
	init_logging(args.verbose);

	if let Err(e) = run(&args) {
		eprintln!("Error: {e}");
		std::process::exit(1);
	}
}

fn init_logging(verbose: bool) {
	let default = if verbose { "info" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
	let config = args.name_config()?;
	let engine = config.build_engine()?;

	// Nothing may touch the output folder for an unusable configuration.
	engine.validate()?;

	if args.clear {
		let keep = config.restricted_letters(&engine);
		let deleted = clear_letter_files(&args.output, keep.as_ref())?;
		log::info!("Cleared {} file(s) from {}", deleted.len(), args.output.display());
	}

	if args.export {
		let summary = engine.export_grouped(&args.output)?;
		println!(
			"Export complete: {} names in {} file(s) -> {}",
			summary.total,
			summary.written.len(),
			args.output.display()
		);
	} else {
		let stdout = io::stdout();
		let mut out = BufWriter::new(stdout.lock());
		for name in engine.run()? {
			writeln!(out, "{name}")?;
		}
		out.flush()?;
	}

	Ok(())
}
