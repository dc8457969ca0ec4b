// make_classpath: materialize a fake compiled classpath directory for a target.
// Usage: cargo run --bin make_classpath -- --workdir <dir> --target <spec> REL=CONTENT...

use std::path::PathBuf;
use std::process::exit;

use anyhow::{anyhow, Context as _, Result};
use clap::Parser;

use jar_task_fixtures::config::FixtureConfig;
use jar_task_fixtures::fixture::DEFAULT_CONF;
use jar_task_fixtures::logging::init_logging;
use jar_task_fixtures::{Context, ProductName, TaskTestFixture};

#[derive(Parser, Debug)]
#[command(name = "make_classpath", about = "Write files into a fresh classpath directory for a target")]
struct Args {
    /// Working directory to create the classpath under (kept afterwards).
    #[arg(long)]
    workdir: PathBuf,

    /// Target address, e.g. `src/java/foo:lib`.
    #[arg(long)]
    target: String,

    /// Register under the runtime classpath instead of the compile classpath.
    #[arg(long)]
    runtime: bool,

    /// Configuration label for the entry.
    #[arg(long, default_value = DEFAULT_CONF)]
    conf: String,

    /// Files to write, as `relative/path=content`.
    files: Vec<String>,
}

fn parse_file_arg(arg: &str) -> Result<(String, String)> {
    let (rel, content) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("expected REL=CONTENT, got `{}`", arg))?;
    if rel.is_empty() {
        return Err(anyhow!("empty relative path in `{}`", arg));
    }
    Ok((rel.to_string(), content.to_string()))
}

fn run(args: Args) -> Result<()> {
    let config = FixtureConfig::load().context("loading fixture config")?;
    init_logging(config.log_filter.as_deref());

    let files = args
        .files
        .iter()
        .map(String::as_str)
        .map(parse_file_arg)
        .collect::<Result<Vec<_>>>()?;

    let conf = args.conf;
    let fixture = TaskTestFixture::in_dir(&args.workdir, config)
        .with_context(|| format!("preparing workdir {}", args.workdir.display()))?;
    let mut context = Context::new();
    let target = fixture.make_target(&mut context, &args.target)?;
    let product = if args.runtime {
        ProductName::RUNTIME_CLASSPATH
    } else {
        ProductName::COMPILE_CLASSPATH
    };
    let dir = fixture
        .add_to_classpath(&mut context, product, &conf, &target, files)
        .with_context(|| format!("adding classpath for {}", target))?;

    println!("classpath {} {} {}", target.id(), conf, dir.display());
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("make_classpath: {:#}", e);
        exit(1);
    }
}
