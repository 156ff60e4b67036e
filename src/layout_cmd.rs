//! Layout command: build the timeline document once.

use anyhow::Result;
use tracing::info_span;

use crate::cli::LayoutArgs;
use crate::pipeline::{self, Settings};

/// Build the document and write it to the output path or stdout.
pub fn run(args: LayoutArgs) -> Result<()> {
    let _cmd = info_span!("layout").entered();
    let config = pipeline::load_config(args.source.config.as_deref())?;
    let settings = Settings::resolve(&config, &args.source, args.scale, args.width)?;
    let today = pipeline::resolve_today(args.today.as_deref())?;

    let doc = pipeline::load_document(&settings, today)?;
    pipeline::write_document(&doc, args.output.as_deref())
}
