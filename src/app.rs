use pom_version_domain::VersionChange;
use pom_version_infra::{FileDocumentStore, QuickXmlCodec};
use pom_version_shared_kernel::Result;
use pom_version_usecase::RewriteVersion;
use tracing::info;

use crate::config::{Config, Verbosity};

pub fn run(config: &Config) -> Result<VersionChange> {
    let codec = QuickXmlCodec::new(config.indent);
    let store = FileDocumentStore;
    let command = RewriteVersion::new(&codec, &store);

    let change = command.run(&config.file, &config.version)?;
    info!(file = %config.file.display(), previous = ?change.previous, current = %change.current, "version updated");

    if config.verbosity != Verbosity::Quiet {
        println!("{}", summary_line(config, &change));
    }
    Ok(change)
}

fn summary_line(config: &Config, change: &VersionChange) -> String {
    let previous = change.previous.as_deref().unwrap_or("(none)");
    format!("{}: {} -> {}", config.file.display(), previous, change.current)
}
