use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use hmm_utils::config::StreamConfig;
use hmm_utils::logging::init_tracing;
use hmm_utils::stream::{process_request, read_requests, write_ndjson};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cfg_path = std::env::args().nth(1).map(PathBuf::from);
    let cfg = StreamConfig::load(cfg_path.as_deref())?;

    let fin = File::open(&cfg.input)
        .with_context(|| format!("opening input {}", cfg.input.display()))?;
    if let Some(dir) = cfg.output.parent() {
        fs::create_dir_all(dir)?;
    }
    let mut fout = BufWriter::new(File::create(&cfg.output)?);

    let mut n = 0usize;
    for req in read_requests(BufReader::new(fin)) {
        let req = req?;
        let out = process_request(&req, &cfg).with_context(|| format!("request t={}", req.t))?;
        write_ndjson(&mut fout, &out)?;
        n += 1;
    }
    fout.flush()?;

    info!(requests = n, output = %cfg.output.display(), "wrote normalized stream");
    Ok(())
}
