//! Single-pass stream deduplication.
//!
//! One sequential pass over a gzip NDJSON corpus shard. Each line is
//! decoded, classified, and dispatched: media records pass through
//! byte-for-byte, crawl documents are keyed and either admitted (with
//! enrichment fields attached) or dropped as duplicates. Any
//! undecodable or incomplete line aborts the pass with its position;
//! partially written output is preserved behind a sealed gzip member.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::checker::DupeChecker;
use crate::error::{AppError, Result};
use crate::models::{DedupeConfig, DedupeStats, Document};
use crate::pipeline::key::DocumentKey;
use crate::stream::{self, OutputStream};

/// Field recording the content digest on admitted documents.
pub const CONTENT_HASH_FIELD: &str = "content_hash";

/// Field recording the normalized URL on admitted documents.
pub const CLEANED_URL_FIELD: &str = "cleaned_url";

const PROGRESS_EVERY: u64 = 100_000;

/// Deduplicate one shard file into `output`.
///
/// The output file is opened in append mode and receives one fresh
/// gzip member, so repeated runs against the same path accumulate
/// rather than overwrite. The member is sealed even when the pass
/// fails partway through.
pub fn dedupe_file(
    input: &Path,
    output: &Path,
    checker: &mut dyn DupeChecker,
    config: &DedupeConfig,
) -> Result<DedupeStats> {
    log::info!("Deduplicating {} -> {}", input.display(), output.display());
    let reader = stream::open_input(input)?;
    let mut writer = OutputStream::append(output, config.compression_level)?;

    let outcome = run(reader, &mut writer, checker, config);
    let sealed = writer.seal();

    // A pass failure outranks a seal failure, but both are fatal.
    let stats = outcome?;
    sealed?;
    Ok(stats)
}

/// Deduplicate an NDJSON stream, writing surviving lines to `output`.
///
/// Returns the disposition counts; on error the counts accumulated so
/// far are logged before the error propagates.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    checker: &mut dyn DupeChecker,
    config: &DedupeConfig,
) -> Result<DedupeStats> {
    let mut stats = DedupeStats::default();
    match pass(input, output, checker, config, &mut stats) {
        Ok(()) => Ok(stats),
        Err(e) => {
            log::warn!(
                "Dedupe aborted after {} records ({} admitted, {} duplicates, {} media): {}",
                stats.records(),
                stats.admitted,
                stats.duplicates,
                stats.media,
                e
            );
            Err(e)
        }
    }
}

fn pass<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    checker: &mut dyn DupeChecker,
    config: &DedupeConfig,
    stats: &mut DedupeStats,
) -> Result<()> {
    for (idx, line) in input.lines().enumerate() {
        let line_no = idx as u64 + 1;
        let line =
            line.map_err(|e| AppError::record(line_no, format!("unreadable line: {e}")))?;

        let mut doc = Document::from_line(&line)
            .map_err(|e| AppError::record(line_no, format!("undecodable document: {e}")))?;

        if doc.is_media() {
            // Media records bypass keying and keep their exact bytes.
            output.write_all(line.as_bytes())?;
            output.write_all(b"\n")?;
            stats.media += 1;
        } else {
            let raw = doc.raw_content().ok_or_else(|| {
                AppError::record(line_no, "crawl document has no textual raw_content")
            })?;
            let url = doc
                .url()
                .ok_or_else(|| AppError::record(line_no, "crawl document has no textual url"))?;
            let key = DocumentKey::derive(url, raw, config.key);

            if checker.is_new(&key.dedupe_key)? {
                doc.set_text(CONTENT_HASH_FIELD, key.content_hash);
                doc.set_text(CLEANED_URL_FIELD, key.cleaned_url);
                serde_json::to_writer(&mut *output, &doc)?;
                output.write_all(b"\n")?;
                stats.admitted += 1;
            } else {
                stats.duplicates += 1;
            }
        }

        if stats.records() % PROGRESS_EVERY == 0 {
            log::debug!(
                "Processed {} records ({} admitted so far)",
                stats.records(),
                stats.admitted
            );
        }
    }

    output.flush()?;
    Ok(())
}
