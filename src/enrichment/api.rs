use tracing::{debug, info, warn};

use super::EnrichmentError;
use crate::screening::{Hit, NA};

/// Allelic impact assumed for every off-target hit.
pub const ALLELIC_STATUS: &str = "monoallelic (assumed)";

/// Longest advisory kept verbatim; longer text is cut and suffixed with `...`.
pub const MAX_ADVISORY_CHARS: usize = 300;

/// Fields of a hit that an enricher may consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisoryRequest<'a> {
    /// Gene symbol of the hit transcript.
    pub gene_symbol: &'a str,
    /// Transcript identifier.
    pub transcript_id: &'a str,
    /// Transcript type.
    pub transcript_type: &'a str,
    /// Mismatch count of the hit.
    pub edit_distance: u32,
}

impl<'a> AdvisoryRequest<'a> {
    /// Build a request from a hit.
    pub fn from_hit(hit: &'a Hit) -> Self {
        Self {
            gene_symbol: &hit.gene_symbol,
            transcript_id: &hit.transcript_id,
            transcript_type: &hit.transcript_type,
            edit_distance: hit.distance,
        }
    }
}

/// Source of free-text advisories about the consequence of an off-target hit.
pub trait Enricher: Send + Sync {
    /// Short backend name used in logs.
    fn name(&self) -> &str;

    /// Produce an advisory for the request.
    ///
    /// `Ok(None)` means the backend has nothing to say about this hit.
    fn advise(&self, request: &AdvisoryRequest<'_>) -> Result<Option<String>, EnrichmentError>;
}

/// One-shot warning latch owned by the caller of an enrichment run.
#[derive(Debug, Default)]
pub struct WarnOnce {
    warned: bool,
}

impl WarnOnce {
    /// Fresh latch that has not warned yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a warning has already been emitted.
    pub fn has_warned(&self) -> bool {
        self.warned
    }

    /// Run `emit` the first time only. Returns `true` when it ran.
    pub fn first(&mut self, emit: impl FnOnce()) -> bool {
        if self.warned {
            return false;
        }
        emit();
        self.warned = true;
        true
    }
}

/// Hit with allelic status and advisory text attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedHit {
    /// Underlying scanner hit.
    pub hit: Hit,
    /// Always [`ALLELIC_STATUS`].
    pub allelic_status: String,
    /// Advisory text, or [`NA`].
    pub annotation: String,
}

/// Counts from an enrichment run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentStats {
    /// Hits that received an advisory.
    pub annotated: usize,
    /// Hits left as `NA`.
    pub unavailable: usize,
}

/// Attach an advisory to one hit. Failures degrade to `NA`.
pub fn enrich_hit(
    hit: Hit,
    enricher: Option<&dyn Enricher>,
    warn_once: &mut WarnOnce,
) -> EnrichedHit {
    let annotation = match enricher {
        Some(enricher) if hit.gene_symbol != NA && hit.transcript_id != NA => {
            advise(enricher, &hit, warn_once)
        }
        _ => NA.to_string(),
    };

    EnrichedHit {
        hit,
        allelic_status: ALLELIC_STATUS.to_string(),
        annotation,
    }
}

fn advise(enricher: &dyn Enricher, hit: &Hit, warn_once: &mut WarnOnce) -> String {
    match enricher.advise(&AdvisoryRequest::from_hit(hit)) {
        Ok(Some(text)) => {
            let text = text.trim();
            if text.is_empty() {
                NA.to_string()
            } else {
                truncate_advisory(text)
            }
        }
        Ok(None) => {
            debug!(gene = %hit.gene_symbol, backend = enricher.name(), "no advisory available");
            NA.to_string()
        }
        Err(err) => {
            warn_once.first(|| {
                warn!(
                    "{} enrichment failed for {}: {}",
                    enricher.name(),
                    hit.gene_symbol,
                    err
                )
            });
            NA.to_string()
        }
    }
}

fn truncate_advisory(text: &str) -> String {
    if text.chars().count() <= MAX_ADVISORY_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(MAX_ADVISORY_CHARS - 3).collect();
    cut.push_str("...");
    cut
}

/// Enrich every hit in order.
///
/// Without an enricher every hit is marked `NA`. The first backend error is
/// logged through `warn_once`; later errors are silent.
pub fn enrich_hits(
    hits: Vec<Hit>,
    enricher: Option<&dyn Enricher>,
    warn_once: &mut WarnOnce,
) -> (Vec<EnrichedHit>, EnrichmentStats) {
    let total = hits.len();
    let mut stats = EnrichmentStats::default();
    let mut enriched = Vec::with_capacity(total);

    for (idx, hit) in hits.into_iter().enumerate() {
        if (idx + 1) % 10 == 0 {
            debug!("Progress: {}/{} hits processed", idx + 1, total);
        }
        let result = enrich_hit(hit, enricher, warn_once);
        if result.annotation == NA {
            stats.unavailable += 1;
        } else {
            stats.annotated += 1;
        }
        enriched.push(result);
    }

    info!(
        "Completed: {} annotated, {} marked as 'NA'",
        stats.annotated, stats.unavailable
    );
    (enriched, stats)
}
