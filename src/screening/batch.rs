use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::header::parse_header;
use super::scanner::WindowScanner;
use super::types::{Annotation, Hit, Query, TargetRecord};
use crate::{ScanMode, ScreenConfig, ScreenError};

/// Volume diagnostics gathered before a batch scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputProfile {
    /// Number of queries.
    pub query_count: usize,
    /// Number of target records.
    pub target_count: usize,
    /// Query x target pairs to be scanned.
    pub pair_count: usize,
    /// Shortest query length (0 when there are no queries).
    pub shortest_query: usize,
    /// Longest query length.
    pub longest_query: usize,
    /// Shortest target length (0 when there are no targets).
    pub shortest_target: usize,
    /// Longest target length.
    pub longest_target: usize,
    /// Targets longer than the configured long-target threshold.
    pub long_targets: usize,
}

impl InputProfile {
    /// Measure the inputs of a batch.
    pub fn measure(queries: &[Query], targets: &[TargetRecord], long_target_bp: usize) -> Self {
        let query_lens = queries.iter().map(Query::len);
        let target_lens = targets.iter().map(TargetRecord::len);

        Self {
            query_count: queries.len(),
            target_count: targets.len(),
            pair_count: queries.len().saturating_mul(targets.len()),
            shortest_query: query_lens.clone().min().unwrap_or(0),
            longest_query: query_lens.max().unwrap_or(0),
            shortest_target: target_lens.clone().min().unwrap_or(0),
            longest_target: target_lens.clone().max().unwrap_or(0),
            long_targets: target_lens.filter(|&len| len > long_target_bp).count(),
        }
    }
}

/// Hits and diagnostics produced by one batch run.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// All hits in query-major, target-minor, ascending-offset order.
    pub hits: Vec<Hit>,
    /// Input volume measured before scanning.
    pub profile: InputProfile,
}

/// Runs the window scanner over every query x target pair.
#[derive(Debug, Clone)]
pub struct BatchDriver {
    scanner: WindowScanner,
    mode: ScanMode,
    threads: Option<usize>,
    long_target_bp: usize,
    pair_note_threshold: usize,
}

impl BatchDriver {
    /// Build a driver from a validated configuration.
    pub fn new(config: &ScreenConfig) -> Result<Self, ScreenError> {
        config.validate()?;
        Ok(Self {
            scanner: WindowScanner::new(config.max_distance).with_policy(config.region_policy),
            mode: config.mode,
            threads: config.threads,
            long_target_bp: config.long_target_bp,
            pair_note_threshold: config.pair_note_threshold,
        })
    }

    /// Scanner applied to each pair.
    pub fn scanner(&self) -> &WindowScanner {
        &self.scanner
    }

    /// Scan every query against every target.
    ///
    /// Both modes return hits in the same order: query-major, then target
    /// input order, then ascending match start.
    pub fn run(
        &self,
        queries: &[Query],
        targets: &[TargetRecord],
    ) -> Result<ScanOutcome, ScreenError> {
        let profile = InputProfile::measure(queries, targets, self.long_target_bp);
        self.report_profile(&profile);

        // Each header is annotated once and reused for every query.
        let annotations: Vec<Annotation> =
            targets.iter().map(|target| parse_header(&target.header)).collect();

        let hits = match self.mode {
            ScanMode::Sequential => self.scan_sequential(queries, targets, &annotations),
            ScanMode::Parallel => match self.threads {
                Some(threads) => {
                    let pool = rayon::ThreadPoolBuilder::new()
                        .num_threads(threads)
                        .build()?;
                    pool.install(|| self.scan_parallel(queries, targets, &annotations))
                }
                None => self.scan_parallel(queries, targets, &annotations),
            },
        };

        info!("Found {} total hits.", hits.len());
        Ok(ScanOutcome { hits, profile })
    }

    fn scan_sequential(
        &self,
        queries: &[Query],
        targets: &[TargetRecord],
        annotations: &[Annotation],
    ) -> Vec<Hit> {
        let mut all_hits = Vec::new();
        for (idx, query) in queries.iter().enumerate() {
            info!("Scanning query {}/{}: {}", idx + 1, queries.len(), query.id);
            for (target, annotation) in targets.iter().zip(annotations) {
                all_hits.extend(self.scanner.scan_annotated(
                    &query.id,
                    &query.sequence,
                    annotation,
                    &target.sequence,
                ));
            }
        }
        all_hits
    }

    fn scan_parallel(
        &self,
        queries: &[Query],
        targets: &[TargetRecord],
        annotations: &[Annotation],
    ) -> Vec<Hit> {
        let num_targets = targets.len();
        if num_targets == 0 {
            return Vec::new();
        }
        info!(
            "Scanning {} pairs on {} threads",
            queries.len() * num_targets,
            rayon::current_num_threads()
        );

        // Indexed collect keeps pair order, so flattening restores the
        // sequential layout.
        let per_pair: Vec<Vec<Hit>> = (0..queries.len() * num_targets)
            .into_par_iter()
            .map(|pair| {
                let query = &queries[pair / num_targets];
                let target_idx = pair % num_targets;
                self.scanner.scan_annotated(
                    &query.id,
                    &query.sequence,
                    &annotations[target_idx],
                    &targets[target_idx].sequence,
                )
            })
            .collect();

        per_pair.into_iter().flatten().collect()
    }

    fn report_profile(&self, profile: &InputProfile) {
        info!(
            "Scanning {} queries against {} targets...",
            profile.query_count, profile.target_count
        );
        if profile.longest_target > 0 {
            info!(
                "Target length range: min={} bp, max={} bp",
                profile.shortest_target, profile.longest_target
            );
        }
        debug!(
            "Query length range: min={} bp, max={} bp",
            profile.shortest_query, profile.longest_query
        );
        if profile.long_targets > 0 {
            warn!(
                "{} targets exceed {} bp (may be slow)",
                profile.long_targets, self.long_target_bp
            );
        }
        if profile.pair_count > self.pair_note_threshold {
            info!("{} total query-target comparisons", profile.pair_count);
        }
    }
}

/// Scan all queries against all targets sequentially.
pub fn scan_all(queries: &[Query], targets: &[TargetRecord], max_distance: u32) -> Vec<Hit> {
    let driver = BatchDriver {
        scanner: WindowScanner::new(max_distance),
        mode: ScanMode::Sequential,
        threads: None,
        long_target_bp: ScreenConfig::default().long_target_bp,
        pair_note_threshold: ScreenConfig::default().pair_note_threshold,
    };
    let profile = InputProfile::measure(queries, targets, driver.long_target_bp);
    driver.report_profile(&profile);

    let annotations: Vec<Annotation> =
        targets.iter().map(|target| parse_header(&target.header)).collect();
    let hits = driver.scan_sequential(queries, targets, &annotations);
    info!("Found {} total hits.", hits.len());
    hits
}
