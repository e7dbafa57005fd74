use std::time::{Duration, Instant};

use crate::batch::cancel::CancelToken;
use crate::batch::hooks::{LogReporter, NoopReclaimer, Reclaimer, Reporter, Transform};
use crate::domain::{RecordFilter, RecordId};
use crate::errors::SweepError;
use crate::pagination::{PageSpec, Pager};
use crate::progress::{format_duration, ProgressTimer};
use crate::store::RecordStore;

/// Outcome of one full sweep over the matching record set.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Matching records at setup time, before any cap.
    pub total_matching: usize,
    /// Effective denominator: min(total_matching, max_records).
    pub target: usize,
    pub processed: usize,
    pub updated: usize,
    pub pages: usize,
    pub cancelled: bool,
    pub elapsed: Duration,
}

/// Orchestrates the fetch-transform-persist loop.
///
/// Per record: load, snapshot the original, apply the transform to the
/// working copy, tick the timer, report, and persist only if the copy
/// actually differs from the snapshot. After every page, including a
/// partial final one, the reclaimer runs.
///
/// Transform and store failures are not caught: the run aborts and the
/// error propagates. Records persisted earlier in the page stay persisted;
/// there is no retry and no rollback.
pub struct BatchDriver {
    pager: Pager,
    timer: ProgressTimer,
    reporter: Box<dyn Reporter>,
    reclaimer: Box<dyn Reclaimer>,
    cancel: CancelToken,
    max_records: Option<usize>,
    eta_interval: usize,
    dry_run: bool,
}

impl BatchDriver {
    pub fn new(filter: RecordFilter, page: PageSpec) -> Result<Self, SweepError> {
        Ok(Self {
            pager: Pager::new(filter, page)?,
            timer: ProgressTimer::new(),
            reporter: Box::new(LogReporter),
            reclaimer: Box::new(NoopReclaimer),
            cancel: CancelToken::new(),
            max_records: None,
            eta_interval: 1,
            dry_run: false,
        })
    }

    pub fn with_reporter(mut self, reporter: Box<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_reclaimer(mut self, reclaimer: Box<dyn Reclaimer>) -> Self {
        self.reclaimer = reclaimer;
        self
    }

    /// Stop after this many processed records regardless of the total.
    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = Some(max);
        self
    }

    /// Emit the ETA line every `interval` records instead of every record.
    pub fn with_eta_interval(mut self, interval: usize) -> Self {
        self.eta_interval = interval;
        self
    }

    /// Report would-be updates without ever calling the store's write path.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn run(
        mut self,
        store: &mut dyn RecordStore,
        transform: &mut dyn Transform,
    ) -> Result<RunSummary, SweepError> {
        let total_matching = self.pager.setup(store)?;
        let target = match self.max_records {
            Some(max) => max.min(total_matching),
            None => total_matching,
        };

        self.timer.set_total(target);
        self.timer.start();
        let started = Instant::now();

        let mut processed = 0;
        let mut updated = 0;
        let mut pages = 0;
        let mut cancelled = false;

        while self.pager.has_next_page(store)? {
            if self.cancel.is_cancelled() {
                cancelled = true;
                break;
            }

            let ids = self.pager.current_page_ids(store)?;
            let mut stop = false;

            for id in ids {
                if self.cancel.is_cancelled() {
                    cancelled = true;
                    stop = true;
                    break;
                }
                if processed >= target {
                    stop = true;
                    break;
                }

                let original = store.load(id)?;
                let mut current = original.clone();

                transform
                    .apply(&mut current)
                    .map_err(|source| SweepError::Transform { id, source })?;

                self.timer.tick();
                processed += 1;
                self.report_progress(processed, target, id);

                if current != original {
                    updated += 1;
                    if self.dry_run {
                        self.reporter.log(&format!("Would update record {id}"));
                    } else {
                        store.persist(&current)?;
                        self.reporter.log(&format!("Updated record {id}"));
                    }
                }
            }

            // The reclaimer runs after every page, partial final pages
            // included; skipping it is the unbounded-growth failure mode.
            pages += 1;
            self.pager.advance();
            self.reclaimer.reset();

            if stop || processed >= target {
                break;
            }
        }

        Ok(RunSummary {
            total_matching,
            target,
            processed,
            updated,
            pages,
            cancelled,
            elapsed: started.elapsed(),
        })
    }

    fn report_progress(&mut self, processed: usize, target: usize, id: RecordId) {
        let percent = self.timer.percent_complete();
        self.reporter
            .log(&format!("{processed} / {target} ({percent:.2}%) | record {id}"));

        if self.eta_interval > 0 && (processed % self.eta_interval == 0 || processed == target) {
            let elapsed = format_duration(self.timer.elapsed());
            let average = format_duration(self.timer.average());
            let remaining = format_duration(self.timer.remaining());
            self.reporter.log(&format!(
                "We've been at this for {elapsed}; averaging {average} per record, about {remaining} to go"
            ));
        }
    }
}
