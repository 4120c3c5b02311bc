// ==========================================
// Medicine Import - import pipeline
// ==========================================
// Responsibility: one import run, from file to store
// Flow: Idle → Loading → Iterating → Persisting → Done (or Failed)
// ==========================================

use crate::config::{ImportConfig, MidStrategy};
use crate::domain::product::{
    ImportOutcome, ImportRecord, ImportReport, RawRow, RejectReason, RowRejection,
};
use crate::domain::sheet::{CellValue, SheetGrid};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_extractor::FieldExtractor;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::id_generator::{RandomMidGenerator, SequentialMidGenerator};
use crate::importer::product_importer_trait::{
    DataCleaner as DataCleanerTrait, FieldExtractor as FieldExtractorTrait,
    FieldMapper as FieldMapperTrait, FileParser, IdentifierGenerator, ProductImporter,
    RowValidator as RowValidatorTrait,
};
use crate::importer::row_validator::RowValidator;
use crate::repository::ProductRepository;
use chrono::Utc;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// PipelineState
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipelineState {
    Idle,
    Loading,
    Iterating,
    Persisting,
    Done,
    Failed,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineState::Idle => "IDLE",
            PipelineState::Loading => "LOADING",
            PipelineState::Iterating => "ITERATING",
            PipelineState::Persisting => "PERSISTING",
            PipelineState::Done => "DONE",
            PipelineState::Failed => "FAILED",
        };
        f.write_str(name)
    }
}

/// Records and rejections collected while iterating the grid
#[derive(Debug, Default)]
pub struct TransformedBatch {
    pub records: Vec<ImportRecord>,
    pub skipped: Vec<RowRejection>,
    pub total_rows: usize,
}

// ==========================================
// ImportPipeline
// ==========================================
pub struct ImportPipeline<R>
where
    R: ProductRepository,
{
    // run configuration
    config: ImportConfig,

    // document store
    repo: R,

    // stage components
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapperTrait>,
    data_cleaner: Box<dyn DataCleanerTrait>,
    field_extractor: Box<dyn FieldExtractorTrait>,
    row_validator: Box<dyn RowValidatorTrait>,
    id_generator: Box<dyn IdentifierGenerator>,

    state: PipelineState,
}

impl<R> ImportPipeline<R>
where
    R: ProductRepository,
{
    /// Create a pipeline from explicit components
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: ImportConfig,
        repo: R,
        file_parser: Box<dyn FileParser>,
        field_mapper: Box<dyn FieldMapperTrait>,
        data_cleaner: Box<dyn DataCleanerTrait>,
        field_extractor: Box<dyn FieldExtractorTrait>,
        row_validator: Box<dyn RowValidatorTrait>,
        id_generator: Box<dyn IdentifierGenerator>,
    ) -> Self {
        Self {
            config,
            repo,
            file_parser,
            field_mapper,
            data_cleaner,
            field_extractor,
            row_validator,
            id_generator,
            state: PipelineState::Idle,
        }
    }

    /// Standard components; the mid generator follows `config.mid_strategy`
    ///
    /// `MidStrategy::Sequential` reads the store's current maximum mid, so a
    /// store failure here surfaces as an error before any file is read.
    pub async fn with_defaults(config: ImportConfig, repo: R) -> ImportResult<Self> {
        let id_generator: Box<dyn IdentifierGenerator> = match config.mid_strategy {
            MidStrategy::Random => Box::new(RandomMidGenerator),
            MidStrategy::Sequential => {
                let current_max = repo.max_mid().await?;
                debug!(?current_max, "seeding sequential mid generator");
                Box::new(SequentialMidGenerator::seeded_from(current_max))
            }
        };

        Ok(Self::new(
            config,
            repo,
            Box::new(UniversalFileParser),
            Box::new(FieldMapper),
            Box::new(DataCleaner),
            Box::new(FieldExtractor),
            Box::new(RowValidator::default()),
            id_generator,
        ))
    }

    /// Replace the file parser (e.g. a fixed grid in tests)
    pub fn with_file_parser(mut self, file_parser: Box<dyn FileParser>) -> Self {
        self.file_parser = file_parser;
        self
    }

    /// Replace the mid generator
    pub fn with_id_generator(mut self, id_generator: Box<dyn IdentifierGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn transition(&mut self, next: PipelineState) {
        debug!(from = %self.state, to = %next, "pipeline state");
        self.state = next;
    }

    /// Build the ImportRecord of an eligible row
    fn build_record(&self, row: &RawRow) -> ImportResult<ImportRecord> {
        let text = |cell: &Option<CellValue>| {
            cell.as_ref().map(|c| c.as_text()).unwrap_or_default()
        };

        let price = self
            .field_extractor
            .coerce_price(row.mrp.as_ref())
            .ok_or_else(|| ImportError::RowIneligible {
                row: row.row_number,
                reason: "price missing or not numeric".to_string(),
            })?;

        Ok(ImportRecord {
            medicine_name: self.data_cleaner.normalize(&text(&row.product_name)),
            price,
            supplier_name: self.data_cleaner.normalize(&text(&row.supplier_name)),
            sgst: self.field_extractor.extract_rate(row.gst_text.as_ref()),
            mid: self.id_generator.generate()?,
        })
    }

    /// Iterating stage: every data row in ascending order
    pub fn transform_grid(&self, grid: &SheetGrid) -> ImportResult<TransformedBatch> {
        let mut batch = TransformedBatch::default();
        let mut issued_mids = HashSet::new();

        for row_index in grid.data_row_indexes() {
            batch.total_rows += 1;
            let raw = self
                .field_mapper
                .map_row(grid, row_index, &self.config.columns);

            if let Err(rejection) = self.row_validator.check(&raw) {
                let err = ImportError::RowIneligible {
                    row: rejection.row_number,
                    reason: rejection.reason_text(),
                };
                warn!(
                    row = raw.row_number,
                    product_name = ?raw.product_name,
                    mrp = ?raw.mrp,
                    supplier_name = ?raw.supplier_name,
                    gst = ?raw.gst_text,
                    "skipping row: {}", err
                );
                batch.skipped.push(rejection);
                continue;
            }

            let record = match self.build_record(&raw) {
                Ok(record) => record,
                Err(e) if e.is_row_level() => {
                    warn!(row = raw.row_number, error = %e, "skipping row");
                    batch.skipped.push(RowRejection {
                        row_number: raw.row_number,
                        reasons: vec![RejectReason::Unconvertible],
                        raw,
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };

            if !issued_mids.insert(record.mid) {
                warn!(
                    row = raw.row_number,
                    mid = record.mid,
                    "mid already issued earlier in this run"
                );
            }
            batch.records.push(record);
        }

        Ok(batch)
    }

    async fn run_stages(&mut self, run_id: &str) -> ImportResult<(TransformedBatch, usize)> {
        // === Loading ===
        self.transition(PipelineState::Loading);
        let grid = self
            .file_parser
            .parse_to_grid(&self.config.file_path, self.config.sheet_index)
            .map_err(|e| {
                error!(error = %e, "reading spreadsheet failed");
                e
            })?;
        info!(data_rows = grid.data_row_count(), "spreadsheet loaded");

        // === Iterating ===
        self.transition(PipelineState::Iterating);
        let batch = self.transform_grid(&grid)?;
        info!(
            total = batch.total_rows,
            valid = batch.records.len(),
            skipped = batch.skipped.len(),
            "rows transformed"
        );

        // === Persisting ===
        self.transition(PipelineState::Persisting);
        if batch.records.is_empty() {
            info!(run_id, "no valid data to insert");
            return Ok((batch, 0));
        }

        let inserted = self
            .repo
            .insert_many(batch.records.clone())
            .await
            .map_err(|e| {
                error!(error = %e, batch_size = batch.records.len(), "bulk insert failed");
                ImportError::PersistError(e.to_string())
            })?;

        Ok((batch, inserted))
    }
}

#[async_trait::async_trait]
impl<R> ProductImporter for ImportPipeline<R>
where
    R: ProductRepository,
{
    #[instrument(skip(self))]
    async fn run(&mut self) -> ImportResult<ImportReport> {
        let start_time = Instant::now();
        let started_at = Utc::now();
        let run_id = Uuid::new_v4().to_string();
        info!(
            run_id = %run_id,
            file = %self.config.file_path.display(),
            sheet_index = self.config.sheet_index,
            "import started"
        );

        let (batch, inserted) = match self.run_stages(&run_id).await {
            Ok(result) => result,
            Err(e) => {
                self.transition(PipelineState::Failed);
                return Err(e);
            }
        };
        self.transition(PipelineState::Done);

        let outcome = if batch.records.is_empty() {
            ImportOutcome::NoValidData
        } else {
            ImportOutcome::Inserted(inserted)
        };

        let report = ImportReport {
            run_id,
            file_path: self.config.file_path.display().to_string(),
            total_rows: batch.total_rows,
            inserted,
            skipped: batch.skipped,
            outcome,
            started_at,
            elapsed_ms: start_time.elapsed().as_millis(),
        };

        info!(
            run_id = %report.run_id,
            total = report.total_rows,
            inserted = report.inserted,
            skipped = report.skipped_count(),
            elapsed_ms = report.elapsed_ms,
            "import finished"
        );
        Ok(report)
    }
}
