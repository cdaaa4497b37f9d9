//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! [`Summarizer::summarize`] runs the stages in order, threading artifacts
//! between them and notifying an optional [`PipelineObserver`] at each
//! boundary:
//!
//! 1. Normalize the raw text
//! 2. Segment it into sentences (documents of three sentences or fewer are
//!    returned whole at this point)
//! 3. Tokenize the document (filtered) and every sentence (unfiltered)
//! 4. Count document word frequencies
//! 5. Score sentences with the configured [`Scorer`]
//! 6. Select the top sentences and join them in document order

use std::sync::Arc;

use crate::errors::Result;
use crate::nlp::normalizer::normalize;
use crate::nlp::LanguageResources;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReportBuilder, STAGE_FREQUENCY,
    STAGE_NORMALIZE, STAGE_SCORE, STAGE_SEGMENT, STAGE_SELECT, STAGE_TOKENIZE,
};
use crate::scoring::{FrequencyTable, Scorer, ScoringInput, SentenceScorer};
use crate::summarizer::selector::{join_sentences, TopSentenceSelector};
use crate::types::{Summary, SummarizerConfig, SHORT_DOCUMENT_SENTENCES};

/// Enter a tracing span for a pipeline stage. The span closes at the end of
/// the enclosing block.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::debug_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Summarizer
// ============================================================================

/// Extractive summarizer over shared, read-only language resources.
///
/// Cheap to clone; every call works on request-local data only, so one
/// instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Summarizer {
    resources: Arc<LanguageResources>,
}

impl Summarizer {
    pub fn new(resources: Arc<LanguageResources>) -> Self {
        Self { resources }
    }

    /// Summarizer backed by the English stopword list.
    pub fn english() -> Result<Self> {
        Ok(Self::new(Arc::new(LanguageResources::load("en")?)))
    }

    pub fn resources(&self) -> &LanguageResources {
        &self.resources
    }

    /// Summarize `text`.
    pub fn summarize(&self, text: &str, cfg: &SummarizerConfig) -> Result<Summary> {
        self.summarize_with_observer(text, cfg, &mut NoopObserver)
    }

    /// Summarize `text`, reporting each stage to `observer`.
    ///
    /// The ratio is only validated once the document turns out to be long
    /// enough to need selection; short documents come back whole for any
    /// ratio.
    pub fn summarize_with_observer(
        &self,
        text: &str,
        cfg: &SummarizerConfig,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        let tokenizer = self.resources.tokenizer();

        // Stage 1: Normalize
        let normalized = {
            trace_stage!(STAGE_NORMALIZE);
            observer.on_stage_start(STAGE_NORMALIZE);
            let clock = StageClock::start();
            let normalized = normalize(text);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(normalized.len())
                .build();
            observer.on_stage_end(STAGE_NORMALIZE, &report);
            normalized
        };

        // Stage 2: Segment
        let sentences = {
            trace_stage!(STAGE_SEGMENT);
            observer.on_stage_start(STAGE_SEGMENT);
            let clock = StageClock::start();
            let sentences = tokenizer.sentences(&normalized);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(sentences.len())
                .build();
            observer.on_stage_end(STAGE_SEGMENT, &report);
            observer.on_sentences(&sentences);
            sentences
        };

        if sentences.len() <= SHORT_DOCUMENT_SENTENCES {
            let selected: Vec<usize> = (0..sentences.len()).collect();
            tracing::debug!(sentences = sentences.len(), "short document returned whole");
            return Ok(Summary {
                text: normalized,
                selected,
                sentence_count: sentences.len(),
                short_circuit: true,
            });
        }

        cfg.validate()?;

        // Stage 3: Tokenize
        let (document_words, sentence_words) = {
            trace_stage!(STAGE_TOKENIZE);
            observer.on_stage_start(STAGE_TOKENIZE);
            let clock = StageClock::start();
            let document_words = self.resources.meaningful_words(&normalized);
            let sentence_words: Vec<Vec<String>> = sentences
                .iter()
                .map(|s| tokenizer.words(&s.text))
                .collect();
            let report = StageReportBuilder::new(clock.elapsed())
                .items(document_words.len())
                .build();
            observer.on_stage_end(STAGE_TOKENIZE, &report);
            (document_words, sentence_words)
        };

        // Stage 4: Count frequencies
        let frequencies = {
            trace_stage!(STAGE_FREQUENCY);
            observer.on_stage_start(STAGE_FREQUENCY);
            let clock = StageClock::start();
            let frequencies = FrequencyTable::from_words(&document_words);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(frequencies.distinct())
                .build();
            observer.on_stage_end(STAGE_FREQUENCY, &report);
            observer.on_frequencies(&frequencies);
            frequencies
        };

        // Stage 5: Score
        let scores = {
            trace_stage!(STAGE_SCORE);
            observer.on_stage_start(STAGE_SCORE);
            let clock = StageClock::start();
            let scorer = Scorer::for_method(cfg.method);
            let scores = scorer.score(&ScoringInput {
                sentence_words: &sentence_words,
                frequencies: &frequencies,
                ratio: cfg.ratio,
            });
            let report = StageReportBuilder::new(clock.elapsed())
                .items(scores.len())
                .build();
            observer.on_stage_end(STAGE_SCORE, &report);
            observer.on_scores(&scores);
            scores
        };

        // Stage 6: Select
        let selected = {
            trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let selector = TopSentenceSelector::new(cfg.target_sentences(sentences.len()));
            let selected = selector.select(&scores);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(selected.len())
                .build();
            observer.on_stage_end(STAGE_SELECT, &report);
            selected
        };

        tracing::debug!(
            method = %cfg.method,
            sentences = sentences.len(),
            selected = selected.len(),
            "summarized document"
        );

        Ok(Summary {
            text: join_sentences(&sentences, &selected),
            selected,
            sentence_count: sentences.len(),
            short_circuit: false,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
