use wardscore_core::models::observation::Observation;
use wardscore_core::models::parameter::ParameterKind;
use wardscore_engine::evaluate::evaluate;
use wardscore_engine::scoring::{Evaluation, ScoringModes};

use crate::error::BoardError;

/// One patient slot on the board.
#[derive(Debug, Clone)]
pub struct Row {
    /// Free-text bed label. Usually numeric, but wards relabel beds.
    pub bed: String,
    pub observation: Observation,
}

/// The observation board: an ordered list of bed rows. Rows have no
/// identity beyond their position and label, and nothing here persists.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub rows: Vec<Row>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty row; returns its bed label. The label is one past the
    /// last numeric bed, scanning from the end and skipping relabelled
    /// beds.
    pub fn add_row(&mut self) -> String {
        let bed = self.next_bed().to_string();
        self.rows.push(Row {
            bed: bed.clone(),
            observation: Observation::default(),
        });
        tracing::info!(bed = %bed, "row added");
        bed
    }

    fn next_bed(&self) -> u32 {
        for row in self.rows.iter().rev() {
            if let Ok(n) = row.bed.trim().parse::<u32>() {
                return n + 1;
            }
        }
        1
    }

    pub fn remove_row(&mut self, bed: &str) -> Result<(), BoardError> {
        let idx = self.index_of(bed)?;
        self.rows.remove(idx);
        tracing::info!(bed = %bed, "row removed");
        Ok(())
    }

    pub fn rename_bed(&mut self, bed: &str, label: &str) -> Result<(), BoardError> {
        let idx = self.index_of(bed)?;
        self.rows[idx].bed = label.to_string();
        Ok(())
    }

    /// Write one field of one row from raw text.
    pub fn set_field(
        &mut self,
        bed: &str,
        kind: ParameterKind,
        raw: &str,
    ) -> Result<(), BoardError> {
        let idx = self.index_of(bed)?;
        self.rows[idx].observation.set(kind, raw)?;
        Ok(())
    }

    /// Wipe every field of every row. Rows and bed labels stay.
    pub fn clear_values(&mut self) {
        for row in &mut self.rows {
            row.observation = Observation::default();
        }
    }

    /// Score every row. Recomputation is full and idempotent; rows never
    /// influence each other.
    pub fn evaluations(&self, modes: ScoringModes) -> Vec<Evaluation> {
        self.rows
            .iter()
            .map(|r| evaluate(&r.observation, modes))
            .collect()
    }

    fn index_of(&self, bed: &str) -> Result<usize, BoardError> {
        self.rows
            .iter()
            .position(|r| r.bed == bed)
            .ok_or_else(|| BoardError::UnknownBed(bed.to_string()))
    }
}
