use super::entities::ApplianceInputs;
use super::evaluation::{evaluate, EvaluationError, RoiOutcome};
use super::region::RegionalProfile;
use super::tables::ConstantTable;

/// Calculator state for one user session.
///
/// Keeps the last outcome and only recomputes when the inputs, tables or
/// region changed.
#[derive(Clone, Debug)]
pub struct CalculatorSession {
    tables: ConstantTable,
    regional: RegionalProfile,
    last: Option<(ApplianceInputs, RoiOutcome)>,
    evaluations: u64,
}

impl CalculatorSession {
    pub fn new(tables: ConstantTable, regional: RegionalProfile) -> Self {
        Self {
            tables,
            regional,
            last: None,
            evaluations: 0,
        }
    }

    pub fn tables(&self) -> &ConstantTable {
        &self.tables
    }

    pub fn regional(&self) -> &RegionalProfile {
        &self.regional
    }

    pub fn set_tables(&mut self, tables: ConstantTable) {
        if tables != self.tables {
            self.tables = tables;
            self.last = None;
        }
    }

    pub fn set_regional(&mut self, regional: RegionalProfile) {
        if regional != self.regional {
            self.regional = regional;
            self.last = None;
        }
    }

    pub fn evaluate(&mut self, inputs: &ApplianceInputs) -> Result<&RoiOutcome, EvaluationError> {
        let (_, outcome) = match self.last.take() {
            Some(entry) if entry.0 == *inputs => self.last.insert(entry),
            _ => {
                let outcome = evaluate(inputs, &self.tables, &self.regional)?;
                self.evaluations += 1;
                self.last.insert((inputs.clone(), outcome))
            }
        };
        Ok(outcome)
    }

    /// Last computed outcome, if any.
    pub fn last_outcome(&self) -> Option<&RoiOutcome> {
        self.last.as_ref().map(|(_, outcome)| outcome)
    }

    /// Number of times the engine actually ran.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(ConstantTable::default(), RegionalProfile::default())
    }
}
