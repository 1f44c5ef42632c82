use serde::Serialize;

/// Parsed calculator input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayInput {
    pub hours: f64,
    pub rate: f64,
    pub deduction_percent: f64,
}

/// Gross and net pay for one calculation. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayResult {
    pub gross: f64,
    pub net: f64,
}

impl PayResult {
    pub fn deducted(&self) -> f64 {
        self.gross - self.net
    }
}
