use log::debug;
use serde::{Serialize, Deserialize};

/// Kind of member that was renamed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Method,
    Event,
}

/// A member renamed to make room for a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRecord {
    /// Name of the class owning the member
    pub class_name: String,
    
    pub member: MemberKind,
    
    pub old_name: String,
    
    pub new_name: String,
}

/// Write-only destination for rename notifications
pub trait DiagnosticSink {
    fn record_rename(&mut self, record: RenameRecord);
}

/// Sink that keeps every record in order
#[derive(Debug, Default, Clone)]
pub struct RenameLog {
    records: Vec<RenameRecord>,
}

impl RenameLog {
    pub fn new() -> Self {
        Self::default()
    }
    
    pub fn records(&self) -> &[RenameRecord] {
        &self.records
    }
    
    pub fn into_records(self) -> Vec<RenameRecord> {
        self.records
    }
    
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DiagnosticSink for RenameLog {
    fn record_rename(&mut self, record: RenameRecord) {
        debug!(
            "{:?} {}::{} renamed to {}",
            record.member, record.class_name, record.old_name, record.new_name
        );
        self.records.push(record);
    }
}

/// Sink that only logs
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record_rename(&mut self, record: RenameRecord) {
        debug!(
            "{:?} {}::{} renamed to {}",
            record.member, record.class_name, record.old_name, record.new_name
        );
    }
}
