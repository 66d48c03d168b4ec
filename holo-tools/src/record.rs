//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::Bytes;
use holo_isis_filter::{Inspection, Outcome, Verdict};
use serde::{Deserialize, Serialize};

use crate::error::Error;

// Captured frame, as stored in a record file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameRecord {
    pub frame: Bytes,
    #[serde(default)]
    pub description: Option<String>,
}

// Per-frame replay report.
#[derive(Debug, Serialize)]
pub struct FrameReport<'a> {
    pub index: usize,
    pub description: Option<&'a str>,
    pub verdict: Verdict,
    pub outcome: Outcome,
    pub tlvs: usize,
}

// Replay statistics.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Summary {
    pub frames: usize,
    pub passed: usize,
    pub dropped: usize,
}

// ===== impl FrameRecord =====

impl FrameRecord {
    // Parses a single line of a record file. Blank lines yield nothing.
    pub(crate) fn parse(
        line_no: usize,
        line: &str,
    ) -> Result<Option<FrameRecord>, Error> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(line)
            .map(Some)
            .map_err(|error| Error::RecordParse {
                line: line_no,
                error,
            })
    }
}

// ===== impl FrameReport =====

impl<'a> FrameReport<'a> {
    pub(crate) fn new(
        index: usize,
        record: &'a FrameRecord,
        inspection: &Inspection,
    ) -> FrameReport<'a> {
        FrameReport {
            index,
            description: record.description.as_deref(),
            verdict: inspection.verdict(),
            outcome: inspection.outcome,
            tlvs: inspection.tlvs,
        }
    }
}

impl std::fmt::Display for FrameReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} tlvs={} {}",
            self.index, self.verdict, self.tlvs, self.outcome
        )
    }
}

// ===== impl Summary =====

impl Summary {
    pub(crate) fn add(&mut self, verdict: Verdict) {
        self.frames += 1;
        match verdict {
            Verdict::Pass => self.passed += 1,
            Verdict::Drop => self.dropped += 1,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "frames: {}, passed: {}, dropped: {}",
            self.frames, self.passed, self.dropped
        )
    }
}
