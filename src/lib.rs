#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * SeisBulletin: seismic bulletin production.
 * Authors: Guillaume W. Bres <guillaume.bressaix@gmail.com> et al.
 * This library is shipped under the MPL-2.0 License.
 *
 * Supported exports: ISF / IMS1.0, GSE2.0, Hypo2000 (H71SUMM2K)
 * summary lines and QuakeML 1.2.
 */

pub mod bulletin;
pub mod config;
pub mod diagnostics;
pub mod formatter;
pub mod gse;
pub mod hypo;
pub mod ids;
pub mod isf;
pub mod model;
pub mod query;
pub mod types;
pub mod units;
pub mod writer;

mod error;

#[cfg(test)]
mod tests;

pub use error::{Error, FormattingError, ParsingError, QueryError};

/// Package to include all basic structures
pub mod prelude {
    // export
    pub use crate::{
        bulletin::{Bulletin, Counters, ExportBody, Report},
        config::{ExportOptions, HypoRecordId},
        diagnostics::Diagnostics,
        error::{Error, FormattingError, ParsingError, QueryError},
        ids::{IdGenerator, RecordKind, SequentialIds},
        model::{
            Amplitude, Arrival, CreationInfo, Event, Magnitude, Origin, OriginQuality,
            OriginUncertainty, Pick, StationMagnitude, WaveformStreamId,
        },
        query::{MemoryQuery, Query},
        types::{
            DefiningFlags, DepthFix, EvaluationMode, EvaluationStatus, EventType,
            EventTypeCertainty, Format, Onset, Polarity,
        },
    };

    // pub re-export
    pub use hifitime::Epoch;
}
