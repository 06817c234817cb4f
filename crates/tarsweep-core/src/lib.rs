//! Sequential batch extraction of tar archives.
//!
//! `tarsweep-core` finds every archive in a directory whose file name matches
//! a glob-style pattern and unpacks each one into that same directory, one at
//! a time, in file name order. Progress is reported through a
//! [`RunObserver`], and a [`FailurePolicy`] decides whether the first broken
//! archive stops the run or the remaining archives are still attempted.
//!
//! # Examples
//!
//! ```no_run
//! use tarsweep_core::RunnerConfig;
//! use tarsweep_core::extract_all;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RunnerConfig::default().with_directory("archives");
//! let report = extract_all(&config)?;
//! println!("Extracted {} archives", report.archives_extracted());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod discovery;
pub mod error;
pub mod extractor;
pub mod report;
pub mod runner;

#[cfg(test)]
pub(crate) mod test_utils;

pub use api::extract_all;
pub use api::extract_all_with_observer;
pub use config::ArchivePattern;
pub use config::FailurePolicy;
pub use config::RunnerConfig;
pub use error::ExtractionError;
pub use error::Result;
pub use error::RunError;
pub use extractor::Extractor;
pub use extractor::TarExtractor;
pub use report::ArchiveOutcome;
pub use report::ExtractionReport;
pub use report::NoopObserver;
pub use report::RunObserver;
pub use report::RunReport;
pub use runner::Runner;
