// SPDX-License-Identifier: MIT

mod types;

pub use types::{
    CoreVerifyOptions, Finding, ReportDisplayOpts, Severity, VerifierOptionsLike, VerifyPhases,
    VerifyReport,
};

pub use crate::core::errors::{FsCheckerError, FsCheckerResult};

/// Trait for verifying the integrity of a filesystem image.
///
/// Implemented per filesystem to run its consistency phases in a fixed
/// order. With `fail_fast` set (the default), a phase that records an
/// error finding stops every later phase, so the report carries exactly
/// the first violation encountered.
pub trait FsChecker {
    type Options: VerifierOptionsLike + Default;

    fn check_with(&mut self, opt: &Self::Options) -> FsCheckerResult<VerifyReport> {
        let mut rep = VerifyReport::default();
        self.run_phase(opt, &mut rep, VerifyPhases::INODES, Self::check_inodes)?;
        self.run_phase(opt, &mut rep, VerifyPhases::USAGE, Self::check_usage)?;
        self.run_phase(opt, &mut rep, VerifyPhases::TREE, Self::check_tree)?;
        Ok(rep)
    }

    fn check_all(&mut self) -> FsCheckerResult<VerifyReport> {
        self.check_with(&Self::Options::default())
    }

    /// Per-record local validation.
    fn check_inodes(
        &mut self,
        _opt: &Self::Options,
        _rep: &mut VerifyReport,
    ) -> FsCheckerResult<()> {
        Ok(())
    }

    /// Whole-image aggregate audit.
    fn check_usage(
        &mut self,
        _opt: &Self::Options,
        _rep: &mut VerifyReport,
    ) -> FsCheckerResult<()> {
        Ok(())
    }

    /// Hierarchy traversal and reference audit.
    fn check_tree(&mut self, _opt: &Self::Options, _rep: &mut VerifyReport) -> FsCheckerResult<()> {
        Ok(())
    }

    fn run_phase<F>(
        &mut self,
        opt: &Self::Options,
        rep: &mut VerifyReport,
        phase: VerifyPhases,
        f: F,
    ) -> FsCheckerResult<()>
    where
        F: Fn(&mut Self, &Self::Options, &mut VerifyReport) -> FsCheckerResult<()>,
    {
        if opt.fail_fast() && rep.has_error() {
            return Ok(());
        }
        if opt.phases().contains(phase) {
            f(self, opt, rep)?;
        }
        Ok(())
    }
}
