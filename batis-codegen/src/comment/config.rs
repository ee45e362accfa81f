//! Comment hook configuration.

use batis_schema::CommentOptions;

use crate::timestamp::{DateFormat, InvalidDateFormat};

/// Process-wide configuration of the comment/annotation hook.
///
/// Built once from the manifest's `[comments]` table at configuration-load
/// time (which is where an invalid date format fails), then read-only for
/// the rest of the run.
#[derive(Debug, Clone, Default)]
pub struct CommentConfig {
    /// Omit timestamps everywhere, making output reproducible across runs.
    pub suppress_date: bool,
    /// Omit every documentation line; marker annotations are still attached.
    pub suppress_all_comments: bool,
    /// Include table/column remarks in documentation lines.
    pub add_remark_comments: bool,
    /// Emit a provenance header at the top of each generated file.
    pub add_file_header: bool,
    /// Timestamp format.
    pub date_format: DateFormat,
}

impl CommentConfig {
    /// Build the configuration from raw manifest options, validating the
    /// custom date format eagerly.
    pub fn from_options(options: &CommentOptions) -> Result<Self, InvalidDateFormat> {
        let date_format = match &options.date_format {
            Some(pattern) => DateFormat::pattern(pattern)?,
            None => DateFormat::Iso8601,
        };
        Ok(Self {
            suppress_date: options.suppress_date,
            suppress_all_comments: options.suppress_all_comments,
            add_remark_comments: options.add_remark_comments,
            add_file_header: options.add_file_header,
            date_format,
        })
    }
}
