use serde::Serialize;

use crate::appender::AppendError;

/// Number of data values making up one [`FillRecord`].
pub const FIELD_COUNT: usize = 4;

/// One row of auction fill metrics.
///
/// Values are kept as the caller gave them. Field order is the column order
/// in the output file, so don't reorder these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FillRecord {
    pub fill_amount: String,
    pub time_since_auction_start: String,
    pub now_minus_last_auction_start_time: String,
    pub expected_incentive_amount: String,
}

impl FillRecord {
    pub fn new(
        fill_amount: impl Into<String>,
        time_since_auction_start: impl Into<String>,
        now_minus_last_auction_start_time: impl Into<String>,
        expected_incentive_amount: impl Into<String>,
    ) -> Self {
        Self {
            fill_amount: fill_amount.into(),
            time_since_auction_start: time_since_auction_start.into(),
            now_minus_last_auction_start_time: now_minus_last_auction_start_time.into(),
            expected_incentive_amount: expected_incentive_amount.into(),
        }
    }
}

impl<'a, S: AsRef<str>> std::convert::TryFrom<&'a [S]> for FillRecord {
    type Error = AppendError;

    /// Builds a record from the first four values. Anything after the
    /// fourth value is ignored.
    fn try_from(values: &'a [S]) -> Result<FillRecord, Self::Error> {
        match values {
            [fill, since_start, since_last, incentive, ..] => Ok(Self::new(
                fill.as_ref(),
                since_start.as_ref(),
                since_last.as_ref(),
                incentive.as_ref(),
            )),
            _ => Err(AppendError::MissingValues {
                expected: FIELD_COUNT,
                found: values.len(),
            }),
        }
    }
}
