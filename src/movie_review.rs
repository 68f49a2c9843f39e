//! The movie-review sentiment corpus.

use crate::catalog::Dataset;
use crate::error::DatasetError;
use crate::split::XyFrames;

/// Load the movie-review corpus as feature and target frames.
///
/// `features` holds one Utf8 column, `review`; `target` holds one Utf8
/// column, `sentiment`, with values `pos` and `neg`. The corpus ships
/// with the crate, so no download happens.
///
/// ```
/// let reviews = mlframes::load_movie_review().unwrap();
///
/// assert_eq!(reviews.features.get_column_names(), vec!["review"]);
/// assert_eq!(reviews.target.get_column_names(), vec!["sentiment"]);
/// ```
pub fn load_movie_review() -> Result<XyFrames, DatasetError> {
    let df = Dataset::MovieReview.load_df()?;
    XyFrames::from_df(df, "sentiment")
}
