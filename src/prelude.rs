//! Common import for general use.

pub use crate::{
    load_iris_df, load_movie_review, Dataset, DatasetError, TrainTestSplit,
    XyFrames,
};

#[cfg(feature = "fetch")]
pub use crate::{california_housing_df, covtype_df, digits_df};
