//! Loaders for the numeric datasets, returned as feature/target frame
//! pairs with a deterministic train/test split.

use crate::catalog::Dataset;
use crate::error::DatasetError;
use crate::split::{train_test_split, TrainTestSplit};

/// Load the iris flower dataset and split it into train and test sets.
///
/// The target column is `class`; the features are the four sepal/petal
/// measurements.
///
/// ```
/// let split = mlframes::load_iris_df(0.2).unwrap();
///
/// assert_eq!(split.train.n_rows(), 120);
/// assert_eq!(split.test.n_rows(), 30);
/// assert_eq!(split.train.features.width(), 4);
/// ```
pub fn load_iris_df(test_size: f64) -> Result<TrainTestSplit, DatasetError> {
    let df = Dataset::Iris.load_df()?;
    train_test_split(df, "class", test_size)
}

/// Load the 8x8 handwritten-digits dataset and split it into train and
/// test sets. Downloads the data on first use.
///
/// Features are named `pixel_<row>_<col>`; the target column is `class`.
#[cfg(feature = "fetch")]
pub fn digits_df(test_size: f64) -> Result<TrainTestSplit, DatasetError> {
    let mut df = Dataset::Digits.load_df()?;
    df.set_column_names(&digits_column_names())?;
    train_test_split(df, "class", test_size)
}

/// Load the forest cover type dataset and split it into train and test
/// sets. Downloads the data on first use.
///
/// The target column is `cover_type`.
#[cfg(feature = "fetch")]
pub fn covtype_df(test_size: f64) -> Result<TrainTestSplit, DatasetError> {
    let mut df = Dataset::Covtype.load_df()?;
    df.set_column_names(&covtype_column_names())?;
    train_test_split(df, "cover_type", test_size)
}

/// Load the California housing dataset and split it into train and test
/// sets. Downloads the data on first use.
///
/// The target column is `median_house_value`.
#[cfg(feature = "fetch")]
pub fn california_housing_df(
    test_size: f64,
) -> Result<TrainTestSplit, DatasetError> {
    let df = Dataset::CaliforniaHousing.load_df()?;
    train_test_split(df, "median_house_value", test_size)
}

/// The digits mirror has no header: 64 pixel columns in row-major order
/// followed by the label.
#[cfg(any(feature = "fetch", test))]
fn digits_column_names() -> Vec<String> {
    let mut names: Vec<String> = (0..8)
        .flat_map(|r| (0..8).map(move |c| format!("pixel_{r}_{c}")))
        .collect();
    names.push("class".to_owned());
    names
}

/// The covtype mirror has no header: ten terrain measurements, four
/// one-hot wilderness areas, forty one-hot soil types, and the label.
#[cfg(any(feature = "fetch", test))]
fn covtype_column_names() -> Vec<String> {
    let mut names: Vec<String> = [
        "elevation",
        "aspect",
        "slope",
        "horizontal_distance_to_hydrology",
        "vertical_distance_to_hydrology",
        "horizontal_distance_to_roadways",
        "hillshade_9am",
        "hillshade_noon",
        "hillshade_3pm",
        "horizontal_distance_to_fire_points",
    ]
    .iter()
    .map(|name| (*name).to_owned())
    .collect();
    names.extend((0..4).map(|i| format!("wilderness_area_{i}")));
    names.extend((0..40).map(|i| format!("soil_type_{i}")));
    names.push("cover_type".to_owned());
    names
}
