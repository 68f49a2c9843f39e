//! Registry of the example datasets and their materialization into the
//! user's dataset cache.

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use log::info;
use polars::prelude::{CsvReader, DataFrame, SerReader};
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

const IRIS_CSV: &[u8] = include_bytes!("../resources/datasets/iris/data.csv");
const MOVIE_REVIEW_CSV: &[u8] =
    include_bytes!("../resources/datasets/movie_review/data.csv");

const DIGITS_URL: &str = "https://raw.githubusercontent.com/scikit-learn/\
    scikit-learn/main/sklearn/datasets/data/digits.csv.gz";
const COVTYPE_URL: &str = "https://ndownloader.figshare.com/files/5976039";
const CALIFORNIA_HOUSING_URL: &str =
    "https://www.openml.org/data/get_csv/52739/houses.csv";

/// Where a dataset's bytes come from before they land in the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// CSV shipped with the crate under `resources/datasets`.
    Shipped(&'static [u8]),
    /// CSV (possibly gzipped) fetched from a public mirror on first use.
    Remote(&'static str),
}

/// The datasets this crate knows how to load.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    /// Fisher's iris flowers: 150 rows, four measurements and a species
    Iris,
    /// 8x8 grayscale handwritten digits: 1797 rows, 64 pixels and a label
    Digits,
    /// Forest cover type: 581,012 rows of cartographic features
    Covtype,
    /// California housing: 20,640 census block groups
    CaliforniaHousing,
    /// Short movie-review snippets labeled `pos`/`neg`
    MovieReview,
}

impl std::str::FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iris" => Ok(Self::Iris),
            "digits" => Ok(Self::Digits),
            "covtype" => Ok(Self::Covtype),
            "california_housing" => Ok(Self::CaliforniaHousing),
            "movie_review" => Ok(Self::MovieReview),
            _ => Err(format!("cannot parse '{s}' as Dataset")),
        }
    }
}

impl Dataset {
    pub const ALL: [Dataset; 5] = [
        Dataset::Iris,
        Dataset::Digits,
        Dataset::Covtype,
        Dataset::CaliforniaHousing,
        Dataset::MovieReview,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dataset::Iris => "iris",
            Dataset::Digits => "digits",
            Dataset::Covtype => "covtype",
            Dataset::CaliforniaHousing => "california_housing",
            Dataset::MovieReview => "movie_review",
        }
    }

    pub fn source(self) -> Source {
        match self {
            Dataset::Iris => Source::Shipped(IRIS_CSV),
            Dataset::Digits => Source::Remote(DIGITS_URL),
            Dataset::Covtype => Source::Remote(COVTYPE_URL),
            Dataset::CaliforniaHousing => {
                Source::Remote(CALIFORNIA_HOUSING_URL)
            }
            Dataset::MovieReview => Source::Shipped(MOVIE_REVIEW_CSV),
        }
    }

    /// Whether the source CSV carries a header row. The digits and covtype
    /// mirrors ship bare data; their columns are named after parsing.
    pub(crate) fn has_header(self) -> bool {
        !matches!(self, Dataset::Digits | Dataset::Covtype)
    }

    /// Where the dataset lives in the user's cache. The file may hold
    /// gzipped bytes for remote sources; the CSV reader detects that from
    /// the content, not the extension.
    pub fn cache_path(self) -> Result<PathBuf, DatasetError> {
        let dir = datasets_dir()?.join(self.name());
        Ok(dir.join("data.csv"))
    }

    /// Materialize the dataset in the cache, writing shipped bytes or
    /// downloading the remote file on first use.
    pub fn ensure(self) -> Result<PathBuf, DatasetError> {
        let path = self.cache_path()?;
        if path.exists() {
            return Ok(path);
        }
        if let Some(dir) = path.parent() {
            create_dir_all(dir)?;
        }
        match self.source() {
            Source::Shipped(bytes) => {
                info!("writing shipped `{}` data to {:?}", self.name(), path);
                let tmp = path.with_extension("part");
                std::fs::write(&tmp, bytes)?;
                std::fs::rename(&tmp, &path)?;
            }
            Source::Remote(url) => {
                #[cfg(feature = "fetch")]
                crate::fetch::download(url, &path)?;
                #[cfg(not(feature = "fetch"))]
                return Err(DatasetError::FetchDisabled {
                    name: self.name(),
                    url,
                });
            }
        }
        Ok(path)
    }

    /// Materialize the dataset and parse it into a raw `DataFrame`, column
    /// names untouched.
    pub fn load_df(self) -> Result<DataFrame, DatasetError> {
        let path = self.ensure()?;
        read_csv(&path, self.has_header())
    }
}

pub(crate) fn read_csv(
    path: &Path,
    has_header: bool,
) -> Result<DataFrame, DatasetError> {
    let df = CsvReader::from_path(path)?
        .infer_schema(Some(1000))
        .has_header(has_header)
        .finish()?;
    Ok(df)
}

/// Creates and returns the dataset cache directory
fn datasets_dir() -> Result<PathBuf, DatasetError> {
    let dir: PathBuf = dirs::data_dir()
        .map(|dir| dir.join("mlframes").join("datasets"))
        .ok_or(DatasetError::CouldNotGetDataDirectory)?;

    create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Write;
    use std::str::FromStr;

    #[test]
    fn every_dataset_name_round_trips_through_from_str() {
        for dataset in Dataset::ALL {
            assert_eq!(Dataset::from_str(dataset.name()), Ok(dataset));
        }
    }

    #[test]
    fn unknown_dataset_name_fails_to_parse() {
        let err = Dataset::from_str("animals").unwrap_err();
        assert_eq!(err, "cannot parse 'animals' as Dataset");
    }

    #[test]
    fn cache_paths_are_namespaced_per_dataset() {
        let path = Dataset::Iris.cache_path().unwrap();
        assert!(path.ends_with(
            Path::new("mlframes").join("datasets").join("iris").join("data.csv")
        ));
    }

    #[test]
    fn shipped_iris_bytes_hold_the_full_table() {
        // 150 data rows plus a header
        let n_lines = IRIS_CSV.iter().filter(|&&b| b == b'\n').count();
        assert_eq!(n_lines, 151);
    }

    #[test]
    fn read_csv_parses_with_and_without_header() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            indoc! {"
                a,b
                1,2.5
                3,4.0
            "}
            .as_bytes(),
        )
        .unwrap();

        let df = read_csv(file.path(), true).unwrap();
        assert_eq!(df.shape(), (2, 2));
        assert_eq!(df.get_column_names(), vec!["a", "b"]);

        let df = read_csv(file.path(), false).unwrap();
        assert_eq!(df.shape(), (3, 2));
    }
}
