//! Feature/target frames and deterministic train/test splitting.

use polars::prelude::{DataFrame, IdxCa};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

use crate::error::DatasetError;

/// Fixed shuffle seed so repeated loads return identical splits.
pub(crate) const SPLIT_SEED: u64 = 1337;

/// A dataset as a frame of features and a one-column frame of targets.
#[derive(Clone, Debug)]
pub struct XyFrames {
    pub features: DataFrame,
    pub target: DataFrame,
}

impl XyFrames {
    /// Pull `target_col` out of `df` into its own one-column frame.
    pub(crate) fn from_df(
        mut df: DataFrame,
        target_col: &str,
    ) -> Result<Self, DatasetError> {
        let target = df.drop_in_place(target_col)?;
        Ok(XyFrames {
            features: df,
            target: DataFrame::new(vec![target])?,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.features.height()
    }
}

/// Train and test partitions of a dataset.
#[derive(Clone, Debug)]
pub struct TrainTestSplit {
    pub train: XyFrames,
    pub test: XyFrames,
}

/// Shuffle the rows of `df` with a seeded RNG and carve off
/// `ceil(n * test_size)` of them as the test partition.
pub(crate) fn train_test_split(
    df: DataFrame,
    target_col: &str,
    test_size: f64,
) -> Result<TrainTestSplit, DatasetError> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(DatasetError::InvalidTestSize(test_size));
    }

    let n = df.height();
    let n_test = ((n as f64) * test_size).ceil() as usize;

    let mut ixs: Vec<u32> = (0..n as u32).collect();
    let mut rng = Xoshiro256Plus::seed_from_u64(SPLIT_SEED);
    ixs.shuffle(&mut rng);

    let test_ixs = IdxCa::from_vec("ix", ixs[..n_test].to_vec());
    let train_ixs = IdxCa::from_vec("ix", ixs[n_test..].to_vec());

    let test = df.take(&test_ixs)?;
    let train = df.take(&train_ixs)?;

    Ok(TrainTestSplit {
        train: XyFrames::from_df(train, target_col)?,
        test: XyFrames::from_df(test, target_col)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    fn toy_df(n: usize) -> DataFrame {
        let xs: Vec<i64> = (0..n as i64).collect();
        let ys: Vec<i64> = (0..n as i64).map(|i| i % 2).collect();
        DataFrame::new(vec![
            Series::new("x", xs),
            Series::new("label", ys),
        ])
        .unwrap()
    }

    #[test]
    fn partition_sizes_follow_ceil_of_test_size() {
        let split = train_test_split(toy_df(10), "label", 0.25).unwrap();
        assert_eq!(split.test.n_rows(), 3);
        assert_eq!(split.train.n_rows(), 7);
    }

    #[test]
    fn target_column_is_removed_from_features() {
        let split = train_test_split(toy_df(10), "label", 0.2).unwrap();
        assert_eq!(split.train.features.get_column_names(), vec!["x"]);
        assert_eq!(split.train.target.get_column_names(), vec!["label"]);
        assert_eq!(
            split.train.target.height(),
            split.train.features.height()
        );
    }

    #[test]
    fn splits_are_deterministic_across_calls() {
        let a = train_test_split(toy_df(64), "label", 0.5).unwrap();
        let b = train_test_split(toy_df(64), "label", 0.5).unwrap();

        let xs = |xy: &XyFrames| -> Vec<i64> {
            xy.features
                .column("x")
                .unwrap()
                .i64()
                .unwrap()
                .into_iter()
                .flatten()
                .collect()
        };

        assert_eq!(xs(&a.train), xs(&b.train));
        assert_eq!(xs(&a.test), xs(&b.test));
    }

    #[test]
    fn train_and_test_rows_are_disjoint_and_exhaustive() {
        let split = train_test_split(toy_df(32), "label", 0.25).unwrap();
        let mut xs: Vec<i64> = split
            .train
            .features
            .column("x")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .chain(
                split.test.features.column("x").unwrap().i64().unwrap(),
            )
            .flatten()
            .collect();
        xs.sort_unstable();
        assert_eq!(xs, (0..32).collect::<Vec<i64>>());
    }

    #[test]
    fn out_of_range_test_sizes_are_rejected() {
        for bad in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let res = train_test_split(toy_df(10), "label", bad);
            assert!(matches!(
                res,
                Err(DatasetError::InvalidTestSize(_))
            ));
        }
    }

    #[test]
    fn missing_target_column_is_a_polars_error() {
        let res = train_test_split(toy_df(10), "species", 0.2);
        assert!(matches!(res, Err(DatasetError::Polars(_))));
    }
}
