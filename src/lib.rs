//! Example-dataset loaders that return [polars](polars) `DataFrame`s.
//!
//! The crate root presents a flattened import surface over the loader
//! modules: the four numeric loaders live in [`tabular`] and the sentiment
//! corpus in [`movie_review`], but all five are importable directly from
//! the root.
//!
//! # Example
//!
//! Load the iris dataset and take the default-style 80/20 split. The split
//! is seeded, so repeated calls return the same partitions.
//!
//! ```rust
//! use mlframes::load_iris_df;
//!
//! let split = load_iris_df(0.2).unwrap();
//!
//! assert_eq!(split.train.n_rows(), 120);
//! assert_eq!(split.test.n_rows(), 30);
//! assert_eq!(
//!     split.train.features.get_column_names(),
//!     vec!["sepal_length", "sepal_width", "petal_length", "petal_width"],
//! );
//! ```
//!
//! The movie-review corpus comes back unsplit, as one frame of review
//! snippets and one frame of `pos`/`neg` labels.
//!
//! ```rust
//! use mlframes::load_movie_review;
//!
//! let reviews = load_movie_review().unwrap();
//! assert_eq!(reviews.features.height(), reviews.target.height());
//! assert!(reviews.n_rows() > 0);
//! ```
//!
//! The remaining loaders download their data on first use and cache it
//! under the user data directory, so the first call may take a while.
//!
//! ```rust,no_run
//! use mlframes::covtype_df;
//!
//! let split = covtype_df(0.2).unwrap();
//! assert_eq!(split.train.features.width(), 54);
//! ```
#![warn(unused_extern_crates)]
#![warn(
    clippy::all,
    clippy::imprecise_flops,
    clippy::suboptimal_flops,
    clippy::unseparated_literal_suffix,
    clippy::unreadable_literal,
    clippy::option_option,
    clippy::implicit_clone,
    clippy::perf
)]

pub mod catalog;
pub mod error;
#[cfg(feature = "fetch")]
mod fetch;
pub mod movie_review;
pub mod prelude;
mod split;
pub mod tabular;

pub use catalog::Dataset;
pub use error::DatasetError;
pub use split::{TrainTestSplit, XyFrames};

pub use movie_review::load_movie_review;
#[cfg(feature = "fetch")]
pub use tabular::{california_housing_df, covtype_df, digits_df};
pub use tabular::load_iris_df;
