mod scorer;

pub use scorer::SeriesScorer;
