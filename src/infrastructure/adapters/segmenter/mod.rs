//! Segmenter Adapter - 基于标题规则的分章实现

mod heuristic_segmenter;

pub use heuristic_segmenter::HeuristicChapterSegmenter;
