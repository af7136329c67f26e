mod merge;

pub use self::merge::merge;
